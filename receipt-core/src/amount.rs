//! Rent amount text handling.
//!
//! Amounts typed into the form use the same conventions as the rest of the
//! input layer: surrounding whitespace is ignored, `,` is accepted as a
//! thousands separator and an empty entry means "not entered yet".

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer};

use crate::error::FormError;

fn normalize_amount_input(s: &str) -> String {
    s.trim().replace(',', "")
}

/// Parses a rent amount entry.
///
/// Returns `Ok(None)` for empty or whitespace-only input and an error for
/// anything else that is not a decimal number.
pub fn parse_amount(s: &str) -> Result<Option<Decimal>, FormError> {
    let normalized = normalize_amount_input(s);
    if normalized.is_empty() {
        return Ok(None);
    }
    normalized
        .parse()
        .map(Some)
        .map_err(|e| FormError::InvalidAmount {
            input: s.to_string(),
            source: e,
        })
}

/// Formats an optional amount for display, using "—" when it was never entered.
pub fn amount_display(amount: &Option<Decimal>) -> String {
    amount
        .as_ref()
        .map(|v| v.to_string())
        .unwrap_or_else(|| "—".to_string())
}

#[derive(Deserialize)]
#[serde(untagged)]
enum AmountInput {
    Text(String),
    Number(Decimal),
}

/// Serde helper for amount fields: accepts a number or a text entry.
///
/// Text goes through [`parse_amount`], so `""` deserializes to `None`.
pub(crate) fn deserialize_amount<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
where
    D: Deserializer<'de>,
{
    match AmountInput::deserialize(deserializer)? {
        AmountInput::Number(value) => Ok(Some(value)),
        AmountInput::Text(text) => parse_amount(&text).map_err(serde::de::Error::custom),
    }
}

/// Like [`deserialize_amount`] but for patch fields, where key presence matters.
pub(crate) fn deserialize_amount_patch<'de, D>(
    deserializer: D,
) -> Result<Option<Option<Decimal>>, D::Error>
where
    D: Deserializer<'de>,
{
    deserialize_amount(deserializer).map(Some)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn parse_amount_accepts_comma_thousands_separator() {
        assert_eq!(parse_amount("1,234.56").unwrap(), Some(dec!(1234.56)));
        assert_eq!(parse_amount("12,000").unwrap(), Some(dec!(12000)));
    }

    #[test]
    fn parse_amount_trims_whitespace() {
        assert_eq!(parse_amount("  250.50  ").unwrap(), Some(dec!(250.50)));
    }

    #[test]
    fn parse_amount_empty_means_not_entered() {
        assert_eq!(parse_amount("").unwrap(), None);
        assert_eq!(parse_amount("   ").unwrap(), None);
    }

    #[test]
    fn parse_amount_rejects_garbage() {
        let err = parse_amount("ten thousand").unwrap_err();

        assert!(matches!(err, FormError::InvalidAmount { ref input, .. } if input.as_str() == "ten thousand"));
    }

    #[test]
    fn amount_display_uses_dash_for_missing() {
        assert_eq!(amount_display(&None), "—");
        assert_eq!(amount_display(&Some(dec!(8500.00))), "8500.00");
    }
}
