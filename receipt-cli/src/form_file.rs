//! Reading form input: TOML form files and `KEY=VALUE` edits.
//!
//! A form file is a [`FormPatch`] written with the form's keys:
//!
//! ```toml
//! tenantName = "Asha Rao"
//! landlordPAN = "ABCDE1234F"
//! rentAmount = "18,500.00"
//! paymentMode = "Bank Transfer"
//! ```
//!
//! Keys left out keep their current value. `rentAmount = ""` clears the amount.

use std::{path::Path, str::FromStr};

use receipt_core::FormPatch;

// ---------------------------------------------------------------------------
// Public error types
// ---------------------------------------------------------------------------

/// Errors that can occur while loading a form file.
#[derive(Debug, thiserror::Error)]
pub enum FormFileError {
    #[error("cannot read form file: {0}")]
    Io(#[from] std::io::Error),

    /// Bad TOML, an unknown key, or a value of the wrong type.
    #[error("form file parse error: {0}")]
    Parse(#[from] toml::de::Error),
}

/// A `--set` argument that is not of the form `KEY=VALUE`.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("expected KEY=VALUE, got '{0}'")]
pub struct AssignmentSyntaxError(String);

// ---------------------------------------------------------------------------
// Form files
// ---------------------------------------------------------------------------

/// Parse form file text into a patch.
pub fn load_from_str(input: &str) -> Result<FormPatch, FormFileError> {
    Ok(toml::from_str(input)?)
}

/// Read a form file from disk and delegate to [`load_from_str`].
pub fn load_from_file(path: &Path) -> Result<FormPatch, FormFileError> {
    let contents = std::fs::read_to_string(path)?;
    load_from_str(&contents)
}

// ---------------------------------------------------------------------------
// KEY=VALUE edits
// ---------------------------------------------------------------------------

/// One `--set KEY=VALUE` edit, split but not yet checked against the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldAssignment {
    pub key: String,
    pub value: String,
}

impl FromStr for FieldAssignment {
    type Err = AssignmentSyntaxError;

    /// Splits on the first `=`; the value may itself contain `=` and may be empty.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (key, value) = s
            .split_once('=')
            .ok_or_else(|| AssignmentSyntaxError(s.to_string()))?;
        let key = key.trim();
        if key.is_empty() {
            return Err(AssignmentSyntaxError(s.to_string()));
        }
        Ok(Self {
            key: key.to_string(),
            value: value.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use receipt_core::PaymentMode;
    use rust_decimal_macros::dec;

    use super::*;

    const PARTIAL_FORM: &str = r#"
tenantName = "Asha Rao"
rentAmount = 18500
"#;

    #[test]
    fn load_partial_form_leaves_other_keys_unset() {
        let patch = load_from_str(PARTIAL_FORM).unwrap();

        assert_eq!(patch.tenant_name.as_deref(), Some("Asha Rao"));
        assert_eq!(patch.rent_amount, Some(Some(dec!(18500))));
        assert_eq!(patch.landlord_name, None);
        assert_eq!(patch.payment_mode, None);
    }

    #[test]
    fn load_empty_form_is_empty_patch() {
        assert!(load_from_str("").unwrap().is_empty());
    }

    #[test]
    fn load_reads_payment_mode_label() {
        let patch = load_from_str(r#"paymentMode = "Cheque""#).unwrap();

        assert_eq!(patch.payment_mode, Some(PaymentMode::Cheque));
    }

    #[test]
    fn load_reads_payment_mode_in_any_case() {
        let patch = load_from_str(r#"paymentMode = "cheque""#).unwrap();
        assert_eq!(patch.payment_mode, Some(PaymentMode::Cheque));

        let patch = load_from_str(r#"paymentMode = "bank transfer""#).unwrap();
        assert_eq!(patch.payment_mode, Some(PaymentMode::BankTransfer));
    }

    #[test]
    fn load_rejects_unknown_payment_mode() {
        assert!(matches!(
            load_from_str(r#"paymentMode = "Barter""#),
            Err(FormFileError::Parse(_))
        ));
    }

    #[test]
    fn load_rejects_unknown_key() {
        let err = load_from_str(r#"tenant = "Asha""#).unwrap_err();

        assert!(matches!(err, FormFileError::Parse(_)));
    }

    #[test]
    fn load_rejects_bad_amount() {
        assert!(matches!(
            load_from_str(r#"rentAmount = "lots""#),
            Err(FormFileError::Parse(_))
        ));
    }

    #[test]
    fn assignment_splits_on_first_equals() {
        let a: FieldAssignment = "propertyAddress=Plot 7, Sector=21".parse().unwrap();

        assert_eq!(a.key, "propertyAddress");
        assert_eq!(a.value, "Plot 7, Sector=21");
    }

    #[test]
    fn assignment_allows_empty_value() {
        let a: FieldAssignment = "rentAmount=".parse().unwrap();

        assert_eq!(a.value, "");
    }

    #[test]
    fn assignment_requires_equals_and_key() {
        assert!("tenantName".parse::<FieldAssignment>().is_err());
        assert!("=Asha".parse::<FieldAssignment>().is_err());
    }
}
