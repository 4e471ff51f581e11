use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::FormError;

/// How the rent was paid. Defaults to [`PaymentMode::Cash`].
///
/// Serialized as its label; deserialized through [`PaymentMode::parse`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "&'static str")]
pub enum PaymentMode {
    #[default]
    Cash,
    Cheque,
    BankTransfer,
    Upi,
}

impl PaymentMode {
    pub const ALL: [PaymentMode; 4] = [
        PaymentMode::Cash,
        PaymentMode::Cheque,
        PaymentMode::BankTransfer,
        PaymentMode::Upi,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Cash => "Cash",
            Self::Cheque => "Cheque",
            Self::BankTransfer => "Bank Transfer",
            Self::Upi => "UPI",
        }
    }

    /// Case-insensitive lookup by label, also accepting the compact
    /// `BankTransfer` spelling.
    pub fn parse(s: &str) -> Option<Self> {
        let wanted = s.trim();
        Self::ALL.into_iter().find(|mode| {
            mode.as_str().eq_ignore_ascii_case(wanted)
                || mode.as_str().replace(' ', "").eq_ignore_ascii_case(wanted)
        })
    }
}

impl TryFrom<&str> for PaymentMode {
    type Error = FormError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value).ok_or_else(|| FormError::InvalidPaymentMode(value.to_string()))
    }
}

impl TryFrom<String> for PaymentMode {
    type Error = FormError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::try_from(value.as_str())
    }
}

impl From<PaymentMode> for &'static str {
    fn from(mode: PaymentMode) -> Self {
        mode.as_str()
    }
}

impl fmt::Display for PaymentMode {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
