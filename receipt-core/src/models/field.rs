use std::fmt;

use rust_decimal::Decimal;

use crate::{amount::parse_amount, error::FormError, models::PaymentMode};

/// Keys of the receipt form, in display order.
///
/// The string form is the key used in form files and in validator error maps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FormField {
    TenantName,
    LandlordName,
    LandlordAddress,
    LandlordPan,
    RentAmount,
    RentalPeriodStart,
    RentalPeriodEnd,
    PaymentDate,
    PropertyAddress,
    PaymentMode,
}

impl FormField {
    pub const ALL: [FormField; 10] = [
        FormField::TenantName,
        FormField::LandlordName,
        FormField::LandlordAddress,
        FormField::LandlordPan,
        FormField::RentAmount,
        FormField::RentalPeriodStart,
        FormField::RentalPeriodEnd,
        FormField::PaymentDate,
        FormField::PropertyAddress,
        FormField::PaymentMode,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::TenantName => "tenantName",
            Self::LandlordName => "landlordName",
            Self::LandlordAddress => "landlordAddress",
            Self::LandlordPan => "landlordPAN",
            Self::RentAmount => "rentAmount",
            Self::RentalPeriodStart => "rentalPeriodStart",
            Self::RentalPeriodEnd => "rentalPeriodEnd",
            Self::PaymentDate => "paymentDate",
            Self::PropertyAddress => "propertyAddress",
            Self::PaymentMode => "paymentMode",
        }
    }

    /// Exact, case-sensitive key lookup.
    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.as_str() == s)
    }

    /// Human readable label used in summaries.
    pub fn label(&self) -> &'static str {
        match self {
            Self::TenantName => "Tenant name",
            Self::LandlordName => "Landlord name",
            Self::LandlordAddress => "Landlord address",
            Self::LandlordPan => "Landlord PAN",
            Self::RentAmount => "Rent amount",
            Self::RentalPeriodStart => "Period start",
            Self::RentalPeriodEnd => "Period end",
            Self::PaymentDate => "Payment date",
            Self::PropertyAddress => "Property address",
            Self::PaymentMode => "Payment mode",
        }
    }
}

impl TryFrom<&str> for FormField {
    type Error = FormError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value).ok_or_else(|| FormError::UnknownField(value.to_string()))
    }
}

impl fmt::Display for FormField {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single-field edit carrying a value of that field's type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldUpdate {
    TenantName(String),
    LandlordName(String),
    LandlordAddress(String),
    LandlordPan(String),
    RentAmount(Option<Decimal>),
    RentalPeriodStart(String),
    RentalPeriodEnd(String),
    PaymentDate(String),
    PropertyAddress(String),
    PaymentMode(PaymentMode),
}

impl FieldUpdate {
    /// The field this edit writes to.
    pub fn field(&self) -> FormField {
        match self {
            Self::TenantName(_) => FormField::TenantName,
            Self::LandlordName(_) => FormField::LandlordName,
            Self::LandlordAddress(_) => FormField::LandlordAddress,
            Self::LandlordPan(_) => FormField::LandlordPan,
            Self::RentAmount(_) => FormField::RentAmount,
            Self::RentalPeriodStart(_) => FormField::RentalPeriodStart,
            Self::RentalPeriodEnd(_) => FormField::RentalPeriodEnd,
            Self::PaymentDate(_) => FormField::PaymentDate,
            Self::PropertyAddress(_) => FormField::PropertyAddress,
            Self::PaymentMode(_) => FormField::PaymentMode,
        }
    }

    /// Builds an edit from a raw key and raw text value.
    ///
    /// Text fields take `raw` verbatim. `rentAmount` goes through
    /// [`parse_amount`] and `paymentMode` through [`PaymentMode::parse`].
    /// Any mismatch is returned as an error; nothing is coerced.
    pub fn parse(
        key: &str,
        raw: &str,
    ) -> Result<Self, FormError> {
        let field = FormField::try_from(key)?;
        let text = || raw.to_string();

        Ok(match field {
            FormField::TenantName => Self::TenantName(text()),
            FormField::LandlordName => Self::LandlordName(text()),
            FormField::LandlordAddress => Self::LandlordAddress(text()),
            FormField::LandlordPan => Self::LandlordPan(text()),
            FormField::RentAmount => Self::RentAmount(parse_amount(raw)?),
            FormField::RentalPeriodStart => Self::RentalPeriodStart(text()),
            FormField::RentalPeriodEnd => Self::RentalPeriodEnd(text()),
            FormField::PaymentDate => Self::PaymentDate(text()),
            FormField::PropertyAddress => Self::PropertyAddress(text()),
            FormField::PaymentMode => Self::PaymentMode(PaymentMode::try_from(raw)?),
        })
    }
}
