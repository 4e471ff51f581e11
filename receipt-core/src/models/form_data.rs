use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{
    amount::{amount_display, deserialize_amount, deserialize_amount_patch},
    models::{FieldUpdate, FormField, PaymentMode},
};

/// The values entered on the rent receipt form.
///
/// Always a complete record: text fields are empty until entered and
/// `rent_amount` is `None` until the user types a number.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "camelCase")]
pub struct FormData {
    pub tenant_name: String,
    pub landlord_name: String,
    pub landlord_address: String,
    #[serde(rename = "landlordPAN")]
    pub landlord_pan: String,
    #[serde(
        deserialize_with = "deserialize_amount",
        skip_serializing_if = "Option::is_none"
    )]
    pub rent_amount: Option<Decimal>,
    pub rental_period_start: String,
    pub rental_period_end: String,
    pub payment_date: String,
    pub property_address: String,
    pub payment_mode: PaymentMode,
}

impl FormData {
    /// Returns `true` if anything beyond the defaults has been entered.
    ///
    /// Text counts once it is non-blank; the amount counts only when it
    /// is strictly positive. The payment mode never counts.
    pub fn has_data(&self) -> bool {
        let text_entered = [
            &self.tenant_name,
            &self.landlord_name,
            &self.landlord_address,
            &self.landlord_pan,
            &self.rental_period_start,
            &self.rental_period_end,
            &self.payment_date,
            &self.property_address,
        ]
        .into_iter()
        .any(|value| !value.trim().is_empty());

        text_entered || self.rent_amount.is_some_and(|amount| amount > Decimal::ZERO)
    }

    /// Writes one field.
    pub fn apply(
        &mut self,
        update: FieldUpdate,
    ) {
        match update {
            FieldUpdate::TenantName(v) => self.tenant_name = v,
            FieldUpdate::LandlordName(v) => self.landlord_name = v,
            FieldUpdate::LandlordAddress(v) => self.landlord_address = v,
            FieldUpdate::LandlordPan(v) => self.landlord_pan = v,
            FieldUpdate::RentAmount(v) => self.rent_amount = v,
            FieldUpdate::RentalPeriodStart(v) => self.rental_period_start = v,
            FieldUpdate::RentalPeriodEnd(v) => self.rental_period_end = v,
            FieldUpdate::PaymentDate(v) => self.payment_date = v,
            FieldUpdate::PropertyAddress(v) => self.property_address = v,
            FieldUpdate::PaymentMode(v) => self.payment_mode = v,
        }
    }

    /// Overwrites every field present in `patch`, keeping the rest.
    pub fn merge(
        &mut self,
        patch: FormPatch,
    ) {
        if let Some(v) = patch.tenant_name {
            self.tenant_name = v;
        }
        if let Some(v) = patch.landlord_name {
            self.landlord_name = v;
        }
        if let Some(v) = patch.landlord_address {
            self.landlord_address = v;
        }
        if let Some(v) = patch.landlord_pan {
            self.landlord_pan = v;
        }
        if let Some(v) = patch.rent_amount {
            self.rent_amount = v;
        }
        if let Some(v) = patch.rental_period_start {
            self.rental_period_start = v;
        }
        if let Some(v) = patch.rental_period_end {
            self.rental_period_end = v;
        }
        if let Some(v) = patch.payment_date {
            self.payment_date = v;
        }
        if let Some(v) = patch.property_address {
            self.property_address = v;
        }
        if let Some(v) = patch.payment_mode {
            self.payment_mode = v;
        }
    }

    /// Display text for one field.
    pub fn display_value(
        &self,
        field: FormField,
    ) -> String {
        match field {
            FormField::TenantName => self.tenant_name.clone(),
            FormField::LandlordName => self.landlord_name.clone(),
            FormField::LandlordAddress => self.landlord_address.clone(),
            FormField::LandlordPan => self.landlord_pan.clone(),
            FormField::RentAmount => amount_display(&self.rent_amount),
            FormField::RentalPeriodStart => self.rental_period_start.clone(),
            FormField::RentalPeriodEnd => self.rental_period_end.clone(),
            FormField::PaymentDate => self.payment_date.clone(),
            FormField::PropertyAddress => self.property_address.clone(),
            FormField::PaymentMode => self.payment_mode.to_string(),
        }
    }
}

impl fmt::Display for FormData {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        for field in FormField::ALL {
            let label = format!("{}:", field.label());
            writeln!(f, "{label:<18}{}", self.display_value(field))?;
        }
        Ok(())
    }
}

/// A partial form: `None` leaves the current value alone.
///
/// `rent_amount` is doubly optional so that clearing the amount
/// (`Some(None)`) differs from not touching it (`None`). In a form file an
/// empty string clears it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "camelCase")]
pub struct FormPatch {
    pub tenant_name: Option<String>,
    pub landlord_name: Option<String>,
    pub landlord_address: Option<String>,
    #[serde(rename = "landlordPAN")]
    pub landlord_pan: Option<String>,
    #[serde(deserialize_with = "deserialize_amount_patch")]
    pub rent_amount: Option<Option<Decimal>>,
    pub rental_period_start: Option<String>,
    pub rental_period_end: Option<String>,
    pub payment_date: Option<String>,
    pub property_address: Option<String>,
    pub payment_mode: Option<PaymentMode>,
}

impl FormPatch {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

impl From<FormData> for FormPatch {
    fn from(data: FormData) -> Self {
        Self {
            tenant_name: Some(data.tenant_name),
            landlord_name: Some(data.landlord_name),
            landlord_address: Some(data.landlord_address),
            landlord_pan: Some(data.landlord_pan),
            rent_amount: Some(data.rent_amount),
            rental_period_start: Some(data.rental_period_start),
            rental_period_end: Some(data.rental_period_end),
            payment_date: Some(data.payment_date),
            property_address: Some(data.property_address),
            payment_mode: Some(data.payment_mode),
        }
    }
}

impl From<FieldUpdate> for FormPatch {
    fn from(update: FieldUpdate) -> Self {
        let mut patch = Self::default();
        match update {
            FieldUpdate::TenantName(v) => patch.tenant_name = Some(v),
            FieldUpdate::LandlordName(v) => patch.landlord_name = Some(v),
            FieldUpdate::LandlordAddress(v) => patch.landlord_address = Some(v),
            FieldUpdate::LandlordPan(v) => patch.landlord_pan = Some(v),
            FieldUpdate::RentAmount(v) => patch.rent_amount = Some(v),
            FieldUpdate::RentalPeriodStart(v) => patch.rental_period_start = Some(v),
            FieldUpdate::RentalPeriodEnd(v) => patch.rental_period_end = Some(v),
            FieldUpdate::PaymentDate(v) => patch.payment_date = Some(v),
            FieldUpdate::PropertyAddress(v) => patch.property_address = Some(v),
            FieldUpdate::PaymentMode(v) => patch.payment_mode = Some(v),
        }
        patch
    }
}
