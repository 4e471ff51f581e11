//! Seams for the services that feed the store from outside.
//!
//! The store never calls these itself. Callers run a collaborator and hand
//! the result to the matching setter; the helpers below do exactly that.

use crate::{
    models::{FormData, ValidationResult},
    store::ReceiptStore,
};

/// Checks a form and reports per-field problems.
pub trait Validator {
    fn validate(
        &self,
        data: &FormData,
    ) -> ValidationResult;
}

impl<F> Validator for F
where
    F: Fn(&FormData) -> ValidationResult,
{
    fn validate(
        &self,
        data: &FormData,
    ) -> ValidationResult {
        self(data)
    }
}

/// Hands out receipt numbers, typically after a successful save.
pub trait ReceiptNumberSource {
    fn next_receipt_number(&mut self) -> String;
}

impl<F> ReceiptNumberSource for F
where
    F: FnMut() -> String,
{
    fn next_receipt_number(&mut self) -> String {
        self()
    }
}

/// Runs `validator` over the current form and commits its result.
///
/// Returns the committed validity flag.
pub fn validate_and_commit<V>(
    store: &mut ReceiptStore,
    validator: &V,
) -> bool
where
    V: Validator + ?Sized,
{
    let result = validator.validate(store.form_data());
    let valid = result.is_valid;
    store.apply_validation(result);
    valid
}

/// Draws the next number from `source` and stores it.
pub fn assign_receipt_number<'a, S>(
    store: &'a mut ReceiptStore,
    source: &mut S,
) -> &'a str
where
    S: ReceiptNumberSource + ?Sized,
{
    let number = source.next_receipt_number();
    store.set_receipt_number(number);
    store.receipt_number()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::models::{FieldErrors, FieldUpdate, FormField};

    fn require_tenant(data: &FormData) -> ValidationResult {
        if data.tenant_name.trim().is_empty() {
            let mut errors = FieldErrors::new();
            errors.insert(FormField::TenantName.as_str().to_string(), "Required".to_string());
            ValidationResult::invalid(errors)
        } else {
            ValidationResult::valid()
        }
    }

    struct Sequential {
        next: u32,
    }

    impl ReceiptNumberSource for Sequential {
        fn next_receipt_number(&mut self) -> String {
            self.next += 1;
            format!("RR-{:04}", self.next)
        }
    }

    #[test]
    fn validate_and_commit_stores_failure() {
        let mut store = ReceiptStore::new();

        let valid = validate_and_commit(&mut store, &require_tenant);

        assert!(!valid);
        assert_eq!(
            store.validation().error_for(FormField::TenantName),
            Some("Required")
        );
    }

    #[test]
    fn validate_and_commit_replaces_previous_errors() {
        let mut store = ReceiptStore::new();
        validate_and_commit(&mut store, &require_tenant);

        store.update_field(FieldUpdate::TenantName("Asha".to_string()));
        let valid = validate_and_commit(&mut store, &require_tenant);

        assert!(valid);
        assert!(store.is_valid());
        assert!(store.errors().is_empty());
    }

    #[test]
    fn validator_does_not_touch_form() {
        let mut store = ReceiptStore::new();
        store.update_field(FieldUpdate::PaymentDate("2025-04-05".to_string()));
        let before = store.form_data().clone();

        validate_and_commit(&mut store, &require_tenant);

        assert_eq!(store.form_data(), &before);
    }

    #[test]
    fn assign_receipt_number_uses_source() {
        let mut store = ReceiptStore::new();
        let mut source = Sequential { next: 6 };

        assert_eq!(assign_receipt_number(&mut store, &mut source), "RR-0007");
        assert_eq!(assign_receipt_number(&mut store, &mut source), "RR-0008");
    }

    #[test]
    fn closures_work_as_receipt_sources() {
        let mut store = ReceiptStore::new();
        let mut source = || "RR-TS-1717171717".to_string();

        assign_receipt_number(&mut store, &mut source);

        assert_eq!(store.receipt_number(), "RR-TS-1717171717");
    }

    #[test]
    fn receipt_number_survives_clear_after_assignment() {
        let mut store = ReceiptStore::new();
        let mut source = Sequential { next: 0 };
        assign_receipt_number(&mut store, &mut source);

        store.clear_form();

        assert_eq!(store.receipt_number(), "RR-0001");
    }
}
