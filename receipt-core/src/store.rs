//! In-memory state for the rent receipt form.
//!
//! The store owns the form values, the last validation outcome and the
//! receipt number. Nothing here is persisted; saving and numbering happen
//! outside and report back through the setters.

use tracing::{debug, warn};

use crate::{
    error::FormError,
    models::{FieldErrors, FieldUpdate, FormData, FormPatch, ValidationResult},
};

/// State behind a single editable receipt form.
///
/// Share it between threads by wrapping the whole store in one lock; its
/// pieces are not meant to be guarded separately.
#[derive(Debug, Clone, Default)]
pub struct ReceiptStore {
    form_data: FormData,
    is_valid: bool,
    errors: FieldErrors,
    receipt_number: String,
}

impl ReceiptStore {
    /// Create a store holding the blank form.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-filled with a previous draft.
    pub fn with_form_data(form_data: FormData) -> Self {
        Self {
            form_data,
            ..Default::default()
        }
    }

    pub fn form_data(&self) -> &FormData {
        &self.form_data
    }

    pub fn is_valid(&self) -> bool {
        self.is_valid
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn receipt_number(&self) -> &str {
        &self.receipt_number
    }

    /// Snapshot of the validity flag and errors.
    pub fn validation(&self) -> ValidationResult {
        ValidationResult {
            is_valid: self.is_valid,
            errors: self.errors.clone(),
        }
    }

    /// Check if the form holds any user input. Recomputed on every call.
    pub fn has_data(&self) -> bool {
        self.form_data.has_data()
    }

    /// Set exactly one field. Validation state is left as it was.
    pub fn update_field(
        &mut self,
        update: FieldUpdate,
    ) {
        debug!(field = %update.field(), "updating form field");
        self.form_data.apply(update);
    }

    /// Parse a raw key/value pair and apply it.
    ///
    /// On error the form is left untouched.
    pub fn update_field_str(
        &mut self,
        key: &str,
        raw: &str,
    ) -> Result<(), FormError> {
        let update = FieldUpdate::parse(key, raw)
            .inspect_err(|error| warn!(key, %error, "rejected form input"))?;
        self.update_field(update);
        Ok(())
    }

    /// Merge `patch` over the current values.
    pub fn set_form_data(
        &mut self,
        patch: FormPatch,
    ) {
        debug!(empty = patch.is_empty(), "merging form data");
        self.form_data.merge(patch);
    }

    /// Reset the form to blank and drop validation state.
    ///
    /// The receipt number survives.
    pub fn clear_form(&mut self) {
        debug!("clearing form");
        self.form_data = FormData::default();
        self.errors = FieldErrors::new();
        self.is_valid = false;
    }

    /// Replace validity and errors wholesale.
    ///
    /// Does not check that `errors` is empty when `valid` is true.
    pub fn set_validation(
        &mut self,
        valid: bool,
        errors: FieldErrors,
    ) {
        debug!(valid, error_count = errors.len(), "setting validation");
        self.is_valid = valid;
        self.errors = errors;
    }

    /// Store a validator's result.
    pub fn apply_validation(
        &mut self,
        result: ValidationResult,
    ) {
        self.set_validation(result.is_valid, result.errors);
    }

    pub fn set_receipt_number(
        &mut self,
        number: impl Into<String>,
    ) {
        self.receipt_number = number.into();
        debug!(receipt_number = %self.receipt_number, "receipt number assigned");
    }
}
