use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::models::FormField;

/// Error messages keyed by field key (or any key the validator picks).
pub type FieldErrors = BTreeMap<String, String>;

/// Outcome reported by an external validator.
///
/// Nothing ties `is_valid` to `errors`; a validator is expected to report
/// an empty map when the form is valid.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ValidationResult {
    pub is_valid: bool,
    pub errors: FieldErrors,
}

impl ValidationResult {
    pub fn valid() -> Self {
        Self {
            is_valid: true,
            errors: FieldErrors::new(),
        }
    }

    pub fn invalid(errors: FieldErrors) -> Self {
        Self {
            is_valid: false,
            errors,
        }
    }

    /// The message recorded for `field`, if any.
    pub fn error_for(
        &self,
        field: FormField,
    ) -> Option<&str> {
        self.errors.get(field.as_str()).map(String::as_str)
    }
}
