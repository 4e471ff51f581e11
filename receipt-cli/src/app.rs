//! Drives a [`ReceiptStore`] the way a form front end would.

use std::path::PathBuf;

use anyhow::{Context, Result};
use receipt_core::{FormPatch, ReceiptStore};
use tracing::debug;

use crate::{config::CliConfig, form_file, form_file::FieldAssignment};

/// What one run of the tool should do to the form, in order:
/// load the file, apply edits, optionally clear, then assign the number.
#[derive(Debug, Clone, Default)]
pub struct SessionInput {
    pub form_file: Option<PathBuf>,
    pub assignments: Vec<FieldAssignment>,
    pub clear: bool,
    pub receipt_number: Option<String>,
}

/// Configured starting values for a blank form.
fn configured_defaults(config: &CliConfig) -> FormPatch {
    FormPatch {
        payment_mode: Some(config.default_payment_mode),
        ..Default::default()
    }
}

/// Builds the store for one session. Stops at the first bad input.
///
/// `clear` returns the form to the configured defaults, not only the
/// built-in ones.
pub fn build_store(
    config: &CliConfig,
    input: &SessionInput,
) -> Result<ReceiptStore> {
    let mut store = ReceiptStore::new();
    store.set_form_data(configured_defaults(config));

    if let Some(path) = &input.form_file {
        debug!("loading form file {}", path.display());
        let patch = form_file::load_from_file(path)
            .with_context(|| format!("Failed to load form: {}", path.display()))?;
        store.set_form_data(patch);
    }

    for assignment in &input.assignments {
        store
            .update_field_str(&assignment.key, &assignment.value)
            .with_context(|| format!("Failed to set {}", assignment.key))?;
    }

    if input.clear {
        store.clear_form();
        store.set_form_data(configured_defaults(config));
    }

    if let Some(number) = &input.receipt_number {
        store.set_receipt_number(number.as_str());
    }

    debug!(has_data = store.has_data(), "form ready");
    Ok(store)
}
