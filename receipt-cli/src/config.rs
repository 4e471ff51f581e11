//! Settings for the `receipt-form` binary, read from an optional TOML file.
//!
//! ```toml
//! log_level = "debug"
//! log_file = "receipt-form.log"
//! default_payment_mode = "UPI"
//! ```
//!
//! Every key is optional. Command-line flags win over file values.

use std::{fs, path::Path, path::PathBuf};

use anyhow::{Context, Result};
use receipt_core::PaymentMode;
use serde::Deserialize;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CliConfig {
    /// `EnvFilter` directive, e.g. `info` or `receipt_core=debug`.
    pub log_level: Option<String>,
    /// Append log records to this file as well as stdout.
    pub log_file: Option<PathBuf>,
    /// Payment mode the blank form starts with.
    pub default_payment_mode: PaymentMode,
}

impl CliConfig {
    pub fn from_toml(s: &str) -> Result<Self> {
        toml::from_str(s).context("Invalid configuration")
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;
        Self::from_toml(&text).with_context(|| format!("Failed to parse config: {}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn empty_config_uses_defaults() {
        let config = CliConfig::from_toml("").unwrap();

        assert_eq!(config, CliConfig::default());
        assert_eq!(config.default_payment_mode, PaymentMode::Cash);
    }

    #[test]
    fn config_reads_all_keys() {
        let config = CliConfig::from_toml(
            r#"
            log_level = "debug"
            log_file = "/tmp/receipt.log"
            default_payment_mode = "UPI"
            "#,
        )
        .unwrap();

        assert_eq!(config.log_level.as_deref(), Some("debug"));
        assert_eq!(config.log_file, Some(PathBuf::from("/tmp/receipt.log")));
        assert_eq!(config.default_payment_mode, PaymentMode::Upi);
    }

    #[test]
    fn config_reads_lowercase_payment_mode() {
        let config = CliConfig::from_toml(r#"default_payment_mode = "upi""#).unwrap();

        assert_eq!(config.default_payment_mode, PaymentMode::Upi);
    }

    #[test]
    fn config_rejects_unknown_keys() {
        assert!(CliConfig::from_toml("colour = true").is_err());
    }

    #[test]
    fn load_missing_file_fails() {
        assert!(CliConfig::load(Path::new("/this/path/does/not/exist.toml")).is_err());
    }
}
