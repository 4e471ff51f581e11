use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, warn};

use receipt_cli::{
    app::{self, SessionInput},
    config::CliConfig,
    form_file::FieldAssignment,
    logging,
    summary::render_summary,
};

// ─── CLI definition ──────────────────────────────────────────────────────────

/// Fill in a rent receipt form and print its current state.
///
/// The form starts blank, then takes values from `--form`, then from each
/// `--set` in order.
#[derive(Debug, Parser)]
#[command(name = "receipt-form")]
#[command(version, about, long_about = None)]
struct Cli {
    /// TOML file with form values (camelCase keys, e.g. `tenantName`)
    #[arg(short, long)]
    form: Option<PathBuf>,

    /// Set one field, e.g. `--set rentAmount=15,000`. Repeatable.
    #[arg(short = 's', long = "set", value_name = "KEY=VALUE")]
    assignments: Vec<FieldAssignment>,

    /// Receipt number issued for this form
    #[arg(short, long)]
    receipt_number: Option<String>,

    /// Reset the form after loading it
    #[arg(long, default_value_t = false)]
    clear: bool,

    /// TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log filter directive, overriding the config file and `RUST_LOG`
    #[arg(long)]
    log_level: Option<String>,
}

// ─── entry point ─────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => CliConfig::load(path)?,
        None => CliConfig::default(),
    };

    logging::init_default_logging(cli.log_level.as_deref().or(config.log_level.as_deref()))
        .context("Failed to initialize logging")?;
    if let Some(path) = &config.log_file {
        if let Err(error) = logging::enable_file_logging(path) {
            warn!(?error, "file logging disabled");
        }
    }
    debug!(?config, "configuration loaded");

    let input = SessionInput {
        form_file: cli.form,
        assignments: cli.assignments,
        clear: cli.clear,
        receipt_number: cli.receipt_number,
    };
    let store = app::build_store(&config, &input)?;

    print!("{}", render_summary(&store));
    Ok(())
}
