//! `edgeblocks config`: inspect the effective configuration.

use crate::{
    cli::{ConfigCommands, OutputFormat},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Dispatch to the correct config subcommand.
pub fn execute(cmd: ConfigCommands, config: AppConfig, output: OutputManager) -> CliResult<()> {
    match cmd {
        ConfigCommands::Show => {
            let rendered = render(&config.redacted(), output.format())?;
            if output.format() == OutputFormat::Human {
                output.header("Current Configuration:")?;
            }
            output.emit(&rendered)?;
        }

        ConfigCommands::Path => {
            output.emit(&AppConfig::config_path().display().to_string())?;
        }
    }

    Ok(())
}

fn render(config: &AppConfig, format: OutputFormat) -> CliResult<String> {
    let serialization = |source: Box<dyn std::error::Error + Send + Sync>| {
        CliError::Serialization {
            what: "configuration",
            source,
        }
    };

    match format {
        OutputFormat::Json => {
            serde_json::to_string_pretty(config).map_err(|e| serialization(Box::new(e)))
        }
        _ => toml::to_string_pretty(config).map_err(|e| serialization(Box::new(e))),
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
