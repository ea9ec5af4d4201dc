use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use logs_fieldgroup_validator::config::Config;
use logs_fieldgroup_validator::{
    FieldGroupConfig, FieldGroupValidator, HttpCredentialChecker, ValidationError,
};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

/// Command-line arguments for the field group validator
#[derive(Parser)]
#[command(name = "logs-fieldgroup-validator")]
#[command(about = "Validates the Elasticsearch logs settings of a registry config")]
struct Args {
    /// Registry config document (YAML, or JSON with a .json extension)
    #[arg(short, long, default_value = "config.yaml")]
    config: PathBuf,

    /// Path to checker settings file (.env format)
    #[arg(short, long, default_value = "validator.env")]
    env_file: String,

    /// How to print validation errors
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

fn report(errors: &[ValidationError], format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => {
            if errors.is_empty() {
                println!("Elasticsearch logs configuration is valid");
            }
            for error in errors {
                println!("{}", error);
            }
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(errors)
                .context("Failed to serialize validation errors")?;
            println!("{}", json);
        }
    }
    Ok(())
}

/// Main entry point for the field group validator
///
/// # Behavior
/// - Initializes logging with env_logger
/// - Loads checker settings and the registry config
/// - Validates the logs field group, probing the cluster once
/// - Exits with 1 if any validation error was found
#[tokio::main]
async fn main() -> Result<ExitCode> {
    env_logger::init();
    let args = Args::parse();

    let settings = Config::load(&args.env_file)?;
    log::debug!("Checker settings: {:?}", settings);

    let field_group = FieldGroupConfig::load_from_file(&args.config)?;
    log::info!("Configuration loaded from: {}", args.config.display());
    log::debug!("Checking keys: {}", FieldGroupConfig::fields().join(", "));

    let checker = HttpCredentialChecker::new(&settings)?;
    let validator = FieldGroupValidator::new(checker);
    let errors = validator.validate(&field_group).await;

    report(&errors, args.format)?;

    if errors.is_empty() {
        Ok(ExitCode::SUCCESS)
    } else {
        log::warn!("Found {} validation errors", errors.len());
        Ok(ExitCode::FAILURE)
    }
}
