use clap::{ArgAction, Parser, ValueEnum};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use parcelsort::logging::{init_logging, LoggingConfig};
use parcelsort::settings::{SettingsError, SortingConfig};
use parcelsort::Measurement;

/// Output format for the classification result
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    /// Category name only (STANDARD, SPECIAL or REJECTED)
    #[default]
    Text,
    /// JSON object with the category and the bulky/heavy flags
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "parcelsort")]
#[command(version)]
#[command(about = "Sort a package into the STANDARD, SPECIAL or REJECTED stack")]
#[command(after_help = "Examples:
  parcelsort 100 100 100 10          SPECIAL (volume at 1,000,000 cm3)
  parcelsort 10 10 10 25 -f json     JSON result with bulky/heavy flags
  parcelsort -c sort.toml 50 50 50 5 Use thresholds from a config file

Dimensions are in centimeters, mass in kilograms.")]
struct Cli {
    /// Width in centimeters
    #[arg(allow_hyphen_values = true)]
    width: String,

    /// Height in centimeters
    #[arg(allow_hyphen_values = true)]
    height: String,

    /// Length in centimeters
    #[arg(allow_hyphen_values = true)]
    length: String,

    /// Mass in kilograms
    #[arg(allow_hyphen_values = true)]
    mass: String,

    /// Thresholds file (TOML); defaults plus PARCELSORT__* env overrides when omitted
    #[arg(long, short, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Output format
    #[arg(long, short, default_value = "text", value_enum)]
    format: OutputFormat,

    /// Suppress all diagnostics except errors
    #[arg(long, short)]
    quiet: bool,

    /// Increase verbosity (-v, -vv, -vvv); --quiet takes precedence
    #[arg(long, short, action = ArgAction::Count)]
    verbose: u8,
}

/// Exit codes for the sorting command
mod exit_codes {
    use std::process::ExitCode;

    /// A measurement was rejected by validation
    pub fn invalid_input() -> ExitCode {
        ExitCode::from(65)
    }

    /// The thresholds configuration could not be loaded
    pub fn config_error() -> ExitCode {
        ExitCode::from(78)
    }
}

fn load_settings(path: Option<&Path>) -> Result<SortingConfig, SettingsError> {
    match path {
        Some(path) => SortingConfig::load(path),
        None => SortingConfig::from_env(),
    }
}

fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    init_logging(LoggingConfig::from_flags(cli.verbose, cli.quiet));

    let settings = match load_settings(cli.config.as_deref()) {
        Ok(settings) => settings,
        Err(e) => {
            tracing::debug!(config = ?cli.config, "configuration rejected");
            eprintln!("error: {}", e);
            return Ok(exit_codes::config_error());
        }
    };

    let thresholds = settings.thresholds;
    tracing::info!(
        volume = thresholds.volume,
        dimension = thresholds.dimension,
        mass = thresholds.mass,
        "thresholds in effect"
    );

    let measurement = match Measurement::parse(
        cli.width.as_str(),
        cli.height.as_str(),
        cli.length.as_str(),
        cli.mass.as_str(),
    ) {
        Ok(measurement) => measurement,
        Err(e) => {
            tracing::debug!(field = %e.field(), "measurement rejected");
            eprintln!("error: {}", e);
            return Ok(exit_codes::invalid_input());
        }
    };

    let assessment = settings.classifier().assess(&measurement);

    match cli.format {
        OutputFormat::Text => println!("{}", assessment.category),
        OutputFormat::Json => println!("{}", serde_json::to_string(&assessment)?),
    }

    Ok(ExitCode::SUCCESS)
}
