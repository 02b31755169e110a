//! # AeroTanker CLI
//!
//! Terminal front end for the fuel tankering calculator.
//!
//! ```text
//! tanker calc --model A320 --taxi 0.2 --sector1 9000 --zfw 60000 --trip-plus-taxi 9200
//! tanker --variant NEO --format json dashboard --input dashboard.json
//! tanker limits
//! tanker interactive --model A321
//! ```
//!
//! Exceeding a limit is not an error: the result is printed with the
//! exceedance flagged and the exit status is still 0.

mod logging;
mod render;

use std::fs;
use std::io::{self, BufRead, Read, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand, ValueEnum};
use tracing::{debug, info};

use tanker_core::calculations::{calculate, CalculatorInput, InputField, PanelResult};
use tanker_core::{AircraftModel, CalcError, CalcResult, Dashboard, EngineVariant};

/// Fuel tankering & weight calculator for the A320 and A321
#[derive(Parser, Debug)]
#[command(name = "tanker", version)]
#[command(about = "Fuel tankering & weight calculator (A320/A321, CEO/NEO)", long_about = None)]
struct Cli {
    /// Engine variant applied to every panel (CEO or NEO) [default: CEO]
    #[arg(long, global = true, env = "TANKER_VARIANT")]
    variant: Option<EngineVariant>,

    /// Output format
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Calculate one panel from command-line fields
    Calc {
        /// Aircraft model (A320 or A321)
        #[arg(long)]
        model: AircraftModel,

        #[command(flatten)]
        fields: FieldArgs,
    },
    /// Calculate both panels from a JSON dashboard snapshot
    Dashboard {
        /// Snapshot file, or "-" for stdin [default: stdin]
        #[arg(long)]
        input: Option<PathBuf>,
    },
    /// Print the certified weight limits table
    Limits,
    /// Prompt for each field, then calculate one panel
    Interactive {
        /// Aircraft model (A320 or A321)
        #[arg(long)]
        model: AircraftModel,
    },
}

/// Panel fields as typed; anything omitted stays empty.
#[derive(Args, Debug, Default)]
struct FieldArgs {
    /// Taxi fuel, tons (0.2) or kilograms (200)
    #[arg(long, allow_hyphen_values = true)]
    taxi: Option<String>,
    /// Sector 4 fuel (kg)
    #[arg(long, allow_hyphen_values = true)]
    sector4: Option<String>,
    /// Sector 3 fuel (kg)
    #[arg(long, allow_hyphen_values = true)]
    sector3: Option<String>,
    /// Sector 2 fuel (kg)
    #[arg(long, allow_hyphen_values = true)]
    sector2: Option<String>,
    /// Sector 1 fuel (kg)
    #[arg(long, allow_hyphen_values = true)]
    sector1: Option<String>,
    /// Zero Fuel Weight (kg)
    #[arg(long, allow_hyphen_values = true)]
    zfw: Option<String>,
    /// Sector 1 trip fuel plus taxi (kg)
    #[arg(long, allow_hyphen_values = true)]
    trip_plus_taxi: Option<String>,
}

impl FieldArgs {
    fn into_input(self) -> CalculatorInput {
        CalculatorInput {
            taxi: self.taxi.unwrap_or_default(),
            sector4: self.sector4.unwrap_or_default(),
            sector3: self.sector3.unwrap_or_default(),
            sector2: self.sector2.unwrap_or_default(),
            sector1: self.sector1.unwrap_or_default(),
            zfw: self.zfw.unwrap_or_default(),
            trip_plus_taxi: self.trip_plus_taxi.unwrap_or_default(),
        }
    }
}

fn main() -> ExitCode {
    logging::init();
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            if let Ok(json) = serde_json::to_string_pretty(&e) {
                eprintln!();
                eprintln!("Error JSON:");
                eprintln!("{}", json);
            }
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> CalcResult<()> {
    debug!(?cli, "parsed arguments");

    match cli.command {
        Command::Calc { model, fields } => {
            let variant = cli.variant.unwrap_or_default();
            let result = calculate(&fields.into_input(), model, variant);
            print_results(cli.format, variant, &[result])
        }
        Command::Dashboard { input } => {
            let json = read_snapshot(input)?;
            let mut dashboard = Dashboard::from_json(&json)?;
            if let Some(variant) = cli.variant {
                dashboard.set_variant(variant);
            }
            info!(variant = %dashboard.variant(), "evaluating dashboard");
            let results = dashboard.evaluate_all();
            print_results(cli.format, dashboard.variant(), &results)
        }
        Command::Limits => {
            print!("{}", render::limits_table_text());
            Ok(())
        }
        Command::Interactive { model } => {
            let variant = cli.variant.unwrap_or_default();
            println!("AeroTanker - {} ({})", model, variant.display_name());
            println!("Taxi in tons (e.g. 0.2), others in KG. Empty line leaves a field blank.");
            println!();

            let mut input = CalculatorInput::default();
            for field in InputField::ALL {
                input.set(field, prompt_field(field));
            }
            println!();

            let result = calculate(&input, model, variant);
            print_results(cli.format, variant, &[result])
        }
    }
}

fn print_results(format: OutputFormat, variant: EngineVariant, results: &[PanelResult]) -> CalcResult<()> {
    match format {
        OutputFormat::Text => {
            for result in results {
                println!("{}", render::panel_text(result));
            }
        }
        OutputFormat::Json => println!("{}", render::json_report(variant, results)?),
    }
    Ok(())
}

fn read_snapshot(input: Option<PathBuf>) -> CalcResult<String> {
    match input {
        Some(path) if path.as_os_str() != "-" => fs::read_to_string(&path)
            .map_err(|e| CalcError::io(format!("read {}", path.display()), e.to_string())),
        _ => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .map_err(|e| CalcError::io("read stdin", e.to_string()))?;
            Ok(buf)
        }
    }
}

fn prompt_field(field: InputField) -> String {
    print!("{} (e.g. {}): ", field.label(), field.placeholder());
    if io::stdout().flush().is_err() {
        return String::new();
    }

    let mut line = String::new();
    if io::stdin().lock().read_line(&mut line).is_err() {
        return String::new();
    }
    line.trim().to_string()
}
