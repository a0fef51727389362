use clap::{Parser, Subcommand};
use bili_core::{
    config::ReportConfig, format_summary, tables::named_curves, tables::MAISELS_BANDS,
    CalculationInput, RiskEngine,
};
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "bili")]
#[command(about = "Neonatal bilirubin risk calculator")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Calculate risk zone and treatment thresholds
    Calculate {
        /// Birth time (YYYY-MM-DDThh:mm, YYYY-MM-DD hh:mm or YYYY/MM/DD - hh:mm)
        birth_time: String,
        /// Measurement time, same formats as birth time
        measurement_time: String,
        /// Transcutaneous bilirubin (mg/dL)
        tcb: f64,
        /// Gestational age, whole weeks
        weeks: u32,
        /// Gestational age, additional days
        #[arg(default_value_t = 0, allow_negative_numbers = true)]
        days: i32,
        /// Neurotoxicity risk factors present
        #[arg(long)]
        risk_factors: bool,
        /// Print the result as JSON instead of a text summary
        #[arg(long)]
        json: bool,
        /// Date-of-birth display pattern (chrono)
        #[arg(long, default_value = bili_core::constants::DEFAULT_DATE_FORMAT)]
        date_format: String,
        /// Time-of-birth display pattern (chrono)
        #[arg(long, default_value = bili_core::constants::DEFAULT_TIME_FORMAT)]
        time_format: String,
    },
    /// List the reference curves and preterm bands
    Tables,
}

/// Render one calculation as a text summary or pretty JSON.
fn render_calculation(
    engine: &RiskEngine,
    input: &CalculationInput,
    json: bool,
) -> Result<String, Box<dyn std::error::Error>> {
    let result = engine.try_calculate(input)?;
    if json {
        Ok(serde_json::to_string_pretty(&result)?)
    } else {
        Ok(format_summary(&result))
    }
}

fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Calculate {
            birth_time,
            measurement_time,
            tcb,
            weeks,
            days,
            risk_factors,
            json,
            date_format,
            time_format,
        }) => {
            let engine = RiskEngine::new(ReportConfig::new(date_format, time_format)?);
            let input = CalculationInput {
                birth_time,
                measurement_time,
                tcb,
                gestational_weeks: weeks,
                gestational_days: days,
                has_risk_factors: risk_factors,
            };
            match render_calculation(&engine, &input, json) {
                Ok(output) => println!("{}", output),
                Err(e) => {
                    eprintln!("Error calculating risk: {}", e);
                    return Ok(ExitCode::FAILURE);
                }
            }
        }
        Some(Commands::Tables) => {
            for (name, curve) in named_curves() {
                let points: Vec<String> = curve
                    .iter()
                    .map(|p| format!("{}h={}", p.hours, p.level))
                    .collect();
                println!("{}: {}", name, points.join(", "));
            }
            for band in &MAISELS_BANDS {
                println!(
                    "maisels_{}: phototherapy {}-{}, exchange {}-{}",
                    band.key,
                    band.phototherapy.min,
                    band.phototherapy.max,
                    band.exchange_transfusion.min,
                    band.exchange_transfusion.max
                );
            }
        }
        None => {
            println!("Use 'bili --help' for commands");
        }
    }

    Ok(ExitCode::SUCCESS)
}
