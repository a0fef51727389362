use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use bili_core::config::report_config_from_env_values;
use bili_core::{CalculationInput, RiskEngine};

/// Counts reported once a batch has been processed.
#[derive(Debug, Default, PartialEq, Eq)]
struct BatchStats {
    calculated: usize,
    rejected: usize,
}

/// Batch entry point for the bilirubin risk engine
///
/// Reads newline-delimited JSON calculation inputs from the file named by the first argument
/// (or stdin) and writes one JSON line per input to stdout: the result object, or `null` when
/// the input fails validation or is not valid JSON.
///
/// # Environment Variables
/// - `BILI_DATE_FORMAT`: chrono pattern for the date-of-birth string (default: "%d/%m/%Y")
/// - `BILI_TIME_FORMAT`: chrono pattern for the time-of-birth string (default: "%H:%M")
/// - `RUST_LOG`: log filter; logs go to stderr
fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("bili_run=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let config = report_config_from_env_values(
        std::env::var("BILI_DATE_FORMAT").ok(),
        std::env::var("BILI_TIME_FORMAT").ok(),
    )?;
    let engine = RiskEngine::new(config);

    let reader: Box<dyn BufRead> = match std::env::args().nth(1) {
        Some(path) => {
            tracing::info!("++ Reading calculation inputs from {}", path);
            Box::new(BufReader::new(File::open(&path)?))
        }
        None => Box::new(BufReader::new(io::stdin().lock())),
    };
    let writer = BufWriter::new(io::stdout().lock());

    let stats = process_batch(&engine, reader, writer)?;
    tracing::info!(
        calculated = stats.calculated,
        rejected = stats.rejected,
        "batch complete"
    );

    Ok(())
}

fn process_batch<R: BufRead, W: Write>(
    engine: &RiskEngine,
    reader: R,
    mut writer: W,
) -> anyhow::Result<BatchStats> {
    let mut stats = BatchStats::default();

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let result = match serde_json::from_str::<CalculationInput>(&line) {
            Ok(input) => engine.calculate(&input),
            Err(e) => {
                tracing::warn!("line {}: not a calculation input: {}", index + 1, e);
                None
            }
        };

        match &result {
            Some(_) => stats.calculated += 1,
            None => stats.rejected += 1,
        }

        serde_json::to_writer(&mut writer, &result)?;
        writer.write_all(b"\n")?;
    }

    writer.flush()?;
    Ok(stats)
}
