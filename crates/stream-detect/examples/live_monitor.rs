//! Console monitor over the synthetic stream
//!
//! Plays the renderer role: consumes classified records and reports flagged
//! events, pacing itself with the generator's delay hint. The analysis core
//! neither sleeps nor prints.
//!
//! Usage: `cargo run --example live_monitor [steps]`

use std::thread;
use std::time::Duration;

use anyhow::Result;
use tracing::info;
use tracing_subscriber::EnvFilter;

use stream_detect::{AnalyzerConfig, StreamAnalyzer};
use stream_synth::{IrregularityProfile, StreamGenerator, SynthConfig, TrendKind};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let steps: u64 = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(500);

    let config = SynthConfig {
        trend: TrendKind::Sinusoidal,
        seasonality_period: 100.0,
        seasonality_amplitude: 15.0,
        noise_level: 3.0,
        delay: Duration::from_millis(100),
    };
    let delay = config.delay;
    let generator = StreamGenerator::from_entropy(config, IrregularityProfile::default())?;
    let mut analyzer = StreamAnalyzer::new(generator, AnalyzerConfig::default())?;

    let mut anomalies = 0u64;
    let mut patterns = 0u64;

    for _ in 0..steps {
        let record = match analyzer.advance()? {
            Some(record) => record,
            None => break,
        };

        if record.is_anomaly {
            anomalies += 1;
            info!(
                index = record.point.index,
                value = record.point.value,
                "anomaly detected"
            );
        }
        if record.is_unusual_pattern {
            patterns += 1;
            info!(index = record.point.index, "unusual pattern detected");
        }

        thread::sleep(delay);
    }

    info!(steps, anomalies, patterns, "monitoring finished");
    Ok(())
}
