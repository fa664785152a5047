//! CLI command implementations.

pub mod check;
pub mod export;
pub mod insights;
pub mod score;

use std::path::Path;

use colored::{ColoredString, Colorize};
use leadsift::{IngestReport, LeadSift, LeadSiftConfig, PriorityLevel};

/// Build the engine, applying a config file when one is given.
pub fn load_engine(config: Option<&Path>) -> Result<LeadSift, Box<dyn std::error::Error>> {
    match config {
        Some(path) => {
            let config = LeadSiftConfig::load(path)?;
            tracing::debug!(path = %path.display(), "loaded config");
            Ok(LeadSift::with_config(config))
        }
        None => Ok(LeadSift::new()),
    }
}

/// Ingest a lead file, failing early with a readable message when it is absent.
pub fn ingest(engine: &LeadSift, file: &Path) -> Result<IngestReport, Box<dyn std::error::Error>> {
    if !file.exists() {
        return Err(format!("File not found: {}", file.display()).into());
    }
    Ok(engine.ingest_file(file)?)
}

/// Paint text in the terminal colour of a priority tier.
pub fn paint(text: &str, level: PriorityLevel) -> ColoredString {
    match level {
        PriorityLevel::Critical => text.red().bold(),
        PriorityLevel::High => text.truecolor(255, 165, 0).bold(),
        PriorityLevel::Medium => text.yellow(),
        PriorityLevel::Low => text.blue(),
        PriorityLevel::Cold => text.dimmed(),
    }
}

/// Render a 0-100 value as a fixed-width bar.
pub fn bar(percent: f64, width: usize) -> String {
    let filled = ((percent / 100.0).clamp(0.0, 1.0) * width as f64).round() as usize;
    "█".repeat(filled) + &"░".repeat(width - filled)
}
