//! Export command - score a lead file and write the result.

use std::path::PathBuf;

use colored::Colorize;
use leadsift::{ExportFormat, LeadFilters, LeadSift, export_leads, filter_leads};

use super::ingest;

pub fn run(
    engine: &LeadSift,
    file: PathBuf,
    output: Option<PathBuf>,
    format: ExportFormat,
    filters: LeadFilters,
) -> Result<(), Box<dyn std::error::Error>> {
    let report = ingest(engine, &file)?;
    let leads = filter_leads(&report.leads, &filters);

    let output_path = output.unwrap_or_else(|| {
        let mut p = file.clone();
        let stem = p.file_stem().unwrap_or_default().to_string_lossy();
        p.set_file_name(format!("{}.scored.{}", stem, format.extension()));
        p
    });

    let bytes = export_leads(&leads, format)?;
    std::fs::write(&output_path, bytes)?;

    println!(
        "{} {} leads as {} to {}",
        "Exported".green().bold(),
        leads.len().to_string().white().bold(),
        format.to_string().to_uppercase(),
        output_path.display().to_string().white()
    );
    if report.duplicates_removed > 0 {
        println!(
            "{} duplicates removed during ingestion",
            report.duplicates_removed.to_string().yellow()
        );
    }

    Ok(())
}
