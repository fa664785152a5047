//! Score command - rank the leads in a file.

use std::path::PathBuf;

use colored::Colorize;
use leadsift::{Lead, LeadFilters, LeadSift};

use super::{ingest, paint};

pub fn run(
    engine: &LeadSift,
    file: PathBuf,
    top: Option<usize>,
    filters: LeadFilters,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    println!(
        "{} {}",
        "Scoring".cyan().bold(),
        file.display().to_string().white()
    );

    let report = ingest(engine, &file)?;

    let mut leads: Vec<&Lead> = report.leads.iter().filter(|l| filters.matches(l)).collect();
    leads.sort_by(|a, b| b.lead_score().cmp(&a.lead_score()));
    let shown = top.unwrap_or(leads.len()).min(leads.len());

    println!(
        "Read {} rows: {} leads, {} duplicates removed, {} skipped",
        report.rows_read.to_string().white().bold(),
        report.leads.len().to_string().green(),
        report.duplicates_removed.to_string().yellow(),
        report.rows_skipped.to_string().dimmed()
    );
    if let Some(source) = &report.source {
        if source.lossy_rows > 0 {
            println!(
                "{} {} rows contained invalid UTF-8 and were decoded lossily",
                "Warning:".yellow().bold(),
                source.lossy_rows
            );
        }
        if !source.has_all_columns() {
            println!(
                "{} {}",
                "No column for:".dimmed(),
                source.absent_columns.join(", ").dimmed()
            );
        }
    }
    if leads.len() != report.leads.len() {
        println!("{} leads match the filters", leads.len().to_string().white().bold());
    }
    println!();

    if leads.is_empty() {
        println!("{}", "No leads to show".yellow());
        return Ok(());
    }

    println!(
        "{:>5}  {:9}  {:28} {:30} {:20}",
        "Score".bold(),
        "Priority".bold(),
        "Company".bold(),
        "Email".bold(),
        "Phone".bold()
    );

    for lead in &leads[..shown] {
        let priority = lead.priority();
        let email = if lead.email_valid {
            lead.email.normal()
        } else {
            lead.email.red()
        };
        let phone = if lead.phone_valid {
            lead.phone.normal()
        } else {
            lead.phone.red()
        };

        println!(
            "{:>5}  {}  {:28} {:30} {:20}",
            paint(&lead.lead_score().to_string(), priority.level),
            paint(&format!("{:9}", priority.level.label()), priority.level),
            truncate(&lead.company_name, 28),
            email,
            phone
        );

        if verbose {
            let breakdown = engine.scorer().breakdown(&lead.score_input());
            println!(
                "       {} email {} + phone {} + revenue {} + industry {}",
                "=".dimmed(),
                breakdown.email,
                breakdown.phone,
                breakdown.revenue,
                breakdown.industry
            );
            if let Some(reason) = &lead.email_reason {
                println!("       {} {}", "email:".dimmed(), reason);
            }
            println!("       {} {}", "next:".dimmed(), priority.action);
        }
    }

    if shown < leads.len() {
        println!();
        println!("... and {} more", leads.len() - shown);
    }

    Ok(())
}

fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        text.to_string()
    } else {
        let cut: String = text.chars().take(width - 1).collect();
        format!("{}…", cut)
    }
}
