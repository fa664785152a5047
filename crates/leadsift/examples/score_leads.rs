//! Example: Score a lead file and enrich the weakest leads.
//!
//! Usage:
//!   cargo run --example score_leads -- <file_path>

use std::env;
use std::path::Path;

use leadsift::{IndustryStats, LeadBook, MockEnrichmentProvider, ScoreBucket};

fn main() -> leadsift::Result<()> {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: cargo run --example score_leads -- <file_path>");
        std::process::exit(1);
    }

    let file_path = &args[1];
    let path = Path::new(file_path);

    if !path.exists() {
        eprintln!("Error: File not found: {}", file_path);
        std::process::exit(1);
    }

    let separator = "=".repeat(80);
    println!("{}", separator);
    println!("LeadSift Scoring: {}", file_path);
    println!("{}", separator);
    println!();

    let mut book = LeadBook::new();
    book.upload_file(path)?;

    let analytics = book.analytics();
    println!("## Analytics");
    println!("  Leads: {}", analytics.total_leads);
    println!("  Duplicates removed: {}", analytics.duplicates_removed);
    println!(
        "  Valid emails: {} ({:.1}%)",
        analytics.valid_emails, analytics.email_validity_rate
    );
    println!(
        "  Valid phones: {} ({:.1}%)",
        analytics.valid_phones, analytics.phone_validity_rate
    );
    println!("  Average score: {}", analytics.average_score);
    println!();

    println!("## Ranked Leads");
    println!();
    for lead in book.ranked() {
        let priority = lead.priority();
        println!(
            "  {:>3} {:9} {:30} {}",
            lead.lead_score(),
            priority.level.label(),
            lead.company_name,
            priority.action
        );
    }
    println!();

    println!("## Score Distribution");
    for bucket in ScoreBucket::distribution(book.leads()) {
        println!("  {:>6}: {}", bucket.label, bucket.count);
    }
    println!();

    println!("## Industries");
    for stats in IndustryStats::breakdown(book.leads()) {
        println!(
            "  {:20} count={:<4} avg_score={}",
            stats.industry, stats.count, stats.average_score
        );
    }
    println!();

    // Enrich leads that have no revenue on record
    let provider = MockEnrichmentProvider::new().with_revenue(1_000_000.0);
    let missing_revenue: Vec<String> = book
        .leads()
        .iter()
        .filter(|l| l.revenue == 0.0)
        .map(|l| l.company_name.clone())
        .collect();

    if !missing_revenue.is_empty() {
        println!("## Enrichment ({} leads)", missing_revenue.len());
        for company in &missing_revenue {
            let before = book.lead(company).map_or(0, |l| l.lead_score());
            book.enrich_lead(company, &provider)?;
            let after = book.lead(company).map_or(0, |l| l.lead_score());
            println!("  {:30} {:>3} -> {:>3}", company, before, after);
        }
        println!();
    }

    let insights = book.insights();
    println!("## Insights");
    println!("  Data quality: {}%", insights.data_quality);
    println!("  Conversion potential: {}%", insights.conversion_potential);
    for rec in &insights.recommendations {
        println!("  + {}", rec);
    }
    for risk in &insights.risks {
        println!("  ! {}", risk);
    }
    println!();

    println!("{}", separator);

    Ok(())
}
