//! Insights command - analytics and recommendations for a lead file.

use std::path::PathBuf;

use colored::Colorize;
use leadsift::{IndustryStats, LeadInsights, LeadPriority, LeadSift, PriorityLevel, ScoreBucket};

use super::{bar, ingest, paint};

pub fn run(
    engine: &LeadSift,
    file: PathBuf,
    json_output: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let report = ingest(engine, &file)?;
    let analytics = report.analytics();
    let insights = LeadInsights::generate(&report.leads);
    let distribution = ScoreBucket::distribution(&report.leads);
    let industries = IndustryStats::breakdown(&report.leads);

    if json_output {
        let status = serde_json::json!({
            "file": file.display().to_string(),
            "source": report.source,
            "analytics": analytics,
            "insights": insights,
            "scoreDistribution": distribution,
            "industries": industries,
        });
        println!("{}", serde_json::to_string_pretty(&status)?);
        return Ok(());
    }

    println!(
        "{} {}",
        "Lead insights for".cyan().bold(),
        file.display().to_string().white()
    );
    println!();

    println!("{}", "Analytics:".yellow().bold());
    println!("  Total leads:        {}", analytics.total_leads.to_string().white().bold());
    println!(
        "  Valid emails:       {} ({:.1}%)",
        analytics.valid_emails, analytics.email_validity_rate
    );
    println!(
        "  Valid phones:       {} ({:.1}%)",
        analytics.valid_phones, analytics.phone_validity_rate
    );
    println!(
        "  Average score:      {}",
        paint(
            &analytics.average_score.to_string(),
            LeadPriority::for_score(analytics.average_score as f64).level
        )
    );
    println!("  Duplicates removed: {}", analytics.duplicates_removed);
    println!();

    println!("{}", "Score distribution:".yellow().bold());
    for bucket in &distribution {
        println!(
            "  {:>6} {} {:>4} ({:.0}%)",
            bucket.label,
            paint(&bar(bucket.percentage, 20), level_for_bucket(bucket)),
            bucket.count,
            bucket.percentage
        );
    }
    println!();

    if !industries.is_empty() {
        println!("{}", "Industries:".yellow().bold());
        for stats in &industries {
            println!(
                "  {:20} {:>4} leads, avg score {:>3}, avg revenue {:>14.0}",
                stats.industry, stats.count, stats.average_score, stats.average_revenue
            );
        }
        println!();
    }

    println!(
        "Data quality:         {} {}%",
        bar(insights.data_quality as f64, 30).cyan(),
        insights.data_quality
    );
    println!(
        "Conversion potential: {} {}%",
        bar(insights.conversion_potential as f64, 30).cyan(),
        insights.conversion_potential
    );

    if !insights.recommendations.is_empty() {
        println!();
        println!("{}", "Recommendations:".green().bold());
        for rec in &insights.recommendations {
            println!("  • {}", rec);
        }
    }

    if !insights.risks.is_empty() {
        println!();
        println!("{}", "Risks:".red().bold());
        for risk in &insights.risks {
            println!("  • {}", risk);
        }
    }

    if insights.recommendations.is_empty() && insights.risks.is_empty() {
        println!();
        println!("{}", "No issues found - leads look healthy!".green());
    }

    Ok(())
}

fn level_for_bucket(bucket: &ScoreBucket) -> PriorityLevel {
    LeadPriority::for_score(bucket.max as f64).level
}
