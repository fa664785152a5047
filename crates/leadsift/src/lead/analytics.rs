//! Aggregate statistics over a lead collection.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::record::Lead;

/// Score ranges used for the distribution view.
const SCORE_BUCKETS: &[(&str, u8, u8)] = &[
    ("0-20", 0, 20),
    ("21-40", 21, 40),
    ("41-60", 41, 60),
    ("61-80", 61, 80),
    ("81-100", 81, 100),
];

/// Counts and rates over a lead collection.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadAnalytics {
    pub total_leads: usize,
    pub valid_emails: usize,
    pub valid_phones: usize,
    /// Percentage (0-100).
    pub email_validity_rate: f64,
    /// Percentage (0-100).
    pub phone_validity_rate: f64,
    /// Mean lead score, rounded.
    pub average_score: u8,
    /// Rows dropped as duplicates during ingestion.
    pub duplicates_removed: usize,
}

impl LeadAnalytics {
    /// Compute analytics for a collection.
    pub fn compute(leads: &[Lead], duplicates_removed: usize) -> Self {
        let total_leads = leads.len();
        let valid_emails = leads.iter().filter(|l| l.email_valid).count();
        let valid_phones = leads.iter().filter(|l| l.phone_valid).count();
        let total_score: u64 = leads.iter().map(|l| l.lead_score() as u64).sum();

        let average_score = if total_leads > 0 {
            (total_score as f64 / total_leads as f64).round() as u8
        } else {
            0
        };

        Self {
            total_leads,
            valid_emails,
            valid_phones,
            email_validity_rate: percentage(valid_emails, total_leads),
            phone_validity_rate: percentage(valid_phones, total_leads),
            average_score,
            duplicates_removed,
        }
    }
}

/// Number of leads whose score falls in a range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreBucket {
    pub label: String,
    pub min: u8,
    pub max: u8,
    pub count: usize,
    pub percentage: f64,
}

impl ScoreBucket {
    /// Count leads into fixed 20-point ranges.
    pub fn distribution(leads: &[Lead]) -> Vec<ScoreBucket> {
        SCORE_BUCKETS
            .iter()
            .map(|&(label, min, max)| {
                let count = leads
                    .iter()
                    .filter(|l| (min..=max).contains(&l.lead_score()))
                    .count();
                ScoreBucket {
                    label: label.to_string(),
                    min,
                    max,
                    count,
                    percentage: percentage(count, leads.len()),
                }
            })
            .collect()
    }
}

/// Per-industry aggregates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndustryStats {
    pub industry: String,
    pub count: usize,
    pub average_score: u8,
    pub average_revenue: f64,
    pub email_validity_rate: f64,
    pub phone_validity_rate: f64,
}

impl IndustryStats {
    /// Group leads by industry, most common first. Leads without an
    /// industry are grouped under "Unknown".
    pub fn breakdown(leads: &[Lead]) -> Vec<IndustryStats> {
        let mut groups: IndexMap<&str, Vec<&Lead>> = IndexMap::new();
        for lead in leads {
            let industry = lead
                .industry
                .as_deref()
                .filter(|i| !i.is_empty())
                .unwrap_or("Unknown");
            groups.entry(industry).or_default().push(lead);
        }

        let mut stats: Vec<IndustryStats> = groups
            .into_iter()
            .map(|(industry, members)| {
                let count = members.len();
                let total_score: u64 = members.iter().map(|l| l.lead_score() as u64).sum();
                let total_revenue: f64 = members.iter().map(|l| l.revenue).sum();
                IndustryStats {
                    industry: industry.to_string(),
                    count,
                    average_score: (total_score as f64 / count as f64).round() as u8,
                    average_revenue: (total_revenue / count as f64).round(),
                    email_validity_rate: percentage(
                        members.iter().filter(|l| l.email_valid).count(),
                        count,
                    ),
                    phone_validity_rate: percentage(
                        members.iter().filter(|l| l.phone_valid).count(),
                        count,
                    ),
                }
            })
            .collect();

        // Stable sort keeps first-seen order among equal counts.
        stats.sort_by(|a, b| b.count.cmp(&a.count));
        stats
    }
}

fn percentage(part: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        part as f64 / total as f64 * 100.0
    }
}
