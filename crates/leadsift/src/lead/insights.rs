//! Rule-based recommendations derived from collection-level data quality.

use serde::{Deserialize, Serialize};

use super::record::Lead;

/// Score at or above which a lead counts as high-converting.
const HIGH_SCORE: u8 = 80;

/// Data quality summary with recommendations and risks.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadInsights {
    /// Share of filled, valid quality signals (0-100).
    pub data_quality: u8,
    /// Share of high-scoring leads (0-100).
    pub conversion_potential: u8,
    pub recommendations: Vec<String>,
    pub risks: Vec<String>,
}

impl LeadInsights {
    /// Derive insights from a lead collection.
    pub fn generate(leads: &[Lead]) -> Self {
        let total = leads.len();
        if total == 0 {
            return Self::default();
        }

        let valid_emails = leads.iter().filter(|l| l.email_valid).count();
        let valid_phones = leads.iter().filter(|l| l.phone_valid).count();
        let with_revenue = leads.iter().filter(|l| l.revenue > 0.0).count();
        let with_industry = leads
            .iter()
            .filter(|l| l.industry.as_deref().is_some_and(|i| !i.is_empty()))
            .count();
        let high_score = leads.iter().filter(|l| l.lead_score() >= HIGH_SCORE).count();

        let signals = valid_emails + valid_phones + with_revenue + with_industry;
        let data_quality = ratio(signals, total * 4);
        let conversion_potential = ratio(high_score, total);

        let share = |count: usize| count as f64 / total as f64;
        let mut recommendations = Vec::new();
        let mut risks = Vec::new();

        if share(valid_emails) < 0.7 {
            recommendations
                .push("Implement email verification service to improve deliverability".to_string());
            risks.push("High email bounce rate may damage sender reputation".to_string());
        }

        if share(valid_phones) < 0.5 {
            recommendations.push("Add phone validation to increase contact options".to_string());
        }

        if share(high_score) > 0.3 {
            recommendations.push("Prioritize immediate outreach to high-scoring leads".to_string());
        }

        if share(with_revenue) < 0.6 {
            recommendations.push("Enrich lead data with company revenue information".to_string());
            risks.push("Incomplete revenue data may lead to misallocated resources".to_string());
        }

        Self {
            data_quality,
            conversion_potential,
            recommendations,
            risks,
        }
    }
}

fn ratio(part: usize, total: usize) -> u8 {
    (part as f64 / total as f64 * 100.0).round() as u8
}
