//! Weighted lead score calculation.
//!
//! | Component | Max | Rule                                   |
//! |-----------|-----|----------------------------------------|
//! | Email     | 40  | `round(email_score * 0.4)` when valid  |
//! | Phone     | 30  | `round(phone_score * 0.3)` when valid  |
//! | Revenue   | 20  | highest satisfied revenue band         |
//! | Industry  | 10  | industry table, default for unlisted   |

use serde::{Deserialize, Serialize};

use crate::config::ScoringRules;

const EMAIL_CAP: u8 = 40;
const PHONE_CAP: u8 = 30;
const REVENUE_CAP: u8 = 20;
const INDUSTRY_CAP: u8 = 10;

/// The fields a lead score is derived from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreInput<'a> {
    pub email_valid: bool,
    pub email_score: u8,
    pub phone_valid: bool,
    pub phone_score: u8,
    /// Annual revenue; 0 means unknown.
    pub revenue: f64,
    pub industry: Option<&'a str>,
}

/// Per-component points behind a lead score.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub email: u8,
    pub phone: u8,
    pub revenue: u8,
    pub industry: u8,
    pub total: u8,
}

/// Combines validation scores, revenue and industry into a 0-100 score.
#[derive(Debug, Clone, Default)]
pub struct LeadScorer {
    rules: ScoringRules,
}

impl LeadScorer {
    /// Create a scorer with the stock industry and revenue tables.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a scorer with custom tables.
    pub fn with_rules(rules: ScoringRules) -> Self {
        Self { rules }
    }

    /// Get the active scoring tables.
    pub fn rules(&self) -> &ScoringRules {
        &self.rules
    }

    /// Calculate the lead score.
    pub fn score(&self, input: &ScoreInput<'_>) -> u8 {
        self.breakdown(input).total
    }

    /// Calculate the lead score along with its components.
    pub fn breakdown(&self, input: &ScoreInput<'_>) -> ScoreBreakdown {
        let email = if input.email_valid {
            weighted(input.email_score, 4).min(EMAIL_CAP)
        } else {
            0
        };
        let phone = if input.phone_valid {
            weighted(input.phone_score, 3).min(PHONE_CAP)
        } else {
            0
        };
        let revenue = self.revenue_points(input.revenue);
        let industry = self.industry_points(input.industry);

        let total = (email as u16 + phone as u16 + revenue as u16 + industry as u16).min(100) as u8;

        ScoreBreakdown {
            email,
            phone,
            revenue,
            industry,
            total,
        }
    }

    /// Points for annual revenue.
    pub fn revenue_points(&self, revenue: f64) -> u8 {
        if !revenue.is_finite() || revenue <= 0.0 {
            return 0;
        }

        self.rules
            .revenue_bands
            .iter()
            .filter(|band| revenue >= band.min)
            .max_by(|a, b| a.min.total_cmp(&b.min))
            .map(|band| band.points.min(REVENUE_CAP))
            .unwrap_or(0)
    }

    /// Points for an industry name. Matching is exact.
    pub fn industry_points(&self, industry: Option<&str>) -> u8 {
        let industry = match industry.map(str::trim) {
            Some(name) if !name.is_empty() => name,
            _ => return 0,
        };

        self.rules
            .industry_points
            .get(industry)
            .copied()
            .unwrap_or(self.rules.default_industry_points)
            .min(INDUSTRY_CAP)
    }
}

/// `round(score * tenths / 10)` with halves rounded up, in integer math.
fn weighted(score: u8, tenths: u32) -> u8 {
    ((score.min(100) as u32 * tenths + 5) / 10) as u8
}
