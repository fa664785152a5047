//! Filtering of lead collections.

use serde::{Deserialize, Serialize};

use super::record::Lead;

/// Predicate over leads. The default matches everything.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LeadFilters {
    /// Exact industry match. `None` or `"all"` disables the check.
    pub industry: Option<String>,
    pub min_revenue: Option<f64>,
    pub max_revenue: Option<f64>,
    /// Inclusive score range.
    pub min_score: u8,
    pub max_score: u8,
    pub require_valid_email: bool,
    pub require_valid_phone: bool,
}

impl Default for LeadFilters {
    fn default() -> Self {
        Self {
            industry: None,
            min_revenue: None,
            max_revenue: None,
            min_score: 0,
            max_score: 100,
            require_valid_email: false,
            require_valid_phone: false,
        }
    }
}

impl LeadFilters {
    /// Create a filter that matches every lead.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_industry(mut self, industry: impl Into<String>) -> Self {
        self.industry = Some(industry.into());
        self
    }

    pub fn with_revenue_range(mut self, min: Option<f64>, max: Option<f64>) -> Self {
        self.min_revenue = min;
        self.max_revenue = max;
        self
    }

    pub fn with_score_range(mut self, min: u8, max: u8) -> Self {
        self.min_score = min;
        self.max_score = max;
        self
    }

    pub fn require_valid_email(mut self) -> Self {
        self.require_valid_email = true;
        self
    }

    pub fn require_valid_phone(mut self) -> Self {
        self.require_valid_phone = true;
        self
    }

    /// Whether a lead passes every active check.
    pub fn matches(&self, lead: &Lead) -> bool {
        if let Some(industry) = self.industry.as_deref() {
            if !industry.is_empty()
                && !industry.eq_ignore_ascii_case("all")
                && lead.industry.as_deref() != Some(industry)
            {
                return false;
            }
        }

        if self.min_revenue.is_some_and(|min| lead.revenue < min) {
            return false;
        }
        if self.max_revenue.is_some_and(|max| lead.revenue > max) {
            return false;
        }

        let score = lead.lead_score();
        if score < self.min_score || score > self.max_score {
            return false;
        }

        if self.require_valid_email && !lead.email_valid {
            return false;
        }
        if self.require_valid_phone && !lead.phone_valid {
            return false;
        }

        true
    }
}

/// Leads that pass the filter, in their original order.
pub fn filter_leads(leads: &[Lead], filters: &LeadFilters) -> Vec<Lead> {
    leads.iter().filter(|lead| filters.matches(lead)).cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::PhoneType;

    fn lead(name: &str, industry: Option<&str>, revenue: f64, score: u8, email_valid: bool) -> Lead {
        Lead {
            company_name: name.to_string(),
            email: format!("jane@{}.com", name.to_lowercase()),
            email_valid,
            email_score: 80,
            email_reason: None,
            phone: String::new(),
            phone_valid: false,
            phone_score: 0,
            phone_type: PhoneType::Unknown,
            industry: industry.map(String::from),
            revenue,
            lead_score: score,
        }
    }

    fn sample() -> Vec<Lead> {
        vec![
            lead("Acme", Some("Technology"), 2_000_000.0, 85, true),
            lead("Beta", Some("Finance"), 300_000.0, 55, true),
            lead("Gamma", None, 0.0, 12, false),
        ]
    }

    fn names(leads: &[Lead]) -> Vec<&str> {
        leads.iter().map(|l| l.company_name.as_str()).collect()
    }

    #[test]
    fn test_default_matches_all() {
        assert_eq!(filter_leads(&sample(), &LeadFilters::new()).len(), 3);
    }

    #[test]
    fn test_industry_filter() {
        let leads = sample();
        let filtered = filter_leads(&leads, &LeadFilters::new().with_industry("Finance"));
        assert_eq!(names(&filtered), vec!["Beta"]);

        let filtered = filter_leads(&leads, &LeadFilters::new().with_industry("all"));
        assert_eq!(filtered.len(), 3);
    }

    #[test]
    fn test_revenue_and_score_ranges() {
        let leads = sample();
        let filters = LeadFilters::new().with_revenue_range(Some(100_000.0), Some(1_000_000.0));
        assert_eq!(names(&filter_leads(&leads, &filters)), vec!["Beta"]);

        let filters = LeadFilters::new().with_score_range(50, 85);
        assert_eq!(names(&filter_leads(&leads, &filters)), vec!["Acme", "Beta"]);
    }

    #[test]
    fn test_validity_requirements() {
        let leads = sample();
        let filtered = filter_leads(&leads, &LeadFilters::new().require_valid_email());
        assert_eq!(names(&filtered), vec!["Acme", "Beta"]);

        let filtered = filter_leads(&leads, &LeadFilters::new().require_valid_phone());
        assert!(filtered.is_empty());
    }
}
