//! Canned enrichment provider for tests and demos.

use crate::error::Result;
use crate::lead::Lead;

use super::provider::{
    BusinessIntel, CompanyInfo, ContactInfo, EnrichmentData, EnrichmentProvider,
};

/// Returns predictable data derived from the company name.
#[derive(Debug, Clone, Default)]
pub struct MockEnrichmentProvider {
    industry: Option<String>,
    revenue: Option<f64>,
}

impl MockEnrichmentProvider {
    /// Create a provider that never corrects scored fields.
    pub fn new() -> Self {
        Self::default()
    }

    /// Report this industry for every lead.
    pub fn with_industry(mut self, industry: impl Into<String>) -> Self {
        self.industry = Some(industry.into());
        self
    }

    /// Report this revenue for every lead.
    pub fn with_revenue(mut self, revenue: f64) -> Self {
        self.revenue = Some(revenue);
        self
    }
}

impl EnrichmentProvider for MockEnrichmentProvider {
    fn name(&self) -> &str {
        "mock"
    }

    fn enrich(&self, lead: &Lead) -> Result<EnrichmentData> {
        let slug: String = lead
            .company_name
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .collect::<String>()
            .to_lowercase();

        Ok(EnrichmentData {
            company_info: Some(CompanyInfo {
                website: Some(format!("https://{}.com", slug)),
                description: Some(format!("{} is a company in our lead database.", lead.company_name)),
                employees: Some("500-1000".to_string()),
                founded: Some("2010".to_string()),
                headquarters: Some("San Francisco, CA".to_string()),
                linkedin: Some(format!("https://linkedin.com/company/{}", slug)),
                twitter: Some(format!("https://twitter.com/{}", slug)),
            }),
            contact_info: Some(ContactInfo {
                alternative_emails: vec![
                    format!("contact@{}.com", slug),
                    format!("sales@{}.com", slug),
                ],
                direct_phone: None,
                departments: vec![
                    "Sales".to_string(),
                    "Marketing".to_string(),
                    "Engineering".to_string(),
                ],
            }),
            business_intel: Some(BusinessIntel {
                recent_news: vec![format!("{} announced a new product line", lead.company_name)],
                competitors: vec!["CompetitorA".to_string(), "CompetitorB".to_string()],
                technologies: vec!["AWS".to_string(), "PostgreSQL".to_string()],
            }),
            industry: self.industry.clone(),
            revenue: self.revenue,
        })
    }
}
