//! Enrichment provider trait and data types.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::lead::{Lead, LeadUpdate};

/// Firmographic details about a company.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CompanyInfo {
    pub website: Option<String>,
    pub description: Option<String>,
    /// Headcount range, e.g. "500-1000".
    pub employees: Option<String>,
    pub founded: Option<String>,
    pub headquarters: Option<String>,
    pub linkedin: Option<String>,
    pub twitter: Option<String>,
}

/// Additional ways to reach the company.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContactInfo {
    pub alternative_emails: Vec<String>,
    pub direct_phone: Option<String>,
    pub departments: Vec<String>,
}

/// Market context for the company.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BusinessIntel {
    pub recent_news: Vec<String>,
    pub competitors: Vec<String>,
    pub technologies: Vec<String>,
}

/// Everything a provider found for one lead.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EnrichmentData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_info: Option<CompanyInfo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_info: Option<ContactInfo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub business_intel: Option<BusinessIntel>,
    /// Corrected industry, if the provider knows better.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub industry: Option<String>,
    /// Corrected annual revenue, if the provider knows better.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub revenue: Option<f64>,
}

impl EnrichmentData {
    /// The lead edits implied by this data. Only scored fields are carried.
    pub fn to_update(&self) -> LeadUpdate {
        LeadUpdate {
            industry: self.industry.clone(),
            revenue: self.revenue,
            ..LeadUpdate::default()
        }
    }
}

/// Source of company enrichment data.
pub trait EnrichmentProvider: Send + Sync {
    /// Provider name for logs and reports.
    fn name(&self) -> &str;

    /// Look up enrichment data for a lead.
    fn enrich(&self, lead: &Lead) -> Result<EnrichmentData>;
}
