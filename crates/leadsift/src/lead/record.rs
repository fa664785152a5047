//! The scored lead record and partial updates to it.

use serde::{Deserialize, Serialize};

use crate::scoring::{LeadPriority, LeadScorer, ScoreInput};
use crate::validation::PhoneType;

/// A prospective business contact with validation and scoring metadata.
///
/// `lead_score` is derived from the validation results, revenue and
/// industry. It can only be changed by rescoring, never assigned. A
/// deserialized lead ignores any `leadScore` it carries and is rescored
/// with the stock tables; use [`crate::LeadSift::rescore`] to apply a
/// custom configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "LeadFields")]
pub struct Lead {
    /// Company name, case preserved. Identity key for updates.
    pub company_name: String,
    pub email: String,
    pub email_valid: bool,
    pub email_score: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email_reason: Option<String>,
    /// Normalized display form, or the raw value when invalid.
    pub phone: String,
    pub phone_valid: bool,
    pub phone_score: u8,
    #[serde(default)]
    pub phone_type: PhoneType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub industry: Option<String>,
    /// Annual revenue; 0 means unknown.
    pub revenue: f64,
    pub(crate) lead_score: u8,
}

impl Lead {
    /// Composite 0-100 score.
    pub fn lead_score(&self) -> u8 {
        self.lead_score
    }

    /// Outreach priority for this lead's score.
    pub fn priority(&self) -> LeadPriority {
        LeadPriority::for_score(self.lead_score as f64)
    }

    /// The inputs the lead score is computed from.
    pub fn score_input(&self) -> ScoreInput<'_> {
        ScoreInput {
            email_valid: self.email_valid,
            email_score: self.email_score,
            phone_valid: self.phone_valid,
            phone_score: self.phone_score,
            revenue: self.revenue,
            industry: self.industry.as_deref(),
        }
    }

    /// Lowercased company name used for deduplication.
    pub fn company_key(&self) -> String {
        self.company_name.trim().to_lowercase()
    }

    /// Lowercased email used for deduplication.
    pub fn email_key(&self) -> String {
        self.email.trim().to_lowercase()
    }
}

/// Serialized form of a lead, minus the derived score.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct LeadFields {
    company_name: String,
    email: String,
    email_valid: bool,
    email_score: u8,
    #[serde(default)]
    email_reason: Option<String>,
    phone: String,
    phone_valid: bool,
    phone_score: u8,
    #[serde(default)]
    phone_type: PhoneType,
    #[serde(default)]
    industry: Option<String>,
    revenue: f64,
}

impl From<LeadFields> for Lead {
    fn from(fields: LeadFields) -> Self {
        let mut lead = Lead {
            company_name: fields.company_name,
            email: fields.email,
            email_valid: fields.email_valid,
            email_score: fields.email_score,
            email_reason: fields.email_reason,
            phone: fields.phone,
            phone_valid: fields.phone_valid,
            phone_score: fields.phone_score,
            phone_type: fields.phone_type,
            industry: fields.industry,
            revenue: fields.revenue,
            lead_score: 0,
        };
        lead.lead_score = LeadScorer::default().score(&lead.score_input());
        lead
    }
}

/// Partial edit to a lead. Unset fields are left as they are.
///
/// New email or phone text is re-validated. Explicit validity flags are
/// applied afterwards, so a manual verification can override the validator.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LeadUpdate {
    pub email: Option<String>,
    pub phone: Option<String>,
    /// `Some("")` clears the industry.
    pub industry: Option<String>,
    pub revenue: Option<f64>,
    pub email_valid: Option<bool>,
    pub phone_valid: Option<bool>,
}

impl LeadUpdate {
    /// Create an empty update.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    pub fn with_industry(mut self, industry: impl Into<String>) -> Self {
        self.industry = Some(industry.into());
        self
    }

    pub fn with_revenue(mut self, revenue: f64) -> Self {
        self.revenue = Some(revenue);
        self
    }

    pub fn with_email_valid(mut self, valid: bool) -> Self {
        self.email_valid = Some(valid);
        self
    }

    pub fn with_phone_valid(mut self, valid: bool) -> Self {
        self.phone_valid = Some(valid);
        self
    }

    /// Whether the update changes nothing.
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}
