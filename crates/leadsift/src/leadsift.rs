//! Main LeadSift engine: ingestion, validation and scoring.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::config::LeadSiftConfig;
use crate::error::{LeadError, Result};
use crate::input::{DataTable, Parser, ParserConfig, SourceMetadata};
use crate::lead::{Lead, LeadAnalytics, LeadUpdate};
use crate::scoring::{LeadScorer, ScoreInput};
use crate::validation::{EmailValidator, PhoneValidator, ValidationResult};

/// Header of the company name column.
pub const COMPANY_COLUMN: &str = "Company Name";
/// Header of the email column.
pub const EMAIL_COLUMN: &str = "Email";
/// Header of the optional phone column.
pub const PHONE_COLUMN: &str = "Phone";
/// Header of the optional industry column.
pub const INDUSTRY_COLUMN: &str = "Industry";
/// Header of the optional revenue column.
pub const REVENUE_COLUMN: &str = "Revenue";

/// Columns every lead table must have.
pub const REQUIRED_COLUMNS: &[&str] = &[COMPANY_COLUMN, EMAIL_COLUMN];
/// Columns a lead table may carry.
pub const OPTIONAL_COLUMNS: &[&str] = &[PHONE_COLUMN, INDUSTRY_COLUMN, REVENUE_COLUMN];

/// Outcome of ingesting a lead table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IngestReport {
    /// Scored leads in input order.
    pub leads: Vec<Lead>,
    /// Rows dropped because their email or company was already seen.
    pub duplicates_removed: usize,
    /// Data rows read, excluding the header.
    pub rows_read: usize,
    /// Rows dropped for lacking a company name.
    pub rows_skipped: usize,
    /// File metadata, when ingested from a file.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<SourceMetadata>,
}

impl IngestReport {
    /// Analytics over the ingested leads.
    pub fn analytics(&self) -> LeadAnalytics {
        LeadAnalytics::compute(&self.leads, self.duplicates_removed)
    }
}

/// The lead data-quality and scoring engine.
///
/// Holds configuration only. Every call is independent of previous calls.
#[derive(Debug, Clone, Default)]
pub struct LeadSift {
    parser: Parser,
    email: EmailValidator,
    phone: PhoneValidator,
    scorer: LeadScorer,
}

impl LeadSift {
    /// Create an engine with the stock reference tables.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an engine with custom reference tables.
    pub fn with_config(config: LeadSiftConfig) -> Self {
        Self {
            parser: Parser::new(),
            email: EmailValidator::with_rules(config.email),
            phone: PhoneValidator::with_rules(config.phone),
            scorer: LeadScorer::with_rules(config.scoring),
        }
    }

    /// Use a custom parser configuration.
    pub fn with_parser_config(mut self, config: ParserConfig) -> Self {
        self.parser = Parser::with_config(config);
        self
    }

    /// Classify an email address.
    pub fn validate_email(&self, email: &str) -> ValidationResult {
        self.email.validate(email)
    }

    /// Classify and normalize a phone number.
    pub fn validate_phone(&self, phone: &str) -> ValidationResult {
        self.phone.validate(phone)
    }

    /// Calculate a lead score.
    pub fn score(&self, input: &ScoreInput<'_>) -> u8 {
        self.scorer.score(input)
    }

    /// Get the scorer.
    pub fn scorer(&self) -> &LeadScorer {
        &self.scorer
    }

    /// Ingest comma-separated text whose first row is the header.
    pub fn ingest(&self, raw: &str) -> Result<IngestReport> {
        let table = self.parser.parse_str(raw)?;
        self.ingest_table(&table)
    }

    /// Ingest a lead file, recording its metadata.
    pub fn ingest_file(&self, path: impl AsRef<Path>) -> Result<IngestReport> {
        let (table, source) = self.parser.parse_file(path)?;
        let mut report = self.ingest_table(&table)?;
        report.source = Some(source);
        Ok(report)
    }

    /// Deduplicate, validate and score the rows of a parsed table.
    ///
    /// Fails only when required columns are missing. Bad cells never abort
    /// the batch; they show up as invalid fields on the lead.
    pub fn ingest_table(&self, table: &DataTable) -> Result<IngestReport> {
        let missing: Vec<String> = REQUIRED_COLUMNS
            .iter()
            .filter(|col| table.column_index(col).is_none())
            .map(|col| col.to_string())
            .collect();
        if !missing.is_empty() {
            return Err(LeadError::MissingColumns { columns: missing });
        }

        let columns = Columns::locate(table);
        let mut seen_emails: HashSet<String> = HashSet::new();
        let mut seen_companies: HashSet<String> = HashSet::new();
        let mut leads = Vec::with_capacity(table.row_count());
        let mut duplicates_removed = 0;
        let mut rows_skipped = 0;

        for (row_idx, row) in table.rows.iter().enumerate() {
            let cell = |col: Option<usize>| col.and_then(|i| row.get(i)).map_or("", |s| s.as_str());
            let line = row_idx + 2;

            let company = cell(Some(columns.company));
            let email = cell(Some(columns.email));
            if company.trim().is_empty() {
                debug!(line, "skipping row without a company name");
                rows_skipped += 1;
                continue;
            }

            let company_key = company.trim().to_lowercase();
            let email_key = email.trim().to_lowercase();
            let duplicate_email = !email_key.is_empty() && seen_emails.contains(&email_key);
            if duplicate_email || seen_companies.contains(&company_key) {
                debug!(line, company, email, "dropping duplicate row");
                duplicates_removed += 1;
                continue;
            }
            if !email_key.is_empty() {
                seen_emails.insert(email_key);
            }
            seen_companies.insert(company_key);

            let revenue_cell = cell(columns.revenue);
            let revenue = parse_revenue(revenue_cell).unwrap_or_else(|| {
                warn!(line, company, value = revenue_cell, "unparseable revenue, using 0");
                0.0
            });

            leads.push(self.build_lead(
                company,
                email,
                cell(columns.phone),
                cell(columns.industry),
                revenue,
            ));
        }

        info!(
            rows = table.row_count(),
            leads = leads.len(),
            duplicates_removed,
            rows_skipped,
            "ingested lead table"
        );

        Ok(IngestReport {
            leads,
            duplicates_removed,
            rows_read: table.row_count(),
            rows_skipped,
            source: None,
        })
    }

    /// Validate and score a single lead from its raw fields.
    pub fn build_lead(
        &self,
        company: &str,
        email: &str,
        phone: &str,
        industry: &str,
        revenue: f64,
    ) -> Lead {
        let industry = industry.trim();
        let mut lead = Lead {
            company_name: company.trim().to_string(),
            email: email.trim().to_string(),
            email_valid: false,
            email_score: 0,
            email_reason: None,
            phone: String::new(),
            phone_valid: false,
            phone_score: 0,
            phone_type: Default::default(),
            industry: (!industry.is_empty()).then(|| industry.to_string()),
            revenue: sanitize_revenue(revenue),
            lead_score: 0,
        };
        self.apply_email(&mut lead, email);
        self.apply_phone(&mut lead, phone);
        self.rescore(&mut lead);
        lead
    }

    /// Apply a partial edit and recompute the score.
    pub fn apply_update(&self, lead: &mut Lead, update: &LeadUpdate) {
        if let Some(email) = &update.email {
            self.apply_email(lead, email);
        }
        if let Some(phone) = &update.phone {
            self.apply_phone(lead, phone);
        }
        if let Some(industry) = &update.industry {
            let industry = industry.trim();
            lead.industry = (!industry.is_empty()).then(|| industry.to_string());
        }
        if let Some(revenue) = update.revenue {
            lead.revenue = sanitize_revenue(revenue);
        }
        if let Some(valid) = update.email_valid {
            lead.email_valid = valid;
        }
        if let Some(valid) = update.phone_valid {
            lead.phone_valid = valid;
        }
        self.rescore(lead);
    }

    /// Recompute a lead's score from its current fields.
    pub fn rescore(&self, lead: &mut Lead) {
        lead.lead_score = self.scorer.score(&lead.score_input());
    }

    fn apply_email(&self, lead: &mut Lead, email: &str) {
        let result = self.email.validate(email);
        lead.email = email.trim().to_string();
        lead.email_valid = result.is_valid;
        lead.email_score = result.score;
        lead.email_reason = result.reason;
    }

    fn apply_phone(&self, lead: &mut Lead, phone: &str) {
        let phone = phone.trim();
        if phone.is_empty() {
            lead.phone = String::new();
            lead.phone_valid = false;
            lead.phone_score = 0;
            lead.phone_type = Default::default();
            return;
        }

        let result = self.phone.validate(phone);
        lead.phone = result.normalized.unwrap_or_else(|| phone.to_string());
        lead.phone_valid = result.is_valid;
        lead.phone_score = result.score;
        lead.phone_type = result.phone_type.unwrap_or_default();
    }
}

/// Positions of the known columns in a table.
struct Columns {
    company: usize,
    email: usize,
    phone: Option<usize>,
    industry: Option<usize>,
    revenue: Option<usize>,
}

impl Columns {
    /// Callers must have checked that the required columns exist.
    fn locate(table: &DataTable) -> Self {
        Self {
            company: table.column_index(COMPANY_COLUMN).unwrap_or_default(),
            email: table.column_index(EMAIL_COLUMN).unwrap_or_default(),
            phone: table.column_index(PHONE_COLUMN),
            industry: table.column_index(INDUSTRY_COLUMN),
            revenue: table.column_index(REVENUE_COLUMN),
        }
    }
}

/// Parse a revenue cell such as `$1,250,000`.
///
/// Empty cells are 0. Returns `None` for text that is not a non-negative
/// number.
pub fn parse_revenue(cell: &str) -> Option<f64> {
    let cleaned: String = cell.chars().filter(|c| *c != '$' && *c != ',').collect();
    let cleaned = cleaned.trim();
    if cleaned.is_empty() {
        return Some(0.0);
    }

    cleaned
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite() && *v >= 0.0)
}

fn sanitize_revenue(revenue: f64) -> f64 {
    if revenue.is_finite() && revenue > 0.0 {
        revenue
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::PhoneType;

    #[test]
    fn test_parse_revenue() {
        assert_eq!(parse_revenue("$1,250,000"), Some(1_250_000.0));
        assert_eq!(parse_revenue("500000.50"), Some(500_000.5));
        assert_eq!(parse_revenue(""), Some(0.0));
        assert_eq!(parse_revenue(" $ "), Some(0.0));
        assert_eq!(parse_revenue("about a million"), None);
        assert_eq!(parse_revenue("-40"), None);
    }

    #[test]
    fn test_ingest_basic() {
        let raw = "Company Name,Email,Phone,Industry,Revenue\n\
                   Acme Corp,jane.doe@acmecorp.io,9175550123,Technology,\"$10,000,000\"\n";
        let report = LeadSift::new().ingest(raw).unwrap();

        assert_eq!(report.leads.len(), 1);
        let lead = &report.leads[0];
        assert_eq!(lead.company_name, "Acme Corp");
        assert!(lead.email_valid);
        assert_eq!(lead.email_score, 80);
        assert_eq!(lead.phone, "+1 (917) 555-0123");
        assert_eq!(lead.phone_type, PhoneType::Mobile);
        assert_eq!(lead.revenue, 10_000_000.0);
        // 32 + 27 + 20 + 10
        assert_eq!(lead.lead_score(), 89);
    }

    #[test]
    fn test_missing_columns() {
        let err = LeadSift::new().ingest("Name,Phone\nAcme,2025550123\n").unwrap_err();
        assert_eq!(
            err.missing_columns().unwrap(),
            &["Company Name".to_string(), "Email".to_string()]
        );
        assert_eq!(err.to_string(), "Missing required columns: Company Name, Email");
    }

    #[test]
    fn test_empty_phone_is_invalid() {
        let report = LeadSift::new()
            .ingest("Company Name,Email,Phone\nAcme,jane@acme.io,\n")
            .unwrap();
        let lead = &report.leads[0];
        assert!(!lead.phone_valid);
        assert_eq!(lead.phone_score, 0);
        assert_eq!(lead.phone, "");
        assert_eq!(lead.phone_type, PhoneType::Unknown);
    }

    #[test]
    fn test_invalid_phone_keeps_raw() {
        let report = LeadSift::new()
            .ingest("Company Name,Email,Phone\nAcme,jane@acme.io,(000) 555-0123\n")
            .unwrap();
        assert_eq!(report.leads[0].phone, "(000) 555-0123");
        assert!(!report.leads[0].phone_valid);
    }

    #[test]
    fn test_rows_without_company_are_skipped() {
        let report = LeadSift::new()
            .ingest("Company Name,Email\n,orphan@acme.io\nAcme,jane@acme.io\n")
            .unwrap();
        assert_eq!(report.leads.len(), 1);
        assert_eq!(report.rows_skipped, 1);
        assert_eq!(report.rows_read, 2);
    }

    #[test]
    fn test_empty_emails_do_not_collide() {
        let report = LeadSift::new()
            .ingest("Company Name,Email\nAcme,\nBeta,\n")
            .unwrap();
        assert_eq!(report.leads.len(), 2);
        assert_eq!(report.duplicates_removed, 0);
    }

    #[test]
    fn test_apply_update_rescores() {
        let engine = LeadSift::new();
        let mut lead = engine.build_lead("Acme", "jane@acme.io", "", "", 0.0);
        assert_eq!(lead.lead_score(), 32);

        engine.apply_update(
            &mut lead,
            &LeadUpdate::new().with_industry("Finance").with_revenue(2_000_000.0),
        );
        assert_eq!(lead.industry.as_deref(), Some("Finance"));
        assert_eq!(lead.lead_score(), 32 + 15 + 9);

        engine.apply_update(&mut lead, &LeadUpdate::new().with_email_valid(false));
        assert_eq!(lead.lead_score(), 15 + 9);
    }

    #[test]
    fn test_apply_update_revalidates_contact_fields() {
        let engine = LeadSift::new();
        let mut lead = engine.build_lead("Acme", "jane@gmial.com", "", "", 0.0);
        assert!(!lead.email_valid);

        engine.apply_update(
            &mut lead,
            &LeadUpdate::new().with_email("jane@acme.io").with_phone("202-555-0123"),
        );
        assert!(lead.email_valid);
        assert!(lead.email_reason.is_none());
        assert_eq!(lead.phone, "+1 (202) 555-0123");
        assert_eq!(lead.lead_score(), 32 + 21);
    }
}
