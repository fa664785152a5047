//! LeadSift: data-quality validation and scoring for sales leads.
//!
//! LeadSift ingests a table of company/contact rows, drops duplicates,
//! validates each email and phone number, and ranks every lead with a
//! 0-100 score built from contact quality, revenue and industry.
//!
//! # Core Principles
//!
//! - **Pure**: validation and scoring are deterministic functions of their input
//! - **Forgiving**: bad cells mark a lead invalid, they never abort a batch
//! - **Configurable**: domain lists, area codes and scoring tables are data
//!
//! # Example
//!
//! ```
//! use leadsift::{LeadSift, PriorityLevel};
//!
//! let csv = "Company Name,Email,Phone,Industry,Revenue\n\
//!            Acme Corp,jane@acmecorp.io,917-555-0123,Technology,\"$12,000,000\"\n";
//!
//! let report = LeadSift::new().ingest(csv).unwrap();
//! let lead = &report.leads[0];
//!
//! assert!(lead.email_valid);
//! assert_eq!(lead.phone, "+1 (917) 555-0123");
//! assert_eq!(lead.priority().level, PriorityLevel::High);
//! ```

pub mod book;
pub mod config;
pub mod enrichment;
pub mod error;
pub mod export;
pub mod input;
pub mod lead;
pub mod scoring;
pub mod validation;

mod leadsift;

pub use crate::leadsift::{
    COMPANY_COLUMN, EMAIL_COLUMN, INDUSTRY_COLUMN, IngestReport, LeadSift, OPTIONAL_COLUMNS,
    PHONE_COLUMN, REQUIRED_COLUMNS, REVENUE_COLUMN, parse_revenue,
};
pub use book::LeadBook;
pub use config::{EmailRules, LeadSiftConfig, PhoneRules, RevenueBand, ScoringRules};
pub use enrichment::{EnrichmentData, EnrichmentProvider, MockEnrichmentProvider};
pub use error::{LeadError, Result};
pub use export::{CSV_EXPORT_HEADERS, ExportFormat, export_leads};
pub use input::{DataTable, SourceMetadata};
pub use lead::{
    IndustryStats, Lead, LeadAnalytics, LeadFilters, LeadInsights, LeadUpdate, ScoreBucket,
    filter_leads,
};
pub use scoring::{LeadPriority, LeadScorer, PriorityLevel, ScoreBreakdown, ScoreInput};
pub use validation::{EmailValidator, PhoneType, PhoneValidator, ValidationResult};
