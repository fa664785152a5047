//! CSV and JSON export of scored leads.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{LeadError, Result};
use crate::lead::Lead;

/// Header row of the CSV export.
pub const CSV_EXPORT_HEADERS: &[&str] = &[
    "Company Name",
    "Email",
    "Phone",
    "Industry",
    "Revenue",
    "Lead Score",
    "Email Valid",
    "Phone Valid",
    "Email Score",
    "Phone Score",
];

/// Supported export formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    #[default]
    Csv,
    Json,
}

impl ExportFormat {
    /// File extension for the format.
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }

    /// MIME type for the format.
    pub fn mime_type(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "text/csv",
            ExportFormat::Json => "application/json",
        }
    }
}

impl FromStr for ExportFormat {
    type Err = LeadError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "csv" => Ok(ExportFormat::Csv),
            "json" => Ok(ExportFormat::Json),
            _ => Err(LeadError::UnsupportedFormat(s.to_string())),
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

/// Serialize leads in the requested format.
pub fn export_leads(leads: &[Lead], format: ExportFormat) -> Result<Vec<u8>> {
    match format {
        ExportFormat::Csv => export_csv(leads),
        ExportFormat::Json => Ok(serde_json::to_vec_pretty(leads)?),
    }
}

/// One row per lead under [`CSV_EXPORT_HEADERS`]. Cells containing commas
/// or quotes are quoted; booleans are written as `true`/`false`.
fn export_csv(leads: &[Lead]) -> Result<Vec<u8>> {
    let mut writer = csv::WriterBuilder::new()
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    writer.write_record(CSV_EXPORT_HEADERS)?;
    for lead in leads {
        writer.write_record([
            lead.company_name.clone(),
            lead.email.clone(),
            lead.phone.clone(),
            lead.industry.clone().unwrap_or_default(),
            lead.revenue.to_string(),
            lead.lead_score().to_string(),
            lead.email_valid.to_string(),
            lead.phone_valid.to_string(),
            lead.email_score.to_string(),
            lead.phone_score.to_string(),
        ])?;
    }

    writer
        .into_inner()
        .map_err(|e| LeadError::Csv(csv::Error::from(e.into_error())))
}
