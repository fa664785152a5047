//! Stateful lead collection for interactive front ends.
//!
//! [`LeadBook`] keeps the most recent upload and routes every edit through
//! the engine so scores never go stale. Analytics, insights and filtered
//! views are recomputed from the current collection on each call.

use std::path::Path;

use tracing::debug;

use crate::enrichment::{EnrichmentData, EnrichmentProvider};
use crate::error::{LeadError, Result};
use crate::export::{ExportFormat, export_leads};
use crate::lead::{Lead, LeadAnalytics, LeadFilters, LeadInsights, LeadUpdate, filter_leads};
use crate::leadsift::{IngestReport, LeadSift};

/// The current lead collection and the engine that scores it.
#[derive(Debug, Clone, Default)]
pub struct LeadBook {
    engine: LeadSift,
    leads: Vec<Lead>,
    duplicates_removed: usize,
}

impl LeadBook {
    /// Create an empty book with the stock engine.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty book around a configured engine.
    pub fn with_engine(engine: LeadSift) -> Self {
        Self {
            engine,
            ..Self::default()
        }
    }

    /// Get the engine.
    pub fn engine(&self) -> &LeadSift {
        &self.engine
    }

    /// Replace the collection with freshly ingested text.
    ///
    /// On error the previous collection is kept.
    pub fn upload_leads(&mut self, raw: &str) -> Result<&[Lead]> {
        let report = self.engine.ingest(raw)?;
        Ok(self.replace(report))
    }

    /// Replace the collection with a freshly ingested file.
    pub fn upload_file(&mut self, path: impl AsRef<Path>) -> Result<&[Lead]> {
        let report = self.engine.ingest_file(path)?;
        Ok(self.replace(report))
    }

    fn replace(&mut self, report: IngestReport) -> &[Lead] {
        self.leads = report.leads;
        self.duplicates_removed = report.duplicates_removed;
        &self.leads
    }

    /// All leads in upload order.
    pub fn leads(&self) -> &[Lead] {
        &self.leads
    }

    /// Leads sorted by score, highest first. Ties keep upload order.
    pub fn ranked(&self) -> Vec<&Lead> {
        let mut ranked: Vec<&Lead> = self.leads.iter().collect();
        ranked.sort_by(|a, b| b.lead_score().cmp(&a.lead_score()));
        ranked
    }

    /// Find a lead by company name, ignoring case.
    pub fn lead(&self, company: &str) -> Option<&Lead> {
        self.position(company).map(|idx| &self.leads[idx])
    }

    fn position(&self, company: &str) -> Option<usize> {
        let key = company.trim().to_lowercase();
        self.leads.iter().position(|lead| lead.company_key() == key)
    }

    /// Edit a lead and rescore it.
    pub fn update_lead(&mut self, company: &str, update: &LeadUpdate) -> Result<&Lead> {
        let idx = self
            .position(company)
            .ok_or_else(|| LeadError::LeadNotFound(company.to_string()))?;

        let lead = &mut self.leads[idx];
        let previous = lead.lead_score();
        self.engine.apply_update(lead, update);
        debug!(
            company = lead.company_name.as_str(),
            previous,
            score = lead.lead_score(),
            "rescored lead"
        );
        Ok(&self.leads[idx])
    }

    /// Fetch enrichment data for a lead and apply any scored corrections.
    pub fn enrich_lead(
        &mut self,
        company: &str,
        provider: &dyn EnrichmentProvider,
    ) -> Result<EnrichmentData> {
        let lead = self
            .lead(company)
            .ok_or_else(|| LeadError::LeadNotFound(company.to_string()))?;

        let data = provider.enrich(lead)?;
        debug!(provider = provider.name(), company, "enriched lead");

        let update = data.to_update();
        if !update.is_empty() {
            self.update_lead(company, &update)?;
        }
        Ok(data)
    }

    /// Leads that pass the filter.
    pub fn filtered(&self, filters: &LeadFilters) -> Vec<Lead> {
        filter_leads(&self.leads, filters)
    }

    /// Analytics over the whole collection.
    pub fn analytics(&self) -> LeadAnalytics {
        LeadAnalytics::compute(&self.leads, self.duplicates_removed)
    }

    /// Recommendations and risks for the whole collection.
    pub fn insights(&self) -> LeadInsights {
        LeadInsights::generate(&self.leads)
    }

    /// Export the leads that pass the filter.
    pub fn export(&self, format: ExportFormat, filters: &LeadFilters) -> Result<Vec<u8>> {
        export_leads(&self.filtered(filters), format)
    }

    /// Drop every lead.
    pub fn clear(&mut self) {
        self.leads.clear();
        self.duplicates_removed = 0;
    }
}
