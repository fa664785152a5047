//! Pluggable company enrichment.
//!
//! The scoring engine does not depend on enrichment. A provider looks up
//! extra company data for a lead; when that data corrects the industry or
//! revenue, applying it goes through the normal update path and rescores.

mod mock;
mod provider;

pub use mock::MockEnrichmentProvider;
pub use provider::{BusinessIntel, CompanyInfo, ContactInfo, EnrichmentData, EnrichmentProvider};
