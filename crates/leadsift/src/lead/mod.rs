//! Lead entities and read-only views over lead collections.

mod analytics;
mod filters;
mod insights;
mod record;

pub use analytics::{IndustryStats, LeadAnalytics, ScoreBucket};
pub use filters::{LeadFilters, filter_leads};
pub use insights::LeadInsights;
pub use record::{Lead, LeadUpdate};
