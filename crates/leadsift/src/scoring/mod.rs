//! Composite lead scoring and priority tiers.

mod priority;
mod scorer;

pub use priority::{LeadPriority, PriorityLevel};
pub use scorer::{LeadScorer, ScoreBreakdown, ScoreInput};
