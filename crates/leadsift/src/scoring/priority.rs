//! Mapping from lead score to outreach priority.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Outreach priority tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum PriorityLevel {
    Cold,
    Low,
    Medium,
    High,
    Critical,
}

impl PriorityLevel {
    /// Get a human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            PriorityLevel::Critical => "Critical",
            PriorityLevel::High => "High",
            PriorityLevel::Medium => "Medium",
            PriorityLevel::Low => "Low",
            PriorityLevel::Cold => "Cold",
        }
    }
}

impl fmt::Display for PriorityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Recommended handling for a lead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LeadPriority {
    pub level: PriorityLevel,
    /// Display colour used by dashboards.
    pub color: &'static str,
    pub action: &'static str,
    pub timeline: &'static str,
}

impl LeadPriority {
    /// Band a score into a priority tier.
    ///
    /// Total over all inputs: scores outside 0-100 fall into the nearest
    /// band, and NaN is treated as cold.
    pub fn for_score(score: f64) -> Self {
        let (level, color, action, timeline) = if score >= 90.0 {
            (PriorityLevel::Critical, "red", "Contact immediately", "Within 1 hour")
        } else if score >= 80.0 {
            (PriorityLevel::High, "orange", "Contact today", "Within 4 hours")
        } else if score >= 60.0 {
            (PriorityLevel::Medium, "yellow", "Contact this week", "Within 2 days")
        } else if score >= 40.0 {
            (PriorityLevel::Low, "blue", "Nurture campaign", "Within 1 week")
        } else {
            (PriorityLevel::Cold, "gray", "Data enrichment needed", "Review monthly")
        };

        Self {
            level,
            color,
            action,
            timeline,
        }
    }
}
