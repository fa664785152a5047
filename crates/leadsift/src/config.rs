//! Reference tables used by the validators and the scorer.
//!
//! Every table has a built-in default matching the stock lead rules, and
//! every table can be overridden from a JSON file. Keys missing from the
//! file keep their defaults.
//!
//! ```json
//! {
//!   "email": { "disposable_domains": ["mailinator.com", "trashmail.de"] },
//!   "scoring": { "industry_points": { "Biotech": 9 } }
//! }
//! ```

use std::fs;
use std::path::Path;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{LeadError, Result};

/// Top-level configuration for the engine.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LeadSiftConfig {
    /// Email validation tables.
    pub email: EmailRules,
    /// Phone validation tables.
    pub phone: PhoneRules,
    /// Lead scoring tables.
    pub scoring: ScoringRules,
}

impl LeadSiftConfig {
    /// Load configuration from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|e| LeadError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::from_json(&contents)
    }

    /// Parse configuration from a JSON string.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: LeadSiftConfig = serde_json::from_str(json)?;
        config.check()?;
        Ok(config)
    }

    fn check(&self) -> Result<()> {
        for band in &self.scoring.revenue_bands {
            if !band.min.is_finite() || band.min < 0.0 {
                return Err(LeadError::Config(format!(
                    "revenue band minimum must be a non-negative number, got {}",
                    band.min
                )));
            }
        }
        for code in self
            .phone
            .invalid_area_codes
            .iter()
            .chain(&self.phone.mobile_area_codes)
            .chain(&self.phone.toll_free_area_codes)
        {
            if code.len() != 3 || !code.bytes().all(|b| b.is_ascii_digit()) {
                return Err(LeadError::Config(format!(
                    "area code must be exactly three digits, got '{}'",
                    code
                )));
            }
        }
        Ok(())
    }
}

/// Domain and prefix tables for email validation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EmailRules {
    /// Misspelled domain -> intended domain.
    pub typo_domains: IndexMap<String, String>,
    /// Known throwaway providers.
    pub disposable_domains: Vec<String>,
    /// Free consumer providers. Any other domain counts as a business domain.
    pub free_domains: Vec<String>,
    /// Department aliases matched anywhere in the local part.
    pub role_prefixes: Vec<String>,
}

impl Default for EmailRules {
    fn default() -> Self {
        let typo_domains = [
            ("gmial.com", "gmail.com"),
            ("gmai.com", "gmail.com"),
            ("yahooo.com", "yahoo.com"),
            ("hotmial.com", "hotmail.com"),
            ("outlok.com", "outlook.com"),
        ]
        .into_iter()
        .map(|(typo, fixed)| (typo.to_string(), fixed.to_string()))
        .collect();

        Self {
            typo_domains,
            disposable_domains: strings(&[
                "mailinator.com",
                "tempmail.com",
                "10minutemail.com",
                "guerrillamail.com",
                "throwaway.email",
                "temp-mail.org",
                "yopmail.com",
                "maildrop.cc",
                "sharklasers.com",
                "grr.la",
                "guerrillamailblock.com",
                "pokemail.net",
                "spam4.me",
                "bccto.me",
                "chacuo.net",
                "dispostable.com",
            ]),
            free_domains: strings(&[
                "gmail.com",
                "yahoo.com",
                "hotmail.com",
                "outlook.com",
                "aol.com",
                "icloud.com",
                "protonmail.com",
                "zoho.com",
            ]),
            role_prefixes: strings(&[
                "info",
                "admin",
                "support",
                "sales",
                "marketing",
                "noreply",
                "no-reply",
            ]),
        }
    }
}

/// Area code tables for North American phone validation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PhoneRules {
    /// Area codes that are never assigned to real subscribers.
    pub invalid_area_codes: Vec<String>,
    /// Area codes treated as mobile-heavy.
    pub mobile_area_codes: Vec<String>,
    /// Reserved toll-free area codes.
    pub toll_free_area_codes: Vec<String>,
}

impl Default for PhoneRules {
    fn default() -> Self {
        Self {
            invalid_area_codes: strings(&["000", "555", "911"]),
            mobile_area_codes: strings(&["917", "646", "347", "929", "718"]),
            toll_free_area_codes: strings(&["800", "888", "877", "866", "855", "844", "833", "822"]),
        }
    }
}

/// A revenue threshold and the points it earns.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RevenueBand {
    /// Minimum annual revenue (inclusive).
    pub min: f64,
    /// Points awarded at or above `min`.
    pub points: u8,
}

/// Tables for the revenue and industry components of the lead score.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringRules {
    /// Exact industry name -> points.
    pub industry_points: IndexMap<String, u8>,
    /// Points for a non-empty industry missing from the table.
    pub default_industry_points: u8,
    /// Revenue bands; the highest satisfied band wins.
    pub revenue_bands: Vec<RevenueBand>,
}

impl Default for ScoringRules {
    fn default() -> Self {
        let industry_points = [
            ("Technology", 10),
            ("Software", 10),
            ("SaaS", 10),
            ("Finance", 9),
            ("Healthcare", 9),
            ("Manufacturing", 8),
            ("Professional Services", 8),
            ("Real Estate", 7),
            ("Retail", 6),
            ("Education", 6),
            ("Non-profit", 4),
            ("Government", 3),
        ]
        .into_iter()
        .map(|(name, points)| (name.to_string(), points))
        .collect();

        let revenue_bands = [
            (10_000_000.0, 20),
            (5_000_000.0, 18),
            (1_000_000.0, 15),
            (500_000.0, 12),
            (100_000.0, 8),
            (50_000.0, 5),
        ]
        .into_iter()
        .map(|(min, points)| RevenueBand { min, points })
        .collect();

        Self {
            industry_points,
            default_industry_points: 5,
            revenue_bands,
        }
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_cover_stock_tables() {
        let config = LeadSiftConfig::default();
        assert!(config.email.disposable_domains.len() >= 15);
        assert_eq!(config.email.free_domains.len(), 8);
        assert_eq!(config.email.typo_domains.get("gmial.com").map(String::as_str), Some("gmail.com"));
        assert_eq!(config.phone.toll_free_area_codes.len(), 8);
        assert_eq!(config.scoring.industry_points.get("SaaS"), Some(&10));
        assert_eq!(config.scoring.revenue_bands.len(), 6);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let json = r#"{ "scoring": { "industry_points": { "Biotech": 9 } } }"#;
        let config = LeadSiftConfig::from_json(json).unwrap();

        assert_eq!(config.scoring.industry_points.len(), 1);
        assert_eq!(config.scoring.default_industry_points, 5);
        assert_eq!(config.email.free_domains.len(), 8);
        assert_eq!(config.phone.mobile_area_codes.len(), 5);
    }

    #[test]
    fn test_rejects_bad_area_code() {
        let json = r#"{ "phone": { "mobile_area_codes": ["91"] } }"#;
        let err = LeadSiftConfig::from_json(json).unwrap_err();
        assert!(matches!(err, LeadError::Config(_)));
    }

    #[test]
    fn test_rejects_negative_band() {
        let json = r#"{ "scoring": { "revenue_bands": [{ "min": -1.0, "points": 3 }] } }"#;
        assert!(LeadSiftConfig::from_json(json).is_err());
    }

    #[test]
    fn test_load_missing_file() {
        let err = LeadSiftConfig::load("/nonexistent/leadsift.json").unwrap_err();
        assert!(matches!(err, LeadError::Io { .. }));
    }
}
