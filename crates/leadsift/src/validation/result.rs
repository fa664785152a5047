//! Validation outcome types.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Line type of a phone number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PhoneType {
    Mobile,
    Landline,
    International,
    TollFree,
    /// Not classified (invalid or missing number).
    #[default]
    Unknown,
}

impl PhoneType {
    /// Get the wire name of the phone type.
    pub fn as_str(&self) -> &'static str {
        match self {
            PhoneType::Mobile => "mobile",
            PhoneType::Landline => "landline",
            PhoneType::International => "international",
            PhoneType::TollFree => "toll-free",
            PhoneType::Unknown => "unknown",
        }
    }
}

impl fmt::Display for PhoneType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of validating a single email or phone value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    /// Whether the value is usable for outreach.
    pub is_valid: bool,
    /// Why the value was rejected or down-weighted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    /// Quality score (0-100).
    pub score: u8,
    /// Display form of the value (phones only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub normalized: Option<String>,
    /// Line type (phones only).
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub phone_type: Option<PhoneType>,
}

impl ValidationResult {
    /// A passing result with the given score.
    pub fn valid(score: u8) -> Self {
        Self {
            is_valid: true,
            reason: None,
            score: score.min(100),
            normalized: None,
            phone_type: None,
        }
    }

    /// A failing result with a reason.
    pub fn invalid(reason: impl Into<String>, score: u8) -> Self {
        Self {
            is_valid: false,
            reason: Some(reason.into()),
            score: score.min(100),
            normalized: None,
            phone_type: None,
        }
    }

    /// Attach a reason.
    pub fn with_reason(mut self, reason: impl Into<String>) -> Self {
        self.reason = Some(reason.into());
        self
    }

    /// Attach a normalized display form.
    pub fn with_normalized(mut self, normalized: impl Into<String>) -> Self {
        self.normalized = Some(normalized.into());
        self
    }

    /// Attach a phone line type.
    pub fn with_phone_type(mut self, phone_type: PhoneType) -> Self {
        self.phone_type = Some(phone_type);
        self
    }
}
