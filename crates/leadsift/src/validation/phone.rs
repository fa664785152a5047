//! Phone number validation, normalization and line-type detection.
//!
//! North American numbers (10 digits after dropping an optional leading `1`)
//! are normalized to `+1 (AAA) EEE-NNNN`. Anything else that starts with `+`
//! and has a plausible length is accepted as international and kept in its
//! compact `+digits` form.

use crate::config::PhoneRules;

use super::result::{PhoneType, ValidationResult};

const MIN_INTERNATIONAL_LEN: usize = 8;
const MAX_INTERNATIONAL_LEN: usize = 15;

/// Validates and normalizes phone numbers.
#[derive(Debug, Clone, Default)]
pub struct PhoneValidator {
    rules: PhoneRules,
}

impl PhoneValidator {
    /// Create a validator with the stock area code tables.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a validator with custom area code tables.
    pub fn with_rules(rules: PhoneRules) -> Self {
        Self { rules }
    }

    /// Get the active area code tables.
    pub fn rules(&self) -> &PhoneRules {
        &self.rules
    }

    /// Classify and normalize a phone number.
    ///
    /// Invalid numbers carry the raw input as their normalized form so the
    /// caller can still display what was supplied.
    pub fn validate(&self, raw: &str) -> ValidationResult {
        if raw.trim().is_empty() {
            return ValidationResult::invalid("Empty phone", 0).with_normalized("");
        }

        let cleaned = clean(raw);
        let digits = national_digits(&cleaned);

        if digits.len() == 10 {
            return self.validate_north_american(raw, digits);
        }

        if cleaned.starts_with('+')
            && (MIN_INTERNATIONAL_LEN..=MAX_INTERNATIONAL_LEN).contains(&cleaned.len())
        {
            return ValidationResult::valid(60)
                .with_normalized(cleaned)
                .with_phone_type(PhoneType::International);
        }

        ValidationResult::invalid("Unrecognized phone number format", 0).with_normalized(raw)
    }

    fn validate_north_american(&self, raw: &str, digits: &str) -> ValidationResult {
        let (area, rest) = digits.split_at(3);
        let (exchange, number) = rest.split_at(3);
        let normalized = format!("+1 ({}) {}-{}", area, exchange, number);

        // Toll-free codes are checked first; the generic branch would
        // otherwise report them as landlines.
        if contains(&self.rules.toll_free_area_codes, area) {
            return ValidationResult::valid(50)
                .with_normalized(normalized)
                .with_phone_type(PhoneType::TollFree);
        }

        if contains(&self.rules.invalid_area_codes, area) {
            return ValidationResult::invalid(format!("Invalid area code {}", area), 0)
                .with_normalized(raw);
        }

        if exchange.starts_with('0') || exchange.starts_with('1') {
            return ValidationResult::invalid(format!("Invalid exchange code {}", exchange), 20)
                .with_normalized(raw);
        }

        if contains(&self.rules.mobile_area_codes, area) {
            ValidationResult::valid(90)
                .with_normalized(normalized)
                .with_phone_type(PhoneType::Mobile)
        } else {
            ValidationResult::valid(70)
                .with_normalized(normalized)
                .with_phone_type(PhoneType::Landline)
        }
    }
}

/// Keep only digits, plus a `+` if the number starts with one.
fn clean(raw: &str) -> String {
    let mut cleaned = String::with_capacity(raw.len());
    if raw.trim_start().starts_with('+') {
        cleaned.push('+');
    }
    cleaned.extend(raw.chars().filter(|c| c.is_ascii_digit()));
    cleaned
}

/// Drop the `+` and an optional leading `1` country code.
fn national_digits(cleaned: &str) -> &str {
    let digits = cleaned.strip_prefix('+').unwrap_or(cleaned);
    digits.strip_prefix('1').unwrap_or(digits)
}

fn contains(codes: &[String], area: &str) -> bool {
    codes.iter().any(|code| code == area)
}
