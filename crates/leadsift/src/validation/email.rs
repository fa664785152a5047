//! Email address validation and quality scoring.
//!
//! Rules run in a fixed order and the first terminal rule wins:
//!
//! 1. empty input
//! 2. malformed address
//! 3. known domain typo (`gmial.com`)
//! 4. disposable provider
//! 5. missing alphabetic top-level domain
//! 6. address longer than 254 characters
//! 7. local part longer than 64 characters
//!
//! Addresses that survive start at a base score, gain points for a business
//! domain, and are penalised for role aliases such as `info@` or `sales@`.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::config::EmailRules;

use super::result::ValidationResult;

static EMAIL_FORMAT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$",
    )
    .unwrap()
});

static TOP_LEVEL_DOMAIN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\.[a-zA-Z]{2,}$").unwrap());

const MAX_EMAIL_LEN: usize = 254;
const MAX_LOCAL_LEN: usize = 64;

const BASE_SCORE: i32 = 50;
const BUSINESS_DOMAIN_BONUS: i32 = 30;
const ROLE_PENALTY: i32 = 20;
const ROLE_FLOOR: i32 = 30;
const PLUS_ADDRESS_BONUS: i32 = 10;

/// Reason attached to valid role-based addresses.
pub const ROLE_BASED_REASON: &str = "Role-based email (lower conversion potential)";

/// Validates email addresses against configurable domain tables.
#[derive(Debug, Clone, Default)]
pub struct EmailValidator {
    rules: EmailRules,
}

impl EmailValidator {
    /// Create a validator with the stock domain tables.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a validator with custom domain tables.
    pub fn with_rules(rules: EmailRules) -> Self {
        Self { rules }
    }

    /// Get the active domain tables.
    pub fn rules(&self) -> &EmailRules {
        &self.rules
    }

    /// Classify an email address.
    pub fn validate(&self, raw: &str) -> ValidationResult {
        let email = raw.trim();
        if email.is_empty() {
            return ValidationResult::invalid("Empty email", 0);
        }

        if !EMAIL_FORMAT.is_match(email) {
            return ValidationResult::invalid("Invalid email format", 0);
        }

        // The format regex guarantees exactly one '@'.
        let Some((local, domain)) = email.split_once('@') else {
            return ValidationResult::invalid("Invalid email format", 0);
        };
        let local = local.to_ascii_lowercase();
        let domain = domain.to_ascii_lowercase();

        if let Some(suggestion) = self.typo_correction(&domain) {
            return ValidationResult::invalid(format!("Did you mean {}?", suggestion), 20);
        }

        if self.is_disposable(&domain) {
            return ValidationResult::invalid("Disposable email domain detected", 10);
        }

        if !TOP_LEVEL_DOMAIN.is_match(&domain) {
            return ValidationResult::invalid("Invalid top-level domain", 10);
        }

        if email.len() > MAX_EMAIL_LEN {
            return ValidationResult::invalid("Email too long", 0);
        }

        if local.len() > MAX_LOCAL_LEN {
            return ValidationResult::invalid("Local part too long", 10);
        }

        let mut score = BASE_SCORE;
        if !self.is_free_domain(&domain) {
            score += BUSINESS_DOMAIN_BONUS;
        }

        if self.is_role_based(&local) {
            score = (score - ROLE_PENALTY).max(ROLE_FLOOR);
            return ValidationResult::valid(clamp_score(score)).with_reason(ROLE_BASED_REASON);
        }

        if local.contains('+') {
            score += PLUS_ADDRESS_BONUS;
        }

        ValidationResult::valid(clamp_score(score))
    }

    /// The intended domain if `domain` is a known misspelling.
    pub fn typo_correction(&self, domain: &str) -> Option<&str> {
        self.rules
            .typo_domains
            .iter()
            .find(|(typo, _)| typo.eq_ignore_ascii_case(domain))
            .map(|(_, fixed)| fixed.as_str())
    }

    /// Whether the domain is a known throwaway provider.
    pub fn is_disposable(&self, domain: &str) -> bool {
        contains_ignore_case(&self.rules.disposable_domains, domain)
    }

    /// Whether the domain is a free consumer provider.
    pub fn is_free_domain(&self, domain: &str) -> bool {
        contains_ignore_case(&self.rules.free_domains, domain)
    }

    /// Whether the local part contains a department alias.
    pub fn is_role_based(&self, local: &str) -> bool {
        let local = local.to_ascii_lowercase();
        self.rules
            .role_prefixes
            .iter()
            .any(|prefix| local.contains(&prefix.to_ascii_lowercase()))
    }
}

fn contains_ignore_case(list: &[String], value: &str) -> bool {
    list.iter().any(|item| item.eq_ignore_ascii_case(value))
}

fn clamp_score(score: i32) -> u8 {
    score.clamp(0, 100) as u8
}
