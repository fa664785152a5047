//! Property-based tests for LeadSift validators and scoring.
//!
//! These tests use proptest to generate random inputs and verify that
//! validators and the scorer maintain their invariants under all conditions.
//!
//! # Running Property Tests
//!
//! ```bash
//! # Run all property tests
//! cargo test -p leadsift --test property_tests
//!
//! # Run with more cases (slower but more thorough)
//! PROPTEST_CASES=10000 cargo test -p leadsift --test property_tests
//! ```

use proptest::prelude::*;

use leadsift::{EmailValidator, LeadPriority, LeadSift, PhoneValidator, ScoreInput};

// =============================================================================
// Test Strategies
// =============================================================================

/// Generate arbitrary ASCII strings (common case)
fn ascii_string() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9_@+\\-\\.\\s]{0,100}"
}

/// Generate strings that look like email addresses
fn email_like() -> impl Strategy<Value = String> {
    prop_oneof![
        // Plain address
        "[a-z]{1,20}@[a-z]{2,15}\\.(com|io|org|net)",
        // Dotted local part with plus tag
        "[a-z]{1,10}\\.[a-z]{1,10}(\\+[a-z]{1,5})?@[a-z]{2,15}\\.[a-z]{2,4}",
        // Role aliases
        "(info|sales|support|admin|contact)@[a-z]{2,10}\\.com",
        // Known providers, including misspellings and throwaways
        "[a-z]{1,10}@(gmail|gmial|yahoo|yahooo|mailinator|tempmail)\\.com",
        // Garbage around an at sign
        "[a-zA-Z0-9 !#]{0,20}@[a-zA-Z0-9 .-]{0,20}",
    ]
}

/// Generate strings that look like phone numbers
fn phone_like() -> impl Strategy<Value = String> {
    prop_oneof![
        // Ten digits
        "[0-9]{10}",
        // Formatted North American
        "\\(?[0-9]{3}\\)? ?[0-9]{3}-[0-9]{4}",
        // With country code
        "\\+?1[ -]?[0-9]{3}[ -]?[0-9]{3}[ -]?[0-9]{4}",
        // International
        "\\+[0-9]{2,3} [0-9]{2,4} [0-9]{3,4} [0-9]{3,4}",
        // Random digits and punctuation
        "[0-9+()\\- .]{0,25}",
    ]
}

/// Generate completely random strings (edge cases)
fn random_utf8() -> impl Strategy<Value = String> {
    prop::collection::vec(any::<u8>(), 0..200)
        .prop_map(|bytes| String::from_utf8_lossy(&bytes).into_owned())
}

fn score_input() -> impl Strategy<Value = (bool, u8, bool, u8, f64, Option<String>)> {
    (
        any::<bool>(),
        0u8..=100,
        any::<bool>(),
        0u8..=100,
        prop_oneof![Just(0.0), 0.0f64..50_000_000.0, Just(f64::NAN), Just(-1.0)],
        prop::option::of(prop_oneof![
            Just("Technology".to_string()),
            Just("Government".to_string()),
            "[A-Za-z ]{0,15}",
        ]),
    )
}

// =============================================================================
// Email Validator Properties
// =============================================================================

mod email_tests {
    use super::*;

    proptest! {
        /// Email validator never panics on random UTF-8.
        #[test]
        fn never_panics_on_random_utf8(input in random_utf8()) {
            let _ = EmailValidator::new().validate(&input);
        }

        /// Email validator never panics on ASCII input.
        #[test]
        fn never_panics_on_ascii(input in ascii_string()) {
            let result = EmailValidator::new().validate(&input);
            prop_assert!(result.score <= 100);
        }

        /// Scores stay within 0-100 and every rejection carries a reason.
        #[test]
        fn score_bounded_and_rejections_explained(input in email_like()) {
            let result = EmailValidator::new().validate(&input);
            prop_assert!(result.score <= 100);
            if !result.is_valid {
                prop_assert!(result.reason.as_deref().is_some_and(|r| !r.is_empty()));
            }
        }

        /// Email validation is deterministic.
        #[test]
        fn deterministic(input in email_like()) {
            let validator = EmailValidator::new();
            prop_assert_eq!(validator.validate(&input), validator.validate(&input));
        }

        /// Surrounding whitespace does not change the outcome.
        #[test]
        fn whitespace_insensitive(input in email_like()) {
            let validator = EmailValidator::new();
            let padded = format!("  {}\t", input);
            prop_assert_eq!(validator.validate(&input), validator.validate(&padded));
        }
    }
}

// =============================================================================
// Phone Validator Properties
// =============================================================================

mod phone_tests {
    use super::*;

    proptest! {
        /// Phone validator never panics on random UTF-8.
        #[test]
        fn never_panics_on_random_utf8(input in random_utf8()) {
            let _ = PhoneValidator::new().validate(&input);
        }

        /// Phone validator never panics on ASCII input.
        #[test]
        fn never_panics_on_ascii(input in ascii_string()) {
            let result = PhoneValidator::new().validate(&input);
            prop_assert!(result.normalized.is_some());
        }

        /// Only valid numbers carry a line type, and invalid ones explain why.
        #[test]
        fn type_matches_validity(input in phone_like()) {
            let result = PhoneValidator::new().validate(&input);
            prop_assert!(result.score <= 100);
            prop_assert_eq!(result.phone_type.is_some(), result.is_valid);
            if !result.is_valid {
                prop_assert!(result.reason.is_some());
            }
        }

        /// Normalizing an already normalized number is a no-op.
        #[test]
        fn normalization_idempotent(input in phone_like()) {
            let validator = PhoneValidator::new();
            let first = validator.validate(&input);
            if first.is_valid {
                let normalized = first.normalized.clone().unwrap();
                let second = validator.validate(&normalized);
                prop_assert!(second.is_valid);
                prop_assert_eq!(second.normalized, first.normalized);
                prop_assert_eq!(second.phone_type, first.phone_type);
            }
        }
    }
}

// =============================================================================
// Scoring Properties
// =============================================================================

mod scoring_tests {
    use super::*;

    proptest! {
        /// Lead scores stay within 0-100 for any input.
        #[test]
        fn score_bounded(
            (email_valid, email_score, phone_valid, phone_score, revenue, industry) in score_input()
        ) {
            let input = ScoreInput {
                email_valid,
                email_score,
                phone_valid,
                phone_score,
                revenue,
                industry: industry.as_deref(),
            };
            let breakdown = LeadSift::new().scorer().breakdown(&input);
            prop_assert!(breakdown.total <= 100);
            prop_assert!(breakdown.email <= 40);
            prop_assert!(breakdown.phone <= 30);
            prop_assert!(breakdown.revenue <= 20);
            prop_assert!(breakdown.industry <= 10);
        }

        /// Invalid contacts never contribute points.
        #[test]
        fn invalid_contacts_contribute_nothing(email_score in 0u8..=100, phone_score in 0u8..=100) {
            let input = ScoreInput {
                email_valid: false,
                email_score,
                phone_valid: false,
                phone_score,
                revenue: 0.0,
                industry: None,
            };
            prop_assert_eq!(LeadSift::new().score(&input), 0);
        }

        /// More revenue never lowers the score.
        #[test]
        fn revenue_monotone(a in 0.0f64..50_000_000.0, b in 0.0f64..50_000_000.0) {
            let scorer = LeadSift::new();
            let (low, high) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(
                scorer.scorer().revenue_points(low) <= scorer.scorer().revenue_points(high)
            );
        }

        /// A higher score never yields a lower priority.
        #[test]
        fn priority_monotone(a in -10.0f64..110.0, b in -10.0f64..110.0) {
            let (low, high) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(LeadPriority::for_score(low).level <= LeadPriority::for_score(high).level);
        }
    }
}

// =============================================================================
// Ingestion Properties
// =============================================================================

mod ingest_tests {
    use super::*;

    fn row() -> impl Strategy<Value = (String, String, String, String)> {
        (
            "[A-Z][a-z]{2,10}( (Inc|LLC|Corp))?",
            email_like(),
            phone_like(),
            "[0-9]{0,9}",
        )
    }

    proptest! {
        /// Every ingested lead's score matches a fresh computation from its fields,
        /// and no two leads share an email or company.
        #[test]
        fn scores_consistent_and_unique(rows in prop::collection::vec(row(), 0..20)) {
            let mut text = String::from("Company Name,Email,Phone,Industry,Revenue\n");
            for (company, email, phone, revenue) in &rows {
                let email = email.replace([',', '"'], "");
                let phone = phone.replace([',', '"'], "");
                text.push_str(&format!("{},{},{},Technology,{}\n", company, email, phone, revenue));
            }

            let engine = LeadSift::new();
            let report = engine.ingest(&text).unwrap();
            prop_assert_eq!(report.leads.len() + report.duplicates_removed + report.rows_skipped, report.rows_read);

            let mut companies = std::collections::HashSet::new();
            let mut emails = std::collections::HashSet::new();
            for lead in &report.leads {
                prop_assert_eq!(lead.lead_score(), engine.score(&lead.score_input()));
                prop_assert!(companies.insert(lead.company_key()));
                if !lead.email.is_empty() {
                    prop_assert!(emails.insert(lead.email_key()));
                }
            }
        }
    }
}
