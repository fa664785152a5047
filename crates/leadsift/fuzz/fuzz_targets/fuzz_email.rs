//! Fuzz target for EmailValidator.
//!
//! The validator must never panic, must keep its score within 0-100, and
//! must explain every rejection.

#![no_main]

use leadsift::EmailValidator;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let validator = EmailValidator::new();
    let input = String::from_utf8_lossy(data);

    let result = validator.validate(&input);
    assert!(result.score <= 100);
    if !result.is_valid {
        assert!(result.reason.as_deref().is_some_and(|r| !r.is_empty()));
    }
});
