//! Fuzz target for PhoneValidator.
//!
//! Every input yields a result with a normalized form, and only valid
//! numbers carry a line type.

#![no_main]

use leadsift::PhoneValidator;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let validator = PhoneValidator::new();
    let input = String::from_utf8_lossy(data);

    let result = validator.validate(&input);
    assert!(result.score <= 100);
    assert!(result.normalized.is_some());
    assert_eq!(result.phone_type.is_some(), result.is_valid);
});
