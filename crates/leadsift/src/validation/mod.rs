//! Email and phone validation.
//!
//! Validators never fail: every outcome, including garbage input, is
//! represented as a [`ValidationResult`].

mod email;
mod phone;
mod result;

pub use email::EmailValidator;
pub use phone::PhoneValidator;
pub use result::{PhoneType, ValidationResult};
