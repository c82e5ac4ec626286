//! Password policy validation library
//!
//! This library checks candidate passwords against named policies. Each
//! policy is an ordered list of rule checks plus a minimum length; checks
//! run in order and the first failure is reported.
//!
//! # Policies
//!
//! - [`Ganimedes`]: more than 8 characters, uppercase, lowercase, digit and
//!   one of `@ _ # $ %`
//! - [`Calisto`]: more than 6 characters, a digit and the literal `cAliStO`
//!
//! # Features
//!
//! - `async` (default): Enables delivery of results over a tokio channel
//! - `tracing`: Enables logging via tracing crate
//!
//! # Example
//!
//! ```rust
//! use pwd_policy::{Ganimedes, ValidationError, Validator};
//! use secrecy::SecretString;
//!
//! let validator = Validator::new(Ganimedes::new());
//!
//! let password = SecretString::new("Ab1@abcde".to_string().into());
//! assert_eq!(validator.is_valid(&password), Ok(true));
//!
//! let password = SecretString::new("Abcdefgh1".to_string().into());
//! assert_eq!(validator.is_valid(&password), Err(ValidationError::MissingSpecialChar));
//! ```

// Internal modules
mod checks;
mod error;
mod policies;
mod policy;
mod validator;

#[cfg(test)]
mod proptest;

// Public API
pub use checks::{
    contains_calisto_token, contains_digit, contains_lowercase, contains_special_char,
    contains_uppercase, length_check, CheckResult, Rule, CALISTO_TOKEN, SPECIAL_CHARACTERS,
};
pub use error::{UnknownPolicy, ValidationError, ValidationResult};
pub use policies::{Calisto, Ganimedes, PolicyKind, CALISTO_MIN_LENGTH, GANIMEDES_MIN_LENGTH};
pub use policy::Policy;
pub use validator::Validator;
