//! Predicate checks
//!
//! Each check tests a single property of a password and reports the
//! matching [`ValidationError`] when the property is absent.

mod calisto;
mod length;
mod special;
mod variety;

pub use calisto::{contains_calisto_token, CALISTO_TOKEN};
pub use length::length_check;
pub use special::{contains_special_char, SPECIAL_CHARACTERS};
pub use variety::{contains_digit, contains_lowercase, contains_uppercase};

use crate::error::ValidationError;

/// Result type for predicate checks.
/// - `Ok(())` - Property holds
/// - `Err(kind)` - Property is absent
pub type CheckResult = Result<(), ValidationError>;

/// Catalogue of the predicate checks a policy can compose.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rule {
    Length,
    Uppercase,
    Lowercase,
    Digit,
    SpecialChar,
    CalistoToken,
}

impl Rule {
    /// Stable identifier used in logs.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Length => "length",
            Self::Uppercase => "uppercase",
            Self::Lowercase => "lowercase",
            Self::Digit => "digit",
            Self::SpecialChar => "special_char",
            Self::CalistoToken => "calisto_token",
        }
    }

    /// Runs this check. `min_length` is only read by [`Rule::Length`].
    pub fn check(&self, password: &str, min_length: usize) -> CheckResult {
        match self {
            Self::Length => length_check(password, min_length),
            Self::Uppercase => contains_uppercase(password),
            Self::Lowercase => contains_lowercase(password),
            Self::Digit => contains_digit(password),
            Self::SpecialChar => contains_special_char(password),
            Self::CalistoToken => contains_calisto_token(password),
        }
    }
}

impl std::fmt::Display for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
