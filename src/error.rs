//! Validation error taxonomy.

use thiserror::Error;

use crate::policies::PolicyKind;

/// The reason a password was rejected by a policy.
///
/// Exactly one kind is reported per failed validation: the one raised by the
/// first rule that did not hold.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValidationError {
    #[error("Password length does not meet the expected minimum")]
    LengthInvalid,
    #[error("Password must contain at least one uppercase letter")]
    MissingUppercase,
    #[error("Password must contain at least one lowercase letter")]
    MissingLowercase,
    #[error("Password must contain at least one number")]
    MissingDigit,
    #[error("Password must contain at least one special character: @, _, #, $ or %")]
    MissingSpecialChar,
    /// Raised when the literal `cAliStO` is absent. The message describes a
    /// broader mixed-case rule than the check enforces.
    #[error(
        "Password must contain the word 'calisto' written with at least two uppercase letters, but not all of them"
    )]
    MissingCalistoToken,
}

impl ValidationError {
    /// Stable identifier for logging and error mapping.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::LengthInvalid => "length_invalid",
            Self::MissingUppercase => "missing_uppercase",
            Self::MissingLowercase => "missing_lowercase",
            Self::MissingDigit => "missing_digit",
            Self::MissingSpecialChar => "missing_special_char",
            Self::MissingCalistoToken => "missing_calisto_token",
        }
    }
}

/// Outcome of a policy validation. Success is always `Ok(true)`.
pub type ValidationResult = Result<bool, ValidationError>;

/// Returned when a policy name does not match any known policy.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown password policy: {0}. Use: {known}", known = PolicyKind::NAMES.join(", "))]
pub struct UnknownPolicy(pub String);
