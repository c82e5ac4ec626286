//! Special character check, used by the Ganimedes policy.

use super::CheckResult;
use crate::error::ValidationError;

/// The only characters accepted as special.
pub const SPECIAL_CHARACTERS: &str = "@_#$%";

/// Checks that the password contains one of [`SPECIAL_CHARACTERS`].
pub fn contains_special_char(password: &str) -> CheckResult {
    if password.chars().any(|c| SPECIAL_CHARACTERS.contains(c)) {
        return Ok(());
    }
    Err(ValidationError::MissingSpecialChar)
}
