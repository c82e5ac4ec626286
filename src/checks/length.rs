//! Length check - the password must be strictly longer than the threshold.

use super::CheckResult;
use crate::error::ValidationError;

/// Checks that the password has more than `min_length` characters.
///
/// Length is counted in `char`s, so multi-byte characters count once.
/// A password of exactly `min_length` characters fails.
pub fn length_check(password: &str, min_length: usize) -> CheckResult {
    if password.chars().count() <= min_length {
        return Err(ValidationError::LengthInvalid);
    }
    Ok(())
}
