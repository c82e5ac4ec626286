//! Character variety checks - uppercase, lowercase and digit presence.

use unicode_normalization::char::decompose_compatible;

use super::CheckResult;
use crate::error::ValidationError;

/// Checks that the password contains at least one uppercase letter.
pub fn contains_uppercase(password: &str) -> CheckResult {
    if password.chars().any(|c| c.is_uppercase()) {
        return Ok(());
    }
    Err(ValidationError::MissingUppercase)
}

/// Checks that the password contains at least one lowercase letter.
pub fn contains_lowercase(password: &str) -> CheckResult {
    if password.chars().any(|c| c.is_lowercase()) {
        return Ok(());
    }
    Err(ValidationError::MissingLowercase)
}

/// Checks that the password contains at least one digit.
///
/// Any script's decimal digits count, as do digit-valued forms such as `²`
/// and `①`. Fractions, numerals worth ten or more and number letters
/// (`½`, `⑩`, `Ⅷ`) do not.
pub fn contains_digit(password: &str) -> CheckResult {
    if password.chars().any(is_digit) {
        return Ok(());
    }
    Err(ValidationError::MissingDigit)
}

/// A digit is a non-alphabetic numeric char whose compatibility
/// decomposition holds exactly one numeral.
fn is_digit(c: char) -> bool {
    if c.is_ascii_digit() {
        return true;
    }
    if !c.is_numeric() || c.is_alphabetic() {
        return false;
    }
    let mut numerals = 0;
    decompose_compatible(c, |d| {
        if d.is_numeric() {
            numerals += 1;
        }
    });
    numerals == 1
}
