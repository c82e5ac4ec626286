//! Calisto token check, used by the Calisto policy.

use super::CheckResult;
use crate::error::ValidationError;

/// The exact literal a Calisto password must contain.
pub const CALISTO_TOKEN: &str = "cAliStO";

/// Checks that the password contains [`CALISTO_TOKEN`] with that exact casing.
///
/// Other mixed-case spellings such as `CaLiStO` are rejected even though the
/// error message describes them as acceptable.
pub fn contains_calisto_token(password: &str) -> CheckResult {
    if password.contains(CALISTO_TOKEN) {
        return Ok(());
    }
    Err(ValidationError::MissingCalistoToken)
}
