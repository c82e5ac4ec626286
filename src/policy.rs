//! The password policy capability.

use secrecy::{ExposeSecret, SecretString};

use crate::checks::Rule;
use crate::error::ValidationResult;

/// A named, ordered composition of predicate checks plus a minimum length.
///
/// Implementors supply the threshold and the rule order; [`Policy::validate`]
/// runs the rules in that order and stops at the first failure, returning it
/// unchanged.
pub trait Policy: Send + Sync + std::fmt::Debug {
    /// Human-readable policy name.
    fn name(&self) -> &'static str;

    /// Passwords must be strictly longer than this many characters.
    fn min_length(&self) -> usize;

    /// Rules in evaluation order.
    fn rules(&self) -> &'static [Rule];

    /// Validates a password, returning `Ok(true)` when every rule holds.
    fn validate(&self, password: &SecretString) -> ValidationResult {
        let pwd = password.expose_secret();
        let min_length = self.min_length();

        for rule in self.rules() {
            if let Err(e) = rule.check(pwd, min_length) {
                #[cfg(feature = "tracing")]
                tracing::debug!(
                    policy = self.name(),
                    rule = rule.name(),
                    kind = e.kind_name(),
                    "password rejected"
                );
                return Err(e);
            }
        }

        #[cfg(feature = "tracing")]
        tracing::trace!(policy = self.name(), "password accepted");

        Ok(true)
    }
}
