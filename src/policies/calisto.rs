//! Calisto policy - length, a digit and the `cAliStO` token.

use crate::checks::Rule;
use crate::policy::Policy;

/// Passwords must be longer than this.
pub const CALISTO_MIN_LENGTH: usize = 6;

const RULES: &[Rule] = &[Rule::Length, Rule::Digit, Rule::CalistoToken];

/// Requires more than 6 characters, a digit and the exact literal `cAliStO`,
/// checked in that order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Calisto {
    min_length: usize,
}

impl Calisto {
    /// Creates the policy with its fixed threshold.
    pub fn new() -> Self {
        Self {
            min_length: CALISTO_MIN_LENGTH,
        }
    }
}

impl Default for Calisto {
    fn default() -> Self {
        Self::new()
    }
}

impl Policy for Calisto {
    fn name(&self) -> &'static str {
        "Calisto"
    }

    fn min_length(&self) -> usize {
        self.min_length
    }

    fn rules(&self) -> &'static [Rule] {
        RULES
    }
}
