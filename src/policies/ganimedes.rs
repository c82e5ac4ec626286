//! Ganimedes policy - length, character variety and a special character.

use crate::checks::Rule;
use crate::policy::Policy;

/// Passwords must be longer than this.
pub const GANIMEDES_MIN_LENGTH: usize = 8;

const RULES: &[Rule] = &[
    Rule::Length,
    Rule::Uppercase,
    Rule::Lowercase,
    Rule::Digit,
    Rule::SpecialChar,
];

/// Requires more than 8 characters, an uppercase letter, a lowercase letter,
/// a digit and one of `@ _ # $ %`, checked in that order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ganimedes {
    min_length: usize,
}

impl Ganimedes {
    /// Creates the policy with its fixed threshold.
    pub fn new() -> Self {
        Self {
            min_length: GANIMEDES_MIN_LENGTH,
        }
    }
}

impl Default for Ganimedes {
    fn default() -> Self {
        Self::new()
    }
}

impl Policy for Ganimedes {
    fn name(&self) -> &'static str {
        "Ganimedes"
    }

    fn min_length(&self) -> usize {
        self.min_length
    }

    fn rules(&self) -> &'static [Rule] {
        RULES
    }
}
