//! Tagged selection over the built-in policies.

use std::str::FromStr;

use crate::checks::Rule;
use crate::error::UnknownPolicy;
use crate::policy::Policy;

use super::{Calisto, Ganimedes};

/// One of the built-in policies, selectable by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PolicyKind {
    Ganimedes(Ganimedes),
    Calisto(Calisto),
}

impl PolicyKind {
    /// Names accepted by `FromStr`.
    pub const NAMES: [&'static str; 2] = ["ganimedes", "calisto"];

    /// Shorthand for `PolicyKind::Ganimedes(Ganimedes::new())`.
    pub fn ganimedes() -> Self {
        Self::Ganimedes(Ganimedes::new())
    }

    /// Shorthand for `PolicyKind::Calisto(Calisto::new())`.
    pub fn calisto() -> Self {
        Self::Calisto(Calisto::new())
    }

    fn inner(&self) -> &dyn Policy {
        match self {
            Self::Ganimedes(p) => p,
            Self::Calisto(p) => p,
        }
    }
}

impl Policy for PolicyKind {
    fn name(&self) -> &'static str {
        self.inner().name()
    }

    fn min_length(&self) -> usize {
        self.inner().min_length()
    }

    fn rules(&self) -> &'static [Rule] {
        self.inner().rules()
    }
}

impl From<Ganimedes> for PolicyKind {
    fn from(p: Ganimedes) -> Self {
        Self::Ganimedes(p)
    }
}

impl From<Calisto> for PolicyKind {
    fn from(p: Calisto) -> Self {
        Self::Calisto(p)
    }
}

impl std::fmt::Display for PolicyKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PolicyKind {
    type Err = UnknownPolicy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "ganimedes" => Ok(Self::ganimedes()),
            "calisto" => Ok(Self::calisto()),
            _ => Err(UnknownPolicy(s.to_string())),
        }
    }
}
