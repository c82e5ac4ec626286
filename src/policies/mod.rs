//! Concrete password policies.

mod calisto;
mod ganimedes;
mod kind;

pub use calisto::{Calisto, CALISTO_MIN_LENGTH};
pub use ganimedes::{Ganimedes, GANIMEDES_MIN_LENGTH};
pub use kind::PolicyKind;

#[cfg(test)]
pub(crate) fn secret(s: &str) -> secrecy::SecretString {
    secrecy::SecretString::new(s.to_string().into())
}
