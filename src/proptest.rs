//! Property-based tests for the built-in policies.
//!
//! These tests use proptest to verify invariants around:
//! - First-failure reporting in rule order
//! - The exclusive length boundary
//! - Validator transparency over its policy

use crate::checks::{CALISTO_TOKEN, Rule};
use crate::policies::{Calisto, Ganimedes, PolicyKind};
use crate::policy::Policy;
use crate::validator::Validator;
use proptest::prelude::*;
use secrecy::SecretString;

// ============================================================================
// Strategies
// ============================================================================

fn secret(s: &str) -> SecretString {
    SecretString::new(s.to_string().into())
}

/// Arbitrary short strings drawn from letters, digits and punctuation,
/// including the special characters, the token's letters and some
/// multi-byte letters and digits.
fn arb_password() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-zA-Z0-9ñÑ٣²½@_#$%!&*. ]{0,20}").unwrap()
}

fn arb_policy() -> impl Strategy<Value = PolicyKind> {
    prop_oneof![Just(PolicyKind::ganimedes()), Just(PolicyKind::calisto())]
}

/// A string satisfying every Ganimedes rule except possibly length,
/// padded to exactly `len` characters (`len >= 4`).
fn ganimedes_compliant(len: usize) -> String {
    let mut s = String::from("A1@b");
    s.extend(std::iter::repeat_n('x', len - 4));
    s
}

/// A string satisfying every Calisto rule except possibly length,
/// padded to exactly `len` characters (`len >= 8`).
fn calisto_compliant(len: usize) -> String {
    let mut s = format!("1{CALISTO_TOKEN}");
    s.extend(std::iter::repeat_n('x', len - 8));
    s
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    /// The reported error is always that of the first failing rule in order.
    #[test]
    fn reports_first_failing_rule(policy in arb_policy(), pwd in arb_password()) {
        let expected = policy
            .rules()
            .iter()
            .find_map(|rule: &Rule| rule.check(&pwd, policy.min_length()).err());

        match policy.validate(&secret(&pwd)) {
            Ok(ok) => {
                prop_assert!(ok);
                prop_assert_eq!(expected, None);
            }
            Err(e) => {
                prop_assert_eq!(Some(e), expected);
            }
        }
    }

    /// Validator::is_valid is indistinguishable from Policy::validate.
    #[test]
    fn validator_is_transparent(policy in arb_policy(), pwd in arb_password()) {
        let validator = Validator::new(policy);
        prop_assert_eq!(validator.is_valid(&secret(&pwd)), policy.validate(&secret(&pwd)));
    }

    /// Any password of length at most the threshold fails with LengthInvalid.
    #[test]
    fn short_passwords_fail_on_length(policy in arb_policy(), pwd in arb_password()) {
        prop_assume!(pwd.chars().count() <= policy.min_length());
        prop_assert_eq!(
            policy.validate(&secret(&pwd)),
            Err(crate::error::ValidationError::LengthInvalid)
        );
    }

    /// Compliant Ganimedes passwords pass exactly when longer than 8 chars.
    #[test]
    fn ganimedes_boundary_is_exclusive(len in 4usize..32) {
        let result = Ganimedes::new().validate(&secret(&ganimedes_compliant(len)));
        prop_assert_eq!(result.is_ok(), len > Ganimedes::new().min_length());
    }

    /// Compliant Calisto passwords always exceed the threshold and pass.
    #[test]
    fn calisto_compliant_passwords_pass(len in 8usize..32) {
        let result = Calisto::new().validate(&secret(&calisto_compliant(len)));
        prop_assert_eq!(result, Ok(true));
    }
}
