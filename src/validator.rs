//! Validator - binds one policy for repeated use.

use secrecy::SecretString;

#[cfg(feature = "async")]
use tokio::sync::mpsc;

use crate::error::ValidationResult;
use crate::policy::Policy;

/// Holds a single policy and forwards validation calls to it.
#[derive(Debug)]
pub struct Validator {
    policy: Box<dyn Policy>,
}

impl Validator {
    /// Creates a validator bound to `policy` for its whole lifetime.
    pub fn new(policy: impl Policy + 'static) -> Self {
        Self {
            policy: Box::new(policy),
        }
    }

    /// Returns the policy this validator forwards to.
    pub fn policy(&self) -> &dyn Policy {
        self.policy.as_ref()
    }

    /// Validates a password against the held policy.
    ///
    /// # Returns
    /// `Ok(true)` if every rule holds, otherwise the first failing rule's error.
    pub fn is_valid(&self, password: &SecretString) -> ValidationResult {
        self.policy.validate(password)
    }

    /// Async version that sends the validation result via channel.
    #[cfg(feature = "async")]
    pub async fn is_valid_tx(&self, password: &SecretString, tx: mpsc::Sender<ValidationResult>) {
        let result = self.is_valid(password);

        if let Err(_e) = tx.send(result).await {
            #[cfg(feature = "tracing")]
            tracing::error!(
                policy = self.policy.name(),
                "Failed to send password validation result: {}",
                _e
            );
        }
    }
}
