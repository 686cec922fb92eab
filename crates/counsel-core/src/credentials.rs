//! Startup-time API credential sourcing
//!
//! The key is read once from the process environment and passed down
//! explicitly; nothing below this module touches environment variables.
//! Whether the variable comes from a local `.env` file or a hosted secrets
//! store is a deployment concern, not a code path.

use crate::error::{Error, Result};
use counsel_llm::redact::mask_key;
use std::fmt;

/// Environment variable the key is read from
pub const CREDENTIAL_VAR: &str = "OPENAI_API_KEY";

/// Keys shorter than this are rejected as obviously invalid
const MIN_KEY_LEN: usize = 8;

/// The OpenAI API key, validated at startup
#[derive(Clone)]
pub struct ApiCredential {
    key: String,
}

impl fmt::Debug for ApiCredential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiCredential")
            .field("key", &mask_key(&self.key))
            .finish()
    }
}

impl ApiCredential {
    /// Wrap and validate an already-sourced key
    ///
    /// # Errors
    /// Returns a configuration error for an empty or implausibly short key
    pub fn new(key: impl Into<String>) -> Result<Self> {
        let key = key.into();
        let trimmed = key.trim();

        if trimmed.is_empty() {
            return Err(Error::Credential(setup_hint("is not set")));
        }
        if trimmed.len() < MIN_KEY_LEN {
            return Err(Error::Credential(setup_hint("looks invalid (too short)")));
        }

        Ok(Self {
            key: trimmed.to_string(),
        })
    }

    /// Read and validate the key from the process environment.
    ///
    /// # Errors
    /// Returns a configuration error with setup instructions if the
    /// variable is missing or empty. Intentionally fatal to the session.
    pub fn from_env() -> Result<Self> {
        match std::env::var(CREDENTIAL_VAR) {
            Ok(value) => Self::new(value),
            Err(_) => Err(Error::Credential(setup_hint("is not set"))),
        }
    }

    /// Borrow the raw key to pass into provider configuration
    #[must_use]
    pub fn expose(&self) -> &str {
        &self.key
    }
}

fn setup_hint(problem: &str) -> String {
    format!(
        "{CREDENTIAL_VAR} {problem}. Add it to a .env file next to the binary \
         (run `counsel init`) or configure it in your deployment's secret store."
    )
}
