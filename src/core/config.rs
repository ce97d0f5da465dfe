use std::env;

use crate::errors::FormError;

pub const DEFAULT_MAX_PENDING_FORMS: usize = 16;
pub const DEFAULT_MAX_RESPONSE_BYTES: usize = 64 * 1024;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormConfig {
    /// Upper bound on forms sent to one client that have not been answered yet.
    pub max_pending_forms: usize,
    /// Response payloads larger than this are rejected before decoding.
    pub max_response_bytes: usize,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            max_pending_forms: DEFAULT_MAX_PENDING_FORMS,
            max_response_bytes: DEFAULT_MAX_RESPONSE_BYTES,
        }
    }
}

impl FormConfig {
    /// Reads `FORMS_MAX_PENDING` and `FORMS_MAX_RESPONSE_BYTES`, falling back to the
    /// defaults for unset variables.
    ///
    /// # Errors
    ///
    /// Returns `FormError::Config` when a variable is set but is not a positive integer.
    pub fn from_env() -> Result<Self, FormError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, FormError> {
        let read_limit = |key: &str, default: usize| match lookup(key) {
            Some(raw) => parse_limit(key, &raw),
            None => Ok(default),
        };
        Ok(Self {
            max_pending_forms: read_limit("FORMS_MAX_PENDING", DEFAULT_MAX_PENDING_FORMS)?,
            max_response_bytes: read_limit(
                "FORMS_MAX_RESPONSE_BYTES",
                DEFAULT_MAX_RESPONSE_BYTES,
            )?,
        })
    }
}

fn parse_limit(key: &str, raw: &str) -> Result<usize, FormError> {
    match raw.trim().parse::<usize>() {
        Ok(0) => Err(FormError::Config(format!("{}: must be greater than zero", key))),
        Ok(n) => Ok(n),
        Err(e) => Err(FormError::Config(format!("{}: {}", key, e))),
    }
}
