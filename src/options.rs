use crate::clock::Clock;
use crate::constants::method;
use crate::util::{is_http_token, is_safe_method};
use thiserror::Error;

#[derive(Clone, Debug)]
pub struct ConditionalOptions {
    /// Methods that bypass precondition evaluation entirely.
    pub ignored_methods: Vec<String>,
    pub clock: Clock,
}

impl Default for ConditionalOptions {
    fn default() -> Self {
        Self {
            ignored_methods: vec![
                method::CONNECT.into(),
                method::OPTIONS.into(),
                method::TRACE.into(),
            ],
            clock: Clock::default(),
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("ignored method '{method}' is not a valid HTTP token")]
    InvalidIgnoredMethod { method: String },
    #[error("'{method}' cannot be ignored: conditional GET depends on it")]
    SafeMethodIgnored { method: String },
}

impl ConditionalOptions {
    pub fn validate(&self) -> Result<(), ConfigError> {
        for entry in &self.ignored_methods {
            if !is_http_token(entry) {
                return Err(ConfigError::InvalidIgnoredMethod {
                    method: entry.clone(),
                });
            }
            if is_safe_method(entry) {
                return Err(ConfigError::SafeMethodIgnored {
                    method: entry.clone(),
                });
            }
        }
        Ok(())
    }

    pub(crate) fn is_ignored(&self, request_method: &str) -> bool {
        self.ignored_methods
            .iter()
            .any(|ignored| ignored == request_method)
    }
}

#[cfg(test)]
#[path = "options_test.rs"]
mod options_test;
