use crate::clock::Clock;
use crate::constants::status::REDIRECTION;
use crate::evaluate::evaluate;
use crate::headers::{Headers, ValidatorHeaders};
use crate::preconditions::Preconditions;
use crate::result::{UsageError, ValidateError};
use crate::validator::{ValidatorOptions, Validators};

#[derive(Debug, Clone, PartialEq, Eq)]
enum ValidationState {
    NotValidated,
    Validated(ValidatorHeaders),
}

/// Per-request conditional state, created by [`crate::Conditional::begin`].
///
/// The handler calls [`Exchange::validate`] exactly once, then the host calls
/// [`Exchange::finalize`] with the final status code.
#[derive(Debug, Clone)]
pub struct Exchange {
    method: String,
    ignored_method: bool,
    preconditions: Preconditions,
    clock: Clock,
    state: ValidationState,
}

impl Exchange {
    pub(crate) fn new(
        method: &str,
        ignored_method: bool,
        preconditions: Preconditions,
        clock: Clock,
    ) -> Self {
        Self {
            method: method.to_string(),
            ignored_method,
            preconditions,
            clock,
            state: ValidationState::NotValidated,
        }
    }

    pub fn method(&self) -> &str {
        &self.method
    }

    pub fn preconditions(&self) -> &Preconditions {
        &self.preconditions
    }

    pub fn is_conditional(&self) -> bool {
        self.preconditions.is_conditional()
    }

    pub fn is_ignored_method(&self) -> bool {
        self.ignored_method
    }

    pub fn is_validated(&self) -> bool {
        matches!(self.state, ValidationState::Validated(_))
    }

    /// Assigns validators to the response and evaluates the preconditions.
    ///
    /// Returns [`ValidateError::ShortCircuit`] when the response must become a
    /// 304 or 412, and [`ValidateError::Usage`] when called twice or with
    /// invalid options. A call rejected for its options may be retried.
    pub fn validate(&mut self, options: ValidatorOptions) -> Result<(), ValidateError> {
        if self.is_validated() {
            return Err(UsageError::AlreadyValidated.into());
        }
        let effective = options.effective_timestamp(self.clock.now())?;

        if self.ignored_method {
            self.state = ValidationState::Validated(ValidatorHeaders::default());
            return Ok(());
        }

        let validators = Validators::compute(&options, effective);
        self.state = ValidationState::Validated(validators.headers.clone());

        if self.is_conditional() {
            evaluate(&self.method, &self.preconditions, &validators).inspect_err(|outcome| {
                tracing::debug!(
                    method = %self.method,
                    status = outcome.status(),
                    "precondition short-circuit"
                );
            })?;
        }
        Ok(())
    }

    /// Closes the exchange and returns the headers to attach to a response
    /// with the given status.
    ///
    /// Responses with status 300 or above get no validators and skip the
    /// contract check.
    pub fn finalize(self, status: u16) -> Result<Headers, UsageError> {
        if status >= REDIRECTION {
            return Ok(Headers::new());
        }

        match self.state {
            ValidationState::Validated(headers) => Ok(headers.to_headers()),
            ValidationState::NotValidated => {
                let error = if self.preconditions.is_conditional() {
                    UsageError::ConditionalNeverValidated
                } else {
                    UsageError::EtagNeverAssigned
                };
                tracing::warn!(method = %self.method, status, "{error}");
                Err(error)
            }
        }
    }
}

#[cfg(test)]
#[path = "exchange_test.rs"]
mod exchange_test;
