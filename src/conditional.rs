use crate::context::RequestContext;
use crate::exchange::Exchange;
use crate::options::{ConditionalOptions, ConfigError};
use crate::preconditions::Preconditions;
use crate::result::MalformedHeader;

/// Conditional request engine configured with [`ConditionalOptions`].
#[derive(Debug, Clone, Default)]
pub struct Conditional {
    options: ConditionalOptions,
}

impl Conditional {
    pub fn new(options: ConditionalOptions) -> Result<Self, ConfigError> {
        options.validate()?;
        Ok(Self { options })
    }

    pub fn options(&self) -> &ConditionalOptions {
        &self.options
    }

    /// Parses the request's preconditions and opens its [`Exchange`].
    ///
    /// A [`MalformedHeader`] must be answered with 400 before any handler runs.
    pub fn begin(&self, request: &RequestContext<'_>) -> Result<Exchange, MalformedHeader> {
        let ignored_method = self.options.is_ignored(request.method);
        let preconditions = if ignored_method {
            Preconditions::default()
        } else {
            Preconditions::parse(request)?
        };

        Ok(Exchange::new(
            request.method,
            ignored_method,
            preconditions,
            self.options.clock.clone(),
        ))
    }
}

#[cfg(test)]
#[path = "conditional_test.rs"]
mod conditional_test;
