use crate::constants::status;
use crate::headers::Headers;
use thiserror::Error;

/// A conditional header that failed the entity-tag list grammar.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum MalformedHeader {
    #[error("Malformed If-Match Header")]
    IfMatch,
    #[error("Malformed If-None-Match Header")]
    IfNoneMatch,
}

impl MalformedHeader {
    pub fn status(&self) -> u16 {
        status::BAD_REQUEST
    }
}

/// Early termination decided by precondition evaluation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ShortCircuit {
    /// 304, carrying the validators computed for the representation.
    #[error("not modified")]
    NotModified { headers: Headers },
    /// 412.
    #[error("precondition failed")]
    PreconditionFailed,
}

impl ShortCircuit {
    pub fn status(&self) -> u16 {
        match self {
            ShortCircuit::NotModified { .. } => status::NOT_MODIFIED,
            ShortCircuit::PreconditionFailed => status::PRECONDITION_FAILED,
        }
    }

    pub fn headers(&self) -> Headers {
        match self {
            ShortCircuit::NotModified { headers } => headers.clone(),
            ShortCircuit::PreconditionFailed => Headers::new(),
        }
    }
}

/// Contract violations by the code integrating this crate.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum UsageError {
    #[error("validate() was invoked more than once for the same request")]
    AlreadyValidated,
    #[error("the 'strong' and 'weak' options are mutually exclusive")]
    StrongAndWeak,
    #[error("the given 'last_modified' date cannot be represented as an HTTP-date")]
    InvalidLastModified,
    #[error("conditional request was never validated by validate()")]
    ConditionalNeverValidated,
    #[error("request was never assigned an ETag via validate()")]
    EtagNeverAssigned,
}

/// Everything [`crate::Exchange::validate`] can stop with.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidateError {
    #[error(transparent)]
    ShortCircuit(#[from] ShortCircuit),
    #[error(transparent)]
    Usage(#[from] UsageError),
}

impl ValidateError {
    pub fn status(&self) -> u16 {
        match self {
            ValidateError::ShortCircuit(short_circuit) => short_circuit.status(),
            ValidateError::Usage(_) => status::INTERNAL_SERVER_ERROR,
        }
    }
}

#[cfg(test)]
#[path = "result_test.rs"]
mod result_test;
