#![allow(dead_code)]

use bunner_conditional_rs::{Headers, ShortCircuit, ValidateError};

pub fn assert_not_modified(result: Result<(), ValidateError>) -> Headers {
    match result {
        Err(ValidateError::ShortCircuit(ShortCircuit::NotModified { headers })) => headers,
        other => panic!("expected 304 short-circuit, got {:?}", other),
    }
}

pub fn assert_precondition_failed(result: Result<(), ValidateError>) {
    match result {
        Err(ValidateError::ShortCircuit(ShortCircuit::PreconditionFailed)) => {}
        other => panic!("expected 412 short-circuit, got {:?}", other),
    }
}

pub fn header_value<'a>(headers: &'a Headers, name: &str) -> Option<&'a str> {
    headers
        .iter()
        .find(|(k, _)| k.eq_ignore_ascii_case(name))
        .map(|(_, v)| v.as_str())
}
