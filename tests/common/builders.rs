#![allow(dead_code)]

use bunner_conditional_rs::constants::method;
use bunner_conditional_rs::{
    Clock, Conditional, ConditionalOptions, Exchange, MalformedHeader, RequestContext,
    decode_latin1,
};
use chrono::{DateTime, TimeZone, Utc};

/// Instant every test clock is pinned to: `Mon, 01 Jan 2024 00:00:00 GMT`.
pub fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0)
        .single()
        .expect("valid test instant")
}

pub fn conditional() -> Conditional {
    Conditional::new(ConditionalOptions {
        clock: Clock::fixed(now()),
        ..ConditionalOptions::default()
    })
    .expect("valid conditional configuration")
}

pub struct RequestBuilder {
    method: String,
    if_match: Option<String>,
    if_none_match: Option<String>,
    if_modified_since: Option<String>,
    if_unmodified_since: Option<String>,
}

impl RequestBuilder {
    pub fn new(method: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            if_match: None,
            if_none_match: None,
            if_modified_since: None,
            if_unmodified_since: None,
        }
    }

    pub fn if_match(mut self, value: impl Into<String>) -> Self {
        self.if_match = Some(value.into());
        self
    }

    /// Sets `If-Match` from raw wire bytes, decoded the way a host would.
    pub fn if_match_bytes(mut self, value: &[u8]) -> Self {
        self.if_match = Some(decode_latin1(value).into_owned());
        self
    }

    pub fn if_none_match(mut self, value: impl Into<String>) -> Self {
        self.if_none_match = Some(value.into());
        self
    }

    pub fn if_modified_since(mut self, value: impl Into<String>) -> Self {
        self.if_modified_since = Some(value.into());
        self
    }

    pub fn if_unmodified_since(mut self, value: impl Into<String>) -> Self {
        self.if_unmodified_since = Some(value.into());
        self
    }

    pub fn begin(self, conditional: &Conditional) -> Result<Exchange, MalformedHeader> {
        let ctx = RequestContext {
            method: &self.method,
            if_match: self.if_match.as_deref(),
            if_none_match: self.if_none_match.as_deref(),
            if_modified_since: self.if_modified_since.as_deref(),
            if_unmodified_since: self.if_unmodified_since.as_deref(),
        };
        conditional.begin(&ctx)
    }

    pub fn open(self, conditional: &Conditional) -> Exchange {
        self.begin(conditional)
            .expect("conditional headers should be well-formed")
    }
}

pub fn request(method: impl Into<String>) -> RequestBuilder {
    RequestBuilder::new(method)
}

pub fn get() -> RequestBuilder {
    RequestBuilder::new(method::GET)
}

pub fn put() -> RequestBuilder {
    RequestBuilder::new(method::PUT)
}
