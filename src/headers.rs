use crate::constants::header;
use indexmap::IndexMap;

/// Response headers in insertion order.
pub type Headers = IndexMap<String, String>;

/// Validator values computed for one exchange, ready to attach to a response.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub(crate) struct ValidatorHeaders {
    pub(crate) etag: Option<String>,
    pub(crate) last_modified: Option<String>,
}

impl ValidatorHeaders {
    pub(crate) fn to_headers(&self) -> Headers {
        let mut headers = Headers::with_capacity(2);
        if let Some(etag) = &self.etag {
            headers.insert(header::ETAG.to_string(), etag.clone());
        }
        if let Some(last_modified) = &self.last_modified {
            headers.insert(header::LAST_MODIFIED.to_string(), last_modified.clone());
        }
        headers
    }
}

#[cfg(test)]
#[path = "headers_test.rs"]
mod headers_test;
