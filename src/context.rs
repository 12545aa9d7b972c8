use crate::constants::header;

/// Borrowed view of the request parts the conditional layer reads.
///
/// Each header is `None` when absent. Raw header bytes go through
/// [`crate::decode_latin1`] first so obs-text tags are kept, and repeated
/// field lines are joined with `, `.
#[derive(Debug, Clone, Default)]
pub struct RequestContext<'a> {
    pub method: &'a str,
    pub if_match: Option<&'a str>,
    pub if_none_match: Option<&'a str>,
    pub if_modified_since: Option<&'a str>,
    pub if_unmodified_since: Option<&'a str>,
}

impl<'a> RequestContext<'a> {
    /// Builds a context from a case-insensitive header accessor, called with
    /// lowercase header names.
    pub fn from_lookup<F>(method: &'a str, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<&'a str>,
    {
        Self {
            method,
            if_match: lookup(header::IF_MATCH),
            if_none_match: lookup(header::IF_NONE_MATCH),
            if_modified_since: lookup(header::IF_MODIFIED_SINCE),
            if_unmodified_since: lookup(header::IF_UNMODIFIED_SINCE),
        }
    }
}

#[cfg(test)]
#[path = "context_test.rs"]
mod context_test;
