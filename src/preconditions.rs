use crate::constants::header;
use crate::context::RequestContext;
use crate::entity_tag::{self, TagFilter};
use crate::http_date;
use crate::result::MalformedHeader;
use crate::util::{field_value, is_safe_method};
use chrono::{DateTime, Utc};

/// Condition whose failure yields 412: `If-Match`, else `If-Unmodified-Since`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AcceptCondition {
    Tags(TagFilter),
    UnmodifiedSince(DateTime<Utc>),
}

/// Condition whose match yields 304 (or 412 for unsafe methods):
/// `If-None-Match`, else `If-Modified-Since`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RejectCondition {
    Tags(TagFilter),
    ModifiedSince(DateTime<Utc>),
}

/// Preconditions recognised on one request. Immutable once parsed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Preconditions {
    pub accept: Option<AcceptCondition>,
    pub reject: Option<RejectCondition>,
}

impl Preconditions {
    /// Reads the four conditional headers.
    ///
    /// Malformed tag lists are rejected outright. Dates that do not parse are
    /// ignored as if the header was never sent.
    pub fn parse(request: &RequestContext<'_>) -> Result<Self, MalformedHeader> {
        let accept = match field_value(request.if_match) {
            Some(value) => Some(AcceptCondition::Tags(
                entity_tag::parse_accepted(value).ok_or_else(|| {
                    tracing::debug!(header = header::IF_MATCH, "rejecting malformed tag list");
                    MalformedHeader::IfMatch
                })?,
            )),
            None => parse_date(header::IF_UNMODIFIED_SINCE, request.if_unmodified_since)
                .map(AcceptCondition::UnmodifiedSince),
        };

        let reject = match field_value(request.if_none_match) {
            Some(value) => Some(RejectCondition::Tags(
                entity_tag::parse_rejected(value).ok_or_else(|| {
                    tracing::debug!(
                        header = header::IF_NONE_MATCH,
                        "rejecting malformed tag list"
                    );
                    MalformedHeader::IfNoneMatch
                })?,
            )),
            None if is_safe_method(request.method) => {
                parse_date(header::IF_MODIFIED_SINCE, request.if_modified_since)
                    .map(RejectCondition::ModifiedSince)
            }
            None => None,
        };

        Ok(Self { accept, reject })
    }

    pub fn is_conditional(&self) -> bool {
        self.accept.is_some() || self.reject.is_some()
    }
}

fn parse_date(name: &'static str, value: Option<&str>) -> Option<DateTime<Utc>> {
    let value = field_value(value)?;
    let parsed = http_date::parse(value);
    if parsed.is_none() {
        tracing::trace!(header = name, "ignoring unparsable date");
    }
    parsed
}

#[cfg(test)]
#[path = "preconditions_test.rs"]
mod preconditions_test;
