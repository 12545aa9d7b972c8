use crate::entity_tag;
use crate::headers::ValidatorHeaders;
use crate::http_date;
use crate::result::UsageError;
use chrono::{DateTime, Utc};

const WEAK_PREFIX: &str = "W/";

/// Identity material a handler supplies for the representation it serves.
///
/// `strong` and `weak` are ordered parts hashed into an entity tag and are
/// mutually exclusive. `last_modified` is clamped to the current time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidatorOptions {
    pub strong: Option<Vec<Vec<u8>>>,
    pub weak: Option<Vec<Vec<u8>>>,
    pub last_modified: Option<DateTime<Utc>>,
}

impl ValidatorOptions {
    pub fn strong<I, P>(parts: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: AsRef<[u8]>,
    {
        Self {
            strong: Some(collect_parts(parts)),
            ..Self::default()
        }
    }

    pub fn weak<I, P>(parts: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: AsRef<[u8]>,
    {
        Self {
            weak: Some(collect_parts(parts)),
            ..Self::default()
        }
    }

    pub fn last_modified(instant: DateTime<Utc>) -> Self {
        Self {
            last_modified: Some(instant),
            ..Self::default()
        }
    }

    pub fn with_last_modified(mut self, instant: DateTime<Utc>) -> Self {
        self.last_modified = Some(instant);
        self
    }

    /// Checks the options and resolves the instant validators are based on:
    /// `min(last_modified, now)`, or `now` when no date was given.
    pub(crate) fn effective_timestamp(
        &self,
        now: DateTime<Utc>,
    ) -> Result<DateTime<Utc>, UsageError> {
        if self.strong.is_some() && self.weak.is_some() {
            return Err(UsageError::StrongAndWeak);
        }

        let effective = match self.last_modified {
            Some(instant) => instant.min(now),
            None => now,
        };
        if !http_date::is_representable(&effective) {
            return Err(UsageError::InvalidLastModified);
        }
        Ok(effective)
    }
}

fn collect_parts<I, P>(parts: I) -> Vec<Vec<u8>>
where
    I: IntoIterator<Item = P>,
    P: AsRef<[u8]>,
{
    parts
        .into_iter()
        .map(|part| part.as_ref().to_vec())
        .collect()
}

/// Validators generated for one response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Validators {
    pub(crate) effective: DateTime<Utc>,
    /// Only present for `strong` identities; the only tag `If-Match` accepts.
    pub(crate) strong_tag: Option<String>,
    /// Tag compared by `If-None-Match`; equals the strong tag when there is one.
    pub(crate) weak_tag: Option<String>,
    pub(crate) headers: ValidatorHeaders,
}

impl Validators {
    pub(crate) fn compute(options: &ValidatorOptions, effective: DateTime<Utc>) -> Self {
        let strong_tag = options.strong.as_ref().map(entity_tag::generate);
        let weak_tag = match (&strong_tag, &options.weak, options.last_modified) {
            (Some(strong), _, _) => Some(strong.clone()),
            (None, Some(weak), _) => Some(entity_tag::generate(weak)),
            (None, None, Some(_)) => Some(entity_tag::wrap_as_tag(
                http_date::format_iso(&effective).as_bytes(),
            )),
            (None, None, None) => None,
        };

        let headers = match &weak_tag {
            Some(weak) => ValidatorHeaders {
                etag: Some(
                    strong_tag
                        .clone()
                        .unwrap_or_else(|| format!("{WEAK_PREFIX}{weak}")),
                ),
                last_modified: options
                    .last_modified
                    .map(|_| http_date::format_gmt(&effective)),
            },
            None => ValidatorHeaders::default(),
        };

        Self {
            effective,
            strong_tag,
            weak_tag,
            headers,
        }
    }
}

#[cfg(test)]
#[path = "validator_test.rs"]
mod validator_test;
