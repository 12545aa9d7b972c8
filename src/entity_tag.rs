use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use md5::{Digest, Md5};
use once_cell::sync::Lazy;
use regex_automata::meta::Regex;
use regex_automata::util::syntax;

const LIST_GRAMMAR: &str = r#"^(?:\*|(?:W/)?"[\x21\x23-\x7e\x80-\xff]*"(?:[ \t]*,[ \t]*(?:W/)?"[\x21\x23-\x7e\x80-\xff]*")*)$"#;
const ENTITY_TAG: &str = r#"W/"[^"]*"|"[^"]*""#;
const OPAQUE_TAG: &str = r#""[^"]*""#;
const WILDCARD: &str = "*";
const DIGEST_LEN: usize = 16;

static LIST_REGEX: Lazy<Regex> = Lazy::new(|| compile(LIST_GRAMMAR));
static ENTITY_TAG_REGEX: Lazy<Regex> = Lazy::new(|| compile(ENTITY_TAG));
static OPAQUE_TAG_REGEX: Lazy<Regex> = Lazy::new(|| compile(OPAQUE_TAG));

/// Byte-oriented so the obs-text range `0x80-0xFF` is matched per byte.
pub(crate) fn compile(pattern: &str) -> Regex {
    Regex::builder()
        .syntax(syntax::Config::new().unicode(false).utf8(false))
        .build(pattern)
        .expect("built-in grammar must compile")
}

/// Set of entity tags taken from an `If-Match` or `If-None-Match` header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TagFilter {
    /// The `*` wildcard: any current representation matches.
    Any,
    /// An explicit, never empty, list of quoted tags.
    List(Vec<String>),
}

impl TagFilter {
    /// An empty tag (no validator computed) never matches, not even `*`.
    pub fn matches(&self, tag: &str) -> bool {
        if tag.is_empty() {
            return false;
        }
        match self {
            TagFilter::Any => true,
            TagFilter::List(tags) => tags.iter().any(|candidate| candidate == tag),
        }
    }
}

/// Checks `value` against `"*" / 1#entity-tag` (RFC 7232 section 2.3).
pub fn is_valid_list(value: &str) -> bool {
    LIST_REGEX.is_match(value.as_bytes())
}

/// Parses an `If-Match` value. Weak tags keep their `W/` prefix so they can
/// never equal a strong tag.
pub fn parse_accepted(value: &str) -> Option<TagFilter> {
    parse_with(value, &ENTITY_TAG_REGEX)
}

/// Parses an `If-None-Match` value. The `W/` prefix is dropped so weak and
/// strong forms of the same opaque tag compare equal.
pub fn parse_rejected(value: &str) -> Option<TagFilter> {
    parse_with(value, &OPAQUE_TAG_REGEX)
}

fn parse_with(value: &str, pattern: &Regex) -> Option<TagFilter> {
    if !is_valid_list(value) {
        return None;
    }
    if value == WILDCARD {
        return Some(TagFilter::Any);
    }

    let tags = pattern
        .find_iter(value.as_bytes())
        .map(|found| value[found.range()].to_string())
        .collect();
    Some(TagFilter::List(tags))
}

/// Quoted base64 of the MD5 digest of `bytes`.
pub fn wrap_as_tag(bytes: &[u8]) -> String {
    format!("\"{}\"", STANDARD.encode(Md5::digest(bytes)))
}

/// Builds an opaque tag from ordered identity parts.
///
/// A single part is digested once. Otherwise each part is digested, the
/// digests are concatenated in order and the result is digested again.
///
/// Tags from a scheme that always re-digests differ for single parts:
/// `["hello"]` yields `"XUFAKrxLKna5cZ2REBfFkg=="`, not the re-digested
/// `"YhCSBogNOKQBCpjhEkOSSg=="`. Clients caching tags from such a scheme
/// revalidate once after switching.
pub fn generate<I, P>(parts: I) -> String
where
    I: IntoIterator<Item = P>,
    P: AsRef<[u8]>,
{
    let parts: Vec<P> = parts.into_iter().collect();
    if let [single] = parts.as_slice() {
        return wrap_as_tag(single.as_ref());
    }

    let mut digests = Vec::with_capacity(parts.len() * DIGEST_LEN);
    for part in &parts {
        digests.extend_from_slice(&Md5::digest(part.as_ref()));
    }
    wrap_as_tag(&digests)
}

#[cfg(test)]
#[path = "entity_tag_test.rs"]
mod entity_tag_test;
