use std::borrow::Cow;

pub(crate) fn is_http_token(value: &str) -> bool {
    !value.is_empty()
        && value.bytes().all(|byte| {
            matches!(
                byte,
                b'0'..=b'9'
                    | b'A'..=b'Z'
                    | b'a'..=b'z'
                    | b'!'
                    | b'#'
                    | b'$'
                    | b'%'
                    | b'&'
                    | b'\''
                    | b'*'
                    | b'+'
                    | b'-'
                    | b'.'
                    | b'^'
                    | b'_'
                    | b'`'
                    | b'|'
                    | b'~'
            )
        })
}

/// Strips optional whitespace around a field value. Empty values count as absent.
pub(crate) fn field_value(value: Option<&str>) -> Option<&str> {
    value
        .map(|raw| raw.trim_matches(|ch| ch == ' ' || ch == '\t'))
        .filter(|trimmed| !trimmed.is_empty())
}

/// Decodes a raw header value as ISO-8859-1, one char per byte.
///
/// obs-text bytes (`0x80-0xFF`) come out as `U+0080-U+00FF`, which the
/// entity-tag grammar accepts. ASCII input is borrowed as is.
pub fn decode_latin1(bytes: &[u8]) -> Cow<'_, str> {
    match std::str::from_utf8(bytes) {
        Ok(text) if bytes.is_ascii() => Cow::Borrowed(text),
        _ => Cow::Owned(bytes.iter().map(|&byte| char::from(byte)).collect()),
    }
}

pub(crate) fn is_safe_method(method: &str) -> bool {
    method == crate::constants::method::GET || method == crate::constants::method::HEAD
}

#[cfg(test)]
#[path = "util_test.rs"]
mod util_test;
