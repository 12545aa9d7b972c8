use axum::{
    body::Body,
    http::{HeaderMap, HeaderName, HeaderValue, Method, StatusCode},
    response::Response,
};
use bunner_conditional_rs::{
    Exchange, Headers, MalformedHeader, RequestContext, ValidateError, constants::header,
    decode_latin1,
};

use super::AppState;

/// Parses the conditional headers; a malformed list becomes a 400 response.
pub fn begin(state: &AppState, method: &Method, headers: &HeaderMap) -> Result<Exchange, Response> {
    let owned_ctx = OwnedRequestContext::from_parts(method, headers);
    let context = owned_ctx.as_request_context();

    state
        .conditional
        .begin(&context)
        .map_err(malformed_header_response)
}

/// Turns a short-circuit into its 304 / 412 response; usage errors become 500.
pub fn validate_error_response(err: ValidateError) -> Response {
    match err {
        ValidateError::ShortCircuit(short_circuit) => {
            let status =
                StatusCode::from_u16(short_circuit.status()).unwrap_or(StatusCode::PRECONDITION_FAILED);
            let mut response = empty_response(status);
            apply_headers(response.headers_mut(), &short_circuit.headers());
            response
        }
        ValidateError::Usage(usage) => {
            tracing::error!(error = %usage, "conditional request contract violated");
            empty_response(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// Attaches validators to the handler's response, or fails loudly if the
/// handler never validated.
pub fn finish(exchange: Exchange, mut response: Response) -> Response {
    match exchange.finalize(response.status().as_u16()) {
        Ok(headers) => {
            apply_headers(response.headers_mut(), &headers);
            response
        }
        Err(usage) => {
            tracing::error!(error = %usage, "conditional request contract violated");
            empty_response(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

fn malformed_header_response(err: MalformedHeader) -> Response {
    let mut response = empty_response(StatusCode::BAD_REQUEST);
    *response.body_mut() = Body::from(err.to_string());
    response
}

fn empty_response(status: StatusCode) -> Response {
    let mut response = Response::new(Body::empty());
    *response.status_mut() = status;
    response
}

fn apply_headers(map: &mut HeaderMap, headers: &Headers) {
    for (name, value) in headers.iter() {
        if let (Ok(header_name), Ok(header_value)) = (
            HeaderName::try_from(name.as_str()),
            HeaderValue::from_str(value),
        ) {
            map.insert(header_name, header_value);
        }
    }
}

struct OwnedRequestContext {
    method: String,
    if_match: Option<String>,
    if_none_match: Option<String>,
    if_modified_since: Option<String>,
    if_unmodified_since: Option<String>,
}

impl OwnedRequestContext {
    fn from_parts(method: &Method, headers: &HeaderMap) -> Self {
        Self {
            method: method.as_str().to_string(),
            if_match: header_value(headers, header::IF_MATCH),
            if_none_match: header_value(headers, header::IF_NONE_MATCH),
            if_modified_since: header_value(headers, header::IF_MODIFIED_SINCE),
            if_unmodified_since: header_value(headers, header::IF_UNMODIFIED_SINCE),
        }
    }

    fn as_request_context(&self) -> RequestContext<'_> {
        RequestContext {
            method: &self.method,
            if_match: self.if_match.as_deref(),
            if_none_match: self.if_none_match.as_deref(),
            if_modified_since: self.if_modified_since.as_deref(),
            if_unmodified_since: self.if_unmodified_since.as_deref(),
        }
    }
}

/// Joins repeated field lines with `, ` and keeps obs-text bytes.
fn header_value(headers: &HeaderMap, name: &str) -> Option<String> {
    let lines: Vec<&[u8]> = headers
        .get_all(name)
        .iter()
        .map(|value| value.as_bytes())
        .collect();
    if lines.is_empty() {
        return None;
    }
    Some(decode_latin1(&lines.join(b", ".as_slice())).into_owned())
}
