use axum::{
    extract::State,
    http::{HeaderMap, Method},
    response::{Html, IntoResponse, Response},
};
use bunner_conditional_rs::ValidatorOptions;
use chrono::Utc;

use crate::conditional::AppState;
use crate::conditional::response::{begin, finish, validate_error_response};

pub async fn greet(State(state): State<AppState>, method: Method, headers: HeaderMap) -> Response {
    let mut exchange = match begin(&state, &method, &headers) {
        Ok(exchange) => exchange,
        Err(response) => return response,
    };

    let (text, updated_at) = {
        let greeting = state.greeting.read().unwrap();
        (greeting.text.clone(), greeting.updated_at)
    };

    if let Err(err) = exchange
        .validate(ValidatorOptions::strong([text.as_str()]).with_last_modified(updated_at))
    {
        return validate_error_response(err);
    }

    finish(exchange, Html(format!("<h1>{text}</h1>")).into_response())
}

pub async fn replace_greeting(
    State(state): State<AppState>,
    method: Method,
    headers: HeaderMap,
    body: String,
) -> Response {
    let mut exchange = match begin(&state, &method, &headers) {
        Ok(exchange) => exchange,
        Err(response) => return response,
    };

    let mut greeting = state.greeting.write().unwrap();
    if let Err(err) = exchange.validate(
        ValidatorOptions::strong([greeting.text.as_str()]).with_last_modified(greeting.updated_at),
    ) {
        return validate_error_response(err);
    }

    greeting.text = body;
    greeting.updated_at = Utc::now();
    finish(exchange, Html(format!("<h1>{}</h1>", greeting.text)).into_response())
}
