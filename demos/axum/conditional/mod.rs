use std::sync::{Arc, RwLock};

use bunner_conditional_rs::{Conditional, ConditionalOptions, ConfigError};
use chrono::{DateTime, Utc};

pub mod response;

pub type SharedConditional = Arc<Conditional>;

pub struct Greeting {
    pub text: String,
    pub updated_at: DateTime<Utc>,
}

#[derive(Clone)]
pub struct AppState {
    pub conditional: SharedConditional,
    pub greeting: Arc<RwLock<Greeting>>,
}

pub fn build_state() -> Result<AppState, ConfigError> {
    let conditional = Arc::new(Conditional::new(ConditionalOptions::default())?);

    Ok(AppState {
        conditional,
        greeting: Arc::new(RwLock::new(Greeting {
            text: "Welcome to the Axum conditional request example!".into(),
            updated_at: Utc::now(),
        })),
    })
}
