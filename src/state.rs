// src/state.rs
use std::sync::Arc;

use crate::config::Config;
use crate::services::upstream::CompletionClient;

pub type SharedState = Arc<AppState>;

pub struct AppState {
    pub upstream: CompletionClient,
}

impl AppState {
    pub fn new(config: &Config) -> Self {
        Self {
            upstream: CompletionClient::new(
                config.api_url.clone(),
                config.api_key.clone(),
                config.model.clone(),
            ),
        }
    }
}
