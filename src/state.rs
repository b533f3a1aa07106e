// src/state.rs
use std::sync::Arc;

use crate::services::gateway::ChatGateway;
use crate::services::providers::TextGenerator;

pub type SharedState = Arc<AppState>;

#[derive(Debug)]
pub struct AppState {
    pub gateway: ChatGateway,
}

impl AppState {
    pub fn new(provider: Arc<dyn TextGenerator>) -> Self {
        Self {
            gateway: ChatGateway::new(provider),
        }
    }

    pub fn shared(self) -> SharedState {
        Arc::new(self)
    }
}
