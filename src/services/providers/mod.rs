//! Text generation providers.
//!
//! The gateway only sees the [`TextGenerator`] capability, so any backend
//! that can turn a prompt into text can be plugged in.

pub mod gemini;

use async_trait::async_trait;
use thiserror::Error;

/// Error type for provider operations.
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("{0}")]
    Network(String),

    #[error("{status} {body}")]
    Api { status: u16, body: String },

    #[error("Invalid response from provider: {0}")]
    MalformedResponse(String),

    #[error("Response blocked by provider: {0}")]
    Blocked(String),

    #[error("Failed to create HTTP client: {0}")]
    Client(String),
}

/// Anything that can generate text from a prompt.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String, ProviderError>;
}
