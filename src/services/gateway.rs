// src/services/gateway.rs
use std::fmt::Debug;
use std::sync::Arc;

use crate::error::AppError;
use crate::message::{ChatRequest, ChatResponse};
use crate::services::providers::TextGenerator;

pub const DEFAULT_INSTRUCTION: &str = "You are a helpful AI assistant for Green Pulse, a carbon tracking and energy token platform.
Reply concisely, no more than 2-3 sentences. Focus on helping users with:
- Carbon tracking and emissions
- ENTO energy tokens
- Profile management
- Leaderboards and rankings
- Platform navigation";

/// Builds the prompt sent to the provider. The message is inserted as-is.
pub fn compose_prompt(instruction: &str, message: &str) -> String {
    format!("{instruction}\nUser: {message}")
}

/// Mediates between a chat request and the text provider.
///
/// Holds nothing but the provider handle and the instruction, both fixed at
/// construction, so concurrent calls never observe each other.
#[derive(Clone)]
pub struct ChatGateway {
    provider: Arc<dyn TextGenerator>,
    instruction: Arc<str>,
}

impl Debug for ChatGateway {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChatGateway")
            .field("instruction_len", &self.instruction.len())
            .finish()
    }
}

impl ChatGateway {
    pub fn new(provider: Arc<dyn TextGenerator>) -> Self {
        Self::with_instruction(provider, DEFAULT_INSTRUCTION)
    }

    pub fn with_instruction(provider: Arc<dyn TextGenerator>, instruction: impl Into<Arc<str>>) -> Self {
        Self { provider, instruction: instruction.into() }
    }

    pub fn instruction(&self) -> &str {
        &self.instruction
    }

    pub async fn handle_chat(&self, request: ChatRequest) -> Result<ChatResponse, AppError> {
        let message = match request.message {
            Some(m) if !m.trim().is_empty() => m,
            _ => {
                tracing::debug!("Rejected chat request without a message");
                return Err(AppError::InvalidRequest);
            }
        };

        let prompt = compose_prompt(&self.instruction, &message);

        match self.provider.generate(&prompt).await {
            Ok(text) => {
                tracing::info!(message_len = message.len(), reply_len = text.len(), "Chat reply generated");
                Ok(ChatResponse::new(text))
            }
            Err(e) => {
                tracing::error!(error = %e, "Error in chat endpoint");
                Err(AppError::ProviderFailure(e))
            }
        }
    }
}
