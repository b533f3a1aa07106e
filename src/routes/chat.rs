use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};

use crate::{
    error::AppError,
    message::{ChatRequest, ChatResponse},
    state::SharedState,
};

pub async fn chat_handler(
    State(state): State<SharedState>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatResponse>, AppError> {
    // A body that does not fit the schema is the same as a missing message.
    let Json(request) = payload.map_err(|rejection| {
        tracing::debug!(error = %rejection, "Chat body rejected");
        AppError::InvalidRequest
    })?;

    let response = state.gateway.handle_chat(request).await?;
    Ok(Json(response))
}
