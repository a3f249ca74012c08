use axum::{
    Json,
    extract::State,
};
use crate::{
    error::AppError,
    message::{ChatReply, ChatRequest},
    services::canned::canned_reply,
    state::SharedState,
};

pub async fn chat_handler(
    State(state): State<SharedState>,
    Json(payload): Json<ChatRequest>,
) -> Result<Json<ChatReply>, AppError> {
    let trimmed = payload.message.trim();

    if trimmed.is_empty() {
        return Err(AppError::BadRequest("Message cannot be empty".to_string()));
    }

    // Keyword shortcut first; a hit never touches the network.
    if let Some(reply) = canned_reply(trimmed) {
        return Ok(Json(ChatReply { reply }));
    }

    let reply = state.upstream.complete(trimmed).await?;

    Ok(Json(ChatReply { reply }))
}
