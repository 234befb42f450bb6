//! Interaction handlers
//!
//! Inbound slash-command trigger.

use axum::{body::Bytes, extract::State, Json};

use crate::app::CommandOutcome;
use crate::domain::entities::Interaction;
use crate::error::AppError;
use crate::AppState;

/// POST /interactions
///
/// Runs the command synchronously and answers with its outcome. Malformed
/// payloads are rejected before anything is posted back.
pub async fn post_interaction(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<CommandOutcome>, AppError> {
    let interaction: Interaction = serde_json::from_slice(&body)
        .map_err(|e| AppError::BadRequest(format!("Invalid interaction payload: {}", e)))?;

    tracing::info!(
        command = %interaction.data.name,
        application_id = %interaction.application_id,
        "Received interaction"
    );

    let outcome = state.handler.handle(&interaction).await?;
    Ok(Json(outcome))
}
