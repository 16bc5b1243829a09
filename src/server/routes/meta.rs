use std::sync::Arc;

use axum::extract::State;
use axum::response::Json;
use serde_json::{json, Value};

use crate::server::error::AppError;
use crate::server::AppState;

/// GET /api/health
///
/// Liveness plus the number of stored sets and cards.
pub async fn health(State(state): State<Arc<AppState>>) -> Result<Json<Value>, AppError> {
    let (sets, cards) = state
        .catalog
        .run(|c| Ok((c.sets().count(None)?, c.cards().count(None)?)))
        .await?;

    Ok(Json(json!({
        "status": "ok",
        "sets": sets,
        "cards": cards
    })))
}
