use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::Json;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::server::error::AppError;
use crate::server::AppState;
use crate::store::CardFilter;

#[derive(Debug, Deserialize)]
pub struct ListCardsParams {
    pub set_code: Option<String>,
    pub name: Option<String>,
    pub rarity: Option<String>,
    pub layout: Option<String>,
    pub cmc_min: Option<f64>,
    pub cmc_max: Option<f64>,
    pub legal_in: Option<String>,
    pub limit: Option<usize>,
    pub offset: Option<usize>,
}

/// GET /api/cards?set_code=ust&rarity=rare&legal_in=legacy
///
/// List cards ordered by set and collector number.
pub async fn list_cards(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ListCardsParams>,
) -> Result<Json<Value>, AppError> {
    let filter = CardFilter {
        set_code: params.set_code,
        name: params.name,
        rarity: params.rarity,
        layout: params.layout,
        cmc_min: params.cmc_min,
        cmc_max: params.cmc_max,
        legal_in: params.legal_in,
        limit: params.limit,
        offset: params.offset,
    };

    let cards = state.catalog.run(move |c| c.cards().list(&filter)).await?;

    let count = cards.len();
    Ok(Json(json!({ "data": cards, "count": count })))
}

/// GET /api/cards/{set_code}/{collector_number}
pub async fn get_card(
    State(state): State<Arc<AppState>>,
    Path((set_code, collector_number)): Path<(String, String)>,
) -> Result<Json<Value>, AppError> {
    let (sc, cn) = (set_code.clone(), collector_number.clone());
    let card = state.catalog.run(move |c| c.cards().get(&sc, &cn)).await?;

    match card {
        Some(card) => Ok(Json(json!({ "data": card }))),
        None => Err(AppError::not_found(format!(
            "Card '{set_code}/{collector_number}' not found"
        ))),
    }
}

/// POST /api/cards
///
/// Validate, normalize and store a card under `(set_code, collector_number)`.
pub async fn create_card(
    State(state): State<Arc<AppState>>,
    Json(body): Json<Value>,
) -> Result<(StatusCode, Json<Value>), AppError> {
    let card = state.catalog.run(move |c| c.create_card(&body)).await?;
    Ok((StatusCode::CREATED, Json(json!({ "data": card }))))
}

/// PUT /api/cards/{set_code}/{collector_number}
pub async fn replace_card(
    State(state): State<Arc<AppState>>,
    Path((set_code, collector_number)): Path<(String, String)>,
    Json(body): Json<Value>,
) -> Result<Json<Value>, AppError> {
    let card = state
        .catalog
        .run(move |c| c.replace_card(&set_code, &collector_number, &body))
        .await?;
    Ok(Json(json!({ "data": card })))
}

/// DELETE /api/cards/{set_code}/{collector_number}
pub async fn delete_card(
    State(state): State<Arc<AppState>>,
    Path((set_code, collector_number)): Path<(String, String)>,
) -> Result<StatusCode, AppError> {
    let (sc, cn) = (set_code.clone(), collector_number.clone());
    let removed = state.catalog.run(move |c| c.cards().delete(&sc, &cn)).await?;

    if removed {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::not_found(format!(
            "Card '{set_code}/{collector_number}' not found"
        )))
    }
}
