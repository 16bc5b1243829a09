use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::Json;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::server::error::AppError;
use crate::server::AppState;
use crate::store::SetFilter;
use crate::validation::fields;

#[derive(Debug, Deserialize)]
pub struct ListSetsParams {
    pub name: Option<String>,
    pub set_type: Option<String>,
    pub block_code: Option<String>,
    pub parent_set_code: Option<String>,
    pub released_after: Option<String>,
    pub released_before: Option<String>,
    pub limit: Option<usize>,
    pub offset: Option<usize>,
}

/// Reject a date filter that is not `YYYY-MM-DD`.
fn date_param(name: &str, value: Option<String>) -> Result<Option<String>, AppError> {
    value
        .map(|v| {
            fields::required_date(name, Some(&Value::String(v)))
                .map_err(|e| AppError::bad_request(e.to_string()))
        })
        .transpose()
}

/// GET /api/sets?set_type=funny&released_after=2017-01-01
///
/// List sets, newest first, with optional filters and paging.
pub async fn list_sets(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ListSetsParams>,
) -> Result<Json<Value>, AppError> {
    let filter = SetFilter {
        released_after: date_param("released_after", params.released_after)?,
        released_before: date_param("released_before", params.released_before)?,
        name: params.name,
        set_type: params.set_type,
        block_code: params.block_code,
        parent_set_code: params.parent_set_code,
        limit: params.limit,
        offset: params.offset,
    };

    let sets = state.catalog.run(move |c| c.sets().list(&filter)).await?;

    let count = sets.len();
    Ok(Json(json!({ "data": sets, "count": count })))
}

/// GET /api/sets/{code}
pub async fn get_set(
    State(state): State<Arc<AppState>>,
    Path(code): Path<String>,
) -> Result<Json<Value>, AppError> {
    let lookup = code.clone();
    let set = state.catalog.run(move |c| c.sets().get(&lookup)).await?;

    match set {
        Some(s) => Ok(Json(json!({ "data": s }))),
        None => Err(AppError::not_found(format!("Set '{code}' not found"))),
    }
}

/// POST /api/sets
///
/// Validate, normalize and store a set under its `set_code`.
pub async fn create_set(
    State(state): State<Arc<AppState>>,
    Json(body): Json<Value>,
) -> Result<(StatusCode, Json<Value>), AppError> {
    let set = state.catalog.run(move |c| c.create_set(&body)).await?;
    Ok((StatusCode::CREATED, Json(json!({ "data": set }))))
}

/// PUT /api/sets/{code}
///
/// Replace the stored set with a complete new record.
pub async fn replace_set(
    State(state): State<Arc<AppState>>,
    Path(code): Path<String>,
    Json(body): Json<Value>,
) -> Result<Json<Value>, AppError> {
    let set = state
        .catalog
        .run(move |c| c.replace_set(&code, &body))
        .await?;
    Ok(Json(json!({ "data": set })))
}

/// DELETE /api/sets/{code}
pub async fn delete_set(
    State(state): State<Arc<AppState>>,
    Path(code): Path<String>,
) -> Result<StatusCode, AppError> {
    let lookup = code.clone();
    let removed = state.catalog.run(move |c| c.sets().delete(&lookup)).await?;

    if removed {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::not_found(format!("Set '{code}' not found")))
    }
}
