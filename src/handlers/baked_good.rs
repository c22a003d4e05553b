//! Baked good handlers: price listing, most expensive, create, delete.

use super::parse_id;
use crate::error::AppError;
use crate::extractors::RequestData;
use crate::response::{created, deleted, ok, ok_many};
use crate::service::{BakedGoodService, RequestValidator};
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    response::IntoResponse,
};

pub async fn by_price(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let mut tx = state.store.begin().await?;
    let rows = BakedGoodService::by_price(&mut tx).await?;
    tx.commit().await?;
    Ok(ok_many(rows.iter().map(|g| g.to_dict()).collect()))
}

pub async fn most_expensive(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let mut tx = state.store.begin().await?;
    let row = BakedGoodService::most_expensive(&mut tx)
        .await?
        .ok_or_else(|| AppError::NotFound("There are no baked goods in the database.".into()))?;
    tx.commit().await?;
    Ok(ok(row.to_dict()))
}

/// POST reads form fields only; a JSON body counts as missing fields.
pub async fn create(State(state): State<AppState>, data: RequestData) -> Result<impl IntoResponse, AppError> {
    let new = RequestValidator::new_baked_good(&data.form)?;
    let mut tx = state.store.begin().await?;
    let row = BakedGoodService::create(&mut tx, &new).await?;
    tx.commit().await?;
    tracing::info!(id = row.id, bakery_id = row.bakery_id, "baked good created");
    Ok(created(row.to_dict()))
}

fn not_found() -> AppError {
    AppError::NotFound("The baked good does not exist in the database.".into())
}

pub async fn delete(State(state): State<AppState>, Path(id): Path<String>) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id, not_found)?;
    let mut tx = state.store.begin().await?;
    if !BakedGoodService::delete(&mut tx, id).await? {
        return Err(not_found());
    }
    tx.commit().await?;
    tracing::info!(id, "baked good deleted");
    Ok(deleted("Baked good deleted successfully."))
}
