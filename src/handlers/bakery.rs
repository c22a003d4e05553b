//! Bakery handlers: list, read, partial update.

use super::parse_id;
use crate::error::AppError;
use crate::extractors::RequestData;
use crate::models::BakeryChanges;
use crate::response::{ok, ok_many};
use crate::service::BakeryService;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    response::IntoResponse,
};

const BAKERY_NOT_FOUND: &str = "This bakery does not exist in the database.";

fn not_found() -> AppError {
    AppError::NotFound(BAKERY_NOT_FOUND.into())
}

pub async fn list(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let mut tx = state.store.begin().await?;
    let rows = BakeryService::list(&mut tx).await?;
    tx.commit().await?;
    Ok(ok_many(rows.iter().map(|(b, goods)| b.to_dict(goods)).collect()))
}

pub async fn read(State(state): State<AppState>, Path(id): Path<String>) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id, not_found)?;
    let mut tx = state.store.begin().await?;
    let bakery = BakeryService::find(&mut tx, id).await?.ok_or_else(not_found)?;
    let goods = BakeryService::baked_goods_for(&mut tx, id).await?;
    tx.commit().await?;
    Ok(ok(bakery.to_dict(&goods)))
}

/// PATCH: existence first, then body presence, then the allow-list. Nothing is written unless
/// every attribute passes.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    data: RequestData,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id, not_found)?;
    let mut tx = state.store.begin().await?;
    BakeryService::find(&mut tx, id).await?.ok_or_else(not_found)?;
    let changes = BakeryChanges::from_attributes(data.attributes()?)?;
    let bakery = BakeryService::update(&mut tx, id, &changes).await?.ok_or_else(not_found)?;
    let goods = BakeryService::baked_goods_for(&mut tx, id).await?;
    tx.commit().await?;
    tracing::info!(id, "bakery updated");
    Ok(ok(bakery.to_dict(&goods)))
}
