//! Product handlers

use super::parse_body;
use crate::error::ApiError;
use crate::AppState;
use axum::{
    body::Bytes,
    extract::{Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use storefront_types::Product;

/// `GET /api/products`, served from the snapshot cache
pub async fn list(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let body = state.catalog.listing().await?;
    Ok(([(header::CONTENT_TYPE, "application/json")], body))
}

pub async fn create(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<(StatusCode, Json<Product>), ApiError> {
    let product: Product = parse_body(&body)?;
    let product = state.catalog.add(product).await;
    Ok((StatusCode::CREATED, Json(product)))
}

pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Product>, ApiError> {
    state.catalog.get(&id).await.map(Json)
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Bytes,
) -> Result<Json<Product>, ApiError> {
    let product: Product = parse_body(&body)?;
    state.catalog.update(&id, product).await.map(Json)
}

pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    state.catalog.delete(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}
