//! Transaction handlers

use super::parse_body;
use crate::error::ApiError;
use crate::AppState;
use axum::{body::Bytes, extract::State, Json};
use storefront_types::Transaction;

/// `POST /api/transaction`: record the transaction and echo it back
pub async fn create(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<Transaction>, ApiError> {
    let transaction: Transaction = parse_body(&body)?;
    Ok(Json(state.ledger.record(transaction).await))
}
