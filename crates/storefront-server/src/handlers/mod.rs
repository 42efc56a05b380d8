//! HTTP handlers

pub mod health;
pub mod products;
pub mod transactions;
pub mod users;

pub use health::health;

use crate::error::ApiError;
use serde::de::DeserializeOwned;

/// Decode a JSON request body.
///
/// Bodies are parsed regardless of `Content-Type`, and every decode failure is
/// reported as a 400 carrying the parser's message.
fn parse_body<T: DeserializeOwned>(body: &[u8]) -> Result<T, ApiError> {
    Ok(serde_json::from_slice(body)?)
}
