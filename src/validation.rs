//! Request-shape checks that run before any statement is issued.

use axum::{
    async_trait,
    extract::{FromRequest, FromRequestParts, Path, Request},
    http::request::Parts,
    Json,
};
use serde_json::Value;
use tracing::warn;

use crate::error::ApiError;
use crate::models::{ItemPayload, NewItem};

pub const INVALID_NAME: &str = "Name is required and must be a non-empty string";
pub const INVALID_QUANTITY: &str = "Quantity must be a positive number";
pub const INVALID_DESCRIPTION: &str = "Description must be a string";
pub const INVALID_ID: &str = "Invalid ID format";
pub const INVALID_BODY: &str = "Invalid JSON body";

/// Check an item body and turn it into typed fields.
///
/// The name must be a string with something other than whitespace in it,
/// the quantity any JSON number above zero. A missing or `null` description
/// becomes the empty string.
pub fn validate_item_payload(payload: &ItemPayload) -> Result<NewItem, ApiError> {
    let name = match &payload.name {
        Some(Value::String(name)) if !name.trim().is_empty() => name.clone(),
        _ => return Err(ApiError::invalid(INVALID_NAME)),
    };

    let quantity = payload
        .quantity
        .as_ref()
        .and_then(positive_quantity)
        .ok_or_else(|| ApiError::invalid(INVALID_QUANTITY))?;

    let description = match &payload.description {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(description)) => description.clone(),
        Some(_) => return Err(ApiError::invalid(INVALID_DESCRIPTION)),
    };

    Ok(NewItem {
        name,
        quantity,
        description,
    })
}

fn positive_quantity(value: &Value) -> Option<f64> {
    let quantity = value.as_number()?.as_f64()?;
    (quantity.is_finite() && quantity > 0.0).then_some(quantity)
}

/// Parse a path id. Only base-10 integers above zero are accepted.
pub fn validate_id_param(raw: &str) -> Result<i64, ApiError> {
    match raw.parse::<i64>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(ApiError::invalid(INVALID_ID)),
    }
}

/// Validated `:id` path segment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItemId(pub i64);

#[async_trait]
impl<S> FromRequestParts<S> for ItemId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| {
                warn!("Rejected item id: {}", rejection);
                ApiError::invalid(INVALID_ID)
            })?;

        validate_id_param(&raw).map(ItemId)
    }
}

/// JSON item body that passed validation
#[derive(Debug, Clone, PartialEq)]
pub struct ValidItem(pub NewItem);

#[async_trait]
impl<S> FromRequest<S> for ValidItem
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(payload) = Json::<ItemPayload>::from_request(req, state)
            .await
            .map_err(|rejection| {
                warn!("Rejected item body: {}", rejection);
                ApiError::invalid(INVALID_BODY)
            })?;

        validate_item_payload(&payload).map(ValidItem)
    }
}
