use axum::{
    extract::{rejection::QueryRejection, Query, State},
    http::StatusCode,
    Json,
};
use tracing::{info, warn};

use crate::{
    error::{ApiError, ApiResult},
    models::{CreateItemResponse, Item, MessageResponse, SearchQuery},
    state::AppState,
    validation::{ItemId, ValidItem},
};

const SEARCH_QUERY_REQUIRED: &str = "Search query is required";

/// List every item
pub async fn list_items(State(state): State<AppState>) -> ApiResult<Json<Vec<Item>>> {
    let items = state
        .store
        .list_items()
        .await
        .map_err(ApiError::persistence("Failed to fetch items"))?;

    info!("Items retrieved successfully ({} rows)", items.len());
    Ok(Json(items))
}

/// Create an item and return its generated id
pub async fn create_item(
    State(state): State<AppState>,
    ValidItem(item): ValidItem,
) -> ApiResult<(StatusCode, Json<CreateItemResponse>)> {
    let id = state
        .store
        .insert_item(&item)
        .await
        .map_err(ApiError::persistence("Failed to add item"))?;

    info!("Item added: {} (id {})", item.name, id);
    Ok((
        StatusCode::CREATED,
        Json(CreateItemResponse {
            message: "Item added successfully".to_string(),
            id,
        }),
    ))
}

/// Fetch one item by id
pub async fn get_item(
    State(state): State<AppState>,
    ItemId(id): ItemId,
) -> ApiResult<Json<Item>> {
    let item = state
        .store
        .fetch_item(id)
        .await
        .map_err(ApiError::persistence("Failed to fetch item"))?
        .ok_or_else(|| {
            warn!("Item {} not found", id);
            ApiError::NotFound
        })?;

    info!("Item retrieved: {}", id);
    Ok(Json(item))
}

/// Replace name, quantity and description of an existing item
pub async fn update_item(
    State(state): State<AppState>,
    ItemId(id): ItemId,
    ValidItem(item): ValidItem,
) -> ApiResult<Json<MessageResponse>> {
    let affected = state
        .store
        .update_item(id, &item)
        .await
        .map_err(ApiError::persistence("Failed to update item"))?;

    if affected == 0 {
        warn!("Item {} not found for update", id);
        return Err(ApiError::NotFound);
    }

    info!("Item updated: {}", id);
    Ok(Json(MessageResponse::new("Item updated successfully")))
}

/// Delete an item by id
pub async fn delete_item(
    State(state): State<AppState>,
    ItemId(id): ItemId,
) -> ApiResult<Json<MessageResponse>> {
    let affected = state
        .store
        .delete_item(id)
        .await
        .map_err(ApiError::persistence("Failed to delete item"))?;

    if affected == 0 {
        warn!("Item {} not found for delete", id);
        return Err(ApiError::NotFound);
    }

    info!("Item deleted: {}", id);
    Ok(Json(MessageResponse::new("Item deleted successfully")))
}

/// Find items whose name contains `q`
pub async fn search_items(
    State(state): State<AppState>,
    query: Result<Query<SearchQuery>, QueryRejection>,
) -> ApiResult<Json<Vec<Item>>> {
    let Query(query) = query.map_err(|rejection| {
        warn!("Rejected search query: {}", rejection);
        ApiError::invalid(SEARCH_QUERY_REQUIRED)
    })?;

    let term = query.q.as_deref().map(str::trim).unwrap_or_default();
    if term.is_empty() {
        return Err(ApiError::invalid(SEARCH_QUERY_REQUIRED));
    }

    let items = state
        .store
        .search_items(term)
        .await
        .map_err(ApiError::persistence("Failed to search items"))?;

    info!("Search performed: {} ({} matches)", term, items.len());
    Ok(Json(items))
}
