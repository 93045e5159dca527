use utoipa::OpenApi;
use crate::models::*;

/// Health check endpoint
#[utoipa::path(
    get,
    tag = "inventory",
    path = "/",
    responses(
        (status = 200, description = "Service is running", body = HealthResponse)
    )
)]
#[allow(dead_code)]
pub async fn health_check_doc() {}

/// List all items
#[utoipa::path(
    get,
    tag = "inventory",
    path = "/api/",
    responses(
        (status = 200, description = "All inventory items", body = [Item]),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    )
)]
#[allow(dead_code)]
pub async fn list_items_doc() {}

/// Create a new item
#[utoipa::path(
    post,
    tag = "inventory",
    path = "/api/",
    request_body = ItemPayload,
    responses(
        (status = 201, description = "Item created successfully", body = CreateItemResponse),
        (status = 400, description = "Invalid payload", body = ErrorResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    )
)]
#[allow(dead_code)]
pub async fn create_item_doc() {}

/// Search items by name
#[utoipa::path(
    get,
    tag = "inventory",
    path = "/api/search",
    params(SearchQuery),
    responses(
        (status = 200, description = "Items whose name contains the query", body = [Item]),
        (status = 400, description = "Missing query", body = ErrorResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    )
)]
#[allow(dead_code)]
pub async fn search_items_doc() {}

/// Fetch one item
#[utoipa::path(
    get,
    tag = "inventory",
    path = "/api/{id}",
    params(("id" = i64, Path, description = "Item id")),
    responses(
        (status = 200, description = "The item", body = Item),
        (status = 400, description = "Invalid id", body = ErrorResponse),
        (status = 404, description = "Item not found", body = ErrorResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    )
)]
#[allow(dead_code)]
pub async fn get_item_doc() {}

/// Replace an item
#[utoipa::path(
    put,
    tag = "inventory",
    path = "/api/{id}",
    params(("id" = i64, Path, description = "Item id")),
    request_body = ItemPayload,
    responses(
        (status = 200, description = "Item updated successfully", body = MessageResponse),
        (status = 400, description = "Invalid id or payload", body = ErrorResponse),
        (status = 404, description = "Item not found", body = ErrorResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    )
)]
#[allow(dead_code)]
pub async fn update_item_doc() {}

/// Delete an item
#[utoipa::path(
    delete,
    tag = "inventory",
    path = "/api/{id}",
    params(("id" = i64, Path, description = "Item id")),
    responses(
        (status = 200, description = "Item deleted successfully", body = MessageResponse),
        (status = 400, description = "Invalid id", body = ErrorResponse),
        (status = 404, description = "Item not found", body = ErrorResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    )
)]
#[allow(dead_code)]
pub async fn delete_item_doc() {}

#[derive(OpenApi)]
#[openapi(
    paths(
        health_check_doc,
        list_items_doc,
        create_item_doc,
        search_items_doc,
        get_item_doc,
        update_item_doc,
        delete_item_doc,
    ),
    components(
        schemas(
            HealthResponse,
            Item,
            ItemPayload,
            CreateItemResponse,
            MessageResponse,
            ErrorResponse
        )
    ),
    tags(
        (name = "inventory", description = "Inventory item endpoints")
    )
)]
pub struct ApiDoc;
