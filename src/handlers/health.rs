use axum::Json;
use crate::models::HealthResponse;
use tracing::info;

/// Health check endpoint
pub async fn health_check() -> Json<HealthResponse> {
    info!("Health check endpoint hit");
    Json(HealthResponse {
        message: "Inventory Management System API Running".to_string(),
    })
}
