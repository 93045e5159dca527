use crate::{handlers, state::AppState};
use axum::{routing::get, Router};

/// Create API routes
pub fn create_api_routes(state: AppState) -> Router {
    // Collection routes answer with and without the trailing slash
    let collection = get(handlers::list_items).post(handlers::create_item);

    Router::<AppState>::new()
        .route("/api", collection.clone())
        .route("/api/", collection)
        .route("/api/search", get(handlers::search_items))
        .route(
            "/api/:id",
            get(handlers::get_item)
                .put(handlers::update_item)
                .delete(handlers::delete_item),
        )
        .with_state(state)
}
