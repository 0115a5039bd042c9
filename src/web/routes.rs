use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::core::models::ServerInfo;
use crate::web::handlers::{
    api::{api_not_found, generate, get_server_info, health_check},
    static_files::serve_index,
};

pub fn create_routes(server_info: ServerInfo, max_upload_size: u64) -> Router {
    // API routes
    let api_routes = Router::new()
        .route("/health", get(health_check))
        .route("/info", get(get_server_info))
        .route("/generate", post(generate))
        .fallback(api_not_found)
        .with_state(server_info);

    // Single-page UI
    Router::new()
        .nest("/api", api_routes)
        .fallback(serve_index)
        .layer(DefaultBodyLimit::max(max_upload_size as usize))
}
