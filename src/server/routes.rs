//! Route table assembly and the service info endpoint.

use crate::search::handlers::handle_search;
use crate::storage::handlers::{handle_detail, handle_list, handle_random};
use crate::storage::memory::RecipeStore;
use axum::{Json, Router, extract::Extension, routing::get};
use serde::Serialize;
use std::sync::Arc;

#[derive(Debug, Serialize)]
pub struct ServiceInfo {
    pub message: String,
}

/// Create the application router with the shared recipe store attached.
pub fn create_router(store: Arc<RecipeStore>) -> Router {
    Router::new()
        .route("/", get(handle_root))
        .route("/search", get(handle_search))
        .route("/list", get(handle_list))
        .route("/random", get(handle_random))
        .route("/detail", get(handle_detail))
        .layer(Extension(store))
}

pub async fn handle_root() -> Json<ServiceInfo> {
    Json(ServiceInfo {
        message: "歡迎使用強化版食譜查詢 API！".to_string(),
    })
}
