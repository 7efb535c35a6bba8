use axum::{
    Json,
    extract::{Extension, Query},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use std::sync::Arc;

use super::memory::RecipeStore;
use super::types::{ErrorResponse, ListResponse};

#[derive(Debug, Deserialize)]
pub struct DetailParams {
    pub name: String,
}

pub async fn handle_list(Extension(store): Extension<Arc<RecipeStore>>) -> Json<ListResponse> {
    Json(ListResponse {
        count: store.len(),
        recipes: store.all().to_vec(),
    })
}

pub async fn handle_random(Extension(store): Extension<Arc<RecipeStore>>) -> Response {
    match store.pick_random(&mut rand::thread_rng()) {
        Some(recipe) => Json(recipe.clone()).into_response(),
        None => {
            // Startup validation rejects empty datasets, so this arm only
            // fires on a misassembled store.
            tracing::error!("Random pick requested against an empty recipe store");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "目前沒有任何食譜可供推薦".to_string(),
                }),
            )
                .into_response()
        }
    }
}

pub async fn handle_detail(
    Query(params): Query<DetailParams>,
    Extension(store): Extension<Arc<RecipeStore>>,
) -> Response {
    match store.find_by_name(&params.name) {
        Some(recipe) => Json(recipe.clone()).into_response(),
        None => {
            tracing::debug!("No recipe named {}", params.name);
            Json(ErrorResponse {
                error: format!("找不到名為 {} 的食譜", params.name),
            })
            .into_response()
        }
    }
}
