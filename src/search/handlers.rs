use super::engine::search;
use super::types::SearchResponse;
use crate::storage::memory::RecipeStore;
use axum::{Extension, Json};
// axum's own Query cannot collect repeated `ingredient` keys into a Vec
use axum_extra::extract::Query;
use serde::Deserialize;
use std::sync::Arc;

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub category: Option<String>,
    pub ingredient: Option<Vec<String>>,
}

pub async fn handle_search(
    Query(params): Query<SearchParams>,
    Extension(store): Extension<Arc<RecipeStore>>,
) -> Json<SearchResponse> {
    let (results, fuzzy_match_count) = search(
        store.all(),
        params.category.as_deref(),
        params.ingredient.as_deref(),
    );

    Json(SearchResponse {
        category: params.category,
        ingredients_query: params.ingredient,
        fuzzy_match_count,
        count: results.len(),
        results,
    })
}
