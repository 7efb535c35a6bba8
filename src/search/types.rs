use crate::storage::types::Recipe;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct SearchResponse {
    pub category: Option<String>,
    pub ingredients_query: Option<Vec<String>>,
    /// Total keyword hits across all accepted recipes.
    pub fuzzy_match_count: usize,
    pub count: usize,
    pub results: Vec<Recipe>,
}
