use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One record of the recipe dataset.
///
/// Only `name`, `category` and `ingredients` are ever inspected by the
/// service. Every other dataset field (steps, servings, images, ...) is
/// carried in `extra` and returned to clients untouched.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recipe {
    pub name: String,
    pub category: String,
    pub ingredients: Vec<String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ListResponse {
    pub count: usize,
    pub recipes: Vec<Recipe>,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
