//! Dataset Loading
//!
//! Turns the recipe dataset (embedded by default, or a JSON file passed on
//! the command line) into the ordered record list the store is built from.
//! A dataset that cannot be read, cannot be parsed, or contains no recipes
//! aborts startup.

use super::types::Recipe;
use std::fs;
use std::path::Path;
use thiserror::Error;

static DEFAULT_DATASET: &str = include_str!("../../data/recipes.json");

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Failed to read recipe dataset: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse recipe dataset: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Recipe dataset contains no recipes")]
    EmptyDataset,
}

/// Load the embedded default dataset.
pub fn load_recipes() -> Result<Vec<Recipe>, LoadError> {
    parse_dataset(DEFAULT_DATASET)
}

/// Load a dataset from a JSON file on disk.
pub fn load_recipes_from_path(path: &Path) -> Result<Vec<Recipe>, LoadError> {
    let raw = fs::read_to_string(path)?;
    parse_dataset(&raw)
}

fn parse_dataset(raw: &str) -> Result<Vec<Recipe>, LoadError> {
    let recipes: Vec<Recipe> = serde_json::from_str(raw)?;
    if recipes.is_empty() {
        return Err(LoadError::EmptyDataset);
    }
    Ok(recipes)
}
