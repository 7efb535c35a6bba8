use super::types::Recipe;
use rand::Rng;
use rand::seq::SliceRandom;

/// Read-only, ordered recipe collection shared by all request handlers.
///
/// Built exactly once at startup and never mutated afterwards, so any number
/// of concurrent readers can use it without locking.
pub struct RecipeStore {
    recipes: Vec<Recipe>,
}

impl RecipeStore {
    pub fn new(recipes: Vec<Recipe>) -> Self {
        Self { recipes }
    }

    /// All recipes in their original dataset order.
    pub fn all(&self) -> &[Recipe] {
        &self.recipes
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    /// Linear scan for an exact name match; the first hit wins if the
    /// dataset happens to contain duplicate names.
    pub fn find_by_name(&self, name: &str) -> Option<&Recipe> {
        self.recipes.iter().find(|recipe| recipe.name == name)
    }

    /// Uniformly random recipe, or `None` on an empty store. The generator
    /// is passed in so tests can supply a seeded one.
    pub fn pick_random<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&Recipe> {
        self.recipes.choose(rng)
    }
}
