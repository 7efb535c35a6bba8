use crate::storage::types::Recipe;

/// Filter the recipe collection by category and ingredient keywords.
///
/// Stage 1 keeps recipes whose `category` equals the requested one exactly.
/// Stage 2 keeps recipes for which every keyword is a substring of at least
/// one ingredient entry, counting one hit per matched keyword of every
/// accepted recipe. Both stages preserve the original store order.
///
/// Returns the accepted recipes and the accumulated fuzzy hit count.
pub fn search(
    recipes: &[Recipe],
    category: Option<&str>,
    keywords: Option<&[String]>,
) -> (Vec<Recipe>, usize) {
    let mut result: Vec<&Recipe> = recipes.iter().collect();
    let mut fuzzy_hit_count = 0;

    // An empty category value deactivates the filter, same as omitting it.
    if let Some(cat) = category.filter(|c| !c.is_empty()) {
        result.retain(|recipe| recipe.category == cat);
    }

    let keywords = keywords.unwrap_or(&[]);
    if !keywords.is_empty() {
        let mut filtered = Vec::new();

        for recipe in result {
            let mut matched_all = true;
            let mut local_hits = 0;

            for keyword in keywords {
                // A keyword hits if it appears inside any single ingredient
                if recipe
                    .ingredients
                    .iter()
                    .any(|ingredient| ingredient.contains(keyword.as_str()))
                {
                    local_hits += 1;
                } else {
                    matched_all = false;
                    break;
                }
            }

            if matched_all {
                filtered.push(recipe);
                fuzzy_hit_count += local_hits;
            }
        }

        result = filtered;
    }

    (result.into_iter().cloned().collect(), fuzzy_hit_count)
}
