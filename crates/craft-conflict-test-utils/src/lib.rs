//! Helpers for building small recipe universes in tests.

use craft_conflict::Ingredient;
use craft_conflict::RecipeSet;
use craft_conflict::Requirements;
use craft_conflict::SimpleRecipe;

/// Builds a recipe from canonical ingredient keys,
/// e.g. `recipe("smelt", &[("item:minecraft:iron_ore", 1)])`.
///
/// # Panics
/// When a key does not parse. Tests use well formed keys.
pub fn recipe(id: &str, inputs: &[(&str, u32)]) -> SimpleRecipe {
	let requirements: Requirements = inputs.iter()
		.map(|(key, count)| (key.parse::<Ingredient>().expect("malformed ingredient key"), *count))
		.collect();
	SimpleRecipe::new(id, requirements)
}

/// Collects recipes into a [`RecipeSet`].
pub fn universe(recipes: &[SimpleRecipe]) -> RecipeSet<SimpleRecipe> {
	recipes.iter().cloned().collect()
}

/// Every subset of `recipes`, for exhaustive property checks over small
/// universes. Panics on more than 16 recipes, exhaustive checks should stay
/// small anyway.
pub fn power_set(recipes: &[SimpleRecipe]) -> Vec<RecipeSet<SimpleRecipe>> {
	assert!(recipes.len() <= 16, "power set would be excessively large");
	let mut subsets = Vec::with_capacity(1 << recipes.len());
	for mask in 0u32..(1 << recipes.len()) {
		subsets.push(
			recipes.iter()
				.enumerate()
				.filter(|(i, _)| mask & (1 << i) != 0)
				.map(|(_, recipe)| recipe.clone())
				.collect()
		);
	}
	subsets
}
