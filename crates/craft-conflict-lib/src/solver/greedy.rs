use crate::conflict::is_addition_safe;
use crate::recipe::ConflictRecipe;
use crate::recipe::RecipeSet;

use super::Resolution;

/// Fast, non-optimal solver: orders candidates by how few distinct
/// ingredients they require and keeps every one that is incrementally safe.
///
/// Deterministic for a fixed `search_space` ordering, ties in the sort key
/// keep their input order. The result is a local optimum, use
/// [`super::solve_exact`] when the true maximum matters.
pub fn solve_greedy<R: ConflictRecipe>(mandatory: &R, search_space: &[R], global_scope: &RecipeSet<R>) -> Resolution<R> {
	let mut safe_set = match super::mandatory_base(mandatory, global_scope) {
		Ok(base) => base,
		Err(degenerate) => return degenerate,
	};

	let mut candidates: Vec<&R> = search_space.iter().filter(|recipe| *recipe != mandatory).collect();
	let candidate_count = candidates.len();
	/* Recipes needing fewer distinct inputs are less likely to be subsumed
	   by whatever gets accepted after them. */
	candidates.sort_by_key(|recipe| recipe.requirements().distinct_len());

	for candidate in candidates {
		if is_addition_safe(&safe_set, candidate, global_scope) {
			safe_set.insert(candidate.clone());
		}
	}

	log::debug!("greedy solver kept {} of {} candidates", safe_set.len() - 1, candidate_count);
	Resolution::Safe(safe_set)
}
