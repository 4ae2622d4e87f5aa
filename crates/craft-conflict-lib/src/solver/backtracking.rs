use crate::conflict::is_addition_safe;
use crate::recipe::ConflictRecipe;
use crate::recipe::RecipeSet;

use super::Resolution;

/// Finds a true maximum-cardinality conflict-free subset of `candidates` to
/// accompany `mandatory`.
///
/// Target sizes are tried from `candidates.len()` down to zero, the first
/// size yielding any safe combination is the maximum. No preference among
/// ties, the first combination found wins.
pub fn solve_exact<R: ConflictRecipe>(mandatory: &R, candidates: &[R], global_scope: &RecipeSet<R>) -> Resolution<R> {
	let base = match super::mandatory_base(mandatory, global_scope) {
		Ok(base) => base,
		Err(degenerate) => return degenerate,
	};

	let search = DescendingSearch { candidates, global_scope };
	for target_size in (1..=candidates.len()).rev() {
		log::trace!("searching for a safe combination of size {}", target_size);
		if let Some(found) = search.recurse(0, target_size, &base) {
			log::debug!("exact solver found a safe combination of size {}", target_size);
			return Resolution::Safe(found);
		}
	}

	/* No candidate can join, the mandatory singleton is the maximum. */
	Resolution::Safe(base)
}

struct DescendingSearch<'a, R: ConflictRecipe> {
	candidates: &'a [R],
	global_scope: &'a RecipeSet<R>,
}

impl<'a, R: ConflictRecipe> DescendingSearch<'a, R> {
	/// Ordered recursive choice: the candidate index only moves forward so no
	/// combination is visited twice.
	///
	/// `safe_base` holds the mandatory recipe plus the partial combination
	/// and is known safe, so every extension needs only the incremental
	/// check. A combination reaching the target size is therefore safe
	/// without a final re-verification.
	fn recurse(&self, start: usize, target_size: usize, safe_base: &RecipeSet<R>) -> Option<RecipeSet<R>> {
		let chosen = safe_base.len() - 1;
		if chosen == target_size {
			return Some(safe_base.clone());
		}
		if self.candidates.len() - start < target_size - chosen {
			/* Not enough candidates left to reach the target size. */
			return None;
		}

		for i in start..self.candidates.len() {
			let candidate = &self.candidates[i];
			if !is_addition_safe(safe_base, candidate, self.global_scope) {
				continue;
			}
			let mut extended = safe_base.clone();
			extended.insert(candidate.clone());
			if let Some(found) = self.recurse(i + 1, target_size, &extended) {
				return Some(found);
			}
		}

		None
	}
}
