//! The conflict relation between recipes.
//!
//! A set of recipes is "safely coexistent" when no member, and no recipe in
//! the surrounding scope, has its requirements fully coverable by the
//! combined inputs of other recipes in the set. A coverable recipe is
//! ambiguous: an automated crafting setup can no longer tell which recipe the
//! supplied inputs are meant for.

use crate::recipe::ConflictRecipe;
use crate::recipe::RecipeSet;
use crate::recipe::Requirements;

/// Multiset sum of the requirements of every recipe in `set` except `exclude`.
pub fn union_inputs<'a, R, I>(set: I, exclude: Option<&R>) -> Requirements
where
	R: ConflictRecipe + 'a,
	I: IntoIterator<Item = &'a R>,
{
	let mut union = Requirements::new();
	for recipe in set {
		if Some(recipe) == exclude { continue; }
		union.merge(recipe.requirements());
	}
	union
}

/// Full safety check of `recipe_set` against `global_scope`.
///
/// Internal phase: no member may be coverable by the union of the other
/// members. Skipped for sets of size one, a lone recipe has nothing to
/// interact with.
///
/// External phase: no recipe in `global_scope` outside the set may be
/// coverable by the set's total union. This runs for every non-empty set, so
/// a lone recipe that duplicates one in scope is still reported unsafe.
pub fn is_set_safely_coexistent<R: ConflictRecipe>(recipe_set: &RecipeSet<R>, global_scope: &RecipeSet<R>) -> bool {
	if recipe_set.is_empty() { return true; }

	if recipe_set.len() > 1 {
		for recipe in recipe_set {
			let union_of_others = union_inputs(recipe_set, Some(recipe));
			if recipe.requirements().is_subset_of(&union_of_others) {
				return false;
			}
		}
	}

	let total_union = union_inputs(recipe_set, None);
	for external in global_scope {
		if recipe_set.contains(external) { continue; }
		if external.requirements().is_subset_of(&total_union) {
			return false;
		}
	}

	true
}

/// Incremental safety check: is `safe_set ∪ {candidate}` still safe, given
/// `safe_set` is already known safe?
///
/// Equivalent to re-running [`is_set_safely_coexistent`] on the extended set
/// but avoids re-verifying the relations already proven for `safe_set`. This
/// is what makes the exhaustive solvers tractable: every extension during
/// backtracking costs one incremental check instead of a full one.
pub fn is_addition_safe<R: ConflictRecipe>(safe_set: &RecipeSet<R>, candidate: &R, global_scope: &RecipeSet<R>) -> bool {
	/* A direct pairwise subset either way is always disqualifying,
	   independent of the rest of the set. */
	for member in safe_set {
		if candidate.requirements().is_subset_of(member.requirements())
			|| member.requirements().is_subset_of(candidate.requirements()) {
			return false;
		}
	}

	/* The candidate must not be coverable by the existing members combined. */
	let union_of_members = union_inputs(safe_set, None);
	if candidate.requirements().is_subset_of(&union_of_members) {
		return false;
	}

	/* No existing member may become coverable once the candidate's inputs
	   join the pool. */
	for member in safe_set {
		let mut union_of_others = union_inputs(safe_set, Some(member));
		union_of_others.merge(candidate.requirements());
		if member.requirements().is_subset_of(&union_of_others) {
			return false;
		}
	}

	/* Scope-external recipes must stay uncoverable too. */
	let mut new_total_union = union_of_members;
	new_total_union.merge(candidate.requirements());
	for external in global_scope {
		if external == candidate || safe_set.contains(external) { continue; }
		if external.requirements().is_subset_of(&new_total_union) {
			return false;
		}
	}

	true
}
