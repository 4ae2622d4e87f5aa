//! Solvers for the largest conflict-free recipe subset.
//!
//! All three entry points share one contract: the caller supplies the recipe
//! that must survive, an ordered candidate pool drawn from the global scope,
//! and the global scope itself. The returned set always contains the
//! mandatory recipe and, unless the mandatory recipe was conflicted on its
//! own, is safely coexistent within the scope.
//!
//! [`solve_greedy`] is fast and non-optimal. [`solve_exact`] and
//! [`solve_exact_parallel`] guarantee maximum cardinality; the parallel
//! variant spreads the search over rayon's pool and pays off on larger
//! candidate pools.

use crate::conflict::is_set_safely_coexistent;
use crate::recipe::ConflictRecipe;
use crate::recipe::RecipeSet;

mod greedy;
pub use greedy::solve_greedy;

mod backtracking;
pub use backtracking::solve_exact;

mod parallel;
pub use parallel::solve_exact_parallel;

/// Outcome of a solve. Both variants always contain the mandatory recipe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution<R: ConflictRecipe> {
	/// A safely coexistent set, maximal under the solver's guarantee.
	Safe(RecipeSet<R>),
	/// The mandatory recipe conflicts with the global scope on its own, the
	/// contained set is just the mandatory singleton. Surfaced as its own
	/// variant so callers can tell a genuinely unsafe mandatory recipe from
	/// a search that simply found nothing to add.
	MandatoryConflicted(RecipeSet<R>),
}

impl<R: ConflictRecipe> Resolution<R> {
	pub fn set(&self) -> &RecipeSet<R> {
		match self {
			Resolution::Safe(set) | Resolution::MandatoryConflicted(set) => set,
		}
	}

	pub fn into_set(self) -> RecipeSet<R> {
		match self {
			Resolution::Safe(set) | Resolution::MandatoryConflicted(set) => set,
		}
	}

	pub fn is_safe(&self) -> bool {
		matches!(self, Resolution::Safe(_))
	}
}

/// The shared degenerate entry of every solver: the mandatory singleton must
/// itself pass the full check before anything is worth adding to it.
fn mandatory_base<R: ConflictRecipe>(mandatory: &R, global_scope: &RecipeSet<R>) -> Result<RecipeSet<R>, Resolution<R>> {
	let mut base = RecipeSet::new();
	base.insert(mandatory.clone());
	if is_set_safely_coexistent(&base, global_scope) {
		Ok(base)
	} else {
		log::debug!("mandatory recipe conflicts with the global scope on its own");
		Err(Resolution::MandatoryConflicted(base))
	}
}
