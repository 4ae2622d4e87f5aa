use std::sync::atomic::AtomicBool;
use std::sync::atomic::Ordering;

use rayon::prelude::*;

use crate::conflict::is_addition_safe;
use crate::recipe::ConflictRecipe;
use crate::recipe::RecipeSet;

use super::Resolution;

/* Branches with this many candidates left or fewer recurse sequentially,
   scheduling overhead outweighs the parallel win on small tails. */
const SEQUENTIAL_THRESHOLD: usize = 5;

/// Cooperative cancellation shared by every branch exploring one target size.
///
/// Advisory only: in-flight leaf checks may finish, but no branch starts new
/// work after the token is set. Idempotent and safe to set from any task.
#[derive(Debug, Default)]
struct CancelToken(AtomicBool);

impl CancelToken {
	fn cancel(&self) {
		self.0.store(true, Ordering::Relaxed);
	}

	fn is_cancelled(&self) -> bool {
		self.0.load(Ordering::Relaxed)
	}
}

/// Same guarantee as [`super::solve_exact`] with the exploration of each
/// target size spread over rayon's work-stealing pool.
///
/// When several maximum-size sets exist the specific set returned may differ
/// between runs, the cardinality never does. Branches share the candidate
/// pool and scope read-only and each carries its own copy of the growing
/// combination, so no locking is involved.
pub fn solve_exact_parallel<R>(mandatory: &R, candidates: &[R], global_scope: &RecipeSet<R>) -> Resolution<R>
where
	R: ConflictRecipe + Send + Sync,
{
	let base = match super::mandatory_base(mandatory, global_scope) {
		Ok(base) => base,
		Err(degenerate) => return degenerate,
	};

	let search = ParallelSearch { candidates, global_scope };

	/* Only the search within one target size is parallel. A hit at a larger
	   size always wins, so the size loop itself stays sequential. */
	for target_size in (1..=candidates.len()).rev() {
		log::trace!("searching in parallel for a safe combination of size {}", target_size);
		let cancel = CancelToken::default();
		if let Some(found) = search.branch(0, target_size, &base, &cancel) {
			log::debug!("parallel solver found a safe combination of size {}", target_size);
			return Resolution::Safe(found);
		}
	}

	Resolution::Safe(base)
}

struct ParallelSearch<'a, R: ConflictRecipe> {
	candidates: &'a [R],
	global_scope: &'a RecipeSet<R>,
}

impl<'a, R: ConflictRecipe + Send + Sync> ParallelSearch<'a, R> {
	/// One independently schedulable unit of work: explore every combination
	/// extending `safe_base` with candidates from `start` onwards.
	///
	/// The first branch to complete a combination sets `cancel` so siblings
	/// and their descendants stop spawning further work.
	fn branch(&self, start: usize, target_size: usize, safe_base: &RecipeSet<R>, cancel: &CancelToken) -> Option<RecipeSet<R>> {
		let chosen = safe_base.len() - 1;
		if chosen == target_size {
			return Some(safe_base.clone());
		}
		if self.candidates.len() - start < target_size - chosen {
			return None;
		}
		if cancel.is_cancelled() {
			return None;
		}
		if self.candidates.len() - start <= SEQUENTIAL_THRESHOLD {
			return self.branch_sequential(start, target_size, safe_base, cancel);
		}

		(start..self.candidates.len()).into_par_iter().find_map_any(|i| {
			if cancel.is_cancelled() {
				return None;
			}
			let candidate = &self.candidates[i];
			if !is_addition_safe(safe_base, candidate, self.global_scope) {
				return None;
			}
			let mut extended = safe_base.clone();
			extended.insert(candidate.clone());
			let found = self.branch(i + 1, target_size, &extended, cancel);
			if found.is_some() {
				cancel.cancel();
			}
			found
		})
	}

	/// Plain recursion for small tails. Still observes the token so a
	/// sibling's hit ends the descent early.
	fn branch_sequential(&self, start: usize, target_size: usize, safe_base: &RecipeSet<R>, cancel: &CancelToken) -> Option<RecipeSet<R>> {
		let chosen = safe_base.len() - 1;
		if chosen == target_size {
			return Some(safe_base.clone());
		}
		if self.candidates.len() - start < target_size - chosen {
			return None;
		}

		for i in start..self.candidates.len() {
			if cancel.is_cancelled() {
				return None;
			}
			let candidate = &self.candidates[i];
			if !is_addition_safe(safe_base, candidate, self.global_scope) {
				continue;
			}
			let mut extended = safe_base.clone();
			extended.insert(candidate.clone());
			if let Some(found) = self.branch_sequential(i + 1, target_size, &extended, cancel) {
				return Some(found);
			}
		}

		None
	}
}
