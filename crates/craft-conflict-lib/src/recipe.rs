//! The recipe abstraction and its requirement multiset types.

use std::collections::HashSet;

mod ingredient;
pub use ingredient::Ingredient;

mod requirements;
pub use requirements::Requirements;

pub mod simple;
pub use simple::SimpleRecipe;

/// A set of distinct recipes. Used both as a working solution and as the
/// global scope solutions are checked against.
pub type RecipeSet<R> = HashSet<R>;

/// Capability contract for any recipe-like value the conflict engine can work over.
///
/// Identity comes from `Eq`/`Hash`: two values are the same recipe iff they
/// compare equal. Adapters for concrete game recipe types live outside this
/// crate, [`SimpleRecipe`] is provided for callers without their own type.
pub trait ConflictRecipe: Clone + Eq + std::hash::Hash {
	/// The canonical multiset of everything this recipe consumes.
	///
	/// Must be computed once at construction and stored on the value, this
	/// is read on every safety check.
	fn requirements(&self) -> &Requirements;
}
