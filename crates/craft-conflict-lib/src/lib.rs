//! Detection of ambiguous crafting recipes and search for the largest subset
//! of recipes that can coexist without ambiguity.
//!
//! # Usage
//! 1. Implement [`ConflictRecipe`] for your recipe type (or use [`SimpleRecipe`]).
//! 1. Collect the full recipe universe into a [`RecipeSet`] to act as the global scope.
//! 1. Pick the recipe that must survive and call one of
//! [`solver::solve_greedy`], [`solver::solve_exact`] or [`solver::solve_exact_parallel`].
//! 1. Inspect the returned [`solver::Resolution`] for the conflict free set.

pub mod error;
pub use error::Result;
pub use error::Error;

pub mod recipe;
pub use recipe::ConflictRecipe;
pub use recipe::RecipeSet;
pub use recipe::Ingredient;
pub use recipe::Requirements;
pub use recipe::SimpleRecipe;

pub mod conflict;

pub mod solver;
pub use solver::Resolution;
