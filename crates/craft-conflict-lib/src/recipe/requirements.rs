use std::collections::HashMap;

use serde::{Serialize, Deserialize};

use super::Ingredient;

/// A requirement multiset: canonical ingredient keys mapped to positive
/// quantities. Absent keys mean zero.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Requirements(HashMap<Ingredient, u32>);

impl Requirements {
	pub fn new() -> Self {
		Self::default()
	}

	/// Quantity required of `ingredient`, zero when absent.
	pub fn count(&self, ingredient: &Ingredient) -> u32 {
		self.0.get(ingredient).copied().unwrap_or(0)
	}

	/// Number of distinct ingredient keys.
	pub fn distinct_len(&self) -> usize {
		self.0.len()
	}

	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	/// Adds `count` of `ingredient`, merging with any existing entry.
	/// Zero counts are dropped to keep absent-means-zero canonical.
	pub fn add(&mut self, ingredient: Ingredient, count: u32) {
		if count == 0 { return; }
		*self.0.entry(ingredient).or_insert(0) += count;
	}

	/// Merges every entry of `other` into this multiset.
	pub fn merge(&mut self, other: &Requirements) {
		for (ingredient, count) in &other.0 {
			*self.0.entry(ingredient.clone()).or_insert(0) += count;
		}
	}

	/// Multiset containment: every key's quantity is covered by `sup`.
	/// The empty multiset is trivially contained in anything.
	pub fn is_subset_of(&self, sup: &Requirements) -> bool {
		self.0.iter().all(|(ingredient, count)| sup.count(ingredient) >= *count)
	}

	pub fn iter(&self) -> impl Iterator<Item = (&Ingredient, u32)> {
		self.0.iter().map(|(ingredient, count)| (ingredient, *count))
	}
}

impl FromIterator<(Ingredient, u32)> for Requirements {
	fn from_iter<T: IntoIterator<Item = (Ingredient, u32)>>(iter: T) -> Self {
		let mut requirements = Requirements::new();
		for (ingredient, count) in iter {
			requirements.add(ingredient, count);
		}
		requirements
	}
}
