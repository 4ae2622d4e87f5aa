//! A plain, self-contained recipe implementation.

use serde::{Serialize, Deserialize};

use super::ConflictRecipe;
use super::Requirements;

/// A ready-made recipe for callers without their own recipe type, e.g. ones
/// reading a universe from a JSON file.
///
/// Identity is the `id` string alone, the way game recipe ids behave: two
/// `SimpleRecipe`s with the same id are the same recipe regardless of inputs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimpleRecipe {
	id: String,
	inputs: Requirements,
}

impl SimpleRecipe {
	pub fn new(id: impl Into<String>, inputs: Requirements) -> Self {
		SimpleRecipe { id: id.into(), inputs }
	}

	pub fn id(&self) -> &str {
		&self.id
	}

	/// Reads an array of recipes from a JSON file of the form
	/// `[{"id": "...", "inputs": {"item:minecraft:iron_ingot": 1}}, ...]`.
	pub fn load_from_json_file(path: impl AsRef<std::path::Path>) -> crate::Result<Vec<SimpleRecipe>> {
		let file = std::fs::File::open(path)?;
		Ok(serde_json::from_reader(std::io::BufReader::new(file))?)
	}
}

impl std::hash::Hash for SimpleRecipe {
	fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
		self.id.hash(state);
	}
}

impl std::cmp::PartialEq for SimpleRecipe {
	fn eq(&self, other: &Self) -> bool {
		self.id == other.id
	}
}

impl std::cmp::Eq for SimpleRecipe {}

impl ConflictRecipe for SimpleRecipe {
	fn requirements(&self) -> &Requirements {
		&self.inputs
	}
}
