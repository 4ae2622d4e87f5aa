use serde::{Serialize, Deserialize};

/// A canonical ingredient key uniquely encoding "kind:specific-identifier".
///
/// The string form is what appears as map keys in serialized requirement
/// multisets, e.g. `item:minecraft:iron_ingot`, `fluid:minecraft:water`,
/// `tag:forge:ingots/iron` or `circuit:4`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum Ingredient {
	/// A concrete item id.
	Item(String),
	/// A concrete fluid id.
	Fluid(String),
	/// A tag standing in for any item carrying it.
	Tag(String),
	/// A programmed circuit configuration marker.
	Circuit(u32),
}

impl std::fmt::Display for Ingredient {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Ingredient::Item(id) => write!(f, "item:{}", id),
			Ingredient::Fluid(id) => write!(f, "fluid:{}", id),
			Ingredient::Tag(id) => write!(f, "tag:{}", id),
			Ingredient::Circuit(configuration) => write!(f, "circuit:{}", configuration),
		}
	}
}

impl std::str::FromStr for Ingredient {
	type Err = crate::Error;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let (kind, id) = s.split_once(':')
			.ok_or_else(|| crate::Error::Parse(format!("ingredient key [{}] has no kind prefix", s)))?;
		match kind {
			"item" => Ok(Ingredient::Item(id.to_owned())),
			"fluid" => Ok(Ingredient::Fluid(id.to_owned())),
			"tag" => Ok(Ingredient::Tag(id.to_owned())),
			"circuit" => {
				let configuration = id.parse::<u32>()
					.map_err(|_| crate::Error::Parse(format!("circuit configuration [{}] is not a number", id)))?;
				Ok(Ingredient::Circuit(configuration))
			},
			_ => Err(crate::Error::Parse(format!("unknown ingredient kind [{}]", kind))),
		}
	}
}

impl From<Ingredient> for String {
	fn from(value: Ingredient) -> Self {
		value.to_string()
	}
}

impl TryFrom<String> for Ingredient {
	type Error = crate::Error;

	fn try_from(value: String) -> Result<Self, Self::Error> {
		value.parse()
	}
}

#[cfg(test)]
mod test {
	use super::*;

	#[test] fn ingredient_item_round_trips() { assert_eq!("item:minecraft:iron_ingot".parse::<Ingredient>().unwrap().to_string(), "item:minecraft:iron_ingot") }
	#[test] fn ingredient_tag_keeps_path() { assert_eq!("tag:forge:ingots/iron".parse::<Ingredient>().unwrap(), Ingredient::Tag("forge:ingots/iron".to_owned())) }
	#[test] fn ingredient_circuit_parses_number() { assert_eq!("circuit:4".parse::<Ingredient>().unwrap(), Ingredient::Circuit(4)) }
	#[test] fn ingredient_circuit_rejects_non_number() { assert!("circuit:four".parse::<Ingredient>().is_err()) }
	#[test] fn ingredient_unknown_kind_rejected() { assert!("enchantment:sharpness".parse::<Ingredient>().is_err()) }
	#[test] fn ingredient_missing_prefix_rejected() { assert!("iron_ingot".parse::<Ingredient>().is_err()) }
}
