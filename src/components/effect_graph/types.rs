//! Raw input records as they appear in the dataset document.

use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer};

/// Integer identifier of an effect.
pub type EffectId = i64;

/// The dataset document: ingredients plus the effect id to label table.
#[derive(Clone, Debug, Deserialize)]
pub struct RawDataset {
	/// Ingredients in document order.
	#[serde(rename = "ingredientsList")]
	pub ingredients: Vec<RawIngredient>,
	/// `(id, label)` entries in document order. Ids are still strings here.
	#[serde(rename = "effectlist", deserialize_with = "ordered_entries")]
	pub effects: Vec<(String, String)>,
}

/// One ingredient. The first pair of `effects` is the base effect; only the
/// pairs after it are transformations.
#[derive(Clone, Debug, Deserialize)]
pub struct RawIngredient {
	/// Ingredient name.
	pub name: String,
	/// `[source, target]` pairs, base first.
	#[serde(default)]
	pub effects: Vec<(EffectId, EffectId)>,
}

/// Reads a JSON object as a list of entries, keeping document order.
fn ordered_entries<'de, D>(deserializer: D) -> Result<Vec<(String, String)>, D::Error>
where
	D: Deserializer<'de>,
{
	struct EntriesVisitor;

	impl<'de> Visitor<'de> for EntriesVisitor {
		type Value = Vec<(String, String)>;

		fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
			f.write_str("a map of effect ids to labels")
		}

		fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
		where
			A: MapAccess<'de>,
		{
			let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
			while let Some(entry) = map.next_entry::<String, String>()? {
				entries.push(entry);
			}
			Ok(entries)
		}
	}

	deserializer.deserialize_map(EntriesVisitor)
}
