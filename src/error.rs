//! Load errors for the effect graph viewer.

use thiserror::Error;

use crate::components::effect_graph::EffectId;

/// Fatal failures while loading the dataset. No graph is shown when one of
/// these is returned.
#[derive(Error, Debug)]
pub enum LoadError {
	/// The page has no element with the dataset id.
	#[error("graph data element #{0} not found")]
	MissingElement(String),

	/// The document is not valid JSON or lacks a required field.
	#[error("malformed graph data: {0}")]
	Json(#[from] serde_json::Error),

	/// An `effectlist` key does not parse as an integer.
	#[error("effect id {0:?} is not an integer")]
	InvalidEffectId(String),

	/// Two `effectlist` keys parse to the same integer.
	#[error("effect id {0} appears more than once in effectlist")]
	DuplicateEffect(EffectId),

	/// Strict mode only: an edge names an effect missing from `effectlist`.
	#[error("ingredient {ingredient:?} references unknown effect {effect}")]
	UnknownEffect {
		/// Ingredient declaring the edge.
		ingredient: String,
		/// The missing effect id.
		effect: EffectId,
	},
}
