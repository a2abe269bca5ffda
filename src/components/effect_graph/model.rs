//! In-memory effect graph: effects, ingredients and the edges they induce.
//!
//! Built once from the dataset document and read-only afterwards. Colors are
//! assigned here, at load time, in the document order of `effectlist`.

use std::collections::{HashMap, HashSet};

use log::{info, warn};
use serde::Serialize;

use super::palette::{ColorPalette, DEFAULT_EDGE_COLOR, DEFAULT_NODE_COLOR};
use super::types::{EffectId, RawDataset};
use crate::error::LoadError;

/// A node of the graph.
#[derive(Clone, Debug, PartialEq)]
pub struct Effect {
	/// Integer id parsed from the `effectlist` key.
	pub id: EffectId,
	/// Display name.
	pub label: String,
	/// Uppercase `#RRGGBB`, fixed for the lifetime of the graph.
	pub color: String,
}

/// A directed `source -> target` transformation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct Edge {
	/// Effect the ingredient transforms from.
	pub source: EffectId,
	/// Effect it produces.
	pub target: EffectId,
}

impl Edge {
	/// Directed edge from `source` to `target`.
	pub const fn new(source: EffectId, target: EffectId) -> Self {
		Self { source, target }
	}
}

impl From<(EffectId, EffectId)> for Edge {
	fn from((source, target): (EffectId, EffectId)) -> Self {
		Self::new(source, target)
	}
}

/// A selectable ingredient and the transformations it applies.
#[derive(Clone, Debug, PartialEq)]
pub struct Ingredient {
	/// Name shown in the selector.
	pub name: String,
	/// Leading pair of the raw list; never an edge.
	pub base: Option<Edge>,
	/// Pairs after the base, in declaration order.
	pub transformations: Vec<Edge>,
}

/// Immutable effect graph.
#[derive(Clone, Debug)]
pub struct EffectGraph {
	effects: Vec<Effect>,
	index: HashMap<EffectId, usize>,
	ingredients: Vec<Ingredient>,
	edges: Vec<Edge>,
}

impl EffectGraph {
	/// Parses a dataset document and builds the graph.
	pub fn from_json(
		json: &str,
		palette: &ColorPalette,
		strict_edges: bool,
	) -> Result<Self, LoadError> {
		let raw: RawDataset = serde_json::from_str(json)?;
		Self::from_raw(raw, palette, strict_edges)
	}

	/// Builds the graph from already parsed records.
	///
	/// With `strict_edges`, a transformation naming an effect missing from
	/// `effectlist` is an error. Otherwise it is kept and logged.
	pub fn from_raw(
		raw: RawDataset,
		palette: &ColorPalette,
		strict_edges: bool,
	) -> Result<Self, LoadError> {
		let mut effects = Vec::with_capacity(raw.effects.len());
		let mut index = HashMap::with_capacity(raw.effects.len());

		for (i, (key, label)) in raw.effects.into_iter().enumerate() {
			let id: EffectId = key
				.trim()
				.parse()
				.map_err(|_| LoadError::InvalidEffectId(key.clone()))?;
			if index.insert(id, i).is_some() {
				return Err(LoadError::DuplicateEffect(id));
			}
			effects.push(Effect {
				id,
				label,
				color: palette.hex_for(i),
			});
		}

		let mut ingredients = Vec::with_capacity(raw.ingredients.len());
		let mut edges = Vec::new();
		let mut seen_names = HashSet::new();

		for ing in raw.ingredients {
			if !seen_names.insert(ing.name.clone()) {
				warn!(
					"effect-graph: duplicate ingredient {:?}, only the first is selectable",
					ing.name
				);
			}

			let mut pairs = ing.effects.into_iter().map(Edge::from);
			let base = pairs.next();
			let transformations: Vec<Edge> = pairs.collect();

			for edge in &transformations {
				for effect in [edge.source, edge.target] {
					if index.contains_key(&effect) {
						continue;
					}
					if strict_edges {
						return Err(LoadError::UnknownEffect {
							ingredient: ing.name,
							effect,
						});
					}
					warn!(
						"effect-graph: ingredient {:?} references unknown effect {}",
						ing.name, effect
					);
				}
			}

			edges.extend_from_slice(&transformations);
			ingredients.push(Ingredient {
				name: ing.name,
				base,
				transformations,
			});
		}

		info!(
			"effect-graph: loaded {} effects, {} ingredients, {} edges",
			effects.len(),
			ingredients.len(),
			edges.len()
		);

		Ok(Self {
			effects,
			index,
			ingredients,
			edges,
		})
	}

	/// Effects in load order.
	pub fn effects(&self) -> &[Effect] {
		&self.effects
	}

	/// Effect ids in load order.
	pub fn effect_ids(&self) -> impl Iterator<Item = EffectId> + '_ {
		self.effects.iter().map(|e| e.id)
	}

	/// Looks up an effect by id.
	pub fn effect(&self, id: EffectId) -> Option<&Effect> {
		self.index.get(&id).map(|&i| &self.effects[i])
	}

	/// Whether `id` names a known effect.
	pub fn contains(&self, id: EffectId) -> bool {
		self.index.contains_key(&id)
	}

	/// Ingredients in load order, duplicates included.
	pub fn ingredients(&self) -> &[Ingredient] {
		&self.ingredients
	}

	/// First ingredient with exactly this name.
	pub fn ingredient(&self, name: &str) -> Option<&Ingredient> {
		self.ingredients.iter().find(|ing| ing.name == name)
	}

	/// Every transformation of every ingredient, duplicates included, in
	/// ingredient order.
	pub fn edges(&self) -> &[Edge] {
		&self.edges
	}

	/// Assigned color of effect `id`, if it exists.
	pub fn color_of(&self, id: EffectId) -> Option<&str> {
		self.effect(id).map(|e| e.color.as_str())
	}

	/// Node fill color, [`DEFAULT_NODE_COLOR`] for unknown ids.
	pub fn node_color(&self, id: EffectId) -> &str {
		self.color_of(id).unwrap_or(DEFAULT_NODE_COLOR)
	}

	/// Edges take the color of their source node, [`DEFAULT_EDGE_COLOR`] when
	/// the source is unknown.
	pub fn edge_color(&self, edge: &Edge) -> &str {
		self.color_of(edge.source).unwrap_or(DEFAULT_EDGE_COLOR)
	}
}
