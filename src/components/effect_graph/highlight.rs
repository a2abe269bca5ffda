//! Selection-driven highlighting.
//!
//! Given the current [`Selection`], every node and every edge is either fully
//! opaque or drawn at the faded opacity. Two policies decide which elements
//! count as relevant:
//!
//! - [`HighlightPolicy::BothDirection`]: a node is relevant when the selected
//!   ingredient uses it as a source or a target; an edge is opaque only when
//!   it is literally one of the ingredient's transformations.
//! - [`HighlightPolicy::OutgoingOnly`]: nodes as above, but only edges leaving
//!   one of the ingredient's sources are highlighted. Any other edge takes the
//!   faded opacity unless its source node is relevant, so edges out of a
//!   relevant node stay opaque even when they belong to a different
//!   ingredient. With nothing relevant every edge is faded while nodes stay
//!   opaque.
//!
//! Highlighting is a pure function of the graph and the selection.

use std::collections::{HashMap, HashSet};

use serde::Deserialize;

use super::model::{Edge, EffectGraph};
use super::types::EffectId;

/// Opacity of relevant elements.
pub const FULL_OPACITY: f64 = 1.0;

/// Default opacity of irrelevant elements.
pub const DEFAULT_FADED_OPACITY: f64 = 0.5;

/// Sentinel choice meaning "no ingredient selected".
pub const NO_SELECTION: &str = "None";

/// The user's current choice.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Selection {
	/// Nothing selected.
	#[default]
	None,
	/// An ingredient chosen by name. Unknown names behave like `None`.
	Ingredient(String),
}

impl Selection {
	/// Maps a selector choice to a selection; [`NO_SELECTION`] means none.
	pub fn from_choice(choice: &str) -> Self {
		if choice == NO_SELECTION {
			Self::None
		} else {
			Self::Ingredient(choice.to_string())
		}
	}

	/// Name of the chosen ingredient, if any.
	pub fn ingredient(&self) -> Option<&str> {
		match self {
			Self::None => None,
			Self::Ingredient(name) => Some(name),
		}
	}
}

/// Which elements a selection makes relevant.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HighlightPolicy {
	/// Sources and targets are relevant; edges match by exact pair.
	BothDirection,
	/// Sources and targets are relevant; only outgoing edges are highlighted,
	/// other edges follow their source node.
	#[default]
	OutgoingOnly,
}

/// Display state of one edge.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EdgeState {
	/// Alpha applied when drawing the edge.
	pub opacity: f64,
	/// True when the edge is one of the selected ingredient's own
	/// transformations under the active policy.
	pub highlighted: bool,
}

/// Output of [`highlight`]: per-node opacities and one state per edge of
/// [`EffectGraph::edges`], in the same order.
#[derive(Clone, Debug, PartialEq)]
pub struct Highlight {
	/// Opacity of every effect node.
	pub node_opacity: HashMap<EffectId, f64>,
	/// Index-aligned with [`EffectGraph::edges`].
	pub edges: Vec<EdgeState>,
}

impl Highlight {
	/// Opacity of node `id`, full when unknown.
	pub fn node_opacity(&self, id: EffectId) -> f64 {
		self.node_opacity.get(&id).copied().unwrap_or(FULL_OPACITY)
	}

	/// Opacity of the edge at `index`, full when out of range.
	pub fn edge_opacity(&self, index: usize) -> f64 {
		self.edges
			.get(index)
			.map(|e| e.opacity)
			.unwrap_or(FULL_OPACITY)
	}
}

/// Sources, targets and pairs of the selected ingredient.
#[derive(Debug, Default)]
struct Relevance {
	/// Whether the selection resolved to an ingredient.
	active: bool,
	sources: HashSet<EffectId>,
	targets: HashSet<EffectId>,
	pairs: HashSet<Edge>,
}

impl Relevance {
	fn resolve(graph: &EffectGraph, selection: &Selection) -> Self {
		let Some(ingredient) = selection.ingredient().and_then(|name| graph.ingredient(name))
		else {
			return Self::default();
		};

		let mut relevance = Self {
			active: true,
			..Self::default()
		};
		for edge in &ingredient.transformations {
			relevance.sources.insert(edge.source);
			relevance.targets.insert(edge.target);
			relevance.pairs.insert(*edge);
		}
		relevance
	}

	fn touches(&self, id: EffectId) -> bool {
		self.sources.contains(&id) || self.targets.contains(&id)
	}

	fn is_empty(&self) -> bool {
		self.sources.is_empty() && self.targets.is_empty()
	}
}

/// Computes node and edge opacities for `selection` under `policy`.
///
/// A selection naming no known ingredient behaves like [`Selection::None`].
pub fn highlight(
	graph: &EffectGraph,
	selection: &Selection,
	policy: HighlightPolicy,
	faded: f64,
) -> Highlight {
	let relevance = Relevance::resolve(graph, selection);

	// Both policies agree on nodes: everything is opaque until the selection
	// touches at least one effect.
	let node_opacity: HashMap<EffectId, f64> = graph
		.effect_ids()
		.map(|id| {
			let opacity = if relevance.is_empty() || relevance.touches(id) {
				FULL_OPACITY
			} else {
				faded
			};
			(id, opacity)
		})
		.collect();

	let edges = graph
		.edges()
		.iter()
		.map(|edge| match policy {
			HighlightPolicy::BothDirection => both_direction_edge(&relevance, edge, faded),
			HighlightPolicy::OutgoingOnly => outgoing_only_edge(&relevance, edge, faded),
		})
		.collect();

	Highlight {
		node_opacity,
		edges,
	}
}

fn both_direction_edge(relevance: &Relevance, edge: &Edge, faded: f64) -> EdgeState {
	if relevance.pairs.is_empty() {
		return EdgeState {
			opacity: FULL_OPACITY,
			highlighted: false,
		};
	}
	let highlighted = relevance.pairs.contains(edge);
	EdgeState {
		opacity: if highlighted { FULL_OPACITY } else { faded },
		highlighted,
	}
}

fn outgoing_only_edge(relevance: &Relevance, edge: &Edge, faded: f64) -> EdgeState {
	let source_relevant = relevance.touches(edge.source);
	let highlighted = relevance.active
		&& source_relevant
		&& relevance.sources.contains(&edge.source)
		&& relevance.pairs.contains(edge);

	let mut opacity = if highlighted {
		FULL_OPACITY
	} else if !relevance.is_empty() {
		faded
	} else {
		FULL_OPACITY
	};

	// Non-highlighted edges follow their source, so with nothing relevant
	// every edge ends up faded.
	if !highlighted {
		opacity = if source_relevant {
			FULL_OPACITY
		} else {
			faded
		};
	}

	EdgeState {
		opacity,
		highlighted,
	}
}
