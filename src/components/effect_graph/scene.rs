//! Static scene and per-selection renderer output.
//!
//! A [`GraphScene`] bundles everything computed once at load time: the graph
//! (with its colors), the layout and the highlighting settings. Each render
//! cycle turns it into a [`RenderGraph`] for the current selection.

use serde::Serialize;

use super::highlight::{Highlight, HighlightPolicy, Selection, highlight};
use super::layout::GraphLayout;
use super::model::EffectGraph;
use super::palette::ColorPalette;
use super::types::EffectId;
use crate::config::ViewerConfig;
use crate::error::LoadError;

/// A node as handed to the renderer.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RenderNode {
	/// Effect id.
	pub id: EffectId,
	/// Effect label.
	pub label: String,
	/// Layout x.
	pub x: f64,
	/// Layout y.
	pub y: f64,
	/// Fill color as `#RRGGBB`.
	pub color: String,
	/// Alpha for this frame.
	pub opacity: f64,
}

/// An edge as handed to the renderer.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RenderEdge {
	/// Source effect id.
	pub source: EffectId,
	/// Target effect id.
	pub target: EffectId,
	/// Color of the source node.
	pub color: String,
	/// Alpha for this frame.
	pub opacity: f64,
	/// Drawn thicker when set.
	pub highlighted: bool,
}

/// Everything the renderer draws for one selection.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct RenderGraph {
	/// One entry per effect, in load order.
	pub nodes: Vec<RenderNode>,
	/// One entry per graph edge, duplicates kept.
	pub edges: Vec<RenderEdge>,
}

impl RenderGraph {
	/// Combines static attributes (label, position, color) with the
	/// selection-dependent opacities.
	pub fn build(graph: &EffectGraph, layout: &GraphLayout, highlight: &Highlight) -> Self {
		let nodes = graph
			.effects()
			.iter()
			.map(|effect| {
				let (x, y) = layout.position_or_center(effect.id);
				RenderNode {
					id: effect.id,
					label: effect.label.clone(),
					x,
					y,
					color: graph.node_color(effect.id).to_string(),
					opacity: highlight.node_opacity(effect.id),
				}
			})
			.collect();

		let edges = graph
			.edges()
			.iter()
			.enumerate()
			.map(|(i, edge)| {
				let state = highlight.edges.get(i);
				RenderEdge {
					source: edge.source,
					target: edge.target,
					color: graph.edge_color(edge).to_string(),
					opacity: highlight.edge_opacity(i),
					highlighted: state.is_some_and(|s| s.highlighted),
				}
			})
			.collect();

		Self { nodes, edges }
	}

	/// Finds the node for effect `id`.
	pub fn node(&self, id: EffectId) -> Option<&RenderNode> {
		self.nodes.iter().find(|n| n.id == id)
	}
}

/// Load-time state shared by every render cycle.
#[derive(Clone, Debug)]
pub struct GraphScene {
	/// Loaded effects and ingredients.
	pub graph: EffectGraph,
	/// Fixed node positions.
	pub layout: GraphLayout,
	/// Active highlight policy.
	pub policy: HighlightPolicy,
	/// Opacity for irrelevant elements.
	pub faded_opacity: f64,
}

impl GraphScene {
	/// Lays out `graph` using the settings in `config`.
	pub fn new(graph: EffectGraph, config: &ViewerConfig) -> Self {
		let layout = GraphLayout::circular(graph.effect_ids(), config.radius);
		Self {
			graph,
			layout,
			policy: config.policy,
			faded_opacity: config.faded_opacity,
		}
	}

	/// Parses the dataset document and lays it out according to `config`.
	pub fn load(json: &str, config: &ViewerConfig) -> Result<Self, LoadError> {
		let palette = ColorPalette::from_kind(&config.palette);
		let graph = EffectGraph::from_json(json, &palette, config.strict_edges)?;
		Ok(Self::new(graph, config))
	}

	/// Opacities for `selection`.
	pub fn highlight(&self, selection: &Selection) -> Highlight {
		highlight(&self.graph, selection, self.policy, self.faded_opacity)
	}

	/// Full renderer input for `selection`.
	pub fn render_graph(&self, selection: &Selection) -> RenderGraph {
		RenderGraph::build(&self.graph, &self.layout, &self.highlight(selection))
	}

	/// Selector entries in load order.
	pub fn ingredient_names(&self) -> Vec<String> {
		self.graph
			.ingredients()
			.iter()
			.map(|ing| ing.name.clone())
			.collect()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::effect_graph::palette::{DEFAULT_EDGE_COLOR, DEFAULT_NODE_COLOR};

	const DATA: &str = r#"{
		"ingredientsList": [
			{ "name": "Mix", "effects": [[0, 0], [1, 2], [2, 3]] },
			{ "name": "Stray", "effects": [[0, 0], [8, 1]] }
		],
		"effectlist": { "1": "Calming", "2": "Sneaky", "3": "Energizing", "4": "Toxic" }
	}"#;

	fn scene() -> GraphScene {
		GraphScene::load(DATA, &ViewerConfig::default()).unwrap()
	}

	#[test]
	fn nodes_carry_layout_and_color() {
		let scene = scene();
		let out = scene.render_graph(&Selection::None);
		assert_eq!(out.nodes.len(), 4);

		let calming = out.node(1).unwrap();
		assert_eq!(calming.label, "Calming");
		assert_eq!((calming.x, calming.y), (600.0, 0.0));
		assert_eq!(calming.color, "#FF0000");
		assert_eq!(calming.opacity, 1.0);
	}

	#[test]
	fn edges_take_source_color() {
		let scene = scene();
		let out = scene.render_graph(&Selection::None);
		assert_eq!(out.edges.len(), 3);
		assert_eq!(out.edges[0].color, out.node(1).unwrap().color);
		assert_eq!(out.edges[1].color, out.node(2).unwrap().color);
		// Source 8 is not an effect.
		assert_eq!(out.edges[2].color, DEFAULT_EDGE_COLOR);
		assert_ne!(out.edges[2].color, DEFAULT_NODE_COLOR);
	}

	#[test]
	fn selection_changes_only_opacity() {
		let scene = scene();
		let none = scene.render_graph(&Selection::None);
		let mix = scene.render_graph(&Selection::Ingredient("Mix".into()));

		for (a, b) in none.nodes.iter().zip(&mix.nodes) {
			assert_eq!((a.id, a.x, a.y, &a.color), (b.id, b.x, b.y, &b.color));
		}
		assert_eq!(mix.node(4).unwrap().opacity, 0.5);
		assert!(mix.edges[0].highlighted);
		assert_eq!(mix.edges[2].opacity, 0.5);
	}

	#[test]
	fn loading_twice_is_deterministic() {
		let a = scene().render_graph(&Selection::None);
		let b = scene().render_graph(&Selection::None);
		assert_eq!(a, b);
	}

	#[test]
	fn empty_dataset_renders_nothing() {
		let scene = GraphScene::load(
			r#"{ "ingredientsList": [], "effectlist": {} }"#,
			&ViewerConfig::default(),
		)
		.unwrap();
		assert!(scene.layout.is_empty());
		assert_eq!(scene.render_graph(&Selection::None), RenderGraph::default());
	}

	#[test]
	fn output_serializes_for_external_renderers() {
		let out = scene().render_graph(&Selection::None);
		let value = serde_json::to_value(&out).unwrap();
		assert_eq!(value["nodes"][0]["label"], "Calming");
		assert_eq!(value["edges"][0]["source"], 1);
		assert_eq!(value["edges"][0]["target"], 2);
	}

	#[test]
	fn ingredient_names_keep_load_order() {
		assert_eq!(scene().ingredient_names(), vec!["Mix", "Stray"]);
	}
}
