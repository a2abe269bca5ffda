//! End-to-end checks from a dataset document to renderer output.

use effect_graph::components::effect_graph::{Edge, FULL_OPACITY, PaletteKind};
use effect_graph::{ColorPalette, GraphScene, HighlightPolicy, LoadError, Selection, ViewerConfig};

const DATA: &str = include_str!("fixtures/effects.json");

fn config(policy: HighlightPolicy) -> ViewerConfig {
	ViewerConfig {
		policy,
		..ViewerConfig::default()
	}
}

fn edge_opacity(frame: &effect_graph::RenderGraph, source: i64, target: i64) -> f64 {
	frame
		.edges
		.iter()
		.find(|e| e.source == source && e.target == target)
		.map(|e| e.opacity)
		.unwrap()
}

#[test]
fn derived_edges_skip_base_and_keep_duplicates() {
	let scene = GraphScene::load(DATA, &ViewerConfig::default()).unwrap();
	assert_eq!(
		scene.graph.edges(),
		&[
			Edge::new(1, 2),
			Edge::new(2, 3),
			Edge::new(1, 2),
			Edge::new(5, 6),
			Edge::new(2, 7),
		]
	);
}

#[test]
fn layout_and_colors_follow_effectlist_order() {
	let scene = GraphScene::load(DATA, &ViewerConfig::default()).unwrap();
	let frame = scene.render_graph(&Selection::None);
	let palette = ColorPalette::generate(34);

	let ids: Vec<i64> = frame.nodes.iter().map(|n| n.id).collect();
	assert_eq!(ids, vec![10, 1, 2, 3, 4, 5, 6, 7, 11, 12, 13]);
	for (i, node) in frame.nodes.iter().enumerate() {
		assert_eq!(node.color, palette[i]);
		let r = (node.x * node.x + node.y * node.y).sqrt();
		assert!((r - 600.0).abs() < 1e-6);
	}
	assert_eq!((frame.nodes[0].x, frame.nodes[0].y), (600.0, 0.0));
}

#[test]
fn reloading_is_deterministic() {
	let first = GraphScene::load(DATA, &ViewerConfig::default()).unwrap();
	let second = GraphScene::load(DATA, &ViewerConfig::default()).unwrap();
	assert_eq!(
		first.render_graph(&Selection::None),
		second.render_graph(&Selection::None)
	);
}

#[test]
fn both_direction_selection() {
	let scene = GraphScene::load(DATA, &config(HighlightPolicy::BothDirection)).unwrap();
	let frame = scene.render_graph(&Selection::from_choice("Cuke"));

	for id in [1, 2, 3] {
		assert_eq!(frame.node(id).unwrap().opacity, FULL_OPACITY);
	}
	for id in [4, 5, 6, 7, 10] {
		assert_eq!(frame.node(id).unwrap().opacity, 0.5);
	}
	assert_eq!(edge_opacity(&frame, 1, 2), FULL_OPACITY);
	assert_eq!(edge_opacity(&frame, 5, 6), 0.5);
	assert_eq!(edge_opacity(&frame, 2, 7), 0.5);
}

#[test]
fn outgoing_only_selection() {
	let scene = GraphScene::load(DATA, &config(HighlightPolicy::OutgoingOnly)).unwrap();
	let frame = scene.render_graph(&Selection::from_choice("Cuke"));

	let own = frame.edges.iter().find(|e| e.source == 1).unwrap();
	assert!(own.highlighted);
	// 2 -> 7 is Donut's, but node 2 is relevant.
	let donut = frame.edges.iter().find(|e| e.source == 2 && e.target == 7).unwrap();
	assert!(!donut.highlighted);
	assert_eq!(donut.opacity, FULL_OPACITY);
	assert_eq!(edge_opacity(&frame, 5, 6), 0.5);
}

#[test]
fn unmatched_or_empty_selection_matches_none() {
	for policy in [HighlightPolicy::BothDirection, HighlightPolicy::OutgoingOnly] {
		let scene = GraphScene::load(DATA, &config(policy)).unwrap();
		let none = scene.render_graph(&Selection::from_choice("None"));
		assert_eq!(scene.render_graph(&Selection::from_choice("Mega Bean")), none);
		assert_eq!(scene.render_graph(&Selection::from_choice("Flu Medicine")), none);
		assert!(none.nodes.iter().all(|n| n.opacity == FULL_OPACITY));
	}
}

#[test]
fn no_selection_edge_opacity_per_policy() {
	let both = GraphScene::load(DATA, &config(HighlightPolicy::BothDirection)).unwrap();
	let frame = both.render_graph(&Selection::None);
	assert!(frame.edges.iter().all(|e| e.opacity == FULL_OPACITY));

	// Outgoing-only edges follow their source, and nothing is relevant.
	let outgoing = GraphScene::load(DATA, &config(HighlightPolicy::OutgoingOnly)).unwrap();
	let frame = outgoing.render_graph(&Selection::None);
	let opacities: Vec<f64> = frame.edges.iter().map(|e| e.opacity).collect();
	assert_eq!(opacities, vec![0.5; 5]);
	assert!(frame.nodes.iter().all(|n| n.opacity == FULL_OPACITY));
}

#[test]
fn classic_palette_from_config() {
	let config = ViewerConfig {
		palette: PaletteKind::Classic,
		..ViewerConfig::default()
	};
	let scene = GraphScene::load(DATA, &config).unwrap();
	assert_eq!(scene.graph.color_of(10), Some("#E6194B"));
	assert_eq!(scene.graph.color_of(1), Some("#3CB44B"));
}

#[test]
fn missing_field_is_fatal() {
	let err = GraphScene::load(r#"{ "effectlist": {} }"#, &ViewerConfig::default()).unwrap_err();
	assert!(matches!(err, LoadError::Json(_)));
	assert!(err.to_string().contains("ingredientsList"));
}
