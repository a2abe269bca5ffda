//! Effect transformation graph: model, layout, highlighting and canvas view.
//!
//! The engine is target independent:
//! - [`EffectGraph`] holds effects, ingredients and the derived edges,
//!   with colors assigned from a [`ColorPalette`] at load time
//! - [`GraphLayout`] puts every effect on a circle
//! - [`highlight`] turns a [`Selection`] into node and edge opacities under a
//!   [`HighlightPolicy`]
//! - [`GraphScene`] combines the above into a [`RenderGraph`] per selection
//!
//! [`EffectGraphCanvas`] draws a render graph on an HTML canvas.
//!
//! # Example
//!
//! ```ignore
//! use effect_graph::{GraphScene, Selection, ViewerConfig};
//!
//! let scene = GraphScene::load(json, &ViewerConfig::default())?;
//! let frame = scene.render_graph(&Selection::from_choice("Cuke"));
//! for node in &frame.nodes {
//!     println!("{} at ({}, {}) opacity {}", node.label, node.x, node.y, node.opacity);
//! }
//! ```

mod component;
pub mod highlight;
pub mod layout;
pub mod model;
pub mod palette;
mod render;
pub mod scale;
pub mod scene;
mod state;
pub mod theme;
mod types;

pub use component::EffectGraphCanvas;
pub use highlight::{
	DEFAULT_FADED_OPACITY, EdgeState, FULL_OPACITY, Highlight, HighlightPolicy, NO_SELECTION,
	Selection, highlight,
};
pub use layout::{DEFAULT_RADIUS, GraphLayout};
pub use model::{Edge, Effect, EffectGraph, Ingredient};
pub use palette::{ColorPalette, DEFAULT_EDGE_COLOR, DEFAULT_NODE_COLOR, PaletteKind};
pub use scene::{GraphScene, RenderEdge, RenderGraph, RenderNode};
pub use theme::{ArrowStyle, Color, RenderStyle};
pub use types::{EffectId, RawDataset, RawIngredient};
