//! Viewer configuration.
//!
//! Read from an optional JSON document embedded in the page. Every field has
//! a default, so an absent or partial document is fine.

use serde::Deserialize;

use crate::components::effect_graph::{
	DEFAULT_FADED_OPACITY, DEFAULT_RADIUS, HighlightPolicy, PaletteKind, RenderStyle,
};

/// Settings that shape loading, highlighting and drawing.
#[derive(Debug, Clone, Deserialize)]
pub struct ViewerConfig {
	/// Radius of the layout circle in world units.
	#[serde(default = "default_radius")]
	pub radius: f64,

	/// Opacity of elements the selection does not make relevant.
	#[serde(default = "default_faded_opacity")]
	pub faded_opacity: f64,

	/// Which highlight policy the selector drives.
	#[serde(default)]
	pub policy: HighlightPolicy,

	/// Node color palette.
	#[serde(default)]
	pub palette: PaletteKind,

	/// Accent used for the selected ingredient caption.
	#[serde(default = "default_highlight_color")]
	pub highlight_color: String,

	/// Reject edges whose endpoints are missing from `effectlist`.
	#[serde(default)]
	pub strict_edges: bool,

	/// Static canvas styling.
	#[serde(default)]
	pub style: RenderStyle,
}

impl Default for ViewerConfig {
	fn default() -> Self {
		Self {
			radius: default_radius(),
			faded_opacity: default_faded_opacity(),
			policy: HighlightPolicy::default(),
			palette: PaletteKind::default(),
			highlight_color: default_highlight_color(),
			strict_edges: false,
			style: RenderStyle::default(),
		}
	}
}

fn default_radius() -> f64 {
	DEFAULT_RADIUS
}

fn default_faded_opacity() -> f64 {
	DEFAULT_FADED_OPACITY
}

fn default_highlight_color() -> String {
	"#FF5733".to_string()
}

impl ViewerConfig {
	/// Parses a configuration document, filling gaps with defaults.
	pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
		serde_json::from_str(json)
	}
}
