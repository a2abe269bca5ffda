//! Zoom-dependent sizes for nodes, labels, edges and arrows.
//!
//! Layout positions are in world units (the circle radius is 600 by default),
//! while some visuals should keep a readable size on screen whatever the zoom
//! level `k` is. Each size declares how it reacts to `k`.

/// How a size reacts to the zoom level.
#[derive(Clone, Debug)]
pub enum ScaleBehavior {
	/// Constant world-space size. Appears larger when zoomed in.
	World,
	/// Constant screen-space size in pixels.
	Screen,
	/// World-space size, clamped to `[min_screen, max_screen]` pixels.
	Clamped {
		/// Smallest on-screen size in pixels.
		min_screen: f64,
		/// Largest on-screen size in pixels.
		max_screen: f64,
	},
}

impl ScaleBehavior {
	/// World-space value to draw with once the canvas transform is applied.
	pub fn apply(&self, base: f64, k: f64) -> f64 {
		match self {
			ScaleBehavior::World => base,
			ScaleBehavior::Screen => base / k,
			ScaleBehavior::Clamped {
				min_screen,
				max_screen,
			} => base.clamp(min_screen / k, max_screen / k),
		}
	}
}

/// Base sizes and their scaling behaviors.
#[derive(Clone, Debug)]
pub struct ScaleConfig {
	/// Node radius in world units.
	pub node_radius: f64,
	/// How node radius reacts to zoom.
	pub node_behavior: ScaleBehavior,
	/// Label font size in screen pixels.
	pub label_size: f64,
	/// Labels stop growing below this zoom level.
	pub label_min_k: f64,
	/// Edge width in screen pixels.
	pub edge_width: f64,
	/// Arrow head length in world units.
	pub arrow_size: f64,
	/// How arrowheads react to zoom.
	pub arrow_behavior: ScaleBehavior,
}

impl Default for ScaleConfig {
	fn default() -> Self {
		Self {
			node_radius: 16.0,
			node_behavior: ScaleBehavior::Clamped {
				min_screen: 4.0,
				max_screen: f64::INFINITY,
			},
			label_size: 12.0,
			label_min_k: 0.5,
			edge_width: 1.5,
			arrow_size: 10.0,
			arrow_behavior: ScaleBehavior::Clamped {
				min_screen: 4.0,
				max_screen: 18.0,
			},
		}
	}
}

/// Sizes resolved for one zoom level, all in world units.
#[derive(Clone, Debug)]
pub struct ScaledValues {
	/// Node radius in world units.
	pub node_radius: f64,
	/// Canvas font string, e.g. `"12px sans-serif"`.
	pub label_font: String,
	/// Edge line width in world units.
	pub edge_width: f64,
	/// Arrowhead length in world units.
	pub arrow_size: f64,
}

impl ScaledValues {
	/// Resolves every size for zoom factor `k`.
	pub fn new(config: &ScaleConfig, k: f64) -> Self {
		let label_px = config.label_size / k.max(config.label_min_k);
		Self {
			node_radius: config.node_behavior.apply(config.node_radius, k),
			label_font: format!("{}px sans-serif", label_px),
			edge_width: config.edge_width / k,
			arrow_size: config.arrow_behavior.apply(config.arrow_size, k),
		}
	}
}
