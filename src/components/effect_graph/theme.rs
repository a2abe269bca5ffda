//! Colors and static styling for the effect graph.
//!
//! Everything in here is fixed configuration handed to the renderer; nothing
//! depends on the current selection.

use serde::Deserialize;

/// RGBA color representation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
	/// Red.
	pub r: u8,
	/// Green.
	pub g: u8,
	/// Blue.
	pub b: u8,
	/// Alpha, 0.0 to 1.0.
	pub a: f64,
}

impl Color {
	/// Opaque color from components.
	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b, a: 1.0 }
	}

	/// Same color with alpha `a`.
	pub fn with_alpha(self, a: f64) -> Self {
		Self { a, ..self }
	}

	/// Standard HSV to RGB conversion with all components in `[0, 1]`.
	///
	/// Channels are scaled to `[0, 255]` by truncation, so `(0.25, 1, 1)`
	/// yields `#7FFF00` rather than `#80FF00`.
	pub fn from_hsv(h: f64, s: f64, v: f64) -> Self {
		let (r, g, b) = if s == 0.0 {
			(v, v, v)
		} else {
			let sector = (h * 6.0).floor();
			let f = h * 6.0 - sector;
			let p = v * (1.0 - s);
			let q = v * (1.0 - s * f);
			let t = v * (1.0 - s * (1.0 - f));
			match (sector as i64).rem_euclid(6) {
				0 => (v, t, p),
				1 => (q, v, p),
				2 => (p, v, t),
				3 => (p, q, v),
				4 => (t, p, v),
				_ => (v, p, q),
			}
		};
		Self::rgb(
			(r * 255.0) as u8,
			(g * 255.0) as u8,
			(b * 255.0) as u8,
		)
	}

	/// Parses `#RRGGBB` (either case). Anything else yields `None`.
	pub fn from_hex(hex: &str) -> Option<Self> {
		let digits = hex.strip_prefix('#')?;
		if digits.len() != 6 || !digits.is_ascii() {
			return None;
		}
		let r = u8::from_str_radix(&digits[0..2], 16).ok()?;
		let g = u8::from_str_radix(&digits[2..4], 16).ok()?;
		let b = u8::from_str_radix(&digits[4..6], 16).ok()?;
		Some(Self::rgb(r, g, b))
	}

	/// Uppercase `#RRGGBB`, alpha ignored.
	pub fn to_hex(self) -> String {
		format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
	}

	/// CSS `rgba(..)` string.
	pub fn to_css(self) -> String {
		if (self.a - 1.0).abs() < 0.001 {
			self.to_hex()
		} else {
			format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
		}
	}
}

/// Where arrow heads are drawn on directed edges.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArrowStyle {
	/// Arrow head at the target end.
	#[default]
	To,
	/// Plain lines.
	None,
}

/// Static styling constants passed to the renderer with every frame.
#[derive(Clone, Debug, Deserialize)]
pub struct RenderStyle {
	/// Canvas height in pixels. Width always follows the parent element.
	#[serde(default = "default_canvas_height")]
	pub canvas_height: f64,

	/// Canvas fill color.
	#[serde(default = "default_background")]
	pub background: String,

	/// Label color.
	#[serde(default = "default_font_color")]
	pub font_color: String,

	/// Whether edges end in an arrowhead.
	#[serde(default)]
	pub arrows: ArrowStyle,

	/// Bezier roundness of edges (0.0 = straight).
	#[serde(default = "default_edge_roundness")]
	pub edge_roundness: f64,
}

impl Default for RenderStyle {
	fn default() -> Self {
		Self {
			canvas_height: default_canvas_height(),
			background: default_background(),
			font_color: default_font_color(),
			arrows: ArrowStyle::default(),
			edge_roundness: default_edge_roundness(),
		}
	}
}

fn default_canvas_height() -> f64 {
	800.0
}

fn default_background() -> String {
	"#000000".to_string()
}

fn default_font_color() -> String {
	"white".to_string()
}

fn default_edge_roundness() -> f64 {
	0.5
}
