//! Deterministic node color palettes.
//!
//! The default palette walks the hue circle in equal steps at full saturation
//! and brightness. The classic palette is the fixed hand-picked set used
//! before that. Both cycle once there are more effects than colors.

use serde::Deserialize;

use super::theme::Color;

/// Color of a node whose effect has no palette entry.
pub const DEFAULT_NODE_COLOR: &str = "#3498db";

/// Color of an edge whose source effect has no palette entry.
pub const DEFAULT_EDGE_COLOR: &str = "#aaaaaa";

/// Number of rainbow colors generated when no size is configured.
pub const DEFAULT_RAINBOW_SIZE: usize = 34;

const CLASSIC: [Color; 21] = [
	Color::rgb(0xe6, 0x19, 0x4b),
	Color::rgb(0x3c, 0xb4, 0x4b),
	Color::rgb(0xff, 0xe1, 0x19),
	Color::rgb(0x43, 0x63, 0xd8),
	Color::rgb(0xf5, 0x82, 0x31),
	Color::rgb(0x91, 0x1e, 0xb4),
	Color::rgb(0x46, 0xf0, 0xf0),
	Color::rgb(0xf0, 0x32, 0xe6),
	Color::rgb(0xbc, 0xf6, 0x0c),
	Color::rgb(0xfa, 0xbe, 0xbe),
	Color::rgb(0x00, 0x80, 0x80),
	Color::rgb(0xe6, 0xbe, 0xff),
	Color::rgb(0x9a, 0x63, 0x24),
	Color::rgb(0xff, 0xfa, 0xc8),
	Color::rgb(0x80, 0x00, 0x00),
	Color::rgb(0xaa, 0xff, 0xc3),
	Color::rgb(0x80, 0x80, 0x00),
	Color::rgb(0xff, 0xd8, 0xb1),
	Color::rgb(0x00, 0x00, 0x75),
	Color::rgb(0x80, 0x80, 0x80),
	Color::rgb(0xff, 0xff, 0xff),
];

/// Which palette to build, as read from the viewer configuration.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PaletteKind {
	/// `size` evenly spaced hues.
	Rainbow {
		/// Number of hues before the palette cycles.
		#[serde(default = "default_rainbow_size")]
		size: usize,
	},
	/// The fixed 21-color palette.
	Classic,
}

impl Default for PaletteKind {
	fn default() -> Self {
		Self::Rainbow {
			size: DEFAULT_RAINBOW_SIZE,
		}
	}
}

fn default_rainbow_size() -> usize {
	DEFAULT_RAINBOW_SIZE
}

/// An ordered list of node colors.
#[derive(Clone, Debug, PartialEq)]
pub struct ColorPalette {
	colors: Vec<Color>,
}

impl ColorPalette {
	/// `n` colors with hue `i / n`, saturation and value fixed at 1.0.
	pub fn rainbow(n: usize) -> Self {
		let colors = (0..n)
			.map(|i| Color::from_hsv(i as f64 / n as f64, 1.0, 1.0))
			.collect();
		Self { colors }
	}

	/// The fixed 21-color palette.
	pub fn classic() -> Self {
		Self {
			colors: CLASSIC.to_vec(),
		}
	}

	/// Builds the palette named by configuration.
	pub fn from_kind(kind: &PaletteKind) -> Self {
		match kind {
			PaletteKind::Rainbow { size } => Self::rainbow(*size),
			PaletteKind::Classic => Self::classic(),
		}
	}

	/// `n` rainbow colors formatted as uppercase `#RRGGBB`.
	pub fn generate(n: usize) -> Vec<String> {
		Self::rainbow(n).colors.into_iter().map(Color::to_hex).collect()
	}

	/// Number of distinct colors before cycling.
	pub fn len(&self) -> usize {
		self.colors.len()
	}

	/// True for a zero-sized palette.
	pub fn is_empty(&self) -> bool {
		self.colors.is_empty()
	}

	/// Color for the `index`-th effect, wrapping around the palette.
	/// An empty palette has no colors to hand out.
	pub fn get(&self, index: usize) -> Option<Color> {
		if self.colors.is_empty() {
			return None;
		}
		Some(self.colors[index % self.colors.len()])
	}

	/// Hex color for the `index`-th effect, falling back to
	/// [`DEFAULT_NODE_COLOR`] when the palette is empty.
	pub fn hex_for(&self, index: usize) -> String {
		self.get(index)
			.map(Color::to_hex)
			.unwrap_or_else(|| DEFAULT_NODE_COLOR.to_string())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn is_upper_hex(color: &str) -> bool {
		color.len() == 7
			&& color.starts_with('#')
			&& color[1..]
				.chars()
				.all(|c| c.is_ascii_digit() || ('A'..='F').contains(&c))
	}

	#[test]
	fn generate_returns_n_well_formed_colors() {
		for n in [1, 2, 7, 21, 34, 100] {
			let colors = ColorPalette::generate(n);
			assert_eq!(colors.len(), n);
			assert!(colors.iter().all(|c| is_upper_hex(c)), "{colors:?}");
		}
	}

	#[test]
	fn generate_is_reproducible() {
		assert_eq!(ColorPalette::generate(34), ColorPalette::generate(34));
	}

	#[test]
	fn generate_spaces_hues_evenly() {
		assert_eq!(
			ColorPalette::generate(4),
			vec!["#FF0000", "#7FFF00", "#00FFFF", "#7F00FF"]
		);
	}

	#[test]
	fn rainbow_colors_are_pairwise_distinct() {
		let colors = ColorPalette::generate(34);
		for (i, a) in colors.iter().enumerate() {
			for b in &colors[i + 1..] {
				assert_ne!(a, b);
			}
		}
	}

	#[test]
	fn generate_zero_is_empty() {
		assert!(ColorPalette::generate(0).is_empty());
	}

	#[test]
	fn colors_cycle_past_palette_length() {
		let palette = ColorPalette::rainbow(3);
		assert_eq!(palette.get(3), palette.get(0));
		assert_eq!(palette.get(7), palette.get(1));
	}

	#[test]
	fn empty_palette_falls_back_to_default_color() {
		let palette = ColorPalette::rainbow(0);
		assert_eq!(palette.get(0), None);
		assert_eq!(palette.hex_for(5), DEFAULT_NODE_COLOR);
	}

	#[test]
	fn classic_palette_wraps_after_21() {
		let palette = ColorPalette::classic();
		assert_eq!(palette.len(), 21);
		assert_eq!(palette.hex_for(0), "#E6194B");
		assert_eq!(palette.hex_for(20), "#FFFFFF");
		assert_eq!(palette.hex_for(21), "#E6194B");
	}

	#[test]
	fn palette_kind_deserializes_with_defaults() {
		let kind: PaletteKind = serde_json::from_str(r#"{"kind": "rainbow"}"#).unwrap();
		assert_eq!(kind, PaletteKind::Rainbow { size: 34 });
		let kind: PaletteKind = serde_json::from_str(r#"{"kind": "classic"}"#).unwrap();
		assert_eq!(kind, PaletteKind::Classic);
	}
}
