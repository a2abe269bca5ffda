//! Fixed circular layout.

use std::collections::HashMap;
use std::f64::consts::PI;

use super::types::EffectId;

/// Default circle radius in world units.
pub const DEFAULT_RADIUS: f64 = 600.0;

/// World-space position of every effect, centred on the origin.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GraphLayout {
	positions: Vec<(EffectId, (f64, f64))>,
	index: HashMap<EffectId, usize>,
	radius: f64,
}

impl GraphLayout {
	/// Places `ids` on a circle of `radius`, equally spaced by angle, with
	/// the first id at angle zero. An empty iterator gives an empty layout.
	pub fn circular(ids: impl IntoIterator<Item = EffectId>, radius: f64) -> Self {
		let ids: Vec<EffectId> = ids.into_iter().collect();
		let n = ids.len();
		if n == 0 {
			return Self {
				radius,
				..Self::default()
			};
		}

		let mut positions = Vec::with_capacity(n);
		let mut index = HashMap::with_capacity(n);
		for (idx, id) in ids.into_iter().enumerate() {
			let angle = 2.0 * PI * idx as f64 / n as f64;
			positions.push((id, (radius * angle.cos(), radius * angle.sin())));
			index.insert(id, idx);
		}

		Self {
			positions,
			index,
			radius,
		}
	}

	/// Position of `id`, or `None` when it was not laid out.
	pub fn position(&self, id: EffectId) -> Option<(f64, f64)> {
		self.index.get(&id).map(|&i| self.positions[i].1)
	}

	/// Like [`position`](Self::position), but unknown ids sit at the centre.
	pub fn position_or_center(&self, id: EffectId) -> (f64, f64) {
		self.position(id).unwrap_or((0.0, 0.0))
	}

	/// Positions in layout order.
	pub fn iter(&self) -> impl Iterator<Item = (EffectId, (f64, f64))> + '_ {
		self.positions.iter().copied()
	}

	/// Number of positioned effects.
	pub fn len(&self) -> usize {
		self.positions.len()
	}

	/// True when nothing was laid out.
	pub fn is_empty(&self) -> bool {
		self.positions.is_empty()
	}

	/// Radius the layout was built with.
	pub fn radius(&self) -> f64 {
		self.radius
	}
}
