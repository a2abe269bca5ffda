//! Canvas view state: pan and zoom over a fixed layout.
//!
//! Positions never change after load, so the only mutable state is how the
//! world is mapped onto the canvas.

/// Margin kept around the layout circle when fitting, in world units.
const FIT_MARGIN: f64 = 80.0;

/// Zoom limits. `k` is pixels per world unit.
const MIN_ZOOM: f64 = 0.05;
const MAX_ZOOM: f64 = 10.0;

/// Pan and zoom transform applied to the entire graph view.
#[derive(Clone, Debug, PartialEq)]
pub struct ViewTransform {
	/// Horizontal offset in pixels.
	pub x: f64,
	/// Vertical offset in pixels.
	pub y: f64,
	/// Zoom factor, clamped to `MIN_ZOOM..=MAX_ZOOM`.
	pub k: f64,
}

impl Default for ViewTransform {
	fn default() -> Self {
		Self {
			x: 0.0,
			y: 0.0,
			k: 1.0,
		}
	}
}

/// Tracks an in-progress canvas pan.
#[derive(Clone, Debug, Default)]
pub struct PanState {
	/// True between mouse down and mouse up.
	pub active: bool,
	/// Pointer x at the start of the drag.
	pub start_x: f64,
	/// Pointer y at the start of the drag.
	pub start_y: f64,
	/// Transform x at the start of the drag.
	pub transform_start_x: f64,
	/// Transform y at the start of the drag.
	pub transform_start_y: f64,
}

/// Everything the canvas needs to map world space to pixels.
#[derive(Clone, Debug)]
pub struct ViewState {
	/// Current world to screen mapping.
	pub transform: ViewTransform,
	/// Drag in progress, if any.
	pub pan: PanState,
	/// Canvas width in pixels.
	pub width: f64,
	/// Canvas height in pixels.
	pub height: f64,
	/// Radius of the layout circle the view is fitted to.
	pub radius: f64,
}

impl ViewState {
	/// Creates a view fitted to a canvas of the given size.
	pub fn new(width: f64, height: f64, radius: f64) -> Self {
		let mut state = Self {
			transform: ViewTransform::default(),
			pan: PanState::default(),
			width,
			height,
			radius,
		};
		state.fit();
		state
	}

	/// Centres the origin and zooms so the whole circle is visible.
	pub fn fit(&mut self) {
		let extent = 2.0 * (self.radius.abs() + FIT_MARGIN);
		let k = (self.width.min(self.height) / extent).clamp(MIN_ZOOM, MAX_ZOOM);
		self.transform = ViewTransform {
			x: self.width / 2.0,
			y: self.height / 2.0,
			k,
		};
	}

	/// Adopts a new canvas size and refits.
	pub fn resize(&mut self, width: f64, height: f64) {
		self.width = width;
		self.height = height;
		self.fit();
	}

	/// Converts a canvas pixel position to graph coordinates.
	pub fn screen_to_graph(&self, sx: f64, sy: f64) -> (f64, f64) {
		(
			(sx - self.transform.x) / self.transform.k,
			(sy - self.transform.y) / self.transform.k,
		)
	}

	/// Starts a background drag at screen point `(sx, sy)`.
	pub fn begin_pan(&mut self, sx: f64, sy: f64) {
		self.pan = PanState {
			active: true,
			start_x: sx,
			start_y: sy,
			transform_start_x: self.transform.x,
			transform_start_y: self.transform.y,
		};
	}

	/// Moves the view while a pan is active. Returns whether anything changed.
	pub fn pan_to(&mut self, sx: f64, sy: f64) -> bool {
		if !self.pan.active {
			return false;
		}
		self.transform.x = self.pan.transform_start_x + (sx - self.pan.start_x);
		self.transform.y = self.pan.transform_start_y + (sy - self.pan.start_y);
		true
	}

	/// Stops the current drag.
	pub fn end_pan(&mut self) {
		self.pan.active = false;
	}

	/// Zooms around the screen point `(sx, sy)`, keeping it fixed.
	pub fn zoom_at(&mut self, sx: f64, sy: f64, delta_y: f64) {
		let factor = if delta_y > 0.0 { 0.9 } else { 1.1 };
		let (gx, gy) = self.screen_to_graph(sx, sy);
		self.transform.k = (self.transform.k * factor).clamp(MIN_ZOOM, MAX_ZOOM);
		self.transform.x = sx - gx * self.transform.k;
		self.transform.y = sy - gy * self.transform.k;
	}
}
