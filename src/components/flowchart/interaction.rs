//! Pointer gesture state for the canvas: node drag-and-drop, background pan
//! and the view transform both map through.

/// Pointer travel, in screen pixels, before a press turns into a drag.
pub const DRAG_THRESHOLD: f64 = 3.0;

#[derive(Clone, Debug)]
pub struct ViewTransform {
	pub x: f64,
	pub y: f64,
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

impl ViewTransform {
	pub fn screen_to_graph(&self, sx: f64, sy: f64) -> (f64, f64) {
		((sx - self.x) / self.k, (sy - self.y) / self.k)
	}

	/// Zoom by `factor` keeping the screen point `(sx, sy)` fixed.
	pub fn zoom_at(&mut self, sx: f64, sy: f64, factor: f64) {
		let new_k = (self.k * factor).clamp(0.1, 10.0);
		let ratio = new_k / self.k;
		self.x = sx - (sx - self.x) * ratio;
		self.y = sy - (sy - self.y) * ratio;
		self.k = new_k;
	}
}

#[derive(Clone, Debug, Default)]
pub struct PanState {
	pub active: bool,
	pub start_x: f64,
	pub start_y: f64,
	pub transform_start_x: f64,
	pub transform_start_y: f64,
}

/// Node drag gesture. The node id is the transfer payload; the model is
/// only written when the gesture is dropped.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum DragState {
	#[default]
	Idle,
	Pressed {
		node_id: String,
		start_x: f64,
		start_y: f64,
	},
	Dragging {
		node_id: String,
		pointer_x: f64,
		pointer_y: f64,
	},
}

impl DragState {
	/// Arm a drag on `node_id`. Ignored unless idle.
	pub fn press(&mut self, node_id: impl Into<String>, sx: f64, sy: f64) -> bool {
		if !matches!(self, Self::Idle) {
			return false;
		}
		*self = Self::Pressed {
			node_id: node_id.into(),
			start_x: sx,
			start_y: sy,
		};
		true
	}

	/// Track pointer movement. Returns the node id when this move starts the drag.
	pub fn motion(&mut self, sx: f64, sy: f64) -> Option<&str> {
		match self {
			Self::Idle => None,
			Self::Pressed {
				node_id,
				start_x,
				start_y,
			} => {
				let (dx, dy) = (sx - *start_x, sy - *start_y);
				if (dx * dx + dy * dy).sqrt() < DRAG_THRESHOLD {
					return None;
				}
				*self = Self::Dragging {
					node_id: std::mem::take(node_id),
					pointer_x: sx,
					pointer_y: sy,
				};
				self.dragged()
			}
			Self::Dragging {
				pointer_x,
				pointer_y,
				..
			} => {
				*pointer_x = sx;
				*pointer_y = sy;
				None
			}
		}
	}

	/// End the gesture, yielding the payload if a drag was in progress.
	pub fn release(&mut self) -> Option<String> {
		match std::mem::take(self) {
			Self::Dragging { node_id, .. } => Some(node_id),
			_ => None,
		}
	}

	pub fn abandon(&mut self) -> bool {
		let was_dragging = self.is_dragging();
		*self = Self::Idle;
		was_dragging
	}

	pub fn is_idle(&self) -> bool {
		matches!(self, Self::Idle)
	}

	pub fn is_dragging(&self) -> bool {
		matches!(self, Self::Dragging { .. })
	}

	pub fn dragged(&self) -> Option<&str> {
		match self {
			Self::Dragging { node_id, .. } => Some(node_id.as_str()),
			_ => None,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn press_then_move_starts_drag() {
		let mut drag = DragState::default();
		assert!(drag.press("rc", 10.0, 10.0));
		assert_eq!(drag.motion(11.0, 11.0), None);
		assert!(!drag.is_dragging());
		assert_eq!(drag.motion(20.0, 10.0), Some("rc"));
		assert!(drag.is_dragging());
		assert_eq!(drag.motion(30.0, 10.0), None);
		assert_eq!(
			drag,
			DragState::Dragging {
				node_id: "rc".into(),
				pointer_x: 30.0,
				pointer_y: 10.0
			}
		);
		assert_eq!(drag.release(), Some("rc".into()));
		assert!(drag.is_idle());
	}

	#[test]
	fn release_without_motion_carries_nothing() {
		let mut drag = DragState::default();
		drag.press("fa", 0.0, 0.0);
		assert_eq!(drag.release(), None);
		assert!(drag.is_idle());
	}

	#[test]
	fn only_one_gesture_at_a_time() {
		let mut drag = DragState::default();
		drag.press("fa", 0.0, 0.0);
		drag.motion(50.0, 50.0);
		assert!(!drag.press("rc", 0.0, 0.0));
		assert_eq!(drag.dragged(), Some("fa"));
	}

	#[test]
	fn abandon_returns_to_idle() {
		let mut drag = DragState::default();
		drag.press("fa", 0.0, 0.0);
		drag.motion(50.0, 50.0);
		assert!(drag.abandon());
		assert!(drag.is_idle());
		assert_eq!(drag.release(), None);
	}

	#[test]
	fn zoom_keeps_anchor_point_fixed() {
		let mut t = ViewTransform::default();
		let before = t.screen_to_graph(300.0, 200.0);
		t.zoom_at(300.0, 200.0, 1.1);
		let after = t.screen_to_graph(300.0, 200.0);
		assert!((before.0 - after.0).abs() < 1e-9);
		assert!((before.1 - after.1).abs() < 1e-9);
		assert!((t.k - 1.1).abs() < 1e-12);
	}

	#[test]
	fn zoom_is_clamped() {
		let mut t = ViewTransform::default();
		for _ in 0..100 {
			t.zoom_at(0.0, 0.0, 0.5);
		}
		assert_eq!(t.k, 0.1);
	}
}
