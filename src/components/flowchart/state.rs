use log::{debug, info, warn};

use super::geometry::{self, NodeBox};
use super::interaction::{DragState, PanState, ViewTransform};
use super::layout::{self, LayoutConfig};
use super::model::Diagram;

pub struct FlowchartState {
	pub diagram: Diagram,
	pub layout: LayoutConfig,
	pub transform: ViewTransform,
	pub drag: DragState,
	pub pan: PanState,
	/// Hit regions from the most recent frame, in draw order.
	pub boxes: Vec<NodeBox>,
	pub width: f64,
	pub height: f64,
}

impl FlowchartState {
	pub fn new(diagram: Diagram, layout: LayoutConfig, width: f64, height: f64) -> Self {
		for c in diagram.dangling_connections() {
			warn!("Connection {} -> {} has a missing endpoint and will not be drawn", c.from, c.to);
		}
		Self {
			diagram,
			layout,
			transform: ViewTransform::default(),
			drag: DragState::default(),
			pan: PanState::default(),
			boxes: Vec::new(),
			width,
			height,
		}
	}

	pub fn node_at_position(&self, sx: f64, sy: f64) -> Option<&str> {
		let (gx, gy) = self.transform.screen_to_graph(sx, sy);
		geometry::box_at(&self.boxes, gx, gy).map(|b| b.id.as_str())
	}

	pub fn pointer_down(&mut self, sx: f64, sy: f64) {
		if let Some(id) = self.node_at_position(sx, sy).map(str::to_owned) {
			self.drag.press(id, sx, sy);
		} else {
			self.pan.active = true;
			self.pan.start_x = sx;
			self.pan.start_y = sy;
			self.pan.transform_start_x = self.transform.x;
			self.pan.transform_start_y = self.transform.y;
		}
	}

	pub fn pointer_move(&mut self, sx: f64, sy: f64) {
		if let Some(id) = self.drag.motion(sx, sy) {
			debug!("Drag started on {id}");
		} else if self.pan.active {
			self.transform.x = self.pan.transform_start_x + (sx - self.pan.start_x);
			self.transform.y = self.pan.transform_start_y + (sy - self.pan.start_y);
		}
	}

	/// Finish the gesture at `(sx, sy)`. Returns the id of the node that
	/// was moved, if any.
	pub fn pointer_up(&mut self, sx: f64, sy: f64) -> Option<String> {
		self.pan.active = false;
		let id = self.drag.release()?;
		let (x, y) = self.transform.screen_to_graph(sx, sy);
		if !self.diagram.set_position(&id, x, y) {
			warn!("Dropped node {id} no longer exists");
			return None;
		}
		debug!("Dropped {id} at ({x:.1}, {y:.1})");
		Some(id)
	}

	pub fn pointer_leave(&mut self) {
		if self.drag.abandon() {
			debug!("Drag abandoned outside the canvas");
		}
		self.pan.active = false;
	}

	pub fn wheel(&mut self, sx: f64, sy: f64, delta_y: f64) {
		let factor = if delta_y > 0.0 { 0.9 } else { 1.1 };
		self.transform.zoom_at(sx, sy, factor);
	}

	pub fn auto_organize(&mut self) {
		layout::auto_organize(&mut self.diagram, &self.layout);
		info!("Auto-organized {} nodes", self.diagram.nodes().len());
	}

	/// Box of the node being dragged, re-centred on the pointer.
	pub fn drag_ghost(&self) -> Option<NodeBox> {
		let DragState::Dragging {
			node_id,
			pointer_x,
			pointer_y,
		} = &self.drag
		else {
			return None;
		};
		let source = self.boxes.iter().find(|b| &b.id == node_id)?;
		let (gx, gy) = self.transform.screen_to_graph(*pointer_x, *pointer_y);
		Some(NodeBox {
			left: gx - source.width / 2.0,
			top: gy - source.height / 2.0,
			..source.clone()
		})
	}

	pub fn resize(&mut self, width: f64, height: f64) {
		self.width = width;
		self.height = height;
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::flowchart::geometry::tests::mono;
	use crate::components::flowchart::model::tests::sample_diagram;

	fn state() -> FlowchartState {
		let mut s = FlowchartState::new(sample_diagram(), LayoutConfig::default(), 1200.0, 900.0);
		s.auto_organize();
		s.boxes = geometry::layout_boxes(&s.diagram, mono);
		s
	}

	#[test]
	fn drag_and_drop_moves_only_the_dragged_node() {
		let mut s = state();
		let before = s.diagram.nodes().to_vec();
		// "rc" sits at (700, 300) after auto-organize.
		s.pointer_down(700.0, 300.0);
		s.pointer_move(720.0, 310.0);
		assert!(s.drag.is_dragging());
		assert_eq!(s.pointer_up(400.0, 300.0).as_deref(), Some("rc"));

		let rc = s.diagram.node("rc").unwrap();
		assert_eq!((rc.x, rc.y), (400.0, 300.0));
		for (old, new) in before.iter().zip(s.diagram.nodes()) {
			if old.id != "rc" {
				assert_eq!(old, new);
			}
		}
		assert!(s.drag.is_idle());
	}

	#[test]
	fn drop_maps_through_view_transform() {
		let mut s = state();
		s.transform = ViewTransform {
			x: 100.0,
			y: 50.0,
			k: 2.0,
		};
		s.pointer_down(100.0 + 700.0 * 2.0, 50.0 + 300.0 * 2.0);
		s.pointer_move(0.0, 0.0);
		s.pointer_up(900.0, 650.0);
		let rc = s.diagram.node("rc").unwrap();
		assert_eq!((rc.x, rc.y), (400.0, 300.0));
	}

	#[test]
	fn position_is_unchanged_while_dragging() {
		let mut s = state();
		s.pointer_down(700.0, 300.0);
		s.pointer_move(50.0, 60.0);
		let rc = s.diagram.node("rc").unwrap();
		assert_eq!((rc.x, rc.y), (700.0, 300.0));

		let ghost = s.drag_ghost().unwrap();
		assert_eq!(ghost.id, "rc");
		assert!((ghost.left + ghost.width / 2.0 - 50.0).abs() < 1e-9);
	}

	#[test]
	fn leaving_the_canvas_abandons_the_drag() {
		let mut s = state();
		let before = s.diagram.nodes().to_vec();
		s.pointer_down(700.0, 300.0);
		s.pointer_move(10.0, 10.0);
		s.pointer_leave();
		assert_eq!(s.pointer_up(10.0, 10.0), None);
		assert_eq!(before, s.diagram.nodes());
	}

	#[test]
	fn click_without_motion_is_not_a_drop() {
		let mut s = state();
		s.pointer_down(700.0, 300.0);
		assert_eq!(s.pointer_up(700.0, 300.0), None);
		let rc = s.diagram.node("rc").unwrap();
		assert_eq!((rc.x, rc.y), (700.0, 300.0));
	}

	#[test]
	fn background_drag_pans() {
		let mut s = state();
		s.pointer_down(5.0, 5.0);
		assert!(s.drag.is_idle());
		s.pointer_move(25.0, 45.0);
		s.pointer_up(25.0, 45.0);
		assert_eq!((s.transform.x, s.transform.y), (20.0, 40.0));
		assert!(!s.pan.active);
	}

	#[test]
	fn dropped_node_removed_mid_gesture_is_ignored() {
		let mut s = state();
		s.pointer_down(700.0, 300.0);
		s.pointer_move(10.0, 10.0);
		s.diagram.remove_node("rc");
		let before = s.diagram.nodes().to_vec();
		assert_eq!(s.pointer_up(400.0, 300.0), None);
		assert_eq!(before, s.diagram.nodes());
	}
}
