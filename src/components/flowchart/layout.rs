use super::model::{Diagram, Node};

/// Grid spacing used by Auto-Organize.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayoutConfig {
	pub level_height: f64,
	pub column_width: f64,
	pub base_x: f64,
	pub base_y: f64,
}

impl Default for LayoutConfig {
	fn default() -> Self {
		Self {
			level_height: 200.0,
			column_width: 250.0,
			base_x: 200.0,
			base_y: 100.0,
		}
	}
}

impl LayoutConfig {
	/// Grid cell for a node; depends only on its level and column.
	pub fn grid_position(&self, level: u32, column: u32) -> (f64, f64) {
		(
			self.base_x + column as f64 * self.column_width,
			self.base_y + level as f64 * self.level_height,
		)
	}
}

pub fn auto_organize(diagram: &mut Diagram, config: &LayoutConfig) {
	diagram.set_positions(|node: &Node| config.grid_position(node.level, node.column));
}
