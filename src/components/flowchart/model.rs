//! Owned diagram model: node positions plus the static topology.

use std::collections::HashSet;

use super::types::{Connection, DiagramSpec, NodeCategory};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DiagramError {
	#[error("Duplicate node id: {id}")]
	DuplicateNodeId { id: String },
}

/// Area covered by the random initial placement.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScatterBounds {
	pub width: f64,
	pub height: f64,
}

impl Default for ScatterBounds {
	fn default() -> Self {
		Self {
			width: 800.0,
			height: 600.0,
		}
	}
}

#[derive(Clone, Debug, PartialEq)]
pub struct Node {
	pub id: String,
	pub text: String,
	pub details: String,
	pub level: u32,
	pub column: u32,
	pub category: NodeCategory,
	pub x: f64,
	pub y: f64,
}

#[derive(Clone, Debug)]
pub struct Diagram {
	nodes: Vec<Node>,
	connections: Vec<Connection>,
}

impl Diagram {
	/// Build the model from `spec`, placing every node uniformly at random
	/// inside `bounds`. `random` must yield values in `[0, 1)`.
	pub fn scattered(
		spec: &DiagramSpec,
		bounds: ScatterBounds,
		mut random: impl FnMut() -> f64,
	) -> Result<Self, DiagramError> {
		let mut seen = HashSet::new();
		let mut nodes = Vec::with_capacity(spec.nodes.len());

		for node in &spec.nodes {
			if !seen.insert(node.id.as_str()) {
				return Err(DiagramError::DuplicateNodeId {
					id: node.id.clone(),
				});
			}
			let (x, y) = (
				scatter(random(), bounds.width),
				scatter(random(), bounds.height),
			);
			nodes.push(Node {
				id: node.id.clone(),
				text: node.text.clone(),
				details: node.details.clone(),
				level: node.level,
				column: node.column,
				category: node.category,
				x,
				y,
			});
		}

		Ok(Self {
			nodes,
			connections: spec.connections.clone(),
		})
	}

	pub fn nodes(&self) -> &[Node] {
		&self.nodes
	}

	pub fn connections(&self) -> &[Connection] {
		&self.connections
	}

	pub fn node(&self, id: &str) -> Option<&Node> {
		self.nodes.iter().find(|n| n.id == id)
	}

	/// Move one node. Returns `false` when no node has this id.
	pub fn set_position(&mut self, id: &str, x: f64, y: f64) -> bool {
		match self.nodes.iter_mut().find(|n| n.id == id) {
			Some(node) => {
				node.x = x;
				node.y = y;
				true
			}
			None => false,
		}
	}

	/// Overwrite every position in one pass.
	pub fn set_positions(&mut self, mut position: impl FnMut(&Node) -> (f64, f64)) {
		for node in &mut self.nodes {
			let (x, y) = position(node);
			node.x = x;
			node.y = y;
		}
	}

	/// Endpoint pairs of every connection whose ids both resolve.
	pub fn resolved_connections(&self) -> impl Iterator<Item = (&Node, &Node)> + '_ {
		self.connections()
			.iter()
			.filter_map(|c| Some((self.node(&c.from)?, self.node(&c.to)?)))
	}

	pub fn dangling_connections(&self) -> Vec<&Connection> {
		self.connections()
			.iter()
			.filter(|c| self.node(&c.from).is_none() || self.node(&c.to).is_none())
			.collect()
	}

	#[cfg(test)]
	pub(crate) fn remove_node(&mut self, id: &str) {
		self.nodes.retain(|n| n.id != id);
	}
}

// Upper bound is exclusive even when the generator returns 1.0.
fn scatter(t: f64, extent: f64) -> f64 {
	(t * extent).clamp(0.0, extent * (1.0 - f64::EPSILON))
}

#[cfg(test)]
pub(crate) mod tests {
	use super::*;
	use crate::components::flowchart::types::NodeSpec;

	/// Seeded LCG standing in for `Math.random`.
	pub(crate) fn lcg(seed: usize) -> impl FnMut() -> f64 {
		let mut state = seed;
		move || {
			state = (state * 9301 + 49297) % 233280;
			state as f64 / 233280.0
		}
	}

	pub(crate) fn sample_spec() -> DiagramSpec {
		DiagramSpec {
			nodes: vec![
				NodeSpec::new("start", "Root", "root", 0, 1, NodeCategory::Root),
				NodeSpec::new("fa", "Financial", "money", 1, 0, NodeCategory::Default),
				NodeSpec::new("rc", "Risks", "a\nb", 1, 2, NodeCategory::Risk),
				NodeSpec::new("fa_pros", "Pros", "• one\n• two", 2, 0, NodeCategory::Pro),
			],
			connections: vec![
				Connection::new("start", "fa"),
				Connection::new("start", "rc"),
				Connection::new("fa", "fa_pros"),
			],
		}
	}

	pub(crate) fn sample_diagram() -> Diagram {
		Diagram::scattered(&sample_spec(), ScatterBounds::default(), lcg(7)).unwrap()
	}

	#[test]
	fn initial_positions_stay_in_bounds() {
		for seed in 0..50 {
			let d = Diagram::scattered(&sample_spec(), ScatterBounds::default(), lcg(seed)).unwrap();
			for n in d.nodes() {
				assert!((0.0..800.0).contains(&n.x), "x out of range: {}", n.x);
				assert!((0.0..600.0).contains(&n.y), "y out of range: {}", n.y);
			}
		}
	}

	#[test]
	fn generator_edge_values_are_clamped() {
		let d = Diagram::scattered(&sample_spec(), ScatterBounds::default(), || 1.0).unwrap();
		assert!(d.nodes().iter().all(|n| n.x < 800.0 && n.y < 600.0));
		let d = Diagram::scattered(&sample_spec(), ScatterBounds::default(), || -0.5).unwrap();
		assert!(d.nodes().iter().all(|n| n.x == 0.0 && n.y == 0.0));
	}

	#[test]
	fn duplicate_ids_are_rejected() {
		let mut spec = sample_spec();
		spec.nodes.push(NodeSpec::new("fa", "Again", "", 3, 0, NodeCategory::Con));
		let err = Diagram::scattered(&spec, ScatterBounds::default(), lcg(1)).unwrap_err();
		assert_eq!(err, DiagramError::DuplicateNodeId { id: "fa".into() });
	}

	#[test]
	fn set_position_touches_only_the_target() {
		let mut d = sample_diagram();
		let before = d.nodes().to_vec();

		assert!(d.set_position("rc", 400.0, 300.0));

		for (old, new) in before.iter().zip(d.nodes()) {
			if old.id == "rc" {
				assert_eq!((new.x, new.y), (400.0, 300.0));
				assert_eq!(
					(&old.text, &old.details, old.level, old.column),
					(&new.text, &new.details, new.level, new.column)
				);
			} else {
				assert_eq!(old, new);
			}
		}
	}

	#[test]
	fn set_position_unknown_id_is_a_no_op() {
		let mut d = sample_diagram();
		let before = d.nodes().to_vec();
		assert!(!d.set_position("missing", 1.0, 2.0));
		assert_eq!(before, d.nodes());
	}

	#[test]
	fn resolved_connections_follow_current_positions() {
		let mut d = sample_diagram();
		d.set_position("fa", 10.0, 20.0);
		d.set_position("fa_pros", 30.0, 40.0);
		let (from, to) = d
			.resolved_connections()
			.find(|(a, b)| a.id == "fa" && b.id == "fa_pros")
			.unwrap();
		assert_eq!((from.x, from.y, to.x, to.y), (10.0, 20.0, 30.0, 40.0));
	}

	#[test]
	fn removed_endpoint_drops_only_that_connection() {
		let mut d = sample_diagram();
		d.remove_node("fa_pros");
		assert_eq!(d.resolved_connections().count(), 2);
		assert!(d.resolved_connections().all(|(_, b)| b.id != "fa_pros"));
		assert_eq!(d.dangling_connections(), vec![&Connection::new("fa", "fa_pros")]);
	}
}
