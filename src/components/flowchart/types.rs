/// Visual category of a node, declared by the dataset.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum NodeCategory {
	Root,
	Pro,
	Con,
	Risk,
	#[default]
	Default,
}

/// Static description of one node; carries no position.
#[derive(Clone, Debug, PartialEq)]
pub struct NodeSpec {
	pub id: String,
	pub text: String,
	pub details: String,
	pub level: u32,
	pub column: u32,
	pub category: NodeCategory,
}

impl NodeSpec {
	pub fn new(
		id: impl Into<String>,
		text: impl Into<String>,
		details: impl Into<String>,
		level: u32,
		column: u32,
		category: NodeCategory,
	) -> Self {
		Self {
			id: id.into(),
			text: text.into(),
			details: details.into(),
			level,
			column,
			category,
		}
	}
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Connection {
	pub from: String,
	pub to: String,
}

impl Connection {
	pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
		Self {
			from: from.into(),
			to: to.into(),
		}
	}
}

#[derive(Clone, Debug, Default)]
pub struct DiagramSpec {
	pub nodes: Vec<NodeSpec>,
	pub connections: Vec<Connection>,
}
