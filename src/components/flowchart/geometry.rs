use super::model::{Diagram, Node};

pub const BOX_MAX_WIDTH: f64 = 320.0;
pub const BOX_PADDING: f64 = 16.0;
pub const HEADING_LINE_HEIGHT: f64 = 20.0;
pub const BODY_LINE_HEIGHT: f64 = 16.0;
pub const HEADING_GAP: f64 = 8.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextStyle {
	Heading,
	Body,
}

impl TextStyle {
	pub fn font(self) -> &'static str {
		match self {
			Self::Heading => "bold 14px sans-serif",
			Self::Body => "12px sans-serif",
		}
	}
}

/// Laid-out label box, in graph coordinates, centred on its node.
#[derive(Clone, Debug, PartialEq)]
pub struct NodeBox {
	pub id: String,
	pub left: f64,
	pub top: f64,
	pub width: f64,
	pub height: f64,
	pub heading: Vec<String>,
	pub body: Vec<String>,
}

impl NodeBox {
	pub fn contains(&self, x: f64, y: f64) -> bool {
		x >= self.left && x <= self.left + self.width && y >= self.top && y <= self.top + self.height
	}
}

/// Greedy word wrap. Explicit line breaks are kept; a single word wider
/// than `max_width` gets a line of its own.
pub fn wrap_text(text: &str, max_width: f64, measure: impl Fn(&str) -> f64) -> Vec<String> {
	let mut lines = Vec::new();
	for paragraph in text.split('\n') {
		let mut line = String::new();
		for word in paragraph.split_whitespace() {
			if line.is_empty() {
				line.push_str(word);
				continue;
			}
			let candidate = format!("{line} {word}");
			if measure(&candidate) <= max_width {
				line = candidate;
			} else {
				lines.push(std::mem::replace(&mut line, word.to_owned()));
			}
		}
		lines.push(line);
	}
	lines
}

pub fn layout_box(node: &Node, measure: &impl Fn(&str, TextStyle) -> f64) -> NodeBox {
	let content_max = BOX_MAX_WIDTH - 2.0 * BOX_PADDING;
	let heading = wrap_text(&node.text, content_max, |s| measure(s, TextStyle::Heading));
	let body = if node.details.is_empty() {
		Vec::new()
	} else {
		wrap_text(&node.details, content_max, |s| measure(s, TextStyle::Body))
	};

	let content_width = heading
		.iter()
		.map(|l| measure(l, TextStyle::Heading))
		.chain(body.iter().map(|l| measure(l, TextStyle::Body)))
		.fold(0.0, f64::max)
		.min(content_max);
	let width = content_width + 2.0 * BOX_PADDING;
	let mut height = 2.0 * BOX_PADDING + heading.len() as f64 * HEADING_LINE_HEIGHT;
	if !body.is_empty() {
		height += HEADING_GAP + body.len() as f64 * BODY_LINE_HEIGHT;
	}

	NodeBox {
		id: node.id.clone(),
		left: node.x - width / 2.0,
		top: node.y - height / 2.0,
		width,
		height,
		heading,
		body,
	}
}

/// Boxes for every node in draw order.
pub fn layout_boxes(diagram: &Diagram, measure: impl Fn(&str, TextStyle) -> f64) -> Vec<NodeBox> {
	diagram
		.nodes()
		.iter()
		.map(|n| layout_box(n, &measure))
		.collect()
}

/// Topmost (last drawn) box under the point.
pub fn box_at(boxes: &[NodeBox], x: f64, y: f64) -> Option<&NodeBox> {
	boxes.iter().rev().find(|b| b.contains(x, y))
}
