mod component;
mod geometry;
mod interaction;
mod layout;
mod model;
mod render;
mod state;
mod types;

pub use component::FlowchartCanvas;
pub use model::{Diagram, ScatterBounds};
pub use types::{Connection, DiagramSpec, NodeCategory, NodeSpec};
