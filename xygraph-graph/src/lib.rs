pub mod graph;
mod text_align;

pub use graph::{Error, Graph};
pub use graph::opts::GraphOptions;
pub use graph::point::{CanvasPoint, GraphPoint};
