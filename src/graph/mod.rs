//! 图核心模块
//!
//! 定义顶点、边和图的核心数据结构，以及各种表示之间的转换

mod edge;
mod graph;
mod repr;
mod vertex;

pub use edge::Edge;
pub use graph::{Graph, GraphSnapshot};
pub use repr::{default_labels, Matrix};
pub use vertex::Vertex;
