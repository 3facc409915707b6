pub mod edge;
#[allow(clippy::module_inception)]
pub mod graph;
pub mod graph_error;
pub mod graph_loader;
pub mod node;
pub mod node_id;

pub use edge::{Edge, EdgeKind};
pub use graph::{GraphSnapshot, GraphStore};
pub use graph_error::GraphError;
pub use node::Node;
pub use node_id::NodeId;
