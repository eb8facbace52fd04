mod edge_list;
mod error;

pub use edge_list::{import_edge_list, EdgeLine, ImportedEdgeList};
pub use error::ImportError;
