mod random_edges;

pub use random_edges::RandomEdges;

use crate::graph::MatrixGraph;

/// A Generator for weighted graphs.
pub trait Generate<Ew> {
    /// Generates a weighted graph with edge weights Ew.
    fn generate(&mut self) -> MatrixGraph<Ew>;
}
