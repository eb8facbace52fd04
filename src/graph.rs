mod error;

pub mod export;
pub mod generate;
pub mod import;
mod matrix_graph;

pub use error::GraphError;
pub use matrix_graph::MatrixGraph;

pub type Edge<IndexType> = (IndexType, IndexType);

/// A directed graph over the vertices `0..order()` with at most one weighted edge per ordered pair.
pub trait WeightedGraph {
    type EdgeWeightType;

    /// Returns true if there are no vertices, or false otherwise.
    fn is_empty(&self) -> bool {
        self.order() == 0
    }

    /// Returns the number of vertices in this graph.
    fn order(&self) -> usize;

    /// Returns the number of edges in this graph.
    /// Self-loops are stored but never counted.
    fn size(&self) -> usize {
        self.iter_edges().count()
    }

    /// Returns an iterator over all edges in row-major order, skipping self-loops.
    fn iter_edges(&self) -> Box<dyn Iterator<Item = (Edge<usize>, &Self::EdgeWeightType)> + '_>;

    /// Returns the weight of an edge.
    fn edge_weight(&self, edge: Edge<usize>) -> Result<&Self::EdgeWeightType, GraphError<usize>>;

    /// Returns true if the edge exists, or false otherwise.
    fn has_edge(&self, edge: Edge<usize>) -> bool {
        self.edge_weight(edge).is_ok()
    }

    /// Sets the weight of an edge, replacing any previous weight.
    /// Returns the replaced weight, or an error if one of the vertices is not in the graph.
    fn change_edge(
        &mut self,
        edge: Edge<usize>,
        weight: Self::EdgeWeightType,
    ) -> Result<Option<Self::EdgeWeightType>, GraphError<usize>>;
}
