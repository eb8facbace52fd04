use crate::graph::{Edge, GraphError, WeightedGraph};

/// Implements a weighted, directed graph using an adjacency matrix as datastructure.
/// Every cell starts out empty and holds at most one weight.
#[derive(Debug, Clone, PartialEq)]
pub struct MatrixGraph<Ew> {
    adjacency_matrix: Vec<Vec<Option<Ew>>>,
}

impl<Ew: Clone> MatrixGraph<Ew> {
    /// Constructs a graph with the vertices `0..size` and no edges.
    pub fn with_size(size: usize) -> Self {
        MatrixGraph {
            // The initialization of adjacency_matrix makes it necessary, that Ew is of type Clone.
            adjacency_matrix: (0..size).map(|_| vec![None; size]).collect(),
        }
    }

    /// Creates a new graph with `size` vertices from a list of weighted edges.
    /// Later entries for the same pair replace earlier ones.
    /// Returns an error if any edge references a vertex outside of `0..size`.
    pub fn new(size: usize, edges: Vec<(usize, usize, Ew)>) -> Result<Self, GraphError<usize>> {
        let mut graph = Self::with_size(size);
        for (from, to, weight) in edges.into_iter() {
            graph.change_edge((from, to), weight)?;
        }

        Ok(graph)
    }
}

impl<Ew> MatrixGraph<Ew> {
    fn has_node(&self, id: usize) -> bool {
        id < self.adjacency_matrix.len()
    }

    fn check_edge(&self, (from, to): Edge<usize>) -> Result<(), GraphError<usize>> {
        if !self.has_node(from) {
            Err(GraphError::MissingNode(from))
        } else if !self.has_node(to) {
            Err(GraphError::MissingNode(to))
        } else {
            Ok(())
        }
    }
}

impl<Ew> WeightedGraph for MatrixGraph<Ew> {
    type EdgeWeightType = Ew;

    fn order(&self) -> usize {
        self.adjacency_matrix.len()
    }

    fn iter_edges(&self) -> Box<dyn Iterator<Item = (Edge<usize>, &Ew)> + '_> {
        Box::new(
            self.adjacency_matrix
                .iter()
                .enumerate()
                .flat_map(|(i, row)| {
                    row.iter()
                        .enumerate()
                        .filter(move |(j, _)| i != *j)
                        .filter_map(move |(j, weight)| weight.as_ref().map(|w| ((i, j), w)))
                }),
        )
    }

    fn edge_weight(&self, edge: Edge<usize>) -> Result<&Ew, GraphError<usize>> {
        self.check_edge(edge)?;

        self.adjacency_matrix[edge.0][edge.1]
            .as_ref()
            .ok_or(GraphError::MissingEdge(edge))
    }

    fn change_edge(&mut self, edge: Edge<usize>, weight: Ew) -> Result<Option<Ew>, GraphError<usize>> {
        self.check_edge(edge)?;

        Ok(self.adjacency_matrix[edge.0][edge.1].replace(weight))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_weighted() -> MatrixGraph<u64> {
        MatrixGraph::new(3, vec![(0, 1, 100), (1, 2, 101), (2, 1, 50), (2, 0, 200)]).unwrap()
    }

    #[test]
    fn new_empty_works() {
        let graph = MatrixGraph::<u64>::with_size(0);

        assert!(graph.is_empty(), "Graph is not empty.");
        assert_eq!(graph.size(), 0, "Empty graph has edges.");
        assert_eq!(graph.iter_edges().count(), 0, "Empty graph yields edges.");
    }

    #[test]
    fn new_with_size_has_no_edges() {
        let graph = MatrixGraph::<u64>::with_size(5);

        assert_eq!(graph.order(), 5, "Graph has the wrong order.");
        assert_eq!(graph.size(), 0, "There is an edge in the graph, which should not be there.");
        assert!(
            graph.adjacency_matrix.iter().flatten().all(Option::is_none),
            "A cell was populated on creation."
        );
    }

    #[test]
    fn new_from_list_works() {
        let graph = valid_weighted();

        assert_eq!(graph.order(), 3, "Graph has the wrong order.");
        assert_eq!(graph.size(), 4, "Graph has the wrong size.");
        assert_eq!(graph.edge_weight((2, 0)), Ok(&200));
    }

    #[test]
    fn new_from_list_rejects_unknown_vertex() {
        let graph = MatrixGraph::new(2, vec![(0, 1, 1), (1, 2, 1)]);

        assert_eq!(graph, Err(GraphError::MissingNode(2)));
    }

    #[test]
    fn edges_are_row_major() {
        let graph = valid_weighted();
        let edges: Vec<_> = graph.iter_edges().map(|(e, w)| (e, *w)).collect();

        assert_eq!(
            edges,
            vec![((0, 1), 100), ((1, 2), 101), ((2, 0), 200), ((2, 1), 50)]
        );
    }

    #[test]
    fn self_loops_are_stored_but_not_reported() {
        let mut graph = valid_weighted();
        graph.change_edge((1, 1), 7).unwrap();

        assert_eq!(graph.adjacency_matrix[1][1], Some(7), "Self-loop was not stored.");
        assert_eq!(graph.size(), 4, "Self-loop was counted.");
        assert!(
            graph.iter_edges().all(|((i, j), _)| i != j),
            "Self-loop was reported."
        );
    }

    #[test]
    fn change_edge_last_write_wins() {
        let mut graph = MatrixGraph::with_size(2);

        assert_eq!(graph.change_edge((0, 1), 5), Ok(None));
        assert_eq!(graph.change_edge((0, 1), 9), Ok(Some(5)));
        assert_eq!(graph.size(), 1, "Overwrite added a second edge.");
        assert_eq!(graph.edge_weight((0, 1)), Ok(&9));
    }

    #[test]
    fn edge_weight_errors() {
        let graph = valid_weighted();

        assert_eq!(graph.edge_weight((0, 2)), Err(GraphError::MissingEdge((0, 2))));
        assert_eq!(graph.edge_weight((0, 3)), Err(GraphError::MissingNode(3)));
        assert_eq!(graph.edge_weight((4, 0)), Err(GraphError::MissingNode(4)));
        assert!(!graph.has_edge((0, 2)));
        assert!(graph.has_edge((0, 1)));
    }

    #[test]
    fn change_edge_rejects_unknown_vertex() {
        let mut graph = valid_weighted();

        assert_eq!(graph.change_edge((3, 0), 1), Err(GraphError::MissingNode(3)));
        assert_eq!(graph.size(), 4, "Failed insert changed the graph.");
    }
}
