use super::Export;
use crate::graph::WeightedGraph;

use std::fmt::Display;
use std::io::{self, Write};

/// Plain text edge list: a `<order> <size>` header followed by one `<from> <to> <weight>` line per edge.
#[derive(Debug, Default, Clone, Copy)]
pub struct EdgeList;

impl Export for EdgeList {
    fn export<G>(&self, graph: &G, out: &mut dyn Write) -> io::Result<()>
    where
        G: WeightedGraph + ?Sized,
        G::EdgeWeightType: Display,
    {
        // The header and the body are produced by the same edge iterator,
        // so the announced count always matches the lines that follow.
        writeln!(out, "{} {}", graph.order(), graph.size())?;
        for ((from, to), weight) in graph.iter_edges() {
            writeln!(out, "{} {} {}", from, to, weight)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::MatrixGraph;

    #[test]
    fn exports_header_and_edges() {
        let mut graph = MatrixGraph::new(3, vec![(2, 0, 7), (0, 1, 100), (1, 1, 3)]).unwrap();
        graph.change_edge((0, 1), 5).unwrap();

        assert_eq!(EdgeList.render(&graph), "3 2\n0 1 5\n2 0 7\n");
    }

    #[test]
    fn exports_empty_graph() {
        let graph = MatrixGraph::<u64>::with_size(0);

        assert_eq!(EdgeList.render(&graph), "0 0\n");
    }

    #[test]
    fn exports_edgeless_graph() {
        let graph = MatrixGraph::<u64>::with_size(500);

        assert_eq!(EdgeList.render(&graph), "500 0\n");
    }
}
