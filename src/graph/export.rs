mod dot;
mod edge_list;

pub use dot::Dot;
pub use edge_list::EdgeList;

use crate::graph::WeightedGraph;
use std::fmt::Display;
use std::io::{self, Write};

/// An exporter for weighted graphs.
pub trait Export {
    /// Writes a representation of the graph according to the export format used.
    fn export<G>(&self, graph: &G, out: &mut dyn Write) -> io::Result<()>
    where
        G: WeightedGraph + ?Sized,
        G::EdgeWeightType: Display;

    /// Returns a String representation of the graph according to the export format used.
    #[cfg(test)]
    fn render<G>(&self, graph: &G) -> String
    where
        G: WeightedGraph + ?Sized,
        G::EdgeWeightType: Display,
    {
        let mut buf = Vec::new();
        self.export(graph, &mut buf)
            .expect("writing to a Vec<u8> is infallible");
        String::from_utf8_lossy(&buf).into_owned()
    }
}
