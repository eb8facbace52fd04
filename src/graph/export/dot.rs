use super::Export;
use crate::graph::WeightedGraph;

use std::fmt::Display;
use std::io::{self, Write};

/// Graphviz dot exporter.
/// Every edge weight is used both as label and as Graphviz edge weight.
#[derive(Debug, Clone)]
pub struct Dot {
    pub name: String,
}

impl Default for Dot {
    fn default() -> Self {
        Dot {
            name: String::from("G"),
        }
    }
}

impl Export for Dot {
    fn export<G>(&self, graph: &G, out: &mut dyn Write) -> io::Result<()>
    where
        G: WeightedGraph + ?Sized,
        G::EdgeWeightType: Display,
    {
        writeln!(out, "digraph {} {{", self.name)?;
        for ((from, to), weight) in graph.iter_edges() {
            writeln!(
                out,
                "\t{} -> {} [label={},weight={}];",
                from, to, weight, weight
            )?;
        }
        writeln!(out, "}}")
    }
}
