use clap::ValueEnum;
use std::io::{self, Write};
use tracing::{debug, info};

use crate::config::GeneratorConfig;
use crate::graph::export::{Dot, EdgeList, Export};
use crate::graph::generate::{Generate, RandomEdges};
use crate::graph::{MatrixGraph, WeightedGraph};
use crate::rng::rng64;

/// Output formats for a generated test case.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum Format {
    /// `<vertices> <edges>` header followed by `<from> <to> <weight>` lines.
    #[default]
    EdgeList,
    /// Graphviz digraph.
    Dot,
}

/// Generates the graph described by an already validated config.
pub fn generate_graph(config: &GeneratorConfig) -> MatrixGraph<u64> {
    let mut rng = rng64(config.seed as u128);
    let graph = RandomEdges::new(
        config.vertices,
        config.attempts,
        config.weight_range,
        &mut rng,
    )
    .generate();

    info!(
        seed = config.seed,
        vertices = graph.order(),
        edges = graph.size(),
        "generated graph, rerun with --seed {} to reproduce",
        config.seed
    );
    graph
}

/// Generates a graph and writes it to `out` in the given format.
/// A reader that stops consuming early, like `head`, ends the output without an error.
pub fn write_testcase(
    config: &GeneratorConfig,
    format: Format,
    out: &mut dyn Write,
) -> io::Result<()> {
    let graph = generate_graph(config);
    let written = match format {
        Format::EdgeList => EdgeList.export(&graph, out),
        Format::Dot => Dot::default().export(&graph, out),
    }
    .and_then(|_| out.flush());

    match written {
        Err(err) if err.kind() == io::ErrorKind::BrokenPipe => {
            debug!("output closed by reader");
            Ok(())
        }
        result => result,
    }
}
