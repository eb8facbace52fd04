use super::Generate;
use crate::graph::{MatrixGraph, WeightedGraph};
use crate::rng::inclusive_range;

use oorandom::Rand64;
use tracing::debug;

/// Samples a fixed number of edges with uniformly drawn endpoints and weights.
///
/// Endpoints may coincide and pairs may be drawn more than once. A repeated pair
/// keeps the weight of its last draw, so the resulting graph usually has fewer
/// edges than there were attempts.
pub struct RandomEdges<'a> {
    order: usize,
    attempts: usize,
    weight_range: (u64, u64),
    rng: &'a mut Rand64,
}

impl<'a> RandomEdges<'a> {
    pub fn new(
        order: usize,
        attempts: usize,
        weight_range: (u64, u64),
        rng: &'a mut Rand64,
    ) -> RandomEdges<'a> {
        assert!(
            weight_range.0 <= weight_range.1,
            "weight range ({}, {}) is empty",
            weight_range.0,
            weight_range.1
        );

        RandomEdges {
            order,
            attempts,
            weight_range,
            rng,
        }
    }

    fn vertex(&mut self) -> usize {
        // order fits into a u64 on every supported target, and the result is below order.
        self.rng.rand_range(0..self.order as u64) as usize
    }
}

impl<'a> Generate<u64> for RandomEdges<'a> {
    fn generate(&mut self) -> MatrixGraph<u64> {
        let mut graph = MatrixGraph::with_size(self.order);

        // Without vertices there is nothing to draw from.
        if self.order == 0 {
            debug!(attempts = self.attempts, "skipping sampling on an empty vertex set");
            return graph;
        }

        let mut overwrites = 0usize;
        let mut self_loops = 0usize;
        for _ in 0..self.attempts {
            let from = self.vertex();
            let to = self.vertex();
            let weight = inclusive_range(self.rng, self.weight_range);

            if from == to {
                self_loops += 1;
            }

            // Both endpoints were drawn from 0..order, which are exactly the vertices of graph.
            if let Ok(Some(_)) = graph.change_edge((from, to), weight) {
                overwrites += 1;
            }
        }

        debug!(
            order = self.order,
            attempts = self.attempts,
            overwrites,
            self_loops,
            edges = graph.size(),
            "sampled random edges"
        );

        graph
    }
}
