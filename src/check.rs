//! Verifies that an edge list is a well formed test case.

use std::collections::HashMap;
use std::io::BufRead;
use thiserror::Error;
use tracing::debug;

use crate::config::{edge_cap, ConfigError};
use crate::graph::import::{import_edge_list, ImportError};

#[derive(Debug, Error)]
pub enum CheckError {
    #[error(transparent)]
    Import(#[from] ImportError),
    #[error("line {line}: self-loop on vertex {vertex}")]
    SelfLoop { line: usize, vertex: usize },
    #[error("line {line}: weight {weight} is outside of ({min}, {max})")]
    WeightOutOfRange {
        line: usize,
        weight: u64,
        min: u64,
        max: u64,
    },
    #[error("line {line}: edge ({from}, {to}) was already listed on line {first}")]
    DuplicateEdge {
        line: usize,
        first: usize,
        from: usize,
        to: usize,
    },
    #[error("{edges} edges exceed the maximum of {cap}")]
    TooManyEdges { edges: usize, cap: usize },
}

/// Bounds an edge list is checked against, on top of the format itself.
#[derive(Debug, Default, Clone, Copy)]
pub struct Limits {
    pub weight_range: Option<(u64, u64)>,
    /// Sampling attempts the list was generated with. Caps the number of edges.
    pub attempts: Option<usize>,
}

impl Limits {
    /// Builds limits from optional weight bounds. A missing bound is open.
    pub fn new(
        min_weight: Option<u64>,
        max_weight: Option<u64>,
        attempts: Option<usize>,
    ) -> Result<Self, ConfigError> {
        let weight_range = match (min_weight, max_weight) {
            (None, None) => None,
            (min, max) => {
                let (min, max) = (min.unwrap_or(0), max.unwrap_or(u64::MAX));
                if min > max {
                    return Err(ConfigError::InvalidWeightRange { min, max });
                }
                Some((min, max))
            }
        };

        Ok(Limits {
            weight_range,
            attempts,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub vertices: usize,
    pub edges: usize,
}

pub fn check_edge_list<R: BufRead>(reader: R, limits: &Limits) -> Result<Summary, CheckError> {
    let list = import_edge_list(reader)?;

    let cap = edge_cap(list.order, limits.attempts.unwrap_or(usize::MAX));
    if list.edges.len() > cap {
        return Err(CheckError::TooManyEdges {
            edges: list.edges.len(),
            cap,
        });
    }

    let mut first_seen = HashMap::with_capacity(list.edges.len());
    for edge in list.edges.iter() {
        if edge.from == edge.to {
            return Err(CheckError::SelfLoop {
                line: edge.line,
                vertex: edge.from,
            });
        }

        if let Some((min, max)) = limits.weight_range {
            if edge.weight < min || edge.weight > max {
                return Err(CheckError::WeightOutOfRange {
                    line: edge.line,
                    weight: edge.weight,
                    min,
                    max,
                });
            }
        }

        if let Some(&first) = first_seen.get(&(edge.from, edge.to)) {
            return Err(CheckError::DuplicateEdge {
                line: edge.line,
                first,
                from: edge.from,
                to: edge.to,
            });
        }
        first_seen.insert((edge.from, edge.to), edge.line);
    }

    debug!(vertices = list.order, edges = list.edges.len(), "edge list is valid");
    Ok(Summary {
        vertices: list.order,
        edges: list.edges.len(),
    })
}
