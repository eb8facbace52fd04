use super::ImportError;
use crate::graph::{GraphError, MatrixGraph};

use std::io::BufRead;
use std::str::FromStr;

/// A single `<from> <to> <weight>` line together with its 1-based line number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EdgeLine {
    pub line: usize,
    pub from: usize,
    pub to: usize,
    pub weight: u64,
}

/// The contents of an edge list, in the order the lines appeared.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportedEdgeList {
    pub order: usize,
    pub edges: Vec<EdgeLine>,
}

impl ImportedEdgeList {
    /// Builds the dense graph described by the edge list.
    /// A pair listed more than once keeps the weight of its last line.
    pub fn into_graph(self) -> Result<MatrixGraph<u64>, GraphError<usize>> {
        MatrixGraph::new(
            self.order,
            self.edges
                .into_iter()
                .map(|e| (e.from, e.to, e.weight))
                .collect(),
        )
    }
}

fn parse_fields<T: FromStr, const N: usize>(
    line: usize,
    text: &str,
) -> Result<[T; N], ImportError>
where
    T: Copy + Default,
{
    let tokens: Vec<&str> = text.split_whitespace().collect();
    if tokens.len() != N {
        return Err(ImportError::WrongFieldCount {
            line,
            expected: N,
            found: tokens.len(),
        });
    }

    let mut fields = [T::default(); N];
    for (field, token) in fields.iter_mut().zip(tokens) {
        *field = token.parse().map_err(|_| ImportError::InvalidToken {
            line,
            token: token.to_string(),
        })?;
    }

    Ok(fields)
}

/// Reads an edge list as written by the edge list exporter.
///
/// Blank lines are skipped. Every other line after the header must hold exactly
/// three integers, and the number of those lines has to match the header.
pub fn import_edge_list<R: BufRead>(reader: R) -> Result<ImportedEdgeList, ImportError> {
    let mut lines = reader
        .lines()
        .enumerate()
        .map(|(i, text)| (i + 1, text))
        .filter(|(_, text)| !matches!(text, Ok(t) if t.trim().is_empty()));

    let (header_line, header) = lines.next().ok_or(ImportError::MissingHeader)?;
    let [order, declared] = parse_fields::<usize, 2>(header_line, &header?)?;

    let mut edges = Vec::with_capacity(declared.min(1 << 20));
    for (line, text) in lines {
        let [from, to, weight] = parse_fields::<u64, 3>(line, &text?)?;

        if let Some(&vertex) = [from, to].iter().find(|&&v| v >= order as u64) {
            return Err(ImportError::VertexOutOfRange {
                line,
                vertex,
                order,
            });
        }

        edges.push(EdgeLine {
            line,
            from: from as usize,
            to: to as usize,
            weight,
        });
    }

    if edges.len() != declared {
        return Err(ImportError::EdgeCountMismatch {
            declared,
            found: edges.len(),
        });
    }

    Ok(ImportedEdgeList { order, edges })
}
