use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ImportError {
    #[error("failed to read edge list")]
    Io(#[from] io::Error),
    #[error("missing `<vertices> <edges>` header")]
    MissingHeader,
    #[error("line {line}: `{token}` is not a non-negative integer")]
    InvalidToken { line: usize, token: String },
    #[error("line {line}: expected {expected} fields, found {found}")]
    WrongFieldCount {
        line: usize,
        expected: usize,
        found: usize,
    },
    #[error("line {line}: vertex {vertex} is out of range for {order} vertices")]
    VertexOutOfRange {
        line: usize,
        vertex: u64,
        order: usize,
    },
    #[error("header declares {declared} edges, but {found} edge lines follow")]
    EdgeCountMismatch { declared: usize, found: usize },
}
