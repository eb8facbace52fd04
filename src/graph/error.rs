use thiserror::Error;

#[derive(Debug, PartialEq, Eq, Error)]
pub enum GraphError<IndexType> {
    #[error("edge {0:?} does not exist")]
    MissingEdge((IndexType, IndexType)),
    #[error("vertex {0:?} is not in the graph")]
    MissingNode(IndexType),
}
