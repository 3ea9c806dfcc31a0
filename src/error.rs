use crate::graph::{Edge, Vertex};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, MdstError>;

/// Faults that can only occur if the degree-reduction algorithm itself is wrong.
/// For a connected, well-formed input none of them is reachable.
///
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum Invariant {
    #[error("edge {edge:?} merges two subtrees of vertex {vertex}, but no neighbor of {vertex} lies in either of them")]
    NoReplacementNeighbor { vertex: Vertex, edge: Edge },

    #[error("merge edge {edge:?} closes no cycle in the previous tree")]
    NoDroppableEdge { edge: Edge },
}

#[derive(Debug, Error)]
pub enum MdstError {
    #[error("vertex {0} is duplicated")]
    DuplicateVertex(Vertex),

    #[error("edge ({0}, {1}) links to non-existent vertex")]
    UnknownVertex(Vertex, Vertex),

    #[error("edge ({0}, {0}) is a self-loop")]
    SelfLoop(Vertex),

    #[error("malformed input: {0}")]
    Malformed(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("exact solver supports at most {max} edges, got {got}")]
    TooManyEdges { max: usize, got: usize },

    #[error("graph is empty")]
    EmptyGraph,

    #[error("invariant broken: {0}")]
    InvariantBroken(Invariant),
}

impl From<Invariant> for MdstError {
    fn from(inv: Invariant) -> Self {
        MdstError::InvariantBroken(inv)
    }
}
