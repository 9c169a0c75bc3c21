use crate::digraph::VertexId;

pub type Result<T> = std::result::Result<T, Error>;

/// Caller-input errors reported by [`Digraph`](crate::Digraph) operations.
///
/// Every variant is raised before any structural change is made, so a failed
/// operation always leaves the graph exactly as it was.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("no such vertex: {vertex}")]
    NoSuchVertex { vertex: VertexId },

    #[error("no such edge: {from} -> {to}")]
    NoSuchEdge { from: VertexId, to: VertexId },

    #[error("vertex already exists: {vertex}")]
    DuplicateVertex { vertex: VertexId },

    #[error("edge already exists: {from} -> {to}")]
    DuplicateEdge { from: VertexId, to: VertexId },
}
