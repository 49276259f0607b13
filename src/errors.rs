use std::time::Duration;

use thiserror::Error;

use crate::graph::{EdgeId, VertexId};


/// Failures while assembling or querying a graph
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GraphError {
    /// Vertex index is not part of this graph (or path tree)
    #[error("vertex {0} not found in graph")]
    VertexNotFound(VertexId),

    #[error("edge {0} not found in graph")]
    EdgeNotFound(EdgeId),

    /// A vertex with the same id was already added
    #[error("duplicate vertex id '{0}'")]
    DuplicateVertex(String),

    /// Edge lengths must be non-negative numbers
    #[error("invalid edge length {length} from {source_vertex} to {target_vertex}")]
    InvalidLength {
        source_vertex: VertexId,
        target_vertex: VertexId,
        length: f64,
    },
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum RoutingError {
    /// Destination can not be reached from origin
    #[error("no route found from '{origin}' to '{destination}'")]
    RouteNotFound { origin: String, destination: String },

    /// Search was aborted at the vertex selection step
    #[error("search deadline exceeded after {elapsed:?}")]
    DeadlineExceeded { elapsed: Duration },

    /// Internal lookup failure - vertex from a foreign graph
    #[error(transparent)]
    Graph(#[from] GraphError),
}
