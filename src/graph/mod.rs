//! Arena graph model
//!
//! Vertices and edges live in two dense vectors and refer to each other by
//! index, so a built [`Graph`] has no internal references and can be shared
//! between threads for read-only searches.

mod builder;

pub use builder::GraphBuilder;

use std::fmt;

use num_traits::Float;

use crate::collections::FxIndexMap;
use crate::errors::GraphError;


/// Index of a vertex in its graph
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VertexId(pub(crate) usize);

impl VertexId {
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}", self.0)
    }
}

/// Index of an edge in its graph
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EdgeId(pub(crate) usize);

impl EdgeId {
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "e{}", self.0)
    }
}

/// Vertex location - carried along, routing never reads it
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coordinate {
    pub x: f64,
    pub y: f64,
}

impl Coordinate {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}


#[derive(Clone, Debug)]
pub struct Vertex {
    id: String, // diagnostics only
    coordinate: Coordinate,
    out_edges: Vec<EdgeId>,
    in_edges: Vec<EdgeId>,
}

impl Vertex {
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn coordinate(&self) -> Coordinate {
        self.coordinate
    }

    pub fn out_edges(&self) -> &[EdgeId] {
        &self.out_edges
    }

    pub fn in_edges(&self) -> &[EdgeId] {
        &self.in_edges
    }
}


/// Directed arc with a non-negative length
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Edge<C> {
    source: VertexId,
    target: VertexId,
    length: C,
}

impl<C: Copy> Edge<C> {
    pub fn source(&self) -> VertexId {
        self.source
    }

    pub fn target(&self) -> VertexId {
        self.target
    }

    pub fn length(&self) -> C {
        self.length
    }
}


/// Directed, edge-weighted graph
///
/// Built once through [`GraphBuilder`] and immutable afterwards.
/// Every edge appears in the out-list of its source and in the in-list of
/// its target, and nowhere else.
#[derive(Clone, Debug)]
pub struct Graph<C = f64> {
    vertices: Vec<Vertex>,
    edges: Vec<Edge<C>>,
    ids: FxIndexMap<String, VertexId>,
}

impl<C: Float> Graph<C> {

    /// Vertices in insertion order - this order is also the search tie-break order
    pub fn vertices(&self) -> impl ExactSizeIterator<Item = (VertexId, &Vertex)> + '_ {
        self.vertices.iter().enumerate().map(|(i, v)| (VertexId(i), v))
    }

    pub fn vertex_ids(&self) -> impl DoubleEndedIterator<Item = VertexId> + ExactSizeIterator + '_ {
        (0..self.vertices.len()).map(VertexId)
    }

    pub fn edges(&self) -> impl ExactSizeIterator<Item = (EdgeId, &Edge<C>)> + '_ {
        self.edges.iter().enumerate().map(|(i, e)| (EdgeId(i), e))
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn contains_vertex(&self, vertex: VertexId) -> bool {
        vertex.0 < self.vertices.len()
    }

    pub fn vertex(&self, vertex: VertexId) -> Result<&Vertex, GraphError> {
        self.vertices
            .get(vertex.0)
            .ok_or(GraphError::VertexNotFound(vertex))
    }

    pub fn edge(&self, edge: EdgeId) -> Result<&Edge<C>, GraphError> {
        self.edges
            .get(edge.0)
            .ok_or(GraphError::EdgeNotFound(edge))
    }

    /// Look up a vertex by its string id
    pub fn find_vertex(&self, id: &str) -> Option<VertexId> {
        self.ids.get(id).copied()
    }

    /// Edges whose source is `vertex`
    pub fn out_edges(&self, vertex: VertexId) -> Result<&[EdgeId], GraphError> {
        Ok(self.vertex(vertex)?.out_edges())
    }

    /// Edges whose target is `vertex`
    pub fn in_edges(&self, vertex: VertexId) -> Result<&[EdgeId], GraphError> {
        Ok(self.vertex(vertex)?.in_edges())
    }

    /// String id of a vertex, or its index when it is not part of the graph
    pub(crate) fn label(&self, vertex: VertexId) -> String {
        match self.vertices.get(vertex.0) {
            Some(v) => v.id.clone(),
            None => vertex.to_string(),
        }
    }
}
