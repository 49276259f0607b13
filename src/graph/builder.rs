use indexmap::map::Entry::{Occupied, Vacant};
use num_traits::Float;

use crate::collections::FxIndexMap;
use crate::errors::GraphError;
use super::{Coordinate, Edge, EdgeId, Graph, Vertex, VertexId};


/// Assembles a [`Graph`]
/// Adjacency lists are filled as edges are added, so the built graph is
/// consistent by construction.
#[derive(Debug)]
pub struct GraphBuilder<C = f64> {
    vertices: Vec<Vertex>,
    edges: Vec<Edge<C>>,
    ids: FxIndexMap<String, VertexId>,
}

impl<C: Float> Default for GraphBuilder<C> {
    fn default() -> Self {
        Self {
            vertices: Vec::new(),
            edges: Vec::new(),
            ids: FxIndexMap::default(),
        }
    }
}

impl<C: Float> GraphBuilder<C> {

    pub fn new() -> Self {
        Self::default()
    }

    /// Add a vertex, ids must be unique
    pub fn add_vertex(&mut self, id: impl Into<String>, coordinate: Coordinate) -> Result<VertexId, GraphError> {
        let vertex_id = VertexId(self.vertices.len());

        match self.ids.entry(id.into()) {
            Occupied(e) => Err(GraphError::DuplicateVertex(e.key().clone())),
            Vacant(e) => {
                self.vertices.push(Vertex {
                    id: e.key().clone(),
                    coordinate,
                    out_edges: Vec::new(),
                    in_edges: Vec::new(),
                });
                e.insert(vertex_id);
                Ok(vertex_id)
            }
        }
    }

    /// Add a directed edge from `source` to `target`
    /// Negative and NaN lengths are refused, Dijkstra relaxation is only
    /// correct for non-negative weights.
    pub fn add_edge(&mut self, source: VertexId, target: VertexId, length: C) -> Result<EdgeId, GraphError> {
        for vertex in [source, target] {
            if vertex.0 >= self.vertices.len() {
                return Err(GraphError::VertexNotFound(vertex));
            }
        }

        if length.is_nan() || length < C::zero() {
            return Err(GraphError::InvalidLength {
                source_vertex: source,
                target_vertex: target,
                length: length.to_f64().unwrap_or(f64::NAN),
            });
        }

        let edge_id = EdgeId(self.edges.len());
        self.edges.push(Edge { source, target, length });
        self.vertices[source.0].out_edges.push(edge_id);
        self.vertices[target.0].in_edges.push(edge_id);

        Ok(edge_id)
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn build(self) -> Graph<C> {
        Graph {
            vertices: self.vertices,
            edges: self.edges,
            ids: self.ids,
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_vertex_id() {
        let mut builder: GraphBuilder = GraphBuilder::new();
        builder.add_vertex("A", Coordinate::default()).unwrap();
        let result = builder.add_vertex("A", Coordinate::new(3.0, 4.0));
        assert_eq!(result, Err(GraphError::DuplicateVertex("A".to_string())));
        assert_eq!(builder.vertex_count(), 1);
    }

    #[test]
    fn test_edge_with_unknown_endpoint() {
        let mut builder: GraphBuilder = GraphBuilder::new();
        let a = builder.add_vertex("A", Coordinate::default()).unwrap();
        let result = builder.add_edge(a, VertexId(7), 1.0);
        assert_eq!(result, Err(GraphError::VertexNotFound(VertexId(7))));
    }

    #[test]
    fn test_invalid_lengths_are_refused() {
        let mut builder: GraphBuilder<f32> = GraphBuilder::new();
        let a = builder.add_vertex("A", Coordinate::default()).unwrap();
        let b = builder.add_vertex("B", Coordinate::default()).unwrap();

        assert!(matches!(builder.add_edge(a, b, -1.0), Err(GraphError::InvalidLength { length, .. }) if length == -1.0));
        assert!(matches!(builder.add_edge(a, b, f32::NAN), Err(GraphError::InvalidLength { .. })));

        // zero and infinite lengths are still non-negative
        assert!(builder.add_edge(a, b, 0.0).is_ok());
        assert!(builder.add_edge(b, a, f32::INFINITY).is_ok());

        let graph = builder.build();
        assert_eq!(graph.edge_count(), 2);
    }

    #[test]
    fn test_self_loop_and_parallel_edges() {
        let mut builder: GraphBuilder = GraphBuilder::new();
        let a = builder.add_vertex("A", Coordinate::default()).unwrap();
        let b = builder.add_vertex("B", Coordinate::default()).unwrap();
        let looped = builder.add_edge(a, a, 2.0).unwrap();
        builder.add_edge(a, b, 1.0).unwrap();
        builder.add_edge(a, b, 3.0).unwrap();

        let graph = builder.build();
        assert_eq!(graph.out_edges(a).unwrap().len(), 3);
        assert_eq!(graph.in_edges(a).unwrap(), &[looped]);
        assert_eq!(graph.in_edges(b).unwrap().len(), 2);
    }
}
