use num_traits::Float;

use crate::errors::GraphError;
use crate::graph::{EdgeId, Graph, VertexId};


/// Search progress of a single vertex
/// Unreached -> Reached -> Visited, never backwards
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NodeState {
    Unreached,
    Reached,
    Visited,
}

/// Per-vertex state of one search
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PathNode<C> {
    cost: C, // best known cost from the origin, infinity when unreached
    reaching_edge: Option<EdgeId>,
    visited: bool,
}

impl<C: Float> PathNode<C> {
    fn new() -> Self {
        Self {
            cost: C::infinity(),
            reaching_edge: None,
            visited: false,
        }
    }

    pub fn cost(&self) -> C {
        self.cost
    }

    /// Last edge of the best known path, `None` for the origin and unreached vertices
    pub fn reaching_edge(&self) -> Option<EdgeId> {
        self.reaching_edge
    }

    pub fn is_visited(&self) -> bool {
        self.visited
    }

    pub fn is_reached(&self) -> bool {
        self.cost.is_finite()
    }

    pub fn state(&self) -> NodeState {
        if self.visited {
            NodeState::Visited
        } else if self.is_reached() {
            NodeState::Reached
        } else {
            NodeState::Unreached
        }
    }
}


/// Algorithm state for one search rooted at one origin
///
/// Nodes are stored in a flat vector parallel to the graph's vertex arena.
/// A tree is built per search and never reused, so concurrent searches over
/// the same graph do not share any mutable state.
#[derive(Clone, Debug)]
pub struct PathTree<'g, C = f64> {
    graph: &'g Graph<C>,
    origin: VertexId,
    nodes: Vec<PathNode<C>>,
}

impl<'g, C: Float> PathTree<'g, C> {

    /// One unvisited node per vertex, the origin at cost zero and every other vertex unreached
    pub fn new(graph: &'g Graph<C>, origin: VertexId) -> Result<Self, GraphError> {
        if !graph.contains_vertex(origin) {
            return Err(GraphError::VertexNotFound(origin));
        }

        let mut nodes = vec![PathNode::new(); graph.vertex_count()];
        nodes[origin.index()].cost = C::zero();

        Ok(Self { graph, origin, nodes })
    }

    pub fn origin(&self) -> VertexId {
        self.origin
    }

    pub fn graph(&self) -> &'g Graph<C> {
        self.graph
    }

    /// Vertices covered by the tree, in graph order
    pub fn vertices(&self) -> impl ExactSizeIterator<Item = VertexId> + '_ {
        self.graph.vertex_ids()
    }

    /// Iterate vertices with their nodes, in graph order
    pub fn nodes(&self) -> impl ExactSizeIterator<Item = (VertexId, &PathNode<C>)> + '_ {
        self.graph.vertex_ids().zip(self.nodes.iter())
    }

    pub fn node(&self, vertex: VertexId) -> Result<&PathNode<C>, GraphError> {
        self.nodes
            .get(vertex.index())
            .ok_or(GraphError::VertexNotFound(vertex))
    }

    pub(crate) fn node_mut(&mut self, vertex: VertexId) -> Result<&mut PathNode<C>, GraphError> {
        self.nodes
            .get_mut(vertex.index())
            .ok_or(GraphError::VertexNotFound(vertex))
    }

    pub fn cost(&self, vertex: VertexId) -> Result<C, GraphError> {
        Ok(self.node(vertex)?.cost)
    }

    /// Try to reach the target of `edge` through its source with a lower cost
    /// Returns true if the target node was updated. Visited targets are frozen.
    pub(crate) fn relax(&mut self, edge_id: EdgeId) -> Result<bool, GraphError> {
        let edge = *self.graph.edge(edge_id)?;
        let source_cost = self.node(edge.source())?.cost;
        let target = self.node_mut(edge.target())?;

        if target.visited {
            return Ok(false);
        }

        // strict comparison - the cost of a node only ever decreases
        let new_cost = source_cost + edge.length();
        if new_cost < target.cost {
            target.cost = new_cost;
            target.reaching_edge = Some(edge_id);
            return Ok(true);
        }

        Ok(false)
    }

    pub(crate) fn mark_visited(&mut self, vertex: VertexId) -> Result<(), GraphError> {
        self.node_mut(vertex)?.visited = true;
        Ok(())
    }

    /// Edges from the origin to `destination`, following reaching edges backwards
    ///
    /// An unreached destination yields an empty path, so check its cost first
    /// when unreachability matters.
    pub fn path(&self, destination: VertexId) -> Result<Vec<EdgeId>, GraphError> {
        let mut path = Vec::new();
        let mut current = self.node(destination)?;

        // Trace back from destination to origin
        while let Some(edge_id) = current.reaching_edge {
            path.push(edge_id);
            current = self.node(self.graph.edge(edge_id)?.source())?;
        }

        // The path is in reverse order, so reverse it
        path.reverse();

        Ok(path)
    }
}
