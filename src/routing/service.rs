use std::{cmp::Ordering, collections::BinaryHeap, time::Instant};

use log::{debug, trace, warn};
use num_traits::Float;

use crate::errors::{GraphError, RoutingError};
use crate::graph::{EdgeId, Graph, VertexId};
use super::config::{RoutingConfig, Selection};
use super::path_tree::PathTree;


/// Result of a successful search
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Route<C = f64> {
    origin: VertexId,
    destination: VertexId,
    edges: Vec<EdgeId>, // origin to destination
    cost: C,
}

impl<C: Float> Route<C> {

    /// Vertex the route starts at
    pub fn origin(&self) -> VertexId {
        self.origin
    }

    /// Vertex the route ends at
    pub fn destination(&self) -> VertexId {
        self.destination
    }

    /// Edges in travel order, origin to destination
    pub fn edges(&self) -> &[EdgeId] {
        &self.edges
    }

    /// Sum of the edge lengths
    pub fn cost(&self) -> C {
        self.cost
    }

    /// Number of edges on the route
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    /// True when origin and destination are the same vertex
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Vertices along the route, origin and destination included
    pub fn vertices(&self, graph: &Graph<C>) -> Result<Vec<VertexId>, GraphError> {
        let mut vertices = Vec::with_capacity(self.edges.len() + 1);
        vertices.push(self.origin);
        for &edge in &self.edges {
            vertices.push(graph.edge(edge)?.target());
        }
        Ok(vertices)
    }

    /// Consume the route, keeping only its edges
    pub fn into_edges(self) -> Vec<EdgeId> {
        self.edges
    }
}


/// Find routes using Dijkstra's algorithm
/// https://en.wikipedia.org/wiki/Dijkstra%27s_algorithm
///
/// The service only borrows the graph. Every search builds its own
/// [`PathTree`], so one service (or many) can search the same graph from
/// several threads at once.
#[derive(Clone, Copy, Debug)]
pub struct RoutingService<'g, C = f64> {
    graph: &'g Graph<C>,
    config: RoutingConfig,
}

impl<'g, C: Float> RoutingService<'g, C> {

    pub fn new(graph: &'g Graph<C>) -> Self {
        Self::with_config(graph, RoutingConfig::default())
    }

    pub fn with_config(graph: &'g Graph<C>, config: RoutingConfig) -> Self {
        Self { graph, config }
    }

    pub fn graph(&self) -> &'g Graph<C> {
        self.graph
    }

    pub fn config(&self) -> &RoutingConfig {
        &self.config
    }

    /// Find the route of minimum total length from `origin` to `destination`
    ///
    /// The search stops as soon as the destination is visited, its cost is
    /// final at that point.
    pub fn find_route(&self, origin: VertexId, destination: VertexId) -> Result<Route<C>, RoutingError> {
        if !self.graph.contains_vertex(destination) {
            return Err(GraphError::VertexNotFound(destination).into());
        }

        debug!(
            "searching route from '{}' to '{}'",
            self.graph.label(origin),
            self.graph.label(destination)
        );

        // the origin is reached at cost zero before any selection, so the
        // trivial route never waits on the search loop or its deadline
        if origin == destination {
            if !self.graph.contains_vertex(origin) {
                return Err(GraphError::VertexNotFound(origin).into());
            }
            return Ok(Route {
                origin,
                destination,
                edges: Vec::new(),
                cost: C::zero(),
            });
        }

        let tree = self.search(origin, Some(destination))?;
        let node = tree.node(destination)?;

        if !node.is_visited() {
            debug!(
                "no route from '{}' to '{}'",
                self.graph.label(origin),
                self.graph.label(destination)
            );
            return Err(RoutingError::RouteNotFound {
                origin: self.graph.label(origin),
                destination: self.graph.label(destination),
            });
        }

        let edges = tree.path(destination)?;
        debug!("route found with {} edges, cost {}", edges.len(), to_display(node.cost()));

        Ok(Route {
            origin,
            destination,
            edges,
            cost: node.cost(),
        })
    }

    /// Run the search to exhaustion and return the settled tree
    /// Every vertex reachable from `origin` ends up visited with its final cost.
    pub fn shortest_path_tree(&self, origin: VertexId) -> Result<PathTree<'g, C>, RoutingError> {
        debug!("building shortest path tree from '{}'", self.graph.label(origin));
        self.search(origin, None)
    }

    /// Main loop - select, visit, stop once `destination` (if any) is visited
    fn search(&self, origin: VertexId, destination: Option<VertexId>) -> Result<PathTree<'g, C>, RoutingError> {
        let mut tree = PathTree::new(self.graph, origin)?;
        let mut frontier = Frontier::new(self.config.selection, origin);
        let started = self.config.deadline.map(|_| Instant::now());

        loop {
            if let (Some(deadline), Some(started)) = (self.config.deadline, started) {
                let elapsed = started.elapsed();
                if elapsed >= deadline {
                    warn!("search from '{}' aborted after {:?}", self.graph.label(origin), elapsed);
                    return Err(RoutingError::DeadlineExceeded { elapsed });
                }
            }

            let Some(current) = frontier.next(&tree)? else {
                break;
            };

            self.visit(&mut tree, &mut frontier, current)?;

            if let Some(destination) = destination {
                if tree.node(destination)?.is_visited() {
                    break;
                }
            }
        }

        Ok(tree)
    }

    /// Relax every out edge of `vertex`, then mark it visited
    fn visit(&self, tree: &mut PathTree<'g, C>, frontier: &mut Frontier<C>, vertex: VertexId) -> Result<(), RoutingError> {
        let cost = tree.cost(vertex)?;
        trace!("visiting '{}' at cost {}", self.graph.label(vertex), to_display(cost));

        for &edge_id in self.graph.out_edges(vertex)? {
            if tree.relax(edge_id)? {
                let target = self.graph.edge(edge_id)?.target();
                let cost = tree.cost(target)?;
                trace!("reached '{}' at cost {}", self.graph.label(target), to_display(cost));
                frontier.push(target, cost);
            }
        }

        tree.mark_visited(vertex)?;
        Ok(())
    }
}


fn to_display<C: Float>(cost: C) -> f64 {
    cost.to_f64().unwrap_or(f64::NAN)
}


/// Source of the next vertex to visit
enum Frontier<C> {
    Scan,
    Heap(BinaryHeap<HeapEntry<C>>),
}

impl<C: Float> Frontier<C> {
    fn new(selection: Selection, origin: VertexId) -> Self {
        match selection {
            Selection::LinearScan => Frontier::Scan,
            Selection::BinaryHeap => {
                let mut heap = BinaryHeap::new();
                heap.push(HeapEntry { vertex: origin, cost: C::zero() });
                Frontier::Heap(heap)
            }
        }
    }

    fn push(&mut self, vertex: VertexId, cost: C) {
        if let Frontier::Heap(heap) = self {
            heap.push(HeapEntry { vertex, cost });
        }
    }

    /// Nearest unvisited vertex with a finite cost, if any
    fn next(&mut self, tree: &PathTree<'_, C>) -> Result<Option<VertexId>, GraphError> {
        match self {
            Frontier::Scan => {
                let mut candidate: Option<(VertexId, C)> = None;

                for (vertex, node) in tree.nodes() {
                    if node.is_visited() || !node.is_reached() {
                        continue;
                    }
                    // strict comparison keeps the first vertex in graph order on ties
                    if candidate.is_none_or(|(_, best)| node.cost() < best) {
                        candidate = Some((vertex, node.cost()));
                    }
                }

                Ok(candidate.map(|(vertex, _)| vertex))
            }
            Frontier::Heap(heap) => {
                while let Some(HeapEntry { vertex, cost }) = heap.pop() {
                    let node = tree.node(vertex)?;
                    // stale entry, a better cost was pushed later or the vertex is done
                    if node.is_visited() || cost > node.cost() {
                        continue;
                    }
                    return Ok(Some(vertex));
                }
                Ok(None)
            }
        }
    }
}


/// Heap entry - ordered by cost only, smallest first
/// Equal costs fall back to the lower vertex index to keep results deterministic.
#[derive(Debug)]
struct HeapEntry<C> {
    vertex: VertexId,
    cost: C,
}

impl<C: Float> Ord for HeapEntry<C> {
    fn cmp(&self, other: &Self) -> Ordering {
        other.cost
            .partial_cmp(&self.cost)
            .unwrap_or(Ordering::Equal)
            .then_with(|| other.vertex.cmp(&self.vertex))
    }
}
impl<C: Float> PartialOrd for HeapEntry<C> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl<C: Float> PartialEq for HeapEntry<C> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}
impl<C: Float> Eq for HeapEntry<C> {}
