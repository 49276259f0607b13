//! Shortest routes on directed, edge-weighted graphs
//!
//! - [`Graph`] is an immutable arena of vertices and directed edges, assembled
//!   with a [`GraphBuilder`]
//! - [`PathTree`] holds the cost, reaching edge and visited flag of every
//!   vertex for one search
//! - [`RoutingService`] runs Dijkstra's algorithm and returns a [`Route`] or
//!   [`RoutingError::RouteNotFound`]
//!
//! Edge lengths must be non-negative, the builder refuses anything else.
//!
//! ```
//! use routegraph::{Coordinate, GraphBuilder, RoutingService};
//!
//! let mut builder = GraphBuilder::new();
//! let a = builder.add_vertex("A", Coordinate::new(0.0, 0.0)).unwrap();
//! let b = builder.add_vertex("B", Coordinate::new(1.0, 0.0)).unwrap();
//! builder.add_edge(a, b, 1.5).unwrap();
//! let graph = builder.build();
//!
//! let route = RoutingService::new(&graph).find_route(a, b).unwrap();
//! assert_eq!(route.cost(), 1.5);
//! ```

mod collections;
pub mod errors;
pub mod graph;
pub mod routing;

pub use errors::{GraphError, RoutingError};
pub use graph::{Coordinate, Edge, EdgeId, Graph, GraphBuilder, Vertex, VertexId};
pub use routing::{NodeState, PathNode, PathTree, Route, RoutingConfig, RoutingService, Selection};
