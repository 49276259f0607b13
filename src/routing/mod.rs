mod config;
mod path_tree;
mod service;

pub use config::{RoutingConfig, Selection};
pub use path_tree::{NodeState, PathNode, PathTree};
pub use service::{Route, RoutingService};
