//! Re-exports of the most commonly used items in `route_core`.
pub use crate::constants::{NodeId, Weight};
pub use crate::error::{GraphError, SearchError, SearchOutcomeError};

pub use crate::search;
pub use crate::search::compare::{compare, Comparison};
pub use crate::search::{astar::AStar, dijkstra::Dijkstra};
pub use crate::search::{search, Algorithm, SearchResult};

pub use crate::graph::{EdgeRecord, Graph, Node};
pub use crate::util::math::straight_line;
