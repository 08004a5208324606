//! Point to point shortest path searches on a [`Graph`].
//!
//! Both algorithms share the same scaffolding: a lazily updated priority
//! queue, a set of settled nodes and a predecessor map. They differ only in
//! the queue priority. [`dijkstra::Dijkstra`] uses the cost from the start,
//! [`astar::AStar`] adds the straight line distance to the target.
use std::{fmt, str::FromStr, time::Duration};

use rustc_hash::FxHashMap;

use crate::{
    constants::{NodeId, Weight},
    error::{ParseAlgorithmError, SearchError, SearchOutcomeError},
    graph::Graph,
    statistics::SearchStats,
};

use self::shortest_path::ShortestPath;

pub mod astar;
pub mod compare;
pub mod dijkstra;
pub mod shortest_path;
mod state;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    /// Uniform-cost search (Dijkstra)
    UniformCost,
    /// A* with the great-circle distance as heuristic
    HeuristicGuided,
}

impl Algorithm {
    pub fn all() -> [Algorithm; 2] {
        [Algorithm::UniformCost, Algorithm::HeuristicGuided]
    }
}

impl FromStr for Algorithm {
    type Err = ParseAlgorithmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "dijkstra" | "uniform-cost" | "ucs" => Ok(Algorithm::UniformCost),
            "astar" | "a*" | "heuristic-guided" => Ok(Algorithm::HeuristicGuided),
            _ => Err(ParseAlgorithmError(s.to_string())),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Algorithm::UniformCost => write!(f, "dijkstra"),
            Algorithm::HeuristicGuided => write!(f, "astar"),
        }
    }
}

/// Outcome of one search call. Owned by the caller.
#[derive(Debug, Clone)]
pub struct SearchResult {
    pub algorithm: Algorithm,
    /// `None` if the target could not be reached
    pub path: Option<ShortestPath>,
    /// Settled nodes in the order they were settled, for replaying the search
    pub visited_nodes: Vec<NodeId>,
    pub stats: SearchStats,
}

impl SearchResult {
    pub fn path(&self) -> Option<&[NodeId]> {
        self.path.as_ref().map(|sp| sp.nodes.as_slice())
    }

    /// Length of the path in meters
    pub fn distance(&self) -> Option<Weight> {
        self.path.as_ref().map(|sp| sp.weight)
    }

    pub fn nodes_visited(&self) -> usize {
        self.visited_nodes.len()
    }

    pub fn elapsed(&self) -> Duration {
        self.stats.elapsed()
    }

    pub fn is_found(&self) -> bool {
        self.path.is_some()
    }

    pub fn error(&self) -> Option<SearchOutcomeError> {
        match self.path {
            Some(_) => None,
            None => Some(SearchOutcomeError::NoPathFound {
                nodes_visited: self.nodes_visited(),
            }),
        }
    }
}

/// Runs `algorithm` from `start` to `end`.
///
/// Returns [`SearchError::InvalidNodes`] without touching the queue if either
/// id is not part of the graph. An unreachable target is not an error, see
/// [`SearchResult::error`].
pub fn search(
    algorithm: Algorithm,
    g: &Graph,
    start: NodeId,
    end: NodeId,
) -> Result<SearchResult, SearchError> {
    match algorithm {
        Algorithm::UniformCost => dijkstra::Dijkstra::new(g).search(start, end),
        Algorithm::HeuristicGuided => astar::AStar::new(g).search(start, end),
    }
}

pub(crate) fn validate(g: &Graph, start: NodeId, end: NodeId) -> Result<(), SearchError> {
    if g.contains(start) && g.contains(end) {
        Ok(())
    } else {
        Err(SearchError::InvalidNodes { start, end })
    }
}

/// Walks the predecessor chain back from `target`. Returns `None` if the
/// chain does not end in `source`.
///
/// **Panics** if the chain contains a cycle.
pub fn reconstruct_path(
    target: NodeId,
    source: NodeId,
    weight: Weight,
    predecessor: &FxHashMap<NodeId, NodeId>,
) -> Option<ShortestPath> {
    let mut path = vec![target];
    let mut current = target;

    while let Some(&prev) = predecessor.get(&current) {
        assert!(
            path.len() <= predecessor.len(),
            "Cycle in predecessor chain at node {}",
            prev
        );
        path.push(prev);
        current = prev;
    }

    if current != source {
        return None;
    }

    path.reverse();
    Some(ShortestPath::new(path, weight))
}

#[cfg(test)]
pub(crate) fn init_log() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[cfg(test)]
pub(crate) fn assert_no_path(res: Result<SearchResult, SearchError>) {
    let res = res.expect("search rejected its input");
    assert_eq!(None, res.path);
    assert!(matches!(
        res.error(),
        Some(SearchOutcomeError::NoPathFound { .. })
    ));
}

#[cfg(test)]
pub(crate) fn assert_path(
    expected_path: Vec<NodeId>,
    expected_weight: Weight,
    res: Result<SearchResult, SearchError>,
) {
    let res = res.expect("search rejected its input");
    let sp = res.path.expect("no path found");
    assert_eq!(expected_path, sp.nodes);
    approx::assert_abs_diff_eq!(expected_weight, sp.weight, epsilon = 1e-9);
}

/// Checks that `sp` is a walk from `start` to `end` along existing edges whose
/// weights add up to the reported distance.
#[cfg(test)]
pub(crate) fn assert_valid_path(g: &Graph, start: NodeId, end: NodeId, sp: &ShortestPath) {
    assert_eq!(sp.nodes.first(), Some(&start));
    assert_eq!(sp.nodes.last(), Some(&end));

    let sum: Weight = sp
        .nodes
        .windows(2)
        .map(|pair| {
            g.weight(pair[0], pair[1])
                .unwrap_or_else(|| panic!("{} -> {} is not an edge", pair[0], pair[1]))
        })
        .sum();
    approx::assert_relative_eq!(sum, sp.weight, max_relative = 1e-6);
}
