use thiserror::Error;

use crate::constants::{NodeId, Weight};

/// Errors raised while building a [`Graph`](crate::graph::Graph).
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GraphError {
    #[error("Unknown node {0}, nodes must be added before edges reference them")]
    UnknownNode(NodeId),
    #[error("Invalid weight {weight} for edge {source_id} <-> {target_id}")]
    InvalidWeight {
        source_id: NodeId,
        target_id: NodeId,
        weight: Weight,
    },
}

/// Caller errors of a search. No computation is performed when one of these is returned.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchError {
    #[error("Invalid nodes: start {start} or end {end} is not part of the graph")]
    InvalidNodes { start: NodeId, end: NodeId },
}

/// Non-fatal outcome of a finished search, carried by the result itself.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchOutcomeError {
    #[error("No path found ({nodes_visited} nodes settled)")]
    NoPathFound { nodes_visited: usize },
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueueError {
    #[error("Priority queue is empty")]
    Empty,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid algorithm {0:?} (dijkstra or astar)")]
pub struct ParseAlgorithmError(pub String);
