use std::{fmt, time::Duration};

use crate::{
    constants::{NodeId, Weight},
    error::SearchError,
    graph::Graph,
};

use super::{astar::AStar, dijkstra::Dijkstra, SearchResult};

/// Both searches for the same start/target pair side by side.
#[derive(Debug, Clone)]
pub struct Comparison {
    pub dijkstra: SearchResult,
    pub astar: SearchResult,
}

impl Comparison {
    /// `true` if both searches found a path
    pub fn is_found(&self) -> bool {
        self.dijkstra.is_found() && self.astar.is_found()
    }

    /// Absolute difference of the path lengths. Should be zero up to
    /// floating point error.
    pub fn path_length_diff(&self) -> Option<Weight> {
        Some((self.dijkstra.distance()? - self.astar.distance()?).abs())
    }

    /// How many more nodes Dijkstra settled than A*
    pub fn nodes_checked_diff(&self) -> Option<i64> {
        self.is_found()
            .then(|| self.dijkstra.nodes_visited() as i64 - self.astar.nodes_visited() as i64)
    }

    pub fn time_diff(&self) -> Option<Duration> {
        if !self.is_found() {
            return None;
        }
        let (a, b) = (self.dijkstra.elapsed(), self.astar.elapsed());
        Some(if a > b { a - b } else { b - a })
    }
}

/// Runs Dijkstra and A* from `start` to `end` on the same graph.
pub fn compare(g: &Graph, start: NodeId, end: NodeId) -> Result<Comparison, SearchError> {
    let dijkstra = Dijkstra::new(g).search(start, end)?;
    let astar = AStar::new(g).search(start, end)?;

    Ok(Comparison { dijkstra, astar })
}

impl fmt::Display for Comparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for res in [&self.dijkstra, &self.astar] {
            match res.distance() {
                Some(distance) => writeln!(
                    f,
                    "{:<9} {:>10.1} m  {:>6} nodes  {:?}",
                    res.algorithm,
                    distance,
                    res.nodes_visited(),
                    res.elapsed()
                )?,
                None => writeln!(
                    f,
                    "{:<9} no path    {:>6} nodes  {:?}",
                    res.algorithm,
                    res.nodes_visited(),
                    res.elapsed()
                )?,
            }
        }
        match (
            self.path_length_diff(),
            self.nodes_checked_diff(),
            self.time_diff(),
        ) {
            (Some(length), Some(nodes), Some(time)) => write!(
                f,
                "path length diff: {:.3} m, nodes checked diff: {}, time diff: {:?}",
                length, nodes, time
            ),
            _ => write!(f, "No path found"),
        }
    }
}
