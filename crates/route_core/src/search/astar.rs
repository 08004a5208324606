//! Implementation of the A* search algorithm.
use log::{debug, info};

use crate::{
    constants::{NodeId, Weight},
    error::SearchError,
    graph::{Graph, Node},
    priority_queue::HeapItem,
    statistics::SearchStats,
    util::math::straight_line,
};

use super::{reconstruct_path, state::SearchState, validate, Algorithm, SearchResult};

pub struct AStar<'a> {
    pub stats: SearchStats,
    g: &'a Graph,
}

impl<'a> AStar<'a> {
    pub fn new(g: &'a Graph) -> Self {
        AStar {
            g,
            stats: SearchStats::default(),
        }
    }

    /// A* guided by the great-circle distance to the target.
    pub fn search(&mut self, source: NodeId, target: NodeId) -> Result<SearchResult, SearchError> {
        self.search_with(source, target, straight_line)
    }

    /// A* with a custom heuristic `h(node, target)`.
    ///
    /// Settled nodes are never reopened, so the returned path is only
    /// guaranteed to be a shortest path if the heuristic is consistent:
    /// `h(u) <= w(u, v) + h(v)` for every edge and `h(target) == 0`.
    /// An admissible but inconsistent heuristic still yields a valid path,
    /// possibly a longer one. [`straight_line`] is consistent.
    pub fn search_with(
        &mut self,
        source: NodeId,
        target: NodeId,
        heuristic: impl Fn(&Node, &Node) -> Weight,
    ) -> Result<SearchResult, SearchError> {
        self.stats = SearchStats::default();
        validate(self.g, source, target)?;
        let (Some(source_node), Some(target_node)) = (self.g.node(source), self.g.node(target))
        else {
            return Err(SearchError::InvalidNodes {
                start: source,
                end: target,
            });
        };

        info!("BEGIN ASTAR SEARCH from {:?} to {:?}", source, target);
        self.stats.init();

        let mut state = SearchState::new(source, heuristic(source_node, target_node));

        while let Some(HeapItem { node, .. }) = state.queue.pop() {
            if !state.settle(node) {
                continue;
            }

            if node == target {
                break;
            }

            let real_weight = state.cost(node);
            for (neighbor, edge_weight) in self.g.neighbors(node) {
                if state.is_closed(neighbor) {
                    continue;
                }

                let real_weight = real_weight + edge_weight;
                if real_weight < state.cost(neighbor) {
                    let neighbor_node = self.g.node(neighbor).unwrap_or_else(|| {
                        panic!("Edge {} -> {} leads to an unknown node", node, neighbor)
                    });
                    let tentative_weight = real_weight + heuristic(neighbor_node, target_node);

                    state.relax(node, neighbor, real_weight, tentative_weight);
                }
            }
        }

        self.stats.nodes_settled = state.nodes_settled();
        self.stats.queue_pushes = state.queue.pushes();
        self.stats.finish();

        let sp = reconstruct_path(target, source, state.cost(target), state.predecessors());
        if let Some(sp) = &sp {
            debug!("Path found: {:?}", sp);
            info!("{}, weight: {}", self.stats, sp.weight);
        } else {
            info!(
                "No path found: {:?}/{} nodes settled",
                self.stats.elapsed(),
                self.stats.nodes_settled
            );
        }

        Ok(SearchResult {
            algorithm: Algorithm::HeuristicGuided,
            path: sp,
            visited_nodes: state.into_settle_order(),
            stats: self.stats.clone(),
        })
    }
}
