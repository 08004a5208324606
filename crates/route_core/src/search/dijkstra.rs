use log::{debug, info};

use crate::constants::NodeId;
use crate::error::SearchError;
use crate::graph::Graph;
use crate::priority_queue::HeapItem;
use crate::statistics::SearchStats;

use super::state::SearchState;
use super::{reconstruct_path, validate, Algorithm, SearchResult};

/// Uniform-cost search. Settles nodes in order of their distance from the
/// start and stops as soon as the target is settled.
pub struct Dijkstra<'a> {
    pub stats: SearchStats,
    g: &'a Graph,
}

impl<'a> Dijkstra<'a> {
    pub fn new(graph: &'a Graph) -> Self {
        Dijkstra {
            g: graph,
            stats: SearchStats::default(),
        }
    }

    pub fn search(&mut self, source: NodeId, target: NodeId) -> Result<SearchResult, SearchError> {
        self.stats = SearchStats::default();
        validate(self.g, source, target)?;

        info!("BEGIN DIJKSTRA SEARCH from {} to {}", source, target);
        self.stats.init();

        let mut state = SearchState::new(source, 0.0);

        while let Some(HeapItem { node, .. }) = state.queue.pop() {
            if !state.settle(node) {
                // Stale entry, node was settled with a smaller distance
                continue;
            }

            if node == target {
                break;
            }

            let weight = state.cost(node);
            for (neighbor, edge_weight) in self.g.neighbors(node) {
                if state.is_closed(neighbor) {
                    continue;
                }

                let new_distance = weight + edge_weight;
                if new_distance < state.cost(neighbor) {
                    state.relax(node, neighbor, new_distance, new_distance);
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
            algorithm: Algorithm::UniformCost,
            path: sp,
            visited_nodes: state.into_settle_order(),
            stats: self.stats.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::search::{assert_no_path, assert_path, assert_valid_path, init_log};
    use crate::util::test_graphs::{
        generate_campus_graph, generate_disconnected_graph, generate_simple_graph,
    };

    use super::*;

    #[test]
    fn simple_path() {
        init_log();
        let g = generate_simple_graph();

        let mut d = Dijkstra::new(&g);

        assert_path(vec![0, 5, 7, 8, 9, 4], 13.0, d.search(0, 4));
        assert_path(vec![4, 9, 8, 7, 5, 0], 13.0, d.search(4, 0));
        assert_path(vec![6, 5, 0, 1, 2, 3], 9.0, d.search(6, 3));
        assert_path(vec![4], 0.0, d.search(4, 4));
        assert_path(vec![1, 0, 5, 7, 8, 9, 4], 14.0, d.search(1, 4));
    }

    #[test]
    fn disconnected_graph() {
        // 0 -- 1 -- 2
        // 3 -- 4 -- 5
        // 6
        let g = generate_disconnected_graph();

        let mut d = Dijkstra::new(&g);

        assert_no_path(d.search(0, 3));
        assert_no_path(d.search(3, 0));
        assert_path(vec![0, 1, 2], 2.0, d.search(0, 2));
        assert_path(vec![3, 4, 5], 4.0, d.search(3, 5));
    }

    #[test]
    fn no_path_reports_component() {
        let g = generate_disconnected_graph();

        let res = Dijkstra::new(&g).search(1, 6).unwrap();
        assert!(res.path.is_none());
        assert_eq!(res.nodes_visited(), 3);
        assert_eq!(res.visited_nodes[0], 1);
        let mut visited = res.visited_nodes.clone();
        visited.sort();
        assert_eq!(visited, vec![0, 1, 2]);

        // The isolated node only reaches itself
        let res = Dijkstra::new(&g).search(6, 0).unwrap();
        assert_eq!(res.visited_nodes, vec![6]);
    }

    #[test]
    fn go_around() {
        // 0 -- 1
        // |    |
        // 2 -- 3
        let mut g = Graph::new();
        for i in 0..4 {
            g.add_node(i, 0.0, 0.0);
        }

        g.add_edge(0, 1, 10.0).unwrap();
        g.add_edge(0, 2, 1.0).unwrap();
        g.add_edge(2, 3, 1.0).unwrap();
        g.add_edge(3, 1, 1.0).unwrap();

        let mut d = Dijkstra::new(&g);

        assert_path(vec![0, 2, 3, 1], 3.0, d.search(0, 1));
    }

    #[test]
    fn start_equals_target() {
        let g = generate_campus_graph();
        let mut d = Dijkstra::new(&g);

        let res = d.search(3, 3).unwrap();
        assert_eq!(res.path(), Some(&[3][..]));
        assert_eq!(res.distance(), Some(0.0));
        assert_eq!(res.nodes_visited(), 1);
        assert_eq!(d.stats.nodes_settled, 1);
    }

    #[test]
    fn stops_when_target_is_settled() {
        // A -> B -> D (cost 2) is the shortest path to the target,
        // the expensive branch behind C is never settled
        let mut g = Graph::new();
        for i in 0..6 {
            g.add_node(i, 0.0, 0.0);
        }
        g.add_edge(0, 1, 1.0).unwrap();
        g.add_edge(1, 3, 1.0).unwrap();
        g.add_edge(0, 2, 10.0).unwrap();
        g.add_edge(2, 4, 5.0).unwrap();
        g.add_edge(2, 5, 20.0).unwrap();

        let res = Dijkstra::new(&g).search(0, 3).unwrap();

        assert_eq!(res.visited_nodes, vec![0, 1, 3]);
        assert_eq!(res.distance(), Some(2.0));
    }

    #[test]
    fn stale_entries_are_skipped() {
        // 2 is first queued with 10 and later improved to 2 via 1
        let mut g = Graph::new();
        for i in 0..4 {
            g.add_node(i, 0.0, 0.0);
        }
        g.add_edge(0, 2, 10.0).unwrap();
        g.add_edge(0, 1, 1.0).unwrap();
        g.add_edge(1, 2, 1.0).unwrap();
        g.add_edge(2, 3, 100.0).unwrap();

        let res = Dijkstra::new(&g).search(0, 3).unwrap();

        assert_eq!(res.path(), Some(&[0, 1, 2, 3][..]));
        assert_eq!(res.distance(), Some(102.0));
        // Every node is settled exactly once even though 2 was queued twice
        assert_eq!(res.visited_nodes, vec![0, 1, 2, 3]);
        assert_eq!(res.stats.queue_pushes, 5);
    }

    #[test]
    fn invalid_nodes() {
        let g = generate_campus_graph();
        let mut d = Dijkstra::new(&g);

        assert_eq!(
            d.search(9_999_999, 0).unwrap_err(),
            SearchError::InvalidNodes {
                start: 9_999_999,
                end: 0
            }
        );
        // Rejected before any work was done
        assert!(d.stats.duration.is_none());
        assert_eq!(d.stats.queue_pushes, 0);
    }

    #[test]
    fn rejected_search_clears_previous_stats() {
        let g = generate_campus_graph();
        let mut d = Dijkstra::new(&g);

        d.search(1, 2).unwrap();
        assert!(d.stats.nodes_settled > 0);

        assert!(d.search(1, 9_999_999).is_err());
        assert_eq!(d.stats.nodes_settled, 0);
        assert_eq!(d.stats.queue_pushes, 0);
        assert!(d.stats.duration.is_none());
    }

    #[test]
    fn repeated_searches_are_identical() {
        let g = generate_campus_graph();

        let first = Dijkstra::new(&g).search(1, 6).unwrap();
        let second = Dijkstra::new(&g).search(1, 6).unwrap();

        assert_eq!(first.path, second.path);
        assert_eq!(first.nodes_visited(), second.nodes_visited());
    }

    #[test]
    fn all_pairs_on_campus_graph() {
        let g = generate_campus_graph();
        let mut d = Dijkstra::new(&g);

        for src in 0..11 {
            for dst in 0..11 {
                let res = d.search(src, dst).unwrap();
                let sp = res.path.expect("campus graph is connected");
                assert_valid_path(&g, src, dst, &sp);
            }
        }
    }
}
