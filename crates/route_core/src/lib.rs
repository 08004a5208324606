//! Shortest paths on a campus walking network.
//!
//! # Basic usage
//! ```no_run
//! use route_core::prelude::*;
//! use std::path::Path;
//!
//! // Load the node and edge tables
//! let g = Graph::from_csv(Path::new("nodes.csv"), Path::new("edges.csv"))
//!     .expect("Failed to load graph");
//!
//! // Run A* between two node ids
//! let res = search(Algorithm::HeuristicGuided, &g, 101, 106).expect("Unknown node");
//!
//! match res.path() {
//!     Some(path) => println!("{:?}: {:.1} m", path, res.distance().unwrap_or_default()),
//!     None => println!("No path, {} nodes settled", res.nodes_visited()),
//! }
//!
//! // Or run both algorithms and compare them
//! let cmp = compare(&g, 101, 106).expect("Unknown node");
//! println!("{}", cmp);
//!```
//! [`Graph`]: crate::graph::Graph
pub mod constants;
pub mod error;
pub mod graph;
pub mod prelude;
pub mod priority_queue;
pub mod search;
pub mod statistics;
pub mod util;
