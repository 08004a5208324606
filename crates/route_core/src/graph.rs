use crate::constants::{NodeId, Weight};
use crate::error::GraphError;
use crate::util::math::straight_line;
use anyhow::Context;
use log::{debug, info, warn};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A point of the walking network with fixed WGS84 coordinates.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Node {
    #[serde(rename = "node_ID", alias = "id")]
    pub id: NodeId,
    #[serde(rename = "latitude", alias = "lat")]
    pub lat: f64,
    #[serde(rename = "longitude", alias = "lon")]
    pub lon: f64,
}

impl Node {
    pub fn new(id: NodeId, lat: f64, lon: f64) -> Self {
        Node { id, lat, lon }
    }
}

/// Undirected connection between two nodes as it appears in the edge table.
/// The weight is not part of the record, it is derived from the coordinates.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
pub struct EdgeRecord {
    #[serde(rename = "source_node_ID", alias = "source")]
    pub source: NodeId,
    #[serde(rename = "destination_node_ID", alias = "target")]
    pub target: NodeId,
}

impl EdgeRecord {
    pub fn new(source: NodeId, target: NodeId) -> Self {
        EdgeRecord { source, target }
    }
}

/// Undirected, weighted road graph keyed by external node ids.
///
/// The graph is only mutated while it is being built. Afterwards it is shared
/// as `&Graph` and any number of searches may run on it at the same time.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    nodes: FxHashMap<NodeId, Node>,
    adjacency: FxHashMap<NodeId, FxHashMap<NodeId, Weight>>,
}

impl Graph {
    pub fn new() -> Self {
        Self {
            nodes: FxHashMap::default(),
            adjacency: FxHashMap::default(),
        }
    }

    pub fn with_capacity(num_nodes: usize) -> Self {
        Self {
            nodes: FxHashMap::with_capacity_and_hasher(num_nodes, Default::default()),
            adjacency: FxHashMap::with_capacity_and_hasher(num_nodes, Default::default()),
        }
    }

    /// Builds a graph from node tuples and edge pairs. Edge weights are the
    /// great-circle distances between the endpoints.
    ///
    /// Fails if an edge references a node which is not part of `nodes`.
    pub fn build<N, E>(nodes: N, edges: E) -> Result<Self, GraphError>
    where
        N: IntoIterator<Item = Node>,
        E: IntoIterator<Item = EdgeRecord>,
    {
        let nodes = nodes.into_iter();
        let mut g = Graph::with_capacity(nodes.size_hint().0);

        for Node { id, lat, lon } in nodes {
            g.add_node(id, lat, lon);
        }

        for EdgeRecord { source, target } in edges {
            g.add_geo_edge(source, target)?;
        }

        Ok(g)
    }

    /// Inserts a node or overwrites the coordinates of an existing one.
    /// Existing edges of the node are kept.
    pub fn add_node(&mut self, id: NodeId, lat: f64, lon: f64) {
        self.nodes.insert(id, Node::new(id, lat, lon));
        self.adjacency.entry(id).or_default();
    }

    /// Adds an undirected edge. Adding the same pair again replaces the weight.
    pub fn add_edge(&mut self, a: NodeId, b: NodeId, weight: Weight) -> Result<(), GraphError> {
        if !weight.is_finite() || weight < 0.0 {
            return Err(GraphError::InvalidWeight {
                source_id: a,
                target_id: b,
                weight,
            });
        }
        for id in [a, b] {
            if !self.nodes.contains_key(&id) {
                return Err(GraphError::UnknownNode(id));
            }
        }

        self.adjacency.entry(a).or_default().insert(b, weight);
        self.adjacency.entry(b).or_default().insert(a, weight);

        Ok(())
    }

    /// Adds an undirected edge weighted by the straight line distance of its endpoints.
    pub fn add_geo_edge(&mut self, a: NodeId, b: NodeId) -> Result<Weight, GraphError> {
        let weight = match (self.nodes.get(&a), self.nodes.get(&b)) {
            (Some(src), Some(dst)) => straight_line(src, dst),
            (None, _) => return Err(GraphError::UnknownNode(a)),
            (_, None) => return Err(GraphError::UnknownNode(b)),
        };
        self.add_edge(a, b, weight)?;
        Ok(weight)
    }

    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(&id)
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.nodes.contains_key(&id)
    }

    /// Returns an iterator over all nodes of the graph
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.values()
    }

    /// Neighbors of `id` together with the edge weight. Empty for isolated or
    /// unknown nodes.
    pub fn neighbors(&self, id: NodeId) -> impl Iterator<Item = (NodeId, Weight)> + '_ {
        self.adjacency
            .get(&id)
            .into_iter()
            .flatten()
            .map(|(neighbor, weight)| (*neighbor, *weight))
    }

    pub fn weight(&self, a: NodeId, b: NodeId) -> Option<Weight> {
        self.adjacency.get(&a)?.get(&b).copied()
    }

    pub fn degree(&self, id: NodeId) -> usize {
        self.adjacency.get(&id).map_or(0, |n| n.len())
    }

    pub fn num_nodes(&self) -> usize {
        self.nodes.len()
    }

    /// Number of undirected edges
    pub fn num_edges(&self) -> usize {
        self.adjacency
            .iter()
            .map(|(a, neighbors)| neighbors.keys().filter(|b| a <= *b).count())
            .sum()
    }

    pub fn average_degree(&self) -> f64 {
        if self.nodes.is_empty() {
            return 0.0;
        }
        let sum: usize = self.adjacency.values().map(|n| n.len()).sum();
        sum as f64 / self.nodes.len() as f64
    }

    pub fn print_info(&self) {
        info!(
            "InputGraph:\t#Nodes: {}, #Edges: {}, avg. degree: {:.2}",
            self.num_nodes(),
            self.num_edges(),
            self.average_degree()
        );
    }

    /// Reads a graph from a node table (`node_ID,latitude,longitude`) and an
    /// edge table (`source_node_ID,destination_node_ID`).
    ///
    /// Edges which reference a node missing from the node table are skipped.
    pub fn from_csv(path_to_nodes: &Path, path_to_edges: &Path) -> anyhow::Result<Self> {
        info!("Loading nodes from {:?}", path_to_nodes);
        let mut reader = csv::Reader::from_path(path_to_nodes)
            .with_context(|| format!("Could not open {}", path_to_nodes.display()))?;

        let mut g = Graph::new();
        for result in reader.deserialize() {
            let node: Node = result.context("Failed to parse Node")?;
            g.add_node(node.id, node.lat, node.lon);
        }
        info!("Loaded {} nodes", g.num_nodes());

        info!("Loading edges from {:?}", path_to_edges);
        let mut reader = csv::Reader::from_path(path_to_edges)
            .with_context(|| format!("Could not open {}", path_to_edges.display()))?;

        let mut loaded = 0;
        let mut skipped = 0;
        for result in reader.deserialize() {
            let edge: EdgeRecord = result.context("Failed to parse Edge")?;
            match g.add_geo_edge(edge.source, edge.target) {
                Ok(_) => loaded += 1,
                Err(GraphError::UnknownNode(id)) => {
                    debug!("Skipping edge {:?}, unknown node {}", edge, id);
                    skipped += 1;
                }
                Err(e) => return Err(e).context("Failed to add Edge"),
            }
        }
        if skipped > 0 {
            warn!("Skipped {} edges referencing unknown nodes", skipped);
        }
        info!("Loaded {} edges", loaded);

        Ok(g)
    }
}
