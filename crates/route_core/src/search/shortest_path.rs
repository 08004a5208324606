use crate::constants::{NodeId, Weight};

#[derive(Debug, PartialEq, Clone)]
pub struct ShortestPath {
    pub nodes: Vec<NodeId>,
    pub weight: Weight,
}

impl ShortestPath {
    pub fn new(nodes: Vec<NodeId>, weight: Weight) -> Self {
        ShortestPath { nodes, weight }
    }
}
