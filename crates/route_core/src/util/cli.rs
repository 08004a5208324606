use std::path::PathBuf;

use clap::Parser;

use crate::{constants::NodeId, search::Algorithm};

#[derive(Parser)]
#[command(author = "Daniel Holzner", version, about, long_about = None)]
struct Cli {
    /// Path to the node table (node_ID,latitude,longitude)
    nodes: PathBuf,

    /// Path to the edge table (source_node_ID,destination_node_ID)
    edges: PathBuf,

    /// Id of the start node. A random node if not set
    #[arg(short, long, value_name = "id", allow_negative_numbers = true)]
    start: Option<NodeId>,

    /// Id of the end node. A random node if not set
    #[arg(short, long, value_name = "id", allow_negative_numbers = true)]
    end: Option<NodeId>,

    /// Run only one algorithm ("dijkstra" or "astar") instead of comparing both
    #[arg(short, long, value_name = "algorithm")]
    algorithm: Option<Algorithm>,
}

#[derive(Debug, Clone)]
pub struct Cfg {
    pub nodes_file: PathBuf,
    pub edges_file: PathBuf,
    pub start: Option<NodeId>,
    pub end: Option<NodeId>,
    pub algorithms: Vec<Algorithm>,
}

pub fn parse() -> Cfg {
    Cfg::from(Cli::parse())
}

impl From<Cli> for Cfg {
    fn from(cli: Cli) -> Self {
        let algorithms = match cli.algorithm {
            Some(algorithm) => vec![algorithm],
            None => Algorithm::all().to_vec(),
        };

        Cfg {
            nodes_file: cli.nodes,
            edges_file: cli.edges,
            start: cli.start,
            end: cli.end,
            algorithms,
        }
    }
}
