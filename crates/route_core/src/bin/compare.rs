use anyhow::{bail, Context};
use rand::seq::IteratorRandom;
use route_core::{
    prelude::*,
    util::cli::{self, Cfg},
};

fn pick_node(g: &Graph, id: Option<NodeId>) -> anyhow::Result<NodeId> {
    if let Some(id) = id {
        return Ok(id);
    }
    g.nodes()
        .map(|node| node.id)
        .choose(&mut rand::thread_rng())
        .context("Graph has no nodes")
}

fn print_result(res: &SearchResult) {
    println!("[{}] {}", res.algorithm, res.stats);
    match (res.path(), res.distance()) {
        (Some(path), Some(distance)) => {
            println!("  {} nodes on path, {:.1} m", path.len(), distance);
            println!("  {:?}", path);
        }
        _ => {
            if let Some(err) = res.error() {
                println!("  {}", err);
            }
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let Cfg {
        nodes_file,
        edges_file,
        start,
        end,
        algorithms,
    } = cli::parse();

    let g = Graph::from_csv(&nodes_file, &edges_file)?;
    g.print_info();

    let start = pick_node(&g, start)?;
    let end = pick_node(&g, end)?;
    println!("Route from {} to {}", start, end);

    if algorithms.len() == 1 {
        let res = search(algorithms[0], &g, start, end)?;
        print_result(&res);
        return Ok(());
    }

    let cmp = compare(&g, start, end)?;
    println!("{}", cmp);
    if !cmp.is_found() {
        bail!("No path between {} and {}", start, end);
    }
    if let Some(path) = cmp.astar.path() {
        println!("{:?}", path);
    }

    Ok(())
}
