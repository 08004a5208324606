//! Interactive shell to run and compare searches on a loaded graph
use std::path::{Path, PathBuf};
use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use rand::seq::SliceRandom;
use reedline_repl_rs::clap::{value_parser, Arg, ArgMatches, Command};
use reedline_repl_rs::{Repl, Result};
use route_core::prelude::*;

/// Print graph info
fn info(_args: ArgMatches, context: &mut Context) -> Result<Option<String>> {
    Ok(Some(format!(
        "Graph has {} nodes and {} edges, avg. degree {:.2}",
        context.graph.num_nodes(),
        context.graph.num_edges(),
        context.graph.average_degree()
    )))
}

fn endpoints(args: &ArgMatches) -> (NodeId, NodeId) {
    let src = *args.get_one::<NodeId>("src").unwrap();
    let dst = *args.get_one::<NodeId>("dst").unwrap();
    (src, dst)
}

fn format_result(res: &SearchResult) -> String {
    match res.path() {
        Some(path) => {
            let mut out = String::new();
            for node in path {
                out.push_str(&format!("{}\n", node));
            }
            out.push_str(&format!(
                "{:.1} m, {} nodes settled, took: {:?}",
                res.distance().unwrap_or_default(),
                res.nodes_visited(),
                res.elapsed()
            ));
            out
        }
        None => format!(
            "No path found ({} nodes settled, took: {:?})",
            res.nodes_visited(),
            res.elapsed()
        ),
    }
}

fn route(args: ArgMatches, context: &mut Context) -> Result<Option<String>> {
    let algorithm = *args.get_one::<Algorithm>("algorithm").unwrap();
    let (src, dst) = endpoints(&args);

    match search(algorithm, &context.graph, src, dst) {
        Ok(res) => Ok(Some(format_result(&res))),
        Err(e) => Ok(Some(e.to_string())),
    }
}

fn run_compare(args: ArgMatches, context: &mut Context) -> Result<Option<String>> {
    let (src, dst) = endpoints(&args);

    match compare(&context.graph, src, dst) {
        Ok(cmp) => Ok(Some(cmp.to_string())),
        Err(e) => Ok(Some(e.to_string())),
    }
}

/// Compare both algorithms on `n` random node pairs
fn measure(args: ArgMatches, context: &mut Context) -> Result<Option<String>> {
    let n = *args.get_one::<usize>("n").unwrap_or(&10);

    if context.ids.is_empty() {
        return Ok(Some("Graph is empty".to_string()));
    }

    let mut rng = rand::thread_rng();
    let pairs: Vec<(NodeId, NodeId)> = (0..n)
        .map(|_| {
            (
                *context.ids.choose(&mut rng).unwrap(),
                *context.ids.choose(&mut rng).unwrap(),
            )
        })
        .collect();

    let pb = ProgressBar::new(n as u64);
    pb.set_style(
        ProgressStyle::with_template("[{elapsed_precise}] {bar:40} {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar()),
    );

    let mut found = 0;
    let mut time_dijkstra = Duration::ZERO;
    let mut time_astar = Duration::ZERO;
    let mut settled_dijkstra = 0;
    let mut settled_astar = 0;
    for (src, dst) in pairs {
        pb.inc(1);
        let Ok(cmp) = compare(&context.graph, src, dst) else {
            continue;
        };
        if !cmp.is_found() {
            continue;
        }
        found += 1;
        time_dijkstra += cmp.dijkstra.elapsed();
        time_astar += cmp.astar.elapsed();
        settled_dijkstra += cmp.dijkstra.nodes_visited();
        settled_astar += cmp.astar.nodes_visited();
    }
    pb.finish_with_message("done");

    if found == 0 {
        return Ok(Some(format!("No path found for any of {} pairs", n)));
    }

    Ok(Some(format!(
        "{} of {} pairs connected\n\
         dijkstra: avg. {:?}, avg. {} nodes settled\n\
         astar:    avg. {:?}, avg. {} nodes settled",
        found,
        n,
        time_dijkstra / found,
        settled_dijkstra / found as usize,
        time_astar / found,
        settled_astar / found as usize,
    )))
}

#[derive(Default)]
struct Context {
    graph: Graph,
    ids: Vec<NodeId>,
}

impl Context {
    fn new(graph: Graph) -> Self {
        let mut ids: Vec<NodeId> = graph.nodes().map(|node| node.id).collect();
        ids.sort_unstable();
        Self { graph, ids }
    }
}

fn node_arg(name: &'static str, help: &'static str) -> Arg {
    Arg::new(name)
        .value_parser(value_parser!(NodeId))
        .allow_negative_numbers(true)
        .required(true)
        .help(help)
}

fn main() -> Result<()> {
    env_logger::init();

    // Init Graph
    let mut args = std::env::args().skip(1);
    let (Some(nodes), Some(edges)) = (args.next(), args.next()) else {
        eprintln!("Usage: repl <nodes.csv> <edges.csv>");
        std::process::exit(1);
    };
    let graph = match Graph::from_csv(Path::new(&nodes), Path::new(&edges)) {
        Ok(graph) => graph,
        Err(e) => {
            eprintln!("{:#}", e);
            std::process::exit(1);
        }
    };
    graph.print_info();
    let context = Context::new(graph);

    let mut repl = Repl::new(context)
        .with_name("Pathfinder")
        .with_version("v0.1.0")
        .with_description("Simple REPL to compare Dijkstra and A* on a campus graph")
        .with_banner("Welcome to Pathfinder")
        .with_history(PathBuf::from(r".\history"), 100)
        .with_command(Command::new("info").about("Print graph info"), info)
        .with_command(
            Command::new("route")
                .arg(
                    Arg::new("algorithm")
                        .value_parser(value_parser!(Algorithm))
                        .required(true)
                        .help("dijkstra or astar"),
                )
                .arg(node_arg("src", "ID of source node"))
                .arg(node_arg("dst", "ID of destination node"))
                .about("Calculate a shortest path with the given algorithm"),
            route,
        )
        .with_command(
            Command::new("compare")
                .arg(node_arg("src", "ID of source node"))
                .arg(node_arg("dst", "ID of destination node"))
                .about("Run Dijkstra and A* on the same pair and compare them"),
            run_compare,
        )
        .with_command(
            Command::new("measure")
                .arg(
                    Arg::new("n")
                        .value_parser(value_parser!(usize))
                        .required(false)
                        .help("Number of random node pairs"),
                )
                .about("Compare both algorithms on `n` random node pairs"),
            measure,
        );

    repl.run()
}
