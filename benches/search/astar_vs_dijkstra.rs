use route_core::{
    constants::NodeId,
    graph::Graph,
    search::{astar::AStar, dijkstra::Dijkstra},
    util::test_graphs::generate_grid_graph,
};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::prelude::*;

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);

/// Random pair of node ids which are connected in `g`
fn connected_pair(g: &Graph, rng: &mut impl Rng) -> (NodeId, NodeId) {
    let ids: Vec<NodeId> = g.nodes().map(|node| node.id).collect();
    loop {
        let src = *ids.choose(rng).unwrap();
        let dst = *ids.choose(rng).unwrap();
        if Dijkstra::new(g).search(src, dst).unwrap().is_found() {
            return (src, dst);
        }
    }
}

fn criterion_benchmark(c: &mut Criterion) {
    let mut path = std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("../crates/route_core/test_data");
    let campus = Graph::from_csv(&path.join("nodes.csv"), &path.join("edges.csv")).unwrap();

    let mut graphs: Vec<Graph> = [30, 100, 300]
        .iter()
        .map(|size| generate_grid_graph(*size, *size, 0.9, *size as u64))
        .collect();
    graphs.insert(0, campus);

    let mut group = c.benchmark_group("astar_vs_dijkstra");
    let mut rng = StdRng::seed_from_u64(42);
    for graph in graphs {
        let (src, dst) = connected_pair(&graph, &mut rng);

        group.bench_with_input(
            BenchmarkId::new("Dijkstra", graph.num_nodes()),
            &graph,
            |b, g| {
                let mut dijkstra = Dijkstra::new(g);
                b.iter(|| dijkstra.search(src, dst));
            },
        );
        group.bench_with_input(
            BenchmarkId::new("AStar", graph.num_nodes()),
            &graph,
            |b, g| {
                let mut astar = AStar::new(g);
                b.iter(|| astar.search(src, dst));
            },
        );
    }
    group.finish();
}
