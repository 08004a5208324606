use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::{constants::NodeId, graph::Graph};

/// Ids of the nodes A, B, C, D in [`generate_square_graph`]
pub const SQUARE: [NodeId; 4] = [1, 2, 3, 4];

/// A(0,0) -- B(0,1)
///   |         |
/// D(1,0) -- C(1,1)
///
/// Coordinates are (lat, lon) in degrees, weights are great-circle distances.
pub fn generate_square_graph() -> Graph {
    let [a, b, c, d] = SQUARE;
    let mut g = Graph::new();

    g.add_node(a, 0.0, 0.0);
    g.add_node(b, 0.0, 1.0);
    g.add_node(c, 1.0, 1.0);
    g.add_node(d, 1.0, 0.0);

    for (src, dst) in [(a, b), (b, c), (c, d), (a, d)] {
        g.add_geo_edge(src, dst).unwrap();
    }

    g
}

pub fn generate_simple_graph() -> Graph {
    //      7 -- 8 -- 9
    //      |         |
    // 0 -- 5 -- 6 -  |
    // |         |  \ |
    // 1 -- 2 -- 3 -- 4
    //
    // All nodes share the same coordinates, so the straight line distance is 0
    let mut g = Graph::new();

    for i in 0..10 {
        g.add_node(i, 0.0, 0.0);
    }

    for (a, b, weight) in [
        (0, 1, 1.0),
        (1, 2, 1.0),
        (2, 3, 1.0),
        (3, 4, 20.0),
        (0, 5, 5.0),
        (5, 6, 1.0),
        (6, 4, 20.0),
        (6, 3, 20.0),
        (5, 7, 5.0),
        (7, 8, 1.0),
        (8, 9, 1.0),
        (9, 4, 1.0),
    ] {
        g.add_edge(a, b, weight).unwrap();
    }

    g
}

pub fn generate_disconnected_graph() -> Graph {
    // 0 -- 1 -- 2
    // 3 -- 4 -- 5
    // 6
    let mut g = Graph::new();
    for i in 0..7 {
        g.add_node(i, 0.0, 0.0);
    }

    g.add_edge(0, 1, 1.0).unwrap();
    g.add_edge(1, 2, 1.0).unwrap();
    g.add_edge(3, 4, 3.0).unwrap();
    g.add_edge(4, 5, 1.0).unwrap();

    g
}

/// Eleven nodes A..K (ids 0..=10) spread over a few hundred meters, edges
/// weighted by great-circle distance.
pub fn generate_campus_graph() -> Graph {
    let mut g = Graph::new();

    // Offsets in 1/1000 degree from a reference point
    let offsets = [
        (6.0, 2.0),
        (3.0, 3.0),
        (4.0, 6.0),
        (2.0, 7.0),
        (3.0, 10.0),
        (2.0, 13.0),
        (7.0, 15.0),
        (5.0, 12.0),
        (7.0, 11.0),
        (5.0, 9.0),
        (7.0, 7.0),
    ];
    for (id, (dlat, dlon)) in offsets.iter().enumerate() {
        g.add_node(id as NodeId, 29.64 + dlat * 1e-3, -82.35 + dlon * 1e-3);
    }

    let (a, b, c, d, e, f, gg, h, i, j, k) = (0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10);
    for (src, dst) in [
        (a, b),
        (a, c),
        (a, k),
        (b, d),
        (b, c),
        (c, d),
        (c, j),
        (d, j),
        (d, e),
        (e, j),
        (e, f),
        (f, h),
        (f, gg),
        (gg, h),
        (gg, i),
        (h, i),
        (h, j),
        (i, j),
        (i, k),
        (j, k),
    ] {
        g.add_geo_edge(src, dst).unwrap();
    }

    g
}

/// `rows` x `cols` grid of jittered points around the campus with edges to the
/// right and lower neighbor, each kept with probability `density`, plus the
/// occasional diagonal. Ids are `row * cols + col`.
pub fn generate_grid_graph(rows: usize, cols: usize, density: f64, seed: u64) -> Graph {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut g = Graph::with_capacity(rows * cols);

    let id = |row: usize, col: usize| (row * cols + col) as NodeId;

    for row in 0..rows {
        for col in 0..cols {
            let lat = 29.64 + row as f64 * 5e-4 + rng.gen_range(-1e-4..1e-4);
            let lon = -82.35 + col as f64 * 5e-4 + rng.gen_range(-1e-4..1e-4);
            g.add_node(id(row, col), lat, lon);
        }
    }

    for row in 0..rows {
        for col in 0..cols {
            if col + 1 < cols && rng.gen_bool(density) {
                g.add_geo_edge(id(row, col), id(row, col + 1)).unwrap();
            }
            if row + 1 < rows && rng.gen_bool(density) {
                g.add_geo_edge(id(row, col), id(row + 1, col)).unwrap();
            }
            if row + 1 < rows && col + 1 < cols && rng.gen_bool(0.1) {
                g.add_geo_edge(id(row, col), id(row + 1, col + 1)).unwrap();
            }
        }
    }

    g
}
