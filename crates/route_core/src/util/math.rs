use crate::{
    constants::{Weight, EARTH_RADIUS_M},
    graph::Node,
};

/// Great-circle distance in meters between two WGS84 coordinates (Haversine formula).
pub fn haversine(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> Weight {
    let lat1_rad = lat1.to_radians();
    let lat2_rad = lat2.to_radians();
    let a = (lat2 - lat1).to_radians() / 2.0;
    let b = (lon2 - lon1).to_radians() / 2.0;
    let c = a.sin().powi(2) + lat1_rad.cos() * lat2_rad.cos() * b.sin().powi(2);
    // Rounding can push c marginally above 1 for antipodal points.
    // clamp keeps NaN so invalid coordinates give an invalid weight
    let d = 2.0 * c.sqrt().clamp(0.0, 1.0).asin();

    EARTH_RADIUS_M * d
}

/// Straight line distance between two nodes. Never overestimates the
/// distance along the network, so it is an admissible A* heuristic.
pub fn straight_line(src: &Node, dst: &Node) -> Weight {
    haversine(src.lat, src.lon, dst.lat, dst.lon)
}

#[cfg(test)]
mod tests {
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    use super::*;

    #[test]
    fn same_point_is_zero() {
        assert_eq!(haversine(29.6465, -82.3533, 29.6465, -82.3533), 0.0);
    }

    #[test]
    fn one_degree_along_equator() {
        // 2 * pi * r / 360
        assert_relative_eq!(
            haversine(0.0, 0.0, 0.0, 1.0),
            111_194.926_644_558_7,
            max_relative = 1e-9
        );
    }

    #[test]
    fn is_symmetric() {
        let there = haversine(29.6436, -82.3549, 29.6516, -82.3248);
        let back = haversine(29.6516, -82.3248, 29.6436, -82.3549);
        assert_abs_diff_eq!(there, back, epsilon = 1e-9);
        assert!(there > 0.0);
    }

    #[test]
    fn antipodal_points() {
        assert_relative_eq!(
            haversine(0.0, 0.0, 0.0, 180.0),
            std::f64::consts::PI * EARTH_RADIUS_M,
            max_relative = 1e-9
        );
    }

    #[test]
    fn nan_coordinates_give_nan() {
        assert!(haversine(f64::NAN, 0.0, 0.0, 1.0).is_nan());
        assert!(haversine(0.0, 0.0, 0.0, f64::NAN).is_nan());
    }

    #[test]
    fn straight_line_uses_node_coordinates() {
        let a = Node::new(1, 0.0, 0.0);
        let b = Node::new(2, 1.0, 0.0);
        assert_abs_diff_eq!(
            straight_line(&a, &b),
            haversine(0.0, 0.0, 1.0, 0.0),
            epsilon = 1e-9
        );
    }
}
