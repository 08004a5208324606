/// Edge weight type, distances in meters
pub type Weight = f64;
/// Externally assigned node identifier (e.g. an OpenStreetMap ID, <https://wiki.openstreetmap.org/wiki/Node>)
pub type NodeId = i64;
/// Mean earth radius in meters
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;
