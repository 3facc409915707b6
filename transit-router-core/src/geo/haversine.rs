use crate::model::unit::Meters;

pub const APPROX_EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Great-circle distance between two `(lat, lon)` coordinates, in metres.
/// Assumes WGS84 (EPSG:4326) coordinates. Used both as the A* heuristic's
/// basis and for walk-step distance estimates.
pub fn haversine_distance_meters(src: (f64, f64), dst: (f64, f64)) -> Meters {
    let (src_lat, src_lon) = src;
    let (dst_lat, dst_lon) = dst;

    let lat1 = src_lat.to_radians();
    let lat2 = dst_lat.to_radians();
    let d_lat = lat2 - lat1;
    let d_lon = (dst_lon - src_lon).to_radians();

    let a = (d_lat / 2.0).sin().powi(2) + (d_lon / 2.0).sin().powi(2) * lat1.cos() * lat2.cos();
    let c = 2.0 * a.sqrt().asin();
    Meters::new(APPROX_EARTH_RADIUS_M * c)
}
