use std::collections::HashMap;

use rstar::{PointDistance, RTree, RTreeObject, AABB};

use crate::geo::haversine::haversine_distance_meters;
use crate::map::candidate::BoardingCandidate;
use crate::model::graph::GraphSnapshot;
use crate::model::stop::StopId;
use crate::model::unit::Meters;

/// eligible walking radius for stops served by a mass-transit mode (BRT, TER).
pub const MASS_TRANSIT_RADIUS_M: f64 = 2000.0;
/// eligible walking radius for all other stops.
pub const REGULAR_RADIUS_M: f64 = 1000.0;

const MASS_TRANSIT_STOP_CAP: usize = 2;
const REGULAR_STOP_CAP: usize = 3;

/// one degree of latitude, in metres; used only to size the R-tree's coarse
/// bounding-box prefilter, never for the candidate distance itself.
const METERS_PER_DEGREE_LAT: f64 = 111_320.0;

#[derive(Clone)]
struct StopPoint {
    stop_id: StopId,
    lat: f64,
    lon: f64,
    is_mass_transit: bool,
}

impl RTreeObject for StopPoint {
    type Envelope = AABB<[f64; 2]>;

    fn envelope(&self) -> Self::Envelope {
        AABB::from_point([self.lon, self.lat])
    }
}

impl PointDistance for StopPoint {
    fn distance_2(&self, point: &[f64; 2]) -> f64 {
        let dx = self.lon - point[0];
        let dy = self.lat - point[1];
        dx * dx + dy * dy
    }
}

/// Finds candidate boarding/alighting nodes near a coordinate, mode-aware.
///
/// An `rstar` R-tree over stop coordinates narrows the haversine-exact pass down to
/// the handful of stops near the query point instead of scanning every stop in the
/// graph; the eligible-radius and per-class selection logic above is exact regardless
/// of graph size.
pub struct SpatialIndex {
    rtree: RTree<StopPoint>,
}

struct RankedStop {
    stop_id: StopId,
    distance: Meters,
}

impl SpatialIndex {
    pub fn build(snapshot: &GraphSnapshot) -> Self {
        let mut seen: HashMap<StopId, bool> = HashMap::new();
        for node in snapshot.nodes.iter() {
            let entry = seen.entry(node.stop_id.clone()).or_insert(false);
            *entry |= node.mode.is_mass_transit();
        }
        let points: Vec<StopPoint> = seen
            .into_iter()
            .filter_map(|(stop_id, is_mass_transit)| {
                let node_id = *snapshot.nodes_at_stop(&stop_id).first()?;
                let node = snapshot.get_node(node_id).ok()?;
                Some(StopPoint {
                    stop_id,
                    lat: node.lat,
                    lon: node.lon,
                    is_mass_transit,
                })
            })
            .collect();
        Self {
            rtree: RTree::bulk_load(points),
        }
    }

    /// Candidate nodes near `coord`, capped at `limit`. Empty if nothing lies within
    /// the larger (mass-transit) radius, which callers treat as "no route".
    pub fn candidates(
        &self,
        coord: (f64, f64),
        snapshot: &GraphSnapshot,
        limit: usize,
    ) -> Vec<BoardingCandidate> {
        let (lat, lon) = coord;
        let lat_radius_deg = MASS_TRANSIT_RADIUS_M / METERS_PER_DEGREE_LAT;
        let lon_radius_deg =
            MASS_TRANSIT_RADIUS_M / (METERS_PER_DEGREE_LAT * lat.to_radians().cos().max(1e-6));
        let envelope = AABB::from_corners(
            [lon - lon_radius_deg, lat - lat_radius_deg],
            [lon + lon_radius_deg, lat + lat_radius_deg],
        );

        let mut mass_transit: Vec<RankedStop> = Vec::new();
        let mut regular: Vec<RankedStop> = Vec::new();
        for stop in self.rtree.locate_in_envelope(&envelope) {
            let distance = haversine_distance_meters(coord, (stop.lat, stop.lon));
            if stop.is_mass_transit {
                if distance.as_f64() <= MASS_TRANSIT_RADIUS_M {
                    mass_transit.push(RankedStop {
                        stop_id: stop.stop_id.clone(),
                        distance,
                    });
                }
            } else if distance.as_f64() <= REGULAR_RADIUS_M {
                regular.push(RankedStop {
                    stop_id: stop.stop_id.clone(),
                    distance,
                });
            }
        }
        mass_transit.sort_by(|a, b| a.distance.partial_cmp(&b.distance).unwrap());
        regular.sort_by(|a, b| a.distance.partial_cmp(&b.distance).unwrap());
        mass_transit.truncate(MASS_TRANSIT_STOP_CAP);
        regular.truncate(REGULAR_STOP_CAP);

        let mut out = Vec::new();
        for ranked in mass_transit.into_iter().chain(regular.into_iter()) {
            for &node_id in snapshot.nodes_at_stop(&ranked.stop_id) {
                if out.len() >= limit {
                    return out;
                }
                out.push(BoardingCandidate {
                    node_id,
                    walk_distance: ranked.distance,
                });
            }
        }
        out
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::model::route::TransitMode;
    use crate::testing::MockGraphBuilder;

    /// one degree of longitude at the equator, close enough for these fixtures.
    const DEG_LON_METERS: f64 = 111_320.0;

    fn snapshot_with_stops() -> GraphSnapshot {
        let mut builder = MockGraphBuilder::new();
        // ~222m from the origin
        builder.add_node("near", "Near", 0.0, 0.002, "R1", "Route 1", TransitMode::Bus);
        // ~5.5km from the origin: outside the regular radius, inside the mass-transit radius
        builder.add_node(
            "brt",
            "BRT stop",
            0.0,
            2000.0 / DEG_LON_METERS,
            "R2",
            "BRT Line",
            TransitMode::Brt,
        );
        // ~11km away: outside both radii
        builder.add_node(
            "far",
            "Far",
            0.0,
            0.10,
            "R1",
            "Route 1",
            TransitMode::Bus,
        );
        builder.build()
    }

    #[test]
    fn finds_regular_stop_within_radius() {
        let snapshot = snapshot_with_stops();
        let index = SpatialIndex::build(&snapshot);
        let candidates = index.candidates((0.0, 0.0), &snapshot, 10);
        let stop_ids: Vec<_> = candidates
            .iter()
            .map(|c| snapshot.get_node(c.node_id).unwrap().stop_id.0.clone())
            .collect();
        assert!(stop_ids.contains(&"near".to_string()));
        assert!(!stop_ids.contains(&"far".to_string()));
    }

    #[test]
    fn mass_transit_stop_reaches_further_than_regular_radius() {
        let snapshot = snapshot_with_stops();
        let index = SpatialIndex::build(&snapshot);
        let candidates = index.candidates((0.0, 0.0), &snapshot, 10);
        let stop_ids: Vec<_> = candidates
            .iter()
            .map(|c| snapshot.get_node(c.node_id).unwrap().stop_id.0.clone())
            .collect();
        assert!(stop_ids.contains(&"brt".to_string()));
    }

    #[test]
    fn empty_when_nothing_within_either_radius() {
        let mut builder = MockGraphBuilder::new();
        builder.add_node("lonely", "Lonely", 0.0, 1.0, "R1", "Route 1", TransitMode::Bus);
        let snapshot = builder.build();
        let index = SpatialIndex::build(&snapshot);
        let candidates = index.candidates((0.0, 0.0), &snapshot, 10);
        assert!(candidates.is_empty());
    }

    #[test]
    fn respects_overall_limit() {
        let snapshot = snapshot_with_stops();
        let index = SpatialIndex::build(&snapshot);
        let candidates = index.candidates((0.0, 0.0), &snapshot, 1);
        assert_eq!(candidates.len(), 1);
    }
}
