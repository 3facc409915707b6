use crate::algorithm::search::RawRoute;
use crate::assemble::path::{Path, Step, StopRef};
use crate::geo::haversine::haversine_distance_meters;
use crate::model::graph::{EdgeKind, GraphError, GraphSnapshot, Node};
use crate::model::unit::WALKING_SPEED_MPS;

/// Turns a [`RawRoute`] (a bare node/edge sequence) into the user-visible [`Path`]:
/// prepends/appends the virtual walk legs, collapses consecutive same-route
/// RIDE edges, and aggregates totals.
pub struct PathAssembler;

impl PathAssembler {
    pub fn assemble(
        raw: &RawRoute,
        snapshot: &GraphSnapshot,
        origin_coord: (f64, f64),
        destination_coord: (f64, f64),
        strategy_name: &str,
    ) -> Result<Path, GraphError> {
        let mut steps: Vec<Step> = Vec::new();

        let first_node = snapshot.get_node(raw.nodes[0])?;
        steps.push(walk_step_from_coord(origin_coord, first_node));

        let mut i = 0;
        while i < raw.edges.len() {
            let edge = &raw.edges[i];
            match edge.kind {
                EdgeKind::Ride => {
                    let boarding = snapshot.get_node(edge.from_node)?;
                    let mut j = i;
                    let mut duration_seconds = 0.0;
                    let mut intermediate: Vec<StopRef> = Vec::new();
                    let mut num_stops = 0u32;
                    let route_id = boarding.route_id.clone();
                    while j < raw.edges.len() {
                        let e = &raw.edges[j];
                        if e.kind != EdgeKind::Ride {
                            break;
                        }
                        let to = snapshot.get_node(e.to_node)?;
                        if to.route_id != route_id {
                            break;
                        }
                        duration_seconds += e.cost_time.as_f64();
                        num_stops += 1;
                        intermediate.push(StopRef {
                            id: to.stop_id.clone(),
                            name: to.stop_name.clone(),
                        });
                        j += 1;
                    }
                    let alighting_idx = j - 1;
                    let alighting = snapshot.get_node(raw.edges[alighting_idx].to_node)?;
                    // the alighting stop is also the last entry of `intermediate`;
                    // the assembled step reports it separately via to_stop/to_stop_name.
                    intermediate.pop();
                    steps.push(Step::Ride {
                        from_stop: boarding.stop_id.clone(),
                        to_stop: alighting.stop_id.clone(),
                        from_stop_name: boarding.stop_name.clone(),
                        to_stop_name: alighting.stop_name.clone(),
                        route: boarding.route_id.clone(),
                        route_name: boarding.route_name.clone(),
                        mode: boarding.mode,
                        duration_seconds: duration_seconds.round() as u32,
                        num_stops,
                        stops: intermediate,
                    });
                    i = j;
                }
                EdgeKind::Transfer => {
                    let from = snapshot.get_node(edge.from_node)?;
                    let to = snapshot.get_node(edge.to_node)?;
                    steps.push(Step::Transfer {
                        from_stop: from.stop_id.clone(),
                        to_stop: to.stop_id.clone(),
                        from_stop_name: from.stop_name.clone(),
                        to_stop_name: to.stop_name.clone(),
                        duration_seconds: edge.cost_time.as_f64().round() as u32,
                    });
                    i += 1;
                }
                EdgeKind::Walk => {
                    let from = snapshot.get_node(edge.from_node)?;
                    let to = snapshot.get_node(edge.to_node)?;
                    steps.push(Step::Walk {
                        from_stop: from.stop_id.clone(),
                        to_stop: to.stop_id.clone(),
                        from_stop_name: from.stop_name.clone(),
                        to_stop_name: to.stop_name.clone(),
                        duration_seconds: edge.cost_time.as_f64().round() as u32,
                        distance_meters: edge.cost_walk.as_f64().round() as u32,
                    });
                    i += 1;
                }
            }
        }

        let last_node = snapshot.get_node(*raw.nodes.last().expect("raw route has ≥1 node"))?;
        steps.push(walk_step_to_coord(last_node, destination_coord));

        let duration_seconds: u32 = steps.iter().map(Step::duration_seconds).sum();
        let walk_distance_meters: u32 = steps
            .iter()
            .map(|s| match s {
                Step::Walk {
                    distance_meters, ..
                } => *distance_meters,
                _ => 0,
            })
            .sum();
        let transfers = steps
            .iter()
            .filter(|s| matches!(s, Step::Transfer { .. }))
            .count() as u8;

        Ok(Path {
            strategy_name: strategy_name.to_string(),
            duration_seconds,
            walk_distance_meters,
            transfers,
            steps,
        })
    }
}

const ORIGIN_STOP_ID: &str = "origin";
const DESTINATION_STOP_ID: &str = "destination";

fn walk_step_from_coord(coord: (f64, f64), to: &Node) -> Step {
    let distance = haversine_distance_meters(coord, to.coord());
    Step::Walk {
        from_stop: ORIGIN_STOP_ID.into(),
        to_stop: to.stop_id.clone(),
        from_stop_name: "Origin".to_string(),
        to_stop_name: to.stop_name.clone(),
        duration_seconds: (distance.as_f64() / WALKING_SPEED_MPS).round() as u32,
        distance_meters: distance.as_f64().round() as u32,
    }
}

fn walk_step_to_coord(from: &Node, coord: (f64, f64)) -> Step {
    let distance = haversine_distance_meters(from.coord(), coord);
    Step::Walk {
        from_stop: from.stop_id.clone(),
        to_stop: DESTINATION_STOP_ID.into(),
        from_stop_name: from.stop_name.clone(),
        to_stop_name: "Destination".to_string(),
        duration_seconds: (distance.as_f64() / WALKING_SPEED_MPS).round() as u32,
        distance_meters: distance.as_f64().round() as u32,
    }
}
