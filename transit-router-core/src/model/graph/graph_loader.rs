use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;

use crate::model::graph::edge::{Edge, EdgeKind};
use crate::model::graph::graph::GraphSnapshot;
use crate::model::graph::graph_error::GraphError;
use crate::model::graph::node::Node;
use crate::model::graph::node_id::NodeId;
use crate::model::route::{RouteId, TransitMode};
use crate::model::stop::StopId;
use crate::model::unit::{Meters, Seconds};

/// One row of the node CSV. Row order assigns the dense [`NodeId`]: the
/// `n`th data row becomes `NodeId(n)`.
#[derive(Debug, Deserialize)]
struct NodeRow {
    stop_id: String,
    stop_name: String,
    lat: f64,
    lon: f64,
    route_id: String,
    route_name: String,
    mode: TransitMode,
}

/// One row of the edge CSV, referencing nodes by the dense id assigned above.
#[derive(Debug, Deserialize)]
struct EdgeRow {
    from_node: usize,
    to_node: usize,
    kind: EdgeKind,
    cost_time: f64,
    cost_walk: f64,
}

/// Builds a [`GraphSnapshot`] from a pair of CSV files standing in for the relational
/// store's full node/edge enumeration.
pub fn graph_snapshot_from_files<P: AsRef<Path>>(
    node_list_csv: &P,
    edge_list_csv: &P,
) -> Result<GraphSnapshot, GraphError> {
    let mut node_reader = csv::Reader::from_path(node_list_csv)?;
    let mut nodes: Vec<Node> = Vec::new();
    let mut stop_index: HashMap<StopId, Vec<NodeId>> = HashMap::new();
    for (idx, row) in node_reader.deserialize::<NodeRow>().enumerate() {
        let row = row?;
        let node_id = NodeId(idx);
        let stop_id = StopId(row.stop_id);
        stop_index
            .entry(stop_id.clone())
            .or_default()
            .push(node_id);
        nodes.push(Node {
            stop_id,
            stop_name: row.stop_name,
            lat: row.lat,
            lon: row.lon,
            route_id: RouteId(row.route_id),
            route_name: row.route_name,
            mode: row.mode,
        });
    }
    if nodes.is_empty() {
        return Err(GraphError::EmptyFileSource {
            filename: node_list_csv.as_ref().to_path_buf(),
        });
    }

    let mut edge_reader = csv::Reader::from_path(edge_list_csv)?;
    let mut by_origin: Vec<Vec<Edge>> = vec![Vec::new(); nodes.len()];
    for row in edge_reader.deserialize::<EdgeRow>() {
        let row = row?;
        let from_node = NodeId(row.from_node);
        let to_node = NodeId(row.to_node);
        let bucket = by_origin
            .get_mut(from_node.0)
            .ok_or(GraphError::CorruptGraph { node_id: from_node })?;
        if to_node.0 >= nodes.len() {
            return Err(GraphError::CorruptGraph { node_id: to_node });
        }
        bucket.push(Edge::new(
            from_node,
            to_node,
            row.kind,
            Seconds::new(row.cost_time),
            Meters::new(row.cost_walk),
        ));
    }

    let mut offsets: Vec<usize> = Vec::with_capacity(nodes.len() + 1);
    let mut edges: Vec<Edge> = Vec::with_capacity(by_origin.iter().map(Vec::len).sum());
    offsets.push(0);
    for bucket in by_origin {
        edges.extend(bucket);
        offsets.push(edges.len());
    }

    Ok(GraphSnapshot {
        nodes: nodes.into_boxed_slice(),
        edges: edges.into_boxed_slice(),
        offsets: offsets.into_boxed_slice(),
        stop_index,
    })
}
