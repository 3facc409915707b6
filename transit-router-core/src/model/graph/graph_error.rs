use crate::model::graph::node_id::NodeId;
use crate::model::stop::StopId;

#[derive(thiserror::Error, Debug)]
pub enum GraphError {
    #[error("node {node_id} not found")]
    UnknownNode { node_id: NodeId },
    #[error("edge references unknown node {node_id}")]
    CorruptGraph { node_id: NodeId },
    #[error("no nodes indexed for stop {stop_id}")]
    UnknownStop { stop_id: StopId },
    #[error("{filename} file source was empty")]
    EmptyFileSource { filename: std::path::PathBuf },
    #[error("io error: {source}")]
    IOError {
        #[from]
        source: std::io::Error,
    },
    #[error("csv error: {source}")]
    CsvError {
        #[from]
        source: csv::Error,
    },
}
