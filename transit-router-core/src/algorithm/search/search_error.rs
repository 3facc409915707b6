use crate::model::graph::GraphError;

#[derive(thiserror::Error, Debug)]
pub enum SearchError {
    #[error("graph inconsistency encountered during search: {source}")]
    CorruptGraph {
        #[from]
        source: GraphError,
    },
    #[error("internal error due to search logic: {0}")]
    InternalError(String),
}
