use crate::algorithm::search::SearchError;
use crate::model::graph::GraphError;

/// Aggregate error for the engine crate, composed from each component's own
/// error enum via `#[from]`.
#[derive(thiserror::Error, Debug)]
pub enum CoreError {
    #[error(transparent)]
    Graph(#[from] GraphError),
    #[error(transparent)]
    Search(#[from] SearchError),
}
