pub mod a_star;
pub mod backtrack;
pub mod heuristic;
pub mod search_error;
pub mod search_state;

pub use a_star::search;
pub use heuristic::heuristic;
pub use search_error::SearchError;
pub use search_state::{RawRoute, SearchState};
