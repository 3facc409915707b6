pub mod candidate;
pub mod spatial_index;

pub use candidate::BoardingCandidate;
pub use spatial_index::SpatialIndex;
