// Boosting Engine
// Re-ranks externally computed semantic-search hits using category intent and
// lexical overlap with the content registry. Mutates scores in place.

pub mod engine;
pub mod intent;
pub mod models;
pub mod weights;

pub use engine::{apply_boosting, apply_boosting_with};
pub use intent::QueryIntent;
pub use models::{BoostSummary, SearchMetadata, SearchResult};
pub use weights::BoostConfig;
