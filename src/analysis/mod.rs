pub mod aggregator;
pub mod pipeline;

pub use aggregator::{sum_language_bytes, Aggregator, RepositoryTally};
pub use pipeline::{run, RunOutcome, StatsPipeline};
