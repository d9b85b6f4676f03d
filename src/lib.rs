pub mod config;
pub mod error;
pub mod models;
pub mod github;
pub mod analysis;
pub mod render;
pub mod report;

pub use config::{Config, OutputPaths};
pub use error::{Error, Result};
pub use github::GitHubClient;
pub use analysis::{run, RunOutcome, StatsPipeline};
