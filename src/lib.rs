pub mod config;
pub mod error;
pub mod github;
pub mod models;
pub mod server;
pub mod stats;
pub mod taxonomy;

pub use config::{Config, DisplayTuning};
pub use error::{Error, Result};
pub use github::{GitHubClient, StatsSource};
pub use stats::StatsAggregator;

/// Application state shared across handlers
pub struct AppState {
    pub aggregator: StatsAggregator,
}
