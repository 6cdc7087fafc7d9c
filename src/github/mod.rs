pub mod cache;
pub mod client;
pub mod paginator;
pub mod provider;
pub mod rate_limiter;

pub use cache::ResponseCache;
pub use client::GitHubClient;
pub use paginator::RepoPager;
pub use provider::StatsSource;
pub use rate_limiter::RateLimiter;
