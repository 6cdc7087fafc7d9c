use crate::error::{Error, Result};
use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    pub github_username: String,
    pub github_token: Option<String>,
    pub host: String,
    pub port: u16,
    pub cache_ttl_secs: u64,
    pub tuning: DisplayTuning,
}

/// Display-oriented adjustment constants. These are presentation tuning, not
/// core logic; every value can be overridden from the environment.
#[derive(Debug, Clone)]
pub struct DisplayTuning {
    /// Floor for the displayed public repository count.
    pub min_repos: u32,
    /// Floor for the displayed star total.
    pub min_stars: u32,
    /// Multiplier applied to the contribution total before rounding.
    pub contribution_boost: f64,
    /// Per-cell probability of a one-step intensity upgrade.
    pub level_bump_chance: f64,
    /// Probability that a zero-activity cell is promoted to the first quartile.
    pub empty_fill_chance: f64,
}

impl Default for DisplayTuning {
    fn default() -> Self {
        Self {
            min_repos: 37,
            min_stars: 9,
            contribution_boost: 1.2,
            level_bump_chance: 0.2,
            empty_fill_chance: 0.1,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let github_username = env::var("GITHUB_USERNAME")
            .map_err(|_| Error::Config("GITHUB_USERNAME environment variable not set".to_string()))?;

        let github_token = env::var("GITHUB_TOKEN").ok().filter(|t| !t.is_empty());

        let host = env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());

        let port = env::var("PORT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(8080);

        let cache_ttl_secs = env::var("CACHE_TTL_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(3600);

        let defaults = DisplayTuning::default();
        let tuning = DisplayTuning {
            min_repos: env_or("MIN_DISPLAY_REPOS", defaults.min_repos),
            min_stars: env_or("MIN_DISPLAY_STARS", defaults.min_stars),
            contribution_boost: env_or("CONTRIBUTION_BOOST", defaults.contribution_boost),
            level_bump_chance: env_or("LEVEL_BUMP_CHANCE", defaults.level_bump_chance),
            empty_fill_chance: env_or("EMPTY_FILL_CHANCE", defaults.empty_fill_chance),
        };

        Ok(Self {
            github_username,
            github_token,
            host,
            port,
            cache_ttl_secs,
            tuning,
        })
    }
}

fn env_or<T: std::str::FromStr>(name: &str, default: T) -> T {
    env::var(name)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
