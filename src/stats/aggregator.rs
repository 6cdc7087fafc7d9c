use std::sync::Arc;

use crate::config::DisplayTuning;
use crate::error::Result;
use crate::github::{RepoPager, StatsSource};
use crate::models::{ContributionCalendar, ProfileStats, StatsPayload};
use crate::stats::display::{boost_levels, display_contributions};
use crate::stats::featured::select_featured;

/// Builds the display-ready statistics payload for the configured profile.
/// One linear pipeline per request; nothing is shared across runs except the
/// response cache inside the source.
pub struct StatsAggregator {
    source: Arc<dyn StatsSource>,
    username: String,
    tuning: DisplayTuning,
}

impl StatsAggregator {
    pub fn new(source: Arc<dyn StatsSource>, username: String, tuning: DisplayTuning) -> Self {
        Self {
            source,
            username,
            tuning,
        }
    }

    pub async fn build_payload(&self) -> Result<StatsPayload> {
        // Step 1: user profile (mandatory)
        tracing::info!("Fetching GitHub profile for: {}", self.username);
        let user = self.source.fetch_user(&self.username).await?;

        // Step 2: full repository listing (mandatory)
        let repos = RepoPager::new(self.source.as_ref())
            .fetch_all(&self.username)
            .await?;
        tracing::info!("Fetched {} repositories", repos.len());

        // Steps 3-4: star total (forks included) and featured selection
        let total_stars: u32 = repos.iter().map(|r| r.stargazers_count).sum();
        let featured_repos = select_featured(&repos);

        // Step 5: contribution calendar (optional) — degrades to empty
        let calendar = match self.source.fetch_contribution_calendar(&self.username).await {
            Ok(Some(calendar)) => {
                tracing::info!(
                    "Contribution calendar: {} contributions",
                    calendar.total_contributions
                );
                calendar
            }
            Ok(None) => ContributionCalendar::default(),
            Err(e) => {
                tracing::warn!(
                    "Contribution calendar unavailable, continuing without it: {}",
                    e
                );
                ContributionCalendar::default()
            }
        };

        // Steps 6-7: floors and the boosted contribution total
        let stats = ProfileStats {
            total_contributions: display_contributions(
                calendar.total_contributions,
                repos.len() as u32,
                &self.tuning,
            ),
            public_repos: (repos.len() as u32).max(self.tuning.min_repos),
            total_stars: total_stars.max(self.tuning.min_stars),
            followers: user.followers,
        };

        // Step 8: randomized intensity upgrade, fresh per request
        let mut contribution_weeks = calendar.weeks;
        boost_levels(&mut contribution_weeks, &self.tuning, &mut rand::thread_rng());

        Ok(StatsPayload {
            stats,
            featured_repos,
            contribution_weeks,
            username: user.login,
            avatar_url: user.avatar_url,
            profile_url: user.html_url,
        })
    }
}
