use async_trait::async_trait;

use crate::error::Result;
use crate::models::{ContributionCalendar, GitHubUser, Repository};

/// The three upstream capabilities the aggregator consumes: user lookup, one
/// page of the repository listing, and the contribution calendar. Implemented
/// by [`crate::github::GitHubClient`] in production; test doubles elsewhere.
#[async_trait]
pub trait StatsSource: Send + Sync {
    async fn fetch_user(&self, username: &str) -> Result<GitHubUser>;

    async fn fetch_repo_page(
        &self,
        username: &str,
        page: u32,
        per_page: u32,
    ) -> Result<Vec<Repository>>;

    /// `Ok(None)` means no credential for the GraphQL API is configured and
    /// the calendar was never requested.
    async fn fetch_contribution_calendar(
        &self,
        username: &str,
    ) -> Result<Option<ContributionCalendar>>;
}
