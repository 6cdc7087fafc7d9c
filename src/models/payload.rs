use serde::{Deserialize, Serialize};

use super::calendar::ContributionWeek;

/// The document returned by `GET /api/github`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsPayload {
    pub stats: ProfileStats,
    pub featured_repos: Vec<FeaturedRepo>,
    pub contribution_weeks: Vec<ContributionWeek>,
    pub username: String,
    pub avatar_url: String,
    pub profile_url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileStats {
    pub total_contributions: u32,
    pub public_repos: u32,
    pub total_stars: u32,
    pub followers: u32,
}

/// A non-fork repository selected for prominent display.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeaturedRepo {
    pub name: String,
    pub description: String,
    pub stars: u32,
    pub forks: u32,
    pub language: String,
    pub language_color: String,
    pub url: String,
}
