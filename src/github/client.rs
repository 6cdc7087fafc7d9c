use std::time::Duration;

use async_trait::async_trait;
use reqwest::{header, Client};
use serde::Serialize;

use crate::error::{Error, Result};
use crate::github::cache::ResponseCache;
use crate::github::provider::StatsSource;
use crate::github::rate_limiter::RateLimiter;
use crate::models::{
    CalendarQueryResponse, ContributionCalendar, GitHubUser, GraphQLResponse, Repository,
};

const CONTRIBUTION_QUERY: &str = r#"
query($username: String!) {
  user(login: $username) {
    contributionsCollection {
      contributionCalendar {
        totalContributions
        weeks {
          contributionDays {
            date
            contributionCount
            contributionLevel
          }
        }
      }
    }
  }
}"#;

#[derive(Serialize)]
struct GraphQLRequest {
    query: &'static str,
    variables: CalendarVariables,
}

#[derive(Serialize)]
struct CalendarVariables {
    username: String,
}

pub struct GitHubClient {
    client: Client,
    rate_limiter: RateLimiter,
    cache: ResponseCache,
    base_url: String,
    has_token: bool,
}

impl GitHubClient {
    pub fn new(token: Option<&str>, cache_ttl: Duration) -> Result<Self> {
        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::ACCEPT,
            header::HeaderValue::from_static("application/vnd.github+json"),
        );
        headers.insert(
            "X-GitHub-Api-Version",
            header::HeaderValue::from_static("2022-11-28"),
        );
        headers.insert(
            header::USER_AGENT,
            header::HeaderValue::from_static("gitstats/0.1"),
        );
        if let Some(token) = token {
            headers.insert(
                header::AUTHORIZATION,
                header::HeaderValue::from_str(&format!("Bearer {}", token))?,
            );
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .default_headers(headers)
            .build()?;

        Ok(Self {
            client,
            rate_limiter: RateLimiter::new(),
            cache: ResponseCache::new(cache_ttl),
            base_url: "https://api.github.com".to_string(),
            has_token: token.is_some(),
        })
    }
}

#[async_trait]
impl StatsSource for GitHubClient {
    async fn fetch_user(&self, username: &str) -> Result<GitHubUser> {
        let url = format!("{}/users/{}", self.base_url, username);
        if let Some(body) = self.cache.get(&url) {
            return Ok(serde_json::from_str(&body)?);
        }

        self.rate_limiter.check()?;
        tracing::info!("Fetching user: {}", username);

        let response = self.client.get(&url).send().await?;
        self.rate_limiter.update_from_response(&response);

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Err(Error::UserNotFound(username.to_string()));
        }

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(Error::GitHubApi(format!(
                "Failed to fetch user {}: {} - {}",
                username, status, body
            )));
        }

        let body = response.text().await?;
        let user = serde_json::from_str(&body)?;
        self.cache.put(&url, body);
        Ok(user)
    }

    async fn fetch_repo_page(
        &self,
        username: &str,
        page: u32,
        per_page: u32,
    ) -> Result<Vec<Repository>> {
        let url = format!(
            "{}/users/{}/repos?sort=updated&per_page={}&page={}",
            self.base_url, username, per_page, page
        );
        if let Some(body) = self.cache.get(&url) {
            return Ok(serde_json::from_str(&body)?);
        }

        self.rate_limiter.check()?;
        tracing::debug!("Fetching: {}", url);

        let response = self.client.get(&url).send().await?;
        self.rate_limiter.update_from_response(&response);

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(Error::GitHubApi(format!(
                "Failed to fetch repositories for {}: {} - {}",
                username, status, body
            )));
        }

        let body = response.text().await?;
        let repos = serde_json::from_str(&body)?;
        self.cache.put(&url, body);
        Ok(repos)
    }

    async fn fetch_contribution_calendar(
        &self,
        username: &str,
    ) -> Result<Option<ContributionCalendar>> {
        if !self.has_token {
            tracing::debug!("No GitHub token configured, skipping contribution calendar");
            return Ok(None);
        }

        // POSTs to a single URL, so the username goes into the cache key.
        let cache_key = format!("{}/graphql#{}", self.base_url, username);
        if let Some(body) = self.cache.get(&cache_key) {
            return Ok(Some(parse_calendar(&body)?));
        }

        self.rate_limiter.check()?;
        tracing::info!("Fetching contribution calendar for: {}", username);

        let request_body = GraphQLRequest {
            query: CONTRIBUTION_QUERY,
            variables: CalendarVariables {
                username: username.to_string(),
            },
        };

        let response = self
            .client
            .post(format!("{}/graphql", self.base_url))
            .json(&request_body)
            .send()
            .await?;
        self.rate_limiter.update_from_response(&response);

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(Error::GitHubApi(format!(
                "Contribution calendar query failed: {} - {}",
                status, body
            )));
        }

        let body = response.text().await?;
        let calendar = parse_calendar(&body)?;
        self.cache.put(&cache_key, body);
        Ok(Some(calendar))
    }
}

fn parse_calendar(body: &str) -> Result<ContributionCalendar> {
    let parsed: GraphQLResponse<CalendarQueryResponse> = serde_json::from_str(body)?;

    if let Some(errors) = parsed.errors {
        let messages: Vec<String> = errors.into_iter().map(|e| e.message).collect();
        return Err(Error::GitHubApi(format!(
            "GraphQL errors: {}",
            messages.join("; ")
        )));
    }

    parsed
        .data
        .and_then(|data| data.user)
        .map(|user| user.contributions_collection.contribution_calendar)
        .ok_or_else(|| {
            Error::GitHubApi("contribution calendar missing from GraphQL response".to_string())
        })
}
