use crate::error::Result;
use crate::github::provider::StatsSource;
use crate::models::Repository;

pub const PER_PAGE: u32 = 100;

/// Safety cap on the pagination loop: at most 1000 repositories are scanned.
pub const MAX_PAGES: u32 = 10;

/// Walks the paged repository listing until a short page or the page cap.
pub struct RepoPager<'a> {
    source: &'a dyn StatsSource,
}

impl<'a> RepoPager<'a> {
    pub fn new(source: &'a dyn StatsSource) -> Self {
        Self { source }
    }

    pub async fn fetch_all(&self, username: &str) -> Result<Vec<Repository>> {
        let mut all_repos = Vec::new();
        let mut page = 1;

        loop {
            tracing::debug!("Fetching repository page {}", page);
            let repos = self.source.fetch_repo_page(username, page, PER_PAGE).await?;
            let count = repos.len();
            all_repos.extend(repos);

            if count < PER_PAGE as usize || page >= MAX_PAGES {
                break;
            }

            page += 1;
        }

        Ok(all_repos)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicU32, Ordering};

    use async_trait::async_trait;

    use super::*;
    use crate::models::{ContributionCalendar, GitHubUser};

    /// Serves `pages` full pages, then a short page; counts page requests.
    struct PagedSource {
        full_pages: u32,
        trailing: usize,
        requests: AtomicU32,
    }

    fn repo(name: &str) -> Repository {
        Repository {
            name: name.to_string(),
            description: None,
            html_url: format!("https://github.com/octocat/{}", name),
            language: None,
            stargazers_count: 0,
            forks_count: 0,
            fork: false,
        }
    }

    #[async_trait]
    impl StatsSource for PagedSource {
        async fn fetch_user(&self, _username: &str) -> Result<GitHubUser> {
            unimplemented!("not used by the pager")
        }

        async fn fetch_repo_page(
            &self,
            _username: &str,
            page: u32,
            per_page: u32,
        ) -> Result<Vec<Repository>> {
            self.requests.fetch_add(1, Ordering::SeqCst);
            let count = if page <= self.full_pages {
                per_page as usize
            } else {
                self.trailing
            };
            Ok((0..count).map(|i| repo(&format!("repo-{}-{}", page, i))).collect())
        }

        async fn fetch_contribution_calendar(
            &self,
            _username: &str,
        ) -> Result<Option<ContributionCalendar>> {
            Ok(None)
        }
    }

    #[tokio::test]
    async fn test_stops_on_short_page() {
        let source = PagedSource {
            full_pages: 2,
            trailing: 17,
            requests: AtomicU32::new(0),
        };
        let repos = RepoPager::new(&source).fetch_all("octocat").await.unwrap();

        assert_eq!(repos.len(), 217);
        assert_eq!(source.requests.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn test_page_cap_bounds_the_scan() {
        // Upstream claims full pages forever; the cap must stop at 10 pages
        // and 1000 repositories with no 11th request.
        let source = PagedSource {
            full_pages: u32::MAX,
            trailing: 0,
            requests: AtomicU32::new(0),
        };
        let repos = RepoPager::new(&source).fetch_all("octocat").await.unwrap();

        assert_eq!(repos.len(), 1000);
        assert_eq!(source.requests.load(Ordering::SeqCst), 10);
    }

    #[tokio::test]
    async fn test_single_short_page() {
        let source = PagedSource {
            full_pages: 0,
            trailing: 5,
            requests: AtomicU32::new(0),
        };
        let repos = RepoPager::new(&source).fetch_all("octocat").await.unwrap();

        assert_eq!(repos.len(), 5);
        assert_eq!(source.requests.load(Ordering::SeqCst), 1);
    }
}
