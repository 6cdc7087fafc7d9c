use crate::models::{FeaturedRepo, Repository};
use crate::taxonomy::language_color;

pub const MAX_FEATURED: usize = 4;

/// Picks the repositories shown prominently on the site: forks and meta repos
/// (any name containing ".github") are dropped, the rest sorted by stars
/// descending. Stable sort, so upstream order is preserved on ties.
pub fn select_featured(repos: &[Repository]) -> Vec<FeaturedRepo> {
    let mut eligible: Vec<&Repository> = repos
        .iter()
        .filter(|r| !r.fork && !r.name.contains(".github"))
        .collect();

    eligible.sort_by(|a, b| b.stargazers_count.cmp(&a.stargazers_count));

    eligible
        .into_iter()
        .take(MAX_FEATURED)
        .map(to_display)
        .collect()
}

fn to_display(repo: &Repository) -> FeaturedRepo {
    FeaturedRepo {
        name: repo.name.clone(),
        description: repo
            .description
            .clone()
            .unwrap_or_else(|| "No description provided".to_string()),
        stars: repo.stargazers_count,
        forks: repo.forks_count,
        language: repo.language.clone().unwrap_or_else(|| "Code".to_string()),
        language_color: language_color(repo.language.as_deref().unwrap_or("")).to_string(),
        url: repo.html_url.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn repo(name: &str, stars: u32, fork: bool) -> Repository {
        Repository {
            name: name.to_string(),
            description: Some(format!("{} description", name)),
            html_url: format!("https://github.com/octocat/{}", name),
            language: Some("Rust".to_string()),
            stargazers_count: stars,
            forks_count: 1,
            fork,
        }
    }

    #[test]
    fn test_excludes_forks_and_meta_repos() {
        let repos = vec![
            repo("alpha", 10, false),
            repo("forked", 100, true),
            repo(".github", 50, false),
            repo("beta.github.io", 40, false),
        ];

        let featured = select_featured(&repos);
        let names: Vec<&str> = featured.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["alpha"]);
    }

    #[test]
    fn test_sorts_by_stars_and_caps_at_four() {
        let repos = vec![
            repo("a", 1, false),
            repo("b", 9, false),
            repo("c", 3, false),
            repo("d", 7, false),
            repo("e", 5, false),
        ];

        let featured = select_featured(&repos);
        let stars: Vec<u32> = featured.iter().map(|f| f.stars).collect();
        assert_eq!(stars, vec![9, 7, 5, 3]);
        assert_eq!(featured.len(), MAX_FEATURED);
    }

    #[test]
    fn test_ties_keep_upstream_order() {
        let repos = vec![
            repo("first", 2, false),
            repo("second", 2, false),
            repo("third", 2, false),
        ];

        let featured = select_featured(&repos);
        let names: Vec<&str> = featured.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_display_fallbacks() {
        let bare = Repository {
            name: "bare".to_string(),
            description: None,
            html_url: "https://github.com/octocat/bare".to_string(),
            language: None,
            stargazers_count: 0,
            forks_count: 0,
            fork: false,
        };

        let featured = select_featured(&[bare]);
        assert_eq!(featured[0].description, "No description provided");
        assert_eq!(featured[0].language, "Code");
        assert_eq!(
            featured[0].language_color,
            crate::taxonomy::DEFAULT_LANGUAGE_COLOR
        );
    }
}
