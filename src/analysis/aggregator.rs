use indicatif::{ProgressBar, ProgressStyle};
use std::collections::HashMap;

use crate::error::Result;
use crate::github::GitHubClient;
use crate::models::{AggregateStats, Completeness, RepositorySummary};

/// Per-repository fetch outcomes, kept only until folded into the totals.
#[derive(Debug)]
pub struct RepositoryTally {
    pub stars: u64,
    pub commits: Result<u64>,
    pub lines_of_code: Result<u64>,
}

/// Line-of-code proxy: total bytes across every reported language.
pub fn sum_language_bytes(languages: &HashMap<String, u64>) -> u64 {
    languages.values().sum()
}

impl AggregateStats {
    /// Adds one repository. A failed sub-fetch contributes zero to its own
    /// metric and flags that metric as partial; the other metric is untouched.
    pub fn accumulate(&mut self, repo: &str, tally: RepositoryTally) {
        self.total_stars += tally.stars;

        match tally.commits {
            Ok(count) => self.total_commits += count,
            Err(e) => {
                tracing::warn!("Error fetching commits for {}: {}", repo, e);
                self.commits.mark_partial();
            }
        }

        match tally.lines_of_code {
            Ok(bytes) => self.total_lines_of_code += bytes,
            Err(e) => {
                tracing::warn!("Error fetching languages for {}: {}", repo, e);
                self.lines_of_code.mark_partial();
            }
        }
    }
}

pub struct Aggregator<'a> {
    github: &'a GitHubClient,
    show_progress: bool,
}

impl<'a> Aggregator<'a> {
    pub fn new(github: &'a GitHubClient) -> Self {
        Self {
            github,
            show_progress: true,
        }
    }

    pub fn with_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }

    /// Walks the repositories one at a time; requests are never overlapped.
    pub async fn aggregate(
        &self,
        owner: &str,
        repos: &[RepositorySummary],
        listing: Completeness,
    ) -> AggregateStats {
        let mut stats = AggregateStats {
            repositories: listing,
            ..Default::default()
        };

        let pb = self.progress_bar(repos.len() as u64);

        for repo in repos {
            pb.set_message(repo.name.clone());
            let tally = self.tally(owner, repo).await;
            stats.accumulate(&repo.name, tally);
            pb.inc(1);
        }

        pb.finish_and_clear();
        stats
    }

    async fn tally(&self, owner: &str, repo: &RepositorySummary) -> RepositoryTally {
        let commits = self.github.count_commits(owner, &repo.name).await;
        let lines_of_code = self
            .github
            .get_repo_languages(owner, &repo.name)
            .await
            .map(|languages| sum_language_bytes(&languages));

        RepositoryTally {
            stars: repo.star_count,
            commits,
            lines_of_code,
        }
    }

    fn progress_bar(&self, len: u64) -> ProgressBar {
        if !self.show_progress {
            return ProgressBar::hidden();
        }

        let pb = ProgressBar::new(len);
        if let Ok(style) = ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} repos {msg}")
        {
            pb.set_style(style.progress_chars("#>-"));
        }
        pb
    }
}
