use std::fs;
use std::path::Path;

use crate::analysis::aggregator::Aggregator;
use crate::config::Config;
use crate::error::{Error, Result};
use crate::github::GitHubClient;
use crate::models::{Completeness, StatsReport};
use crate::render::{cache_avatar, generate_svg};
use crate::report::{build_block, format_text, update_document};

/// How a run ended when it did not fail outright.
#[derive(Debug)]
pub enum RunOutcome {
    /// Stopped before producing any output: missing configuration or an
    /// unreachable profile.
    Aborted(Error),
    Completed(StatsReport),
}

/// Sequences a whole run. `connect` builds the client and is only called
/// once the configuration is valid, so a missing token makes no requests.
pub async fn run<F>(config: Result<Config>, connect: F, show_progress: bool) -> Result<RunOutcome>
where
    F: FnOnce(&Config) -> Result<GitHubClient>,
{
    let config = match config {
        Ok(config) => config,
        Err(e) if e.is_preflight() => return Ok(RunOutcome::Aborted(e)),
        Err(e) => return Err(e),
    };

    let github = match connect(&config) {
        Ok(github) => github,
        Err(e) if e.is_preflight() => return Ok(RunOutcome::Aborted(e)),
        Err(e) => return Err(e),
    };

    let pipeline = StatsPipeline::new(github, config).with_progress(show_progress);

    let report = match pipeline.collect().await {
        Ok(report) => report,
        Err(e) => {
            tracing::error!("Error fetching user details: {}", e);
            return Ok(RunOutcome::Aborted(e));
        }
    };

    println!("{}", format_text(&report));

    if !report.stats.is_complete() {
        tracing::warn!("Some totals are partial; see the warnings above");
    }

    pipeline.publish(&report).await?;
    Ok(RunOutcome::Completed(report))
}

pub struct StatsPipeline {
    github: GitHubClient,
    config: Config,
    show_progress: bool,
}

impl StatsPipeline {
    pub fn new(github: GitHubClient, config: Config) -> Self {
        Self {
            github,
            config,
            show_progress: true,
        }
    }

    pub fn with_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }

    /// Fetches the profile and every repository total. A profile failure is
    /// returned as an error before any repository request is made.
    pub async fn collect(&self) -> Result<StatsReport> {
        let username = &self.config.username;

        // Step 1: Profile
        let profile = self.github.get_user(username).await?;

        // Step 2: Repositories
        let listing = self.github.list_repositories(username).await;
        let completeness = match &listing.failure {
            Some(e) => {
                tracing::warn!(
                    "Error fetching repositories: {} (continuing with {} from {} page(s))",
                    e,
                    listing.items.len(),
                    listing.pages
                );
                Completeness::Partial
            }
            None => Completeness::Complete,
        };
        let repos = listing.items;
        tracing::info!("Found {} repositories", repos.len());

        // Step 3: Per-repository totals
        let stats = Aggregator::new(&self.github)
            .with_progress(self.show_progress)
            .aggregate(username, &repos, completeness)
            .await;

        Ok(StatsReport {
            username: username.clone(),
            profile,
            stats,
            repositories_scanned: repos.len(),
        })
    }

    /// Writes the avatar cache, the SVG card and the updated README.
    pub async fn publish(&self, report: &StatsReport) -> Result<()> {
        let avatar_path = &self.config.avatar_path;
        let svg_path = &self.config.svg_path;

        let has_avatar = cache_avatar(&self.github, &report.profile.avatar_url, avatar_path).await;
        let avatar_href = has_avatar.then(|| relative_href(avatar_path, svg_path));

        let svg = generate_svg(&report.profile, &report.stats, avatar_href.as_deref());
        fs::write(svg_path, svg)?;
        tracing::info!("Wrote {}", svg_path.display());

        let svg_href = relative_href(svg_path, &self.config.readme_path);
        let block = build_block(&report.profile, &report.stats, &svg_href);
        update_document(&self.config.readme_path, &block)
    }
}

/// Reference to `target` as seen from a document at `from`: the bare file
/// name when both share a directory, the path as given otherwise.
fn relative_href(target: &Path, from: &Path) -> String {
    let same_dir = target.parent().unwrap_or(Path::new("")) == from.parent().unwrap_or(Path::new(""));
    match target.file_name() {
        Some(name) if same_dir => name.to_string_lossy().into_owned(),
        _ => target.to_string_lossy().replace('\\', "/"),
    }
}
