use crate::models::{with_marker, StatsReport};

/// Labelled dump of every collected field, printed before rendering.
pub fn format_text(report: &StatsReport) -> String {
    let profile = &report.profile;
    let stats = &report.stats;
    let mut output = String::new();

    output.push_str(&format!("\nGitHub Stats for {}:\n", report.username));
    output.push_str(&format!("Followers: {}\n", profile.followers));
    output.push_str(&format!("Following: {}\n", profile.following));
    output.push_str(&format!("Public Repos: {}\n", profile.public_repos));
    output.push_str(&format!("Public Gists: {}\n", profile.public_gists));
    output.push_str(&format!("Bio: {}\n", profile.bio_or_placeholder()));
    output.push_str(&format!("Avatar Url: {}\n", profile.avatar_url));
    output.push_str(&format!(
        "Repositories Scanned: {}\n",
        with_marker(report.repositories_scanned as u64, stats.repositories)
    ));
    output.push_str(&format!(
        "Total Commits: {}\n",
        with_marker(stats.total_commits, stats.commits_completeness())
    ));
    output.push_str(&format!(
        "Total Stars: {}\n",
        with_marker(stats.total_stars, stats.stars_completeness())
    ));
    output.push_str(&format!(
        "Total Lines: {}\n",
        with_marker(stats.total_lines_of_code, stats.lines_completeness())
    ));

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AccountProfile, AggregateStats, Completeness};

    #[test]
    fn test_format_text_lists_every_field() {
        let report = StatsReport {
            username: "octocat".to_string(),
            profile: AccountProfile {
                followers: 1,
                following: 2,
                public_repos: 3,
                public_gists: 4,
                bio: None,
                avatar_url: "https://img.test/a".to_string(),
            },
            stats: AggregateStats {
                total_commits: 5,
                total_stars: 6,
                total_lines_of_code: 7,
                repositories: Completeness::Partial,
                ..Default::default()
            },
            repositories_scanned: 2,
        };

        let text = format_text(&report);
        assert!(text.contains("GitHub Stats for octocat:"));
        assert!(text.contains("Followers: 1\n"));
        assert!(text.contains("Public Gists: 4\n"));
        assert!(text.contains("Bio: No bio available\n"));
        assert!(text.contains("Avatar Url: https://img.test/a\n"));
        assert!(text.contains("Repositories Scanned: 2 (partial)\n"));
        assert!(text.contains("Total Stars: 6 (partial)\n"));
        assert!(text.contains("Total Lines: 7 (partial)\n"));
    }
}
