//! README injection.
//!
//! The generated block sits between [`START_TAG`] and [`END_TAG`]. When both
//! markers are present the region (markers included) is replaced; otherwise
//! the block is appended after one blank line. Free text is defused so it
//! can never contain a marker of its own. The file is rewritten in place
//! with no backup and no locking.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use crate::error::Result;
use crate::models::{with_marker, AccountProfile, AggregateStats};

pub const START_TAG: &str = "<!--STATS-START-->";
pub const END_TAG: &str = "<!--STATS-END-->";

/// Rewrites HTML comment openers so user text cannot carry a marker into
/// the generated region. Markdown renders `&lt;` as `<`, so the visible
/// text is unchanged.
fn defuse_markers(text: &str) -> String {
    text.replace("<!--", "&lt;!--")
}

pub fn build_block(profile: &AccountProfile, stats: &AggregateStats, svg_href: &str) -> String {
    format!(
        "{START_TAG}

### 🧠 GitHub Profile Summary

- **👥 Followers:** {followers}
- **🔄 Following:** {following}
- **📁 Public Repositories:** {public_repos}
- **📝 Public Gists:** {public_gists}
- **💬 Bio:** {bio}
- **🧮 Total Commits:** {commits}
- **⭐ Stars Earned:** {stars}
- **📊 Lines of Code:** {lines}

![Profile SVG]({svg_href})

{END_TAG}",
        followers = profile.followers,
        following = profile.following,
        public_repos = profile.public_repos,
        public_gists = profile.public_gists,
        bio = defuse_markers(profile.bio_or_placeholder()),
        commits = with_marker(stats.total_commits, stats.commits_completeness()),
        stars = with_marker(stats.total_stars, stats.stars_completeness()),
        lines = with_marker(stats.total_lines_of_code, stats.lines_completeness()),
    )
}

/// Pure text substitution of `block` into `existing`.
///
/// When appending, existing text is kept verbatim and exactly one empty line
/// separates it from the block: nothing is inserted if the text already ends
/// in a blank line. The appended block is newline-terminated.
pub fn splice(existing: &str, block: &str) -> String {
    if let Some(start) = existing.find(START_TAG) {
        if let Some(offset) = existing[start..].find(END_TAG) {
            let end = start + offset + END_TAG.len();
            return format!("{}{}{}", &existing[..start], block, &existing[end..]);
        }
    }

    if existing.is_empty() || existing.ends_with("\n\n") {
        format!("{}{}\n", existing, block)
    } else if existing.ends_with('\n') {
        format!("{}\n{}\n", existing, block)
    } else {
        format!("{}\n\n{}\n", existing, block)
    }
}

/// Reads `path` (missing counts as empty), splices the block in and writes
/// the whole document back.
pub fn update_document(path: &Path, block: &str) -> Result<()> {
    let existing = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            tracing::warn!("{} not found, creating it", path.display());
            String::new()
        }
        Err(e) => return Err(e.into()),
    };

    fs::write(path, splice(&existing, block))?;
    tracing::info!("Updated {}", path.display());
    Ok(())
}
