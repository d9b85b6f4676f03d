use crate::models::{with_marker, AccountProfile, AggregateStats};

const WIDTH: u32 = 600;
const HEIGHT: u32 = 400;
const BACKGROUND: &str = "#f4f4f4";

const AVATAR_X: u32 = 20;
const AVATAR_Y: u32 = 20;
const AVATAR_SIZE: u32 = 100;

const TEXT_X: u32 = 140;
const TITLE_Y: u32 = 30;
const TITLE: &str = "GitHub Profile";
const TITLE_FONT_SIZE: u32 = 20;

const START_Y: u32 = 70;
const LINE_HEIGHT: u32 = 30;
const FONT_SIZE: u32 = 14;

fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Stat rows in display order.
pub fn stat_lines(profile: &AccountProfile, stats: &AggregateStats) -> Vec<String> {
    vec![
        format!("Followers: {}", profile.followers),
        format!("Following: {}", profile.following),
        format!("Public Repos: {}", profile.public_repos),
        format!("Public Gists: {}", profile.public_gists),
        format!(
            "Total Commits: {}",
            with_marker(stats.total_commits, stats.commits_completeness())
        ),
        format!(
            "Total Stars: {}",
            with_marker(stats.total_stars, stats.stars_completeness())
        ),
        format!(
            "Lines of Code: {}",
            with_marker(stats.total_lines_of_code, stats.lines_completeness())
        ),
        format!("Bio: {}", profile.bio_or_placeholder()),
    ]
}

/// Builds the profile card. `avatar_href` is omitted from the drawing when
/// the avatar could not be cached.
pub fn generate_svg(
    profile: &AccountProfile,
    stats: &AggregateStats,
    avatar_href: Option<&str>,
) -> String {
    let mut body = String::new();

    body.push_str(&format!(
        "<rect x=\"0\" y=\"0\" width=\"{WIDTH}px\" height=\"{HEIGHT}px\" fill=\"{BACKGROUND}\"/>\n"
    ));

    if let Some(href) = avatar_href {
        body.push_str(&format!(
            "<image x=\"{AVATAR_X}\" y=\"{AVATAR_Y}\" width=\"{AVATAR_SIZE}px\" height=\"{AVATAR_SIZE}px\" xlink:href=\"{}\"/>\n",
            escape_xml(href)
        ));
    }

    body.push_str(&format!(
        "<text x=\"{TEXT_X}\" y=\"{TITLE_Y}\" font-size=\"{TITLE_FONT_SIZE}\" fill=\"black\">{TITLE}</text>\n"
    ));

    for (i, line) in stat_lines(profile, stats).iter().enumerate() {
        let y = START_Y + (i as u32) * LINE_HEIGHT;
        body.push_str(&format!(
            "<text x=\"{TEXT_X}\" y=\"{y}\" font-size=\"{FONT_SIZE}\" fill=\"black\">{}</text>\n",
            escape_xml(line)
        ));
    }

    format!(
        r#"<?xml version="1.0" encoding="utf-8" ?>
<svg xmlns="http://www.w3.org/2000/svg" xmlns:xlink="http://www.w3.org/1999/xlink" baseProfile="tiny" version="1.2" width="{WIDTH}px" height="{HEIGHT}px">
{body}</svg>
"#
    )
}
