//! Tests for glyph lookup.

use super::*;

#[test]
fn every_stat_has_a_path_glyph() {
    for key in [
        StatKey::Stars,
        StatKey::Commits,
        StatKey::Prs,
        StatKey::PrsMerged,
        StatKey::PrsMergedPercentage,
        StatKey::Reviews,
        StatKey::Issues,
        StatKey::DiscussionsStarted,
        StatKey::DiscussionsAnswered,
        StatKey::Contribs,
    ] {
        assert!(stat_icon(key).starts_with("<path"), "{key}");
    }
}

#[test]
fn default_badge_shows_level() {
    let svg = rank_icon(RankIcon::Default, "A+", 12.0, "Top");
    assert!(svg.contains(r#"data-testid="level-rank-icon">A+</text>"#));
}

#[test]
fn percentile_badge_shows_one_decimal() {
    let svg = rank_icon(RankIcon::Percentile, "A+", 12.345, "Top");
    assert!(svg.contains(">Top</text>"));
    assert!(svg.contains(">12.3%</text>"));
}

#[test]
fn github_badge_is_the_logo() {
    let svg = rank_icon(RankIcon::Github, "A+", 12.0, "Top");
    assert!(svg.contains(r#"data-testid="github-rank-icon""#));
    assert!(!svg.contains("A+"));
}
