//! Tests for the stats record.

use super::*;

#[test]
fn deserializes_camel_case_record() {
    let json = r#"{
        "name": "Anurag Hazra",
        "totalStars": 100,
        "totalCommits": 200,
        "totalPRs": 300,
        "totalIssues": 400,
        "contributedTo": 500,
        "mergedPRsPercentage": 33.33,
        "rank": { "level": "A+", "percentile": 40 }
    }"#;

    let stats: StatsRecord = serde_json::from_str(json).unwrap();
    assert_eq!(stats.total_stars, 100);
    assert_eq!(stats.total_commits, 200);
    assert_eq!(stats.total_prs, 300);
    assert_eq!(stats.total_issues, 400);
    assert_eq!(stats.contributed_to, 500);
    assert!((stats.merged_prs_percentage - 33.33).abs() < f64::EPSILON);
    assert_eq!(stats.rank.level, "A+");
}

#[test]
fn missing_fields_default_to_zero() {
    let stats: StatsRecord = serde_json::from_str(r#"{ "name": "x" }"#).unwrap();
    assert_eq!(stats.total_reviews, 0);
    assert_eq!(stats.total_discussions_answered, 0);
    assert_eq!(stats.rank, Rank::default());
}
