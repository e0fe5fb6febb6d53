use serde::Deserialize;

/// Percentile-based standing. Lower percentile is better.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Rank {
    pub level: String,
    pub percentile: f64,
}

impl Default for Rank {
    fn default() -> Self {
        Self {
            level: "C".to_string(),
            percentile: 100.0,
        }
    }
}

/// Aggregated activity metrics for one user, as supplied by the data layer.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct StatsRecord {
    pub name: String,
    #[serde(alias = "totalStars")]
    pub total_stars: u64,
    #[serde(alias = "totalCommits")]
    pub total_commits: u64,
    #[serde(alias = "totalIssues")]
    pub total_issues: u64,
    #[serde(alias = "totalPRs")]
    pub total_prs: u64,
    #[serde(alias = "totalPRsMerged")]
    pub total_prs_merged: u64,
    #[serde(alias = "mergedPRsPercentage")]
    pub merged_prs_percentage: f64,
    #[serde(alias = "totalReviews")]
    pub total_reviews: u64,
    #[serde(alias = "totalDiscussionsStarted")]
    pub total_discussions_started: u64,
    #[serde(alias = "totalDiscussionsAnswered")]
    pub total_discussions_answered: u64,
    #[serde(alias = "contributedTo")]
    pub contributed_to: u64,
    pub rank: Rank,
}

#[cfg(test)]
#[path = "stats_tests.rs"]
mod tests;
