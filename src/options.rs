//! Render options and their parsing.
//!
//! Options arrive as loosely-typed user input (query strings, JSON files), so
//! parsing is forgiving: unknown statistic keys are dropped and malformed
//! widths fall back to the mode default instead of failing the render.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer};

/// Identifier of one statistic row. Variant order is the canonical row order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum StatKey {
    Stars,
    Commits,
    Prs,
    PrsMerged,
    PrsMergedPercentage,
    Reviews,
    Issues,
    DiscussionsStarted,
    DiscussionsAnswered,
    Contribs,
}

impl StatKey {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Stars => "stars",
            Self::Commits => "commits",
            Self::Prs => "prs",
            Self::PrsMerged => "prs_merged",
            Self::PrsMergedPercentage => "prs_merged_percentage",
            Self::Reviews => "reviews",
            Self::Issues => "issues",
            Self::DiscussionsStarted => "discussions_started",
            Self::DiscussionsAnswered => "discussions_answered",
            Self::Contribs => "contribs",
        }
    }
}

impl fmt::Display for StatKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StatKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "stars" => Ok(Self::Stars),
            "commits" => Ok(Self::Commits),
            "prs" => Ok(Self::Prs),
            "prs_merged" => Ok(Self::PrsMerged),
            "prs_merged_percentage" => Ok(Self::PrsMergedPercentage),
            "reviews" => Ok(Self::Reviews),
            "issues" => Ok(Self::Issues),
            "discussions_started" => Ok(Self::DiscussionsStarted),
            "discussions_answered" => Ok(Self::DiscussionsAnswered),
            "contribs" => Ok(Self::Contribs),
            other => Err(format!("unknown stat key '{other}'")),
        }
    }
}

/// Parses a comma-separated key list, skipping anything unrecognised.
pub fn parse_key_list(raw: &str) -> BTreeSet<StatKey> {
    raw.split(',')
        .filter(|s| !s.trim().is_empty())
        .filter_map(|s| match s.parse() {
            Ok(key) => Some(key),
            Err(e) => {
                log::warn!("ignoring {e}");
                None
            }
        })
        .collect()
}

fn lenient_keys<'de, D>(deserializer: D) -> Result<BTreeSet<StatKey>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum KeyList {
        Csv(String),
        List(Vec<String>),
    }

    Ok(match KeyList::deserialize(deserializer)? {
        KeyList::Csv(raw) => parse_key_list(&raw),
        KeyList::List(items) => parse_key_list(&items.join(",")),
    })
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NumberFormat {
    #[default]
    Short,
    Long,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RankIcon {
    #[default]
    Default,
    Github,
    Percentile,
}

/// Requested card width, as given by the user.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum CardWidth {
    Pixels(f64),
    Text(String),
}

impl CardWidth {
    /// The requested width in pixels, or `None` when it is zero or not a number.
    pub fn pixels(&self) -> Option<f64> {
        let px = match self {
            Self::Pixels(px) => *px,
            Self::Text(raw) => raw.trim().parse::<f64>().ok()?,
        };
        (px.is_finite() && px != 0.0).then_some(px)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
    #[serde(deserialize_with = "lenient_keys")]
    pub hide: BTreeSet<StatKey>,
    #[serde(deserialize_with = "lenient_keys")]
    pub show: BTreeSet<StatKey>,
    pub show_icons: bool,
    pub hide_title: bool,
    pub hide_border: bool,
    pub hide_rank: bool,
    pub card_width: Option<CardWidth>,
    pub include_all_commits: bool,
    pub line_height: u32,
    pub title_color: Option<String>,
    pub text_color: Option<String>,
    pub icon_color: Option<String>,
    pub ring_color: Option<String>,
    pub border_color: Option<String>,
    pub bg_color: Option<String>,
    pub theme: Option<String>,
    pub custom_title: Option<String>,
    pub border_radius: f64,
    pub number_format: NumberFormat,
    pub locale: Option<String>,
    pub disable_animations: bool,
    pub rank_icon: RankIcon,
    pub text_bold: bool,
    /// Leave out keyframe blocks so repeated renders compare byte-for-byte.
    pub deterministic: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            hide: BTreeSet::new(),
            show: BTreeSet::new(),
            show_icons: false,
            hide_title: false,
            hide_border: false,
            hide_rank: false,
            card_width: None,
            include_all_commits: false,
            line_height: 25,
            title_color: None,
            text_color: None,
            icon_color: None,
            ring_color: None,
            border_color: None,
            bg_color: None,
            theme: None,
            custom_title: None,
            border_radius: 4.5,
            number_format: NumberFormat::Short,
            locale: None,
            disable_animations: false,
            rank_icon: RankIcon::Default,
            text_bold: true,
            deterministic: false,
        }
    }
}

impl RenderOptions {
    pub(crate) fn requested_width(&self) -> Option<f64> {
        self.card_width.as_ref().and_then(CardWidth::pixels)
    }
}

#[cfg(test)]
#[path = "options_tests.rs"]
mod tests;
