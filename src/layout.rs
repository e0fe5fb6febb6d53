//! Card sizing and rank circle geometry.
//!
//! Everything here is a pure function of the row count and a handful of
//! options, so the numbers can be checked without rendering any markup.

use std::f64::consts::PI;

pub const CARD_MIN_WIDTH: f64 = 287.0;
pub const CARD_DEFAULT_WIDTH: f64 = 287.0;
pub const RANK_CARD_MIN_WIDTH: f64 = 420.0;
pub const RANK_CARD_DEFAULT_WIDTH: f64 = 450.0;
pub const RANK_ONLY_CARD_MIN_WIDTH: f64 = 290.0;
pub const RANK_ONLY_CARD_DEFAULT_WIDTH: f64 = 290.0;

/// 16px glyph plus 1px padding.
pub const ICON_WIDTH: f64 = 17.0;
pub const RANK_CIRCLE_RADIUS: f64 = 40.0;
/// Right padding kept between the rank circle and the card edge.
const RANK_RIGHT_PADDING: f64 = 70.0;
const TITLE_PADDING: f64 = 50.0;
const BASE_HEIGHT: u32 = 45;
/// Upper bound for either card dimension; larger requests are clamped.
pub const MAX_CARD_EXTENT: u32 = 10_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardMode {
    RankHidden,
    RankWithRows,
    RankOnly,
}

impl CardMode {
    pub const fn new(has_rows: bool, rank_hidden: bool) -> Self {
        match (has_rows, rank_hidden) {
            (_, true) => Self::RankHidden,
            (true, false) => Self::RankWithRows,
            (false, false) => Self::RankOnly,
        }
    }

    const fn min_height(self) -> u32 {
        match self {
            Self::RankHidden => 0,
            Self::RankWithRows => 150,
            Self::RankOnly => 180,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WidthPolicy {
    pub min: f64,
    pub default: f64,
    pub icon_width: f64,
}

/// Minimum and default widths for a mode.
///
/// `title_width` only matters when the rank is hidden, where the title is the
/// widest thing on the card.
pub fn width_policy(mode: CardMode, show_icons: bool, title_width: f64) -> WidthPolicy {
    let icon_width = if show_icons && mode != CardMode::RankOnly {
        ICON_WIDTH
    } else {
        0.0
    };
    let (min, default) = match mode {
        CardMode::RankHidden => (
            (TITLE_PADDING + title_width * 2.0).max(CARD_MIN_WIDTH),
            CARD_DEFAULT_WIDTH,
        ),
        CardMode::RankWithRows => (RANK_CARD_MIN_WIDTH, RANK_CARD_DEFAULT_WIDTH),
        CardMode::RankOnly => (RANK_ONLY_CARD_MIN_WIDTH, RANK_ONLY_CARD_DEFAULT_WIDTH),
    };
    WidthPolicy {
        min: min + icon_width,
        default: default + icon_width,
        icon_width,
    }
}

/// Requested width if given, else the default; never below the minimum
/// and never above [`MAX_CARD_EXTENT`].
pub fn card_width(policy: &WidthPolicy, requested: Option<f64>) -> u32 {
    let width = requested.map_or(policy.default, f64::floor);
    width
        .min(f64::from(MAX_CARD_EXTENT))
        .max(policy.min)
        .ceil() as u32
}

pub fn card_height(mode: CardMode, row_count: usize, line_height: u32) -> u32 {
    let lines = u32::try_from(row_count).unwrap_or(u32::MAX).saturating_add(1);
    let content = lines.saturating_mul(line_height).saturating_add(BASE_HEIGHT);
    content.min(MAX_CARD_EXTENT).max(mode.min_height())
}

pub fn circle_circumference() -> f64 {
    2.0 * PI * RANK_CIRCLE_RADIUS
}

/// Dash offset leaving `value` percent of the ring drawn.
pub fn circle_offset(value: f64) -> f64 {
    let value = value.clamp(0.0, 100.0);
    (100.0 - value) / 100.0 * circle_circumference()
}

/// Ring fill for a percentile, where a lower percentile is better.
pub fn rank_progress(percentile: f64) -> f64 {
    (100.0 - percentile).clamp(0.0, 100.0)
}

/// Horizontal position of the rank circle group.
///
/// Past the default width the right padding stays fixed; below it the spare
/// space is split evenly between both sides of the circle.
pub fn rank_x_translation(mode: CardMode, policy: &WidthPolicy, width: u32) -> f64 {
    let width = f64::from(width);
    match mode {
        CardMode::RankOnly => width / 2.0 + 10.0,
        CardMode::RankWithRows | CardMode::RankHidden => {
            let min_x = RANK_CARD_MIN_WIDTH + policy.icon_width - RANK_RIGHT_PADDING;
            if width > RANK_CARD_DEFAULT_WIDTH {
                let max_expansion = min_x + (RANK_CARD_DEFAULT_WIDTH - policy.min) / 2.0;
                max_expansion + width - RANK_CARD_DEFAULT_WIDTH
            } else {
                min_x + (width - policy.min) / 2.0
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Geometry {
    pub mode: CardMode,
    pub width: u32,
    pub height: u32,
    pub rank_x_translation: f64,
    pub rank_y_translation: f64,
    pub circle_circumference: f64,
    pub progress: f64,
}

pub struct GeometryInput {
    pub row_count: usize,
    pub hide_rank: bool,
    pub show_icons: bool,
    pub line_height: u32,
    pub title_width: f64,
    pub requested_width: Option<f64>,
    pub percentile: f64,
}

pub fn compute_geometry(input: &GeometryInput) -> Geometry {
    let mode = CardMode::new(input.row_count > 0, input.hide_rank);
    let policy = width_policy(mode, input.show_icons, input.title_width);
    let width = card_width(&policy, input.requested_width);
    let height = card_height(mode, input.row_count, input.line_height);

    Geometry {
        mode,
        width,
        height,
        rank_x_translation: rank_x_translation(mode, &policy, width),
        rank_y_translation: f64::from(height) / 2.0 - 50.0,
        circle_circumference: circle_circumference(),
        progress: rank_progress(input.percentile),
    }
}

#[cfg(test)]
#[path = "layout_tests.rs"]
mod tests;
