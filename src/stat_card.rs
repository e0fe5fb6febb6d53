//! The GitHub stats card: row selection, row markup and final composition.

use std::fmt::Write;

use crate::card::Card;
use crate::clock::{Clock, SystemClock};
use crate::error::{CardError, Result};
use crate::format::{
    DEFAULT_FONT_SIZE, Direction, escape_xml, flex_layout, k_formatter, measure_text, px,
};
use crate::i18n::{I18n, is_long_locale};
use crate::icons::{rank_icon, stat_icon};
use crate::layout::{Geometry, GeometryInput, circle_offset, compute_geometry};
use crate::options::{NumberFormat, RenderOptions, StatKey};
use crate::stats::StatsRecord;
use crate::theme::{CardColors, resolve_colors};

/// Every statistic in display order, flagged with whether it is shown by
/// default. Optional rows only appear when named in `show`.
pub const CANONICAL_ROWS: [(StatKey, bool); 10] = [
    (StatKey::Stars, true),
    (StatKey::Commits, true),
    (StatKey::Prs, true),
    (StatKey::PrsMerged, false),
    (StatKey::PrsMergedPercentage, false),
    (StatKey::Reviews, false),
    (StatKey::Issues, true),
    (StatKey::DiscussionsStarted, false),
    (StatKey::DiscussionsAnswered, false),
    (StatKey::Contribs, true),
];

const LABEL_X_WITH_ICON: f64 = 25.0;
const VALUE_X: f64 = 120.0;
const VALUE_X_WITH_ICON: f64 = 140.0;
const VALUE_SHIFT: f64 = 79.01;
// TODO: VALUE_SHIFT and LONG_LOCALE_SHIFT were tuned by eye; derive them from measured label widths.
/// Extra value offset for locales in [`crate::i18n::LONG_LOCALES`].
pub const LONG_LOCALE_SHIFT: f64 = 50.0;
const STAGGER_BASE: usize = 3;
const STAGGER_STEP_MS: usize = 150;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StatValue {
    Count(u64),
    Percent(f64),
}

impl StatValue {
    /// The value as written in the accessibility description.
    pub fn raw(&self) -> String {
        match self {
            Self::Count(n) => n.to_string(),
            Self::Percent(p) => format!("{p:.2}"),
        }
    }

    pub fn formatted(&self, number_format: NumberFormat) -> String {
        match (self, number_format) {
            (Self::Count(n), NumberFormat::Short) => k_formatter(*n),
            _ => self.raw(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct StatRow {
    pub key: StatKey,
    pub icon: &'static str,
    pub label: String,
    pub value: StatValue,
    pub unit_symbol: Option<&'static str>,
    /// Position among the visible rows; drives the entrance delay.
    pub index: usize,
}

impl StatRow {
    pub fn stagger_delay_ms(&self) -> usize {
        (self.index + STAGGER_BASE) * STAGGER_STEP_MS
    }
}

fn label_key(key: StatKey) -> &'static str {
    match key {
        StatKey::Stars => "statcard.totalstars",
        StatKey::Commits => "statcard.commits",
        StatKey::Prs => "statcard.prs",
        StatKey::PrsMerged => "statcard.prs-merged",
        StatKey::PrsMergedPercentage => "statcard.prs-merged-percentage",
        StatKey::Reviews => "statcard.reviews",
        StatKey::Issues => "statcard.issues",
        StatKey::DiscussionsStarted => "statcard.discussions-started",
        StatKey::DiscussionsAnswered => "statcard.discussions-answered",
        StatKey::Contribs => "statcard.contribs",
    }
}

fn stat_value(key: StatKey, stats: &StatsRecord) -> StatValue {
    match key {
        StatKey::Stars => StatValue::Count(stats.total_stars),
        StatKey::Commits => StatValue::Count(stats.total_commits),
        StatKey::Prs => StatValue::Count(stats.total_prs),
        StatKey::PrsMerged => StatValue::Count(stats.total_prs_merged),
        StatKey::PrsMergedPercentage => StatValue::Percent(stats.merged_prs_percentage),
        StatKey::Reviews => StatValue::Count(stats.total_reviews),
        StatKey::Issues => StatValue::Count(stats.total_issues),
        StatKey::DiscussionsStarted => StatValue::Count(stats.total_discussions_started),
        StatKey::DiscussionsAnswered => StatValue::Count(stats.total_discussions_answered),
        StatKey::Contribs => StatValue::Count(stats.contributed_to),
    }
}

/// Builds the visible rows in canonical order.
///
/// Fails when no row survives and the rank is hidden too, since the card
/// would be empty.
pub fn select_rows(
    stats: &StatsRecord,
    options: &RenderOptions,
    i18n: &I18n,
    year: i32,
) -> Result<Vec<StatRow>> {
    let rows: Vec<StatRow> = CANONICAL_ROWS
        .iter()
        .filter(|(key, always)| *always || options.show.contains(key))
        .filter(|(key, _)| !options.hide.contains(key))
        .enumerate()
        .map(|(index, &(key, _))| {
            let mut label = i18n.t(label_key(key));
            if key == StatKey::Commits && !options.include_all_commits {
                label = format!("{label} ({year})");
            }
            StatRow {
                key,
                icon: stat_icon(key),
                label,
                value: stat_value(key, stats),
                unit_symbol: (key == StatKey::PrsMergedPercentage).then_some("%"),
                index,
            }
        })
        .collect();

    if rows.is_empty() && options.hide_rank {
        return Err(CardError::configuration(
            "Could not render stats card.",
            "Either stats or rank are required.",
        ));
    }

    log::debug!(
        "selected stat rows: {:?}",
        rows.iter().map(|r| r.key).collect::<Vec<_>>()
    );
    Ok(rows)
}

/// Presentation settings shared by every row of one card.
#[derive(Debug, Clone, Copy)]
pub struct RowStyle {
    pub show_icons: bool,
    pub bold: bool,
    pub number_format: NumberFormat,
    pub long_locale: bool,
}

impl RowStyle {
    pub fn from_options(options: &RenderOptions) -> Self {
        Self {
            show_icons: options.show_icons,
            bold: options.text_bold,
            number_format: options.number_format,
            long_locale: is_long_locale(options.locale.as_deref()),
        }
    }

    pub fn value_x(&self) -> f64 {
        let base = if self.show_icons {
            VALUE_X_WITH_ICON
        } else {
            VALUE_X
        };
        let locale_shift = if self.long_locale {
            LONG_LOCALE_SHIFT
        } else {
            0.0
        };
        base + VALUE_SHIFT + locale_shift
    }
}

/// Markup for one label/value pair, positioned at the row origin.
pub fn render_row(row: &StatRow, style: &RowStyle) -> String {
    let weight = if style.bold { "bold" } else { "not_bold" };
    let icon = if style.show_icons {
        format!(
            r#"
  <svg data-testid="icon" class="icon" viewBox="0 0 16 16" version="1.1" width="16" height="16">
    {}
  </svg>"#,
            row.icon
        )
    } else {
        String::new()
    };
    let label_x = if style.show_icons {
        format!(r#" x="{LABEL_X_WITH_ICON}""#)
    } else {
        String::new()
    };
    let unit = row
        .unit_symbol
        .map(|u| format!(" {u}"))
        .unwrap_or_default();

    format!(
        r#"
<g class="stagger" style="animation-delay: {delay}ms" transform="translate(25, 0)">{icon}
  <text class="stat {weight}"{label_x} y="12.5">{label}:</text>
  <text class="stat {weight}" x="{value_x}" y="12.5" data-testid="{key}">{value}{unit}</text>
</g>"#,
        delay = row.stagger_delay_ms(),
        label = escape_xml(&row.label),
        value_x = px(style.value_x()),
        key = row.key,
        value = row.value.formatted(style.number_format),
    )
}

fn stats_css(colors: &CardColors, options: &RenderOptions, geometry: &Geometry) -> String {
    let icon_display = if options.show_icons { "block" } else { "none" };
    let mut css = format!(
        r#"
  .stat {{ font: 600 14px 'Segoe UI', Ubuntu, "Helvetica Neue", Sans-Serif; fill: {text}; }}
  @supports(-moz-appearance: auto) {{ .stat {{ font-size:12px; }} }}
  .stagger {{ opacity: 0; animation: fadeInAnimation 0.3s ease-in-out forwards; }}
  .rank-text {{ font: 800 24px 'Segoe UI', Ubuntu, Sans-Serif; fill: {text}; animation: scaleInAnimation 0.3s ease-in-out forwards; }}
  .rank-percentile-header {{ font-size: 14px; }}
  .rank-percentile-text {{ font-size: 16px; }}
  .not_bold {{ font-weight: 400 }}
  .bold {{ font-weight: 700 }}
  .icon {{ fill: {icon}; display: {icon_display}; }}
  .rank-circle-rim {{ stroke: {ring}; fill: none; stroke-width: 6; opacity: 0.2; }}
  .rank-circle {{ stroke: {ring}; stroke-dasharray: {dash}; fill: none; stroke-width: 6; stroke-linecap: round; opacity: 0.8; transform-origin: -10px 8px; transform: rotate(-90deg); animation: rankAnimation 1s forwards ease-in-out; }}"#,
        text = colors.text,
        icon = colors.icon,
        ring = colors.ring,
        dash = geometry.circle_circumference,
    );
    if !options.deterministic {
        let _ = write!(
            css,
            "
  @keyframes rankAnimation {{
    from {{ stroke-dashoffset: {}; }}
    to {{ stroke-dashoffset: {}; }}
  }}",
            circle_offset(0.0),
            circle_offset(geometry.progress)
        );
    }
    css
}

fn rank_circle(
    stats: &StatsRecord,
    options: &RenderOptions,
    geometry: &Geometry,
    i18n: &I18n,
) -> String {
    let badge = rank_icon(
        options.rank_icon,
        &escape_xml(&stats.rank.level),
        stats.rank.percentile,
        &i18n.t("statcard.top"),
    );
    format!(
        r#"<g data-testid="rank-circle" transform="translate({x}, {y})">
  <circle class="rank-circle-rim" cx="-10" cy="8" r="40" />
  <circle class="rank-circle" cx="-10" cy="8" r="40" stroke-dashoffset="{offset}" />
  <g class="rank-text">
    {badge}
  </g>
</g>"#,
        x = px(geometry.rank_x_translation),
        y = px(geometry.rank_y_translation),
        offset = circle_offset(geometry.progress),
    )
}

/// Screen reader summary of the rows, in visual order.
pub fn accessibility_description(
    rows: &[StatRow],
    i18n: &I18n,
    options: &RenderOptions,
    year: i32,
) -> String {
    rows.iter()
        .map(|row| {
            let unit = row.unit_symbol.unwrap_or_default();
            if row.key == StatKey::Commits && !options.include_all_commits {
                format!(
                    "{}: {}{unit}",
                    i18n.t("statcard.commits-in-year")
                        .replace("{year}", &year.to_string()),
                    row.value.raw()
                )
            } else {
                format!("{}: {}{unit}", row.label, row.value.raw())
            }
        })
        .collect::<Vec<_>>()
        .join(", ")
}

/// Renders the stats card using the system clock for the commit year.
pub fn render(stats: &StatsRecord, options: &RenderOptions) -> Result<String> {
    render_with_clock(stats, options, &SystemClock)
}

pub fn render_with_clock(
    stats: &StatsRecord,
    options: &RenderOptions,
    clock: &dyn Clock,
) -> Result<String> {
    let year = clock.current_year();
    let colors = resolve_colors(options);
    let i18n = I18n::new(options.locale.as_deref(), &stats.name);

    let rows = select_rows(stats, options, &i18n, year)?;

    let title = match &options.custom_title {
        Some(custom) => custom.clone(),
        None if rows.is_empty() => i18n.t("statcard.ranktitle"),
        None => i18n.t("statcard.title"),
    };

    let geometry = compute_geometry(&GeometryInput {
        row_count: rows.len(),
        hide_rank: options.hide_rank,
        show_icons: options.show_icons,
        line_height: options.line_height,
        title_width: measure_text(&title, DEFAULT_FONT_SIZE),
        requested_width: options.requested_width(),
        percentile: stats.rank.percentile,
    });
    log::debug!("stats card geometry: {geometry:?}");

    let style = RowStyle::from_options(options);
    let row_markup: Vec<String> = rows.iter().map(|row| render_row(row, &style)).collect();
    let stacked = flex_layout(
        &row_markup,
        f64::from(options.line_height),
        Direction::Column,
        &[],
    )
    .concat();

    let rank = if options.hide_rank {
        String::new()
    } else {
        rank_circle(stats, options, &geometry, &i18n)
    };

    let description = accessibility_description(&rows, &i18n, options, year);

    let mut card = Card::new(&title, geometry.width, geometry.height, colors.clone())
        .with_border_radius(options.border_radius)
        .with_hide_border(options.hide_border)
        .with_hide_title(options.hide_title)
        .with_css(stats_css(&colors, options, &geometry));
    let a11y_title = format!("{}, Rank: {}", title, stats.rank.level);
    card = card.with_accessibility_label(&a11y_title, &description);
    if options.disable_animations {
        card = card.disable_animations();
    }

    let body = format!("{rank}\n<svg x=\"0\" y=\"0\">\n{stacked}\n</svg>");
    Ok(card.render(&body))
}

#[cfg(test)]
#[path = "stat_card_tests.rs"]
mod tests;
