//! Generic card frame: background, border, title and style block around a body.

use std::fmt::Write;

use crate::format::{Direction, escape_xml, flex_layout};
use crate::theme::{Background, CardColors};

const PADDING_X: f64 = 25.0;
const PADDING_Y: f64 = 35.0;
/// Height removed from the card when the title row is hidden.
const TITLE_ROW_HEIGHT: u32 = 30;

const BASE_ANIMATIONS: &str = "
  @keyframes scaleInAnimation {
    from { transform: translate(-5px, 5px) scale(0); }
    to { transform: translate(-5px, 5px) scale(1); }
  }
  @keyframes fadeInAnimation {
    from { opacity: 0; }
    to { opacity: 1; }
  }";

const NO_ANIMATIONS: &str = "* { animation-duration: 0s !important; animation-delay: 0s !important; }";

#[derive(Debug, Clone)]
pub struct Card {
    width: u32,
    height: u32,
    border_radius: f64,
    colors: CardColors,
    title: String,
    hide_border: bool,
    hide_title: bool,
    css: String,
    animations: bool,
    a11y_title: String,
    a11y_desc: String,
}

impl Card {
    /// `title` is escaped on the way in.
    #[must_use]
    pub fn new(title: &str, width: u32, height: u32, colors: CardColors) -> Self {
        Self {
            width,
            height,
            border_radius: 4.5,
            colors,
            title: escape_xml(title),
            hide_border: false,
            hide_title: false,
            css: String::new(),
            animations: true,
            a11y_title: String::new(),
            a11y_desc: String::new(),
        }
    }

    pub const fn height(&self) -> u32 {
        self.height
    }

    #[must_use]
    pub const fn with_border_radius(mut self, radius: f64) -> Self {
        self.border_radius = radius;
        self
    }

    #[must_use]
    pub const fn with_hide_border(mut self, hide: bool) -> Self {
        self.hide_border = hide;
        self
    }

    #[must_use]
    pub fn with_hide_title(mut self, hide: bool) -> Self {
        if hide && !self.hide_title {
            self.height = self.height.saturating_sub(TITLE_ROW_HEIGHT);
        }
        self.hide_title = hide;
        self
    }

    #[must_use]
    pub fn with_css(mut self, css: impl Into<String>) -> Self {
        self.css = css.into();
        self
    }

    /// Forces every animation to finish immediately.
    #[must_use]
    pub const fn disable_animations(mut self) -> Self {
        self.animations = false;
        self
    }

    /// Both strings are escaped on the way in.
    #[must_use]
    pub fn with_accessibility_label(mut self, title: &str, desc: &str) -> Self {
        self.a11y_title = escape_xml(title);
        self.a11y_desc = escape_xml(desc);
        self
    }

    fn render_title(&self) -> String {
        let text = format!(
            r#"<text x="0" y="0" class="header" data-testid="header">{}</text>"#,
            self.title
        );
        format!(
            r#"<g data-testid="card-title" transform="translate({PADDING_X}, {PADDING_Y})">{}</g>"#,
            flex_layout(&[text], 25.0, Direction::Row, &[]).concat()
        )
    }

    fn render_gradient(&self) -> String {
        let Background::Gradient { angle, stops } = &self.colors.bg else {
            return String::new();
        };
        let step = if stops.len() > 1 {
            100.0 / (stops.len() - 1) as f64
        } else {
            0.0
        };
        let mut out = format!(
            r#"<defs><linearGradient id="gradient" gradientTransform="rotate({angle})" gradientUnits="userSpaceOnUse">"#
        );
        for (i, color) in stops.iter().enumerate() {
            let offset = i as f64 * step;
            let _ = write!(out, r#"<stop offset="{offset}%" stop-color="{color}" />"#);
        }
        out.push_str("</linearGradient></defs>");
        out
    }

    /// Wraps `body` with the frame decoration and serializes the whole card.
    #[must_use]
    pub fn render(&self, body: &str) -> String {
        let mut output = String::new();
        let (w, h) = (self.width, self.height);

        let _ = writeln!(
            output,
            r#"<svg width="{w}" height="{h}" viewBox="0 0 {w} {h}" fill="none" xmlns="http://www.w3.org/2000/svg" role="img" aria-labelledby="descId">"#
        );
        let _ = writeln!(output, r#"  <title id="titleId">{}</title>"#, self.a11y_title);
        let _ = writeln!(output, r#"  <desc id="descId">{}</desc>"#, self.a11y_desc);

        output.push_str("  <style>\n");
        let _ = writeln!(
            output,
            "  .header {{ font: 600 18px 'Segoe UI', Ubuntu, Sans-Serif; fill: {}; animation: fadeInAnimation 0.8s ease-in-out forwards; }}",
            self.colors.title
        );
        output.push_str("  @supports(-moz-appearance: auto) { .header { font-size: 15.5px; } }\n");
        output.push_str(&self.css);
        output.push_str(BASE_ANIMATIONS);
        if !self.animations {
            let _ = write!(output, "\n  {NO_ANIMATIONS}");
        }
        output.push_str("\n  </style>\n");

        let gradient = self.render_gradient();
        if !gradient.is_empty() {
            let _ = writeln!(output, "  {gradient}");
        }

        let _ = writeln!(
            output,
            r#"  <rect data-testid="card-bg" x="0.5" y="0.5" rx="{}" height="99%" stroke="{}" width="{}" fill="{}" stroke-opacity="{}" />"#,
            self.border_radius,
            self.colors.border,
            w.saturating_sub(1),
            self.colors.bg.fill(),
            if self.hide_border { 0 } else { 1 }
        );

        if !self.hide_title {
            let _ = writeln!(output, "  {}", self.render_title());
        }

        let body_offset = if self.hide_title {
            PADDING_X
        } else {
            PADDING_Y + 20.0
        };
        let _ = writeln!(
            output,
            r#"  <g data-testid="main-card-body" transform="translate(0, {body_offset})">"#
        );
        for line in body.lines().filter(|l| !l.trim().is_empty()) {
            let _ = writeln!(output, "    {line}");
        }
        output.push_str("  </g>\n</svg>\n");
        output
    }
}

#[cfg(test)]
#[path = "card_tests.rs"]
mod tests;
