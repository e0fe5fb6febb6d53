//! Text helpers shared by the card pieces: escaping, number compaction,
//! text width estimation and flex-style positioning.

/// Advance widths of printable ASCII (32..=126) in em, Helvetica metrics.
const GLYPH_WIDTHS: [f64; 95] = [
    0.278, 0.278, 0.355, 0.556, 0.556, 0.889, 0.667, 0.191, 0.333, 0.333, // ' '..')'
    0.389, 0.584, 0.278, 0.333, 0.278, 0.278, 0.556, 0.556, 0.556, 0.556, // '*'..'3'
    0.556, 0.556, 0.556, 0.556, 0.556, 0.556, 0.278, 0.278, 0.584, 0.584, // '4'..'='
    0.584, 0.556, 1.015, 0.667, 0.667, 0.722, 0.722, 0.667, 0.611, 0.778, // '>'..'G'
    0.722, 0.278, 0.500, 0.667, 0.556, 0.833, 0.722, 0.778, 0.667, 0.778, // 'H'..'Q'
    0.722, 0.667, 0.611, 0.722, 0.667, 0.944, 0.667, 0.667, 0.611, 0.278, // 'R'..'['
    0.278, 0.278, 0.469, 0.556, 0.333, 0.556, 0.556, 0.500, 0.556, 0.556, // '\\'..'e'
    0.278, 0.556, 0.556, 0.222, 0.222, 0.500, 0.222, 0.833, 0.556, 0.556, // 'f'..'o'
    0.556, 0.556, 0.333, 0.500, 0.278, 0.556, 0.500, 0.722, 0.500, 0.500, // 'p'..'y'
    0.500, 0.334, 0.260, 0.334, 0.584, // 'z'..'~'
];

const AVERAGE_GLYPH_WIDTH: f64 = 0.5279276315789471;

pub const DEFAULT_FONT_SIZE: f64 = 10.0;

pub fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Formats a coordinate rounded to hundredths, without trailing zeros.
pub fn px(value: f64) -> String {
    format!("{}", (value * 100.0).round() / 100.0)
}

/// Compacts counts above 999 into thousands with one decimal ("12.3k").
pub fn k_formatter(num: u64) -> String {
    if num > 999 {
        let thousands = format!("{:.1}", num as f64 / 1000.0);
        let trimmed = thousands.strip_suffix(".0").unwrap_or(&thousands);
        format!("{trimmed}k")
    } else {
        num.to_string()
    }
}

/// Estimates the rendered width of `text` in pixels at `font_size`.
pub fn measure_text(text: &str, font_size: f64) -> f64 {
    text.chars()
        .map(|c| {
            let code = c as usize;
            if (32..127).contains(&code) {
                GLYPH_WIDTHS[code - 32]
            } else {
                AVERAGE_GLYPH_WIDTH
            }
        })
        .sum::<f64>()
        * font_size
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Row,
    Column,
}

/// Wraps each item in a `<g>` translated past the previous ones.
///
/// `sizes[i]` is the extent of item `i` along the layout axis; missing sizes
/// count as zero so the items are spaced by `gap` alone.
pub fn flex_layout(
    items: &[String],
    gap: f64,
    direction: Direction,
    sizes: &[f64],
) -> Vec<String> {
    let mut offset = 0.0;
    items
        .iter()
        .filter(|item| !item.is_empty())
        .enumerate()
        .map(|(i, item)| {
            let transform = match direction {
                Direction::Row => format!("translate({offset}, 0)"),
                Direction::Column => format!("translate(0, {offset})"),
            };
            offset += sizes.get(i).copied().unwrap_or(0.0) + gap;
            format!(r#"<g transform="{transform}">{item}</g>"#)
        })
        .collect()
}

#[cfg(test)]
#[path = "format_tests.rs"]
mod tests;
