//! Tests for text helpers.

use super::*;

mod escape_tests {
    use super::*;

    #[test]
    fn escapes_markup_characters() {
        assert_eq!(
            escape_xml(r#"<a href="x">Tom & Jerry's</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; Jerry&#39;s&lt;/a&gt;"
        );
    }
}

mod px_tests {
    use super::*;

    #[test]
    fn rounds_to_hundredths() {
        assert_eq!(px(120.0 + 79.01), "199.01");
        assert_eq!(px(365.0), "365");
        assert_eq!(px(382.504), "382.5");
    }
}

mod k_formatter_tests {
    use super::*;

    #[test]
    fn small_numbers_unchanged() {
        assert_eq!(k_formatter(0), "0");
        assert_eq!(k_formatter(999), "999");
    }

    #[test]
    fn thousands_show_k() {
        assert_eq!(k_formatter(1000), "1k");
        assert_eq!(k_formatter(1500), "1.5k");
        assert_eq!(k_formatter(12_345), "12.3k");
        assert_eq!(k_formatter(9_900_000), "9900k");
    }
}

mod measure_tests {
    use super::*;

    #[test]
    fn empty_text_has_no_width() {
        assert_eq!(measure_text("", DEFAULT_FONT_SIZE), 0.0);
    }

    #[test]
    fn uses_glyph_table_and_average() {
        assert!((measure_text("i", 10.0) - 2.22).abs() < 1e-9);
        assert!((measure_text("W", 10.0) - 9.44).abs() < 1e-9);
        assert!((measure_text("é", 10.0) - 5.279276315789471).abs() < 1e-9);
    }

    #[test]
    fn scales_with_font_size() {
        let small = measure_text("GitHub Stats", 10.0);
        let large = measure_text("GitHub Stats", 20.0);
        assert!((large - small * 2.0).abs() < 1e-9);
    }
}

mod flex_layout_tests {
    use super::*;

    #[test]
    fn column_layout_stacks_by_gap() {
        let items = vec!["a".to_string(), "b".to_string(), "c".to_string()];
        let out = flex_layout(&items, 25.0, Direction::Column, &[]);
        assert_eq!(
            out,
            vec![
                r#"<g transform="translate(0, 0)">a</g>"#,
                r#"<g transform="translate(0, 25)">b</g>"#,
                r#"<g transform="translate(0, 50)">c</g>"#,
            ]
        );
    }

    #[test]
    fn row_layout_uses_sizes_and_skips_empty() {
        let items = vec![String::new(), "a".to_string(), "b".to_string()];
        let out = flex_layout(&items, 10.0, Direction::Row, &[16.0]);
        assert_eq!(
            out,
            vec![
                r#"<g transform="translate(0, 0)">a</g>"#,
                r#"<g transform="translate(26, 0)">b</g>"#,
            ]
        );
    }
}
