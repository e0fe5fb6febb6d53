//! Tests for option parsing.

use super::*;

mod key_list_tests {
    use super::*;

    #[test]
    fn parses_csv_and_skips_unknown() {
        let keys = parse_key_list("stars, issues,bogus,,contribs");
        let keys: Vec<_> = keys.into_iter().collect();
        assert_eq!(keys, vec![StatKey::Stars, StatKey::Issues, StatKey::Contribs]);
    }

    #[test]
    fn key_names_round_trip_through_display() {
        for key in [StatKey::PrsMergedPercentage, StatKey::DiscussionsAnswered] {
            assert_eq!(key.to_string().parse::<StatKey>(), Ok(key));
        }
    }
}

mod card_width_tests {
    use super::*;

    #[test]
    fn numeric_text_is_accepted() {
        assert_eq!(CardWidth::Text("500".to_string()).pixels(), Some(500.0));
        assert_eq!(CardWidth::Pixels(320.0).pixels(), Some(320.0));
    }

    #[test]
    fn non_numeric_or_zero_is_ignored() {
        assert_eq!(CardWidth::Text("wide".to_string()).pixels(), None);
        assert_eq!(CardWidth::Pixels(0.0).pixels(), None);
    }
}

mod deserialize_tests {
    use super::*;

    #[test]
    fn defaults_apply_to_empty_object() {
        let options: RenderOptions = serde_json::from_str("{}").unwrap();
        assert_eq!(options, RenderOptions::default());
        assert_eq!(options.line_height, 25);
        assert!(options.text_bold);
    }

    #[test]
    fn hide_accepts_string_or_list() {
        let a: RenderOptions = serde_json::from_str(r#"{ "hide": "stars,prs" }"#).unwrap();
        let b: RenderOptions = serde_json::from_str(r#"{ "hide": ["stars", "prs"] }"#).unwrap();
        assert_eq!(a.hide, b.hide);
        assert!(a.hide.contains(&StatKey::Prs));
    }

    #[test]
    fn card_width_accepts_number_or_string() {
        let a: RenderOptions = serde_json::from_str(r#"{ "card_width": 500 }"#).unwrap();
        let b: RenderOptions = serde_json::from_str(r#"{ "card_width": "abc" }"#).unwrap();
        assert_eq!(a.requested_width(), Some(500.0));
        assert_eq!(b.requested_width(), None);
    }

    #[test]
    fn enums_are_lowercase() {
        let options: RenderOptions =
            serde_json::from_str(r#"{ "number_format": "long", "rank_icon": "percentile" }"#)
                .unwrap();
        assert_eq!(options.number_format, NumberFormat::Long);
        assert_eq!(options.rank_icon, RankIcon::Percentile);
    }
}
