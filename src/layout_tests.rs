//! Tests for card sizing and rank geometry.

use super::*;

mod mode_tests {
    use super::*;

    #[test]
    fn decision_table() {
        assert_eq!(CardMode::new(true, true), CardMode::RankHidden);
        assert_eq!(CardMode::new(false, true), CardMode::RankHidden);
        assert_eq!(CardMode::new(true, false), CardMode::RankWithRows);
        assert_eq!(CardMode::new(false, false), CardMode::RankOnly);
    }
}

mod height_tests {
    use super::*;

    #[test]
    fn rank_shown_clamps_to_150() {
        assert_eq!(card_height(CardMode::RankWithRows, 3, 25), 150);
    }

    #[test]
    fn grows_with_rows() {
        assert_eq!(card_height(CardMode::RankWithRows, 6, 25), 220);
        assert_eq!(card_height(CardMode::RankHidden, 5, 25), 195);
    }

    #[test]
    fn rank_hidden_has_no_floor() {
        assert_eq!(card_height(CardMode::RankHidden, 1, 25), 95);
    }

    #[test]
    fn rank_only_is_at_least_180() {
        assert_eq!(card_height(CardMode::RankOnly, 0, 25), 180);
    }

    #[test]
    fn line_height_scales_spacing() {
        assert_eq!(card_height(CardMode::RankHidden, 5, 40), 45 + 6 * 40);
    }

    #[test]
    fn huge_line_height_is_clamped() {
        assert_eq!(
            card_height(CardMode::RankWithRows, 5, u32::MAX / 2),
            MAX_CARD_EXTENT
        );
        assert_eq!(card_height(CardMode::RankOnly, 0, u32::MAX), MAX_CARD_EXTENT);
    }
}

mod width_tests {
    use super::*;

    #[test]
    fn policy_per_mode() {
        let hidden = width_policy(CardMode::RankHidden, false, 0.0);
        assert_eq!((hidden.min, hidden.default), (287.0, 287.0));

        let rows = width_policy(CardMode::RankWithRows, false, 0.0);
        assert_eq!((rows.min, rows.default), (420.0, 450.0));

        let only = width_policy(CardMode::RankOnly, false, 0.0);
        assert_eq!((only.min, only.default), (290.0, 290.0));
    }

    #[test]
    fn icons_widen_card_when_rows_exist() {
        let rows = width_policy(CardMode::RankWithRows, true, 0.0);
        assert_eq!((rows.min, rows.default), (437.0, 467.0));

        let only = width_policy(CardMode::RankOnly, true, 0.0);
        assert_eq!((only.min, only.default), (290.0, 290.0));
    }

    #[test]
    fn long_title_raises_rank_hidden_minimum() {
        let policy = width_policy(CardMode::RankHidden, false, 150.0);
        assert_eq!(policy.min, 350.0);
        assert_eq!(card_width(&policy, None), 350);
    }

    #[test]
    fn requested_width_is_respected_above_minimum() {
        let policy = width_policy(CardMode::RankWithRows, false, 0.0);
        assert_eq!(card_width(&policy, Some(500.0)), 500);
        assert_eq!(card_width(&policy, Some(800.0)), 800);
    }

    #[test]
    fn requested_width_is_raised_to_minimum() {
        let policy = width_policy(CardMode::RankWithRows, false, 0.0);
        assert_eq!(card_width(&policy, Some(100.0)), 420);
        assert_eq!(card_width(&policy, Some(-5.0)), 420);
    }

    #[test]
    fn oversized_width_is_clamped() {
        let policy = width_policy(CardMode::RankWithRows, false, 0.0);
        assert_eq!(card_width(&policy, Some(1e20)), MAX_CARD_EXTENT);
        assert_eq!(
            card_width(&policy, Some(f64::from(MAX_CARD_EXTENT) + 0.5)),
            MAX_CARD_EXTENT
        );
    }

    #[test]
    fn missing_width_uses_default() {
        let policy = width_policy(CardMode::RankWithRows, true, 0.0);
        assert_eq!(card_width(&policy, None), 467);
    }
}

mod rank_tests {
    use super::*;

    #[test]
    fn circumference_of_radius_40() {
        assert!((circle_circumference() - 251.327_412_287_183_45).abs() < 1e-9);
    }

    #[test]
    fn progress_is_clamped() {
        assert_eq!(rank_progress(-10.0), 100.0);
        assert_eq!(rank_progress(0.0), 100.0);
        assert_eq!(rank_progress(50.0), 50.0);
        assert_eq!(rank_progress(100.0), 0.0);
        assert_eq!(rank_progress(150.0), 0.0);
    }

    #[test]
    fn offsets_shrink_as_percentile_improves() {
        let offsets: Vec<f64> = [150.0, 100.0, 50.0, 0.0, -10.0]
            .into_iter()
            .map(|p| circle_offset(rank_progress(p)))
            .collect();
        assert!(offsets.windows(2).all(|w| w[0] >= w[1]));
        assert!((offsets[0] - circle_circumference()).abs() < 1e-9);
        assert_eq!(offsets[4], 0.0);
        assert!((offsets[2] - circle_circumference() / 2.0).abs() < 1e-9);
    }

    #[test]
    fn offset_clamps_out_of_range_values() {
        assert_eq!(circle_offset(120.0), 0.0);
        assert_eq!(circle_offset(-1.0), circle_circumference());
    }

    #[test]
    fn translation_between_min_and_default_centres_padding() {
        let policy = width_policy(CardMode::RankWithRows, false, 0.0);
        assert_eq!(rank_x_translation(CardMode::RankWithRows, &policy, 420), 350.0);
        assert_eq!(rank_x_translation(CardMode::RankWithRows, &policy, 450), 365.0);
    }

    #[test]
    fn translation_past_default_keeps_right_padding() {
        let policy = width_policy(CardMode::RankWithRows, false, 0.0);
        assert_eq!(rank_x_translation(CardMode::RankWithRows, &policy, 500), 415.0);
        assert_eq!(rank_x_translation(CardMode::RankWithRows, &policy, 1000), 915.0);
    }

    #[test]
    fn translation_with_icons() {
        let policy = width_policy(CardMode::RankWithRows, true, 0.0);
        assert_eq!(rank_x_translation(CardMode::RankWithRows, &policy, 467), 390.5);
    }

    #[test]
    fn rank_only_is_centred() {
        let policy = width_policy(CardMode::RankOnly, false, 0.0);
        assert_eq!(rank_x_translation(CardMode::RankOnly, &policy, 290), 155.0);
    }
}

#[test]
fn geometry_combines_all_parts() {
    let geometry = compute_geometry(&GeometryInput {
        row_count: 5,
        hide_rank: false,
        show_icons: false,
        line_height: 25,
        title_width: 0.0,
        requested_width: None,
        percentile: 25.0,
    });
    assert_eq!(geometry.mode, CardMode::RankWithRows);
    assert_eq!(geometry.width, 450);
    assert_eq!(geometry.height, 195);
    assert_eq!(geometry.rank_x_translation, 365.0);
    assert_eq!(geometry.rank_y_translation, 47.5);
    assert_eq!(geometry.progress, 75.0);
}
