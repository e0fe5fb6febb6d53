//! Tests for clock sources.

use super::*;

#[test]
fn fixed_clock_reports_its_year() {
    assert_eq!(FixedClock(2019).current_year(), 2019);
}

#[test]
fn system_clock_matches_chrono() {
    let year = SystemClock.current_year();
    assert!(year >= 2024);
    assert!((year - Utc::now().year()).abs() <= 1);
}
