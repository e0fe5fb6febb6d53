//! Tests for card errors.

use super::*;

#[test]
fn configuration_error_displays_title_and_message() {
    let err = CardError::configuration(
        "Could not render stats card.",
        "Either stats or rank are required.",
    );
    assert_eq!(
        err.to_string(),
        "Could not render stats card.: Either stats or rank are required."
    );
    assert_eq!(err.title(), "Could not render stats card.");
}
