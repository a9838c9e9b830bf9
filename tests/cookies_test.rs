//! Cookie attribute and lifetime classification tests.

use harscan::cookies::{is_long_lived, CookieAttributes};
use time::macros::datetime;
use time::OffsetDateTime;

const REFERENCE: OffsetDateTime = datetime!(2024-02-28 0:00 UTC);

#[test]
fn test_attribute_map_case_normalized() {
    let attrs = CookieAttributes::parse("a=1; B=2; Secure");

    assert_eq!(attrs.get("a"), Some("1"));
    assert_eq!(attrs.get("b"), Some("2"));
    assert_eq!(attrs.get("secure"), Some("secure"));
}

#[test]
fn test_max_age_just_over_sixty_days() {
    // 5,184,001 seconds is 60 whole days.
    assert!(is_long_lived("max-age=5184001", 60, REFERENCE));
}

#[test]
fn test_max_age_exactly_sixty_days() {
    assert!(is_long_lived("id=x; Max-Age=5184000", 60, REFERENCE));
}

#[test]
fn test_short_max_age() {
    assert!(!is_long_lived("max-age=100", 60, REFERENCE));
}

#[test]
fn test_expires_far_ahead_of_reference() {
    assert!(is_long_lived(
        "expires=Thu, 01 Jan 2026 00:00:00 GMT",
        60,
        REFERENCE
    ));
}

#[test]
fn test_expires_too_close_to_reference() {
    assert!(!is_long_lived(
        "expires=Fri, 01 Mar 2024 00:00:00 GMT",
        60,
        REFERENCE
    ));
}

#[test]
fn test_expires_in_the_past() {
    assert!(!is_long_lived(
        "expires=Sat, 01 Jan 2000 00:00:00 GMT",
        60,
        REFERENCE
    ));
}

#[test]
fn test_short_max_age_does_not_mask_expires() {
    // Max-Age below threshold, Expires above it: Expires still decides.
    assert!(is_long_lived(
        "id=x; Max-Age=100; Expires=Thu, 01 Jan 2026 00:00:00 GMT",
        60,
        REFERENCE
    ));
}

#[test]
fn test_no_lifetime_attributes_falls_back_to_false() {
    assert!(!is_long_lived("session=abc; Secure; HttpOnly", 60, REFERENCE));
}

#[test]
fn test_malformed_expires_falls_back_to_false() {
    assert!(!is_long_lived("id=x; Expires=whenever", 60, REFERENCE));
}

#[test]
fn test_unparsable_max_age_defaults_to_zero() {
    assert!(!is_long_lived("id=x; Max-Age=soon", 60, REFERENCE));
    // ...but a parsable Expires still qualifies.
    assert!(is_long_lived(
        "id=x; Max-Age=soon; Expires=Thu, 01 Jan 2026 00:00:00 GMT",
        60,
        REFERENCE
    ));
}

#[test]
fn test_rfc850_and_asctime_expires() {
    assert!(is_long_lived(
        "id=x; Expires=Thursday, 01-Jan-26 00:00:00 GMT",
        60,
        REFERENCE
    ));
    assert!(is_long_lived(
        "id=x; Expires=Thu Jan  1 00:00:00 2026",
        60,
        REFERENCE
    ));
}
