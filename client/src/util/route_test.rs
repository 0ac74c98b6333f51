use super::*;

#[test]
fn parse_listing_id_accepts_digits() {
    assert_eq!(parse_listing_id("3"), Ok(3));
    assert_eq!(parse_listing_id(" 12 "), Ok(12));
}

#[test]
fn parse_listing_id_rejects_garbage() {
    assert_eq!(parse_listing_id("abc"), Err(RouteError::InvalidId("abc".to_owned())));
    assert_eq!(parse_listing_id(""), Err(RouteError::InvalidId(String::new())));
    assert_eq!(parse_listing_id("-1"), Err(RouteError::InvalidId("-1".to_owned())));
}

#[test]
fn resolve_listing_finds_catalog_entries() {
    let detail = resolve_listing("2").unwrap();
    assert_eq!(detail.listing.title, "Tejido Tradicional Inga");
}

#[test]
fn resolve_listing_unknown_id_is_not_found_not_default() {
    assert_eq!(resolve_listing("42"), Err(RouteError::NotFound(42)));
}

#[test]
fn resolve_listing_invalid_id_does_not_fall_back_to_first_record() {
    assert!(matches!(resolve_listing("café"), Err(RouteError::InvalidId(_))));
}
