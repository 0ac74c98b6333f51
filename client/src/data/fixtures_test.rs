use super::*;
use chrono::{Datelike, NaiveDate};

// =============================================================
// Catalog
// =============================================================

#[test]
fn catalog_has_six_listings_with_unique_ids() {
    let listings = catalog_listings();
    assert_eq!(listings.len(), 6);
    let mut ids: Vec<u32> = listings.iter().map(|l| l.id).collect();
    ids.dedup();
    assert_eq!(ids, vec![1, 2, 3, 4, 5, 6]);
}

#[test]
fn catalog_ratings_stay_within_scale() {
    for listing in catalog_listings() {
        assert!((0.0..=5.0).contains(&listing.rating), "{} out of range", listing.title);
        assert!(listing.max_people >= 1);
    }
}

#[test]
fn featured_listings_has_three_entries() {
    assert_eq!(featured_listings().len(), 3);
}

// =============================================================
// Detail lookup
// =============================================================

#[test]
fn listing_detail_one_is_the_rich_record() {
    let detail = listing_detail(1).unwrap();
    assert_eq!(detail.listing.price, 45_000);
    assert_eq!(detail.listing.max_people, 8);
    assert_eq!(detail.itinerary.len(), 7);
    assert_eq!(detail.reviews.len(), 3);
    assert_eq!(detail.availability.len(), 8);
    assert_eq!(detail.min_age, Some(12));
}

#[test]
fn listing_detail_derives_other_catalog_entries() {
    let detail = listing_detail(4).unwrap();
    assert_eq!(detail.listing.title, "Cocina Tradicional Amazónica");
    assert_eq!(detail.provider.name, "Comunidad Cofán");
    assert!(detail.reviews.is_empty());
    assert!(!detail.availability.is_empty());
}

#[test]
fn listing_detail_unknown_id_is_none() {
    assert!(listing_detail(0).is_none());
    assert!(listing_detail(99).is_none());
}

#[test]
fn detail_availability_is_sorted() {
    let detail = listing_detail(1).unwrap();
    let mut sorted = detail.availability.clone();
    sorted.sort();
    assert_eq!(detail.availability, sorted);
}

#[test]
fn every_fixture_date_builds_in_january_2024() {
    let january = |d: &NaiveDate| d.year() == 2024 && d.month() == 1;
    let mut seen = 0;
    for listing in catalog_listings() {
        let detail = listing_detail(listing.id).unwrap();
        assert_eq!(detail.availability.len(), 8, "{}", listing.title);
        assert!(detail.availability.iter().all(january));
        assert!(detail.reviews.iter().all(|r| january(&r.date)));
        seen += detail.availability.len() + detail.reviews.len();
    }
    assert!(bookings().iter().all(|b| january(&b.date)));
    assert!(seen > 0);
}

// =============================================================
// Console collections
// =============================================================

#[test]
fn console_collections_are_non_empty() {
    assert_eq!(owned_listings().len(), 2);
    assert_eq!(bookings().len(), 2);
}

#[test]
fn demo_user_is_a_provider() {
    let user = demo_user();
    assert_eq!(user.account_type, AccountType::Provider);
    assert_eq!(user.organization.as_deref(), Some("Cooperativa San Agustín"));
}
