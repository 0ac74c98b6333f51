use super::*;
use crate::data::fixtures::{bookings, owned_listings};
use crate::state::draft::DraftField;

fn d(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

fn filled_draft() -> DraftListing {
    let mut draft = DraftListing::default();
    draft.set_field(DraftField::Title, "Tejido en Telar Wayuu".to_owned());
    draft.set_field(DraftField::Description, "Aprende a tejer una mochila.".to_owned());
    draft.set_field(DraftField::Location, "Riohacha, La Guajira".to_owned());
    draft.set_field(DraftField::Price, "60000".to_owned());
    draft.set_field(DraftField::Duration, "5 horas".to_owned());
    draft.set_field(DraftField::MaxPeople, "4".to_owned());
    draft.set_category_str("Arte");
    draft.update_highlight(0, "Materiales incluidos".to_owned());
    draft.add_highlight();
    draft
}

// =============================================================
// Tabs
// =============================================================

#[test]
fn provider_sees_all_four_tabs() {
    assert_eq!(
        tabs_for(AccountType::Provider),
        vec![DashboardTab::Overview, DashboardTab::OwnedListings, DashboardTab::Publish, DashboardTab::Bookings]
    );
}

#[test]
fn tourist_sees_overview_and_bookings() {
    assert_eq!(tabs_for(AccountType::Tourist), vec![DashboardTab::Overview, DashboardTab::Bookings]);
}

#[test]
fn tourist_cannot_select_provider_tabs() {
    let mut state = DashboardState::new(AccountType::Tourist);
    assert!(!state.select_tab(DashboardTab::Publish));
    assert!(!state.select_tab(DashboardTab::OwnedListings));
    assert_eq!(state.active_tab, DashboardTab::Overview);
    assert!(state.select_tab(DashboardTab::Bookings));
    assert_eq!(state.active_tab, DashboardTab::Bookings);
}

#[test]
fn switching_to_tourist_falls_back_from_provider_tabs() {
    for tab in [DashboardTab::OwnedListings, DashboardTab::Publish] {
        let mut state = DashboardState::new(AccountType::Provider);
        assert!(state.select_tab(tab));
        state.set_account_type(AccountType::Tourist);
        assert_eq!(state.active_tab, DashboardTab::Overview);
        assert!(!state.tabs().contains(&DashboardTab::OwnedListings));
        assert!(!state.tabs().contains(&DashboardTab::Publish));
    }
}

#[test]
fn switching_role_keeps_shared_tab() {
    let mut state = DashboardState::new(AccountType::Provider);
    state.select_tab(DashboardTab::Bookings);
    state.set_account_type(AccountType::Tourist);
    assert_eq!(state.active_tab, DashboardTab::Bookings);
}

#[test]
fn bookings_label_depends_on_role() {
    assert_eq!(DashboardTab::Bookings.label(AccountType::Provider), "Reservas Recibidas");
    assert_eq!(DashboardTab::Bookings.label(AccountType::Tourist), "Mis Reservas");
}

// =============================================================
// Publish completion
// =============================================================

#[test]
fn published_listing_resets_draft_and_opens_owned_listings() {
    let mut state = DashboardState::new(AccountType::Provider);
    state.select_tab(DashboardTab::Publish);
    let mut draft = filled_draft();
    let (id, _) = draft.submit().unwrap();

    assert!(state.finish_publish::<String>(&mut draft, id, &Ok(())));
    assert_eq!(state.active_tab, DashboardTab::OwnedListings);
    assert_eq!(draft.highlights, vec![String::new()]);
    assert_eq!(draft.title, "");
    assert!(!draft.submission.is_busy());
}

#[test]
fn publish_finishing_on_another_tab_still_lands_on_owned_listings() {
    let mut state = DashboardState::new(AccountType::Provider);
    state.select_tab(DashboardTab::Publish);
    let mut draft = filled_draft();
    let (id, _) = draft.submit().unwrap();
    state.select_tab(DashboardTab::Bookings);

    assert!(state.finish_publish::<String>(&mut draft, id, &Ok(())));
    assert_eq!(state.active_tab, DashboardTab::OwnedListings);
    assert!(draft.submit().is_err());
    assert!(!draft.submission.is_busy());
}

#[test]
fn failed_publish_stays_on_form_with_fields() {
    let mut state = DashboardState::new(AccountType::Provider);
    state.select_tab(DashboardTab::Publish);
    let mut draft = filled_draft();
    let (id, _) = draft.submit().unwrap();

    assert!(state.finish_publish(&mut draft, id, &Err("tiempo de espera agotado")));
    assert_eq!(state.active_tab, DashboardTab::Publish);
    assert_eq!(draft.title, "Tejido en Telar Wayuu");
    assert!(draft.submit().is_ok());
}

#[test]
fn stale_publish_outcome_is_ignored() {
    let mut state = DashboardState::new(AccountType::Provider);
    state.select_tab(DashboardTab::Publish);
    let mut draft = filled_draft();
    let (id, _) = draft.submit().unwrap();
    let before = draft.clone();

    assert!(!state.finish_publish::<String>(&mut draft, uuid::Uuid::new_v4(), &Ok(())));
    assert_eq!(state.active_tab, DashboardTab::Publish);
    assert_eq!(draft, before);
    assert_eq!(draft.submission.pending_id(), Some(id));
}

// =============================================================
// Provider stats
// =============================================================

#[test]
fn provider_stats_from_fixtures() {
    let stats = ProviderStats::from_listings(&owned_listings());
    assert_eq!(stats.listing_count, 2);
    assert_eq!(stats.total_bookings, 47);
    assert_eq!(stats.total_revenue, 2_115_000);
    let avg = stats.average_rating.unwrap();
    assert!((avg - 4.7).abs() < 1e-4);
}

#[test]
fn average_rating_of_empty_collection_is_none() {
    assert_eq!(average_rating(&[]), None);
    let stats = ProviderStats::from_listings(&[]);
    assert_eq!(stats.average_rating, None);
    assert_eq!(stats.total_revenue, 0);
}

// =============================================================
// Tourist stats
// =============================================================

#[test]
fn tourist_stats_from_fixtures() {
    let stats = TouristStats::from_bookings(&bookings(), d(2024, 1, 22));
    assert_eq!(stats.booking_count, 2);
    assert_eq!(stats.confirmed_count, 1);
    assert_eq!(stats.upcoming_count, 1);
    assert_eq!(stats.total_spent, 300_000);
}

#[test]
fn booking_on_today_is_not_upcoming() {
    let stats = TouristStats::from_bookings(&bookings(), d(2024, 1, 25));
    assert_eq!(stats.upcoming_count, 0);
}

#[test]
fn all_bookings_upcoming_before_first_date() {
    let stats = TouristStats::from_bookings(&bookings(), d(2023, 12, 31));
    assert_eq!(stats.upcoming_count, 2);
}
