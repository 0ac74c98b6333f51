use super::*;
use crate::data::fixtures::listing_detail;

fn d(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

fn composer() -> BookingComposer {
    BookingComposer::for_listing(&listing_detail(1).unwrap())
}

// =============================================================
// Participants
// =============================================================

#[test]
fn starts_with_two_participants() {
    let c = composer();
    assert_eq!(c.participants, 2);
    assert_eq!(c.max_people, 8);
}

#[test]
fn default_participants_clamped_to_small_groups() {
    let c = BookingComposer::new(9, 10_000, 1, vec![]);
    assert_eq!(c.participants, 1);
}

#[test]
fn decrement_stops_at_one() {
    let mut c = composer();
    c.decrement();
    assert_eq!(c.participants, 1);
    assert!(!c.can_decrement());
    c.decrement();
    assert_eq!(c.participants, 1);
}

#[test]
fn increment_stops_at_max_people() {
    let mut c = composer();
    for _ in 0..20 {
        c.increment();
    }
    assert_eq!(c.participants, 8);
    assert!(!c.can_increment());
    c.increment();
    assert_eq!(c.participants, 8);
}

#[test]
fn participants_always_within_bounds() {
    let mut c = composer();
    let steps = [true, true, false, true, true, true, true, true, true, true, false, false];
    for up in steps.iter().cycle().take(60) {
        if *up { c.increment() } else { c.decrement() }
        assert!((1..=c.max_people).contains(&c.participants));
    }
}

// =============================================================
// Total
// =============================================================

#[test]
fn total_is_price_times_participants() {
    let mut c = composer();
    c.increment();
    assert_eq!(c.participants, 3);
    assert_eq!(c.total(), 135_000);
}

#[test]
fn total_recomputes_on_change() {
    let mut c = composer();
    assert_eq!(c.total(), 90_000);
    c.decrement();
    assert_eq!(c.total(), 45_000);
}

// =============================================================
// Date selection
// =============================================================

#[test]
fn select_available_date() {
    let mut c = composer();
    c.select_date(d(2024, 1, 22)).unwrap();
    assert_eq!(c.selected_date, Some(d(2024, 1, 22)));
}

#[test]
fn select_unavailable_date_is_rejected_without_change() {
    let mut c = composer();
    c.select_date(d(2024, 1, 15)).unwrap();
    assert_eq!(c.select_date(d(2024, 1, 17)), Err(BookingError::UnavailableDate));
    assert_eq!(c.selected_date, Some(d(2024, 1, 15)));
}

#[test]
fn select_date_str_parses_iso_and_clears_on_empty() {
    let mut c = composer();
    c.select_date_str("2024-01-30").unwrap();
    assert_eq!(c.selected_date, Some(d(2024, 1, 30)));
    c.select_date_str("").unwrap();
    assert_eq!(c.selected_date, None);
    assert_eq!(c.select_date_str("mañana"), Err(BookingError::UnavailableDate));
}

// =============================================================
// Submit
// =============================================================

#[test]
fn submit_without_date_is_rejected_and_not_busy() {
    let mut c = composer();
    let before = c.clone();
    assert_eq!(c.submit(), Err(BookingError::MissingDate));
    assert!(!c.is_busy());
    assert_eq!(c, before);
}

#[test]
fn submit_with_date_enters_busy_state() {
    let mut c = composer();
    c.select_date(d(2024, 1, 18)).unwrap();
    let (id, request) = c.submit().unwrap();
    assert!(c.is_busy());
    assert_eq!(c.submission.pending_id(), Some(id));
    assert_eq!(request, BookingRequest { listing_id: 1, date: d(2024, 1, 18), participants: 2, total: 90_000 });
}

#[test]
fn second_submit_while_busy_is_refused() {
    let mut c = composer();
    c.select_date(d(2024, 1, 18)).unwrap();
    c.submit().unwrap();
    assert_eq!(c.submit(), Err(BookingError::AlreadySubmitting));
}

#[test]
fn successful_completion_clears_busy_and_keeps_choices() {
    let mut c = composer();
    c.select_date(d(2024, 1, 18)).unwrap();
    let (id, _) = c.submit().unwrap();
    assert!(c.complete::<String>(id, &Ok(())));
    assert!(!c.is_busy());
    assert_eq!(c.selected_date, Some(d(2024, 1, 18)));
    assert_eq!(c.participants, 2);
}

#[test]
fn failed_completion_allows_retry_with_same_id() {
    let mut c = composer();
    c.select_date(d(2024, 1, 18)).unwrap();
    let (id, _) = c.submit().unwrap();
    assert!(c.complete(id, &Err("sin conexión")));
    assert!(!c.is_busy());
    let (retry_id, _) = c.submit().unwrap();
    assert_eq!(retry_id, id);
}

#[test]
fn completion_for_other_request_is_ignored() {
    let mut c = composer();
    c.select_date(d(2024, 1, 18)).unwrap();
    let (id, _) = c.submit().unwrap();
    assert!(!c.complete::<String>(uuid::Uuid::new_v4(), &Ok(())));
    assert_eq!(c.submission.pending_id(), Some(id));
}

#[test]
fn missing_date_message_is_user_facing() {
    assert_eq!(BookingError::MissingDate.to_string(), "Por favor selecciona una fecha para tu experiencia.");
}

#[test]
fn error_titles_name_the_problem() {
    assert_eq!(BookingError::MissingDate.title(), "Fecha requerida");
    assert_eq!(BookingError::UnavailableDate.title(), "Fecha no disponible");
}
