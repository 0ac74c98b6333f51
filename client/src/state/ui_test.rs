use super::*;

// =============================================================
// Menu
// =============================================================

#[test]
fn ui_state_default_menu_closed() {
    let state = UiState::default();
    assert!(!state.menu_open);
    assert!(state.notice.is_none());
}

#[test]
fn toggle_menu_flips() {
    let mut state = UiState::default();
    state.toggle_menu();
    assert!(state.menu_open);
    state.toggle_menu();
    assert!(!state.menu_open);
}

#[test]
fn close_menu_is_idempotent() {
    let mut state = UiState::default();
    state.toggle_menu();
    state.close_menu();
    state.close_menu();
    assert!(!state.menu_open);
}

// =============================================================
// Notices
// =============================================================

#[test]
fn notify_replaces_previous_notice() {
    let mut state = UiState::default();
    state.notify(Notice::error("Fecha requerida", "Selecciona una fecha."));
    state.notify(Notice::info("¡Listo!", "Solicitud enviada."));
    let notice = state.notice.clone().unwrap();
    assert_eq!(notice.tone, NoticeTone::Info);
    assert_eq!(notice.title, "¡Listo!");
}

#[test]
fn dismiss_clears_notice() {
    let mut state = UiState::default();
    state.notify(Notice::info("a", "b"));
    state.dismiss_notice();
    assert!(state.notice.is_none());
}

// =============================================================
// DetailTab
// =============================================================

#[test]
fn detail_tab_default_is_description() {
    assert_eq!(DetailTab::default(), DetailTab::Description);
    assert_eq!(DetailTab::ALL[0], DetailTab::Description);
}

#[test]
fn detail_tab_labels_are_spanish() {
    let labels: Vec<&str> = DetailTab::ALL.iter().map(|t| t.label()).collect();
    assert_eq!(labels, vec!["Descripción", "Itinerario", "Incluye", "Reseñas"]);
}
