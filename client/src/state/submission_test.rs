use super::*;

fn failure(message: &str) -> Result<(), String> {
    Err(message.to_owned())
}

// =============================================================
// begin
// =============================================================

#[test]
fn default_is_idle_and_not_busy() {
    let state = SubmissionState::default();
    assert_eq!(state, SubmissionState::Idle);
    assert!(!state.is_busy());
}

#[test]
fn begin_from_idle_enters_pending() {
    let mut state = SubmissionState::default();
    let id = state.begin().unwrap();
    assert!(state.is_busy());
    assert_eq!(state.pending_id(), Some(id));
}

#[test]
fn begin_while_pending_is_refused() {
    let mut state = SubmissionState::default();
    let id = state.begin().unwrap();
    assert_eq!(state.begin(), None);
    assert_eq!(state.pending_id(), Some(id));
}

#[test]
fn retry_after_failure_reuses_request_id() {
    let mut state = SubmissionState::default();
    let id = state.begin().unwrap();
    assert!(state.finish(id, &failure("sin conexión")));
    assert_eq!(state.error(), Some("sin conexión"));
    assert_eq!(state.begin(), Some(id));
}

#[test]
fn begin_after_success_mints_new_id() {
    let mut state = SubmissionState::default();
    let first = state.begin().unwrap();
    assert!(state.finish::<String>(first, &Ok(())));
    let second = state.begin().unwrap();
    assert_ne!(first, second);
}

// =============================================================
// finish / cancel
// =============================================================

#[test]
fn finish_ok_marks_succeeded() {
    let mut state = SubmissionState::default();
    let id = state.begin().unwrap();
    assert!(state.finish::<String>(id, &Ok(())));
    assert_eq!(state, SubmissionState::Succeeded { request_id: id });
    assert!(!state.is_busy());
}

#[test]
fn finish_with_unknown_id_is_ignored() {
    let mut state = SubmissionState::default();
    let id = state.begin().unwrap();
    assert!(!state.finish::<String>(Uuid::new_v4(), &Ok(())));
    assert_eq!(state.pending_id(), Some(id));
}

#[test]
fn cancelled_request_completion_is_ignored() {
    let mut state = SubmissionState::default();
    let id = state.begin().unwrap();
    state.cancel();
    assert_eq!(state, SubmissionState::Idle);
    assert!(!state.finish::<String>(id, &Ok(())));
    assert_eq!(state, SubmissionState::Idle);
}

#[test]
fn cancel_keeps_terminal_states() {
    let mut state = SubmissionState::default();
    let id = state.begin().unwrap();
    state.finish::<String>(id, &Ok(()));
    state.cancel();
    assert_eq!(state, SubmissionState::Succeeded { request_id: id });
}
