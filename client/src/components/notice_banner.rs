//! Dismissible banner for the current `UiState` notice.

use leptos::prelude::*;

use crate::state::ui::{NoticeTone, UiState};

#[component]
pub fn NoticeBanner() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    move || {
        ui.get().notice.map(|notice| {
            let is_error = notice.tone == NoticeTone::Error;
            view! {
                <div class="notice" class:notice--error=is_error role="status">
                    <div class="notice__body">
                        <strong class="notice__title">{notice.title}</strong>
                        <p class="notice__description">{notice.description}</p>
                    </div>
                    <button
                        class="notice__dismiss"
                        aria-label="Cerrar aviso"
                        on:click=move |_| ui.update(UiState::dismiss_notice)
                    >
                        "✕"
                    </button>
                </div>
            }
        })
    }
}
