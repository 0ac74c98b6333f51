//! Top navigation bar with a collapsible panel for narrow viewports.
//!
//! SYSTEM CONTEXT
//! ==============
//! Reads the app-wide `Session` to decide which action group to render. The
//! narrow-viewport panel mirrors the same links and closes on any activation.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::session::Session;
use crate::state::ui::UiState;

#[component]
pub fn Navbar() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let navigate = use_navigate();

    let signed_in = move || session.with(Session::is_signed_in);
    let menu_open = move || ui.with(|u| u.menu_open);
    let close_menu = move |_| ui.update(UiState::close_menu);

    let sign_out = Callback::new(move |()| {
        session.update(Session::sign_out);
        ui.update(UiState::close_menu);
        navigate("/", NavigateOptions::default());
    });

    view! {
        <nav class="navbar">
            <div class="navbar__bar">
                <a href="/" class="navbar__brand" on:click=close_menu>
                    <span class="navbar__logo" aria-hidden="true">"🌿"</span>
                    <span class="navbar__name">"Raíces Vivas"</span>
                </a>

                <div class="navbar__links">
                    <a href="/experiences" class="navbar__link">"Experiencias"</a>
                    <a href="/about" class="navbar__link">"Nosotros"</a>
                    <Show
                        when=signed_in
                        fallback=|| {
                            view! {
                                <div class="navbar__actions">
                                    <a href="/login" class="btn btn--outline">"Iniciar Sesión"</a>
                                    <a href="/register" class="btn btn--primary">"Registrarse"</a>
                                </div>
                            }
                        }
                    >
                        <div class="navbar__actions">
                            <a href="/dashboard" class="btn btn--outline">"Dashboard"</a>
                            <button class="btn btn--ghost" on:click=move |_| sign_out.run(())>
                                "Cerrar Sesión"
                            </button>
                        </div>
                    </Show>
                </div>

                <button
                    class="navbar__toggle"
                    aria-label="Abrir menú"
                    aria-expanded=move || menu_open().to_string()
                    on:click=move |_| ui.update(UiState::toggle_menu)
                >
                    {move || if menu_open() { "✕" } else { "☰" }}
                </button>
            </div>

            <Show when=menu_open>
                <div class="navbar__panel">
                    <a href="/experiences" class="navbar__panel-link" on:click=close_menu>
                        "Experiencias"
                    </a>
                    <a href="/about" class="navbar__panel-link" on:click=close_menu>
                        "Nosotros"
                    </a>
                    <Show
                        when=signed_in
                        fallback=move || {
                            view! {
                                <a href="/login" class="btn btn--outline" on:click=close_menu>
                                    "Iniciar Sesión"
                                </a>
                                <a href="/register" class="btn btn--primary" on:click=close_menu>
                                    "Registrarse"
                                </a>
                            }
                        }
                    >
                        <a href="/dashboard" class="btn btn--outline" on:click=close_menu>
                            "Dashboard"
                        </a>
                        <button class="btn btn--ghost" on:click=move |_| sign_out.run(())>
                            "Cerrar Sesión"
                        </button>
                    </Show>
                </div>
            </Show>
        </nav>
    }
}
