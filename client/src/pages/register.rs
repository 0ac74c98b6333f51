//! Account registration page for tourists and providers.
//!
//! SYSTEM CONTEXT
//! ==============
//! `?type=provider` preselects the provider tab. A successful registration
//! signs the new account into the app-wide `Session` and opens the console.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::data::types::AccountType;
use crate::net::api;
use crate::state::registration::{Field, RegistrationForm};
use crate::state::session::{Session, SessionUser};
use crate::state::ui::{Notice, UiState};
use crate::util::mount::MountGuard;

#[component]
pub fn RegisterPage() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let navigate = use_navigate();
    let query = use_query_map();
    let mounted = MountGuard::install();

    let initial = AccountType::from_query(query.read_untracked().get("type").as_deref());
    let form = RwSignal::new(RegistrationForm::new(initial));

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(submitted) = form.try_update(RegistrationForm::submit) else {
            return;
        };
        let (request_id, registration) = match submitted {
            Ok(pair) => pair,
            Err(err) => {
                ui.update(|u| u.notify(Notice::error("Error de validación", err.to_string())));
                return;
            }
        };

        let mounted = mounted.clone();
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            let outcome = api::register_account(request_id, &registration).await.map(|_| ());
            if !mounted.is_mounted() {
                return;
            }
            form.update(|f| {
                f.submission.finish(request_id, &outcome);
            });
            if let Err(err) = outcome {
                ui.update(|u| u.notify(Notice::error("No se pudo crear la cuenta", err.to_string())));
                return;
            }

            let welcome = format!("Bienvenido a Raíces Vivas, {}!", registration.name);
            session.update(|s| {
                s.sign_in(SessionUser {
                    name: registration.name,
                    email: registration.email,
                    account_type: registration.account_type,
                    organization: registration.organization,
                });
            });
            ui.update(|u| u.notify(Notice::info("¡Registro exitoso!", welcome)));
            navigate("/dashboard", NavigateOptions::default());
        });
    };

    let busy = move || form.with(|f| f.submission.is_busy());

    view! {
        <div class="register-page">
            <div class="register-card">
                <header class="register-card__header">
                    <span class="register-card__logo" aria-hidden="true">"🌿"</span>
                    <h1>"Crear Cuenta"</h1>
                    <p>"Únete a la comunidad de turismo sostenible"</p>
                </header>

                <h2 class="register-card__title">"Registro"</h2>
                <p class="register-card__subtitle">"Elige tu tipo de cuenta para comenzar"</p>

                <div class="tabs tabs--split" role="tablist">
                    {[AccountType::Tourist, AccountType::Provider]
                        .into_iter()
                        .map(|kind| {
                            view! {
                                <button
                                    type="button"
                                    class="tab"
                                    class:tab--active=move || form.with(|f| f.account_type == kind)
                                    on:click=move |_| form.update(|f| f.set_account_type(kind))
                                >
                                    {kind.label()}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
                <p class="register-card__blurb">
                    {move || match form.with(|f| f.account_type) {
                        AccountType::Tourist => "Explora y reserva experiencias únicas de turismo comunitario",
                        AccountType::Provider => "Comparte tus conocimientos y ofrece experiencias auténticas",
                    }}
                </p>

                <form class="form" on:submit=on_submit>
                    <TextField form field=Field::Name kind="text" placeholder="Tu nombre completo"/>
                    <TextField form field=Field::Email kind="email" placeholder="tu@email.com"/>
                    <TextField form field=Field::Phone kind="tel" placeholder="+57 300 123 4567"/>
                    <TextField form field=Field::Location kind="text" placeholder="Ciudad, Departamento"/>
                    <Show when=move || form.with(RegistrationForm::shows_organization)>
                        <TextField
                            form
                            field=Field::Organization
                            kind="text"
                            placeholder="Nombre de tu organización o comunidad"
                        />
                    </Show>

                    <PasswordField form field=Field::Password placeholder="Mínimo 6 caracteres"/>
                    <PasswordField form field=Field::ConfirmPassword placeholder="Confirma tu contraseña"/>

                    <label class="form__check">
                        <input
                            type="checkbox"
                            prop:checked=move || form.with(|f| f.accepted_terms)
                            on:change=move |ev| form.update(|f| f.accepted_terms = event_target_checked(&ev))
                        />
                        <span>
                            "Acepto los " <a href="/terms">"términos y condiciones"</a> " y la "
                            <a href="/privacy">"política de privacidad"</a>
                        </span>
                    </label>

                    <button class="btn btn--primary btn--block" type="submit" disabled=busy>
                        {move || if busy() { "Creando cuenta..." } else { "Crear Cuenta" }}
                    </button>
                </form>

                <p class="register-card__footer">
                    "¿Ya tienes una cuenta? " <a href="/login">"Inicia sesión aquí"</a>
                </p>
            </div>
        </div>
    }
}

#[component]
fn TextField(
    form: RwSignal<RegistrationForm>,
    field: Field,
    kind: &'static str,
    placeholder: &'static str,
) -> impl IntoView {
    view! {
        <label class="form__label">
            {field.label()}
            <input
                class="form__input"
                type=kind
                placeholder=placeholder
                prop:value=move || form.with(|f| f.field(field).to_owned())
                on:input=move |ev| form.update(|f| f.set_field(field, event_target_value(&ev)))
            />
        </label>
    }
}

#[component]
fn PasswordField(form: RwSignal<RegistrationForm>, field: Field, placeholder: &'static str) -> impl IntoView {
    let visible = move || {
        form.with(|f| match field {
            Field::ConfirmPassword => f.show_confirm_password,
            _ => f.show_password,
        })
    };
    let toggle = move |_| {
        form.update(|f| match field {
            Field::ConfirmPassword => f.show_confirm_password = !f.show_confirm_password,
            _ => f.show_password = !f.show_password,
        });
    };

    view! {
        <label class="form__label">
            {field.label()}
            <div class="form__password">
                <input
                    class="form__input"
                    type=move || if visible() { "text" } else { "password" }
                    placeholder=placeholder
                    prop:value=move || form.with(|f| f.field(field).to_owned())
                    on:input=move |ev| form.update(|f| f.set_field(field, event_target_value(&ev)))
                />
                <button
                    type="button"
                    class="form__reveal"
                    aria-label=move || if visible() { "Ocultar contraseña" } else { "Mostrar contraseña" }
                    on:click=toggle
                >
                    {move || if visible() { "🙈" } else { "👁" }}
                </button>
            </div>
        </label>
    }
}
