//! Provider/tourist console page.
//!
//! SYSTEM CONTEXT
//! ==============
//! The console shows the signed-in `Session` user, or the demo provider when
//! nobody is signed in. Tab gating lives in `DashboardState`; the page only
//! renders what it allows. The publish draft and its mount guard are held at
//! page level, so a publish still in flight when the user leaves the
//! "Publicar" tab lands once it resolves.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;

use crate::components::stat_card::StatCard;
use crate::data::fixtures::{bookings, demo_user, owned_listings};
use crate::data::types::{AccountType, Booking, BookingStatus, Category, ModerationStatus, OwnedListing};
use crate::net::api;
use crate::state::dashboard::{DashboardState, DashboardTab, ProviderStats, TouristStats};
use crate::state::draft::{DraftField, DraftListing};
use crate::state::session::Session;
use crate::state::ui::{Notice, UiState};
use crate::util::format::{format_long_date, format_price, format_price_cop, format_rating, group_thousands};
use crate::util::mount::MountGuard;

/// Name and role the console greets.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConsoleUser {
    pub name: String,
    pub account_type: AccountType,
}

/// The session user if signed in, otherwise the demo account.
pub fn console_user(session: &Session) -> ConsoleUser {
    match &session.user {
        Some(user) => ConsoleUser { name: user.name.clone(), account_type: user.account_type },
        None => {
            let demo = demo_user();
            ConsoleUser { name: demo.name, account_type: demo.account_type }
        }
    }
}

pub fn role_subtitle(account_type: AccountType) -> &'static str {
    match account_type {
        AccountType::Provider => "Gestiona tus experiencias y reservas desde aquí",
        AccountType::Tourist => "Explora tus reservas y descubre nuevas experiencias",
    }
}

fn moderation_badge_class(status: ModerationStatus) -> &'static str {
    match status {
        ModerationStatus::Approved => "badge badge--success",
        ModerationStatus::Pending => "badge badge--muted",
        ModerationStatus::Rejected => "badge badge--danger",
    }
}

fn booking_badge_class(status: BookingStatus) -> &'static str {
    match status {
        BookingStatus::Confirmed => "badge badge--success",
        BookingStatus::Pending => "badge badge--muted",
    }
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let user = Memo::new(move |_| session.with(console_user));

    let dash = RwSignal::new(DashboardState::new(user.get_untracked().account_type));
    let draft = RwSignal::new(DraftListing::default());
    let mounted = MountGuard::install();

    // A sign-in or sign-out while the console is open switches the role.
    Effect::new(move |_| {
        let account_type = user.with(|u| u.account_type);
        dash.update(|d| d.set_account_type(account_type));
    });

    let account_type = move || dash.with(|d| d.account_type);

    view! {
        <div class="dashboard-page">
            <header class="dashboard-header">
                <div>
                    <h1>{move || format!("¡Hola, {}!", user.with(|u| u.name.clone()))}</h1>
                    <p class="muted">{move || role_subtitle(account_type())}</p>
                </div>
                <div class="role-toggle" role="group" aria-label="Ver como">
                    <span class="role-toggle__label">"Ver como"</span>
                    {[AccountType::Provider, AccountType::Tourist]
                        .into_iter()
                        .map(|kind| {
                            view! {
                                <button
                                    class="chip"
                                    class:chip--active=move || account_type() == kind
                                    on:click=move |_| dash.update(|d| d.set_account_type(kind))
                                >
                                    {kind.label()}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
            </header>

            <nav class="tabs" role="tablist">
                {move || {
                    let current = dash.get();
                    current
                        .tabs()
                        .into_iter()
                        .map(|tab| {
                            view! {
                                <button
                                    class="tab"
                                    class:tab--active=current.active_tab == tab
                                    on:click=move |_| {
                                        dash.update(|d| {
                                            d.select_tab(tab);
                                        });
                                    }
                                >
                                    {tab.label(current.account_type)}
                                </button>
                            }
                        })
                        .collect_view()
                }}
            </nav>

            <section class="tab-panel">
                {move || match dash.with(|d| d.active_tab) {
                    DashboardTab::Overview => view! { <OverviewPanel dash/> }.into_any(),
                    DashboardTab::OwnedListings => view! { <OwnedListingsPanel dash/> }.into_any(),
                    DashboardTab::Publish => {
                        let mounted = mounted.clone();
                        view! { <PublishPanel dash draft mounted/> }.into_any()
                    }
                    DashboardTab::Bookings => view! { <BookingsPanel account_type=account_type()/> }.into_any(),
                }}
            </section>
        </div>
    }
}

fn go_to(dash: RwSignal<DashboardState>, tab: DashboardTab) -> impl Fn(leptos::ev::MouseEvent) + Copy {
    move |_| {
        dash.update(|d| {
            d.select_tab(tab);
        });
    }
}

#[component]
fn OverviewPanel(dash: RwSignal<DashboardState>) -> impl IntoView {
    let account_type = dash.with_untracked(|d| d.account_type);

    let cards = match account_type {
        AccountType::Provider => {
            let stats = ProviderStats::from_listings(&owned_listings());
            view! {
                <StatCard label="Experiencias" value=stats.listing_count.to_string() icon="👁"/>
                <StatCard label="Reservas Totales" value=stats.total_bookings.to_string() icon="📅"/>
                <StatCard label="Ingresos" value=format_price(stats.total_revenue) icon="💰"/>
                <StatCard label="Calificación Promedio" value=format_rating(stats.average_rating) icon="⭐"/>
            }
            .into_any()
        }
        AccountType::Tourist => {
            let today = chrono::Local::now().date_naive();
            let stats = TouristStats::from_bookings(&bookings(), today);
            view! {
                <StatCard label="Reservas" value=stats.booking_count.to_string() icon="📅"/>
                <StatCard label="Experiencias Vividas" value=stats.confirmed_count.to_string() icon="✅"/>
                <StatCard label="Próximas" value=stats.upcoming_count.to_string() icon="🕒"/>
                <StatCard label="Total Gastado" value=format_price(stats.total_spent) icon="💰"/>
            }
            .into_any()
        }
    };

    let actions = match account_type {
        AccountType::Provider => view! {
            <button class="btn btn--outline quick-action" on:click=go_to(dash, DashboardTab::Publish)>
                "➕ Nueva Experiencia"
            </button>
            <button class="btn btn--outline quick-action" on:click=go_to(dash, DashboardTab::Bookings)>
                "📅 Ver Reservas"
            </button>
            <button class="btn btn--outline quick-action" on:click=go_to(dash, DashboardTab::OwnedListings)>
                "👁 Mis Experiencias"
            </button>
        }
        .into_any(),
        AccountType::Tourist => view! {
            <a href="/experiences" class="btn btn--outline quick-action">"👁 Explorar Experiencias"</a>
            <button class="btn btn--outline quick-action" on:click=go_to(dash, DashboardTab::Bookings)>
                "📅 Mis Reservas"
            </button>
            <a href="/register?type=provider" class="btn btn--outline quick-action">"➕ Ser Proveedor"</a>
        }
        .into_any(),
    };

    let actions_blurb = match account_type {
        AccountType::Provider => "Gestiona tu negocio de turismo comunitario",
        AccountType::Tourist => "Descubre nuevas experiencias auténticas",
    };

    view! {
        <div class="stat-grid">{cards}</div>
        <div class="card quick-actions">
            <h3>"Acciones Rápidas"</h3>
            <p class="muted">{actions_blurb}</p>
            <div class="quick-actions__grid">{actions}</div>
        </div>
    }
}

#[component]
fn OwnedListingsPanel(dash: RwSignal<DashboardState>) -> impl IntoView {
    let listings = owned_listings();

    view! {
        <div class="panel-header">
            <h2>"Mis Experiencias"</h2>
            <button class="btn btn--primary" on:click=go_to(dash, DashboardTab::Publish)>
                "➕ Nueva Experiencia"
            </button>
        </div>
        <div class="owned-grid">
            {listings.into_iter().map(|listing| view! { <OwnedListingCard listing/> }).collect_view()}
        </div>
    }
}

#[component]
fn OwnedListingCard(listing: OwnedListing) -> impl IntoView {
    let href = format!("/experiences/{}", listing.id);

    view! {
        <article class="owned-card">
            <div class="owned-card__media">
                <img src="/placeholder.svg" alt=listing.title.clone()/>
                <span class=moderation_badge_class(listing.status)>{listing.status.label()}</span>
            </div>
            <div class="owned-card__body">
                <h3>{listing.title}</h3>
                <p class="muted">"📍 " {listing.location}</p>
                <div class="owned-card__row">
                    <span class="owned-card__price">{format_price(u64::from(listing.price))}</span>
                    <span>"⭐ " {format!("{:.1}", listing.rating)} " (" {listing.review_count} ")"</span>
                </div>
                <div class="owned-card__figures">
                    <div>"Reservas: " {listing.bookings}</div>
                    <div>"Ingresos: $" {group_thousands(listing.revenue)}</div>
                </div>
                <a href=href class="btn btn--outline btn--small">"Ver"</a>
            </div>
        </article>
    }
}

/// Apply a finished publish to the page signals.
///
/// Returns `false` when the page is gone or the outcome belongs to a request
/// that is no longer pending.
fn settle_publish<E: std::fmt::Display>(
    mounted: &MountGuard,
    dash: RwSignal<DashboardState>,
    draft: RwSignal<DraftListing>,
    request_id: uuid::Uuid,
    outcome: &Result<(), E>,
) -> bool {
    if !mounted.is_mounted() {
        return false;
    }
    draft
        .try_update(|d| dash.try_update(|state| state.finish_publish(d, request_id, outcome)))
        .flatten()
        .unwrap_or(false)
}

#[component]
fn PublishPanel(dash: RwSignal<DashboardState>, draft: RwSignal<DraftListing>, mounted: MountGuard) -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(submitted) = draft.try_update(DraftListing::submit) else {
            return;
        };
        let (request_id, submission) = match submitted {
            Ok(pair) => pair,
            Err(err) => {
                ui.update(|u| u.notify(Notice::error("Error de validación", err.to_string())));
                return;
            }
        };

        let mounted = mounted.clone();
        leptos::task::spawn_local(async move {
            let outcome = api::publish_listing(request_id, &submission).await.map(|_| ());
            if !settle_publish(&mounted, dash, draft, request_id, &outcome) {
                #[cfg(feature = "hydrate")]
                log::debug!("publish {request_id} finished after unmount or was superseded; ignored");
                return;
            }
            match outcome {
                Ok(()) => {
                    ui.update(|u| {
                        u.notify(Notice::info(
                            "¡Experiencia publicada!",
                            "Tu experiencia está siendo revisada y será visible pronto.",
                        ));
                    });
                }
                Err(err) => ui.update(|u| u.notify(Notice::error("No se pudo publicar", err.to_string()))),
            }
        });
    };

    let busy = move || draft.with(|d| d.submission.is_busy());
    let highlight_count = move || draft.with(|d| d.highlights.len());

    view! {
        <div class="card publish-card">
            <h2>"Publicar Nueva Experiencia"</h2>
            <p class="muted">"Comparte tu conocimiento y cultura con viajeros de todo el mundo"</p>

            <form class="form" on:submit=on_submit>
                <div class="form__row">
                    <DraftInput draft field=DraftField::Title placeholder="Ej: Caminata por el Café Ancestral"/>
                    <DraftInput draft field=DraftField::Location placeholder="Ciudad, Departamento"/>
                </div>

                <label class="form__label">
                    {DraftField::Description.label()}
                    <textarea
                        class="form__input form__textarea"
                        rows="4"
                        placeholder="Describe tu experiencia en detalle..."
                        prop:value=move || draft.with(|d| d.description.clone())
                        on:input=move |ev| {
                            draft.update(|d| d.set_field(DraftField::Description, event_target_value(&ev)));
                        }
                    ></textarea>
                </label>

                <div class="form__row">
                    <DraftInput draft field=DraftField::Price placeholder="45000" kind="number"/>
                    <DraftInput draft field=DraftField::Duration placeholder="4 horas"/>
                    <DraftInput draft field=DraftField::MaxPeople placeholder="8" kind="number"/>
                </div>

                <label class="form__label">
                    "Categoría"
                    <select
                        class="form__input"
                        prop:value=move || draft.with(|d| d.category.map(Category::as_str).unwrap_or_default())
                        on:change=move |ev| draft.update(|d| d.set_category_str(&event_target_value(&ev)))
                    >
                        <option value="">"Selecciona una categoría"</option>
                        {Category::ALL
                            .into_iter()
                            .map(|c| view! { <option value=c.as_str()>{c.label()}</option> })
                            .collect_view()}
                    </select>
                </label>

                <fieldset class="form__group">
                    <legend class="form__label">"Puntos destacados"</legend>
                    <For each=move || 0..highlight_count() key=|index| *index let:index>
                        <div class="form__inline">
                            <input
                                class="form__input"
                                placeholder="Describe algo destacado de tu experiencia"
                                prop:value=move || {
                                    draft.with(|d| d.highlights.get(index).cloned().unwrap_or_default())
                                }
                                on:input=move |ev| {
                                    draft.update(|d| {
                                        d.update_highlight(index, event_target_value(&ev));
                                    });
                                }
                            />
                            <Show when=move || draft.with(DraftListing::can_remove_highlight)>
                                <button
                                    type="button"
                                    class="btn btn--ghost"
                                    aria-label="Quitar punto destacado"
                                    on:click=move |_| {
                                        draft.update(|d| {
                                            d.remove_highlight(index);
                                        });
                                    }
                                >
                                    "✕"
                                </button>
                            </Show>
                        </div>
                    </For>
                    <button
                        type="button"
                        class="btn btn--outline btn--block"
                        on:click=move |_| draft.update(DraftListing::add_highlight)
                    >
                        "➕ Agregar punto destacado"
                    </button>
                </fieldset>

                <div class="form__group">
                    <span class="form__label">"Imágenes"</span>
                    <div class="dropzone">
                        <p class="muted">"Arrastra y suelta imágenes aquí, o haz clic para seleccionar"</p>
                    </div>
                </div>

                <button class="btn btn--primary btn--block" type="submit" disabled=busy>
                    {move || if busy() { "Publicando..." } else { "Publicar Experiencia" }}
                </button>
            </form>
        </div>
    }
}

#[component]
fn DraftInput(
    draft: RwSignal<DraftListing>,
    field: DraftField,
    placeholder: &'static str,
    #[prop(default = "text")] kind: &'static str,
) -> impl IntoView {
    view! {
        <label class="form__label">
            {field.label()}
            <input
                class="form__input"
                type=kind
                placeholder=placeholder
                prop:value=move || draft.with(|d| d.field(field).to_owned())
                on:input=move |ev| draft.update(|d| d.set_field(field, event_target_value(&ev)))
            />
        </label>
    }
}

#[component]
fn BookingsPanel(account_type: AccountType) -> impl IntoView {
    let (heading, blurb) = match account_type {
        AccountType::Provider => ("Reservas Recibidas", "Gestiona las reservas de tus experiencias"),
        AccountType::Tourist => ("Mis Reservas", "Revisa tus próximas aventuras"),
    };

    view! {
        <div class="panel-header">
            <div>
                <h2>{heading}</h2>
                <p class="muted">{blurb}</p>
            </div>
        </div>
        <div class="booking-list">
            {bookings()
                .into_iter()
                .map(|booking| view! { <BookingRow booking account_type/> })
                .collect_view()}
        </div>
        <Show when=move || account_type == AccountType::Tourist>
            <div class="card provider-cta">
                <h3>"¿Tienes una experiencia para compartir?"</h3>
                <p class="muted">"Únete como proveedor y ofrece experiencias auténticas a viajeros de todo el mundo."</p>
                <a href="/register?type=provider" class="btn btn--primary">"Ser Proveedor"</a>
            </div>
        </Show>
    }
}

#[component]
fn BookingRow(booking: Booking, account_type: AccountType) -> impl IntoView {
    let show_provider = account_type == AccountType::Tourist;
    let needs_review = account_type == AccountType::Provider && booking.status == BookingStatus::Pending;
    let provider = booking.provider;

    view! {
        <article class="card booking-row">
            <div class="booking-row__main">
                <h3>{booking.listing_title}</h3>
                <div class="booking-row__meta">
                    <span>"📅 " {format_long_date(booking.date)}</span>
                    <span>"👥 " {booking.participants} " participantes"</span>
                    <Show when=move || show_provider>
                        <span>"📍 " {provider.clone()}</span>
                    </Show>
                </div>
            </div>
            <div class="booking-row__side">
                <span class=booking_badge_class(booking.status)>{booking.status.label()}</span>
                <p class="booking-row__total">{format_price_cop(booking.total)}</p>
            </div>
            <Show when=move || needs_review>
                <div class="booking-row__actions">
                    <button class="btn btn--primary btn--small" disabled=true title="Próximamente">
                        "Confirmar"
                    </button>
                    <button class="btn btn--outline btn--small" disabled=true title="Próximamente">
                        "Rechazar"
                    </button>
                </div>
            </Show>
        </article>
    }
}
