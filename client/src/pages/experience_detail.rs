//! Listing detail page with the booking composer.
//!
//! SYSTEM CONTEXT
//! ==============
//! The `{id}` path segment is resolved explicitly; an unknown id renders a
//! not-found view. Booking goes through `net::api::submit_booking` and, once
//! accepted, navigates to the console.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::data::types::ListingDetail;
use crate::net::api;
use crate::state::booking::BookingComposer;
use crate::state::ui::{DetailTab, Notice, UiState};
use crate::util::format::{format_long_date, format_price, format_price_cop};
use crate::util::mount::MountGuard;
use crate::util::route::{RouteError, resolve_listing};

#[component]
pub fn ExperienceDetailPage() -> impl IntoView {
    let params = use_params_map();
    let resolved = move || {
        let raw = params.read().get("id");
        match raw {
            Some(raw) => resolve_listing(&raw),
            None => Err(RouteError::InvalidId(String::new())),
        }
    };

    move || match resolved() {
        Ok(detail) => view! { <ListingDetailView detail/> }.into_any(),
        Err(err) => view! {
            <div class="not-found">
                <h1>"Experiencia no encontrada"</h1>
                <p>{err.to_string()}</p>
                <a href="/experiences" class="btn btn--primary">"Volver a experiencias"</a>
            </div>
        }
        .into_any(),
    }
}

#[component]
fn ListingDetailView(detail: ListingDetail) -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let navigate = use_navigate();
    let mounted = MountGuard::install();

    let composer = RwSignal::new(BookingComposer::for_listing(&detail));
    let tab = RwSignal::new(DetailTab::default());
    let detail = StoredValue::new(detail);

    let on_date_change = move |ev| {
        let raw = event_target_value(&ev);
        if let Some(Err(err)) = composer.try_update(|c| c.select_date_str(&raw)) {
            ui.update(|u| u.notify(Notice::error(err.title(), err.to_string())));
        }
    };

    let on_book = move |_| {
        let Some(submitted) = composer.try_update(BookingComposer::submit) else {
            return;
        };
        let (request_id, request) = match submitted {
            Ok(pair) => pair,
            Err(err) => {
                ui.update(|u| u.notify(Notice::error(err.title(), err.to_string())));
                return;
            }
        };

        let mounted = mounted.clone();
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            let outcome = api::submit_booking(request_id, &request).await.map(|_| ());
            if !mounted.is_mounted() {
                #[cfg(feature = "hydrate")]
                log::debug!("booking {request_id} finished after unmount; ignored");
                return;
            }
            if !composer.try_update(|c| c.complete(request_id, &outcome)).unwrap_or(false) {
                #[cfg(feature = "hydrate")]
                log::debug!("booking {request_id} was superseded; ignored");
                return;
            }
            match outcome {
                Ok(()) => {
                    ui.update(|u| {
                        u.notify(Notice::info(
                            "¡Solicitud de reserva enviada!",
                            "Te contactaremos pronto para confirmar tu reserva.",
                        ));
                    });
                    navigate("/dashboard", NavigateOptions::default());
                }
                Err(err) => ui.update(|u| u.notify(Notice::error("No se pudo enviar la reserva", err.to_string()))),
            }
        });
    };

    let d = detail.get_value();
    let listing = d.listing.clone();
    let price_label = format_price(u64::from(listing.price));
    let rating = format!("{:.1}", listing.rating);
    let review_count = listing.review_count;
    let provider = d.provider.clone();
    let provider_verified = provider.verified;
    let hero_image = d.images.first().cloned().unwrap_or_else(|| "/placeholder.svg".to_owned());
    let facts = listing_facts(&d);

    view! {
        <div class="detail-page">
            <a href="/experiences" class="btn btn--ghost detail-page__back">"← Volver a experiencias"</a>

            <div class="detail-page__grid">
                <div class="detail-page__main">
                    <div class="detail-hero">
                        <img src=hero_image alt=listing.title.clone()/>
                        <span class="badge detail-hero__category">{listing.category.label()}</span>
                    </div>

                    <header class="detail-header">
                        <h1>{listing.title.clone()}</h1>
                        <p class="detail-header__location">"📍 " {listing.location.clone()}</p>
                        <p class="detail-header__rating">
                            "⭐ " {rating} " (" {review_count} " reseñas)"
                        </p>
                        <ul class="detail-header__facts">
                            {facts.into_iter().map(|fact| view! { <li class="chip">{fact}</li> }).collect_view()}
                        </ul>
                    </header>

                    <section class="provider-card">
                        <h3>{provider.name.clone()}</h3>
                        <p>
                            "⭐ " {format!("{:.1}", provider.rating)}
                            {provider.years_active.clone().map(|y| format!(" · {y} de experiencia"))}
                        </p>
                        <Show when=move || provider_verified>
                            <span class="badge badge--verified">"Proveedor verificado"</span>
                        </Show>
                    </section>

                    <nav class="tabs">
                        {DetailTab::ALL
                            .into_iter()
                            .map(|t| {
                                view! {
                                    <button
                                        class="tab"
                                        class:tab--active=move || tab.get() == t
                                        on:click=move |_| tab.set(t)
                                    >
                                        {t.label()}
                                    </button>
                                }
                            })
                            .collect_view()}
                    </nav>

                    <section class="tab-panel">
                        {move || detail.with_value(|d| render_tab(tab.get(), d))}
                    </section>
                </div>

                <aside class="booking-card">
                    <p class="booking-card__price">{price_label.clone()} <small>" por persona"</small></p>

                    <label class="form__label">
                        "Fecha"
                        <select
                            class="form__input"
                            prop:value=move || {
                                composer.with(|c| c.selected_date.map(|d| d.to_string()).unwrap_or_default())
                            }
                            on:change=on_date_change
                        >
                            <option value="">"Selecciona una fecha"</option>
                            {detail
                                .with_value(|d| d.availability.clone())
                                .into_iter()
                                .map(|date| {
                                    view! { <option value=date.to_string()>{format_long_date(date)}</option> }
                                })
                                .collect_view()}
                        </select>
                    </label>

                    <div class="stepper">
                        <span class="form__label">"Participantes"</span>
                        <button
                            class="stepper__button"
                            aria-label="Menos participantes"
                            disabled=move || !composer.with(BookingComposer::can_decrement)
                            on:click=move |_| composer.update(BookingComposer::decrement)
                        >
                            "−"
                        </button>
                        <span class="stepper__value">{move || composer.with(|c| c.participants)}</span>
                        <button
                            class="stepper__button"
                            aria-label="Más participantes"
                            disabled=move || !composer.with(BookingComposer::can_increment)
                            on:click=move |_| composer.update(BookingComposer::increment)
                        >
                            "+"
                        </button>
                        <span class="stepper__hint">{format!("Máximo {} personas", listing.max_people)}</span>
                    </div>

                    <div class="booking-card__breakdown">
                        <div class="booking-card__row">
                            <span>
                                {price_label} " × " {move || composer.with(|c| c.participants)} " personas"
                            </span>
                        </div>
                        <div class="booking-card__row booking-card__total">
                            <span>"Total"</span>
                            <span>{move || format_price_cop(composer.with(BookingComposer::total))}</span>
                        </div>
                    </div>

                    <button
                        class="btn btn--primary btn--block"
                        disabled=move || composer.with(|c| c.is_busy() || c.selected_date.is_none())
                        on:click=on_book
                    >
                        {move || if composer.with(BookingComposer::is_busy) { "Procesando..." } else { "Reservar ahora" }}
                    </button>
                    <p class="booking-card__note">"No se realizará ningún cargo todavía"</p>
                </aside>
            </div>
        </div>
    }
}

fn listing_facts(detail: &ListingDetail) -> Vec<String> {
    let mut facts = vec![
        format!("🕒 {}", detail.listing.duration),
        format!("👥 Máx. {} personas", detail.listing.max_people),
        format!("🗣 {}", detail.language),
    ];
    if let Some(age) = detail.min_age {
        facts.push(format!("Edad mínima {age} años"));
    }
    if let Some(difficulty) = &detail.difficulty {
        facts.push(format!("Dificultad {difficulty}"));
    }
    facts
}

fn render_tab(tab: DetailTab, detail: &ListingDetail) -> AnyView {
    match tab {
        DetailTab::Description => {
            let description = detail.listing.description.clone();
            let highlights = detail.highlights.clone();
            view! {
                <div>
                    <p class="detail-description">{description}</p>
                    <h3>"Lo más destacado"</h3>
                    <ul class="check-list">
                        {highlights.into_iter().map(|h| view! { <li>"✓ " {h}</li> }).collect_view()}
                    </ul>
                </div>
            }
            .into_any()
        }
        DetailTab::Itinerary if detail.itinerary.is_empty() => {
            view! { <p class="muted">"El itinerario detallado se comparte al confirmar la reserva."</p> }.into_any()
        }
        DetailTab::Itinerary => {
            let steps = detail.itinerary.clone();
            view! {
                <ol class="itinerary">
                    {steps
                        .into_iter()
                        .map(|step| {
                            view! {
                                <li class="itinerary__step">
                                    <span class="itinerary__time">{step.time}</span>
                                    <div>
                                        <h4>{step.activity}</h4>
                                        <p>{step.description}</p>
                                    </div>
                                </li>
                            }
                        })
                        .collect_view()}
                </ol>
            }
            .into_any()
        }
        DetailTab::Includes => {
            let includes = detail.includes.clone();
            view! {
                <ul class="check-list">
                    {includes.into_iter().map(|item| view! { <li>"✓ " {item}</li> }).collect_view()}
                </ul>
            }
            .into_any()
        }
        DetailTab::Reviews if detail.reviews.is_empty() => {
            view! { <p class="muted">"Esta experiencia aún no tiene reseñas."</p> }.into_any()
        }
        DetailTab::Reviews => {
            let reviews = detail.reviews.clone();
            view! {
                <div class="reviews">
                    {reviews
                        .into_iter()
                        .map(|review| {
                            let stars = "★".repeat(usize::from(review.rating));
                            let verified = review.verified;
                            view! {
                                <article class="review">
                                    <header class="review__header">
                                        <strong>{review.author}</strong>
                                        <Show when=move || verified>
                                            <span class="badge badge--verified">"Verificado"</span>
                                        </Show>
                                        <span class="review__stars">{stars}</span>
                                        <span class="review__date">{format_long_date(review.date)}</span>
                                    </header>
                                    <p>{review.comment}</p>
                                </article>
                            }
                        })
                        .collect_view()}
                </div>
            }
            .into_any()
        }
    }
}
