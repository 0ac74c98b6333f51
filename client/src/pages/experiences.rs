//! Catalog page: free-text search plus category chips over the fixed listings.
//!
//! SYSTEM CONTEXT
//! ==============
//! The listing set is loaded once on mount; `CatalogState` is the only thing
//! that changes, and the visible list is a memo over it.

use leptos::prelude::*;

use crate::components::listing_card::ListingCard;
use crate::data::fixtures::catalog_listings;
use crate::data::types::Listing;
use crate::state::catalog::{CatalogState, category_counts, result_summary};

#[component]
pub fn ExperiencesPage() -> impl IntoView {
    let listings = StoredValue::new(catalog_listings());
    let catalog = RwSignal::new(CatalogState::default());
    let counts = listings.with_value(|all| category_counts(all));

    let visible = Memo::new(move |_| {
        let state = catalog.get();
        listings.with_value(|all| state.filter(all).into_iter().cloned().collect::<Vec<Listing>>())
    });

    let reset = move |_| catalog.update(CatalogState::reset);

    view! {
        <div class="catalog-page">
            <section class="catalog-hero">
                <h1>"Experiencias Auténticas"</h1>
                <p>
                    "Descubre aventuras únicas diseñadas por comunidades locales que celebran la "
                    "riqueza cultural de Colombia"
                </p>
                <input
                    class="catalog-search"
                    type="search"
                    placeholder="Buscar por nombre, ubicación o descripción..."
                    prop:value=move || catalog.with(|c| c.query.clone())
                    on:input=move |ev| catalog.update(|c| c.set_query(event_target_value(&ev)))
                />
            </section>

            <div class="catalog-filters">
                {counts
                    .into_iter()
                    .map(|entry| {
                        let filter = entry.filter;
                        view! {
                            <button
                                class="chip"
                                class:chip--active=move || catalog.with(|c| c.category == filter)
                                on:click=move |_| catalog.update(|c| c.select_category(filter))
                            >
                                {filter.label()}
                                " ("
                                {entry.count}
                                ")"
                            </button>
                        }
                    })
                    .collect_view()}
            </div>

            <div class="catalog-results">
                <p class="catalog-results__summary">{move || result_summary(visible.with(Vec::len))}</p>
                <Show
                    when=move || visible.with(|v| !v.is_empty())
                    fallback=move || {
                        view! {
                            <div class="catalog-empty">
                                <h3>"No se encontraron experiencias"</h3>
                                <p>"Intenta con otros términos de búsqueda o explora otras categorías."</p>
                                <button class="btn btn--outline" on:click=reset>
                                    "Ver todas las experiencias"
                                </button>
                            </div>
                        }
                    }
                >
                    <div class="catalog-grid">
                        <For
                            each=move || visible.get()
                            key=|listing| listing.id
                            children=|listing| view! { <ListingCard listing/> }
                        />
                    </div>
                </Show>
            </div>
        </div>
    }
}
