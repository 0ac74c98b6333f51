//! Single figure on the console overview.

use leptos::prelude::*;

#[component]
pub fn StatCard(label: &'static str, value: String, #[prop(optional)] icon: &'static str) -> impl IntoView {
    view! {
        <div class="stat-card">
            <div>
                <p class="stat-card__label">{label}</p>
                <p class="stat-card__value">{value}</p>
            </div>
            <span class="stat-card__icon" aria-hidden="true">{icon}</span>
        </div>
    }
}
