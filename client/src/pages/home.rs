//! Landing page with featured experiences.

use leptos::prelude::*;

use crate::data::fixtures::featured_listings;
use crate::util::format::format_price;

#[component]
pub fn HomePage() -> impl IntoView {
    let featured = featured_listings();

    view! {
        <div class="home-page">
            <section class="hero">
                <div class="hero__content">
                    <h1>"Descubre las " <span class="hero__accent">"Raíces Vivas"</span> " de Colombia"</h1>
                    <p class="hero__lead">
                        "Conecta con comunidades locales y vive experiencias auténticas de turismo "
                        "comunitario que preservan tradiciones y apoyan economías locales."
                    </p>
                    <div class="hero__actions">
                        <a href="/experiences" class="btn btn--primary btn--lg">"Explorar Experiencias"</a>
                        <a href="/register?type=provider" class="btn btn--outline btn--lg">"Ofrecer Experiencias"</a>
                    </div>
                </div>
            </section>

            <section class="featured">
                <h2>"Experiencias Destacadas"</h2>
                <p class="featured__lead">"Aventuras únicas diseñadas por comunidades locales"</p>
                <div class="featured__grid">
                    {featured
                        .into_iter()
                        .map(|item| {
                            let href = format!("/experiences/{}", item.id);
                            let price = format_price(u64::from(item.price));
                            let rating = format!("{:.1}", item.rating);
                            view! {
                                <a class="featured-card" href=href>
                                    <img src="/placeholder.svg" alt=item.title.clone()/>
                                    <span class="badge">{item.category.label()}</span>
                                    <h3>{item.title}</h3>
                                    <p class="featured-card__location">"📍 " {item.location}</p>
                                    <div class="featured-card__footer">
                                        <span>"⭐ " {rating}</span>
                                        <span class="featured-card__price">{price}</span>
                                    </div>
                                </a>
                            }
                        })
                        .collect_view()}
                </div>
            </section>

            <section class="values">
                <div class="value-card">
                    <h3>"Comunidades Locales"</h3>
                    <p>"Cada experiencia es creada y guiada por las comunidades que la viven."</p>
                </div>
                <div class="value-card">
                    <h3>"Turismo Responsable"</h3>
                    <p>"Los ingresos se quedan en el territorio y fortalecen la economía local."</p>
                </div>
                <div class="value-card">
                    <h3>"Experiencias Verificadas"</h3>
                    <p>"Revisamos cada propuesta antes de publicarla en la plataforma."</p>
                </div>
            </section>
        </div>
    }
}
