//! Card for a catalog listing.
//!
//! DESIGN
//! ======
//! Keeps listing presentation consistent between the catalog and the landing
//! page while centralizing the link to the detail route.

use leptos::prelude::*;

use crate::data::types::Listing;
use crate::util::format::format_price;

#[component]
pub fn ListingCard(listing: Listing) -> impl IntoView {
    let href = format!("/experiences/{}", listing.id);
    let price = format_price(u64::from(listing.price));
    let rating = format!("{:.1}", listing.rating);
    let reviews = format!("({} reseñas)", listing.review_count);
    let capacity = format!("Máx. {} personas", listing.max_people);

    view! {
        <a class="listing-card" href=href>
            <div class="listing-card__media">
                <img src="/placeholder.svg" alt=listing.title.clone()/>
                <span class="badge listing-card__category">{listing.category.label()}</span>
            </div>
            <div class="listing-card__body">
                <h3 class="listing-card__title">{listing.title}</h3>
                <p class="listing-card__location">"📍 " {listing.location}</p>
                <p class="listing-card__description">{listing.description}</p>
                <div class="listing-card__meta">
                    <span>"⭐ " {rating} " " {reviews}</span>
                    <span>"🕒 " {listing.duration}</span>
                    <span>"👥 " {capacity}</span>
                </div>
                <ul class="listing-card__features">
                    {listing
                        .features
                        .into_iter()
                        .map(|feature| view! { <li class="chip">{feature}</li> })
                        .collect_view()}
                </ul>
                <div class="listing-card__footer">
                    <span class="listing-card__provider">{listing.provider}</span>
                    <span class="listing-card__price">{price} <small>" por persona"</small></span>
                </div>
            </div>
        </a>
    }
}
