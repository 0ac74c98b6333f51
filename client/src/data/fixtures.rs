//! Hard-coded marketplace data.
//!
//! Every view builds its own copy on mount; nothing here is shared mutable
//! state and nothing is persisted.

#[cfg(test)]
#[path = "fixtures_test.rs"]
mod fixtures_test;

use chrono::NaiveDate;

use super::types::{
    AccountType, Booking, BookingStatus, Category, ItineraryStep, Listing, ListingDetail, ModerationStatus,
    OwnedListing, ProviderProfile, Review,
};

const PLACEHOLDER_IMAGE: &str = "/placeholder.svg";

/// The demo account the console falls back to when nobody is signed in.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DemoUser {
    pub name: String,
    pub email: String,
    pub account_type: AccountType,
    pub location: String,
    pub organization: Option<String>,
}

pub fn demo_user() -> DemoUser {
    DemoUser {
        name: "María González".to_owned(),
        email: "maria@example.com".to_owned(),
        account_type: AccountType::Provider,
        location: "Huila, Colombia".to_owned(),
        organization: Some("Cooperativa San Agustín".to_owned()),
    }
}

/// Calendar literal; every call site is covered by the fixture tests.
fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("fixture dates are valid calendar days")
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_owned()).collect()
}

#[allow(clippy::too_many_arguments)]
fn listing(
    id: u32,
    title: &str,
    location: &str,
    price: u32,
    rating: f32,
    review_count: u32,
    category: Category,
    duration: &str,
    max_people: u32,
    description: &str,
    provider: &str,
    features: &[&str],
) -> Listing {
    Listing {
        id,
        title: title.to_owned(),
        location: location.to_owned(),
        price,
        rating,
        review_count,
        category,
        duration: duration.to_owned(),
        max_people,
        description: description.to_owned(),
        provider: provider.to_owned(),
        features: strings(features),
    }
}

/// The six experiences offered in the catalog.
pub fn catalog_listings() -> Vec<Listing> {
    vec![
        listing(
            1,
            "Caminata por el Café Ancestral",
            "San Vicente del Caguán, Caquetá",
            45_000,
            4.8,
            24,
            Category::Naturaleza,
            "4 horas",
            8,
            "Descubre los secretos del café cultivado por generaciones en las montañas del piedemonte amazónico.",
            "Cooperativa Campesina del Caguán",
            &["Degustación", "Guía local", "Transporte incluido"],
        ),
        listing(
            2,
            "Tejido Tradicional Inga",
            "Mocoa, Putumayo",
            60_000,
            4.9,
            18,
            Category::Cultura,
            "6 horas",
            6,
            "Aprende la técnica ancestral del tejido Inga con artesanas expertas de la comunidad.",
            "Mujeres Tejedoras Inga",
            &["Material incluido", "Producto final", "Certificado"],
        ),
        listing(
            3,
            "Avistamiento de Aves del Piedemonte",
            "Florencia, Caquetá",
            35_000,
            4.7,
            31,
            Category::Naturaleza,
            "3 horas",
            12,
            "Observa especies endémicas del piedemonte amazónico en su hábitat natural con guías locales.",
            "EcoTurismo Caquetá",
            &["Binoculares", "Guía ornitólogo", "Desayuno rural"],
        ),
        listing(
            4,
            "Cocina Tradicional Amazónica",
            "Puerto Asís, Putumayo",
            55_000,
            4.8,
            15,
            Category::Gastronomia,
            "5 horas",
            10,
            "Prepara platos ancestrales con ingredientes de la selva amazónica del Putumayo.",
            "Comunidad Cofán",
            &["Ingredientes locales", "Receta tradicional", "Almuerzo incluido"],
        ),
        listing(
            5,
            "Navegación por el Río Caquetá",
            "Puerto Leguízamo, Putumayo",
            40_000,
            4.6,
            22,
            Category::Aventura,
            "4 horas",
            8,
            "Navega por el majestuoso río Caquetá en canoas construidas por comunidades locales.",
            "Navegantes del Caquetá",
            &["Chaleco salvavidas", "Guía local", "Refrigerio"],
        ),
        listing(
            6,
            "Rituales de Sanación Ancestral",
            "Valle de Sibundoy, Putumayo",
            80_000,
            4.9,
            12,
            Category::Bienestar,
            "8 horas",
            4,
            "Participa en ceremonia de sanación con plantas medicinales ancestrales del Valle de Sibundoy.",
            "Taitas del Putumayo",
            &["Ceremonia completa", "Medicina tradicional", "Acompañamiento"],
        ),
    ]
}

/// Summary card shown on the landing page.
#[derive(Clone, Debug, PartialEq)]
pub struct FeaturedListing {
    pub id: u32,
    pub title: String,
    pub location: String,
    pub price: u32,
    pub rating: f32,
    pub category: Category,
}

pub fn featured_listings() -> Vec<FeaturedListing> {
    let featured = |id: u32, title: &str, location: &str, price: u32, rating: f32, category: Category| {
        FeaturedListing { id, title: title.to_owned(), location: location.to_owned(), price, rating, category }
    };
    vec![
        featured(1, "Caminata por el Café Ancestral", "Huila, Colombia", 45_000, 4.8, Category::Naturaleza),
        featured(2, "Tejido Tradicional Wayuu", "La Guajira, Colombia", 60_000, 4.9, Category::Cultura),
        featured(3, "Avistamiento de Aves Andinas", "Cundinamarca, Colombia", 35_000, 4.7, Category::Naturaleza),
    ]
}

fn default_availability() -> Vec<NaiveDate> {
    vec![
        date(2024, 1, 15),
        date(2024, 1, 16),
        date(2024, 1, 18),
        date(2024, 1, 22),
        date(2024, 1, 23),
        date(2024, 1, 25),
        date(2024, 1, 29),
        date(2024, 1, 30),
    ]
}

fn step(time: &str, activity: &str, description: &str) -> ItineraryStep {
    ItineraryStep { time: time.to_owned(), activity: activity.to_owned(), description: description.to_owned() }
}

fn coffee_walk_detail() -> ListingDetail {
    let listing = listing(
        1,
        "Caminata por el Café Ancestral",
        "Huila, Colombia",
        45_000,
        4.8,
        24,
        Category::Naturaleza,
        "4 horas",
        8,
        "Descubre los secretos del café cultivado por generaciones en las montañas del Huila. \
         Esta experiencia te llevará a través de plantaciones tradicionales donde aprenderás sobre el proceso \
         completo del café, desde la semilla hasta la taza, mientras conoces las historias y tradiciones de \
         las familias caficultoras locales.",
        "Cooperativa San Agustín",
        &["Degustación", "Guía local", "Transporte incluido"],
    );

    ListingDetail {
        listing,
        images: vec![PLACEHOLDER_IMAGE.to_owned(); 4],
        min_age: Some(12),
        difficulty: Some("Moderada".to_owned()),
        language: "Español".to_owned(),
        provider: ProviderProfile {
            name: "Cooperativa San Agustín".to_owned(),
            rating: 4.9,
            verified: true,
            years_active: Some("5 años".to_owned()),
        },
        highlights: strings(&[
            "Recorrido por plantaciones de café ancestral",
            "Proceso completo del café: siembra, cosecha y tostado",
            "Degustación de diferentes variedades locales",
            "Interacción con familias caficultoras",
            "Vista panorámica de las montañas del Huila",
            "Almuerzo tradicional incluido",
        ]),
        includes: strings(&[
            "Guía especializado local",
            "Transporte desde el punto de encuentro",
            "Degustación de café",
            "Almuerzo tradicional",
            "Seguro de accidentes",
            "Certificado de participación",
        ]),
        itinerary: vec![
            step("8:00 AM", "Encuentro en el punto de partida", "Reunión con el guía y presentación del grupo"),
            step("8:30 AM", "Traslado a la finca", "Viaje en transporte local hacia las plantaciones"),
            step("9:00 AM", "Recorrido por las plantaciones", "Conoce el proceso de cultivo del café ancestral"),
            step("11:00 AM", "Proceso de beneficio", "Aprende sobre el despulpado, fermentado y secado"),
            step("12:30 PM", "Almuerzo tradicional", "Comida típica de la región con la familia anfitriona"),
            step("1:30 PM", "Degustación de café", "Prueba diferentes variedades y métodos de preparación"),
            step("2:30 PM", "Regreso", "Vuelta al punto de encuentro inicial"),
        ],
        availability: default_availability(),
        reviews: vec![
            Review {
                id: 1,
                author: "María González".to_owned(),
                rating: 5,
                date: date(2024, 1, 10),
                comment: "Una experiencia increíble. Aprendí mucho sobre el café y la cultura local. \
                          La familia anfitriona fue muy acogedora."
                    .to_owned(),
                verified: true,
            },
            Review {
                id: 2,
                author: "Carlos Rodríguez".to_owned(),
                rating: 5,
                date: date(2024, 1, 8),
                comment: "Excelente recorrido, muy bien organizado. El café que probamos era excepcional. \
                          Definitivamente recomendado."
                    .to_owned(),
                verified: true,
            },
            Review {
                id: 3,
                author: "Ana Martínez".to_owned(),
                rating: 4,
                date: date(2024, 1, 5),
                comment: "Muy buena experiencia, aunque el transporte podría mejorar. \
                          Los paisajes son hermosos y el guía muy conocedor."
                    .to_owned(),
                verified: true,
            },
        ],
    }
}

/// Detail record built from a catalog entry that has no dedicated fixture.
fn derived_detail(listing: Listing) -> ListingDetail {
    ListingDetail {
        images: vec![PLACEHOLDER_IMAGE.to_owned(); 4],
        min_age: None,
        difficulty: None,
        language: "Español".to_owned(),
        provider: ProviderProfile {
            name: listing.provider.clone(),
            rating: listing.rating,
            verified: true,
            years_active: None,
        },
        highlights: listing.features.clone(),
        includes: listing.features.clone(),
        itinerary: Vec::new(),
        availability: default_availability(),
        reviews: Vec::new(),
        listing,
    }
}

/// Look up the detail record for a listing id. `None` means no such listing.
pub fn listing_detail(id: u32) -> Option<ListingDetail> {
    if id == 1 {
        return Some(coffee_walk_detail());
    }
    catalog_listings()
        .into_iter()
        .find(|l| l.id == id)
        .map(derived_detail)
}

/// Listings owned by the demo provider.
pub fn owned_listings() -> Vec<OwnedListing> {
    vec![
        OwnedListing {
            id: 1,
            title: "Caminata por el Café Ancestral".to_owned(),
            location: "Huila, Colombia".to_owned(),
            price: 45_000,
            rating: 4.8,
            review_count: 24,
            status: ModerationStatus::Approved,
            bookings: 47,
            revenue: 2_115_000,
        },
        OwnedListing {
            id: 2,
            title: "Proceso de Tostado Tradicional".to_owned(),
            location: "Huila, Colombia".to_owned(),
            price: 35_000,
            rating: 4.6,
            review_count: 12,
            status: ModerationStatus::Pending,
            bookings: 0,
            revenue: 0,
        },
    ]
}

/// Reservations shown in the console bookings tab.
pub fn bookings() -> Vec<Booking> {
    vec![
        Booking {
            id: 1,
            listing_title: "Caminata por el Café Ancestral".to_owned(),
            date: date(2024, 1, 20),
            participants: 4,
            status: BookingStatus::Confirmed,
            total: 180_000,
            provider: "Cooperativa San Agustín".to_owned(),
        },
        Booking {
            id: 2,
            listing_title: "Tejido Tradicional Wayuu".to_owned(),
            date: date(2024, 1, 25),
            participants: 2,
            status: BookingStatus::Pending,
            total: 120_000,
            provider: "Mujeres Wayuu Unidos".to_owned(),
        },
    ]
}
