//! Record shapes for listings, bookings, and the console collections.
//!
//! DESIGN
//! ======
//! These mirror what a future marketplace API would return. They derive
//! serde so fixtures and a real client can share one definition.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Fixed experience categories.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Naturaleza,
    Cultura,
    #[serde(rename = "Gastronomía")]
    Gastronomia,
    Aventura,
    Bienestar,
    Arte,
}

impl Category {
    /// Every category, in display order.
    pub const ALL: [Category; 6] = [
        Category::Naturaleza,
        Category::Cultura,
        Category::Gastronomia,
        Category::Aventura,
        Category::Bienestar,
        Category::Arte,
    ];

    /// Categories offered by the catalog filter bar.
    pub const CATALOG: [Category; 5] = [
        Category::Naturaleza,
        Category::Cultura,
        Category::Gastronomia,
        Category::Aventura,
        Category::Bienestar,
    ];

    /// Stable identifier used in form values.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Naturaleza => "Naturaleza",
            Self::Cultura => "Cultura",
            Self::Gastronomia => "Gastronomía",
            Self::Aventura => "Aventura",
            Self::Bienestar => "Bienestar",
            Self::Arte => "Arte",
        }
    }

    /// Human label; only `Arte` differs from its identifier.
    pub fn label(self) -> &'static str {
        match self {
            Self::Arte => "Arte y Artesanías",
            other => other.as_str(),
        }
    }

    /// Inverse of [`Category::as_str`].
    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.as_str() == raw)
    }
}

/// Category selection in the catalog, with an "all" sentinel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    pub fn label(self) -> &'static str {
        match self {
            Self::All => "Todas",
            Self::Only(category) => category.label(),
        }
    }

    pub fn accepts(self, category: Category) -> bool {
        match self {
            Self::All => true,
            Self::Only(selected) => selected == category,
        }
    }
}

/// A bookable experience as shown in the catalog.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Listing {
    pub id: u32,
    pub title: String,
    pub location: String,
    pub price: u32,
    pub rating: f32,
    pub review_count: u32,
    pub category: Category,
    pub duration: String,
    pub max_people: u32,
    pub description: String,
    pub provider: String,
    #[serde(default)]
    pub features: Vec<String>,
}

/// One step of a listing's day plan.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItineraryStep {
    pub time: String,
    pub activity: String,
    pub description: String,
}

/// A traveller review attached to a listing.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Review {
    pub id: u32,
    pub author: String,
    pub rating: u8,
    pub date: NaiveDate,
    pub comment: String,
    pub verified: bool,
}

/// Public profile of the community organization running a listing.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProviderProfile {
    pub name: String,
    pub rating: f32,
    pub verified: bool,
    pub years_active: Option<String>,
}

/// Everything the detail page renders for one listing.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ListingDetail {
    pub listing: Listing,
    pub images: Vec<String>,
    pub min_age: Option<u32>,
    pub difficulty: Option<String>,
    pub language: String,
    pub provider: ProviderProfile,
    pub highlights: Vec<String>,
    pub includes: Vec<String>,
    pub itinerary: Vec<ItineraryStep>,
    pub availability: Vec<NaiveDate>,
    pub reviews: Vec<Review>,
}

/// Moderation state of a provider-owned listing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModerationStatus {
    Approved,
    Pending,
    Rejected,
}

impl ModerationStatus {
    pub fn label(self) -> &'static str {
        match self {
            Self::Approved => "Aprobada",
            Self::Pending => "Pendiente",
            Self::Rejected => "Rechazada",
        }
    }
}

/// A listing owned by the signed-in provider, with its sales figures.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct OwnedListing {
    pub id: u32,
    pub title: String,
    pub location: String,
    pub price: u32,
    pub rating: f32,
    pub review_count: u32,
    pub status: ModerationStatus,
    pub bookings: u32,
    pub revenue: u64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BookingStatus {
    Pending,
    Confirmed,
}

impl BookingStatus {
    pub fn label(self) -> &'static str {
        match self {
            Self::Pending => "Pendiente",
            Self::Confirmed => "Confirmada",
        }
    }
}

/// A reservation as listed in the console. The title is denormalized.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Booking {
    pub id: u32,
    pub listing_title: String,
    pub date: NaiveDate,
    pub participants: u32,
    pub status: BookingStatus,
    pub total: u64,
    pub provider: String,
}

/// Mutually exclusive account roles.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccountType {
    #[default]
    Tourist,
    Provider,
}

impl AccountType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Tourist => "tourist",
            Self::Provider => "provider",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Tourist => "Turista",
            Self::Provider => "Proveedor",
        }
    }

    /// Parse the `?type=` query value; anything unknown is a tourist.
    pub fn from_query(raw: Option<&str>) -> Self {
        match raw {
            Some("provider") => Self::Provider,
            _ => Self::Tourist,
        }
    }
}
