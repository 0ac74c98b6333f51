//! Provider/tourist console: tab gating and overview statistics.
//!
//! DESIGN
//! ======
//! Statistics are derived on demand from the current collections rather than
//! cached, so they can never drift from what the tabs list.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use chrono::NaiveDate;

use super::draft::DraftListing;
use crate::data::types::{AccountType, Booking, BookingStatus, OwnedListing};

/// Console tabs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum DashboardTab {
    #[default]
    Overview,
    OwnedListings,
    Publish,
    Bookings,
}

impl DashboardTab {
    /// Whether `account_type` may open this tab.
    pub fn is_reachable(self, account_type: AccountType) -> bool {
        match self {
            Self::Overview | Self::Bookings => true,
            Self::OwnedListings | Self::Publish => account_type == AccountType::Provider,
        }
    }

    pub fn label(self, account_type: AccountType) -> &'static str {
        match (self, account_type) {
            (Self::Overview, _) => "Resumen",
            (Self::OwnedListings, _) => "Mis Experiencias",
            (Self::Publish, _) => "Publicar",
            (Self::Bookings, AccountType::Provider) => "Reservas Recibidas",
            (Self::Bookings, AccountType::Tourist) => "Mis Reservas",
        }
    }
}

/// Tabs shown for `account_type`, in display order.
pub fn tabs_for(account_type: AccountType) -> Vec<DashboardTab> {
    [DashboardTab::Overview, DashboardTab::OwnedListings, DashboardTab::Publish, DashboardTab::Bookings]
        .into_iter()
        .filter(|tab| tab.is_reachable(account_type))
        .collect()
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DashboardState {
    pub account_type: AccountType,
    pub active_tab: DashboardTab,
}

impl DashboardState {
    pub fn new(account_type: AccountType) -> Self {
        Self { account_type, active_tab: DashboardTab::Overview }
    }

    /// Jump to `tab`. Unreachable tabs are refused and reported as `false`.
    pub fn select_tab(&mut self, tab: DashboardTab) -> bool {
        if !tab.is_reachable(self.account_type) {
            return false;
        }
        self.active_tab = tab;
        true
    }

    /// Change role; an active tab the new role cannot see falls back to the overview.
    pub fn set_account_type(&mut self, account_type: AccountType) {
        self.account_type = account_type;
        if !self.active_tab.is_reachable(account_type) {
            self.active_tab = DashboardTab::Overview;
        }
    }

    pub fn tabs(&self) -> Vec<DashboardTab> {
        tabs_for(self.account_type)
    }

    /// Apply a publish outcome to `draft`. A success clears the form and
    /// lands on the provider's listings; a stale id changes nothing.
    pub fn finish_publish<E: std::fmt::Display>(
        &mut self,
        draft: &mut DraftListing,
        request_id: uuid::Uuid,
        outcome: &Result<(), E>,
    ) -> bool {
        if !draft.complete(request_id, outcome) {
            return false;
        }
        if outcome.is_ok() {
            self.select_tab(DashboardTab::OwnedListings);
        }
        true
    }
}

/// Provider overview cards.
#[derive(Clone, Debug, PartialEq)]
pub struct ProviderStats {
    pub listing_count: usize,
    pub total_bookings: u64,
    pub total_revenue: u64,
    pub average_rating: Option<f32>,
}

impl ProviderStats {
    pub fn from_listings(listings: &[OwnedListing]) -> Self {
        Self {
            listing_count: listings.len(),
            total_bookings: listings.iter().map(|l| u64::from(l.bookings)).sum(),
            total_revenue: listings.iter().map(|l| l.revenue).sum(),
            average_rating: average_rating(listings),
        }
    }
}

/// Mean rating, or `None` when there is nothing to average.
pub fn average_rating(listings: &[OwnedListing]) -> Option<f32> {
    if listings.is_empty() {
        return None;
    }
    let sum: f32 = listings.iter().map(|l| l.rating).sum();
    #[allow(clippy::cast_precision_loss)]
    let len = listings.len() as f32;
    Some(sum / len)
}

/// Tourist overview cards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TouristStats {
    pub booking_count: usize,
    pub confirmed_count: usize,
    pub upcoming_count: usize,
    pub total_spent: u64,
}

impl TouristStats {
    /// `today` decides which bookings are upcoming (strictly later dates).
    pub fn from_bookings(bookings: &[Booking], today: NaiveDate) -> Self {
        Self {
            booking_count: bookings.len(),
            confirmed_count: bookings
                .iter()
                .filter(|b| b.status == BookingStatus::Confirmed)
                .count(),
            upcoming_count: bookings.iter().filter(|b| b.date > today).count(),
            total_spent: bookings.iter().map(|b| b.total).sum(),
        }
    }
}
