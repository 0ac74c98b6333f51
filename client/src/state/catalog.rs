//! Catalog search and category filter.
//!
//! DESIGN
//! ======
//! The catalog is small and fixed, so filtering is a linear scan recomputed on
//! every keystroke. Order of the source slice is preserved.

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

use crate::data::types::{Category, CategoryFilter, Listing};

/// Free-text query plus selected category.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CatalogState {
    pub query: String,
    pub category: CategoryFilter,
}

impl CatalogState {
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    pub fn select_category(&mut self, category: CategoryFilter) {
        self.category = category;
    }

    /// Clear both the query and the category.
    pub fn reset(&mut self) {
        self.query.clear();
        self.category = CategoryFilter::All;
    }

    pub fn is_filtered(&self) -> bool {
        !self.query.is_empty() || self.category != CategoryFilter::All
    }

    /// Whether `listing` passes both the text and the category predicate.
    ///
    /// The text predicate is a case-insensitive substring test over title,
    /// location and description. An empty query matches everything.
    pub fn matches(&self, listing: &Listing) -> bool {
        matches_query(listing, &self.query.to_lowercase()) && self.category.accepts(listing.category)
    }

    /// Listings that match, in their original relative order.
    pub fn filter<'a>(&self, listings: &'a [Listing]) -> Vec<&'a Listing> {
        let needle = self.query.to_lowercase();
        listings
            .iter()
            .filter(|l| matches_query(l, &needle) && self.category.accepts(l.category))
            .collect()
    }
}

fn matches_query(listing: &Listing, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    listing.title.to_lowercase().contains(needle)
        || listing.location.to_lowercase().contains(needle)
        || listing.description.to_lowercase().contains(needle)
}

/// One entry of the filter bar.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CategoryCount {
    pub filter: CategoryFilter,
    pub count: usize,
}

/// Counts per catalog category, headed by the "all" sentinel.
///
/// Counts ignore the current text query.
pub fn category_counts(listings: &[Listing]) -> Vec<CategoryCount> {
    let mut counts = Vec::with_capacity(Category::CATALOG.len() + 1);
    counts.push(CategoryCount { filter: CategoryFilter::All, count: listings.len() });
    for category in Category::CATALOG {
        let count = listings.iter().filter(|l| l.category == category).count();
        counts.push(CategoryCount { filter: CategoryFilter::Only(category), count });
    }
    counts
}

/// Header line restating how many listings are shown.
pub fn result_summary(count: usize) -> String {
    match count {
        1 => "1 experiencia encontrada".to_owned(),
        n => format!("{n} experiencias encontradas"),
    }
}
