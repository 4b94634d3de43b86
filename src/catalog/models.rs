//! Catalog Domain Models
//!
//! This module contains the read-only catalog record and the filter
//! criteria the UI layer passes into the filter/sort pipeline.

use serde::{Deserialize, Serialize};

// =============================================================================
// Catalog Records
// =============================================================================

/// A single catalog record. Immutable once loaded; the core never mutates it.
///
/// Every field carries a serde default so that a partial record read back
/// from storage deserializes instead of failing the whole list. An `id` of 0
/// marks a record without identity (the serde default for a missing id);
/// such records are skipped by the pipeline and rejected by store operations.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    /// Unique catalog key. 0 means "no identity".
    #[serde(default)]
    pub id: u32,

    #[serde(default)]
    pub title: String,

    #[serde(default)]
    pub author: String,

    /// One of the fixed category names (see [`super::data::categories`]).
    #[serde(default)]
    pub category: String,

    /// Price in integer currency units.
    #[serde(default)]
    pub price: u32,

    /// Average rating, 0.0 to 5.0.
    #[serde(default)]
    pub rating: f32,

    /// Cover image URL.
    #[serde(default)]
    pub image: String,

    #[serde(default)]
    pub in_stock: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Book {
    /// Whether this record carries a usable identity.
    pub fn has_identity(&self) -> bool {
        self.id != 0
    }
}

/// Descriptor for one of the fixed browsing categories.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Category {
    pub id: String,
    pub name: String,
    pub description: String,
}

// =============================================================================
// Filter Criteria
// =============================================================================

/// Inclusive price bounds. Defaults to the full range.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct PriceRange {
    pub min: u32,
    pub max: u32,
}

impl PriceRange {
    pub fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, price: u32) -> bool {
        price >= self.min && price <= self.max
    }
}

impl Default for PriceRange {
    fn default() -> Self {
        Self {
            min: 0,
            max: u32::MAX,
        }
    }
}

/// Sort selection for the result list.
///
/// `Featured` keeps catalog order. All other keys sort stably, so books with
/// equal keys keep their relative catalog order.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    #[default]
    Featured,
    PriceAsc,
    PriceDesc,
    RatingDesc,
    TitleAsc,
    TitleDesc,
}

/// Ephemeral filter state owned by the UI layer and passed by reference on
/// every recomputation. The core does not retain it.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct FilterCriteria {
    pub search_query: String,

    /// Empty means "no category filter".
    pub selected_categories: Vec<String>,

    pub price_range: PriceRange,

    pub sort: SortKey,
}
