//! Store Engine Domain Models
//!
//! Persisted shapes for the four store-owned lists. Field names serialize
//! in camelCase and every field carries a default, so payloads written by
//! earlier versions (or hand-edited ones) deserialize instead of failing
//! the whole list.

use crate::catalog::Book;
use serde::{Deserialize, Serialize};

/// Returns the default quantity (1) for cart lines
fn default_qty() -> u32 {
    1
}

/// One distinct book's presence in the cart, with an aggregated quantity.
///
/// Invariants: at most one line per book id; `qty >= 1` (a line at zero
/// quantity does not exist, it is removed instead).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    /// The catalog record this line was created from.
    #[serde(flatten)]
    pub book: Book,

    /// Aggregated quantity, never below 1.
    #[serde(default = "default_qty")]
    pub qty: u32,

    /// Unix millis of the first insertion; unchanged by later increments.
    #[serde(default)]
    pub added_at: u64,
}

/// Wishlist membership for one book. The wishlist is a set keyed by id.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WishlistEntry {
    #[serde(flatten)]
    pub book: Book,

    #[serde(default)]
    pub added_at: u64,
}

/// An immutable record of a checkout. `items` and `total` are snapshots
/// taken at creation, not live references into the cart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Order {
    /// Generated id, unique per order.
    #[serde(default)]
    pub id: String,

    /// RFC 3339 timestamp at creation.
    #[serde(default)]
    pub date: String,

    #[serde(default)]
    pub items: Vec<CartLine>,

    #[serde(default)]
    pub total: u64,
}

/// Reduced projection of a book for the recently-viewed strip. Recency is
/// tracked by list position (most-recent-first, capped length).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RecentlyViewedEntry {
    #[serde(default)]
    pub id: u32,

    #[serde(default)]
    pub title: String,

    #[serde(default)]
    pub author: String,

    #[serde(default)]
    pub price: u32,

    #[serde(default)]
    pub image: String,

    #[serde(default)]
    pub category: String,
}

impl RecentlyViewedEntry {
    /// Projects a catalog record down to the recently-viewed shape, filling
    /// placeholder text for blank fields.
    pub fn project(book: &Book) -> Self {
        let or_default = |value: &str, fallback: &str| {
            if value.is_empty() {
                fallback.to_string()
            } else {
                value.to_string()
            }
        };

        Self {
            id: book.id,
            title: or_default(&book.title, "Untitled"),
            author: or_default(&book.author, "Unknown"),
            price: book.price,
            image: book.image.clone(),
            category: or_default(&book.category, "Uncategorized"),
        }
    }
}
