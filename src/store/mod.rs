//! Store Engine Domain Module
//!
//! This module contains the client-side store and its collaborators:
//! - Domain models (cart lines, wishlist entries, orders, recently viewed)
//! - Business logic helpers (totals, order ids, formatting)
//! - The store engine itself and its persistence keys
//! - The key-value storage abstraction and backends

pub mod helpers;
pub mod models;
pub mod state;
pub mod storage;

// Re-export commonly used types for convenience
pub use models::{CartLine, Order, RecentlyViewedEntry, WishlistEntry};
pub use state::{
    BookStore, CART_KEY, ORDERS_KEY, RECENTLY_VIEWED_CAP, RECENTLY_VIEWED_KEY, WISHLIST_KEY,
};
pub use storage::{JsonFileStorage, KeyValueStorage, MemoryStorage};
