//! Catalog Domain Module
//!
//! This module contains everything about the read-only catalog, including:
//! - Domain models (Book, Category, filter criteria)
//! - The static seed catalog
//! - Pure filter/sort functions over it

pub mod data;
pub mod filter;
pub mod models;

// Re-export commonly used items for convenience
pub use data::{categories, seed_catalog};
pub use filter::{browse, filter_books, sort_books};
pub use models::{Book, Category, FilterCriteria, PriceRange, SortKey};
