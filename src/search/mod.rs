//! Search Pipeline Module
//!
//! This module contains the pieces between raw keystrokes and results:
//! - Normalized string similarity (edit distance)
//! - Typo-tolerant suggestion ranking
//! - The trailing-edge debouncer feeding the filter pipeline

pub mod debounce;
pub mod similarity;
pub mod suggest;

// Re-export commonly used items for convenience
pub use debounce::Debouncer;
pub use similarity::similarity;
pub use suggest::{suggest, Suggestion, MAX_SUGGESTIONS, SCORE_FLOOR};
