//! Typo-tolerant autocomplete suggestions
//!
//! Builds ranked suggestions from the catalog and the raw (non-debounced)
//! query, so the dropdown reacts to every keystroke. Substring hits rank
//! highest; everything else falls back to fuzzy similarity against title
//! and author.

use super::similarity::similarity;
use crate::catalog::Book;
use std::cmp::Ordering;

/// At most this many suggestions are returned.
pub const MAX_SUGGESTIONS: usize = 5;

/// Entries scoring at or below this floor are dropped.
pub const SCORE_FLOOR: f64 = 0.25;

/// Queries shorter than this (in chars, after trimming) produce nothing.
const MIN_QUERY_CHARS: usize = 2;

/// One ranked suggestion. `value` is the book's display title, not its id,
/// so duplicate titles across distinct books may each appear.
#[derive(Debug, Clone, PartialEq)]
pub struct Suggestion {
    pub value: String,
    pub score: f64,
}

/// Returns up to [`MAX_SUGGESTIONS`] suggestions, descending by score.
///
/// An exact (case-insensitive) title hit returns the empty list: the query
/// already names a book, so no suggestions are needed. Ties keep catalog
/// order (the sort is stable).
pub fn suggest(catalog: &[Book], raw_query: &str) -> Vec<Suggestion> {
    let query = raw_query.trim().to_lowercase();
    if query.chars().count() < MIN_QUERY_CHARS {
        return Vec::new();
    }

    let exact_hit = catalog.iter().any(|book| book.title.to_lowercase() == query);
    if exact_hit {
        return Vec::new();
    }

    let mut suggestions: Vec<Suggestion> = catalog
        .iter()
        .filter(|book| book.has_identity())
        .map(|book| {
            let title = book.title.to_lowercase();
            let author = book.author.to_lowercase();

            // Substring hits outrank every fuzzy match.
            let score = if title.contains(&query) || author.contains(&query) {
                1.0
            } else {
                similarity(&query, &title).max(similarity(&query, &author))
            };

            Suggestion {
                value: book.title.clone(),
                score,
            }
        })
        .filter(|suggestion| suggestion.score > SCORE_FLOOR)
        .collect();

    suggestions.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
    suggestions.truncate(MAX_SUGGESTIONS);
    suggestions
}
