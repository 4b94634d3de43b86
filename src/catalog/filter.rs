//! Catalog filtering and sorting
//!
//! Pure functions mapping (catalog, criteria) to an ordered result list.
//! Filtering preserves catalog order; sorting operates on a copy with a
//! stable sort, so equal keys keep their relative catalog order.

use super::models::{Book, FilterCriteria, SortKey};
use std::cmp::Reverse;

/// Returns the books passing ALL of the criteria's predicates: search query
/// (case-insensitive substring of title or author; empty query passes all),
/// category membership (empty selection passes all), and inclusive price
/// bounds. Records without identity are skipped rather than failing the
/// whole operation.
pub fn filter_books(catalog: &[Book], criteria: &FilterCriteria) -> Vec<Book> {
    let query = criteria.search_query.trim().to_lowercase();

    catalog
        .iter()
        .filter(|book| {
            if !book.has_identity() {
                return false;
            }

            let matches_search = query.is_empty()
                || book.title.to_lowercase().contains(&query)
                || book.author.to_lowercase().contains(&query);

            let matches_category = criteria.selected_categories.is_empty()
                || criteria.selected_categories.iter().any(|c| *c == book.category);

            let matches_price = criteria.price_range.contains(book.price);

            matches_search && matches_category && matches_price
        })
        .cloned()
        .collect()
}

/// Returns a sorted copy of `books`. `Featured` preserves the input order.
/// Title comparison is case-insensitive.
pub fn sort_books(books: &[Book], key: SortKey) -> Vec<Book> {
    let mut sorted = books.to_vec();
    match key {
        SortKey::Featured => {}
        SortKey::PriceAsc => sorted.sort_by_key(|b| b.price),
        SortKey::PriceDesc => sorted.sort_by_key(|b| Reverse(b.price)),
        SortKey::RatingDesc => sorted.sort_by(|a, b| b.rating.total_cmp(&a.rating)),
        SortKey::TitleAsc => sorted.sort_by_key(|b| b.title.to_lowercase()),
        SortKey::TitleDesc => sorted.sort_by_key(|b| Reverse(b.title.to_lowercase())),
    }
    sorted
}

/// Filter then sort in one call: the full pipeline the UI recomputes
/// whenever the debounced query or any other criterion changes.
pub fn browse(catalog: &[Book], criteria: &FilterCriteria) -> Vec<Book> {
    sort_books(&filter_books(catalog, criteria), criteria.sort)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::models::PriceRange;

    fn sample(id: u32, title: &str, author: &str, category: &str, price: u32, rating: f32) -> Book {
        Book {
            id,
            title: title.to_string(),
            author: author.to_string(),
            category: category.to_string(),
            price,
            rating,
            image: String::new(),
            in_stock: true,
            description: None,
        }
    }

    fn fixture() -> Vec<Book> {
        vec![
            sample(1, "Dune", "Frank Herbert", "Fiction", 200, 4.5),
            sample(2, "Deep Work", "Cal Newport", "Self-Help", 400, 4.6),
            sample(3, "Clean Code", "Robert C. Martin", "Technology", 1200, 4.8),
        ]
    }

    #[test]
    fn filter_is_a_conjunction_of_all_predicates() {
        let criteria = FilterCriteria {
            search_query: String::new(),
            selected_categories: vec!["Fiction".to_string()],
            price_range: PriceRange::new(0, 500),
            sort: SortKey::Featured,
        };

        let result = filter_books(&fixture(), &criteria);

        assert_eq!(result.len(), 1);
        assert_eq!(result[0].title, "Dune");
    }

    #[test]
    fn search_matches_title_or_author_case_insensitively() {
        let criteria = FilterCriteria {
            search_query: "  NEWPORT ".to_string(),
            ..FilterCriteria::default()
        };

        let result = filter_books(&fixture(), &criteria);

        assert_eq!(result.len(), 1);
        assert_eq!(result[0].title, "Deep Work");
    }

    #[test]
    fn empty_criteria_passes_everything_in_catalog_order() {
        let result = filter_books(&fixture(), &FilterCriteria::default());
        let titles: Vec<&str> = result.iter().map(|b| b.title.as_str()).collect();
        assert_eq!(titles, ["Dune", "Deep Work", "Clean Code"]);
    }

    #[test]
    fn price_bounds_are_inclusive() {
        let criteria = FilterCriteria {
            price_range: PriceRange::new(200, 400),
            ..FilterCriteria::default()
        };

        let result = filter_books(&fixture(), &criteria);
        let titles: Vec<&str> = result.iter().map(|b| b.title.as_str()).collect();
        assert_eq!(titles, ["Dune", "Deep Work"]);
    }

    #[test]
    fn records_without_identity_are_skipped() {
        let mut catalog = fixture();
        catalog.push(sample(0, "Ghost Entry", "Nobody", "Fiction", 100, 1.0));

        let result = filter_books(&catalog, &FilterCriteria::default());
        assert_eq!(result.len(), 3);
    }

    #[test]
    fn sort_by_price_ascending_is_stable_for_equal_prices() {
        let books = vec![
            sample(1, "First at 300", "A", "Fiction", 300, 4.0),
            sample(2, "Cheapest", "B", "Fiction", 100, 4.0),
            sample(3, "Second at 300", "C", "Fiction", 300, 4.0),
        ];

        let sorted = sort_books(&books, SortKey::PriceAsc);
        let titles: Vec<&str> = sorted.iter().map(|b| b.title.as_str()).collect();
        assert_eq!(titles, ["Cheapest", "First at 300", "Second at 300"]);
    }

    #[test]
    fn sort_by_rating_descends() {
        let sorted = sort_books(&fixture(), SortKey::RatingDesc);
        let titles: Vec<&str> = sorted.iter().map(|b| b.title.as_str()).collect();
        assert_eq!(titles, ["Clean Code", "Deep Work", "Dune"]);
    }

    #[test]
    fn sort_by_title_ignores_case() {
        let books = vec![
            sample(1, "zebra", "A", "Fiction", 1, 1.0),
            sample(2, "Apple", "B", "Fiction", 1, 1.0),
        ];

        let sorted = sort_books(&books, SortKey::TitleAsc);
        assert_eq!(sorted[0].title, "Apple");

        let reversed = sort_books(&books, SortKey::TitleDesc);
        assert_eq!(reversed[0].title, "zebra");
    }

    #[test]
    fn featured_keeps_input_order() {
        let sorted = sort_books(&fixture(), SortKey::Featured);
        assert_eq!(sorted, fixture());
    }

    #[test]
    fn browse_applies_filter_then_sort() {
        let criteria = FilterCriteria {
            price_range: PriceRange::new(0, 500),
            sort: SortKey::PriceDesc,
            ..FilterCriteria::default()
        };

        let result = browse(&fixture(), &criteria);
        let titles: Vec<&str> = result.iter().map(|b| b.title.as_str()).collect();
        assert_eq!(titles, ["Deep Work", "Dune"]);
    }
}
