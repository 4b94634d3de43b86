use bookshelf_core::catalog::{browse, seed_catalog, FilterCriteria};
use bookshelf_core::store::{BookStore, JsonFileStorage};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() {
    // Initialize logging (RUST_LOG overrides the default level)
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Composition root: the catalog is a startup constant, the store is
    // restored from the data directory
    let catalog = seed_catalog();
    let storage = Arc::new(JsonFileStorage::new("data"));
    let store = BookStore::new(storage);

    info!(
        books = catalog.len(),
        cart = store.cart_count(),
        wishlist = store.wishlist_count(),
        orders = store.orders().len(),
        "bookshelf core ready"
    );

    // Default browse view: unfiltered, featured order
    let shelf = browse(&catalog, &FilterCriteria::default());
    info!(visible = shelf.len(), "default browse view computed");
}

#[cfg(test)]
mod tests {
    use bookshelf_core::catalog::{browse, seed_catalog, FilterCriteria, PriceRange, SortKey};
    use bookshelf_core::search::suggest;
    use bookshelf_core::store::{BookStore, MemoryStorage};
    use std::sync::Arc;

    #[test]
    fn test_browse_and_checkout_round_trip() {
        let catalog = seed_catalog();
        let mut store = BookStore::new(Arc::new(MemoryStorage::new()));

        // 1. Browse (Simulate the filter pipeline)
        let criteria = FilterCriteria {
            selected_categories: vec!["Technology".to_string()],
            price_range: PriceRange::new(0, 1300),
            sort: SortKey::PriceAsc,
            ..FilterCriteria::default()
        };
        let shelf = browse(&catalog, &criteria);
        assert!(!shelf.is_empty());
        assert!(shelf.windows(2).all(|w| w[0].price <= w[1].price));

        // 2. Shop (Simulate user actions)
        store.add_to_cart(&shelf[0]);
        store.add_to_cart(&shelf[0]);
        let expected_total = u64::from(shelf[0].price) * 2;
        assert_eq!(store.cart_total(), expected_total);

        // 3. Checkout
        store.place_order();
        assert!(store.cart().is_empty());
        assert_eq!(store.orders()[0].total, expected_total);
    }

    #[test]
    fn test_suggestions_against_seed_catalog() {
        let catalog = seed_catalog();

        // A typo'd query still surfaces the intended title.
        let suggestions = suggest(&catalog, "the great gatsbi");
        assert_eq!(suggestions[0].value, "The Great Gatsby");

        // An exact title needs no suggestions.
        assert!(suggest(&catalog, "clean code").is_empty());
    }
}
