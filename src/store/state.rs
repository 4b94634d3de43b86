//! Store Engine State Management
//!
//! The single owner of cart, wishlist, order-history, and recently-viewed
//! state. Every mutation enforces the list's invariants, then mirrors that
//! list (and only that list) to the storage collaborator. Persistence is
//! best-effort: in-memory state is the source of truth, and a storage
//! failure never rolls back a mutation or reaches the caller.

use super::helpers::{cart_count, cart_total, format_line_summary, generate_order_id, now_millis};
use super::models::{CartLine, Order, RecentlyViewedEntry, WishlistEntry};
use super::storage::KeyValueStorage;
use crate::catalog::Book;
use crate::error::{ResultExt, StorageError};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, warn};

// =============================================================================
// Persistence Keys
// =============================================================================

/// Storage key for the cart list.
pub const CART_KEY: &str = "bookshelf_cart";
/// Storage key for the wishlist.
pub const WISHLIST_KEY: &str = "bookshelf_wishlist";
/// Storage key for the order history.
pub const ORDERS_KEY: &str = "bookshelf_orders";
/// Storage key for the recently-viewed list.
pub const RECENTLY_VIEWED_KEY: &str = "recently_viewed_books";

/// The recently-viewed list never grows past this many entries.
pub const RECENTLY_VIEWED_CAP: usize = 6;

// =============================================================================
// Store Engine
// =============================================================================

/// The unified store. Owned by the composition root and handed to consumers
/// by mutable reference; there is exactly one logical writer, so no internal
/// locking is needed.
pub struct BookStore {
    storage: Arc<dyn KeyValueStorage>,

    cart: Vec<CartLine>,
    wishlist: Vec<WishlistEntry>,
    orders: Vec<Order>,
    recently_viewed: Vec<RecentlyViewedEntry>,

    // Transient panel visibility, never persisted.
    cart_open: bool,
    wishlist_open: bool,
    orders_open: bool,
}

impl BookStore {
    /// Builds a store over the given storage collaborator, restoring each
    /// list from its key. A missing key or malformed payload restores that
    /// list as empty; construction itself cannot fail.
    pub fn new(storage: Arc<dyn KeyValueStorage>) -> Self {
        let cart = load_list(storage.as_ref(), CART_KEY);
        let wishlist = load_list(storage.as_ref(), WISHLIST_KEY);
        let orders = load_list(storage.as_ref(), ORDERS_KEY);
        let recently_viewed = load_list(storage.as_ref(), RECENTLY_VIEWED_KEY);

        debug!(
            cart = cart.len(),
            wishlist = wishlist.len(),
            orders = orders.len(),
            recently_viewed = recently_viewed.len(),
            "restored store state"
        );

        Self {
            storage,
            cart,
            wishlist,
            orders,
            recently_viewed,
            cart_open: false,
            wishlist_open: false,
            orders_open: false,
        }
    }

    // -------------------------------------------------------------------------
    // Cart Operations
    // -------------------------------------------------------------------------

    /// Adds one copy of `book` to the cart. An existing line for the same id
    /// is incremented, keeping its original `added_at`; otherwise a new line
    /// is appended with quantity 1. Records without identity are ignored.
    pub fn add_to_cart(&mut self, book: &Book) {
        if !book.has_identity() {
            return;
        }

        if let Some(line) = self.cart.iter_mut().find(|line| line.book.id == book.id) {
            line.qty += 1;
        } else {
            self.cart.push(CartLine {
                book: book.clone(),
                qty: 1,
                added_at: now_millis(),
            });
        }

        self.persist_cart();
    }

    /// Deletes the line with the given id, if present.
    pub fn remove_from_cart(&mut self, book_id: u32) {
        let before = self.cart.len();
        self.cart.retain(|line| line.book.id != book_id);
        if self.cart.len() != before {
            self.persist_cart();
        }
    }

    /// Adjusts a line's quantity by `delta`, flooring at 1. Dropping a line
    /// entirely goes through [`BookStore::remove_from_cart`] instead.
    /// Unknown ids are ignored.
    pub fn update_quantity(&mut self, book_id: u32, delta: i32) {
        let Some(line) = self.cart.iter_mut().find(|line| line.book.id == book_id) else {
            return;
        };

        let adjusted = i64::from(line.qty) + i64::from(delta);
        line.qty = adjusted.max(1) as u32;
        self.persist_cart();
    }

    /// Empties the cart.
    pub fn clear_cart(&mut self) {
        self.cart.clear();
        self.persist_cart();
    }

    /// Materializes an order from the current cart: snapshots the lines and
    /// total into a new order prepended to the history, then clears the
    /// cart, closes the cart panel, and opens the orders panel. An empty
    /// cart is a no-op.
    pub fn place_order(&mut self) {
        if self.cart.is_empty() {
            return;
        }

        let placed_at = chrono::Utc::now();
        let order = Order {
            id: generate_order_id(placed_at.timestamp_millis().max(0) as u64),
            date: placed_at.to_rfc3339(),
            items: self.cart.clone(),
            total: cart_total(&self.cart),
        };

        debug!(
            order_id = %order.id,
            total = order.total,
            items = %format_line_summary(&order.items),
            "order placed"
        );

        self.orders.insert(0, order);
        self.cart.clear();
        self.cart_open = false;
        self.orders_open = true;

        self.persist_orders();
        self.persist_cart();
    }

    // -------------------------------------------------------------------------
    // Wishlist Operations
    // -------------------------------------------------------------------------

    /// Adds `book` to the wishlist. Idempotent: an entry with the same id
    /// already present leaves the wishlist untouched.
    pub fn add_to_wishlist(&mut self, book: &Book) {
        if !book.has_identity() {
            return;
        }

        if self.wishlist.iter().any(|entry| entry.book.id == book.id) {
            return;
        }

        self.wishlist.push(WishlistEntry {
            book: book.clone(),
            added_at: now_millis(),
        });
        self.persist_wishlist();
    }

    /// Deletes the entry with the given id, if present.
    pub fn remove_from_wishlist(&mut self, book_id: u32) {
        let before = self.wishlist.len();
        self.wishlist.retain(|entry| entry.book.id != book_id);
        if self.wishlist.len() != before {
            self.persist_wishlist();
        }
    }

    /// Moves a book from the wishlist into the cart in one caller-visible
    /// step: removed from the wishlist (if present) and added to the cart
    /// with the usual merge semantics.
    pub fn move_to_cart(&mut self, book: &Book) {
        self.remove_from_wishlist(book.id);
        self.add_to_cart(book);
    }

    // -------------------------------------------------------------------------
    // Recently Viewed
    // -------------------------------------------------------------------------

    /// Records a view of `book`: any existing entry for the same id moves to
    /// the front (no duplicates), the projected entry is prepended, and the
    /// list is truncated to [`RECENTLY_VIEWED_CAP`].
    pub fn add_recently_viewed(&mut self, book: &Book) {
        if !book.has_identity() {
            return;
        }

        self.recently_viewed.retain(|entry| entry.id != book.id);
        self.recently_viewed
            .insert(0, RecentlyViewedEntry::project(book));
        self.recently_viewed.truncate(RECENTLY_VIEWED_CAP);

        self.persist_recently_viewed();
    }

    // -------------------------------------------------------------------------
    // Derived Values
    // -------------------------------------------------------------------------

    /// Sum of `price * qty` over the cart.
    pub fn cart_total(&self) -> u64 {
        cart_total(&self.cart)
    }

    /// Sum of quantities over the cart.
    pub fn cart_count(&self) -> u32 {
        cart_count(&self.cart)
    }

    /// Number of wishlist entries.
    pub fn wishlist_count(&self) -> usize {
        self.wishlist.len()
    }

    // -------------------------------------------------------------------------
    // State Accessors
    // -------------------------------------------------------------------------

    pub fn cart(&self) -> &[CartLine] {
        &self.cart
    }

    pub fn wishlist(&self) -> &[WishlistEntry] {
        &self.wishlist
    }

    /// Order history, most recent first.
    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    /// Recently-viewed entries, most recent first.
    pub fn recently_viewed(&self) -> &[RecentlyViewedEntry] {
        &self.recently_viewed
    }

    // -------------------------------------------------------------------------
    // Panel Visibility
    // -------------------------------------------------------------------------

    pub fn is_cart_open(&self) -> bool {
        self.cart_open
    }

    pub fn is_wishlist_open(&self) -> bool {
        self.wishlist_open
    }

    pub fn is_orders_open(&self) -> bool {
        self.orders_open
    }

    pub fn set_cart_open(&mut self, open: bool) {
        self.cart_open = open;
    }

    pub fn set_wishlist_open(&mut self, open: bool) {
        self.wishlist_open = open;
    }

    pub fn set_orders_open(&mut self, open: bool) {
        self.orders_open = open;
    }

    // -------------------------------------------------------------------------
    // Persistence
    // -------------------------------------------------------------------------

    fn persist_cart(&self) {
        save_list(self.storage.as_ref(), CART_KEY, &self.cart).log_warn();
    }

    fn persist_wishlist(&self) {
        save_list(self.storage.as_ref(), WISHLIST_KEY, &self.wishlist).log_warn();
    }

    fn persist_orders(&self) {
        save_list(self.storage.as_ref(), ORDERS_KEY, &self.orders).log_warn();
    }

    fn persist_recently_viewed(&self) {
        save_list(self.storage.as_ref(), RECENTLY_VIEWED_KEY, &self.recently_viewed).log_warn();
    }
}

// =============================================================================
// Load / Save Steps
// =============================================================================

/// Restores a list from storage, degrading to empty on any failure. The
/// fallback is the explicit branch here; `try_load_list` reports what
/// actually went wrong.
fn load_list<T: DeserializeOwned>(storage: &dyn KeyValueStorage, key: &str) -> Vec<T> {
    match try_load_list(storage, key) {
        Ok(list) => list,
        Err(error) => {
            warn!(key, error = %error, "restoring empty list");
            Vec::new()
        }
    }
}

fn try_load_list<T: DeserializeOwned>(
    storage: &dyn KeyValueStorage,
    key: &str,
) -> Result<Vec<T>, StorageError> {
    let Some(payload) = storage.read(key)? else {
        return Ok(Vec::new());
    };

    serde_json::from_str(&payload).map_err(|source| StorageError::Malformed {
        key: key.to_string(),
        source,
    })
}

fn save_list<T: Serialize>(
    storage: &dyn KeyValueStorage,
    key: &str,
    list: &[T],
) -> Result<(), StorageError> {
    let payload = serde_json::to_string(list).map_err(|source| StorageError::Malformed {
        key: key.to_string(),
        source,
    })?;

    storage.write(key, &payload)
}
