//! Store Engine Business Logic Helpers
//!
//! Small pure functions shared by the store engine: id generation, clock
//! access, derived cart totals, and log formatting.

use super::models::CartLine;
use uuid::Uuid;

/// Prefix for generated order ids.
pub const ORDER_ID_PREFIX: &str = "ORD";

/// Current unix time in milliseconds.
pub fn now_millis() -> u64 {
    chrono::Utc::now().timestamp_millis().max(0) as u64
}

/// Builds an order id from the creation timestamp plus a random suffix.
///
/// The timestamp keeps ids human-sortable; the UUID suffix guarantees
/// uniqueness even for orders placed within the same millisecond.
pub fn generate_order_id(now_millis: u64) -> String {
    format!(
        "{}-{}-{}",
        ORDER_ID_PREFIX,
        now_millis,
        Uuid::new_v4().simple()
    )
}

/// Sum of `price * qty` over the cart. Empty cart totals 0.
pub fn cart_total(lines: &[CartLine]) -> u64 {
    lines
        .iter()
        .map(|line| line.book.price as u64 * line.qty as u64)
        .sum()
}

/// Sum of quantities over the cart. Empty cart counts 0.
pub fn cart_count(lines: &[CartLine]) -> u32 {
    lines.iter().map(|line| line.qty).sum()
}

/// Produces a human-readable one-line summary for a list of cart lines.
///
/// Example output: `"2x Clean Code, 1x Sapiens"`.
pub fn format_line_summary(lines: &[CartLine]) -> String {
    lines
        .iter()
        .map(|line| format!("{}x {}", line.qty, line.book.title))
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Book;

    fn line(title: &str, price: u32, qty: u32) -> CartLine {
        CartLine {
            book: Book {
                id: 1,
                title: title.to_string(),
                price,
                ..serde_json::from_str("{}").expect("all-default book")
            },
            qty,
            added_at: 0,
        }
    }

    #[test]
    fn totals_sum_price_times_qty() {
        let cart = vec![line("A", 200, 2), line("B", 150, 1)];
        assert_eq!(cart_total(&cart), 550);
        assert_eq!(cart_count(&cart), 3);
    }

    #[test]
    fn empty_cart_totals_zero() {
        assert_eq!(cart_total(&[]), 0);
        assert_eq!(cart_count(&[]), 0);
    }

    #[test]
    fn order_ids_embed_the_timestamp_and_stay_unique() {
        let a = generate_order_id(1_700_000_000_000);
        let b = generate_order_id(1_700_000_000_000);
        assert!(a.starts_with("ORD-1700000000000-"));
        assert_ne!(a, b);
    }

    #[test]
    fn line_summary_reads_naturally() {
        let cart = vec![line("Clean Code", 1299, 2), line("Sapiens", 599, 1)];
        assert_eq!(format_line_summary(&cart), "2x Clean Code, 1x Sapiens");
    }
}
