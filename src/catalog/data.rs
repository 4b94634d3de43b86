//! Static seed catalog
//!
//! The catalog is a fixed, in-process list of records loaded once at
//! startup; nothing in the core ever mutates it.

use super::models::{Book, Category};

fn book(
    id: u32,
    title: &str,
    author: &str,
    category: &str,
    price: u32,
    rating: f32,
    in_stock: bool,
) -> Book {
    Book {
        id,
        title: title.to_string(),
        author: author.to_string(),
        category: category.to_string(),
        price,
        rating,
        image: format!(
            "https://placehold.co/400x600/e0e7ff/4338ca?text={}",
            title.replace(' ', "+")
        ),
        in_stock,
        description: None,
    }
}

/// Builds the seed catalog, ordered by id. This order is the "featured"
/// order the filter pipeline preserves.
pub fn seed_catalog() -> Vec<Book> {
    vec![
        book(1, "The Great Gatsby", "F. Scott Fitzgerald", "Fiction", 399, 4.7, true),
        book(2, "To Kill a Mockingbird", "Harper Lee", "Fiction", 450, 4.9, true),
        book(3, "1984", "George Orwell", "Fiction", 299, 4.8, true),
        book(4, "Pride and Prejudice", "Jane Austen", "Fiction", 199, 4.6, false),
        book(5, "The Catcher in the Rye", "J.D. Salinger", "Fiction", 350, 4.2, true),
        book(6, "The Hobbit", "J.R.R. Tolkien", "Fiction", 499, 4.9, true),
        book(7, "Sapiens", "Yuval Noah Harari", "Non-Fiction", 599, 4.8, true),
        book(8, "Educated", "Tara Westover", "Non-Fiction", 499, 4.7, true),
        book(9, "Becoming", "Michelle Obama", "Non-Fiction", 650, 4.9, true),
        book(10, "Thinking, Fast and Slow", "Daniel Kahneman", "Non-Fiction", 550, 4.6, false),
        book(11, "A Brief History of Time", "Stephen Hawking", "Non-Fiction", 399, 4.7, true),
        book(12, "Clean Code", "Robert C. Martin", "Technology", 1299, 4.8, true),
        book(13, "The Pragmatic Programmer", "Andrew Hunt", "Technology", 1450, 4.9, true),
        book(14, "Introduction to Algorithms", "Thomas H. Cormen", "Technology", 1500, 4.7, true),
        book(15, "Refactoring", "Martin Fowler", "Technology", 1400, 4.7, true),
        book(16, "The Mythical Man-Month", "Frederick P. Brooks Jr.", "Technology", 950, 4.6, false),
        book(17, "Atomic Habits", "James Clear", "Self-Help", 499, 4.9, true),
        book(18, "The Power of Now", "Eckhart Tolle", "Self-Help", 399, 4.6, true),
        book(19, "Zero to One", "Peter Thiel", "Business", 550, 4.7, true),
        book(20, "The Lean Startup", "Eric Ries", "Business", 499, 4.6, true),
    ]
}

/// The fixed set of browsing categories.
pub fn categories() -> Vec<Category> {
    let category = |id: &str, name: &str, description: &str| Category {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
    };

    vec![
        category("fiction", "Fiction", "Imagination unbound. Explore worlds beyond reality."),
        category("non-fiction", "Non-Fiction", "Real stories, real life. Knowledge based on facts."),
        category("technology", "Technology", "Future in your hands. Master the digital world."),
        category("self-help", "Self-Help", "Become your best self. Practical advice for growth."),
        category("business", "Business", "Master the market. Strategies for success."),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_catalog_ids_are_unique_and_nonzero() {
        let catalog = seed_catalog();
        let mut ids: Vec<u32> = catalog.iter().map(|b| b.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), catalog.len());
        assert!(catalog.iter().all(Book::has_identity));
    }

    #[test]
    fn every_book_belongs_to_a_known_category() {
        let known: Vec<String> = categories().into_iter().map(|c| c.name).collect();
        for book in seed_catalog() {
            assert!(known.contains(&book.category), "unknown category for {}", book.title);
        }
    }
}
