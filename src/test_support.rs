//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use crate::core::catalog::{Book, Catalog};
use crate::core::state::App;

/// A book with placeholder text fields.
pub fn book(isbn: &str, genre: &str, pages: u32) -> Book {
    Book {
        isbn: isbn.to_string(),
        title: format!("Book {isbn}"),
        cover: format!("https://covers.example/{isbn}.jpg"),
        synopsis: format!("Synopsis of {isbn}."),
        genre: genre.to_string(),
        pages,
    }
}

/// Six books across four genres.
///
/// Genres in first-seen order: Terror, Fantasía, Ciencia ficción, Zombies.
pub fn sample_books() -> Vec<Book> {
    vec![
        book("T1", "Terror", 688),
        book("F1", "Fantasía", 1200),
        book("C1", "Ciencia ficción", 328),
        book("T2", "Terror", 418),
        book("Z1", "Zombies", 444),
        book("F2", "Fantasía", 223),
    ]
}

pub fn sample_catalog() -> Catalog {
    Catalog::new(sample_books()).expect("sample ISBNs are unique")
}

/// Creates a test App over the sample catalog.
pub fn test_app() -> App {
    App::new(sample_catalog())
}

/// Flatten a rendered buffer into text, one line per row.
pub fn buffer_text(buffer: &ratatui::buffer::Buffer) -> String {
    let area = buffer.area;
    let mut text = String::new();
    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            text.push_str(buffer[(x, y)].symbol());
        }
        text.push('\n');
    }
    text
}
