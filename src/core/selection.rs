//! # Selection
//!
//! The user's curated reading list. Ordered by insertion, unique by ISBN.

use crate::core::catalog::Book;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    books: Vec<Book>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `book` unless an entry with the same ISBN is already present.
    /// Returns `true` if the selection changed.
    pub fn add(&mut self, book: &Book) -> bool {
        if self.contains(&book.isbn) {
            return false;
        }
        self.books.push(book.clone());
        true
    }

    /// Drop every entry sharing `isbn`. Returns `true` if anything was removed.
    pub fn remove(&mut self, isbn: &str) -> bool {
        let before = self.books.len();
        self.books.retain(|b| b.isbn != isbn);
        self.books.len() != before
    }

    pub fn contains(&self, isbn: &str) -> bool {
        self.books.iter().any(|b| b.isbn == isbn)
    }

    pub fn books(&self) -> &[Book] {
        &self.books
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::book;

    #[test]
    fn test_new_selection_is_empty() {
        let selection = Selection::new();
        assert!(selection.is_empty());
        assert_eq!(selection.len(), 0);
    }

    #[test]
    fn test_add_preserves_insertion_order() {
        let mut selection = Selection::new();
        assert!(selection.add(&book("B", "Terror", 10)));
        assert!(selection.add(&book("A", "Terror", 20)));
        let isbns: Vec<&str> = selection.books().iter().map(|b| b.isbn.as_str()).collect();
        assert_eq!(isbns, vec!["B", "A"]);
    }

    #[test]
    fn test_add_duplicate_isbn_is_noop() {
        let mut selection = Selection::new();
        let a = book("A", "Terror", 120);
        assert!(selection.add(&a));
        assert!(!selection.add(&a));
        assert_eq!(selection.len(), 1);
        assert!(selection.contains("A"));
    }

    #[test]
    fn test_add_keys_on_isbn_not_content() {
        let mut selection = Selection::new();
        selection.add(&book("A", "Terror", 120));
        let mut impostor = book("A", "Zombies", 999);
        impostor.title = "Different".to_string();
        assert!(!selection.add(&impostor));
        assert_eq!(selection.books()[0].genre, "Terror");
    }

    #[test]
    fn test_remove_missing_is_noop() {
        let mut selection = Selection::new();
        selection.add(&book("A", "Terror", 120));
        assert!(!selection.remove("Z"));
        assert_eq!(selection.len(), 1);
    }

    #[test]
    fn test_remove_then_add_restores_single_entry() {
        let mut selection = Selection::new();
        let a = book("A", "Terror", 120);
        selection.add(&a);
        assert!(selection.remove(&a.isbn));
        assert!(selection.is_empty());
        assert!(selection.add(&a));
        assert_eq!(selection.books(), std::slice::from_ref(&a));
    }

    #[test]
    fn test_remove_keeps_other_entries_in_order() {
        let mut selection = Selection::new();
        for isbn in ["A", "B", "C"] {
            selection.add(&book(isbn, "Terror", 1));
        }
        selection.remove("B");
        let isbns: Vec<&str> = selection.books().iter().map(|b| b.isbn.as_str()).collect();
        assert_eq!(isbns, vec!["A", "C"]);
    }
}
