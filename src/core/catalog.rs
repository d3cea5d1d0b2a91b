//! # Catalog
//!
//! The static book catalog and the document it is decoded from.
//!
//! ```text
//! { "library": [ { "book": { "ISBN": "...", "title": "...", ... } }, ... ] }
//! ```
//!
//! The catalog is decoded once at startup and never mutated afterwards.
//! Fields the browser doesn't use (`year`, `author`, ...) are ignored.

use log::{debug, info};
use serde::Deserialize;
use std::collections::HashSet;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

/// The catalog bundled into the binary at build time.
const EMBEDDED_CATALOG: &str = include_str!("../../assets/books.json");

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Book {
    #[serde(rename = "ISBN")]
    pub isbn: String,
    pub title: String,
    pub cover: String,
    pub synopsis: String,
    pub genre: String,
    pub pages: u32,
}

/// Wrapper object around each book in the document.
#[derive(Debug, Deserialize)]
struct LibraryEntry {
    book: Book,
}

#[derive(Debug, Deserialize)]
struct CatalogDocument {
    library: Vec<LibraryEntry>,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum CatalogError {
    Io(std::io::Error),
    Parse(serde_json::Error),
    DuplicateIsbn(String),
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::Io(e) => write!(f, "catalog I/O error: {e}"),
            CatalogError::Parse(e) => write!(f, "catalog parse error: {e}"),
            CatalogError::DuplicateIsbn(isbn) => {
                write!(f, "catalog lists ISBN {isbn} more than once")
            }
        }
    }
}

impl std::error::Error for CatalogError {}

// ============================================================================
// Catalog
// ============================================================================

/// Ordered, read-only sequence of books. ISBNs are unique.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    books: Vec<Book>,
}

impl Catalog {
    /// Build a catalog from books in display order, rejecting duplicate ISBNs.
    pub fn new(books: Vec<Book>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(books.len());
        for book in &books {
            if !seen.insert(book.isbn.as_str()) {
                return Err(CatalogError::DuplicateIsbn(book.isbn.clone()));
            }
        }
        Ok(Self { books })
    }

    /// Decode a catalog document from JSON text.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let document: CatalogDocument = serde_json::from_str(json).map_err(CatalogError::Parse)?;
        Self::new(document.library.into_iter().map(|entry| entry.book).collect())
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

    pub fn find(&self, isbn: &str) -> Option<&Book> {
        self.books.iter().find(|book| book.isbn == isbn)
    }
}

// ============================================================================
// Loading
// ============================================================================

/// Where the catalog document comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogSource {
    /// The document compiled into the binary.
    Embedded,
    /// A document on disk.
    File(PathBuf),
}

impl CatalogSource {
    /// Pick a file source when a path was configured, the embedded one otherwise.
    pub fn from_path(path: Option<&Path>) -> Self {
        match path {
            Some(p) => CatalogSource::File(p.to_path_buf()),
            None => CatalogSource::Embedded,
        }
    }

    pub fn load(&self) -> Result<Catalog, CatalogError> {
        let catalog = match self {
            CatalogSource::Embedded => Catalog::from_json(EMBEDDED_CATALOG)?,
            CatalogSource::File(path) => {
                debug!("Reading catalog from {}", path.display());
                let contents = fs::read_to_string(path).map_err(CatalogError::Io)?;
                Catalog::from_json(&contents)?
            }
        };
        info!("Loaded {} books from {}", catalog.len(), self);
        Ok(catalog)
    }
}

impl fmt::Display for CatalogSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogSource::Embedded => write!(f, "embedded catalog"),
            CatalogSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}
