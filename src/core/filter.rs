//! # Filters
//!
//! Pure functions over borrowed book slices. Nothing here mutates; every
//! call returns a fresh vector of references into the catalog.
//!
//! ```text
//! catalog ──filter_by_genre──▶ genre_filtered ──filter_by_pages──▶ visible
//!                                    │
//!                                    └──page_bounds──▶ Option<PageBounds>
//! ```

use crate::core::catalog::Book;

/// Genre filter plus page range. `0` in either page bound means "unset".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    pub genre: Option<String>,
    pub min_pages: u32,
    pub max_pages: u32,
}

impl FilterState {
    pub fn has_page_range(&self) -> bool {
        self.min_pages > 0 || self.max_pages > 0
    }
}

/// Smallest and largest page counts observed in a non-empty subset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageBounds {
    pub min: u32,
    pub max: u32,
}

impl PageBounds {
    /// A range control over a single value has nothing to adjust.
    pub fn is_adjustable(&self) -> bool {
        self.min < self.max
    }

    pub fn clamp(&self, pages: u32) -> u32 {
        pages.clamp(self.min, self.max)
    }
}

/// Distinct genres in first-seen order.
pub fn unique_genres<'a, I>(books: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a Book>,
{
    let mut genres: Vec<String> = Vec::new();
    for book in books {
        if !genres.iter().any(|g| *g == book.genre) {
            genres.push(book.genre.clone());
        }
    }
    genres
}

/// Books whose genre matches exactly (case-sensitive). `None` keeps everything.
pub fn filter_by_genre<'a>(books: &'a [Book], genre: Option<&str>) -> Vec<&'a Book> {
    match genre {
        None => books.iter().collect(),
        Some(genre) => books.iter().filter(|book| book.genre == genre).collect(),
    }
}

/// Min/max page counts, or `None` for an empty subset.
pub fn page_bounds(books: &[&Book]) -> Option<PageBounds> {
    let min = books.iter().map(|book| book.pages).min()?;
    let max = books.iter().map(|book| book.pages).max()?;
    Some(PageBounds { min, max })
}

/// Keep books inside the page range. An inverted range keeps nothing.
pub fn filter_by_pages<'a>(books: &[&'a Book], min_pages: u32, max_pages: u32) -> Vec<&'a Book> {
    books
        .iter()
        .copied()
        .filter(|book| match (min_pages, max_pages) {
            (0, 0) => true,
            (min, 0) => book.pages >= min,
            (0, max) => book.pages <= max,
            (min, max) => (min..=max).contains(&book.pages),
        })
        .collect()
}

/// One full recomputation of everything the UI derives from catalog + filter.
#[derive(Debug)]
pub struct CatalogView<'a> {
    pub genres: Vec<String>,
    pub genre_filtered: Vec<&'a Book>,
    /// Bound to the genre subset, not the page-filtered one, so the range
    /// control doesn't shrink under its own handles.
    pub bounds: Option<PageBounds>,
    pub visible: Vec<&'a Book>,
}

impl<'a> CatalogView<'a> {
    pub fn compute(books: &'a [Book], filter: &FilterState) -> Self {
        let genres = unique_genres(books);
        let genre_filtered = filter_by_genre(books, filter.genre.as_deref());
        let bounds = page_bounds(&genre_filtered);
        let visible = filter_by_pages(&genre_filtered, filter.min_pages, filter.max_pages);
        Self {
            genres,
            genre_filtered,
            bounds,
            visible,
        }
    }

    /// Bounds usable by a range control, `None` when the control should be disabled.
    pub fn adjustable_bounds(&self) -> Option<PageBounds> {
        self.bounds.filter(PageBounds::is_adjustable)
    }
}
