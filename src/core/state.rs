//! # Application State
//!
//! Core business state. Domain data only; presentation state (focus,
//! cursors, scroll offsets) lives in the `tui` module.
//!
//! ```text
//! App
//! ├── catalog: Catalog          // static, loaded once
//! ├── filter: FilterState       // genre + page range
//! ├── selection: Selection      // the user's list
//! └── status_message: String    // status bar text
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.
//! Derived data is never stored; `view()` recomputes it from scratch.

use crate::core::catalog::Catalog;
use crate::core::filter::{CatalogView, FilterState};
use crate::core::selection::Selection;

pub struct App {
    pub catalog: Catalog,
    pub filter: FilterState,
    pub selection: Selection,
    pub status_message: String,
}

impl App {
    pub fn new(catalog: Catalog) -> Self {
        let status_message = format!("{} books loaded", catalog.len());
        Self {
            catalog,
            filter: FilterState::default(),
            selection: Selection::new(),
            status_message,
        }
    }

    pub fn view(&self) -> CatalogView<'_> {
        CatalogView::compute(self.catalog.books(), &self.filter)
    }
}
