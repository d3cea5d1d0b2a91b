//! # TUI Components
//!
//! All UI components for the terminal interface.
//!
//! ## Component Architecture
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! Display components that receive all data as props:
//! - `TitleBar`: counts and status message
//! - `GenreBar`: "All" plus one button per genre
//! - `PageRange`: dual-handle page slider
//! - `BookCard`: one catalog card
//!
//! ### Stateful Components
//!
//! Transient wrappers around persistent state owned by `TuiState`:
//! - `CatalogGrid` / `CatalogGridState`: scrollable card grid
//! - `SelectionPanel` / `SelectionPanelState`: the reading list
//!
//! Each component also exposes pure geometry helpers (`hit_test`,
//! `handle_column`, ...) so mouse input can be resolved between frames.
//!
//! ## Module Structure
//!
//! ```text
//! components/
//! ├── mod.rs              (this file)
//! ├── title_bar.rs        (Top status bar)
//! ├── genre_bar.rs        (Genre filter buttons)
//! ├── page_range.rs       (Page range slider)
//! ├── book_card.rs        (Single card renderer)
//! ├── catalog_grid.rs     (Scrollable card container)
//! └── selection_panel.rs  (Reading list side panel)
//! ```

pub mod book_card;
pub mod catalog_grid;
pub mod genre_bar;
pub mod page_range;
pub mod selection_panel;
mod title_bar;

pub use catalog_grid::{CatalogGrid, CatalogGridState};
pub use genre_bar::GenreBar;
pub use page_range::{PageRange, RangeHandle};
pub use selection_panel::{SelectionPanel, SelectionPanelState};
pub use title_bar::TitleBar;
