//! # Core Application Logic
//!
//! The catalog filter & selection engine. It knows nothing about any
//! specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • Catalog (static)     │
//!                    │  • Filters (pure fns)   │
//!                    │  • Selection            │
//!                    │  • update() (reducer)   │
//!                    └───────────┬─────────────┘
//!                                │
//!                         ┌────────────┐
//!                         │    TUI     │
//!                         │  Adapter   │
//!                         │ (ratatui)  │
//!                         └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`catalog`]: `Book`, `Catalog` and the catalog document loader
//! - [`filter`]: genre/page filters and the derived `CatalogView`
//! - [`selection`]: the user's reading list
//! - [`state`]: the `App` struct — all domain state in one place
//! - [`action`]: the `Action` enum and `update()` reducer
//! - [`config`]: layered configuration

pub mod action;
pub mod catalog;
pub mod config;
pub mod filter;
pub mod selection;
pub mod state;
