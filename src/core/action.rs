//! # Actions
//!
//! Everything that can happen in the browser becomes an `Action`.
//! User clicks a card? That's `Action::AddToSelection(isbn)`.
//! User drags a range handle? That's `Action::SetPageRange { .. }`.
//!
//! The `update()` function takes the current state and an action,
//! applies it, and tells the caller what to do next via an `Effect`.
//! No I/O happens here.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```

use log::{debug, info, warn};

use crate::core::state::App;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// `None` clears the genre filter ("All").
    SelectGenre(Option<String>),
    /// Page bounds; `0` leaves a side unset.
    SetPageRange { min: u32, max: u32 },
    ClearPageRange,
    AddToSelection(String),
    RemoveFromSelection(String),
    Quit,
}

/// What the event loop should do after an update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    debug!("update: {:?}", action);
    match action {
        Action::SelectGenre(genre) => {
            if let Some(ref g) = genre
                && !app.catalog.books().iter().any(|b| b.genre == *g)
            {
                warn!("Ignoring unknown genre filter: {}", g);
                app.status_message = format!("No genre named \"{g}\"");
                return Effect::None;
            }
            // Bounds follow the genre subset, so an old range would be stale.
            app.filter.min_pages = 0;
            app.filter.max_pages = 0;
            app.status_message = match &genre {
                Some(g) => format!("Genre: {g}"),
                None => String::from("Genre: All"),
            };
            info!("Genre filter set to {:?}", genre);
            app.filter.genre = genre;
            Effect::None
        }
        Action::SetPageRange { min, max } => {
            app.filter.min_pages = min;
            app.filter.max_pages = max;
            app.status_message = match (min, max) {
                (0, 0) => String::from("Pages: any"),
                (min, 0) => format!("Pages: {min}+"),
                (0, max) => format!("Pages: up to {max}"),
                (min, max) => format!("Pages: {min}-{max}"),
            };
            Effect::None
        }
        Action::ClearPageRange => {
            app.filter.min_pages = 0;
            app.filter.max_pages = 0;
            app.status_message = String::from("Pages: any");
            Effect::None
        }
        Action::AddToSelection(isbn) => {
            let Some(book) = app.catalog.find(&isbn) else {
                warn!("AddToSelection for unknown ISBN {}", isbn);
                return Effect::None;
            };
            if app.selection.add(book) {
                info!("Added {} ({}) to the list", book.title, isbn);
                app.status_message = format!("Added \"{}\"", book.title);
            } else {
                app.status_message = format!("\"{}\" is already on your list", book.title);
            }
            Effect::None
        }
        Action::RemoveFromSelection(isbn) => {
            let title = app
                .selection
                .books()
                .iter()
                .find(|b| b.isbn == isbn)
                .map(|b| b.title.clone());
            match title {
                Some(title) => {
                    app.selection.remove(&isbn);
                    info!("Removed {} ({}) from the list", title, isbn);
                    app.status_message = format!("Removed \"{title}\"");
                }
                None => debug!("RemoveFromSelection for ISBN {} not on the list", isbn),
            }
            Effect::None
        }
        Action::Quit => Effect::Quit,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::test_app;

    #[test]
    fn test_quit_returns_quit_effect() {
        let mut app = test_app();
        assert_eq!(update(&mut app, Action::Quit), Effect::Quit);
    }

    #[test]
    fn test_select_genre_filters_view() {
        let mut app = test_app();
        update(&mut app, Action::SelectGenre(Some("Terror".to_string())));
        assert_eq!(app.filter.genre.as_deref(), Some("Terror"));
        assert_eq!(app.status_message, "Genre: Terror");
        let view = app.view();
        assert!(!view.visible.is_empty());
        assert!(view.visible.iter().all(|b| b.genre == "Terror"));
    }

    #[test]
    fn test_select_genre_resets_page_range() {
        let mut app = test_app();
        update(&mut app, Action::SetPageRange { min: 300, max: 500 });
        update(&mut app, Action::SelectGenre(Some("Fantasía".to_string())));
        assert!(!app.filter.has_page_range());
    }

    #[test]
    fn test_select_unknown_genre_is_ignored() {
        let mut app = test_app();
        update(&mut app, Action::SelectGenre(Some("Terror".to_string())));
        update(&mut app, Action::SelectGenre(Some("terror".to_string())));
        assert_eq!(app.filter.genre.as_deref(), Some("Terror"));
        assert_eq!(app.status_message, "No genre named \"terror\"");
    }

    #[test]
    fn test_select_all_clears_genre() {
        let mut app = test_app();
        update(&mut app, Action::SelectGenre(Some("Terror".to_string())));
        update(&mut app, Action::SelectGenre(None));
        assert!(app.filter.genre.is_none());
        assert_eq!(app.view().visible.len(), app.catalog.len());
    }

    #[test]
    fn test_set_page_range_filters_view() {
        let mut app = test_app();
        update(&mut app, Action::SetPageRange { min: 400, max: 700 });
        assert_eq!(app.status_message, "Pages: 400-700");
        let view = app.view();
        assert!(view.visible.iter().all(|b| (400..=700).contains(&b.pages)));
        assert_eq!(view.visible.len(), 3);
    }

    #[test]
    fn test_inverted_page_range_shows_nothing() {
        let mut app = test_app();
        update(&mut app, Action::SetPageRange { min: 100, max: 50 });
        assert!(app.view().visible.is_empty());
    }

    #[test]
    fn test_clear_page_range() {
        let mut app = test_app();
        update(&mut app, Action::SetPageRange { min: 400, max: 0 });
        assert_eq!(app.status_message, "Pages: 400+");
        update(&mut app, Action::ClearPageRange);
        assert!(!app.filter.has_page_range());
        assert_eq!(app.view().visible.len(), app.catalog.len());
    }

    #[test]
    fn test_add_to_selection_twice_keeps_one() {
        let mut app = test_app();
        update(&mut app, Action::AddToSelection("T1".to_string()));
        update(&mut app, Action::AddToSelection("T1".to_string()));
        assert_eq!(app.selection.len(), 1);
        assert!(app.status_message.contains("already on your list"));
    }

    #[test]
    fn test_add_unknown_isbn_is_noop() {
        let mut app = test_app();
        update(&mut app, Action::AddToSelection("nope".to_string()));
        assert!(app.selection.is_empty());
    }

    #[test]
    fn test_remove_from_selection() {
        let mut app = test_app();
        update(&mut app, Action::AddToSelection("T1".to_string()));
        update(&mut app, Action::AddToSelection("F1".to_string()));
        update(&mut app, Action::RemoveFromSelection("T1".to_string()));
        assert_eq!(app.selection.len(), 1);
        assert!(app.selection.contains("F1"));
        assert!(app.status_message.starts_with("Removed"));
    }

    #[test]
    fn test_selection_survives_filter_changes() {
        let mut app = test_app();
        update(&mut app, Action::AddToSelection("Z1".to_string()));
        update(&mut app, Action::SelectGenre(Some("Terror".to_string())));
        update(&mut app, Action::SetPageRange { min: 1, max: 2 });
        assert!(app.selection.contains("Z1"));
    }
}
