//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard and mouse events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Redraw Strategy
//!
//! Nothing animates, so the loop sleeps until an event arrives (or the poll
//! times out), drains every pending event, then draws once.
//!
//! ## Focus
//!
//! Tab / Shift-Tab cycle keyboard focus between the four panes:
//! Genres → Pages → Catalog → Your List. Mouse clicks work regardless of
//! focus and move focus to the clicked pane.

mod component;
pub mod components;
mod event;
mod ui;

use log::{debug, info};
use std::io::stdout;
use std::time::Duration;

use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use ratatui::layout::{Position, Rect};

use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::state::App;
use crate::tui::components::genre_bar::{self, genre_for_index, index_for_genre};
use crate::tui::components::page_range::{self, RangeHandle};
use crate::tui::components::{CatalogGrid, CatalogGridState, SelectionPanelState};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

const IDLE_POLL: Duration = Duration::from_millis(250);

/// Which pane receives keyboard input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    Genres,
    Pages,
    #[default]
    Catalog,
    Selection,
}

impl Focus {
    pub fn next(self) -> Self {
        match self {
            Focus::Genres => Focus::Pages,
            Focus::Pages => Focus::Catalog,
            Focus::Catalog => Focus::Selection,
            Focus::Selection => Focus::Genres,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Focus::Genres => Focus::Selection,
            Focus::Pages => Focus::Genres,
            Focus::Catalog => Focus::Pages,
            Focus::Selection => Focus::Catalog,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Focus::Genres => "Genres",
            Focus::Pages => "Pages",
            Focus::Catalog => "Catalog",
            Focus::Selection => "Your List",
        }
    }
}

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    pub focus: Focus,
    /// Keyboard cursor in the genre bar; 0 is "All".
    pub genre_cursor: usize,
    pub range_handle: RangeHandle,
    pub page_step: u32,
    pub catalog: CatalogGridState,
    pub selection: SelectionPanelState,
    /// Frame area at the last draw, for mouse hit-testing.
    pub last_area: Rect,
}

impl TuiState {
    pub fn new(page_step: u32, card_width: u16) -> Self {
        Self {
            focus: Focus::default(),
            genre_cursor: 0,
            range_handle: RangeHandle::default(),
            page_step,
            catalog: CatalogGridState::new(card_width),
            selection: SelectionPanelState::new(),
            last_area: Rect::default(),
        }
    }

    /// Re-align cursors with app state after an update.
    fn sync(&mut self, app: &App) {
        let view = app.view();
        self.genre_cursor = index_for_genre(&view.genres, app.filter.genre.as_deref());
        self.catalog.clamp_cursor(view.visible.len());
        self.selection.clamp(app.selection.len());
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(stdout(), EnableMouseCapture)?;
        info!("Terminal modes enabled (mouse)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableMouseCapture);
    }
}

pub fn run(mut app: App, config: &ResolvedConfig) -> std::io::Result<()> {
    let mut tui = TuiState::new(config.page_step, config.card_width);
    tui.sync(&app);

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = match TerminalModeGuard::new() {
        Ok(guard) => guard,
        Err(e) => {
            ratatui::restore();
            return Err(e);
        }
    };
    let mut needs_redraw = true; // Force first frame

    let result = loop {
        if needs_redraw {
            if let Err(e) = terminal.draw(|f| ui::draw_ui(f, &app, &mut tui)) {
                break Err(e);
            }
            needs_redraw = false;
        }

        let first_event = poll_event_timeout(IDLE_POLL);
        if first_event.is_some() {
            needs_redraw = true;
        }

        // Drain everything pending before the next draw
        let mut should_quit = false;
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            if handle_event(&mut app, &mut tui, event) == Effect::Quit {
                should_quit = true;
                break;
            }
        }

        if should_quit {
            break Ok(());
        }
    };

    info!("Shutting down with {} books on the list", app.selection.len());
    ratatui::restore();
    result
}

/// Apply one input event. Returns `Effect::Quit` when the loop should stop.
fn handle_event(app: &mut App, tui: &mut TuiState, event: TuiEvent) -> Effect {
    let effect = match event {
        TuiEvent::Resize => Effect::None,
        TuiEvent::Quit | TuiEvent::ForceQuit => update(app, Action::Quit),
        TuiEvent::FocusNext => {
            tui.focus = tui.focus.next();
            Effect::None
        }
        TuiEvent::FocusPrev => {
            tui.focus = tui.focus.prev();
            Effect::None
        }
        TuiEvent::InputChar('a') => select_genre(app, tui, None),
        TuiEvent::InputChar('r') => update(app, Action::ClearPageRange),
        TuiEvent::ScrollUp(col, row) => {
            handle_scroll(app, tui, col, row, -1);
            Effect::None
        }
        TuiEvent::ScrollDown(col, row) => {
            handle_scroll(app, tui, col, row, 1);
            Effect::None
        }
        TuiEvent::MouseClick(col, row) => handle_click(app, tui, col, row),
        other => match tui.focus {
            Focus::Genres => handle_genres_key(app, tui, other),
            Focus::Pages => handle_pages_key(app, tui, other),
            Focus::Catalog => handle_catalog_key(app, tui, other),
            Focus::Selection => handle_selection_key(app, tui, other),
        },
    };
    tui.sync(app);
    effect
}

fn select_genre(app: &mut App, tui: &mut TuiState, genre: Option<String>) -> Effect {
    let effect = update(app, Action::SelectGenre(genre));
    tui.catalog.reset();
    effect
}

fn handle_genres_key(app: &mut App, tui: &mut TuiState, event: TuiEvent) -> Effect {
    let genres = app.view().genres;
    let target = match event {
        TuiEvent::CursorLeft => tui.genre_cursor.checked_sub(1),
        TuiEvent::CursorRight => Some(tui.genre_cursor + 1),
        TuiEvent::Activate => Some(tui.genre_cursor),
        _ => None,
    };
    match target.and_then(|i| genre_for_index(&genres, i)) {
        Some(genre) => select_genre(app, tui, genre),
        None => Effect::None,
    }
}

fn handle_pages_key(app: &mut App, tui: &mut TuiState, event: TuiEvent) -> Effect {
    let Some(bounds) = app.view().adjustable_bounds() else {
        return Effect::None;
    };
    let step = tui.page_step as i64;
    let delta = match event {
        TuiEvent::CursorUp | TuiEvent::CursorDown => {
            tui.range_handle = tui.range_handle.toggle();
            return Effect::None;
        }
        TuiEvent::CursorLeft => -step,
        TuiEvent::CursorRight => step,
        _ => return Effect::None,
    };
    let action = page_range::nudge(bounds, &app.filter, tui.range_handle, delta);
    update(app, action)
}

fn handle_catalog_key(app: &mut App, tui: &mut TuiState, event: TuiEvent) -> Effect {
    let visible = app.view().visible.len();
    match event {
        TuiEvent::CursorLeft => tui.catalog.move_cursor(-1, visible),
        TuiEvent::CursorRight => tui.catalog.move_cursor(1, visible),
        TuiEvent::CursorUp => tui.catalog.move_rows(-1, visible),
        TuiEvent::CursorDown => tui.catalog.move_rows(1, visible),
        TuiEvent::Activate => {
            let isbn = app.view().visible.get(tui.catalog.cursor).map(|b| b.isbn.clone());
            if let Some(isbn) = isbn {
                return update(app, Action::AddToSelection(isbn));
            }
        }
        _ => {}
    }
    Effect::None
}

fn handle_selection_key(app: &mut App, tui: &mut TuiState, event: TuiEvent) -> Effect {
    let len = app.selection.len();
    match event {
        TuiEvent::CursorUp => tui.selection.move_cursor(-1, len),
        TuiEvent::CursorDown => tui.selection.move_cursor(1, len),
        TuiEvent::Activate | TuiEvent::Remove => {
            let isbn = tui
                .selection
                .cursor()
                .and_then(|i| app.selection.books().get(i))
                .map(|b| b.isbn.clone());
            if let Some(isbn) = isbn {
                return update(app, Action::RemoveFromSelection(isbn));
            }
        }
        _ => {}
    }
    Effect::None
}

/// Scroll whichever pane is under the pointer. Focus doesn't move.
fn handle_scroll(app: &App, tui: &mut TuiState, col: u16, row: u16, delta: isize) {
    let layout = ui::screen_layout(tui.last_area);
    let position = Position { x: col, y: row };

    if layout.grid.contains(position) {
        if delta < 0 {
            tui.catalog.scroll_state.scroll_up();
        } else {
            tui.catalog.scroll_state.scroll_down();
        }
    } else if layout.selection.contains(position) {
        tui.selection.move_cursor(delta, app.selection.len());
    }
}

fn handle_click(app: &mut App, tui: &mut TuiState, col: u16, row: u16) -> Effect {
    let layout = ui::screen_layout(tui.last_area);
    let position = Position { x: col, y: row };
    debug!("Click at ({}, {})", col, row);

    if layout.genres.contains(position) {
        tui.focus = Focus::Genres;
        let inner = ratatui::widgets::Block::bordered().inner(layout.genres);
        if row != inner.y || col < inner.x {
            return Effect::None;
        }
        let genres = app.view().genres;
        return match genre_bar::hit_test(&genres, col - inner.x).and_then(|i| genre_for_index(&genres, i)) {
            Some(genre) => select_genre(app, tui, genre),
            None => Effect::None,
        };
    }

    if layout.pages.contains(position) {
        tui.focus = Focus::Pages;
        let Some(bounds) = app.view().adjustable_bounds() else {
            return Effect::None;
        };
        let inner = ratatui::widgets::Block::bordered().inner(layout.pages);
        let width = page_range::track_width(inner.width);
        let track_x = inner.x + (inner.width - width) / 2;
        if row != inner.y || col < track_x || col >= track_x + width {
            return Effect::None;
        }
        let (handle, action) = page_range::click(bounds, &app.filter, col - track_x, width);
        tui.range_handle = handle;
        return update(app, action);
    }

    if layout.grid.contains(position) {
        tui.focus = Focus::Catalog;
        let isbn = {
            let view = app.view();
            CatalogGrid::hit_test(&tui.catalog, layout.grid, col, row, view.visible.len())
                .map(|i| (i, view.visible[i].isbn.clone()))
        };
        if let Some((index, isbn)) = isbn {
            tui.catalog.cursor = index;
            return update(app, Action::AddToSelection(isbn));
        }
        return Effect::None;
    }

    if layout.selection.contains(position) {
        tui.focus = Focus::Selection;
        let hit = tui
            .selection
            .hit_test(layout.selection, col, row, app.selection.len())
            .map(|i| app.selection.books()[i].isbn.clone());
        if let Some(isbn) = hit {
            return update(app, Action::RemoveFromSelection(isbn));
        }
    }

    Effect::None
}
