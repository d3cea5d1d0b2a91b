//! # SelectionPanel Component
//!
//! Side panel listing the reading list. Enter, Delete or a click removes
//! the book under the cursor. Shows "Nothing Here!!!" when empty.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `SelectionPanelState` lives in `TuiState`
//! - `SelectionPanel` is created each frame with borrowed state

use ratatui::Frame;
use ratatui::layout::{Position, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, List, ListItem, ListState, Paragraph};

use crate::core::selection::Selection;
use crate::tui::component::Component;
use crate::tui::components::book_card::{genre_color, truncate_to_width};

/// Persistent state for the selection panel.
#[derive(Default)]
pub struct SelectionPanelState {
    pub list_state: ListState,
}

impl SelectionPanelState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cursor(&self) -> Option<usize> {
        self.list_state.selected()
    }

    /// Keep the cursor on an existing entry after the list changes.
    pub fn clamp(&mut self, len: usize) {
        let next = match (self.list_state.selected(), len) {
            (_, 0) => None,
            (None, _) => Some(0),
            (Some(i), len) => Some(i.min(len - 1)),
        };
        self.list_state.select(next);
    }

    pub fn move_cursor(&mut self, delta: isize, len: usize) {
        if len == 0 {
            self.list_state.select(None);
            return;
        }
        let current = self.list_state.selected().unwrap_or(0) as isize;
        let next = (current + delta).clamp(0, len as isize - 1);
        self.list_state.select(Some(next as usize));
    }

    /// Entry index at screen row `row`, using the scroll offset from the last render.
    pub fn hit_test(&self, area: Rect, col: u16, row: u16, len: usize) -> Option<usize> {
        let inner = Block::bordered().inner(area);
        if !inner.contains(Position { x: col, y: row }) {
            return None;
        }
        let index = (row - inner.y) as usize + self.list_state.offset();
        (index < len).then_some(index)
    }
}

pub struct SelectionPanel<'a> {
    state: &'a mut SelectionPanelState,
    selection: &'a Selection,
    focused: bool,
}

impl<'a> SelectionPanel<'a> {
    pub fn new(state: &'a mut SelectionPanelState, selection: &'a Selection, focused: bool) -> Self {
        Self {
            state,
            selection,
            focused,
        }
    }
}

impl Component for SelectionPanel<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let border_style = if self.focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let title = if self.selection.is_empty() {
            String::from(" Your List ")
        } else {
            format!(" Your List ({}) ", self.selection.len())
        };
        let block = Block::bordered().title(title).border_style(border_style);

        if self.selection.is_empty() {
            let empty = Paragraph::new("Nothing Here!!!")
                .style(Style::default().add_modifier(Modifier::BOLD))
                .centered()
                .block(block);
            frame.render_widget(empty, area);
            return;
        }

        let inner_width = area.width.saturating_sub(2) as usize;
        let items: Vec<ListItem> = self
            .selection
            .books()
            .iter()
            .map(|book| {
                let pages = format!(" {}p", book.pages);
                let title_width = inner_width.saturating_sub(pages.len() + 2);
                ListItem::new(Line::from(vec![
                    Span::styled("▌ ", Style::default().fg(genre_color(&book.genre))),
                    Span::raw(truncate_to_width(&book.title, title_width)),
                    Span::styled(pages, Style::default().fg(Color::DarkGray)),
                ]))
            })
            .collect();

        let highlight = if self.focused {
            Style::default().add_modifier(Modifier::REVERSED)
        } else {
            Style::default()
        };
        let list = List::new(items).block(block).highlight_style(highlight);

        frame.render_stateful_widget(list, area, &mut self.state.list_state);
    }
}
