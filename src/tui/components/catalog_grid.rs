//! # CatalogGrid Component
//!
//! Scrollable grid of `BookCard`s for the books that pass both filters.
//!
//! ## Architecture
//!
//! `CatalogGrid` is a transient component (created each frame) that wraps
//! `&'a mut CatalogGridState` (persistent state) and the visible books
//! (props). The render pass records the column count and viewport height
//! so keyboard navigation and mouse hit-testing between frames agree with
//! what is on screen.

use ratatui::Frame;
use ratatui::layout::{Position, Rect, Size};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Paragraph};
use tui_scrollview::{ScrollView, ScrollViewState, ScrollbarVisibility};

use crate::core::catalog::Book;
use crate::core::selection::Selection;
use crate::tui::component::Component;
use crate::tui::components::book_card::{BookCard, CARD_HEIGHT, truncate_to_width};

/// Rows that fit in a scroll view whose height is a `u16`.
const MAX_ROWS: usize = (u16::MAX / CARD_HEIGHT) as usize;

/// Cards that can be laid out with `columns` per row. Anything past this is
/// left out of the grid.
pub fn grid_capacity(columns: usize) -> usize {
    MAX_ROWS.saturating_mul(columns.max(1))
}

/// Content y of the top of `row`, saturating at the scroll view's limit.
fn row_top(row: usize) -> u16 {
    u16::try_from(row.saturating_mul(CARD_HEIGHT as usize)).unwrap_or(u16::MAX)
}

/// Layout and scroll state for the grid. Persisted in `TuiState`.
pub struct CatalogGridState {
    pub scroll_state: ScrollViewState,
    /// Index into the visible books of the keyboard cursor.
    pub cursor: usize,
    /// Cards per row at the last render.
    pub columns: usize,
    /// Width of one card at the last render.
    pub card_width: u16,
    /// Preferred card width from config.
    pub preferred_card_width: u16,
    /// Inner height of the grid at the last render.
    pub viewport_height: u16,
}

impl CatalogGridState {
    pub fn new(preferred_card_width: u16) -> Self {
        Self {
            scroll_state: ScrollViewState::default(),
            cursor: 0,
            columns: 1,
            card_width: preferred_card_width,
            preferred_card_width,
            viewport_height: 0,
        }
    }

    /// Keep the cursor on a real card after the visible set changes.
    pub fn clamp_cursor(&mut self, visible: usize) {
        let visible = visible.min(grid_capacity(self.columns));
        self.cursor = self.cursor.min(visible.saturating_sub(1));
    }

    /// Move the cursor by `delta` cards, staying inside `0..visible`.
    pub fn move_cursor(&mut self, delta: isize, visible: usize) {
        let visible = visible.min(grid_capacity(self.columns));
        if visible == 0 {
            self.cursor = 0;
            return;
        }
        let target = self.cursor as isize + delta;
        if (0..visible as isize).contains(&target) {
            self.cursor = target as usize;
            self.scroll_to_cursor();
        }
    }

    pub fn move_rows(&mut self, rows: isize, visible: usize) {
        self.move_cursor(rows * self.columns.max(1) as isize, visible);
    }

    /// Scroll so the cursor's row is fully visible.
    pub fn scroll_to_cursor(&mut self) {
        let top = row_top(self.cursor / self.columns.max(1));
        let bottom = top.saturating_add(CARD_HEIGHT);
        let offset_y = self.scroll_state.offset().y;

        if top < offset_y {
            self.scroll_state.set_offset(Position { x: 0, y: top });
        } else if bottom > offset_y.saturating_add(self.viewport_height) {
            let y = bottom.saturating_sub(self.viewport_height);
            self.scroll_state.set_offset(Position { x: 0, y });
        }
    }

    pub fn reset(&mut self) {
        self.cursor = 0;
        self.scroll_state.set_offset(Position { x: 0, y: 0 });
    }
}

/// Cards per row and the width of each for a grid `content_width` columns wide.
pub fn grid_columns(content_width: u16, preferred_card_width: u16) -> (usize, u16) {
    if content_width <= preferred_card_width {
        return (1, content_width);
    }
    let columns = (content_width / preferred_card_width).max(1);
    (columns as usize, preferred_card_width)
}

/// Card index at content coordinates `(x, y)`, given the grid geometry.
pub fn card_at(x: u16, y: u16, columns: usize, card_width: u16, count: usize) -> Option<usize> {
    if card_width == 0 || columns == 0 {
        return None;
    }
    let column = (x / card_width) as usize;
    if column >= columns {
        return None;
    }
    let row = (y / CARD_HEIGHT) as usize;
    let index = row * columns + column;
    (index < count).then_some(index)
}

pub struct CatalogGrid<'a> {
    pub state: &'a mut CatalogGridState,
    pub books: &'a [&'a Book],
    pub selection: &'a Selection,
    pub focused: bool,
}

impl<'a> CatalogGrid<'a> {
    pub fn new(
        state: &'a mut CatalogGridState,
        books: &'a [&'a Book],
        selection: &'a Selection,
        focused: bool,
    ) -> Self {
        Self {
            state,
            books,
            selection,
            focused,
        }
    }

    /// Inner area of the grid block, where cards are drawn.
    pub fn inner(area: Rect) -> Rect {
        Block::bordered().inner(area)
    }

    /// Resolve a screen click to a card using the state cached by the last render.
    pub fn hit_test(state: &CatalogGridState, area: Rect, col: u16, row: u16, count: usize) -> Option<usize> {
        let inner = Self::inner(area);
        if !inner.contains(Position { x: col, y: row }) {
            return None;
        }
        let x = col - inner.x;
        let y = row - inner.y + state.scroll_state.offset().y;
        card_at(x, y, state.columns, state.card_width, count)
    }

    fn title(&self, shown: usize) -> String {
        let total = self.books.len();
        if shown < total {
            format!(" Books ({total}, first {shown} shown) ")
        } else {
            format!(" Books ({total}) ")
        }
    }

    fn footer(&self, width: u16) -> Line<'static> {
        let text = match self.books.get(self.state.cursor) {
            Some(book) if self.focused => format!(" ISBN {} · {} ", book.isbn, book.cover),
            _ => String::new(),
        };
        Line::from(truncate_to_width(&text, width.saturating_sub(2) as usize))
    }
}

impl Component for CatalogGrid<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let inner = Self::inner(area);
        // -1 for the scrollbar
        let content_width = inner.width.saturating_sub(1);
        let (columns, card_width) = grid_columns(content_width, self.state.preferred_card_width);
        self.state.columns = columns;
        self.state.card_width = card_width;
        self.state.viewport_height = inner.height;
        self.state.clamp_cursor(self.books.len());
        let shown = self.books.len().min(grid_capacity(columns));

        let border_style = if self.focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let block = Block::bordered()
            .title(self.title(shown))
            .title_bottom(self.footer(area.width))
            .border_style(border_style);
        frame.render_widget(block, area);

        if self.books.is_empty() {
            let empty = Paragraph::new("No books match these filters.")
                .style(Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC))
                .centered();
            frame.render_widget(empty, inner);
            return;
        }

        let rows = shown.div_ceil(columns);
        let mut scroll_view = ScrollView::new(Size::new(content_width, row_top(rows)))
            .vertical_scrollbar_visibility(ScrollbarVisibility::Automatic)
            .horizontal_scrollbar_visibility(ScrollbarVisibility::Never);

        for (i, book) in self.books.iter().take(shown).enumerate() {
            let x = (i % columns) as u16 * card_width;
            let y = row_top(i / columns);
            let card = BookCard::new(
                book,
                self.focused && i == self.state.cursor,
                self.selection.contains(&book.isbn),
            );
            scroll_view.render_widget(card.paragraph(card_width), Rect::new(x, y, card_width, CARD_HEIGHT));
        }

        frame.render_stateful_widget(scroll_view, inner, &mut self.state.scroll_state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{book, buffer_text, sample_books};
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_grid_columns() {
        assert_eq!(grid_columns(100, 30), (3, 30));
        assert_eq!(grid_columns(30, 30), (1, 30));
        assert_eq!(grid_columns(20, 30), (1, 20));
    }

    #[test]
    fn test_card_at() {
        // 3 columns of width 30, 7 books
        assert_eq!(card_at(0, 0, 3, 30, 7), Some(0));
        assert_eq!(card_at(65, 0, 3, 30, 7), Some(2));
        assert_eq!(card_at(31, CARD_HEIGHT, 3, 30, 7), Some(4));
        assert_eq!(card_at(31, CARD_HEIGHT * 2, 3, 30, 7), None); // past the last book
        assert_eq!(card_at(95, 0, 3, 30, 7), None); // right of the last column
    }

    #[test]
    fn test_move_cursor_stays_in_range() {
        let mut state = CatalogGridState::new(30);
        state.columns = 3;
        state.move_cursor(-1, 5);
        assert_eq!(state.cursor, 0);
        state.move_rows(1, 5);
        assert_eq!(state.cursor, 3);
        state.move_rows(1, 5); // 6 doesn't exist
        assert_eq!(state.cursor, 3);
        state.move_cursor(1, 5);
        assert_eq!(state.cursor, 4);
    }

    #[test]
    fn test_clamp_cursor_after_shrink() {
        let mut state = CatalogGridState::new(30);
        state.cursor = 8;
        state.clamp_cursor(3);
        assert_eq!(state.cursor, 2);
        state.clamp_cursor(0);
        assert_eq!(state.cursor, 0);
    }

    #[test]
    fn test_scroll_follows_cursor() {
        let mut state = CatalogGridState::new(30);
        state.columns = 1;
        state.viewport_height = CARD_HEIGHT * 2;
        state.cursor = 4;
        state.scroll_to_cursor();
        assert_eq!(state.scroll_state.offset().y, CARD_HEIGHT * 3);
        state.cursor = 0;
        state.scroll_to_cursor();
        assert_eq!(state.scroll_state.offset().y, 0);
    }

    #[test]
    fn test_render_records_geometry() {
        let books = sample_books();
        let refs: Vec<&Book> = books.iter().collect();
        let selection = Selection::new();
        let mut state = CatalogGridState::new(30);
        let mut terminal = Terminal::new(TestBackend::new(95, 20)).unwrap();

        terminal
            .draw(|f| CatalogGrid::new(&mut state, &refs, &selection, true).render(f, f.area()))
            .unwrap();

        // inner width 93, minus scrollbar 92 → 3 cards of 30
        assert_eq!(state.columns, 3);
        assert_eq!(state.card_width, 30);
        assert_eq!(state.viewport_height, 18);
        let text = buffer_text(terminal.backend().buffer());
        assert!(text.contains("Books (6)"));
        assert!(text.contains("Book T1"));
        assert!(text.contains("ISBN T1"));
    }

    #[test]
    fn test_render_empty_message() {
        let selection = Selection::new();
        let mut state = CatalogGridState::new(30);
        let mut terminal = Terminal::new(TestBackend::new(60, 10)).unwrap();
        terminal
            .draw(|f| CatalogGrid::new(&mut state, &[], &selection, false).render(f, f.area()))
            .unwrap();
        let text = buffer_text(terminal.backend().buffer());
        assert!(text.contains("No books match these filters."));
    }

    #[test]
    fn test_grid_capacity_fits_u16_content() {
        assert_eq!(grid_capacity(1), MAX_ROWS);
        assert_eq!(grid_capacity(0), MAX_ROWS);
        assert_eq!(row_top(MAX_ROWS), MAX_ROWS as u16 * CARD_HEIGHT);
        assert_eq!(row_top(usize::MAX), u16::MAX);
    }

    #[test]
    fn test_render_very_large_catalog() {
        let books: Vec<Book> = (0..10_000)
            .map(|i| book(&format!("B{i}"), "Terror", 100 + i))
            .collect();
        let refs: Vec<&Book> = books.iter().collect();
        let selection = Selection::new();
        let mut state = CatalogGridState::new(30);
        let mut terminal = Terminal::new(TestBackend::new(40, 20)).unwrap();

        terminal
            .draw(|f| CatalogGrid::new(&mut state, &refs, &selection, true).render(f, f.area()))
            .unwrap();
        assert_eq!(state.columns, 1);
        let text = buffer_text(terminal.backend().buffer());
        assert!(text.contains(&format!("Books (10000, first {MAX_ROWS} shown)")));

        // The cursor can't go past the last card that was laid out
        state.move_cursor(20_000, refs.len());
        assert_eq!(state.cursor, 0);
        state.cursor = 9_999;
        state.clamp_cursor(refs.len());
        assert_eq!(state.cursor, MAX_ROWS - 1);
        state.scroll_to_cursor();
        assert_eq!(
            state.scroll_state.offset().y,
            row_top(MAX_ROWS) - state.viewport_height
        );

        terminal
            .draw(|f| CatalogGrid::new(&mut state, &refs, &selection, true).render(f, f.area()))
            .unwrap();
    }

    #[test]
    fn test_hit_test_accounts_for_border_and_scroll() {
        let mut state = CatalogGridState::new(30);
        state.columns = 2;
        state.card_width = 30;
        let area = Rect::new(0, 5, 62, 20);
        // first card starts at (1, 6)
        assert_eq!(CatalogGrid::hit_test(&state, area, 1, 6, 4), Some(0));
        assert_eq!(CatalogGrid::hit_test(&state, area, 0, 6, 4), None);
        assert_eq!(CatalogGrid::hit_test(&state, area, 31, 6 + CARD_HEIGHT, 4), Some(3));

        state.scroll_state.set_offset(Position { x: 0, y: CARD_HEIGHT });
        assert_eq!(CatalogGrid::hit_test(&state, area, 1, 6, 4), Some(2));
    }
}
