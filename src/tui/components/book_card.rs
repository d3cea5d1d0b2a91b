//! # BookCard Component
//!
//! A fixed-height card for one catalog book: title, page and genre badges,
//! and a wrapped synopsis excerpt.
//!
//! ```text
//! ┌──────────────────────────┐
//! │El resplandor             │
//! │ 688 p   Terror           │
//! │Una familia se muda a un  │
//! │hotel aislado para el     │
//! │invierno donde una…       │
//! └──────────────────────────┘
//! ```
//!
//! Cards are rendered into the grid's scroll view, so this builds a
//! `Paragraph` rather than drawing to a `Frame` directly.

use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::core::catalog::Book;

pub const SYNOPSIS_LINES: usize = 3;
/// Borders + title + badges + synopsis.
pub const CARD_HEIGHT: u16 = 2 + 1 + 1 + SYNOPSIS_LINES as u16;

/// Badge color per genre; unknown genres get a neutral outline.
pub fn genre_color(genre: &str) -> Color {
    match genre.to_lowercase().as_str() {
        "terror" => Color::Red,
        "fantasía" => Color::Blue,
        "ciencia ficción" => Color::Magenta,
        "zombies" => Color::Cyan,
        _ => Color::Gray,
    }
}

/// Cut `text` to at most `max_width` display columns, ending in `…` when cut.
pub fn truncate_to_width(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }
    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > max_width - 1 {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}

/// Wrap the synopsis to `width` and keep at most `max_lines`, marking the cut.
pub fn synopsis_excerpt(synopsis: &str, width: usize, max_lines: usize) -> Vec<String> {
    if width == 0 || max_lines == 0 {
        return Vec::new();
    }
    let wrapped = textwrap::wrap(synopsis.trim(), width);
    let truncated = wrapped.len() > max_lines;
    let mut lines: Vec<String> = wrapped
        .into_iter()
        .take(max_lines)
        .map(|line| line.into_owned())
        .collect();
    if truncated && let Some(last) = lines.last_mut() {
        let room = width.saturating_sub(1);
        *last = format!("{}…", truncate_to_width(last, room).trim_end_matches('…'));
    }
    lines
}

pub struct BookCard<'a> {
    pub book: &'a Book,
    /// Keyboard cursor is on this card.
    pub highlighted: bool,
    /// Already on the reading list.
    pub on_list: bool,
}

impl<'a> BookCard<'a> {
    pub fn new(book: &'a Book, highlighted: bool, on_list: bool) -> Self {
        Self {
            book,
            highlighted,
            on_list,
        }
    }

    /// Build the card for a slot `width` columns wide.
    pub fn paragraph(&self, width: u16) -> Paragraph<'static> {
        let inner = width.saturating_sub(2) as usize;

        let title = Line::from(Span::styled(
            truncate_to_width(&self.book.title, inner),
            Style::default().add_modifier(Modifier::BOLD),
        ));

        let mut badges = vec![
            Span::styled(
                format!(" {} p ", self.book.pages),
                Style::default().fg(Color::White).bg(Color::DarkGray),
            ),
            Span::raw(" "),
            Span::styled(
                format!(" {} ", self.book.genre),
                Style::default().fg(Color::Black).bg(genre_color(&self.book.genre)),
            ),
        ];
        if self.on_list {
            badges.push(Span::styled(" ✓", Style::default().fg(Color::Green)));
        }

        let mut lines = vec![title, Line::from(badges)];
        lines.extend(
            synopsis_excerpt(&self.book.synopsis, inner, SYNOPSIS_LINES)
                .into_iter()
                .map(|l| Line::from(Span::styled(l, Style::default().fg(Color::Gray)))),
        );

        let border_style = if self.highlighted {
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        Paragraph::new(lines).block(Block::bordered().border_style(border_style))
    }
}
