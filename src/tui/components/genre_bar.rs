//! # GenreBar Component
//!
//! One "All" button plus one button per distinct genre. The active filter
//! is highlighted; when the bar has focus the keyboard cursor is underlined.
//!
//! Button geometry is a pure function of the labels so mouse clicks can be
//! resolved without re-rendering.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::tui::component::Component;

const ALL_LABEL: &str = "All";
const BUTTON_GAP: u16 = 1;

/// Index 0 is "All"; index `i > 0` is `genres[i - 1]`.
pub fn genre_for_index(genres: &[String], index: usize) -> Option<Option<String>> {
    match index {
        0 => Some(None),
        i => genres.get(i - 1).map(|g| Some(g.clone())),
    }
}

/// Inverse of [`genre_for_index`]. An unknown genre maps to "All".
pub fn index_for_genre(genres: &[String], genre: Option<&str>) -> usize {
    genre
        .and_then(|g| genres.iter().position(|candidate| candidate == g))
        .map_or(0, |i| i + 1)
}

/// `(x offset, width)` of each button, "All" first, relative to the bar's inner area.
pub fn button_spans(genres: &[String]) -> Vec<(u16, u16)> {
    let mut spans = Vec::with_capacity(genres.len() + 1);
    let mut x = 0u16;
    for label in std::iter::once(ALL_LABEL).chain(genres.iter().map(String::as_str)) {
        let width = label.width() as u16 + 2;
        spans.push((x, width));
        x = x.saturating_add(width + BUTTON_GAP);
    }
    spans
}

/// Which button (if any) sits at column `x` of the bar's inner area.
pub fn hit_test(genres: &[String], x: u16) -> Option<usize> {
    button_spans(genres)
        .into_iter()
        .position(|(start, width)| x >= start && x < start + width)
}

pub struct GenreBar<'a> {
    pub genres: &'a [String],
    pub selected: Option<&'a str>,
    pub cursor: usize,
    pub focused: bool,
}

impl<'a> GenreBar<'a> {
    pub fn new(genres: &'a [String], selected: Option<&'a str>, cursor: usize, focused: bool) -> Self {
        Self {
            genres,
            selected,
            cursor,
            focused,
        }
    }

    fn line(&self) -> Line<'a> {
        let active = index_for_genre(self.genres, self.selected);
        let mut spans = Vec::new();
        let labels = std::iter::once(ALL_LABEL).chain(self.genres.iter().map(String::as_str));
        for (i, label) in labels.enumerate() {
            if i > 0 {
                spans.push(Span::raw(" ".repeat(BUTTON_GAP as usize)));
            }
            let mut style = if i == active {
                Style::default().fg(Color::White).bg(Color::Blue).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Gray)
            };
            if self.focused && i == self.cursor {
                style = style.add_modifier(Modifier::UNDERLINED);
            }
            spans.push(Span::styled(format!(" {label} "), style));
        }
        Line::from(spans)
    }
}

impl Component for GenreBar<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let border_style = if self.focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let paragraph = Paragraph::new(self.line())
            .block(Block::bordered().title(" Genres ").border_style(border_style));
        frame.render_widget(paragraph, area);
    }
}
