//! # TitleBar Component
//!
//! Top status bar: how many books are showing, how many are on the
//! reading list, and the latest status message.
//!
//! Stateless; it renders whatever props it is given.

use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

pub struct TitleBar {
    /// Books left after both filters.
    pub visible_count: usize,
    pub selection_count: usize,
    pub status_message: String,
}

impl TitleBar {
    pub fn new(visible_count: usize, selection_count: usize, status_message: String) -> Self {
        Self {
            visible_count,
            selection_count,
            status_message,
        }
    }

    fn line(&self) -> Line<'_> {
        let mut spans = vec![
            Span::styled(
                "Reading List",
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            ),
            Span::raw(format!(" | Books {}", self.visible_count)),
            Span::raw(format!(" | Your List {}", self.selection_count)),
        ];
        if !self.status_message.is_empty() {
            spans.push(Span::styled(
                format!(" | {}", self.status_message),
                Style::default().fg(Color::DarkGray),
            ));
        }
        Line::from(spans)
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        frame.render_widget(self.line(), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::buffer_text;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_title_bar_shows_counts_and_status() {
        let mut terminal = Terminal::new(TestBackend::new(80, 1)).unwrap();
        let mut title_bar = TitleBar::new(12, 3, "Genre: Terror".to_string());

        terminal.draw(|f| title_bar.render(f, f.area())).unwrap();

        let text = buffer_text(terminal.backend().buffer());
        assert!(text.contains("Reading List"));
        assert!(text.contains("Books 12"));
        assert!(text.contains("Your List 3"));
        assert!(text.contains("Genre: Terror"));
    }

    #[test]
    fn test_title_bar_without_status_has_no_trailing_separator() {
        let title_bar = TitleBar::new(0, 0, String::new());
        let text: String = title_bar.line().spans.iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(text, "Reading List | Books 0 | Your List 0");
    }
}
