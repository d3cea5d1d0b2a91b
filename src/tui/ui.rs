use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};

use crate::core::state::App;
use crate::tui::component::Component;
use crate::tui::components::{CatalogGrid, GenreBar, PageRange, SelectionPanel, TitleBar};
use crate::tui::{Focus, TuiState};

/// Width of the reading-list side panel.
const SIDE_PANEL_PERCENT: u16 = 30;

/// Screen regions, shared by drawing and mouse hit-testing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenLayout {
    pub title: Rect,
    pub genres: Rect,
    pub pages: Rect,
    pub grid: Rect,
    pub selection: Rect,
    pub help: Rect,
}

pub fn screen_layout(area: Rect) -> ScreenLayout {
    use Constraint::{Length, Min, Percentage};
    let [title, genres, pages, body, help] =
        Layout::vertical([Length(1), Length(3), Length(3), Min(0), Length(1)]).areas(area);
    let [grid, selection] =
        Layout::horizontal([Min(0), Percentage(SIDE_PANEL_PERCENT)]).areas(body);
    ScreenLayout {
        title,
        genres,
        pages,
        grid,
        selection,
        help,
    }
}

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState) {
    let area = frame.area();
    tui.last_area = area;
    let layout = screen_layout(area);
    let view = app.view();

    TitleBar::new(
        view.visible.len(),
        app.selection.len(),
        app.status_message.clone(),
    )
    .render(frame, layout.title);

    GenreBar::new(
        &view.genres,
        app.filter.genre.as_deref(),
        tui.genre_cursor,
        tui.focus == Focus::Genres,
    )
    .render(frame, layout.genres);

    PageRange::new(
        view.adjustable_bounds(),
        view.bounds,
        &app.filter,
        tui.range_handle,
        tui.focus == Focus::Pages,
    )
    .render(frame, layout.pages);

    CatalogGrid::new(
        &mut tui.catalog,
        &view.visible,
        &app.selection,
        tui.focus == Focus::Catalog,
    )
    .render(frame, layout.grid);

    SelectionPanel::new(
        &mut tui.selection,
        &app.selection,
        tui.focus == Focus::Selection,
    )
    .render(frame, layout.selection);

    frame.render_widget(help_line(tui.focus), layout.help);
}

fn help_line(focus: Focus) -> Line<'static> {
    let keys = match focus {
        Focus::Genres => "←/→ genre  a All",
        Focus::Pages => "↑/↓ handle  ←/→ move  r reset",
        Focus::Catalog => "arrows move  Enter add",
        Focus::Selection => "↑/↓ move  Enter/Del remove",
    };
    Line::from(vec![
        Span::styled(format!(" {} ", focus.label()), Style::default().fg(Color::Black).bg(Color::Cyan)),
        Span::styled(
            format!(" {keys}  Tab focus  q quit"),
            Style::default().fg(Color::DarkGray),
        ),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::action::{Action, update};
    use crate::test_support::{buffer_text, test_app};
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_screen_layout_stacks_regions() {
        let layout = screen_layout(Rect::new(0, 0, 100, 40));
        assert_eq!(layout.title.height, 1);
        assert_eq!(layout.genres.y, 1);
        assert_eq!(layout.pages.y, 4);
        assert_eq!(layout.grid.y, 7);
        assert_eq!(layout.grid.height, 32);
        assert_eq!(layout.selection.width, 30);
        assert_eq!(layout.help.y, 39);
    }

    #[test]
    fn test_draw_ui() {
        let mut terminal = Terminal::new(TestBackend::new(120, 40)).unwrap();
        let app = test_app();
        let mut tui = TuiState::new(10, 30);
        terminal.draw(|f| draw_ui(f, &app, &mut tui)).unwrap();

        let text = buffer_text(terminal.backend().buffer());
        assert!(text.contains("Books 6"));
        assert!(text.contains(" All "));
        assert!(text.contains("Ciencia ficción"));
        assert!(text.contains("Pages 223 – 1200"));
        assert!(text.contains("Nothing Here!!!"));
        assert_eq!(tui.last_area, Rect::new(0, 0, 120, 40));
    }

    #[test]
    fn test_draw_ui_reflects_state() {
        let mut terminal = Terminal::new(TestBackend::new(120, 40)).unwrap();
        let mut app = test_app();
        update(&mut app, Action::SelectGenre(Some("Zombies".to_string())));
        update(&mut app, Action::AddToSelection("T1".to_string()));
        let mut tui = TuiState::new(10, 30);
        terminal.draw(|f| draw_ui(f, &app, &mut tui)).unwrap();

        let text = buffer_text(terminal.backend().buffer());
        assert!(text.contains("Books 1"));
        assert!(text.contains("Your List (1)"));
        assert!(text.contains("Every book here has 444 pages"));
    }

    #[test]
    fn test_help_line_follows_focus() {
        let text: String = help_line(Focus::Selection)
            .spans
            .iter()
            .map(|s| s.content.as_ref())
            .collect();
        assert!(text.contains("Your List"));
        assert!(text.contains("remove"));
    }
}
