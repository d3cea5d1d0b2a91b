//! # PageRange Component
//!
//! Dual-handle slider bound to the genre subset's observed page bounds.
//!
//! ```text
//! ┌ Pages 300 – 700 ─────────────────────────────┐
//! │  223 ───────●━━━━━━━━━━━━━━━━●──────────── 1200 │
//! └──────────────────────────────────────────────┘
//! ```
//!
//! When there are no bounds (empty subset) or every book has the same page
//! count, the control is disabled and only shows a note.
//!
//! The geometry helpers are pure so key presses and mouse clicks can be
//! turned into `Action`s without a terminal.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};

use crate::core::action::Action;
use crate::core::filter::{FilterState, PageBounds};
use crate::tui::component::Component;

/// Width reserved on each side of the track for the bound labels.
const LABEL_WIDTH: u16 = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RangeHandle {
    #[default]
    Min,
    Max,
}

impl RangeHandle {
    pub fn toggle(self) -> Self {
        match self {
            RangeHandle::Min => RangeHandle::Max,
            RangeHandle::Max => RangeHandle::Min,
        }
    }
}

/// Where the handles sit: the filter's bounds where set, the observed ones otherwise.
pub fn displayed_range(bounds: PageBounds, filter: &FilterState) -> (u32, u32) {
    let lo = if filter.min_pages > 0 { filter.min_pages } else { bounds.min };
    let hi = if filter.max_pages > 0 { filter.max_pages } else { bounds.max };
    (bounds.clamp(lo), bounds.clamp(hi))
}

/// Turn a handle position into an action; the full range clears the filter.
fn range_action(bounds: PageBounds, lo: u32, hi: u32) -> Action {
    if lo == bounds.min && hi == bounds.max {
        Action::ClearPageRange
    } else {
        Action::SetPageRange { min: lo, max: hi }
    }
}

/// Move one handle by `delta` pages. Handles never cross.
pub fn nudge(bounds: PageBounds, filter: &FilterState, handle: RangeHandle, delta: i64) -> Action {
    let (lo, hi) = displayed_range(bounds, filter);
    let shift = |value: u32, floor: u32, ceil: u32| -> u32 {
        (value as i64 + delta).clamp(floor as i64, ceil as i64) as u32
    };
    match handle {
        RangeHandle::Min => range_action(bounds, shift(lo, bounds.min, hi), hi),
        RangeHandle::Max => range_action(bounds, lo, shift(hi, lo, bounds.max)),
    }
}

/// Track width left after the bound labels.
pub fn track_width(inner_width: u16) -> u16 {
    inner_width.saturating_sub(LABEL_WIDTH * 2)
}

/// Column of `value` on a track `width` cells wide. Requires adjustable bounds.
pub fn handle_column(bounds: PageBounds, value: u32, width: u16) -> u16 {
    if width <= 1 || !bounds.is_adjustable() {
        return 0;
    }
    let span = (bounds.max - bounds.min) as u64;
    let offset = (bounds.clamp(value) - bounds.min) as u64;
    ((offset * (width as u64 - 1) + span / 2) / span) as u16
}

/// Page value under track column `column` (inverse of [`handle_column`]).
pub fn value_at_column(bounds: PageBounds, column: u16, width: u16) -> u32 {
    if width <= 1 {
        return bounds.min;
    }
    let column = column.min(width - 1) as u64;
    let span = (bounds.max - bounds.min) as u64;
    bounds.min + ((column * span + (width as u64 - 1) / 2) / (width as u64 - 1)) as u32
}

/// Move whichever handle is closer to the clicked column onto it.
pub fn click(bounds: PageBounds, filter: &FilterState, column: u16, width: u16) -> (RangeHandle, Action) {
    let (lo, hi) = displayed_range(bounds, filter);
    let value = value_at_column(bounds, column, width);
    let lo_distance = value.abs_diff(lo);
    let hi_distance = value.abs_diff(hi);
    if lo_distance <= hi_distance && value <= hi {
        (RangeHandle::Min, range_action(bounds, value, hi))
    } else {
        (RangeHandle::Max, range_action(bounds, lo, value.max(lo)))
    }
}

pub struct PageRange<'a> {
    /// Adjustable bounds, or `None` when the control is disabled.
    pub bounds: Option<PageBounds>,
    /// Raw bounds, used only to explain why the control is disabled.
    pub observed: Option<PageBounds>,
    pub filter: &'a FilterState,
    pub active: RangeHandle,
    pub focused: bool,
}

impl<'a> PageRange<'a> {
    pub fn new(
        bounds: Option<PageBounds>,
        observed: Option<PageBounds>,
        filter: &'a FilterState,
        active: RangeHandle,
        focused: bool,
    ) -> Self {
        Self {
            bounds,
            observed,
            filter,
            active,
            focused,
        }
    }

    fn track_line(&self, bounds: PageBounds, inner_width: u16) -> Line<'static> {
        let width = track_width(inner_width);
        let (lo, hi) = displayed_range(bounds, self.filter);
        let lo_col = handle_column(bounds, lo, width);
        let hi_col = handle_column(bounds, hi, width);

        let handle_style = |handle: RangeHandle| {
            if self.focused && self.active == handle {
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            }
        };

        let mut spans = vec![Span::styled(
            format!("{:>w$} ", bounds.min, w = LABEL_WIDTH as usize - 1),
            Style::default().fg(Color::DarkGray),
        )];
        for col in 0..width {
            let span = if col == lo_col {
                Span::styled("●", handle_style(RangeHandle::Min))
            } else if col == hi_col {
                Span::styled("●", handle_style(RangeHandle::Max))
            } else if col > lo_col && col < hi_col {
                Span::styled("━", Style::default().fg(Color::Blue))
            } else {
                Span::styled("─", Style::default().fg(Color::DarkGray))
            };
            spans.push(span);
        }
        spans.push(Span::styled(
            format!(" {:<w$}", bounds.max, w = LABEL_WIDTH as usize - 1),
            Style::default().fg(Color::DarkGray),
        ));
        Line::from(spans)
    }

    fn disabled_note(&self) -> String {
        match self.observed {
            None => String::from("No books to range over"),
            Some(bounds) => format!("Every book here has {} pages", bounds.min),
        }
    }
}

impl Component for PageRange<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let border_style = if self.focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let inner_width = area.width.saturating_sub(2);

        let (title, body) = match self.bounds {
            Some(bounds) => {
                let (lo, hi) = displayed_range(bounds, self.filter);
                (format!(" Pages {lo} – {hi} "), self.track_line(bounds, inner_width))
            }
            None => (
                String::from(" Pages "),
                Line::from(Span::styled(
                    self.disabled_note(),
                    Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC),
                )),
            ),
        };

        let paragraph = Paragraph::new(body)
            .block(Block::bordered().title(title).border_style(border_style));
        frame.render_widget(paragraph, area);
    }
}
