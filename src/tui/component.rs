use ratatui::Frame;
use ratatui::layout::Rect;

/// A reusable UI component.
///
/// Components receive data via props (struct fields), may borrow persistent
/// state (via `&mut State` fields), and render to a `Frame` within a `Rect`.
///
/// `render` takes `&mut self` so components can update cached layout
/// (column counts, viewport heights) during the render pass, the same way
/// Ratatui's `StatefulWidget` does.
pub trait Component {
    /// Render the component into the given area.
    fn render(&mut self, frame: &mut Frame, area: Rect);
}
