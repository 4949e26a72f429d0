//! Feedback form body: header, scrolled field list and Submit button

use super::field_renderer::{draw_field, field_height};
use crate::app::App;
use crate::ui::components::{render_button, BUTTON_HEIGHT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use std::ops::Range;

/// Stops to draw so that `active` is visible within `available` rows.
///
/// The window starts as early as possible while still fitting the active
/// stop, then extends forward as far as space allows.
pub fn visible_range(heights: &[u16], active: usize, available: u16) -> Range<usize> {
    if heights.is_empty() {
        return 0..0;
    }
    let active = active.min(heights.len() - 1);

    let mut start = active;
    let mut used = heights[active];
    while start > 0 && used + heights[start - 1] <= available {
        start -= 1;
        used += heights[start];
    }

    let mut end = active + 1;
    while end < heights.len() && used + heights[end] <= available {
        used += heights[end];
        end += 1;
    }

    start..end
}

/// Draw the feedback form
pub fn draw_feedback_form(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .title(" Feedback Form ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Description
            Constraint::Min(0),    // Fields
        ])
        .split(inner);

    let description = Paragraph::new(Line::from(Span::styled(
        "This is a sample form description.",
        Style::default().add_modifier(Modifier::ITALIC),
    )));
    frame.render_widget(description, chunks[0]);

    draw_fields(frame, chunks[1], app);
}

fn draw_fields(frame: &mut Frame, area: Rect, app: &App) {
    let session = &app.state.session;
    let fields = session.registry().fields();
    let failed_key = session.last_failure().map(|f| f.field_key);

    let mut heights: Vec<u16> = fields.iter().map(field_height).collect();
    heights.push(BUTTON_HEIGHT);

    let range = visible_range(&heights, app.state.active_form_field, area.height);
    let mut constraints: Vec<Constraint> = heights[range.clone()]
        .iter()
        .map(|h| Constraint::Length(*h))
        .collect();
    constraints.push(Constraint::Min(0));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    for (chunk, index) in chunks.iter().zip(range) {
        let is_active = index == app.state.active_form_field;
        match fields.get(index) {
            Some(field) => {
                let fallback = field.kind.empty_value();
                let value = session.value(field.key).unwrap_or(&fallback);
                draw_field(
                    frame,
                    *chunk,
                    field,
                    value,
                    is_active,
                    failed_key == Some(field.key),
                );
            }
            None => render_button(frame, *chunk, "Submit", is_active),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FormConfig;
    use ratatui::{backend::TestBackend, Terminal};

    #[test]
    fn test_everything_fits() {
        assert_eq!(visible_range(&[3, 3, 3], 1, 20), 0..3);
    }

    #[test]
    fn test_window_follows_active_stop() {
        let heights = [3, 3, 3, 3, 3];
        assert_eq!(visible_range(&heights, 0, 7), 0..2);
        assert_eq!(visible_range(&heights, 4, 7), 3..5);
        assert_eq!(visible_range(&heights, 2, 7), 1..3);
    }

    #[test]
    fn test_oversized_active_stop_is_still_shown() {
        assert_eq!(visible_range(&[3, 10, 3], 1, 5), 1..2);
    }

    #[test]
    fn test_empty_heights() {
        assert_eq!(visible_range(&[], 0, 10), 0..0);
    }

    #[test]
    fn test_draw_shows_active_field() {
        let mut app = App::new(&FormConfig::default());
        app.state.active_form_field = app.state.session.registry().len();

        let backend = TestBackend::new(60, 20);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| draw_feedback_form(frame, frame.area(), &app))
            .unwrap();

        let rendered: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect();
        assert!(rendered.contains("Feedback Form"));
        assert!(rendered.contains("Submit"));
        assert!(!rendered.contains("Name *"));
    }
}
