//! Layout components (body and status bar)

use crate::app::App;
use crate::platform::SUBMIT_SHORTCUT;
use crate::state::forms::FieldKind;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Split the screen into body and a one-line status bar
pub fn create_layout(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    (chunks[0], chunks[1])
}

/// Key hints for the focused stop
fn get_field_hints(kind: Option<FieldKind>) -> String {
    let edit = match kind {
        None => "Enter:submit",
        Some(FieldKind::Checkbox) => "Space/Enter:toggle",
        Some(FieldKind::SingleChoice(_)) => "←/→:choose",
        Some(FieldKind::LongText) => "Enter:newline",
        Some(_) => "type to edit",
    };
    format!("Tab:next  {edit}  {SUBMIT_SHORTCUT}:submit  Esc:quit")
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![];

    let total = app.state.session.registry().len();
    let position = if app.state.is_submit_focused() {
        " Submit ".to_string()
    } else {
        format!(" {}/{} ", app.state.active_form_field + 1, total)
    };
    spans.push(Span::styled(position, Style::default().fg(Color::Cyan)));

    let kind = app.state.active_field().map(|f| f.kind);
    spans.push(Span::styled(
        get_field_hints(kind),
        Style::default().fg(Color::Gray),
    ));

    if app.accepted().is_some() {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled("submitted", Style::default().fg(Color::Green)));
    }

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, area);
}
