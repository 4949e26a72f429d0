//! Field rendering utilities for forms

use crate::state::forms::{FieldDefinition, FieldKind, InputValue};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Rows a field occupies on screen
pub fn field_height(field: &FieldDefinition) -> u16 {
    match field.kind {
        FieldKind::Checkbox => 1,
        FieldKind::LongText => 6,
        _ => 3,
    }
}

/// Title shown on the field's border; required fields get a marker
fn field_title(field: &FieldDefinition) -> String {
    if field.required {
        format!(" {} * ", field.label)
    } else {
        format!(" {} ", field.label)
    }
}

/// Text shown for a choice field
fn choice_display(value: &str, is_active: bool) -> String {
    let shown = if value.is_empty() { "Select" } else { value };
    if is_active {
        format!("‹ {shown} ›")
    } else {
        shown.to_string()
    }
}

/// Draw a form field
pub fn draw_field(
    frame: &mut Frame,
    area: Rect,
    field: &FieldDefinition,
    value: &InputValue,
    is_active: bool,
    has_error: bool,
) {
    let style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    if field.kind.is_checkbox() {
        draw_checkbox(frame, area, field, value, style, has_error);
        return;
    }

    let border_style = if has_error {
        Style::default().fg(Color::Red)
    } else {
        style
    };

    let raw = value.display_value();
    let display_value = match field.kind {
        FieldKind::SingleChoice(_) => choice_display(&raw, is_active),
        _ if raw.is_empty() && !is_active => "(empty)".to_string(),
        _ => raw,
    };

    // Choice fields are not typed into, so they get no cursor
    let cursor = if is_active && !matches!(field.kind, FieldKind::SingleChoice(_)) {
        "▌"
    } else {
        ""
    };

    let content = if field.kind.is_multiline() {
        let mut lines: Vec<Line> = display_value
            .lines()
            .map(|l| Line::from(l.to_string()))
            .collect();
        // `lines()` drops a trailing empty line the cursor must sit on
        if display_value.ends_with('\n') {
            lines.push(Line::from(""));
        }
        if is_active {
            if let Some(last) = lines.last_mut() {
                last.spans
                    .push(Span::styled(cursor, Style::default().fg(Color::Cyan)));
            } else {
                lines.push(Line::from(Span::styled(
                    cursor,
                    Style::default().fg(Color::Cyan),
                )));
            }
        }
        Paragraph::new(lines)
    } else {
        Paragraph::new(Line::from(vec![
            Span::styled(display_value, style),
            Span::styled(cursor, Style::default().fg(Color::Cyan)),
        ]))
    };

    let block = Block::default()
        .title(field_title(field))
        .borders(Borders::ALL)
        .border_style(border_style);

    frame.render_widget(content.wrap(Wrap { trim: false }).block(block), area);
}

fn draw_checkbox(
    frame: &mut Frame,
    area: Rect,
    field: &FieldDefinition,
    value: &InputValue,
    style: Style,
    has_error: bool,
) {
    let mark = if value.as_bool().unwrap_or(false) {
        "[x]"
    } else {
        "[ ]"
    };
    let label_style = if has_error {
        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
    } else {
        style
    };
    let line = Line::from(vec![
        Span::styled(format!(" {mark} "), style),
        Span::styled(field_title(field).trim().to_string(), label_style),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}
