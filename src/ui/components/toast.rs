//! Toast overlay component

use crate::notify::{Toast, ToastKind};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Maximum width of a toast box
const TOAST_MAX_WIDTH: u16 = 44;

fn toast_color(kind: ToastKind) -> Color {
    match kind {
        ToastKind::Success => Color::Green,
        ToastKind::Error => Color::Red,
    }
}

/// Render a toast in the top-right corner of `area`
pub fn render_toast(frame: &mut Frame, area: Rect, toast: &Toast) {
    let padding = 2u16; // 1 char padding on each side
    let max_line_width = TOAST_MAX_WIDTH.saturating_sub(padding + 2) as usize;

    let wrapped_lines = wrap_text(&toast.message, max_line_width);
    let title = toast.kind.title();

    let content_width = wrapped_lines
        .iter()
        .map(|l| l.chars().count())
        .max()
        .unwrap_or(0)
        .max(title.len()) as u16;
    let width = (content_width + padding + 2)
        .min(TOAST_MAX_WIDTH)
        .min(area.width);
    // Height: title + message lines + borders
    let height = (1 + wrapped_lines.len() as u16 + 2).min(area.height);

    let toast_area = Rect {
        x: area.x + area.width.saturating_sub(width + 1),
        y: area.y + 1,
        width,
        height,
    };

    // Clear the area behind the toast
    frame.render_widget(Clear, toast_area);

    let color = toast_color(toast.kind);
    let mut content = vec![Line::from(Span::styled(
        format!(" {title}"),
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    ))];
    for line in wrapped_lines {
        content.push(Line::from(format!(" {line}")));
    }

    let paragraph = Paragraph::new(content).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(color))
            .style(Style::default().bg(Color::Black)),
    );

    frame.render_widget(paragraph, toast_area);
}

/// Wrap text to fit within a maximum width
fn wrap_text(text: &str, max_width: usize) -> Vec<String> {
    let mut lines = Vec::new();

    for paragraph in text.split('\n') {
        if paragraph.is_empty() {
            lines.push(String::new());
            continue;
        }

        let mut current_line = String::new();
        for word in paragraph.split_whitespace() {
            if current_line.len() + word.len() + 1 > max_width && !current_line.is_empty() {
                lines.push(current_line);
                current_line = String::new();
            }
            if !current_line.is_empty() {
                current_line.push(' ');
            }
            current_line.push_str(word);
        }
        if !current_line.is_empty() {
            lines.push(current_line);
        }
    }

    if lines.is_empty() {
        lines.push(String::new());
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};
    use std::time::Instant;

    #[test]
    fn test_wrap_short_text_is_single_line() {
        assert_eq!(
            wrap_text("Rating must be between 1 and 5.", 40),
            vec!["Rating must be between 1 and 5."]
        );
    }

    #[test]
    fn test_wrap_breaks_on_words() {
        assert_eq!(
            wrap_text("You must accept the terms and conditions.", 20),
            vec!["You must accept the", "terms and", "conditions."]
        );
    }

    #[test]
    fn test_wrap_empty_text() {
        assert_eq!(wrap_text("", 10), vec![String::new()]);
    }

    #[test]
    fn test_render_toast_shows_message() {
        let backend = TestBackend::new(60, 10);
        let mut terminal = Terminal::new(backend).unwrap();
        let toast = Toast {
            kind: ToastKind::Error,
            message: "Please enter a valid phone number.".to_string(),
            created_at: Instant::now(),
        };

        terminal
            .draw(|frame| render_toast(frame, frame.area(), &toast))
            .unwrap();

        let buffer = terminal.backend().buffer();
        let rendered: String = buffer.content().iter().map(|c| c.symbol()).collect();
        assert!(rendered.contains("Error"));
        assert!(rendered.contains("Please enter a valid phone number."));
    }
}
