//! UI module for rendering the TUI

mod components;
mod forms;
mod layout;

use crate::app::App;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let (main_area, status_area) = layout::create_layout(frame.area());

    forms::draw_feedback_form(frame, main_area, app);
    layout::draw_status_bar(frame, status_area, app);

    // Toast overlay on top of everything else
    if let Some(toast) = app.state.session.notifier().current() {
        components::render_toast(frame, main_area, toast);
    }
}
