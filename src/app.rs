//! Application state and core logic

use crate::config::FormConfig;
use crate::state::forms::FieldKind;
use crate::state::AppState;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::time::Instant;

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App instance
    pub fn new(config: &FormConfig) -> Self {
        Self {
            state: AppState::with_toast_duration(config.toast_duration()),
            quit: false,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Advance time-based state (toast expiry)
    pub fn tick(&mut self) {
        self.state.tick(Instant::now());
    }

    /// Handle a key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        // Esc first dismisses a visible toast, then quits
        if key.code == KeyCode::Esc {
            if self.state.session.notifier().current().is_some() {
                self.state.session.notifier_mut().dismiss();
            } else {
                self.quit = true;
            }
            return;
        }

        match key.code {
            // Submit shortcut (works from anywhere)
            KeyCode::Char('s') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.submit();
            }
            KeyCode::Tab | KeyCode::Down => self.state.next_form_field(),
            KeyCode::BackTab | KeyCode::Up => self.state.prev_form_field(),
            KeyCode::Left => self.state.cycle_choice(false),
            KeyCode::Right => self.state.cycle_choice(true),
            KeyCode::Enter => self.handle_enter(),
            KeyCode::Backspace => self.state.form_backspace(),
            KeyCode::Char(c)
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                self.state.form_input_char(c)
            }
            _ => {}
        }
    }

    fn handle_enter(&mut self) {
        if self.state.is_submit_focused() {
            self.submit();
            return;
        }
        match self.state.active_field().map(|f| f.kind) {
            Some(FieldKind::Checkbox) => self.state.toggle_checkbox(),
            Some(FieldKind::LongText) => {
                self.state.form_newline();
            }
            _ => self.state.next_form_field(),
        }
    }

    fn submit(&mut self) {
        if self.state.submit() {
            tracing::info!("Submission accepted");
        }
    }

    /// Snapshot to hand off once the app exits
    pub fn accepted(&self) -> Option<&crate::state::forms::FormState> {
        self.state.accepted.as_ref()
    }
}
