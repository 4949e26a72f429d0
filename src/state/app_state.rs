//! Application state definitions

use super::forms::{FieldDefinition, FieldKind, FieldRegistry, FormSession, FormState, InputValue};
use crate::notify::ToastQueue;
use std::time::{Duration, Instant};

/// UI state around one form session
#[derive(Debug)]
pub struct AppState {
    pub session: FormSession<ToastQueue>,
    /// Focused stop: a field index, or `registry.len()` for the Submit button
    pub active_form_field: usize,
    /// Snapshot of the last accepted submission
    pub accepted: Option<FormState>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(FieldRegistry::feedback_form(), ToastQueue::default())
    }
}

impl AppState {
    pub fn new(registry: FieldRegistry, toasts: ToastQueue) -> Self {
        Self {
            session: FormSession::new(registry, toasts),
            active_form_field: 0,
            accepted: None,
        }
    }

    pub fn with_toast_duration(duration: Duration) -> Self {
        Self::new(FieldRegistry::feedback_form(), ToastQueue::new(duration))
    }

    /// Number of focus stops (every field plus the Submit button)
    pub fn form_field_count(&self) -> usize {
        self.session.registry().len() + 1
    }

    /// Move to next form field
    pub fn next_form_field(&mut self) {
        self.active_form_field = (self.active_form_field + 1) % self.form_field_count();
    }

    /// Move to previous form field
    pub fn prev_form_field(&mut self) {
        if self.active_form_field == 0 {
            self.active_form_field = self.form_field_count() - 1;
        } else {
            self.active_form_field -= 1;
        }
    }

    pub fn is_submit_focused(&self) -> bool {
        self.active_form_field == self.session.registry().len()
    }

    /// Definition of the focused field (None on the Submit button)
    pub fn active_field(&self) -> Option<&'static FieldDefinition> {
        self.session
            .registry()
            .fields()
            .get(self.active_form_field)
    }

    fn apply(&mut self, key: &str, value: impl Into<InputValue>) {
        if let Err(e) = self.session.apply_edit(key, value) {
            tracing::warn!("Rejected edit: {e}");
        }
    }

    fn edit_text(&mut self, edit: impl FnOnce(&mut String)) {
        let Some(field) = self.active_field() else {
            return;
        };
        let mut text = self
            .session
            .value(field.key)
            .map(InputValue::display_value)
            .unwrap_or_default();
        edit(&mut text);
        self.apply(field.key, text);
    }

    /// Handle character input in form
    pub fn form_input_char(&mut self, c: char) {
        let Some(field) = self.active_field() else {
            return;
        };
        match field.kind {
            FieldKind::Text | FieldKind::Email | FieldKind::LongText => {
                self.edit_text(|s| s.push(c))
            }
            // Number inputs only take characters that can form a number
            FieldKind::Number => {
                if c.is_ascii_digit() || c == '.' || c == '-' {
                    self.edit_text(|s| s.push(c));
                }
            }
            FieldKind::Checkbox if c == ' ' => self.toggle_checkbox(),
            FieldKind::Checkbox | FieldKind::SingleChoice(_) => {}
        }
    }

    /// Handle backspace in form
    pub fn form_backspace(&mut self) {
        match self.active_field().map(|f| f.kind) {
            Some(FieldKind::Checkbox) | None => {}
            Some(FieldKind::SingleChoice(_)) => {
                if let Some(field) = self.active_field() {
                    self.apply(field.key, "");
                }
            }
            Some(_) => self.edit_text(|s| {
                s.pop();
            }),
        }
    }

    /// Insert a line break; only multiline fields take one
    pub fn form_newline(&mut self) -> bool {
        if self.active_field().is_some_and(|f| f.kind.is_multiline()) {
            self.edit_text(|s| s.push('\n'));
            true
        } else {
            false
        }
    }

    pub fn toggle_checkbox(&mut self) {
        let Some(field) = self.active_field().filter(|f| f.kind.is_checkbox()) else {
            return;
        };
        let checked = self
            .session
            .value(field.key)
            .and_then(InputValue::as_bool)
            .unwrap_or(false);
        self.apply(field.key, !checked);
    }

    /// Step through a choice field's options; the empty "Select" state sits
    /// between the last and the first option.
    pub fn cycle_choice(&mut self, forward: bool) {
        let Some(field) = self.active_field() else {
            return;
        };
        let FieldKind::SingleChoice(options) = field.kind else {
            return;
        };
        let current = self
            .session
            .value(field.key)
            .and_then(InputValue::as_text)
            .and_then(|v| options.iter().position(|o| *o == v));

        // Slot 0 is "Select", options follow
        let slots = options.len() + 1;
        let slot = current.map_or(0, |i| i + 1);
        let next = if forward {
            (slot + 1) % slots
        } else {
            (slot + slots - 1) % slots
        };
        let value = if next == 0 { "" } else { options[next - 1] };
        self.apply(field.key, value);
    }

    /// Submit the form, keeping the snapshot when accepted.
    /// On rejection, any earlier snapshot is dropped and focus jumps to the
    /// failing field.
    pub fn submit(&mut self) -> bool {
        match self.session.submit() {
            Some(snapshot) => {
                self.accepted = Some(snapshot);
                true
            }
            None => {
                self.accepted = None;
                if let Some(index) = self
                    .session
                    .last_failure()
                    .and_then(|f| self.session.registry().position(f.field_key))
                {
                    self.active_form_field = index;
                }
                false
            }
        }
    }

    /// Expire toasts that have been shown long enough
    pub fn tick(&mut self, now: Instant) {
        self.session.notifier_mut().expire(now);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notify::ToastKind;
    use pretty_assertions::assert_eq;

    fn focus(state: &mut AppState, key: &str) {
        state.active_form_field = state.session.registry().position(key).unwrap();
    }

    fn type_str(state: &mut AppState, text: &str) {
        for c in text.chars() {
            state.form_input_char(c);
        }
    }

    fn text_of(state: &AppState, key: &str) -> String {
        state.session.value(key).unwrap().display_value()
    }

    mod navigation {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_field_count_includes_submit_button() {
            let state = AppState::default();
            assert_eq!(state.form_field_count(), 15);
        }

        #[test]
        fn test_next_wraps_after_submit() {
            let mut state = AppState::default();
            state.active_form_field = 14;
            assert!(state.is_submit_focused());
            assert!(state.active_field().is_none());
            state.next_form_field();
            assert_eq!(state.active_form_field, 0);
        }

        #[test]
        fn test_prev_wraps_to_submit() {
            let mut state = AppState::default();
            state.prev_form_field();
            assert!(state.is_submit_focused());
        }
    }

    mod editing {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_typing_into_text_field() {
            let mut state = AppState::default();
            type_str(&mut state, "Ana");
            assert_eq!(text_of(&state, "name"), "Ana");
            state.form_backspace();
            assert_eq!(text_of(&state, "name"), "An");
        }

        #[test]
        fn test_number_field_filters_characters() {
            let mut state = AppState::default();
            focus(&mut state, "age");
            type_str(&mut state, "3a0 ");
            assert_eq!(text_of(&state, "age"), "30");
        }

        #[test]
        fn test_newline_only_in_long_text() {
            let mut state = AppState::default();
            assert!(!state.form_newline());
            focus(&mut state, "feedback");
            type_str(&mut state, "Good");
            assert!(state.form_newline());
            type_str(&mut state, "Fast");
            assert_eq!(text_of(&state, "feedback"), "Good\nFast");
        }

        #[test]
        fn test_space_toggles_checkbox() {
            let mut state = AppState::default();
            focus(&mut state, "termsAccepted");
            state.form_input_char(' ');
            assert_eq!(
                state.session.value("termsAccepted"),
                Some(&InputValue::Bool(true))
            );
            state.toggle_checkbox();
            assert_eq!(
                state.session.value("termsAccepted"),
                Some(&InputValue::Bool(false))
            );
        }

        #[test]
        fn test_toggle_ignored_outside_checkbox() {
            let mut state = AppState::default();
            state.toggle_checkbox();
            assert_eq!(text_of(&state, "name"), "");
        }

        #[test]
        fn test_cycle_choice_forward_and_back() {
            let mut state = AppState::default();
            focus(&mut state, "gender");
            state.cycle_choice(true);
            assert_eq!(text_of(&state, "gender"), "male");
            state.cycle_choice(true);
            state.cycle_choice(true);
            assert_eq!(text_of(&state, "gender"), "other");
            state.cycle_choice(true);
            assert_eq!(text_of(&state, "gender"), "");
            state.cycle_choice(false);
            assert_eq!(text_of(&state, "gender"), "other");
        }

        #[test]
        fn test_backspace_clears_choice() {
            let mut state = AppState::default();
            focus(&mut state, "gender");
            state.cycle_choice(true);
            state.form_backspace();
            assert_eq!(text_of(&state, "gender"), "");
        }
    }

    mod submitting {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_rejection_focuses_failing_field() {
            let mut state = AppState::default();
            state.active_form_field = 14;
            assert!(!state.submit());
            assert_eq!(state.active_form_field, 0);
            assert!(state.accepted.is_none());

            let toast = state.session.notifier().current().unwrap();
            assert_eq!(toast.kind, ToastKind::Error);
            assert_eq!(toast.message, "Please fill all required fields.");
        }

        fn fill_valid(state: &mut AppState) {
            for (key, value) in [
                ("name", "Ana"),
                ("email", "ana@x.com"),
                ("feedback", "Great"),
                ("age", "30"),
                ("gender", "female"),
                ("country", "Chile"),
                ("rating", "5"),
                ("address", "1 Main St"),
                ("phone", "5551234567"),
                ("occupation", "Engineer"),
            ] {
                state.session.apply_edit(key, value).unwrap();
            }
            state.session.apply_edit("termsAccepted", true).unwrap();
        }

        fn focus_index(state: &AppState, key: &str) -> usize {
            state.session.registry().position(key).unwrap()
        }

        #[test]
        fn test_acceptance_keeps_snapshot() {
            let mut state = AppState::default();
            fill_valid(&mut state);

            assert!(state.submit());
            assert_eq!(state.accepted.as_ref(), Some(state.session.state()));
        }

        #[test]
        fn test_rejection_clears_previous_snapshot() {
            let mut state = AppState::default();
            fill_valid(&mut state);
            assert!(state.submit());
            assert!(state.accepted.is_some());

            state.session.apply_edit("phone", "555-1234").unwrap();
            assert!(!state.submit());
            assert!(state.accepted.is_none());
            assert_eq!(state.active_form_field, focus_index(&state, "phone"));
        }

        #[test]
        fn test_tick_expires_toasts() {
            let mut state = AppState::with_toast_duration(Duration::from_millis(10));
            state.submit();
            assert!(!state.session.notifier().is_empty());
            state.tick(Instant::now() + Duration::from_secs(1));
            assert!(state.session.notifier().is_empty());
        }
    }
}
