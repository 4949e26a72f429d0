//! Toast queue backing the on-screen notifications

use super::traits::Notifier;
use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// Default time a toast stays visible
pub const DEFAULT_TOAST_DURATION: Duration = Duration::from_millis(5000);

/// Kind of toast, decides its color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

impl ToastKind {
    pub fn title(&self) -> &'static str {
        match self {
            ToastKind::Success => "Success",
            ToastKind::Error => "Error",
        }
    }
}

/// A single notification
#[derive(Debug, Clone)]
pub struct Toast {
    pub kind: ToastKind,
    pub message: String,
    pub created_at: Instant,
}

/// Ordered toasts, oldest first, dropped once older than `duration`
#[derive(Debug, Clone)]
pub struct ToastQueue {
    toasts: VecDeque<Toast>,
    duration: Duration,
}

impl Default for ToastQueue {
    fn default() -> Self {
        Self::new(DEFAULT_TOAST_DURATION)
    }
}

impl ToastQueue {
    pub fn new(duration: Duration) -> Self {
        Self {
            toasts: VecDeque::new(),
            duration,
        }
    }

    fn push_at(&mut self, kind: ToastKind, message: &str, now: Instant) {
        self.toasts.push_back(Toast {
            kind,
            message: message.to_string(),
            created_at: now,
        });
    }

    /// Drop every toast that has been visible for the full duration
    pub fn expire(&mut self, now: Instant) {
        let duration = self.duration;
        self.toasts
            .retain(|t| now.saturating_duration_since(t.created_at) < duration);
    }

    /// Newest toast still queued
    pub fn current(&self) -> Option<&Toast> {
        self.toasts.back()
    }

    /// Remove the newest toast (user dismissal)
    pub fn dismiss(&mut self) {
        self.toasts.pop_back();
    }

    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}

impl Notifier for ToastQueue {
    fn notify_success(&mut self, message: &str) {
        self.push_at(ToastKind::Success, message, Instant::now());
    }

    fn notify_error(&mut self, message: &str) {
        self.push_at(ToastKind::Error, message, Instant::now());
    }
}
