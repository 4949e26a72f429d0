//! Trait abstraction for user notifications to enable mocking in tests

/// Receives the outcome of a submission. Fire-and-forget.
#[cfg_attr(test, mockall::automock)]
pub trait Notifier {
    /// Report a successful submission
    fn notify_success(&mut self, message: &str);

    /// Report a rejected submission
    fn notify_error(&mut self, message: &str);
}
