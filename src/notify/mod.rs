//! Notification module: success and error toasts

mod toast;
mod traits;

pub use toast::{Toast, ToastKind, ToastQueue, DEFAULT_TOAST_DURATION};
pub use traits::Notifier;

#[cfg(test)]
pub use traits::MockNotifier;
