//! Form rendering module
//!
//! - `field_renderer`: Field rendering utilities
//! - `feedback_form`: The feedback form body

mod feedback_form;
mod field_renderer;

pub use feedback_form::draw_feedback_form;
