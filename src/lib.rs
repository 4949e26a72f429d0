//! Feedback Form - terminal form with ordered input validation
//!
//! The form domain (field registry, validation engine, form session) lives in
//! [`state::forms`]; [`app`] and [`ui`] put a Ratatui front-end on top of it
//! and [`notify`] turns verdicts into toasts.

pub mod app;
pub mod config;
pub mod notify;
mod platform;
pub mod state;
pub mod ui;
