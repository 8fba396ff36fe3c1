//! Dialog components for TUI

mod base;
mod error_dialog;

pub use base::{render_banner, wrap_text};
pub use error_dialog::render_error_dialog;
