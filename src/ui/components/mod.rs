//! Reusable UI components

mod button;
mod dialog;

pub use button::{render_nav_button, render_primary_button, BUTTON_HEIGHT};
pub use dialog::{render_banner, render_error_dialog, wrap_text};
