//! UI module for rendering the TUI

mod about;
mod components;
mod forms;
mod home;
mod layout;
mod services;
pub mod splash;

use crate::app::App;
use crate::state::View;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    if let Some(splash_state) = &app.splash_state {
        splash::draw(frame, area, splash_state);
        return;
    }

    let (nav_area, main_area) = layout::create_layout(area);
    layout::draw_nav_bar(frame, nav_area, app);

    match app.state.current_view {
        View::Splash | View::Home => home::draw(frame, main_area),
        View::Services => services::draw(frame, main_area, app),
        View::About => about::draw(frame, main_area),
        View::Contact => forms::draw_contact(frame, main_area, app),
    }

    layout::draw_status_bar(frame, app);

    // Modal errors go on top of everything
    if let Some(message) = app.state.current_error() {
        components::render_error_dialog(frame, message);
    }
}
