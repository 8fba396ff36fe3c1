//! Layout components (nav bar, status bar)

use super::components::{render_nav_button, BUTTON_HEIGHT};
use crate::app::App;
use crate::platform::SEND_SHORTCUT;
use crate::state::View;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Width of one nav button
const NAV_BUTTON_WIDTH: u16 = 16;

/// Create the main layout: nav bar on top, content below, status line at the bottom
pub fn create_layout(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(BUTTON_HEIGHT), // Nav bar
            Constraint::Min(0),                // Content
            Constraint::Length(1),             // Status bar
        ])
        .split(area);

    (chunks[0], chunks[1])
}

/// Draw the nav bar with the brand on the left and boxed view buttons
pub fn draw_nav_bar(frame: &mut Frame, area: Rect, app: &App) {
    let mut constraints = vec![Constraint::Min(12)];
    constraints.extend(View::NAV.iter().map(|_| Constraint::Length(NAV_BUTTON_WIDTH)));

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(area);

    let brand = Paragraph::new(vec![
        Line::from(""),
        Line::from(vec![
            Span::styled(" ▣ ROADLINE", Style::default().fg(Color::Yellow)),
            Span::styled(" logistics", Style::default().fg(Color::DarkGray)),
        ]),
    ]);
    frame.render_widget(brand, chunks[0]);

    for (idx, view) in View::NAV.iter().enumerate() {
        render_nav_button(
            frame,
            chunks[idx + 1],
            view.hotkey(),
            view.title(),
            app.state.current_view == *view,
        );
    }
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let status_area = Rect {
        x: 0,
        y: area.height.saturating_sub(1),
        width: area.width,
        height: 1,
    };

    let mut spans = vec![];

    // Relay target
    spans.push(Span::styled(" ⇄ ", Style::default().fg(Color::Green)));
    spans.push(Span::styled(
        app.relay_endpoint.as_str(),
        Style::default().fg(Color::Gray),
    ));
    spans.push(Span::raw(" | "));

    // View-specific hints
    let hints = get_view_hints(&app.state.current_view, app.contact.is_locked());
    spans.push(Span::styled(hints, Style::default().fg(Color::DarkGray)));

    let quit_hint = " ^C:quit ";

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, status_area);

    let quit_area = Rect {
        x: area.width.saturating_sub(quit_hint.len() as u16),
        y: area.height.saturating_sub(1),
        width: quit_hint.len() as u16,
        height: 1,
    };
    let quit_widget =
        Paragraph::new(quit_hint).style(Style::default().bg(Color::DarkGray).fg(Color::Gray));
    frame.render_widget(quit_widget, quit_area);
}

/// Get keyboard hints for the current view
fn get_view_hints(view: &View, sending: bool) -> String {
    match view {
        View::Splash => "Press any key to skip".to_string(),
        View::Home => "1-4:nav  Tab:next view  c:contact  q:quit".to_string(),
        View::Services => "j/k:nav  Enter:get a quote  Tab:next view  q:quit".to_string(),
        View::About => "1-4:nav  Tab:next view  q:quit".to_string(),
        View::Contact if sending => "Sending inquiry...".to_string(),
        View::Contact => format!("Tab:next  ←/→:service  {SEND_SHORTCUT}:send  Esc:back"),
    }
}
