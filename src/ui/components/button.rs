//! Button component for TUI

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Button height in rows (top border + content + bottom border)
pub const BUTTON_HEIGHT: u16 = 3;

/// Render a nav tab: hotkey in front of the title, underlined when active
pub fn render_nav_button(
    frame: &mut Frame,
    area: Rect,
    hotkey: Option<char>,
    title: &str,
    is_active: bool,
) {
    let accent = if is_active { Color::Cyan } else { Color::DarkGray };
    let title_style = if is_active {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
    } else {
        Style::default().fg(Color::Gray)
    };

    let mut spans = Vec::with_capacity(3);
    if let Some(key) = hotkey {
        spans.push(Span::styled(
            format!("{key} "),
            Style::default().fg(Color::Yellow),
        ));
    }
    spans.push(Span::styled(title, title_style));

    let paragraph = Paragraph::new(Line::from(spans)).alignment(Alignment::Center);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(accent));

    frame.render_widget(paragraph.block(block), area);
}

/// Render the form's call-to-action button, filled when focused
pub fn render_primary_button(
    frame: &mut Frame,
    area: Rect,
    content: &str,
    is_selected: bool,
    is_enabled: bool,
) {
    let (text_style, border_style) = match (is_enabled, is_selected) {
        (false, _) => (
            Style::default()
                .fg(Color::Gray)
                .add_modifier(Modifier::ITALIC),
            Style::default().fg(Color::DarkGray),
        ),
        (true, true) => (
            Style::default()
                .fg(Color::Black)
                .bg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
            Style::default().fg(Color::Yellow),
        ),
        (true, false) => (
            Style::default().fg(Color::Yellow),
            Style::default().fg(Color::Yellow),
        ),
    };

    let paragraph = Paragraph::new(content.to_string())
        .alignment(Alignment::Center)
        .style(text_style);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style);

    frame.render_widget(paragraph.block(block), area);
}
