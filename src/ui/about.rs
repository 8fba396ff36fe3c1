//! About view

use super::components::wrap_text;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

const ABOUT: &str = "Roadline started with three trucks and a promise to deliver on the day we said we would. \
Two decades on, we run a modern fleet with GPS tracking on every vehicle, our own warehouses in major \
industrial hubs and a cold chain network trusted by food and pharma brands.\n\n\
Every consignment gets a named coordinator who answers the phone. No call centres, no runaround.";

const CONTACT_LINES: &[(&str, &str)] = &[
    ("Phone", "+91 92393 80072"),
    ("Email", "info@roadline.in"),
    ("Hours", "Mon-Sat, 9:00-19:00 IST"),
];

/// Draw the about view
pub fn draw(frame: &mut Frame, area: Rect) {
    let width = area.width.saturating_sub(6) as usize;
    let mut lines = vec![
        Line::from(Span::styled(
            "About Roadline",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];
    lines.extend(wrap_text(ABOUT, width.max(20)).into_iter().map(Line::from));
    lines.push(Line::from(""));
    for (label, value) in CONTACT_LINES {
        lines.push(Line::from(vec![
            Span::styled(format!("{label:>6}: "), Style::default().fg(Color::DarkGray)),
            Span::styled(*value, Style::default().fg(Color::Cyan)),
        ]));
    }

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .title(" About ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .padding(ratatui::widgets::Padding::horizontal(2)),
    );
    frame.render_widget(paragraph, area);
}
