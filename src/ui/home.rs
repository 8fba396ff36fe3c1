//! Home view: hero tagline, headline numbers and a call to action

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Headline figures shown under the hero
const HIGHLIGHTS: &[(&str, &str)] = &[
    ("250+", "Trucks on the road"),
    ("18", "States covered"),
    ("99.2%", "On-time delivery"),
    ("24/7", "Shipment support"),
];

/// Draw the home view
pub fn draw(frame: &mut Frame, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(7), // Hero
            Constraint::Length(5), // Highlights
            Constraint::Min(0),    // CTA
        ])
        .margin(1)
        .split(area);

    let hero = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(
            "Road Freight You Can Count On",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from("Full-truckload, part-load and temperature-controlled transport"),
        Line::from("from a fleet that knows every highway between the ports and your door."),
    ])
    .alignment(Alignment::Center);
    frame.render_widget(hero, chunks[0]);

    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(
            HIGHLIGHTS
                .iter()
                .map(|_| Constraint::Ratio(1, HIGHLIGHTS.len() as u32)),
        )
        .split(chunks[1]);
    for ((figure, caption), col) in HIGHLIGHTS.iter().zip(cols.iter()) {
        let card = Paragraph::new(vec![
            Line::from(Span::styled(
                *figure,
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(*caption, Style::default().fg(Color::Gray))),
        ])
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        );
        frame.render_widget(card, *col);
    }

    let cta = Paragraph::new(vec![
        Line::from(""),
        Line::from(vec![
            Span::raw("Ready to ship? Press "),
            Span::styled("c", Style::default().fg(Color::Cyan)),
            Span::raw(" for a free quote or "),
            Span::styled("2", Style::default().fg(Color::Cyan)),
            Span::raw(" to browse our services."),
        ]),
    ])
    .alignment(Alignment::Center)
    .style(Style::default().fg(Color::Gray));
    frame.render_widget(cta, chunks[2]);
}
