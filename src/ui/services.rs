//! Services showcase

use crate::app::App;
use crate::state::{service_blurb, SERVICE_CATALOG};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

/// Draw the services list with a detail card for the selection
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(30), Constraint::Min(0)])
        .split(area);

    let items: Vec<ListItem> = SERVICE_CATALOG
        .iter()
        .map(|s| ListItem::new(Line::from(format!(" {}", s.label))))
        .collect();
    let list = List::new(items)
        .block(
            Block::default()
                .title(" Our Services ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .highlight_style(
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        );
    let mut list_state = ListState::default().with_selected(Some(app.state.selected_service));
    frame.render_stateful_widget(list, chunks[0], &mut list_state);

    let Some(service) = SERVICE_CATALOG.get(app.state.selected_service) else {
        return;
    };
    let detail = Paragraph::new(vec![
        Line::from(Span::styled(
            service.label,
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(service_blurb(service.value)),
        Line::from(""),
        Line::from(vec![
            Span::raw("Press "),
            Span::styled("Enter", Style::default().fg(Color::Cyan)),
            Span::raw(" to request a quote for this service."),
        ]),
    ])
    .wrap(Wrap { trim: true })
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    frame.render_widget(detail, chunks[1]);
}
