//! Field rendering utilities for forms

use crate::state::FormField;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// How a field should look this frame
#[derive(Debug, Clone, Copy, Default)]
pub struct FieldLook<'a> {
    pub is_active: bool,
    pub is_enabled: bool,
    /// Validation message shown on the bottom border
    pub error: Option<&'a str>,
}

fn border_color(look: &FieldLook) -> Color {
    if look.error.is_some() {
        Color::Red
    } else if !look.is_enabled {
        Color::DarkGray
    } else if look.is_active {
        Color::Cyan
    } else {
        Color::Gray
    }
}

/// Draw a form field using FormField from the domain layer
pub fn draw_field(frame: &mut Frame, area: Rect, field: &FormField, look: FieldLook) {
    let text_style = if look.is_enabled {
        Style::default().fg(Color::White)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let show_cursor = look.is_active && look.is_enabled;
    let cursor = if show_cursor { "▌" } else { "" };

    let display_value = field.display_value();
    let display_str = if display_value.is_empty() && !look.is_active {
        "(empty)".to_string()
    } else {
        display_value
    };

    let content = if field.is_multiline {
        let mut lines: Vec<Line> = display_str
            .lines()
            .map(|l| Line::from(Span::styled(l.to_string(), text_style)))
            .collect();
        // `lines()` drops a trailing newline; keep the cursor on the fresh line
        if display_str.ends_with('\n') {
            lines.push(Line::from(""));
        }
        if show_cursor {
            match lines.last_mut() {
                Some(last) => last
                    .spans
                    .push(Span::styled(cursor, Style::default().fg(Color::Cyan))),
                None => lines.push(Line::from(Span::styled(
                    cursor,
                    Style::default().fg(Color::Cyan),
                ))),
            }
        }
        Paragraph::new(lines)
    } else {
        Paragraph::new(Line::from(vec![
            Span::styled(display_str, text_style),
            Span::styled(cursor, Style::default().fg(Color::Cyan)),
        ]))
    };

    let title_style = if look.is_active {
        Style::default()
            .fg(border_color(&look))
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(border_color(&look))
    };

    let mut block = Block::default()
        .title(Span::styled(format!(" {} ", field.label), title_style))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color(&look)));
    if let Some(error) = look.error {
        block = block.title_bottom(Span::styled(
            format!(" {error} "),
            Style::default().fg(Color::Red),
        ));
    }

    frame.render_widget(content.wrap(Wrap { trim: false }).block(block), area);
}

/// Draw the help line under a form
pub fn draw_help_text(frame: &mut Frame, area: Rect, entries: &[(&str, &str)]) {
    let mut spans = Vec::with_capacity(entries.len() * 2);
    for (key, action) in entries {
        spans.push(Span::styled(*key, Style::default().fg(Color::Cyan)));
        spans.push(Span::raw(format!(": {action}  ")));
    }
    let help = Paragraph::new(Line::from(spans)).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(help, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_wins_border_color() {
        let look = FieldLook {
            is_active: true,
            is_enabled: true,
            error: Some("Name is required"),
        };
        assert_eq!(border_color(&look), Color::Red);
    }

    #[test]
    fn test_disabled_border_is_dim() {
        let look = FieldLook {
            is_active: true,
            is_enabled: false,
            error: None,
        };
        assert_eq!(border_color(&look), Color::DarkGray);
    }

    #[test]
    fn test_active_border_is_cyan() {
        let look = FieldLook {
            is_active: true,
            is_enabled: true,
            error: None,
        };
        assert_eq!(border_color(&look), Color::Cyan);
    }
}
