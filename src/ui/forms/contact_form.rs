//! Contact form rendering

use super::field_renderer::{draw_field, draw_help_text, FieldLook};
use crate::app::App;
use crate::platform::SEND_SHORTCUT;
use crate::state::{ContactField, SubmissionPhase};
use crate::ui::components::{render_banner, render_primary_button, BUTTON_HEIGHT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Draw the contact form with its status banner
pub fn draw_contact(frame: &mut Frame, area: Rect, app: &App) {
    let contact = &app.contact;
    let form = contact.form();
    let submission = contact.submission();
    let enabled = !contact.is_locked();

    let block = Block::default()
        .title(" Get a Quote ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),             // Banner
            Constraint::Length(3),             // Name / Email
            Constraint::Length(3),             // Phone / Service
            Constraint::Min(5),                // Message
            Constraint::Length(BUTTON_HEIGHT), // Send
            Constraint::Length(1),             // Help text
        ])
        .margin(1)
        .split(area);

    draw_banner(frame, chunks[0], app);

    let pairs = [
        (chunks[1], ContactField::Name, ContactField::Email),
        (chunks[2], ContactField::Phone, ContactField::Service),
    ];
    for (row, left, right) in pairs {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(row);
        for (col, field) in [(cols[0], left), (cols[1], right)] {
            draw_field(
                frame,
                col,
                form.field(field),
                FieldLook {
                    is_active: form.active_contact_field() == Some(field),
                    is_enabled: enabled,
                    error: contact.errors().get(field),
                },
            );
        }
    }

    draw_field(
        frame,
        chunks[3],
        form.field(ContactField::Message),
        FieldLook {
            is_active: form.active_contact_field() == Some(ContactField::Message),
            is_enabled: enabled,
            error: contact.errors().get(ContactField::Message),
        },
    );

    let button_area = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(24), Constraint::Min(0)])
        .split(chunks[4])[1];
    render_primary_button(
        frame,
        button_area,
        submission.button_label(),
        form.is_send_row_active(),
        enabled,
    );

    draw_help_text(
        frame,
        chunks[5],
        &[
            ("Tab", "next"),
            ("←/→", "service"),
            (SEND_SHORTCUT, "send"),
            ("Esc", "back"),
        ],
    );
}

fn draw_banner(frame: &mut Frame, area: Rect, app: &App) {
    let submission = app.contact.submission();
    match submission.phase() {
        SubmissionPhase::Succeeded => {
            let at = submission
                .submitted_at()
                .map(|t| format!(" (sent {})", t.format("%H:%M")))
                .unwrap_or_default();
            render_banner(
                frame,
                area,
                "✓",
                &format!("Thank you! Your message has been sent. We'll get back to you soon.{at}"),
                Color::Green,
            );
        }
        SubmissionPhase::Failed => {
            let message = submission.error().unwrap_or_default();
            render_banner(
                frame,
                area,
                "✗",
                &format!("{message}  (Ctrl+D: dismiss)"),
                Color::Red,
            );
        }
        SubmissionPhase::Submitting => {
            render_banner(frame, area, "…", "Sending your inquiry...", Color::Yellow);
        }
        SubmissionPhase::Idle => {
            let intro = Paragraph::new(vec![
                Line::from("Tell us what you need moved. Fields marked * are required."),
                Line::from("We usually reply within one business day."),
            ])
            .style(Style::default().fg(Color::Gray));
            frame.render_widget(intro, area);
        }
    }
}
