//! Hero banner rendering with an animated truck

use crate::state::SplashState;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Truck art, drawn left to right
const TRUCK: [&str; 4] = [
    " ______________________  ___   ",
    "|  ROADLINE LOGISTICS  ||_|_\\  ",
    "|______________________||____|_",
    "  (o)(o)          (o)    (o)   ",
];

/// Width of the truck art
pub const TRUCK_WIDTH: u16 = 31;

const TAGLINE: &str = "Moving India's freight, on time, every time.";

/// Distance the truck travels before parking in the middle of `area`
pub fn truck_travel(area: Rect) -> u16 {
    (area.width.saturating_sub(TRUCK_WIDTH)) / 2
}

/// Draw the hero banner
pub fn draw(frame: &mut Frame, area: Rect, splash_state: &SplashState) {
    let truck_height = TRUCK.len() as u16;
    let block_height = truck_height + 3; // truck, gap, tagline, gap
    let top = area.y + area.height.saturating_sub(block_height) / 2;

    let x = area.x + (splash_state.truck_x as u16).min(area.width.saturating_sub(1));
    let truck_area = Rect {
        x,
        y: top,
        width: TRUCK_WIDTH.min(area.width.saturating_sub(x - area.x)),
        height: truck_height.min(area.height),
    };

    let style = Style::default().fg(Color::Yellow);
    let lines: Vec<Line> = TRUCK
        .iter()
        .map(|l| Line::from(Span::styled(*l, style)))
        .collect();
    frame.render_widget(Paragraph::new(lines), truck_area);

    // Road under the wheels
    let road_y = top + truck_height;
    if road_y < area.y + area.height {
        let road = "─".repeat(area.width as usize);
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                road,
                Style::default().fg(Color::DarkGray),
            ))),
            Rect {
                x: area.x,
                y: road_y,
                width: area.width,
                height: 1,
            },
        );
    }

    if splash_state.show_tagline() {
        let tagline_y = road_y + 2;
        let tagline_x = area.x + area.width.saturating_sub(TAGLINE.len() as u16) / 2;
        if tagline_y < area.y + area.height {
            frame.render_widget(
                Paragraph::new(Line::from(Span::styled(
                    TAGLINE,
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                ))),
                Rect {
                    x: tagline_x,
                    y: tagline_y,
                    width: (TAGLINE.len() as u16).min(area.width),
                    height: 1,
                },
            );
        }
    }

    // "Press any key to skip" hint at bottom
    let hint = "Press any key to skip";
    if area.height >= 2 {
        let hint_area = Rect {
            x: area.x + (area.width.saturating_sub(hint.len() as u16)) / 2,
            y: area.y + area.height - 2,
            width: (hint.len() as u16).min(area.width),
            height: 1,
        };
        let hint_line = Line::from(Span::styled(hint, Style::default().fg(Color::DarkGray)));
        frame.render_widget(Paragraph::new(hint_line), hint_area);
    }
}
