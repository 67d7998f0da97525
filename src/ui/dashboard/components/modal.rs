//! Action failure notice component
//!
//! Renders a blocking overlay when a status update is refused

use super::super::state::DashboardState;
use super::super::utils::shorten_id;
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, BorderType, Borders, Clear, Padding, Paragraph, Wrap};

/// Render the failure notice overlay, if one is raised. It stays up until
/// the operator presses any key.
pub fn render_action_notice(f: &mut Frame, state: &DashboardState) {
    let Some(notice) = state.modal() else {
        return;
    };

    let area = centered_rect(50, 30, f.area());
    f.render_widget(Clear, area);

    let lines = vec![
        Line::from(format!("Payment {} was not updated.", shorten_id(&notice.payment_id))),
        Line::from(notice.message.clone()),
        Line::from(" "),
        Line::from("Press any key to dismiss"),
    ];

    let block = Block::default()
        .title("UPDATE FAILED")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(
            Style::default()
                .fg(Color::LightRed)
                .add_modifier(Modifier::BOLD),
        )
        .padding(Padding::uniform(1));

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::White))
        .block(block)
        .wrap(Wrap { trim: true });
    f.render_widget(paragraph, area);
}

/// Rect covering the given percentage of the frame, centered both ways.
fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}
