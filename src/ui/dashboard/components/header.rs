//! Dashboard header component
//!
//! Renders the title and sync gauge

use super::super::state::{DashboardState, FetchingState};
use super::super::utils::format_compact_timestamp;

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders, Gauge, Paragraph};

/// Render header with title and gateway sync state.
pub fn render_header(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    let header_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Length(2)])
        .split(area);

    // Title section
    let version = env!("CARGO_PKG_VERSION");
    let title = Paragraph::new(format!("GATEWAY ADMIN v{}", version))
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_type(BorderType::Thick),
        );
    f.render_widget(title, header_chunks[0]);

    // Gauge logic: an active sync animates, a stalled sync turns red,
    // otherwise show when the table was last synced.
    let (progress_text, gauge_color, progress_percent) = match state.fetching_state() {
        FetchingState::Active { .. } => {
            // Animated gauge - loops every 20 ticks for smooth animation
            let progress = ((state.tick % 20) as f64 / 20.0 * 100.0) as u16;
            (
                format!("SYNCING - Loading page {}", state.page),
                Color::LightGreen,
                progress,
            )
        }
        FetchingState::Stalled => (
            "SYNC STALLED - No response from gateway".to_string(),
            Color::LightRed,
            100,
        ),
        FetchingState::Idle => {
            let display_text = match &state.last_synced {
                Some(timestamp) => {
                    format!("SYNCED - Last update {}", format_compact_timestamp(timestamp))
                }
                None => "WAITING - No data yet".to_string(),
            };
            (display_text, Color::LightBlue, 100)
        }
    };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(Style::default().fg(Color::DarkGray)),
        )
        .gauge_style(
            Style::default()
                .fg(gauge_color)
                .add_modifier(Modifier::BOLD),
        )
        .percent(progress_percent)
        .label(progress_text);

    f.render_widget(gauge, header_chunks[1]);
}
