//! Dashboard info panel component
//!
//! Renders the stats summary and session information

use crate::environment::Environment;

use super::super::state::DashboardState;
use super::super::utils::format_amount;
use ratatui::Frame;
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Padding, Paragraph, Wrap};

/// Render the stats/info panel.
pub fn render_info_panel(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    let mut info_lines = Vec::new();

    // Stats from the most recent full snapshot, independent of the page.
    info_lines.push(Line::from(vec![Span::styled(
        format!("Pending: {}", state.stats.pending_count),
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    )]));
    info_lines.push(Line::from(vec![Span::styled(
        format!("Approved: {}", format_amount(state.stats.approved_total)),
        Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD),
    )]));
    info_lines.push(Line::from(Span::raw(" ")));

    // Environment with color coding
    let env_color = match state.environment {
        Environment::Local => Color::Green,
        Environment::Custom { .. } => Color::Yellow,
    };
    info_lines.push(Line::from(vec![Span::styled(
        format!("Env: {}", state.environment),
        Style::default().fg(env_color),
    )]));

    // Page and filter
    info_lines.push(Line::from(vec![Span::styled(
        format!("Page: {} ({})", state.page, state.filter_mode.label()),
        Style::default().fg(Color::LightYellow),
    )]));
    info_lines.push(Line::from(vec![Span::styled(
        format!("Rows: {}", state.page_size),
        Style::default().fg(Color::LightCyan),
    )]));

    // Uptime with better formatting
    let uptime = state.start_time.elapsed();
    let uptime_string = if uptime.as_secs() >= 86400 {
        format!(
            "Uptime: {}d {}h {}m",
            uptime.as_secs() / 86400,
            (uptime.as_secs() % 86400) / 3600,
            (uptime.as_secs() % 3600) / 60
        )
    } else if uptime.as_secs() >= 3600 {
        format!(
            "Uptime: {}h {}m {}s",
            uptime.as_secs() / 3600,
            (uptime.as_secs() % 3600) / 60,
            uptime.as_secs() % 60
        )
    } else {
        format!(
            "Uptime: {}m {}s",
            uptime.as_secs() / 60,
            uptime.as_secs() % 60
        )
    };
    info_lines.push(Line::from(vec![Span::styled(
        uptime_string,
        Style::default().fg(Color::LightGreen),
    )]));

    // Version info
    let version = env!("CARGO_PKG_VERSION");
    info_lines.push(Line::from(vec![Span::styled(
        format!("Version: {}", version),
        Style::default().fg(Color::Cyan),
    )]));

    let info_block = Block::default()
        .title("GATEWAY INFO")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan))
        .padding(Padding::uniform(1));

    let info_paragraph = Paragraph::new(info_lines)
        .block(info_block)
        .wrap(Wrap { trim: true });
    f.render_widget(info_paragraph, area);
}
