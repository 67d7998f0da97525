//! Dashboard footer component
//!
//! Renders the key bindings and page indicator

use super::super::state::DashboardState;
use ratatui::Frame;
use ratatui::layout::Alignment;
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

/// Render the footer key bar.
pub fn render_footer(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    let page_indicator = if state.has_next_page() {
        format!("Page {}", state.page)
    } else {
        // The end-of-data heuristic: a short page means there is no next one.
        format!("Page {} · end", state.page)
    };

    let footer_text = format!(
        "[Q] Quit | [←/→] Page | [↑/↓] Select | [F] Filter | [A] Approve | [X] Reject | [R] Refresh | {}",
        page_indicator
    );

    let footer = Paragraph::new(footer_text)
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::TOP)
                .border_type(BorderType::Thick),
        );
    f.render_widget(footer, area);
}
