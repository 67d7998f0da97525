//! Dashboard payments table component
//!
//! Renders the fetched page as a selectable table

use super::super::state::{DashboardState, FilterMode};
use super::super::utils::{format_amount, format_created_at, get_status_color, shorten_id};
use crate::consts::cli_consts::ORDER_ID_DISPLAY_LEN;
use ratatui::Frame;
use ratatui::layout::Constraint;
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{
    Block, BorderType, Borders, Cell, Padding, Paragraph, Row, Table, TableState,
};

/// Render the payments table for the current page and filter.
pub fn render_payments_table(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    let rows = state.displayed_rows();

    let table_block = Block::default()
        .title("PAYMENTS")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan))
        .padding(Padding::uniform(1));

    if rows.is_empty() {
        let placeholder = if state.is_loading() {
            "Syncing with gateway..."
        } else {
            match state.filter_mode {
                FilterMode::PendingOnly => "No pending payments on this page",
                FilterMode::All => "No payments on this page",
            }
        };
        let empty = Paragraph::new(vec![Line::from(placeholder)])
            .style(Style::default().fg(Color::DarkGray))
            .block(table_block);
        f.render_widget(empty, area);
        return;
    }

    let header = Row::new(vec!["ID", "ORDER", "AMOUNT", "METHOD", "STATUS", "CREATED"])
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .bottom_margin(1);

    let table_rows: Vec<Row> = rows
        .iter()
        .map(|record| {
            let order = if record.order_id.chars().count() > ORDER_ID_DISPLAY_LEN {
                let prefix: String = record.order_id.chars().take(ORDER_ID_DISPLAY_LEN).collect();
                format!("{}…", prefix)
            } else {
                record.order_id.clone()
            };

            Row::new(vec![
                Cell::from(shorten_id(&record.id)),
                Cell::from(order),
                Cell::from(format_amount(record.amount)),
                Cell::from(record.method.clone()),
                Cell::from(record.status.to_string())
                    .style(Style::default().fg(get_status_color(record.status))),
                Cell::from(format_created_at(record.created_at.as_deref())),
            ])
        })
        .collect();

    let table = Table::new(
        table_rows,
        [
            Constraint::Length(10),
            Constraint::Length(8),
            Constraint::Length(12),
            Constraint::Length(12),
            Constraint::Length(10),
            Constraint::Fill(1),
        ],
    )
    .header(header)
    .row_highlight_style(
        Style::default()
            .bg(Color::DarkGray)
            .add_modifier(Modifier::BOLD),
    )
    .highlight_symbol("> ")
    .block(table_block);

    let mut table_state = TableState::default().with_selected(Some(state.selected));
    f.render_stateful_widget(table, area, &mut table_state);
}
