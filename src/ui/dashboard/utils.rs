//! Dashboard utility functions
//!
//! Contains helper functions used across dashboard components

use crate::consts::cli_consts::PAYMENT_ID_DISPLAY_LEN;
use crate::events::Worker;
use crate::payments::PaymentStatus;
use ratatui::prelude::Color;

/// Get a ratatui color for a worker based on its type
pub fn get_worker_color(worker: &Worker) -> Color {
    match worker {
        Worker::PaymentFetcher => Color::Cyan,
        Worker::StatusSubmitter => Color::Green,
    }
}

/// Get a ratatui color for a payment status
pub fn get_status_color(status: PaymentStatus) -> Color {
    match status {
        PaymentStatus::Pending => Color::Yellow,
        PaymentStatus::Approved => Color::Green,
        PaymentStatus::Rejected => Color::Red,
    }
}

/// Format an amount with thousands grouping and two decimal places.
/// No currency symbol: amounts are currency-agnostic at this layer.
pub fn format_amount(amount: f64) -> String {
    let negative = amount < 0.0;
    let cents = (amount.abs() * 100.0).round() as u64;
    let whole = (cents / 100).to_string();
    let fraction = cents % 100;

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    format!(
        "{}{}.{:02}",
        if negative { "-" } else { "" },
        grouped,
        fraction
    )
}

/// Shorten an opaque payment id for table display
pub fn shorten_id(id: &str) -> String {
    if id.chars().count() <= PAYMENT_ID_DISPLAY_LEN {
        id.to_string()
    } else {
        let prefix: String = id.chars().take(PAYMENT_ID_DISPLAY_LEN).collect();
        format!("{}…", prefix)
    }
}

/// Format a gateway creation timestamp for the table, with a dash fallback
/// for records the gateway serves without one.
pub fn format_created_at(created_at: Option<&str>) -> String {
    let Some(raw) = created_at else {
        return "-".to_string();
    };
    match chrono::DateTime::parse_from_rfc3339(raw) {
        Ok(parsed) => parsed.format("%Y-%m-%d %H:%M").to_string(),
        // Show whatever the gateway sent rather than hiding it.
        Err(_) => raw.to_string(),
    }
}

/// Format compact timestamp with date and time from full timestamp
pub fn format_compact_timestamp(timestamp: &str) -> String {
    // Extract from "YYYY-MM-DD HH:MM:SS" format
    if let Some(date_part) = timestamp.split(' ').next() {
        if let Some(time_part) = timestamp.split(' ').nth(1) {
            // Extract MM-DD from date and HH:MM from time
            if let Some(month_day) = date_part.get(5..10) {
                if let Some(hour_min) = time_part.get(0..5) {
                    return format!("{} {}", month_day, hour_min);
                }
            }
        }
    }
    // Fallback to original timestamp if parsing fails
    timestamp.to_string()
}

/// Clean HTTP error messages for the activity log
pub fn clean_http_error_message(msg: &str) -> String {
    if msg.contains("reqwest::Error") && msg.contains("ConnectTimeout") {
        return "Gateway connection timed out".to_string();
    }
    if msg.contains("reqwest::Error") && msg.contains("TimedOut") {
        return "Gateway request timed out".to_string();
    }
    if msg.contains("reqwest::Error") {
        return "Gateway network error".to_string();
    }
    // Return original message if no HTTP error pattern detected
    msg.to_string()
}
