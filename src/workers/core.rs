//! Core worker utilities and traits

use crate::events::{Event, EventType};
use crate::logging::LogLevel;
use crate::payments::PaymentStatus;
use tokio::sync::mpsc;

/// Common event sending utilities for workers
#[derive(Clone)]
pub struct EventSender {
    sender: mpsc::Sender<Event>,
}

impl EventSender {
    pub fn new(sender: mpsc::Sender<Event>) -> Self {
        Self { sender }
    }

    /// Send a generic event
    pub async fn send_event(&self, event: Event) {
        let _ = self.sender.send(event).await;
    }

    pub async fn send_fetch_event(
        &self,
        message: String,
        event_type: EventType,
        log_level: LogLevel,
    ) {
        let _ = self
            .sender
            .send(Event::payment_fetcher_with_level(
                message, event_type, log_level,
            ))
            .await;
    }

    pub async fn send_action_event(
        &self,
        message: String,
        event_type: EventType,
        log_level: LogLevel,
    ) {
        let _ = self
            .sender
            .send(Event::status_submitter_with_level(
                message, event_type, log_level,
            ))
            .await;
    }
}

/// Worker configuration shared across worker types
#[derive(Clone)]
pub struct WorkerConfig {
    /// Records requested per page fetch. Fixed for the whole session.
    pub page_size: u32,
}

impl WorkerConfig {
    pub fn new(page_size: u32) -> Self {
        Self { page_size }
    }
}

/// Command asking the fetch worker to reload a page and the stats snapshot.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct RefreshCommand {
    /// 1-based page to load.
    pub page: u32,
    /// Generation of the refresh that requested this load. Results carry it
    /// back so completions from superseded refreshes can be discarded.
    pub generation: u64,
}

/// Command asking the action worker to settle one payment.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct ActionCommand {
    pub payment_id: String,
    pub status: PaymentStatus,
}
