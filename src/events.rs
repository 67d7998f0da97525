//! Event System
//!
//! Types and implementations for worker events and logging

use crate::logging::{LogLevel, should_log_with_env};
use crate::payments::{PaymentRecord, PaymentStatus};
use crate::stats::StatsSummary;
use chrono::Local;
use std::fmt::Display;

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Worker {
    /// Worker that fetches payment pages and stats snapshots from the gateway.
    PaymentFetcher,
    /// Worker that submits status updates to the gateway.
    StatusSubmitter,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, strum::Display)]
pub enum EventType {
    Success,
    Error,
    Refresh,
}

/// Typed payloads that let the dashboard apply fetch results without
/// parsing event messages.
#[derive(Debug, Clone, PartialEq)]
pub enum SyncPayload {
    /// A page of records arrived for the given refresh generation.
    PageLoaded {
        generation: u64,
        page: u32,
        records: Vec<PaymentRecord>,
    },
    /// The page fetch for the given generation failed.
    PageFailed { generation: u64 },
    /// A stats snapshot was reduced to its summary for the given generation.
    StatsLoaded { generation: u64, stats: StatsSummary },
    /// The snapshot fetch for the given generation failed.
    StatsFailed { generation: u64 },
    /// The gateway accepted a status update.
    ActionApplied {
        payment_id: String,
        status: PaymentStatus,
    },
    /// The gateway refused a status update.
    ActionFailed { payment_id: String, message: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    pub worker: Worker,
    pub msg: String,
    pub timestamp: String,
    pub event_type: EventType,
    pub log_level: LogLevel,
    /// Optional payload for dashboard state updates
    pub payload: Option<SyncPayload>,
}

impl Event {
    fn new(worker: Worker, msg: String, event_type: EventType, log_level: LogLevel) -> Self {
        Self {
            worker,
            msg,
            timestamp: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            event_type,
            log_level,
            payload: None,
        }
    }

    pub fn with_payload(
        worker: Worker,
        msg: String,
        event_type: EventType,
        log_level: LogLevel,
        payload: SyncPayload,
    ) -> Self {
        let mut event = Self::new(worker, msg, event_type, log_level);
        event.payload = Some(payload);
        event
    }

    pub fn payment_fetcher_with_level(
        msg: String,
        event_type: EventType,
        log_level: LogLevel,
    ) -> Self {
        Self::new(Worker::PaymentFetcher, msg, event_type, log_level)
    }

    pub fn status_submitter_with_level(
        msg: String,
        event_type: EventType,
        log_level: LogLevel,
    ) -> Self {
        Self::new(Worker::StatusSubmitter, msg, event_type, log_level)
    }

    pub fn should_display(&self) -> bool {
        // Always show success events and info level events
        if self.event_type == EventType::Success || self.log_level >= LogLevel::Info {
            return true;
        }
        should_log_with_env(self.log_level)
    }
}

impl Display for Event {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} [{}] {}", self.event_type, self.timestamp, self.msg)
    }
}
