//! Page and stats fetching against the gateway

use super::core::{EventSender, RefreshCommand, WorkerConfig};
use crate::consts::cli_consts::STATS_SNAPSHOT_LIMIT;
use crate::events::{Event, EventType, SyncPayload, Worker};
use crate::gateway::Gateway;
use crate::logging::LogLevel;
use crate::stats::StatsSummary;

/// Serves refresh commands: loads the requested page, then rebuilds the
/// stats snapshot.
pub struct PaymentFetcher {
    gateway: Box<dyn Gateway>,
    event_sender: EventSender,
    config: WorkerConfig,
}

impl PaymentFetcher {
    pub fn new(gateway: Box<dyn Gateway>, event_sender: EventSender, config: &WorkerConfig) -> Self {
        Self {
            gateway,
            event_sender,
            config: config.clone(),
        }
    }

    /// Base URL of the gateway this fetcher watches.
    pub fn gateway_url(&self) -> String {
        self.gateway.environment().gateway_url()
    }

    /// Serve a single refresh. The page fetch always completes before the
    /// stats fetch begins, so page results land in the dashboard first.
    /// A failed page fetch does not skip the stats refresh: the two views
    /// are kept independent.
    pub async fn refresh(&self, command: RefreshCommand) {
        self.event_sender
            .send_fetch_event(
                format!("Loading page {}...", command.page),
                EventType::Refresh,
                LogLevel::Info,
            )
            .await;

        self.load_page(command).await;
        self.load_stats(command).await;
    }

    async fn load_page(&self, command: RefreshCommand) {
        match self
            .gateway
            .list_payments(command.page, self.config.page_size)
            .await
        {
            Ok(records) => {
                self.event_sender
                    .send_event(Event::with_payload(
                        Worker::PaymentFetcher,
                        format!("Loaded page {} ({} records)", command.page, records.len()),
                        EventType::Success,
                        LogLevel::Info,
                        SyncPayload::PageLoaded {
                            generation: command.generation,
                            page: command.page,
                            records,
                        },
                    ))
                    .await;
            }
            Err(e) => {
                let log_level = e.log_level();
                self.event_sender
                    .send_event(Event::with_payload(
                        Worker::PaymentFetcher,
                        format!("Failed to load page {}: {}", command.page, e),
                        EventType::Error,
                        log_level,
                        SyncPayload::PageFailed {
                            generation: command.generation,
                        },
                    ))
                    .await;
            }
        }
    }

    async fn load_stats(&self, command: RefreshCommand) {
        match self.gateway.list_all(STATS_SNAPSHOT_LIMIT).await {
            Ok(records) => {
                let stats = StatsSummary::compute(&records);
                self.event_sender
                    .send_event(Event::with_payload(
                        Worker::PaymentFetcher,
                        format!("Stats refreshed ({} records scanned)", records.len()),
                        EventType::Success,
                        LogLevel::Info,
                        SyncPayload::StatsLoaded {
                            generation: command.generation,
                            stats,
                        },
                    ))
                    .await;
            }
            Err(e) => {
                let log_level = e.log_level();
                self.event_sender
                    .send_event(Event::with_payload(
                        Worker::PaymentFetcher,
                        format!("Failed to refresh stats: {}", e),
                        EventType::Error,
                        log_level,
                        SyncPayload::StatsFailed {
                            generation: command.generation,
                        },
                    ))
                    .await;
            }
        }
    }
}
