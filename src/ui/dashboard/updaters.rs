//! Dashboard state update logic
//!
//! Drains queued worker events into the dashboard state once per tick.

use super::state::{ActionNotice, DashboardState, FetchingState};

use crate::consts::cli_consts::ui_timing::SYNC_STALL_SECS;
use crate::events::{Event as WorkerEvent, SyncPayload};

impl DashboardState {
    /// Update the dashboard state with new tick and queued events.
    pub fn update(&mut self) {
        self.tick += 1;

        // Process all queued events one by one
        while let Some(event) = self.pending_events.pop_front() {
            // Add to activity logs for display
            self.add_to_activity_log(event.clone());

            // Process the event for state updates
            self.process_event(&event);
        }

        // Flag a sync that has gone quiet for too long
        self.check_sync_stall();
    }

    /// Applies one event's payload to the state. Results tagged with a
    /// generation older than the current refresh are dropped, so a slow
    /// response can never overwrite a newer one.
    fn process_event(&mut self, event: &WorkerEvent) {
        let Some(payload) = &event.payload else {
            return;
        };

        match payload {
            SyncPayload::PageLoaded {
                generation,
                records,
                ..
            } => {
                if *generation != self.generation() {
                    return;
                }
                self.records = records.clone();
                self.last_synced = Some(event.timestamp.clone());
                self.set_fetching_state(FetchingState::Idle);
                self.clamp_selection();
            }
            SyncPayload::PageFailed { generation } => {
                // Prior records stay untouched; only the loading flag clears.
                if *generation == self.generation() {
                    self.set_fetching_state(FetchingState::Idle);
                }
            }
            SyncPayload::StatsLoaded { generation, stats } => {
                if *generation != self.generation() {
                    return;
                }
                self.stats = stats.clone();
            }
            SyncPayload::StatsFailed { .. } => {
                // Header keeps showing the last-known numbers.
            }
            SyncPayload::ActionApplied { .. } => {
                // The table changes only through the refresh that follows.
                self.request_refresh();
            }
            SyncPayload::ActionFailed {
                payment_id,
                message,
            } => {
                self.raise_modal(ActionNotice {
                    payment_id: payment_id.clone(),
                    message: message.clone(),
                });
            }
        }
    }

    /// Check whether the in-flight sync has outlived the HTTP timeouts.
    fn check_sync_stall(&mut self) {
        if let FetchingState::Active { started_at } = self.fetching_state() {
            if started_at.elapsed().as_secs() > SYNC_STALL_SECS {
                self.set_fetching_state(FetchingState::Stalled);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::{Event, EventType, Worker};
    use crate::logging::LogLevel;
    use crate::payments::{PaymentStatus, sample_record};
    use crate::stats::StatsSummary;
    use crate::ui::dashboard::state::tests::test_state;

    fn page_loaded(generation: u64, page: u32, ids: &[&str]) -> Event {
        Event::with_payload(
            Worker::PaymentFetcher,
            format!("Loaded page {}", page),
            EventType::Success,
            LogLevel::Info,
            SyncPayload::PageLoaded {
                generation,
                page,
                records: ids
                    .iter()
                    .map(|id| sample_record(id, PaymentStatus::Pending, 10.0))
                    .collect(),
            },
        )
    }

    fn stats_loaded(generation: u64, pending_count: usize, approved_total: f64) -> Event {
        Event::with_payload(
            Worker::PaymentFetcher,
            "Stats refreshed".to_string(),
            EventType::Success,
            LogLevel::Info,
            SyncPayload::StatsLoaded {
                generation,
                stats: StatsSummary {
                    pending_count,
                    approved_total,
                },
            },
        )
    }

    #[test]
    fn current_page_result_replaces_records_and_clears_loading() {
        let mut state = test_state(10);
        let command = state.begin_refresh();
        assert!(state.is_loading());

        state.add_event(page_loaded(command.generation, 1, &["a", "b"]));
        state.update();

        assert_eq!(state.records.len(), 2);
        assert!(!state.is_loading());
        assert!(state.last_synced.is_some());
    }

    #[test]
    fn stale_page_result_is_dropped() {
        let mut state = test_state(10);
        let stale = state.begin_refresh();
        let current = state.begin_refresh();

        // The newer refresh completes first, then the stale one arrives.
        state.add_event(page_loaded(current.generation, 2, &["new"]));
        state.add_event(page_loaded(stale.generation, 1, &["old"]));
        state.update();

        assert_eq!(state.records.len(), 1);
        assert_eq!(state.records[0].id, "new");
    }

    #[test]
    fn stale_stats_result_is_dropped() {
        let mut state = test_state(10);
        let stale = state.begin_refresh();
        let current = state.begin_refresh();

        state.add_event(stats_loaded(current.generation, 6, 1500.0));
        state.add_event(stats_loaded(stale.generation, 99, 9.0));
        state.update();

        assert_eq!(state.stats.pending_count, 6);
        assert_eq!(state.stats.approved_total, 1500.0);
    }

    #[test]
    fn page_failure_keeps_last_known_records() {
        let mut state = test_state(10);
        let first = state.begin_refresh();
        state.add_event(page_loaded(first.generation, 1, &["a"]));
        state.update();

        let second = state.begin_refresh();
        state.add_event(Event::with_payload(
            Worker::PaymentFetcher,
            "Failed to load page 1".to_string(),
            EventType::Error,
            LogLevel::Warn,
            SyncPayload::PageFailed {
                generation: second.generation,
            },
        ));
        state.update();

        assert_eq!(state.records.len(), 1);
        assert_eq!(state.records[0].id, "a");
        assert!(!state.is_loading());
    }

    #[test]
    fn stats_failure_keeps_last_known_numbers() {
        let mut state = test_state(10);
        let first = state.begin_refresh();
        state.add_event(stats_loaded(first.generation, 3, 750.0));
        state.update();

        let second = state.begin_refresh();
        state.add_event(Event::with_payload(
            Worker::PaymentFetcher,
            "Failed to refresh stats".to_string(),
            EventType::Error,
            LogLevel::Warn,
            SyncPayload::StatsFailed {
                generation: second.generation,
            },
        ));
        state.update();

        assert_eq!(state.stats.pending_count, 3);
        assert_eq!(state.stats.approved_total, 750.0);
    }

    #[test]
    fn applied_action_requests_refresh_without_local_mutation() {
        let mut state = test_state(10);
        let command = state.begin_refresh();
        state.add_event(page_loaded(command.generation, 1, &["a"]));
        state.update();

        state.add_event(Event::with_payload(
            Worker::StatusSubmitter,
            "Payment a set to APPROVED".to_string(),
            EventType::Success,
            LogLevel::Info,
            SyncPayload::ActionApplied {
                payment_id: "a".to_string(),
                status: PaymentStatus::Approved,
            },
        ));
        state.update();

        // The displayed record is untouched until the refresh lands.
        assert_eq!(state.records[0].status, PaymentStatus::Pending);
        assert!(state.take_needs_refresh());
        assert!(!state.take_needs_refresh());
    }

    #[test]
    fn failed_action_raises_modal_and_keeps_status() {
        let mut state = test_state(10);
        let command = state.begin_refresh();
        state.add_event(page_loaded(command.generation, 1, &["a"]));
        state.update();

        state.add_event(Event::with_payload(
            Worker::StatusSubmitter,
            "Failed to update payment a".to_string(),
            EventType::Error,
            LogLevel::Error,
            SyncPayload::ActionFailed {
                payment_id: "a".to_string(),
                message: "payment already settled".to_string(),
            },
        ));
        state.update();

        assert_eq!(state.records[0].status, PaymentStatus::Pending);
        let notice = state.modal().expect("notice raised");
        assert_eq!(notice.payment_id, "a");
        assert!(notice.message.contains("already settled"));

        assert!(state.dismiss_modal());
        assert!(state.modal().is_none());
    }

    #[test]
    fn selection_clamps_to_shorter_page() {
        let mut state = test_state(10);
        let first = state.begin_refresh();
        state.add_event(page_loaded(first.generation, 1, &["a", "b", "c"]));
        state.update();
        state.select_next();
        state.select_next();
        assert_eq!(state.selected, 2);

        let second = state.begin_refresh();
        state.add_event(page_loaded(second.generation, 2, &["d"]));
        state.update();
        assert_eq!(state.selected, 0);
    }

    #[test]
    fn events_land_in_activity_log() {
        let mut state = test_state(10);
        state.add_event(Event::payment_fetcher_with_level(
            "Loading page 1...".to_string(),
            EventType::Refresh,
            LogLevel::Info,
        ));
        state.update();
        assert_eq!(state.activity_logs.len(), 1);
    }
}
