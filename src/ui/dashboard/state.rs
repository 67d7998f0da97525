//! Dashboard state management
//!
//! Contains the main dashboard state struct and related enums

use crate::consts::cli_consts::MAX_ACTIVITY_LOGS;
use crate::environment::Environment;
use crate::events::Event as WorkerEvent;
use crate::payments::PaymentRecord;
use crate::stats::StatsSummary;
use crate::ui::app::UIConfig;
use crate::workers::core::RefreshCommand;

use std::collections::VecDeque;
use std::time::Instant;

/// State for tracking the in-flight sync with the gateway
#[derive(Debug, Clone)]
pub enum FetchingState {
    Idle,
    Active { started_at: Instant },
    Stalled,
}

/// Which subset of the fetched page is displayed.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default)]
pub enum FilterMode {
    /// Every record on the fetched page.
    #[default]
    All,
    /// Only records still awaiting a decision.
    PendingOnly,
}

impl FilterMode {
    pub fn toggled(self) -> Self {
        match self {
            FilterMode::All => FilterMode::PendingOnly,
            FilterMode::PendingOnly => FilterMode::All,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FilterMode::All => "ALL",
            FilterMode::PendingOnly => "PENDING",
        }
    }
}

/// A failed status update awaiting operator acknowledgement. While one is
/// raised the dashboard behaves modally: any key dismisses it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionNotice {
    pub payment_id: String,
    pub message: String,
}

/// Dashboard state: the fetched page, derived stats, and view toggles.
#[derive(Debug)]
pub struct DashboardState {
    /// The gateway environment in which the application is running.
    pub environment: Environment,
    /// The start time of the application, used for computing uptime.
    pub start_time: Instant,
    /// 1-based page currently shown.
    pub page: u32,
    /// Records requested per page, fixed for the session.
    pub page_size: u32,
    /// Which subset of the fetched page is displayed.
    pub filter_mode: FilterMode,
    /// The most recently fetched page of records, in gateway order.
    pub records: Vec<PaymentRecord>,
    /// Stats from the most recently fetched full snapshot. Independent of
    /// the current page.
    pub stats: StatsSummary,
    /// Index of the selected row within the displayed (filtered) rows.
    pub selected: usize,
    /// Timestamp of the last applied page result.
    pub last_synced: Option<String>,
    /// Queue of events waiting to be processed
    pub pending_events: VecDeque<WorkerEvent>,
    /// Activity logs for display
    pub activity_logs: VecDeque<WorkerEvent>,
    /// Whether to enable background colors
    pub with_background_color: bool,
    /// Animation tick counter
    pub tick: usize,

    /// Generation of the most recent refresh; older results are ignored.
    generation: u64,
    /// Current sync state (active, stalled, idle)
    fetching_state: FetchingState,
    /// Unacknowledged action failure, if any.
    modal: Option<ActionNotice>,
    /// Set when a successful status update asks for a full refresh.
    needs_refresh: bool,
}

impl DashboardState {
    /// Creates a new instance of the dashboard state.
    pub fn new(environment: Environment, start_time: Instant, ui_config: UIConfig) -> Self {
        Self {
            environment,
            start_time,
            page: 1,
            page_size: ui_config.page_size,
            filter_mode: FilterMode::default(),
            records: Vec::new(),
            stats: StatsSummary::default(),
            selected: 0,
            last_synced: None,
            pending_events: VecDeque::new(),
            activity_logs: VecDeque::new(),
            with_background_color: ui_config.with_background_color,
            tick: 0,
            generation: 0,
            fetching_state: FetchingState::Idle,
            modal: None,
            needs_refresh: false,
        }
    }

    /// The fetched page filtered by the current filter mode, order preserved.
    pub fn displayed_rows(&self) -> Vec<&PaymentRecord> {
        self.records
            .iter()
            .filter(|record| match self.filter_mode {
                FilterMode::All => true,
                FilterMode::PendingOnly => record.status.is_pending(),
            })
            .collect()
    }

    /// End-of-data heuristic: a short page means there is no next page.
    /// The gateway exposes no total count.
    pub fn has_next_page(&self) -> bool {
        self.records.len() as u32 >= self.page_size
    }

    /// Steps back one page. The page number never drops below 1.
    pub fn page_back(&mut self) -> bool {
        if self.page > 1 {
            self.page -= 1;
            true
        } else {
            false
        }
    }

    /// Steps forward one page, refused at the end-of-data heuristic.
    pub fn page_forward(&mut self) -> bool {
        if self.has_next_page() {
            self.page += 1;
            true
        } else {
            false
        }
    }

    /// Starts a new refresh: bumps the generation, marks the sync active,
    /// and returns the command to hand to the fetch worker.
    pub fn begin_refresh(&mut self) -> RefreshCommand {
        self.generation += 1;
        self.fetching_state = FetchingState::Active {
            started_at: Instant::now(),
        };
        RefreshCommand {
            page: self.page,
            generation: self.generation,
        }
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn fetching_state(&self) -> &FetchingState {
        &self.fetching_state
    }

    pub(super) fn set_fetching_state(&mut self, state: FetchingState) {
        self.fetching_state = state;
    }

    /// Whether a refresh is still waiting on the gateway.
    pub fn is_loading(&self) -> bool {
        !matches!(self.fetching_state, FetchingState::Idle)
    }

    pub fn modal(&self) -> Option<&ActionNotice> {
        self.modal.as_ref()
    }

    pub(super) fn raise_modal(&mut self, notice: ActionNotice) {
        self.modal = Some(notice);
    }

    /// Clears a raised failure notice. Returns whether one was up.
    pub fn dismiss_modal(&mut self) -> bool {
        self.modal.take().is_some()
    }

    pub(super) fn request_refresh(&mut self) {
        self.needs_refresh = true;
    }

    /// Consumes the pending refresh request, if any.
    pub fn take_needs_refresh(&mut self) -> bool {
        std::mem::take(&mut self.needs_refresh)
    }

    /// Toggles the filter locally. No re-fetch: the filter only narrows the
    /// already loaded page.
    pub fn toggle_filter(&mut self) {
        self.filter_mode = self.filter_mode.toggled();
        self.clamp_selection();
    }

    pub fn select_next(&mut self) {
        let len = self.displayed_rows().len();
        if len > 0 && self.selected + 1 < len {
            self.selected += 1;
        }
    }

    pub fn select_previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// The selected row, if it is still awaiting a decision. Settled rows
    /// are not actionable.
    pub fn selected_pending(&self) -> Option<&PaymentRecord> {
        self.displayed_rows()
            .get(self.selected)
            .copied()
            .filter(|record| record.status.is_pending())
    }

    /// Keeps the selection inside the displayed rows after the row set
    /// shrinks (new page, filter toggle).
    pub(super) fn clamp_selection(&mut self) {
        let len = self.displayed_rows().len();
        self.selected = self.selected.min(len.saturating_sub(1));
    }

    /// Add an event to activity logs with size limit
    pub fn add_to_activity_log(&mut self, event: WorkerEvent) {
        if self.activity_logs.len() >= MAX_ACTIVITY_LOGS {
            self.activity_logs.pop_front();
        }
        self.activity_logs.push_back(event);
    }

    /// Add an event to the processing queue
    pub fn add_event(&mut self, event: WorkerEvent) {
        self.pending_events.push_back(event);
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::events::{Event, EventType};
    use crate::logging::LogLevel;
    use crate::payments::{PaymentStatus, sample_record};

    pub(crate) fn test_state(page_size: u32) -> DashboardState {
        DashboardState::new(
            Environment::Local,
            Instant::now(),
            UIConfig::new(false, page_size),
        )
    }

    #[test]
    fn page_never_drops_below_one() {
        let mut state = test_state(10);
        assert!(!state.page_back());
        assert_eq!(state.page, 1);
    }

    #[test]
    fn next_page_refused_on_short_page() {
        let mut state = test_state(10);
        state.records = (0..9)
            .map(|i| sample_record(&format!("p{}", i), PaymentStatus::Pending, 1.0))
            .collect();
        assert!(!state.has_next_page());
        assert!(!state.page_forward());
        assert_eq!(state.page, 1);

        state
            .records
            .push(sample_record("p9", PaymentStatus::Pending, 1.0));
        assert!(state.page_forward());
        assert_eq!(state.page, 2);
    }

    #[test]
    fn filter_shows_only_pending_rows_in_order() {
        let mut state = test_state(10);
        state.records = vec![
            sample_record("a", PaymentStatus::Approved, 5.0),
            sample_record("b", PaymentStatus::Pending, 6.0),
            sample_record("c", PaymentStatus::Rejected, 7.0),
            sample_record("d", PaymentStatus::Pending, 8.0),
        ];

        let all: Vec<&str> = state
            .displayed_rows()
            .iter()
            .map(|r| r.id.as_str())
            .collect();
        assert_eq!(all, vec!["a", "b", "c", "d"]);

        state.toggle_filter();
        let pending: Vec<&str> = state
            .displayed_rows()
            .iter()
            .map(|r| r.id.as_str())
            .collect();
        assert_eq!(pending, vec!["b", "d"]);
        assert!(
            state
                .displayed_rows()
                .iter()
                .all(|r| r.status.is_pending())
        );
    }

    #[test]
    fn begin_refresh_bumps_generation_and_sets_loading() {
        let mut state = test_state(10);
        assert!(!state.is_loading());

        let first = state.begin_refresh();
        let second = state.begin_refresh();
        assert_eq!(first.generation, 1);
        assert_eq!(second.generation, 2);
        assert_eq!(state.generation(), 2);
        assert!(state.is_loading());
    }

    #[test]
    fn selection_stays_within_filtered_rows() {
        let mut state = test_state(10);
        state.records = vec![
            sample_record("a", PaymentStatus::Pending, 1.0),
            sample_record("b", PaymentStatus::Approved, 2.0),
            sample_record("c", PaymentStatus::Approved, 3.0),
        ];
        state.select_next();
        state.select_next();
        assert_eq!(state.selected, 2);
        // No row past the end.
        state.select_next();
        assert_eq!(state.selected, 2);

        // Narrowing to pending leaves a single row.
        state.toggle_filter();
        assert_eq!(state.selected, 0);
    }

    #[test]
    fn only_pending_rows_are_actionable() {
        let mut state = test_state(10);
        state.records = vec![
            sample_record("a", PaymentStatus::Approved, 1.0),
            sample_record("b", PaymentStatus::Pending, 2.0),
        ];
        assert!(state.selected_pending().is_none());
        state.select_next();
        assert_eq!(state.selected_pending().unwrap().id, "b");
    }

    #[test]
    fn activity_log_is_bounded() {
        let mut state = test_state(10);
        for i in 0..(MAX_ACTIVITY_LOGS + 5) {
            state.add_to_activity_log(Event::payment_fetcher_with_level(
                format!("event {}", i),
                EventType::Refresh,
                LogLevel::Info,
            ));
        }
        assert_eq!(state.activity_logs.len(), MAX_ACTIVITY_LOGS);
        assert_eq!(state.activity_logs.front().unwrap().msg, "event 5");
    }
}
