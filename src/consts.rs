pub mod cli_consts {
    //! Console Configuration Constants
    //!
    //! This module contains all configuration constants for the admin console,
    //! organized by functional area for clarity and maintainability.

    // =============================================================================
    // QUEUE CONFIGURATION
    // =============================================================================

    /// The maximum number of events to keep in the activity logs.
    pub const MAX_ACTIVITY_LOGS: usize = 100;

    /// Maximum number of event buffer size for worker channels
    pub const EVENT_QUEUE_SIZE: usize = 100;

    /// Buffer size for the UI-to-worker command channels. The UI issues at
    /// most one command per keypress, so a small buffer suffices.
    pub const COMMAND_QUEUE_SIZE: usize = 8;

    // =============================================================================
    // PAGINATION CONFIGURATION
    // =============================================================================

    /// Number of payment records requested per page when no `--page-size`
    /// flag is given.
    pub const DEFAULT_PAGE_SIZE: u32 = 10;

    /// Upper bound for the `--page-size` flag.
    pub const MAX_PAGE_SIZE: u32 = 200;

    /// Record limit used when fetching the full snapshot the stats header is
    /// derived from. The gateway exposes no aggregate endpoint, so the
    /// console over-fetches and counts locally.
    pub const STATS_SNAPSHOT_LIMIT: u32 = 9999;

    // =============================================================================
    // DISPLAY CONFIGURATION
    // =============================================================================

    /// Leading characters of a payment id shown in the table.
    pub const PAYMENT_ID_DISPLAY_LEN: usize = 8;

    /// Leading characters of an order id shown in the table.
    pub const ORDER_ID_DISPLAY_LEN: usize = 5;

    // =============================================================================
    // NETWORK CONFIGURATION
    // =============================================================================

    /// HTTP client timing configuration
    pub mod http {
        use std::time::Duration;

        /// Connection timeout for gateway requests (milliseconds)
        pub const CONNECT_TIMEOUT_MS: u64 = 10_000;

        /// Total request timeout for gateway requests (milliseconds)
        pub const REQUEST_TIMEOUT_MS: u64 = 10_000;

        /// Helper function to get the connection timeout
        pub const fn connect_timeout() -> Duration {
            Duration::from_millis(CONNECT_TIMEOUT_MS)
        }

        /// Helper function to get the request timeout
        pub const fn request_timeout() -> Duration {
            Duration::from_millis(REQUEST_TIMEOUT_MS)
        }
    }

    // =============================================================================
    // UI CONFIGURATION
    // =============================================================================

    /// UI timing configuration
    pub mod ui_timing {
        use std::time::Duration;

        /// How long the splash screen is shown before the dashboard (milliseconds)
        pub const SPLASH_DURATION_MS: u64 = 2_000;

        /// Keyboard polling interval for the UI loop (milliseconds)
        pub const KEY_POLL_INTERVAL_MS: u64 = 100;

        /// Seconds of silence after which an in-flight sync is shown as stalled.
        /// The HTTP timeouts guarantee a result sooner than this unless the
        /// refresh command itself was lost.
        pub const SYNC_STALL_SECS: u64 = 15;

        /// Helper function to get the splash screen duration
        pub const fn splash_duration() -> Duration {
            Duration::from_millis(SPLASH_DURATION_MS)
        }

        /// Helper function to get the key polling interval
        pub const fn key_poll_interval() -> Duration {
            Duration::from_millis(KEY_POLL_INTERVAL_MS)
        }
    }

    /// Headless mode timing configuration
    pub mod headless {
        use std::time::Duration;

        /// Interval between automatic refreshes when running without the TUI (milliseconds)
        pub const REFRESH_INTERVAL_MS: u64 = 30_000;

        /// Helper function to get the headless refresh interval
        pub const fn refresh_interval() -> Duration {
            Duration::from_millis(REFRESH_INTERVAL_MS)
        }
    }
}
