pub mod cli_consts {
    //! Application Constants
    //!
    //! Sizing and timing constants for the terminal front end, grouped by
    //! concern.

    // =============================================================================
    // ACTIVITY LOG
    // =============================================================================

    /// The maximum number of events to keep in the activity logs.
    pub const MAX_ACTIVITY_LOGS: usize = 100;

    // =============================================================================
    // TERMINAL LOOP
    // =============================================================================

    pub mod timing {
        use std::time::Duration;

        /// How long the splash screen stays up without a key press (milliseconds)
        pub const SPLASH_DURATION_MS: u64 = 2_000;

        /// Key event poll timeout; also the redraw interval when idle (milliseconds)
        pub const EVENT_POLL_MS: u64 = 100;

        pub const fn splash_duration() -> Duration {
            Duration::from_millis(SPLASH_DURATION_MS)
        }

        pub const fn event_poll() -> Duration {
            Duration::from_millis(EVENT_POLL_MS)
        }
    }

    // =============================================================================
    // HEADLESS RENDERING
    // =============================================================================

    pub mod headless {
        /// Default off-screen buffer width (columns)
        pub const DEFAULT_WIDTH: u16 = 120;

        /// Default off-screen buffer height (rows)
        pub const DEFAULT_HEIGHT: u16 = 48;

        /// Smallest buffer the layout can be drawn into
        pub const MIN_WIDTH: u16 = 40;
        pub const MIN_HEIGHT: u16 = 16;

        /// Largest buffer allocated for a render; bigger requests are clamped
        pub const MAX_WIDTH: u16 = 500;
        pub const MAX_HEIGHT: u16 = 200;
    }

    // =============================================================================
    // CONFIG
    // =============================================================================

    /// Directory under `$HOME` holding the config file.
    pub const CONFIG_DIR: &str = ".vietnam-dashboards";

    /// Config file name inside [`CONFIG_DIR`].
    pub const CONFIG_FILE: &str = "config.json";
}
