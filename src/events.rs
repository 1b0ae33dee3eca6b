//! Activity log entries
//!
//! Every state change in a session (startup, tab and dashboard switches) is
//! recorded as an [`Event`] and shown in the activity panel.

use crate::dashboards::DashboardKind;
use crate::logging::{LogLevel, should_log};
use chrono::Local;
use std::fmt::Display;

#[derive(Debug, Copy, Clone, Eq, PartialEq, strum::Display)]
pub enum EventType {
    Startup,
    TabChange,
    DashboardChange,
    Config,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    /// Dashboard the event belongs to, if any.
    pub dashboard: Option<DashboardKind>,
    pub msg: String,
    pub timestamp: String,
    pub event_type: EventType,
    pub log_level: LogLevel,
}

impl Event {
    fn new(
        dashboard: Option<DashboardKind>,
        msg: String,
        event_type: EventType,
        log_level: LogLevel,
    ) -> Self {
        Self {
            dashboard,
            msg,
            timestamp: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            event_type,
            log_level,
        }
    }

    pub fn startup(msg: String) -> Self {
        Self::new(None, msg, EventType::Startup, LogLevel::Info)
    }

    pub fn tab_change(dashboard: DashboardKind, tab_title: &str) -> Self {
        Self::new(
            Some(dashboard),
            format!("Switched to {} tab", tab_title),
            EventType::TabChange,
            LogLevel::Debug,
        )
    }

    pub fn dashboard_change(dashboard: DashboardKind) -> Self {
        Self::new(
            Some(dashboard),
            format!("Opened {}", dashboard.title()),
            EventType::DashboardChange,
            LogLevel::Info,
        )
    }

    pub fn config_warning(msg: String) -> Self {
        Self::new(None, msg, EventType::Config, LogLevel::Warn)
    }

    /// Whether this event passes the given level threshold.
    pub fn should_display(&self, threshold: LogLevel) -> bool {
        should_log(self.log_level, threshold)
    }
}

impl Display for Event {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} [{}] {}", self.event_type, self.timestamp, self.msg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tab_change_is_debug_level() {
        let event = Event::tab_change(DashboardKind::TradeWar, "Risks");
        assert_eq!(event.msg, "Switched to Risks tab");
        assert!(event.should_display(LogLevel::Debug));
        assert!(!event.should_display(LogLevel::Info));
    }

    #[test]
    fn test_dashboard_change_message_uses_title() {
        let event = Event::dashboard_change(DashboardKind::PeaceImpact);
        assert_eq!(
            event.msg,
            "Opened Impact of Russia-Ukraine Peace Deal on Vietnam's Economy"
        );
        assert_eq!(event.dashboard, Some(DashboardKind::PeaceImpact));
    }

    #[test]
    fn test_display_format() {
        let event = Event::startup("Ready".to_string());
        let rendered = event.to_string();
        assert!(rendered.starts_with("Startup ["));
        assert!(rendered.ends_with("] Ready"));
    }
}
