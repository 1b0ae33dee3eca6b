//! Dashboard state management
//!
//! Holds one independently tabbed view per dashboard plus the activity log.

use crate::consts::cli_consts::MAX_ACTIVITY_LOGS;
use crate::dashboards::{DashboardKind, DashboardView};
use crate::events::Event as ActivityEvent;
use crate::logging::LogLevel;
use crate::ui::app::UIConfig;

use crossterm::event::KeyCode;
use std::collections::VecDeque;

/// Navigation requested by a key press.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Action {
    NextTab,
    PreviousTab,
    SelectTab(usize),
    NextDashboard,
    PreviousDashboard,
}

impl Action {
    /// Maps a key to its navigation action, if it has one.
    pub fn from_key(code: KeyCode) -> Option<Self> {
        match code {
            KeyCode::Tab | KeyCode::Right => Some(Action::NextTab),
            KeyCode::BackTab | KeyCode::Left => Some(Action::PreviousTab),
            KeyCode::Char(']') => Some(Action::NextDashboard),
            KeyCode::Char('[') => Some(Action::PreviousDashboard),
            KeyCode::Char(c @ '1'..='9') => {
                c.to_digit(10).map(|d| Action::SelectTab(d as usize - 1))
            }
            _ => None,
        }
    }
}

#[derive(Debug)]
pub struct DashboardState {
    /// One view per dashboard, each owning its own tab state.
    views: Vec<DashboardView>,
    /// Index into `views` of the visible dashboard.
    current: usize,
    /// Activity logs for display
    pub activity_logs: VecDeque<ActivityEvent>,
    /// Least severe level shown in the activity log
    pub log_threshold: LogLevel,
    /// Whether the activity log panel is drawn
    pub show_activity: bool,
    /// Whether to enable background colors
    pub with_background_color: bool,
}

impl DashboardState {
    /// Creates a new instance of the dashboard state showing `initial`.
    pub fn new(initial: DashboardKind, ui_config: UIConfig) -> Self {
        let views: Vec<DashboardView> = DashboardKind::ALL
            .iter()
            .map(|kind| DashboardView::new(*kind))
            .collect();
        let current = DashboardKind::ALL
            .iter()
            .position(|kind| *kind == initial)
            .unwrap_or_default();
        Self {
            views,
            current,
            activity_logs: VecDeque::new(),
            log_threshold: ui_config.log_threshold,
            show_activity: ui_config.show_activity,
            with_background_color: ui_config.with_background_color,
        }
    }

    pub fn current_view(&self) -> &DashboardView {
        &self.views[self.current]
    }

    pub fn current_view_mut(&mut self) -> &mut DashboardView {
        &mut self.views[self.current]
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn dashboard_count(&self) -> usize {
        self.views.len()
    }

    /// Applies a navigation action and logs what changed.
    pub fn apply(&mut self, action: Action) {
        match action {
            Action::NextTab => {
                self.current_view_mut().next_tab();
                self.log_tab_change();
            }
            Action::PreviousTab => {
                self.current_view_mut().previous_tab();
                self.log_tab_change();
            }
            Action::SelectTab(index) => {
                let before = self.current_view().active_index();
                if self.current_view_mut().select_index(index) && before != index {
                    self.log_tab_change();
                }
            }
            Action::NextDashboard => {
                self.current = (self.current + 1) % self.views.len();
                self.log_dashboard_change();
            }
            Action::PreviousDashboard => {
                let len = self.views.len();
                self.current = (self.current + len - 1) % len;
                self.log_dashboard_change();
            }
        }
    }

    fn log_tab_change(&mut self) {
        let view = self.current_view();
        let event = ActivityEvent::tab_change(view.kind(), view.active_title());
        self.add_to_activity_log(event);
    }

    fn log_dashboard_change(&mut self) {
        let event = ActivityEvent::dashboard_change(self.current_view().kind());
        self.add_to_activity_log(event);
    }

    /// Add an event to activity logs with size limit
    pub fn add_to_activity_log(&mut self, event: ActivityEvent) {
        if self.activity_logs.len() >= MAX_ACTIVITY_LOGS {
            self.activity_logs.pop_front();
        }
        self.activity_logs.push_back(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(initial: DashboardKind) -> DashboardState {
        DashboardState::new(initial, UIConfig::default())
    }

    #[test]
    fn test_key_mapping() {
        assert_eq!(Action::from_key(KeyCode::Tab), Some(Action::NextTab));
        assert_eq!(Action::from_key(KeyCode::Left), Some(Action::PreviousTab));
        assert_eq!(
            Action::from_key(KeyCode::Char('3')),
            Some(Action::SelectTab(2))
        );
        assert_eq!(Action::from_key(KeyCode::Char('0')), None);
        assert_eq!(
            Action::from_key(KeyCode::Char(']')),
            Some(Action::NextDashboard)
        );
        assert_eq!(Action::from_key(KeyCode::Char('x')), None);
    }

    #[test]
    fn test_starts_on_requested_dashboard() {
        let state = state(DashboardKind::IfiExposure);
        assert_eq!(state.current_view().kind(), DashboardKind::IfiExposure);
        assert_eq!(state.current_view().active_index(), 0);
    }

    #[test]
    fn test_tab_state_is_kept_per_dashboard() {
        let mut state = state(DashboardKind::TradeVulnerability);
        state.apply(Action::SelectTab(2));
        state.apply(Action::NextDashboard);
        assert_eq!(state.current_view().kind(), DashboardKind::TradeWar);
        assert_eq!(state.current_view().active_index(), 0);
        state.apply(Action::PreviousDashboard);
        assert_eq!(state.current_view().active_index(), 2);
    }

    #[test]
    fn test_dashboard_switch_wraps() {
        let mut state = state(DashboardKind::TradeVulnerability);
        state.apply(Action::PreviousDashboard);
        assert_eq!(state.current_view().kind(), DashboardKind::PeaceImpact);
        state.apply(Action::NextDashboard);
        assert_eq!(
            state.current_view().kind(),
            DashboardKind::TradeVulnerability
        );
    }

    #[test]
    fn test_out_of_range_tab_is_not_logged() {
        let mut state = state(DashboardKind::TradeWar);
        state.apply(Action::SelectTab(8));
        assert_eq!(state.current_view().active_index(), 0);
        assert!(state.activity_logs.is_empty());
        state.apply(Action::SelectTab(1));
        assert_eq!(state.activity_logs.len(), 1);
        assert_eq!(state.activity_logs[0].msg, "Switched to Trade Data tab");
    }

    #[test]
    fn test_activity_log_is_capped() {
        let mut state = state(DashboardKind::PeaceImpact);
        for _ in 0..MAX_ACTIVITY_LOGS + 10 {
            state.apply(Action::NextTab);
        }
        assert_eq!(state.activity_logs.len(), MAX_ACTIVITY_LOGS);
    }
}
