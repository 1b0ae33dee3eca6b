//! Off-screen rendering
//!
//! Draws a dashboard tab into a `TestBackend` buffer and returns the buffer
//! as plain text, one line per row with trailing blanks trimmed.

use crate::consts::cli_consts::headless::{MAX_HEIGHT, MAX_WIDTH, MIN_HEIGHT, MIN_WIDTH};
use crate::dashboards::DashboardKind;
use crate::error::DashboardError;
use crate::logging::LogLevel;
use crate::ui::app::UIConfig;
use crate::ui::dashboard::{DashboardState, render_dashboard};
use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;

/// What to draw and at which size.
#[derive(Debug, Clone)]
pub struct Snapshot<'a> {
    pub kind: DashboardKind,
    pub tab: Option<&'a str>,
    pub width: u16,
    pub height: u16,
    pub with_background_color: bool,
}

/// Renders one dashboard tab to text.
///
/// Sizes are clamped into `MIN_*..=MAX_*`. An unknown tab name is an error.
pub fn render_to_text(snapshot: &Snapshot) -> Result<String, DashboardError> {
    let ui_config = UIConfig::new(snapshot.with_background_color, LogLevel::Info, false);
    let mut state = DashboardState::new(snapshot.kind, ui_config);
    if let Some(tab) = snapshot.tab {
        state.current_view_mut().select_named(tab)?;
    }

    let backend = TestBackend::new(
        snapshot.width.clamp(MIN_WIDTH, MAX_WIDTH),
        snapshot.height.clamp(MIN_HEIGHT, MAX_HEIGHT),
    );
    let mut terminal = Terminal::new(backend)?;
    terminal.draw(|f| render_dashboard(f, &state))?;
    Ok(buffer_to_text(terminal.backend().buffer()))
}

fn buffer_to_text(buffer: &Buffer) -> String {
    let width = usize::from(buffer.area.width.max(1));
    let lines: Vec<String> = buffer
        .content
        .chunks(width)
        .map(|row| {
            let line: String = row.iter().map(|cell| cell.symbol()).collect();
            line.trim_end().to_string()
        })
        .collect();
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::cli_consts::headless::{DEFAULT_HEIGHT, DEFAULT_WIDTH};
    use crate::dashboards::DashboardView;

    fn snapshot(kind: DashboardKind, tab: Option<&str>) -> Snapshot<'_> {
        Snapshot {
            kind,
            tab,
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            with_background_color: false,
        }
    }

    #[test]
    fn test_every_tab_renders() {
        for kind in DashboardKind::ALL {
            for tab in DashboardView::new(kind).tab_names() {
                let text = render_to_text(&snapshot(kind, Some(&tab))).unwrap();
                assert_eq!(text.split('\n').count(), usize::from(DEFAULT_HEIGHT));
                assert!(text.contains(kind.title()), "{} {}", kind, tab);
            }
        }
    }

    fn render_tab(kind: DashboardKind, tab: &str) -> String {
        render_to_text(&snapshot(kind, Some(tab))).unwrap()
    }

    #[test]
    fn test_only_active_tab_blocks_are_drawn() {
        let sectors = render_tab(DashboardKind::TradeVulnerability, "sectors");
        assert!(sectors.contains("Sector Vulnerability Analysis"));
        assert!(!sectors.contains("GDP Impact by Tariff Scenario"));

        let scenarios = render_tab(DashboardKind::TradeVulnerability, "scenarios");
        assert!(scenarios.contains("GDP Impact by Tariff Scenario"));
        assert!(!scenarios.contains("Sector Vulnerability Analysis"));
    }

    #[test]
    fn test_sector_table_shows_export_value_in_billions() {
        let sectors = render_tab(DashboardKind::TradeVulnerability, "sectors");
        assert!(sectors.contains("Value ($B)"));
        assert!(sectors.contains("$34.2B"));
        assert!(sectors.contains("$22.8B"));
    }

    #[test]
    fn test_ifi_summary_cards_on_every_tab() {
        for tab in ["historical", "economic", "terms"] {
            let text = render_tab(DashboardKind::IfiExposure, tab);
            assert!(text.contains("Total IFI Funding"), "{}", tab);
            assert!(text.contains("$5.80B"), "{}", tab);
        }
    }

    #[test]
    fn test_default_tab_is_first() {
        let text = render_to_text(&snapshot(DashboardKind::TradeVulnerability, None)).unwrap();
        assert!(text.contains("$131.2B"));
    }

    #[test]
    fn test_unknown_tab_is_rejected() {
        let err = render_to_text(&snapshot(DashboardKind::TradeWar, Some("sectors"))).unwrap_err();
        assert!(matches!(err, DashboardError::UnknownTab { .. }));
    }

    #[test]
    fn test_tiny_sizes_are_raised() {
        let mut tiny = snapshot(DashboardKind::PeaceImpact, None);
        tiny.width = 5;
        tiny.height = 2;
        let text = render_to_text(&tiny).unwrap();
        assert_eq!(text.split('\n').count(), usize::from(MIN_HEIGHT));
    }

    #[test]
    fn test_huge_sizes_are_clamped() {
        let mut huge = snapshot(DashboardKind::TradeWar, None);
        huge.width = u16::MAX;
        huge.height = u16::MAX;
        let text = render_to_text(&huge).unwrap();
        let lines: Vec<&str> = text.split('\n').collect();
        assert_eq!(lines.len(), usize::from(MAX_HEIGHT));
        let widest = lines.iter().map(|line| line.chars().count()).max();
        assert!(widest <= Some(usize::from(MAX_WIDTH)));
        assert!(text.contains(DashboardKind::TradeWar.title()));
    }
}
