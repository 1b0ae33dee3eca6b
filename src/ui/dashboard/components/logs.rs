//! Dashboard logs panel component
//!
//! Renders the session activity log, newest first

use super::super::state::DashboardState;
use super::super::utils::format_compact_timestamp;
use crate::events::EventType;
use crate::logging::LogLevel;
use ratatui::Frame;
use ratatui::prelude::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Padding, Paragraph, Wrap};

fn event_color(event_type: EventType, level: LogLevel) -> Color {
    match (event_type, level) {
        (_, LogLevel::Warn | LogLevel::Error) => Color::LightYellow,
        (EventType::DashboardChange, _) => Color::Cyan,
        (EventType::TabChange, _) => Color::Gray,
        (EventType::Startup | EventType::Config, _) => Color::LightGreen,
    }
}

/// Render logs panel.
pub fn render_logs_panel(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    // Borders take two rows
    let log_count = (area.height.saturating_sub(2) as usize).max(1);

    let log_lines: Vec<Line> = state
        .activity_logs
        .iter()
        .filter(|event| event.should_display(state.log_threshold))
        .rev()
        .take(log_count)
        .map(|event| {
            let compact_time = format_compact_timestamp(&event.timestamp);
            let source = event
                .dashboard
                .map(|kind| format!("[{}] ", kind))
                .unwrap_or_default();
            Line::from(vec![
                Span::styled(
                    format!("{} ", compact_time),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::styled(source, Style::default().fg(Color::Gray)),
                Span::styled(
                    event.msg.clone(),
                    Style::default().fg(event_color(event.event_type, event.log_level)),
                ),
            ])
        })
        .collect();

    let log_paragraph = if log_lines.is_empty() {
        Paragraph::new(vec![Line::from("Starting up...")])
    } else {
        Paragraph::new(log_lines)
    };

    let logs_block = Block::default()
        .title("ACTIVITY LOG")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan))
        .padding(Padding::horizontal(1));

    let log_widget = log_paragraph.block(logs_block).wrap(Wrap { trim: true });

    f.render_widget(log_widget, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_warnings_stand_out() {
        assert_eq!(
            event_color(EventType::Config, LogLevel::Warn),
            Color::LightYellow
        );
        assert_eq!(
            event_color(EventType::TabChange, LogLevel::Debug),
            Color::Gray
        );
    }
}
