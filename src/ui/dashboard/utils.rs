//! Dashboard utility functions
//!
//! Contains helper functions used across dashboard components

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders, Padding};

/// Standard rounded panel used by every chart and table.
pub fn panel(title: &str) -> Block<'_> {
    Block::default()
        .title(title)
        .title_style(
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan))
        .padding(Padding::horizontal(1))
}

/// Splits `area` into `count` cells, two per row.
///
/// With an odd count the last cell spans the full row width.
pub fn grid(area: Rect, count: usize) -> Vec<Rect> {
    if count == 0 {
        return Vec::new();
    }
    if count == 1 {
        return vec![area];
    }
    let rows = count.div_ceil(2);
    let row_areas = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![Constraint::Ratio(1, rows as u32); rows])
        .split(area);

    let mut cells = Vec::with_capacity(count);
    for (row, row_area) in row_areas.iter().enumerate() {
        let remaining = count - row * 2;
        if remaining == 1 {
            cells.push(*row_area);
        } else {
            let columns = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
                .split(*row_area);
            cells.extend(columns.iter().copied());
        }
    }
    cells
}

/// Format compact timestamp with date and time from full timestamp
pub fn format_compact_timestamp(timestamp: &str) -> String {
    // Extract from "YYYY-MM-DD HH:MM:SS" format
    let mut parts = timestamp.split(' ');
    if let (Some(date_part), Some(time_part)) = (parts.next(), parts.next()) {
        // MM-DD from the date, HH:MM:SS from the time
        if let (Some(month_day), Some(clock)) = (date_part.get(5..10), time_part.get(0..8)) {
            return format!("{} {}", month_day, clock);
        }
    }
    // Fallback to original timestamp if parsing fails
    timestamp.to_string()
}
