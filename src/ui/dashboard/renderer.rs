//! Dashboard main renderer

use super::components::{footer, header, logs};
use super::sections;
use super::state::DashboardState;
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::prelude::{Color, Style};
use ratatui::widgets::Block;

/// Rows reserved for the activity log panel.
const LOG_PANEL_HEIGHT: u16 = 7;

pub fn render_dashboard(f: &mut Frame, state: &DashboardState) {
    if state.with_background_color {
        f.render_widget(
            Block::default().style(Style::default().bg(Color::Rgb(16, 20, 24))),
            f.area(),
        );
    }

    let log_height = if state.show_activity {
        LOG_PANEL_HEIGHT
    } else {
        0
    };

    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5),
            Constraint::Fill(1),
            Constraint::Length(log_height),
            Constraint::Length(2),
        ])
        .margin(1)
        .split(f.area());

    header::render_header(f, main_chunks[0], state);
    sections::render_view(f, main_chunks[1], state.current_view());
    if state.show_activity {
        logs::render_logs_panel(f, main_chunks[2], state);
    }
    footer::render_footer(f, main_chunks[3]);
}
