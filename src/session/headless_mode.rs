//! Headless mode execution

use super::SessionData;
use crate::error::DashboardError;
use crate::ui::headless::{Snapshot, render_to_text};

/// Runs the application in headless mode
///
/// Echoes the session's startup events that pass the log threshold, then
/// prints the rendered tab.
pub fn run_headless_mode(session: SessionData, snapshot: &Snapshot) -> Result<(), DashboardError> {
    let text = render_to_text(snapshot)?;
    for event in session
        .startup_events
        .iter()
        .filter(|event| event.should_display(session.log_threshold))
    {
        println!("{}", event);
    }
    println!("{}", text);
    Ok(())
}
