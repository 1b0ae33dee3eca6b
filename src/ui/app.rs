//! Main application state and UI loop
//!
//! Contains the App struct and main UI event handling logic

use crate::consts::cli_consts::timing::{event_poll, splash_duration};
use crate::dashboards::DashboardKind;
use crate::events::Event as ActivityEvent;
use crate::logging::LogLevel;
use crate::ui::dashboard::{Action, DashboardState, render_dashboard};
use crate::ui::splash::render_splash;
use crossterm::event::{self, Event, KeyCode};
use ratatui::{Frame, Terminal, backend::Backend};
use std::time::Instant;

/// UI configuration data grouped by concern
#[derive(Debug, Clone)]
pub struct UIConfig {
    pub with_background_color: bool,
    pub log_threshold: LogLevel,
    pub show_activity: bool,
}

impl Default for UIConfig {
    fn default() -> Self {
        Self {
            with_background_color: false,
            log_threshold: LogLevel::Info,
            show_activity: true,
        }
    }
}

impl UIConfig {
    pub fn new(with_background_color: bool, log_threshold: LogLevel, show_activity: bool) -> Self {
        Self {
            with_background_color,
            log_threshold,
            show_activity,
        }
    }
}

/// The different screens in the application.
#[derive(Debug)]
pub enum Screen {
    /// Splash screen shown at the start of the application.
    Splash,
    /// Dashboard screen showing the selected dashboard.
    Dashboard(Box<DashboardState>),
}

/// What the loop should do after a key press.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Application state
#[derive(Debug)]
pub struct App {
    /// Dashboard shown when the splash screen closes.
    initial: DashboardKind,

    /// The current screen being displayed in the application.
    current_screen: Screen,

    /// Events recorded before the dashboard screen exists.
    startup_events: Vec<ActivityEvent>,

    ui_config: UIConfig,
}

impl App {
    /// Creates a new instance of the application.
    pub fn new(
        initial: DashboardKind,
        ui_config: UIConfig,
        startup_events: Vec<ActivityEvent>,
    ) -> Self {
        Self {
            initial,
            current_screen: Screen::Splash,
            startup_events,
            ui_config,
        }
    }

    #[cfg(test)]
    pub fn screen(&self) -> &Screen {
        &self.current_screen
    }

    /// Leaves the splash screen for the initial dashboard.
    pub fn open_dashboard(&mut self) {
        let mut state = DashboardState::new(self.initial, self.ui_config.clone());
        for event in self.startup_events.drain(..) {
            state.add_to_activity_log(event);
        }
        state.add_to_activity_log(ActivityEvent::dashboard_change(self.initial));
        self.current_screen = Screen::Dashboard(Box::new(state));
    }

    /// Applies one key press.
    pub fn handle_key(&mut self, code: KeyCode) -> Flow {
        if matches!(code, KeyCode::Esc | KeyCode::Char('q')) {
            return Flow::Quit;
        }
        // Any key press will skip the splash screen
        if matches!(self.current_screen, Screen::Splash) {
            self.open_dashboard();
            return Flow::Continue;
        }
        if let (Screen::Dashboard(state), Some(action)) =
            (&mut self.current_screen, Action::from_key(code))
        {
            state.apply(action);
        }
        Flow::Continue
    }
}

/// Runs the application UI in a loop, handling events and rendering the appropriate screen.
pub fn run<B: Backend>(terminal: &mut Terminal<B>, mut app: App) -> std::io::Result<()> {
    let splash_start = Instant::now();

    loop {
        terminal.draw(|f| render(f, &app.current_screen))?;

        // Handle splash-to-dashboard transition
        if let Screen::Splash = app.current_screen {
            if splash_start.elapsed() >= splash_duration() {
                app.open_dashboard();
                continue;
            }
        }

        // Poll for key events
        if event::poll(event_poll())? {
            if let Event::Key(key) = event::read()? {
                // Skip events that are not KeyEventKind::Press
                if key.kind == event::KeyEventKind::Release {
                    continue;
                }
                if app.handle_key(key.code) == Flow::Quit {
                    return Ok(());
                }
            }
        }
    }
}

/// Renders the current screen based on the application state.
fn render(f: &mut Frame, screen: &Screen) {
    match screen {
        Screen::Splash => render_splash(f),
        Screen::Dashboard(state) => render_dashboard(f, state),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> App {
        App::new(
            DashboardKind::TradeWar,
            UIConfig::default(),
            vec![ActivityEvent::startup("Loaded defaults".to_string())],
        )
    }

    #[test]
    fn test_any_key_leaves_splash() {
        let mut app = app();
        assert!(matches!(app.screen(), Screen::Splash));
        assert_eq!(app.handle_key(KeyCode::Char('x')), Flow::Continue);
        match app.screen() {
            Screen::Dashboard(state) => {
                assert_eq!(state.current_view().kind(), DashboardKind::TradeWar);
                assert_eq!(state.activity_logs.len(), 2);
                assert_eq!(state.activity_logs[0].msg, "Loaded defaults");
            }
            Screen::Splash => panic!("still on splash"),
        }
    }

    #[test]
    fn test_quit_keys() {
        let mut app = app();
        assert_eq!(app.handle_key(KeyCode::Char('q')), Flow::Quit);
        app.open_dashboard();
        assert_eq!(app.handle_key(KeyCode::Esc), Flow::Quit);
    }

    #[test]
    fn test_keys_navigate_dashboard() {
        let mut app = app();
        app.open_dashboard();
        app.handle_key(KeyCode::Char('3'));
        app.handle_key(KeyCode::Char(']'));
        match app.screen() {
            Screen::Dashboard(state) => {
                assert_eq!(state.current_view().kind(), DashboardKind::IfiExposure);
                assert_eq!(state.current_view().active_index(), 0);
            }
            Screen::Splash => panic!("still on splash"),
        }
    }
}
