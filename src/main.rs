mod classify;
mod cli_messages;
mod config;
mod consts;
mod dashboards;
mod error;
mod events;
mod format;
mod logging;
mod palette;
mod session;
mod ui;

use crate::config::{Config, get_config_path};
use crate::consts::cli_consts::headless::{DEFAULT_HEIGHT, DEFAULT_WIDTH};
use crate::dashboards::{DashboardKind, DashboardView};
use crate::error::DashboardError;
use crate::session::{run_headless_mode, run_tui_mode, setup_session};
use crate::ui::headless::Snapshot;
use clap::{ArgAction, Parser, Subcommand};
use std::process::ExitCode;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
/// Command-line arguments
struct Args {
    /// Command to execute
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Open the interactive dashboards
    Start {
        /// Dashboard to open first. Defaults to the configured one.
        #[arg(long, value_name = "DASHBOARD")]
        dashboard: Option<String>,

        /// Paint a dark background behind the dashboard
        #[arg(long = "with-background", action = ArgAction::SetTrue)]
        with_background: bool,
    },
    /// Render one dashboard tab as plain text
    Render {
        /// Dashboard to render
        #[arg(value_name = "DASHBOARD")]
        dashboard: String,

        /// Tab to render. Defaults to the dashboard's first tab.
        #[arg(long, value_name = "TAB")]
        tab: Option<String>,

        /// Width of the off-screen buffer in columns
        #[arg(long, default_value_t = DEFAULT_WIDTH)]
        width: u16,

        /// Height of the off-screen buffer in rows
        #[arg(long, default_value_t = DEFAULT_HEIGHT)]
        height: u16,
    },
    /// List every dashboard and its tabs
    List,
    /// Set the dashboard `start` opens by default
    SetDefault {
        /// Dashboard to open by default
        #[arg(value_name = "DASHBOARD")]
        dashboard: String,
    },
}

fn main() -> ExitCode {
    let args = Args::parse();
    match execute(args.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            cli_messages::print_error(&e.to_string(), None);
            ExitCode::FAILURE
        }
    }
}

fn execute(command: Command) -> Result<(), DashboardError> {
    match command {
        Command::Start {
            dashboard,
            with_background,
        } => {
            let session = setup_session();
            let kind = match dashboard {
                Some(name) => DashboardKind::parse(&name)?,
                None => session.config.default_dashboard,
            };
            let with_background = with_background || session.config.with_background_color;
            run_tui_mode(session, kind, with_background)
        }
        Command::Render {
            dashboard,
            tab,
            width,
            height,
        } => {
            let kind = DashboardKind::parse(&dashboard)?;
            let session = setup_session();
            let snapshot = Snapshot {
                kind,
                tab: tab.as_deref(),
                width,
                height,
                with_background_color: session.config.with_background_color,
            };
            run_headless_mode(session, &snapshot)
        }
        Command::List => {
            let session = setup_session();
            print!("{}", dashboard_listing(session.config.default_dashboard));
            Ok(())
        }
        Command::SetDefault { dashboard } => {
            let kind = DashboardKind::parse(&dashboard)?;
            let config_path = get_config_path()?;
            let (mut config, warning) = Config::load_or_default(&config_path);
            if let Some(e) = warning {
                cli_messages::print_warn("Replacing unreadable config file", &e.to_string());
            } else if config.default_dashboard == kind && config_path.exists() {
                cli_messages::print_info(
                    &format!("{} is already the default dashboard", kind),
                    &config_path.display().to_string(),
                );
                return Ok(());
            }
            config.default_dashboard = kind;
            config.save(&config_path)?;
            cli_messages::print_success(
                &format!("Default dashboard set to {}", kind),
                &config_path.display().to_string(),
            );
            Ok(())
        }
    }
}

/// One line per dashboard followed by its tabs; the first tab is starred.
fn dashboard_listing(default: DashboardKind) -> String {
    let mut out = String::new();
    for kind in DashboardKind::ALL {
        let marker = if kind == default { " (default)" } else { "" };
        out.push_str(&format!("{}{}\n    {}\n", kind, marker, kind.title()));
        let view = DashboardView::new(kind);
        for (index, (name, title)) in view.tab_names().iter().zip(view.tab_titles()).enumerate() {
            let star = if index == view.active_index() { "*" } else { " " };
            out.push_str(&format!("    {} {:<12} {}\n", star, name, title));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_listing_marks_defaults() {
        let listing = dashboard_listing(DashboardKind::TradeWar);
        assert!(listing.contains("trade-war (default)"));
        assert!(!listing.contains("peace-impact (default)"));
        assert!(listing.contains("* overview"));
        assert!(listing.contains("  scenarios    Tariff Scenarios"));
    }

    #[test]
    fn test_render_defaults() {
        let args = Args::try_parse_from(["vietnam-dashboards", "render", "trade-war"]).unwrap();
        match args.command {
            Command::Render {
                width, height, tab, ..
            } => {
                assert_eq!((width, height), (DEFAULT_WIDTH, DEFAULT_HEIGHT));
                assert!(tab.is_none());
            }
            _ => panic!("expected render"),
        }
    }
}
