use std::path::PathBuf;
use std::time::Duration;

use clap::{CommandFactory, FromArgMatches, Parser};
use indoc::indoc;
use tracing::Level;

use crate::constants::DEFAULT_TASKBAR_HEIGHT;
use crate::desktop::CellScale;
use crate::error::ConfigError;
use crate::keybindings::KeyBindings;
use crate::window::AppId;

const MOUSE_HELP: &str = indoc! {"
    Mouse:
      drag a title bar to move a window, drag an edge or corner to resize it
      double-click a title bar to maximize, double-click a desktop icon to launch
      click the start button for the app menu, click a taskbar entry to focus
"};

#[derive(Parser, Debug, Clone)]
#[command(
    name = "phantom-wm",
    version = env!("CARGO_PKG_VERSION"),
    about = "Phantom desktop running in the terminal"
)]
pub struct Cli {
    /// Pixels represented by one terminal column.
    #[arg(long = "cell-width", value_name = "PX", default_value_t = 8)]
    pub cell_width: i32,

    /// Pixels represented by one terminal row.
    #[arg(long = "cell-height", value_name = "PX", default_value_t = 16)]
    pub cell_height: i32,

    /// Height reserved for the taskbar, rounded up to whole rows.
    #[arg(long = "taskbar-height", value_name = "PX", default_value_t = DEFAULT_TASKBAR_HEIGHT)]
    pub taskbar_height: i32,

    /// Write logs to this file. Logging is discarded otherwise.
    #[arg(long = "log-file", value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    #[arg(long = "log-level", value_name = "LEVEL", default_value_t = Level::INFO)]
    pub log_level: Level,

    /// Input poll interval; also the idle redraw period.
    #[arg(long = "poll-ms", value_name = "MILLIS", default_value_t = 16)]
    pub poll_ms: u64,

    /// Apps to open at start-up, comma separated.
    #[arg(long = "launch", value_name = "APP", value_delimiter = ',')]
    pub launch: Vec<String>,
}

impl Cli {
    /// Command definition with the shortcut and mouse reference appended to
    /// `--help`. The shortcut list comes from `bindings`.
    pub fn command_with_help(bindings: &KeyBindings) -> clap::Command {
        Self::command().after_help(format!("{}\n{MOUSE_HELP}", bindings.help_text()))
    }

    /// Parse the process arguments, exiting with clap's message on error.
    pub fn parse_with_help(bindings: &KeyBindings) -> Self {
        let matches = Self::command_with_help(bindings).get_matches();
        Self::from_arg_matches(&matches).unwrap_or_else(|err| err.exit())
    }
}

/// Validated start-up settings.
#[derive(Debug, Clone)]
pub struct DesktopConfig {
    pub scale: CellScale,
    pub taskbar_height: i32,
    pub log_file: Option<PathBuf>,
    pub log_level: Level,
    pub poll_interval: Duration,
    pub launch: Vec<AppId>,
}

impl Default for DesktopConfig {
    fn default() -> Self {
        Self {
            scale: CellScale::default(),
            taskbar_height: DEFAULT_TASKBAR_HEIGHT,
            log_file: None,
            log_level: Level::INFO,
            poll_interval: Duration::from_millis(16),
            launch: Vec::new(),
        }
    }
}

impl TryFrom<&Cli> for DesktopConfig {
    type Error = ConfigError;

    fn try_from(cli: &Cli) -> Result<Self, Self::Error> {
        if !(1..=64).contains(&cli.cell_width) {
            return Err(ConfigError::CellWidth(cli.cell_width));
        }
        if !(1..=64).contains(&cli.cell_height) {
            return Err(ConfigError::CellHeight(cli.cell_height));
        }
        if !(0..=200).contains(&cli.taskbar_height) {
            return Err(ConfigError::TaskbarHeight(cli.taskbar_height));
        }
        if !(1..=1000).contains(&cli.poll_ms) {
            return Err(ConfigError::PollInterval(cli.poll_ms));
        }
        Ok(Self {
            scale: CellScale::new(cli.cell_width, cli.cell_height),
            taskbar_height: cli.taskbar_height,
            log_file: cli.log_file.clone(),
            log_level: cli.log_level,
            poll_interval: Duration::from_millis(cli.poll_ms),
            launch: cli
                .launch
                .iter()
                .map(|app| app.trim())
                .filter(|app| !app.is_empty())
                .map(AppId::from)
                .collect(),
        })
    }
}
