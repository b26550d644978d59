use phantom_wm::config::{Cli, DesktopConfig};
use phantom_wm::error::DesktopError;
use phantom_wm::keybindings::KeyBindings;
use phantom_wm::runner;

fn main() -> Result<(), DesktopError> {
    let cli = Cli::parse_with_help(&KeyBindings::default());
    let config = DesktopConfig::try_from(&cli)?;
    runner::run(&config)
}
