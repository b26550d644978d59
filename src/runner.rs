use std::io;
use std::time::Duration;

use crossterm::event::Event;

use crate::config::DesktopConfig;
use crate::desktop::Desktop;
use crate::drivers::console::{ConsoleInputDriver, ConsoleOutputDriver};
use crate::drivers::{InputDriver, OutputDriver};
use crate::error::DesktopError;
use crate::event_loop::{ControlFlow, EventLoop};
use crate::keybindings::{Action, KeyBindings};
use crate::tracing_sub;

/// Drive `desktop` until a quit shortcut arrives. Redraws once per loop
/// turn. The output is restored even when the loop fails.
pub fn run_desktop<O, D>(
    output: &mut O,
    input: &mut D,
    desktop: &mut Desktop,
    bindings: &KeyBindings,
    poll_interval: Duration,
) -> io::Result<()>
where
    O: OutputDriver,
    D: InputDriver,
{
    output.enter()?;
    let result = pump(output, input, desktop, bindings, poll_interval);
    let restored = output.exit();
    result.and(restored)
}

fn pump<O, D>(
    output: &mut O,
    input: &mut D,
    desktop: &mut Desktop,
    bindings: &KeyBindings,
    poll_interval: Duration,
) -> io::Result<()>
where
    O: OutputDriver,
    D: InputDriver,
{
    let mut event_loop = EventLoop::new(input, poll_interval);
    event_loop.driver().set_mouse_capture(true)?;

    event_loop.run(|_, event| {
        let Some(event) = event else {
            output.draw(|frame| desktop.render(frame))?;
            return Ok(ControlFlow::Continue);
        };
        if let Event::Key(key) = &event
            && let Some(action) = bindings.action_for_key(key)
        {
            if action == Action::Quit {
                tracing::info!("quit requested");
                return Ok(ControlFlow::Quit);
            }
            tracing::debug!(%action, "shortcut");
            desktop.apply(action);
            return Ok(ControlFlow::Continue);
        }
        desktop.handle_event(&event);
        Ok(ControlFlow::Continue)
    })
}

/// Binary entry point: logging, the desktop with its start-up apps, and
/// the console drivers.
pub fn run(config: &DesktopConfig) -> Result<(), DesktopError> {
    tracing_sub::init(config.log_level, config.log_file.as_deref())?;
    tracing::info!(
        cell_width = config.scale.cell_width,
        cell_height = config.scale.cell_height,
        taskbar_height = config.taskbar_height,
        "starting desktop"
    );

    let mut desktop = Desktop::new(config);
    for app in &config.launch {
        desktop.launch(app.clone());
    }

    let mut output = ConsoleOutputDriver::new()?;
    let mut input = ConsoleInputDriver::new();
    run_desktop(
        &mut output,
        &mut input,
        &mut desktop,
        &KeyBindings::default(),
        config.poll_interval,
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::drivers::ScriptedInput;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn key(code: KeyCode, mods: KeyModifiers) -> Event {
        Event::Key(KeyEvent::new(code, mods))
    }

    #[test]
    fn quit_shortcut_ends_the_loop_after_applying_earlier_input() {
        let mut desktop = Desktop::new(&DesktopConfig::default());
        let mut input = ScriptedInput::new([
            key(KeyCode::F(1), KeyModifiers::NONE),
            key(KeyCode::Char('q'), KeyModifiers::CONTROL),
            key(KeyCode::F(2), KeyModifiers::NONE),
        ]);
        let mut terminal = Terminal::new(TestBackend::new(120, 40)).unwrap();
        run_desktop(
            &mut terminal,
            &mut input,
            &mut desktop,
            &KeyBindings::default(),
            Duration::ZERO,
        )
        .unwrap();
        assert_eq!(desktop.window_manager().windows().len(), 1);
        assert_eq!(input.remaining(), 1);
        assert!(input.mouse_capture());
    }
}
