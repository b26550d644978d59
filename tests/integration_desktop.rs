use std::time::Duration;

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::Terminal;
use ratatui::backend::TestBackend;

use phantom_wm::apps::{AppView, ContentRouter, ViewContext};
use phantom_wm::config::DesktopConfig;
use phantom_wm::desktop::Desktop;
use phantom_wm::drivers::ScriptedInput;
use phantom_wm::keybindings::KeyBindings;
use phantom_wm::runner::run_desktop;
use phantom_wm::theme::Theme;
use phantom_wm::tracing_sub;
use phantom_wm::window::{AppId, Point};

fn key(code: KeyCode) -> Event {
    Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

fn ctrl(c: char) -> Event {
    Event::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL))
}

fn mouse(kind: MouseEventKind, column: u16, row: u16) -> Event {
    Event::Mouse(MouseEvent {
        kind,
        column,
        row,
        modifiers: KeyModifiers::NONE,
    })
}

fn run(desktop: &mut Desktop, events: Vec<Event>) -> Terminal<TestBackend> {
    let mut input = ScriptedInput::new(events);
    let mut terminal = Terminal::new(TestBackend::new(160, 50)).unwrap();
    run_desktop(
        &mut terminal,
        &mut input,
        desktop,
        &KeyBindings::default(),
        Duration::ZERO,
    )
    .unwrap();
    terminal
}

#[test]
fn settings_app_changes_theme_and_wallpaper_through_the_shell() {
    let mut desktop = Desktop::new(&DesktopConfig::default());
    run(
        &mut desktop,
        vec![
            key(KeyCode::F(5)),
            key(KeyCode::Char('t')),
            key(KeyCode::Right),
            key(KeyCode::Enter),
            ctrl('q'),
        ],
    );
    assert_eq!(desktop.shell().theme(), Theme::Light);
    assert_eq!(desktop.shell().wallpaper(), "abstract-purple");
}

#[test]
fn mouse_drag_moves_the_window_across_the_screen() {
    let mut desktop = Desktop::new(&DesktopConfig::default());
    run(
        &mut desktop,
        vec![
            key(KeyCode::F(1)),
            mouse(MouseEventKind::Down(MouseButton::Left), 30, 8),
            mouse(MouseEventKind::Drag(MouseButton::Left), 20, 5),
            mouse(MouseEventKind::Up(MouseButton::Left), 20, 5),
            ctrl('q'),
        ],
    );
    let wm = desktop.window_manager();
    let window = wm.active_window().unwrap();
    // offset (140, 28) from the grab point, pointer now at (160, 80)
    assert_eq!(window.position(), Point::new(20, 52));

    assert!(wm.interaction().is_none());

    // the burst above was drained without a redraw in between
    let mut terminal = Terminal::new(TestBackend::new(160, 50)).unwrap();
    terminal.draw(|frame| desktop.render(frame)).unwrap();
    // ceil(20 / 8) = 3, ceil(52 / 16) = 4
    assert_eq!(terminal.backend().buffer()[(3, 4)].symbol(), "┌");
}

#[test]
fn closing_from_the_keyboard_hands_focus_back() {
    let mut desktop = Desktop::new(&DesktopConfig::default());
    run(
        &mut desktop,
        vec![
            key(KeyCode::F(1)),
            key(KeyCode::F(2)),
            key(KeyCode::F(9)),
            ctrl('q'),
        ],
    );
    let wm = desktop.window_manager();
    assert_eq!(wm.windows().len(), 1);
    assert_eq!(wm.active_window().unwrap().title(), "Notepad");
    assert_eq!(desktop.view_count(), 1);
}

#[derive(Debug, Default)]
struct Banner;

impl AppView for Banner {
    fn render(
        &mut self,
        frame: &mut ratatui::Frame,
        area: ratatui::layout::Rect,
        _ctx: &ViewContext,
    ) {
        let area = area.intersection(frame.area());
        if !area.is_empty() {
            frame
                .buffer_mut()
                .set_string(area.x, area.y, "custom banner", ratatui::style::Style::default());
        }
    }
}

#[test]
fn registered_views_replace_the_placeholder() {
    let mut router = ContentRouter::builtin();
    router.register("banner", || Box::new(Banner));
    assert!(router.is_known(&AppId::from("banner")));

    let mut desktop = Desktop::new(&DesktopConfig::default()).with_router(router);
    desktop.launch("banner");
    let terminal = run(&mut desktop, vec![ctrl('q')]);
    let buffer = terminal.backend().buffer();
    let found = (0..buffer.area.height).any(|row| {
        (0..buffer.area.width)
            .map(|x| buffer[(x, row)].symbol())
            .collect::<String>()
            .contains("custom banner")
    });
    assert!(found);
}

#[test]
fn log_file_receives_lifecycle_events() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("desktop.log");
    let installed = tracing_sub::init(tracing::Level::DEBUG, Some(path.as_path())).unwrap();

    let mut desktop = Desktop::new(&DesktopConfig::default());
    desktop.launch("notepad");

    if installed {
        let log = std::fs::read_to_string(&path).unwrap();
        assert!(log.contains("opened window"), "log was: {log}");
    }
    assert!(path.exists());
}
