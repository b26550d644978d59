use std::collections::HashMap;
use std::fmt;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::apps::catalog::BUILTIN_APPS;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Quit,
    /// Launch the built-in app at this launcher slot.
    LaunchApp(u8),
    MinimizeActive,
    ToggleMaximizeActive,
    CloseActive,
    CycleNextWindow,
    CyclePrevWindow,
    ToggleTheme,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Quit => write!(f, "Quit"),
            Action::LaunchApp(slot) => match BUILTIN_APPS.get(usize::from(*slot)) {
                Some(app) => write!(f, "Launch {app}"),
                None => write!(f, "Launch slot {slot}"),
            },
            Action::MinimizeActive => write!(f, "Minimize active window"),
            Action::ToggleMaximizeActive => write!(f, "Maximize / restore active window"),
            Action::CloseActive => write!(f, "Close active window"),
            Action::CycleNextWindow => write!(f, "Cycle next window"),
            Action::CyclePrevWindow => write!(f, "Cycle previous window"),
            Action::ToggleTheme => write!(f, "Toggle theme"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyCombo {
    pub code: KeyCode,
    pub mods: KeyModifiers,
}

impl KeyCombo {
    pub fn new(code: KeyCode, mods: KeyModifiers) -> Self {
        Self { code, mods }
    }

    pub fn plain(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::NONE)
    }

    pub fn ctrl(c: char) -> Self {
        Self::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    pub fn matches(&self, key: &KeyEvent) -> bool {
        key.code == self.code && key.modifiers == self.mods
    }

    pub fn display(&self) -> String {
        let mut parts = Vec::new();
        if self.mods.contains(KeyModifiers::CONTROL) {
            parts.push("Ctrl".to_string());
        }
        if self.mods.contains(KeyModifiers::SHIFT) {
            parts.push("Shift".to_string());
        }
        if self.mods.contains(KeyModifiers::ALT) {
            parts.push("Alt".to_string());
        }
        let code = match self.code {
            KeyCode::Char(c) => c.to_ascii_uppercase().to_string(),
            KeyCode::Tab => "Tab".to_string(),
            KeyCode::BackTab => "Shift+Tab".to_string(),
            KeyCode::F(n) => format!("F{n}"),
            _ => format!("{:?}", self.code),
        };
        parts.push(code);
        parts.join("+")
    }
}

impl fmt::Display for KeyCombo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}

/// Desktop-level shortcuts, checked before keys reach the active app.
#[derive(Debug, Clone)]
pub struct KeyBindings {
    map: HashMap<Action, Vec<KeyCombo>>,
}

impl Default for KeyBindings {
    fn default() -> Self {
        use Action::*;
        let mut kb = Self::new();
        kb.add(Quit, KeyCombo::ctrl('q'));
        for (slot, f_key) in (0u8..).zip(1..=BUILTIN_APPS.len() as u8) {
            kb.add(LaunchApp(slot), KeyCombo::plain(KeyCode::F(f_key)));
        }
        kb.add(MinimizeActive, KeyCombo::plain(KeyCode::F(7)));
        kb.add(ToggleMaximizeActive, KeyCombo::plain(KeyCode::F(8)));
        kb.add(CloseActive, KeyCombo::plain(KeyCode::F(9)));
        kb.add(CloseActive, KeyCombo::ctrl('w'));
        kb.add(CycleNextWindow, KeyCombo::plain(KeyCode::Tab));
        kb.add(CyclePrevWindow, KeyCombo::plain(KeyCode::BackTab));
        kb.add(ToggleTheme, KeyCombo::ctrl('t'));
        kb
    }
}

impl KeyBindings {
    pub fn new() -> Self {
        Self {
            map: HashMap::new(),
        }
    }

    pub fn add(&mut self, action: Action, combo: KeyCombo) {
        self.map.entry(action).or_default().push(combo);
    }

    pub fn matches(&self, action: Action, key: &KeyEvent) -> bool {
        self.map
            .get(&action)
            .is_some_and(|list| list.iter().any(|c| c.matches(key)))
    }

    pub fn action_for_key(&self, key: &KeyEvent) -> Option<Action> {
        self.map
            .iter()
            .find(|(_, list)| list.iter().any(|c| c.matches(key)))
            .map(|(action, _)| *action)
    }

    /// Display strings for all combos mapped to `action`.
    pub fn combos_for(&self, action: Action) -> Vec<String> {
        self.map
            .get(&action)
            .map(|list| list.iter().map(KeyCombo::display).collect())
            .unwrap_or_default()
    }

    /// One `keys  action` line per bound action, launch slots first.
    pub fn help_text(&self) -> String {
        let launch = (0u8..).take(BUILTIN_APPS.len()).map(Action::LaunchApp);
        let rest = [
            Action::MinimizeActive,
            Action::ToggleMaximizeActive,
            Action::CloseActive,
            Action::CycleNextWindow,
            Action::CyclePrevWindow,
            Action::ToggleTheme,
            Action::Quit,
        ];
        let mut out = String::from("Shortcuts:\n");
        for action in launch.chain(rest) {
            let combos = self.combos_for(action);
            if combos.is_empty() {
                continue;
            }
            out.push_str(&format!("  {:<12} {action}\n", combos.join(", ")));
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_quit() {
        let kb = KeyBindings::default();
        let ev = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::CONTROL);
        assert!(kb.matches(Action::Quit, &ev));
        assert_eq!(kb.action_for_key(&ev), Some(Action::Quit));
    }

    #[test]
    fn function_keys_launch_builtin_apps() {
        let kb = KeyBindings::default();
        let f1 = KeyEvent::new(KeyCode::F(1), KeyModifiers::NONE);
        let f6 = KeyEvent::new(KeyCode::F(6), KeyModifiers::NONE);
        assert_eq!(kb.action_for_key(&f1), Some(Action::LaunchApp(0)));
        assert_eq!(kb.action_for_key(&f6), Some(Action::LaunchApp(5)));
        assert_eq!(Action::LaunchApp(0).to_string(), "Launch notepad");
    }

    #[test]
    fn plain_letters_are_left_for_apps() {
        let kb = KeyBindings::default();
        let t = KeyEvent::new(KeyCode::Char('t'), KeyModifiers::NONE);
        assert_eq!(kb.action_for_key(&t), None);
        assert_eq!(kb.combos_for(Action::CloseActive), ["F9", "Ctrl+W"]);
    }

    #[test]
    fn help_text_lists_every_bound_action() {
        let kb = KeyBindings::default();
        let help = kb.help_text();
        for action in kb.map.keys() {
            let line = format!("{:<12} {action}", kb.combos_for(*action).join(", "));
            assert!(help.contains(&line), "missing {line:?} in {help}");
        }
        assert_eq!(help.lines().count(), kb.map.len() + 1);
        assert!(KeyBindings::new().help_text().lines().eq(["Shortcuts:"]));
    }
}
