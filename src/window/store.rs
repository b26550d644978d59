//! Insertion-ordered window records.
//!
//! Operations on an unknown id are no-ops; they report whether the id was
//! found so callers (and tests) can tell the difference.

use super::{AppId, Point, Size, Window, WindowId, WindowState};

/// Subset of a window's mutable fields to overwrite. `None` leaves the field
/// untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WindowPatch {
    pub title: Option<String>,
    pub position: Option<Point>,
    pub size: Option<Size>,
    pub state: Option<WindowState>,
    pub z_index: Option<u64>,
}

impl WindowPatch {
    pub fn position(position: Point) -> Self {
        Self {
            position: Some(position),
            ..Self::default()
        }
    }

    pub fn size(size: Size) -> Self {
        Self {
            size: Some(size),
            ..Self::default()
        }
    }

    pub fn state(state: WindowState) -> Self {
        Self {
            state: Some(state),
            ..Self::default()
        }
    }

    pub fn z_index(z_index: u64) -> Self {
        Self {
            z_index: Some(z_index),
            ..Self::default()
        }
    }

    fn apply(self, window: &mut Window) {
        if let Some(title) = self.title {
            window.title = title;
        }
        if let Some(position) = self.position {
            window.position = position;
        }
        if let Some(size) = self.size {
            window.size = size;
        }
        if let Some(state) = self.state {
            window.state = state;
        }
        if let Some(z_index) = self.z_index {
            window.z_index = z_index;
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct WindowStore {
    windows: Vec<Window>,
}

impl WindowStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.windows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.windows.is_empty()
    }

    /// Append a window. Returns `false` (and drops nothing) when the id is
    /// already present.
    pub fn push(&mut self, window: Window) -> bool {
        if self.contains(window.id()) {
            return false;
        }
        self.windows.push(window);
        true
    }

    pub fn remove(&mut self, id: WindowId) -> Option<Window> {
        let idx = self.windows.iter().position(|w| w.id() == id)?;
        Some(self.windows.remove(idx))
    }

    pub fn update(&mut self, id: WindowId, patch: WindowPatch) -> bool {
        match self.windows.iter_mut().find(|w| w.id() == id) {
            Some(window) => {
                patch.apply(window);
                true
            }
            None => false,
        }
    }

    pub fn get(&self, id: WindowId) -> Option<&Window> {
        self.windows.iter().find(|w| w.id() == id)
    }

    pub fn contains(&self, id: WindowId) -> bool {
        self.get(id).is_some()
    }

    /// Windows in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Window> {
        self.windows.iter()
    }

    pub fn find_by_app(&self, app_id: &AppId) -> Option<&Window> {
        self.windows.iter().find(|w| w.app_id() == app_id)
    }

    pub fn max_z_index(&self) -> Option<u64> {
        self.windows.iter().map(Window::z_index).max()
    }

    /// Highest-z window matching `pred`. Ties go to the earliest inserted.
    pub fn topmost_where<P>(&self, mut pred: P) -> Option<&Window>
    where
        P: FnMut(&Window) -> bool,
    {
        self.windows
            .iter()
            .filter(|w| pred(w))
            .fold(None, |best: Option<&Window>, w| match best {
                Some(b) if b.z_index() >= w.z_index() => Some(b),
                _ => Some(w),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn window(seq: u64, app: &str, z: u64) -> Window {
        Window::new(
            WindowId::from_seq(seq),
            AppId::from(app),
            app,
            Point::new(0, 0),
            Size::new(300, 200),
            z,
        )
    }

    #[test]
    fn push_keeps_insertion_order_and_rejects_duplicate_ids() {
        let mut store = WindowStore::new();
        assert!(store.push(window(1, "a", 5)));
        assert!(store.push(window(2, "b", 1)));
        assert!(!store.push(window(1, "c", 9)));
        let ids: Vec<u64> = store.iter().map(|w| w.id().get()).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn update_and_remove_report_missing_ids() {
        let mut store = WindowStore::new();
        store.push(window(1, "a", 1));
        assert!(!store.update(WindowId::from_seq(9), WindowPatch::z_index(4)));
        assert!(store.remove(WindowId::from_seq(9)).is_none());

        assert!(store.update(
            WindowId::from_seq(1),
            WindowPatch {
                position: Some(Point::new(3, 4)),
                z_index: Some(7),
                ..WindowPatch::default()
            }
        ));
        let w = store.get(WindowId::from_seq(1)).unwrap();
        assert_eq!(w.position(), Point::new(3, 4));
        assert_eq!(w.z_index(), 7);
        assert_eq!(w.size(), Size::new(300, 200));
    }

    #[test]
    fn topmost_where_breaks_ties_by_insertion_order() {
        let mut store = WindowStore::new();
        store.push(window(1, "a", 3));
        store.push(window(2, "b", 3));
        store.push(window(3, "c", 1));
        let top = store.topmost_where(|_| true).unwrap();
        assert_eq!(top.id(), WindowId::from_seq(1));
        let top = store
            .topmost_where(|w| w.id() != WindowId::from_seq(1))
            .unwrap();
        assert_eq!(top.id(), WindowId::from_seq(2));
        assert!(store.topmost_where(|_| false).is_none());
    }

    #[test]
    fn find_by_app_returns_first_match() {
        let mut store = WindowStore::new();
        store.push(window(1, "paint", 1));
        store.push(window(2, "paint", 2));
        assert_eq!(
            store.find_by_app(&AppId::from("paint")).map(|w| w.id()),
            Some(WindowId::from_seq(1))
        );
        assert!(store.find_by_app(&AppId::from("notepad")).is_none());
        assert_eq!(store.max_z_index(), Some(2));
    }
}
