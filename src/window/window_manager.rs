use std::time::{Duration, Instant};

use super::decorator::{ChromeMetrics, HeaderAction};
use super::store::{WindowPatch, WindowStore};
use super::{AppId, Bounds, Point, Size, Viewport, Window, WindowId};
use crate::apps::catalog::{app_title, default_size};
use crate::constants::{CASCADE_ORIGIN, CASCADE_STEP, DEFAULT_TASKBAR_HEIGHT, DOUBLE_CLICK_MILLIS};
use crate::layout::floating::{
    DragGesture, Interaction, ResizeDirection, ResizeGesture, clamp_size, resize_handle_at,
};

/// Part of a window under the pointer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerTarget {
    Resize(ResizeDirection),
    Header(HeaderAction),
    Body,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowHit {
    pub id: WindowId,
    pub target: PointerTarget,
}

/// A window removed by `close`, queued for the shell to release whatever it
/// keeps per window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClosedWindow {
    pub id: WindowId,
    pub app_id: AppId,
}

/// Owns the window records, focus and z-order, and the pointer gesture in
/// progress.
///
/// Every operation taking a `WindowId` is a no-op for unknown ids and
/// reports whether the id was found. The z counter is a `u64`; each focus
/// change bumps exactly one window above the current maximum.
#[derive(Debug, Clone)]
pub struct WindowManager {
    store: WindowStore,
    active: Option<WindowId>,
    next_window_seq: u64,
    interaction: Option<Interaction>,
    viewport: Viewport,
    taskbar_height: i32,
    metrics: ChromeMetrics,
    last_header_click: Option<(WindowId, Instant)>,
    // queue of windows removed since the last drain; shell drains via `take_closed_windows`
    closed_windows: Vec<ClosedWindow>,
}

impl WindowManager {
    pub fn new(viewport: Viewport) -> Self {
        Self {
            store: WindowStore::new(),
            active: None,
            next_window_seq: 1,
            interaction: None,
            viewport,
            taskbar_height: DEFAULT_TASKBAR_HEIGHT,
            metrics: ChromeMetrics::default(),
            last_header_click: None,
            closed_windows: Vec::new(),
        }
    }

    pub fn with_metrics(mut self, metrics: ChromeMetrics) -> Self {
        self.metrics = metrics;
        self
    }

    pub fn with_taskbar_height(mut self, height: i32) -> Self {
        self.taskbar_height = height.max(0);
        self
    }

    pub fn metrics(&self) -> &ChromeMetrics {
        &self.metrics
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn set_viewport(&mut self, viewport: Viewport) {
        if self.viewport != viewport {
            tracing::debug!(width = viewport.width, height = viewport.height, "viewport resized");
            self.viewport = viewport;
        }
    }

    pub fn taskbar_height(&self) -> i32 {
        self.taskbar_height
    }

    pub fn windows(&self) -> &WindowStore {
        &self.store
    }

    pub fn window(&self, id: WindowId) -> Option<&Window> {
        self.store.get(id)
    }

    pub fn active(&self) -> Option<WindowId> {
        self.active
    }

    pub fn active_window(&self) -> Option<&Window> {
        self.active.and_then(|id| self.store.get(id))
    }

    pub fn interaction(&self) -> Option<Interaction> {
        self.interaction
    }

    pub fn take_closed_windows(&mut self) -> Vec<ClosedWindow> {
        std::mem::take(&mut self.closed_windows)
    }

    fn next_z(&self) -> u64 {
        self.store.max_z_index().map_or(1, |z| z.saturating_add(1))
    }

    fn allocate_id(&mut self) -> WindowId {
        let id = WindowId::from_seq(self.next_window_seq);
        self.next_window_seq = self.next_window_seq.saturating_add(1);
        id
    }

    /// Open the app, or bring its existing window back when one is already
    /// open (the launcher treats app ids as single-instance).
    pub fn launch(&mut self, app_id: impl Into<AppId>) -> WindowId {
        let app_id = app_id.into();
        if let Some(existing) = self.store.find_by_app(&app_id) {
            let id = existing.id();
            tracing::debug!(window_id = %id, app_id = %app_id, "app already open");
            self.activate(id);
            return id;
        }
        let title = app_title(app_id.as_str());
        let size = default_size(app_id.as_str());
        self.open_window(app_id, title, size)
    }

    /// Create a new window unconditionally, cascaded from the previous one,
    /// and make it active.
    pub fn open_window(
        &mut self,
        app_id: impl Into<AppId>,
        title: impl Into<String>,
        size: Size,
    ) -> WindowId {
        let app_id = app_id.into();
        let id = self.allocate_id();
        let step = CASCADE_STEP.saturating_mul(self.store.len() as i32);
        let position = Point::new(CASCADE_ORIGIN + step, CASCADE_ORIGIN + step);
        let z_index = self.next_z();
        tracing::debug!(window_id = %id, app_id = %app_id, z_index, "opened window");
        self.store.push(Window::new(
            id,
            app_id,
            title,
            position,
            clamp_size(size),
            z_index,
        ));
        self.active = Some(id);
        id
    }

    /// Give `id` focus and move it above every other window. Activating a
    /// minimized window restores it.
    pub fn activate(&mut self, id: WindowId) -> bool {
        let Some(window) = self.store.get(id) else {
            return false;
        };
        if window.is_minimized() {
            return self.restore(id);
        }
        if self.active == Some(id) {
            return true;
        }
        self.focus_and_raise(id);
        true
    }

    fn focus_and_raise(&mut self, id: WindowId) {
        let z_index = self.next_z();
        self.store.update(id, WindowPatch::z_index(z_index));
        self.active = Some(id);
        tracing::debug!(window_id = %id, z_index, "activated window");
    }

    /// Pick the highest visible window as the new focus, raising it when a
    /// minimized window still sits above it.
    fn select_fallback_focus(&mut self) {
        let next = self
            .store
            .topmost_where(|w| !w.is_minimized())
            .map(|w| (w.id(), w.z_index()));
        match next {
            Some((id, z)) => {
                let covered = self
                    .store
                    .iter()
                    .any(|w| w.id() != id && w.z_index() >= z);
                if covered {
                    self.focus_and_raise(id);
                } else {
                    self.active = Some(id);
                    tracing::debug!(window_id = %id, "focus fell back");
                }
            }
            None => {
                self.active = None;
                tracing::debug!("no window left to focus");
            }
        }
    }

    pub fn close(&mut self, id: WindowId) -> bool {
        let Some(window) = self.store.remove(id) else {
            return false;
        };
        tracing::debug!(window_id = %id, app_id = %window.app_id(), "closing window");
        if self.interaction.is_some_and(|i| i.id() == id) {
            self.interaction = None;
        }
        if self.last_header_click.is_some_and(|(click_id, _)| click_id == id) {
            self.last_header_click = None;
        }
        if self.active == Some(id) {
            self.select_fallback_focus();
        }
        self.closed_windows.push(ClosedWindow {
            id,
            app_id: window.app_id().clone(),
        });
        true
    }

    pub fn minimize(&mut self, id: WindowId) -> bool {
        let Some(window) = self.store.get(id) else {
            return false;
        };
        if window.is_minimized() {
            return true;
        }
        let state = window.state().minimized();
        self.store.update(id, WindowPatch::state(state));
        tracing::debug!(window_id = %id, "minimized window");
        if self.interaction.is_some_and(|i| i.id() == id) {
            self.interaction = None;
        }
        if self.active == Some(id) {
            self.select_fallback_focus();
        }
        true
    }

    /// Flip the maximized presentation. Focus and z-order are untouched, and
    /// so are the floating position and size, which come back on the next
    /// toggle.
    pub fn toggle_maximize(&mut self, id: WindowId) -> bool {
        let Some(window) = self.store.get(id) else {
            return false;
        };
        let state = window.state().maximize_toggled();
        self.store.update(id, WindowPatch::state(state));
        if self.interaction.is_some_and(|i| i.id() == id) {
            self.interaction = None;
        }
        tracing::debug!(window_id = %id, maximized = state.is_maximized(), "toggled maximize");
        true
    }

    /// Bring a window back from the taskbar: un-minimize, focus and raise.
    pub fn restore(&mut self, id: WindowId) -> bool {
        let Some(window) = self.store.get(id) else {
            return false;
        };
        let state = window.state().restored();
        self.store.update(id, WindowPatch::state(state));
        tracing::debug!(window_id = %id, "restored window");
        self.focus_and_raise(id);
        true
    }

    /// Taskbar entry press: restore when minimized, minimize when it is the
    /// active window, activate otherwise.
    pub fn taskbar_click(&mut self, id: WindowId) -> bool {
        let Some(window) = self.store.get(id) else {
            return false;
        };
        if window.is_minimized() {
            self.restore(id)
        } else if self.active == Some(id) {
            self.minimize(id)
        } else {
            self.activate(id)
        }
    }

    pub fn set_position(&mut self, id: WindowId, position: Point) -> bool {
        self.store.update(id, WindowPatch::position(position))
    }

    /// Overwrite a window's size, raising it to the minimum dimensions.
    pub fn set_size(&mut self, id: WindowId, size: Size) -> bool {
        self.store.update(id, WindowPatch::size(clamp_size(size)))
    }

    pub fn set_title(&mut self, id: WindowId, title: impl Into<String>) -> bool {
        self.store.update(
            id,
            WindowPatch {
                title: Some(title.into()),
                ..WindowPatch::default()
            },
        )
    }

    /// Full-viewport bounds used by maximized windows, leaving room for the
    /// taskbar.
    pub fn maximized_bounds(&self) -> Bounds {
        Bounds::new(
            0,
            0,
            self.viewport.width,
            (self.viewport.height - self.taskbar_height).max(0),
        )
    }

    /// Where a window is drawn, or `None` when it is unknown or minimized.
    pub fn frame_bounds(&self, id: WindowId) -> Option<Bounds> {
        let window = self.store.get(id)?;
        if window.is_minimized() {
            None
        } else if window.is_maximized() {
            Some(self.maximized_bounds())
        } else {
            Some(window.bounds())
        }
    }

    /// Visible windows bottom to top. Equal z values keep insertion order.
    pub fn display_order(&self) -> Vec<WindowId> {
        let mut visible: Vec<(u64, usize, WindowId)> = self
            .store
            .iter()
            .enumerate()
            .filter(|(_, w)| !w.is_minimized())
            .map(|(idx, w)| (w.z_index(), idx, w.id()))
            .collect();
        visible.sort_unstable();
        visible.into_iter().map(|(_, _, id)| id).collect()
    }

    /// Start a title-bar drag. Refused for minimized or maximized windows.
    pub fn begin_drag(&mut self, id: WindowId, pointer: Point) -> bool {
        let Some(window) = self.store.get(id) else {
            return false;
        };
        if window.is_minimized() || window.is_maximized() {
            return false;
        }
        let gesture = DragGesture::start(id, window.position(), pointer);
        self.activate(id);
        tracing::debug!(window_id = %id, offset = ?gesture.offset, "drag started");
        self.interaction = Some(Interaction::Drag(gesture));
        true
    }

    /// Start a resize from `direction`. Refused for minimized or maximized
    /// windows.
    pub fn begin_resize(&mut self, id: WindowId, direction: ResizeDirection, pointer: Point) -> bool {
        let Some(window) = self.store.get(id) else {
            return false;
        };
        if window.is_minimized() || window.is_maximized() {
            return false;
        }
        let gesture = ResizeGesture::start(id, direction, window.bounds(), pointer);
        self.activate(id);
        tracing::debug!(window_id = %id, %direction, "resize started");
        self.interaction = Some(Interaction::Resize(gesture));
        true
    }

    /// Feed a pointer position into the gesture in progress. Returns whether
    /// any geometry changed.
    pub fn pointer_move(&mut self, pointer: Point) -> bool {
        let Some(interaction) = self.interaction else {
            return false;
        };
        let id = interaction.id();
        let Some(window) = self.store.get(id) else {
            self.interaction = None;
            return false;
        };
        if window.is_minimized() || window.is_maximized() {
            return false;
        }
        match interaction {
            Interaction::Drag(drag) => {
                let position = drag.origin_for(pointer, self.viewport);
                self.store.update(id, WindowPatch::position(position))
            }
            Interaction::Resize(resize) => {
                let outcome = resize.outcome_for(pointer);
                self.store.update(
                    id,
                    WindowPatch {
                        size: Some(outcome.size),
                        position: outcome.position,
                        ..WindowPatch::default()
                    },
                )
            }
        }
    }

    /// End the gesture in progress, if any.
    pub fn pointer_up(&mut self) -> bool {
        match self.interaction.take() {
            Some(interaction) => {
                tracing::debug!(window_id = %interaction.id(), "gesture ended");
                true
            }
            None => false,
        }
    }

    /// Topmost window part under `pointer`.
    pub fn hit_test(&self, pointer: Point) -> Option<WindowHit> {
        self.display_order().into_iter().rev().find_map(|id| {
            let frame = self.frame_bounds(id)?;
            if !frame.contains(pointer) {
                return None;
            }
            let maximized = self.store.get(id).is_some_and(Window::is_maximized);
            let target = if let Some(direction) = (!maximized)
                .then(|| {
                    resize_handle_at(
                        frame,
                        pointer,
                        self.metrics.resize_corner,
                        self.metrics.resize_edge,
                    )
                })
                .flatten()
            {
                PointerTarget::Resize(direction)
            } else if let Some(action) = self.metrics.header_action(frame, pointer) {
                PointerTarget::Header(action)
            } else {
                PointerTarget::Body
            };
            Some(WindowHit { id, target })
        })
    }

    pub fn pointer_down(&mut self, pointer: Point) -> Option<WindowHit> {
        self.pointer_down_at(pointer, Instant::now())
    }

    /// Route a pointer press: start a gesture, run a title-bar button, or
    /// focus the window under the pointer. `now` drives double-click
    /// detection on the title bar.
    pub fn pointer_down_at(&mut self, pointer: Point, now: Instant) -> Option<WindowHit> {
        let hit = self.hit_test(pointer)?;
        let id = hit.id;
        match hit.target {
            PointerTarget::Resize(direction) => {
                self.last_header_click = None;
                self.begin_resize(id, direction, pointer);
            }
            PointerTarget::Header(HeaderAction::Minimize) => {
                self.last_header_click = None;
                self.minimize(id);
            }
            PointerTarget::Header(HeaderAction::Maximize) => {
                self.last_header_click = None;
                self.toggle_maximize(id);
            }
            PointerTarget::Header(HeaderAction::Close) => {
                self.last_header_click = None;
                self.close(id);
            }
            PointerTarget::Header(HeaderAction::Drag) => {
                let threshold = Duration::from_millis(DOUBLE_CLICK_MILLIS);
                if let Some((prev_id, prev)) = self.last_header_click
                    && prev_id == id
                    && now.saturating_duration_since(prev) <= threshold
                {
                    self.last_header_click = None;
                    self.activate(id);
                    self.toggle_maximize(id);
                    return Some(hit);
                }
                self.last_header_click = Some((id, now));
                if !self.begin_drag(id, pointer) {
                    self.activate(id);
                }
            }
            PointerTarget::Body => {
                self.activate(id);
            }
        }
        Some(hit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{MIN_WINDOW_HEIGHT, MIN_WINDOW_WIDTH};

    fn wm() -> WindowManager {
        WindowManager::new(Viewport::new(1280, 800))
    }

    fn assert_active_is_frontmost(wm: &WindowManager) {
        let Some(active) = wm.active_window() else {
            return;
        };
        assert!(!active.is_minimized());
        for w in wm.windows().iter().filter(|w| w.id() != active.id()) {
            assert!(active.z_index() > w.z_index(), "{:?} vs {:?}", active, w);
        }
    }

    #[test]
    fn launch_cascades_and_uses_catalog_defaults() {
        let mut wm = wm();
        let a = wm.launch("notepad");
        let b = wm.launch("paint");
        let wa = wm.window(a).unwrap();
        let wb = wm.window(b).unwrap();
        assert_eq!(wa.position(), Point::new(100, 100));
        assert_eq!(wa.size(), Size::new(600, 400));
        assert_eq!(wa.title(), "Notepad");
        assert_eq!(wb.position(), Point::new(130, 130));
        assert_eq!(wb.size(), Size::new(800, 600));
        assert_eq!(wm.active(), Some(b));
        assert_active_is_frontmost(&wm);
    }

    #[test]
    fn relaunch_reuses_the_existing_window() {
        let mut wm = wm();
        let a = wm.launch("notepad");
        let _b = wm.launch("terminal");
        assert_eq!(wm.launch("notepad"), a);
        assert_eq!(wm.windows().len(), 2);
        assert_eq!(wm.active(), Some(a));
        assert_active_is_frontmost(&wm);
    }

    #[test]
    fn relaunch_restores_a_minimized_window() {
        let mut wm = wm();
        let a = wm.launch("notepad");
        wm.minimize(a);
        assert_eq!(wm.launch("notepad"), a);
        assert!(!wm.window(a).unwrap().is_minimized());
        assert_eq!(wm.active(), Some(a));
    }

    #[test]
    fn ids_are_never_reused() {
        let mut wm = wm();
        let a = wm.launch("notepad");
        wm.close(a);
        let b = wm.launch("notepad");
        assert_ne!(a, b);
    }

    #[test]
    fn new_window_is_frontmost_even_after_focus_churn() {
        let mut wm = wm();
        let a = wm.launch("notepad");
        let b = wm.launch("terminal");
        wm.activate(a);
        wm.activate(b);
        wm.activate(a);
        let c = wm.launch("paint");
        assert_eq!(wm.active(), Some(c));
        assert_active_is_frontmost(&wm);
    }

    #[test]
    fn activate_active_window_keeps_z() {
        let mut wm = wm();
        let a = wm.launch("notepad");
        let z = wm.window(a).unwrap().z_index();
        assert!(wm.activate(a));
        assert_eq!(wm.window(a).unwrap().z_index(), z);
    }

    #[test]
    fn unknown_ids_are_reported_not_fatal() {
        let mut wm = wm();
        let ghost = WindowId::from_seq(42);
        assert!(!wm.activate(ghost));
        assert!(!wm.close(ghost));
        assert!(!wm.minimize(ghost));
        assert!(!wm.toggle_maximize(ghost));
        assert!(!wm.restore(ghost));
        assert!(!wm.set_position(ghost, Point::new(1, 1)));
        assert!(!wm.set_size(ghost, Size::new(300, 300)));
        assert!(!wm.begin_drag(ghost, Point::new(0, 0)));
        assert!(!wm.taskbar_click(ghost));
        assert_eq!(wm.active(), None);
    }

    #[test]
    fn closing_active_focuses_highest_visible_window() {
        let mut wm = wm();
        let a = wm.launch("notepad");
        let b = wm.launch("terminal");
        let c = wm.launch("paint");
        wm.activate(a);
        wm.activate(c);
        wm.minimize(b);
        wm.activate(c);
        assert!(wm.close(c));
        assert_eq!(wm.active(), Some(a));
        assert_active_is_frontmost(&wm);
        assert_eq!(
            wm.take_closed_windows(),
            vec![ClosedWindow {
                id: c,
                app_id: AppId::from("paint")
            }]
        );
        assert!(wm.take_closed_windows().is_empty());
    }

    #[test]
    fn fallback_focus_is_raised_above_minimized_windows() {
        let mut wm = wm();
        let a = wm.launch("notepad");
        let b = wm.launch("terminal");
        wm.minimize(b);
        assert_eq!(wm.active(), Some(a));
        assert_active_is_frontmost(&wm);
    }

    #[test]
    fn closing_inactive_window_keeps_focus() {
        let mut wm = wm();
        let a = wm.launch("notepad");
        let b = wm.launch("terminal");
        wm.activate(a);
        wm.close(b);
        assert_eq!(wm.active(), Some(a));
    }

    #[test]
    fn minimizing_the_only_window_clears_focus_and_restore_raises_it() {
        let mut wm = wm();
        let a = wm.launch("notepad");
        let before = wm.window(a).unwrap().z_index();
        wm.minimize(a);
        assert_eq!(wm.active(), None);
        wm.restore(a);
        assert_eq!(wm.active(), Some(a));
        assert!(wm.window(a).unwrap().z_index() > before);
    }

    #[test]
    fn maximize_twice_restores_floating_geometry() {
        let mut wm = wm();
        let a = wm.launch("notepad");
        let before = wm.window(a).unwrap().bounds();
        wm.toggle_maximize(a);
        assert_eq!(wm.frame_bounds(a), Some(Bounds::new(0, 0, 1280, 800 - 48)));
        wm.toggle_maximize(a);
        assert_eq!(wm.frame_bounds(a), Some(before));
    }

    #[test]
    fn maximized_windows_refuse_gestures() {
        let mut wm = wm();
        let a = wm.launch("notepad");
        wm.toggle_maximize(a);
        assert!(!wm.begin_drag(a, Point::new(200, 110)));
        assert!(!wm.begin_resize(a, ResizeDirection::SouthEast, Point::new(699, 499)));
        assert!(wm.interaction().is_none());
    }

    #[test]
    fn drag_then_resize_scenario() {
        let mut wm = wm();
        let a = wm.launch("notepad");
        assert!(wm.begin_drag(a, Point::new(200, 110)));
        wm.pointer_move(Point::new(250, 130));
        assert!(wm.pointer_up());
        assert_eq!(wm.window(a).unwrap().position(), Point::new(150, 120));

        assert!(wm.begin_resize(a, ResizeDirection::SouthEast, Point::new(749, 519)));
        wm.pointer_move(Point::new(849, 569));
        wm.pointer_up();
        let w = wm.window(a).unwrap();
        assert_eq!(w.size(), Size::new(700, 450));
        assert_eq!(w.position(), Point::new(150, 120));
    }

    #[test]
    fn moves_after_pointer_up_are_ignored() {
        let mut wm = wm();
        let a = wm.launch("notepad");
        wm.begin_drag(a, Point::new(200, 110));
        wm.pointer_up();
        assert!(!wm.pointer_move(Point::new(600, 600)));
        assert_eq!(wm.window(a).unwrap().position(), Point::new(100, 100));
    }

    #[test]
    fn resize_clamps_large_negative_deltas() {
        let mut wm = wm();
        let a = wm.launch("notepad");
        wm.begin_resize(a, ResizeDirection::NorthWest, Point::new(100, 100));
        wm.pointer_move(Point::new(50_000, 50_000));
        let w = wm.window(a).unwrap();
        assert_eq!(w.size(), Size::new(MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT));
        assert_eq!(w.bounds().right(), 700);
        assert_eq!(w.bounds().bottom(), 500);
    }

    #[test]
    fn extreme_pointer_moves_do_not_overflow() {
        let mut wm = wm();
        let a = wm.launch("notepad");
        assert!(wm.begin_resize(a, ResizeDirection::West, Point::new(100, 200)));
        assert!(wm.pointer_move(Point::new(i32::MIN, 200)));
        assert!(wm.window(a).unwrap().size().width >= MIN_WINDOW_WIDTH);
        assert!(wm.pointer_move(Point::new(i32::MAX, 200)));
        let w = wm.window(a).unwrap();
        assert_eq!(w.size().width, MIN_WINDOW_WIDTH);
        assert_eq!(w.bounds().right(), 700);
        let grab_x = w.position().x + 10;
        wm.pointer_up();

        assert!(wm.begin_drag(a, Point::new(grab_x, 110)));
        assert!(wm.pointer_move(Point::new(i32::MIN, i32::MAX)));
        assert_eq!(wm.window(a).unwrap().position(), Point::new(0, 700));
    }

    #[test]
    fn set_title_renames_known_windows_only() {
        let mut wm = wm();
        let a = wm.launch("notepad");
        assert!(wm.set_title(a, "notes.txt - Notepad"));
        assert_eq!(wm.window(a).unwrap().title(), "notes.txt - Notepad");
        wm.close(a);
        assert!(!wm.set_title(a, "gone"));
    }

    #[test]
    fn closing_mid_gesture_drops_the_gesture() {
        let mut wm = wm();
        let a = wm.launch("notepad");
        wm.begin_drag(a, Point::new(200, 110));
        wm.close(a);
        assert!(wm.interaction().is_none());
        assert!(!wm.pointer_move(Point::new(10, 10)));
    }

    #[test]
    fn taskbar_click_cycles_minimize_restore_activate() {
        let mut wm = wm();
        let a = wm.launch("notepad");
        let b = wm.launch("terminal");
        assert!(wm.taskbar_click(a));
        assert_eq!(wm.active(), Some(a));
        assert!(wm.taskbar_click(a));
        assert!(wm.window(a).unwrap().is_minimized());
        assert_eq!(wm.active(), Some(b));
        assert!(wm.taskbar_click(a));
        assert!(!wm.window(a).unwrap().is_minimized());
        assert_eq!(wm.active(), Some(a));
    }

    #[test]
    fn set_size_enforces_minimums() {
        let mut wm = wm();
        let a = wm.launch("notepad");
        wm.set_size(a, Size::new(10, 10));
        assert_eq!(
            wm.window(a).unwrap().size(),
            Size::new(MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT)
        );
    }

    #[test]
    fn pointer_down_on_title_bar_starts_drag_and_focuses() {
        let mut wm = wm();
        let a = wm.launch("notepad");
        let _b = wm.launch("terminal");
        // notepad title bar, left of terminal's frame
        let hit = wm.pointer_down(Point::new(115, 115)).unwrap();
        assert_eq!(hit.id, a);
        assert_eq!(hit.target, PointerTarget::Header(HeaderAction::Drag));
        assert_eq!(wm.active(), Some(a));
        assert!(matches!(wm.interaction(), Some(Interaction::Drag(_))));
    }

    #[test]
    fn pointer_down_hits_topmost_window_first() {
        let mut wm = wm();
        let _a = wm.launch("notepad");
        let b = wm.launch("terminal");
        let hit = wm.pointer_down(Point::new(400, 300)).unwrap();
        assert_eq!(hit.id, b);
        assert_eq!(hit.target, PointerTarget::Body);
        assert!(wm.interaction().is_none());
    }

    #[test]
    fn pointer_down_on_corner_starts_resize() {
        let mut wm = wm();
        let a = wm.launch("notepad");
        let hit = wm.pointer_down(Point::new(695, 495)).unwrap();
        assert_eq!(hit.id, a);
        assert_eq!(hit.target, PointerTarget::Resize(ResizeDirection::SouthEast));
        assert!(matches!(wm.interaction(), Some(Interaction::Resize(_))));
    }

    #[test]
    fn title_buttons_run_lifecycle_actions() {
        let mut wm = wm();
        let a = wm.launch("notepad");
        let frame = wm.frame_bounds(a).unwrap();
        let [(_, min), (_, max), (_, close)] = wm.metrics().buttons(frame);

        wm.pointer_down(Point::new(max.x + 2, max.y + 10));
        assert!(wm.window(a).unwrap().is_maximized());
        wm.toggle_maximize(a);

        wm.pointer_down(Point::new(min.x + 2, min.y + 10));
        assert!(wm.window(a).unwrap().is_minimized());
        wm.restore(a);

        wm.pointer_down(Point::new(close.x + 2, close.y + 10));
        assert!(wm.window(a).is_none());
        assert_eq!(wm.active(), None);
    }

    #[test]
    fn double_click_on_title_bar_toggles_maximize() {
        let mut wm = wm();
        let a = wm.launch("notepad");
        let t0 = Instant::now();
        wm.pointer_down_at(Point::new(200, 110), t0);
        wm.pointer_up();
        wm.pointer_down_at(Point::new(200, 110), t0 + Duration::from_millis(200));
        assert!(wm.window(a).unwrap().is_maximized());
        assert!(wm.interaction().is_none());
    }

    #[test]
    fn slow_second_click_is_not_a_double_click() {
        let mut wm = wm();
        let a = wm.launch("notepad");
        let t0 = Instant::now();
        wm.pointer_down_at(Point::new(200, 110), t0);
        wm.pointer_up();
        wm.pointer_down_at(Point::new(200, 110), t0 + Duration::from_secs(2));
        assert!(!wm.window(a).unwrap().is_maximized());
    }

    #[test]
    fn display_order_skips_minimized_windows() {
        let mut wm = wm();
        let a = wm.launch("notepad");
        let b = wm.launch("terminal");
        let c = wm.launch("paint");
        wm.minimize(b);
        wm.activate(a);
        assert_eq!(wm.display_order(), vec![c, a]);
        assert_eq!(wm.frame_bounds(b), None);
    }
}
