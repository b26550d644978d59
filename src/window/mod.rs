pub mod decorator;
pub mod store;

mod window_manager;

use std::fmt;

pub use store::{WindowPatch, WindowStore};
pub use window_manager::{ClosedWindow, PointerTarget, WindowHit, WindowManager};

/// Opaque window identity. Allocated from a per-manager sequence and never
/// reused for the lifetime of the process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WindowId(u64);

impl WindowId {
    pub(crate) const fn from_seq(seq: u64) -> Self {
        Self(seq)
    }

    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for WindowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "window-{}", self.0)
    }
}

/// Application identifier selecting the content rendered inside a window.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AppId(String);

impl AppId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for AppId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for AppId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl fmt::Display for AppId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Viewport-space pixel coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

impl Size {
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }
}

/// Pixel rectangle with a signed origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Bounds {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Bounds {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub const fn from_parts(origin: Point, size: Size) -> Self {
        Self::new(origin.x, origin.y, size.width, size.height)
    }

    pub const fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub const fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    pub const fn right(&self) -> i32 {
        self.x.saturating_add(self.width)
    }

    pub const fn bottom(&self) -> i32 {
        self.y.saturating_add(self.height)
    }

    pub fn contains(&self, point: Point) -> bool {
        if self.width <= 0 || self.height <= 0 {
            return false;
        }
        point.x >= self.x && point.x < self.right() && point.y >= self.y && point.y < self.bottom()
    }
}

/// Dimensions of the area windows live in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Viewport {
    pub width: i32,
    pub height: i32,
}

impl Viewport {
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }
}

/// How a window is presented.
///
/// A minimized window remembers whether it was maximized, so restoring it
/// brings back the same presentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WindowState {
    #[default]
    Normal,
    Maximized,
    Minimized { maximized: bool },
}

impl WindowState {
    pub const fn is_minimized(self) -> bool {
        matches!(self, WindowState::Minimized { .. })
    }

    /// True when the window presents (or will present, once restored) at
    /// full-viewport bounds.
    pub const fn is_maximized(self) -> bool {
        matches!(
            self,
            WindowState::Maximized | WindowState::Minimized { maximized: true }
        )
    }

    pub(crate) const fn minimized(self) -> Self {
        WindowState::Minimized {
            maximized: self.is_maximized(),
        }
    }

    pub(crate) const fn restored(self) -> Self {
        if self.is_maximized() {
            WindowState::Maximized
        } else {
            WindowState::Normal
        }
    }

    pub(crate) const fn maximize_toggled(self) -> Self {
        match self {
            WindowState::Normal => WindowState::Maximized,
            WindowState::Maximized => WindowState::Normal,
            WindowState::Minimized { maximized } => WindowState::Minimized {
                maximized: !maximized,
            },
        }
    }
}

/// One open application instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Window {
    id: WindowId,
    app_id: AppId,
    title: String,
    position: Point,
    size: Size,
    state: WindowState,
    z_index: u64,
}

impl Window {
    pub fn new(
        id: WindowId,
        app_id: AppId,
        title: impl Into<String>,
        position: Point,
        size: Size,
        z_index: u64,
    ) -> Self {
        Self {
            id,
            app_id,
            title: title.into(),
            position,
            size,
            state: WindowState::Normal,
            z_index,
        }
    }

    pub fn id(&self) -> WindowId {
        self.id
    }

    pub fn app_id(&self) -> &AppId {
        &self.app_id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn position(&self) -> Point {
        self.position
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn state(&self) -> WindowState {
        self.state
    }

    pub fn z_index(&self) -> u64 {
        self.z_index
    }

    pub fn is_minimized(&self) -> bool {
        self.state.is_minimized()
    }

    pub fn is_maximized(&self) -> bool {
        self.state.is_maximized()
    }

    /// Floating bounds, ignoring maximization.
    pub fn bounds(&self) -> Bounds {
        Bounds::from_parts(self.position, self.size)
    }
}
