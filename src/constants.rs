//! Shared crate-wide constants. All lengths are viewport pixels.

/// Smallest width a window can be resized to.
pub const MIN_WINDOW_WIDTH: i32 = 200;

/// Smallest height a window can be resized to.
pub const MIN_WINDOW_HEIGHT: i32 = 100;

/// Distance from the right and bottom viewport edges past which a dragged
/// window's origin cannot travel, so its title bar stays reachable.
pub const DRAG_VISIBLE_MARGIN: i32 = 100;

/// Origin of the first window opened on an empty desktop.
pub const CASCADE_ORIGIN: i32 = 100;

/// Offset applied per already-open window when placing a new one.
pub const CASCADE_STEP: i32 = 30;

/// Height reserved at the bottom of the viewport for the taskbar.
pub const DEFAULT_TASKBAR_HEIGHT: i32 = 48;

/// Height of the window title bar.
pub const TITLE_BAR_HEIGHT: i32 = 36;

/// Side length of the square corner resize handles.
pub const RESIZE_CORNER_SIZE: i32 = 12;

/// Thickness of the edge resize handles.
pub const RESIZE_EDGE_THICKNESS: i32 = 4;

/// Width of each title-bar button hit region.
pub const TITLE_BUTTON_WIDTH: i32 = 24;

/// Maximum gap between two title-bar presses that counts as a double click.
pub const DOUBLE_CLICK_MILLIS: u64 = 500;
