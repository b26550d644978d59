use std::fmt;
use std::str::FromStr;

use crate::constants::{DRAG_VISIBLE_MARGIN, MIN_WINDOW_HEIGHT, MIN_WINDOW_WIDTH};
use crate::error::ParseDirectionError;
use crate::window::{Bounds, Point, Size, Viewport, WindowId};

/// Edge or corner a resize gesture was started from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResizeDirection {
    North,
    South,
    East,
    West,
    NorthEast,
    NorthWest,
    SouthEast,
    SouthWest,
}

impl ResizeDirection {
    pub const ALL: [ResizeDirection; 8] = [
        ResizeDirection::North,
        ResizeDirection::South,
        ResizeDirection::East,
        ResizeDirection::West,
        ResizeDirection::NorthEast,
        ResizeDirection::NorthWest,
        ResizeDirection::SouthEast,
        ResizeDirection::SouthWest,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            ResizeDirection::North => "n",
            ResizeDirection::South => "s",
            ResizeDirection::East => "e",
            ResizeDirection::West => "w",
            ResizeDirection::NorthEast => "ne",
            ResizeDirection::NorthWest => "nw",
            ResizeDirection::SouthEast => "se",
            ResizeDirection::SouthWest => "sw",
        }
    }

    pub const fn has_north(self) -> bool {
        matches!(
            self,
            ResizeDirection::North | ResizeDirection::NorthEast | ResizeDirection::NorthWest
        )
    }

    pub const fn has_south(self) -> bool {
        matches!(
            self,
            ResizeDirection::South | ResizeDirection::SouthEast | ResizeDirection::SouthWest
        )
    }

    pub const fn has_east(self) -> bool {
        matches!(
            self,
            ResizeDirection::East | ResizeDirection::NorthEast | ResizeDirection::SouthEast
        )
    }

    pub const fn has_west(self) -> bool {
        matches!(
            self,
            ResizeDirection::West | ResizeDirection::NorthWest | ResizeDirection::SouthWest
        )
    }

    /// Whether resizing in this direction moves the window origin.
    pub const fn moves_origin(self) -> bool {
        self.has_west() || self.has_north()
    }
}

impl fmt::Display for ResizeDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ResizeDirection {
    type Err = ParseDirectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ResizeDirection::ALL
            .into_iter()
            .find(|dir| dir.as_str() == s)
            .ok_or_else(|| ParseDirectionError(s.to_string()))
    }
}

/// Title-bar drag in progress. `offset` is the pointer position relative to
/// the window origin when the gesture started.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragGesture {
    pub id: WindowId,
    pub offset: Point,
}

impl DragGesture {
    pub fn start(id: WindowId, origin: Point, pointer: Point) -> Self {
        Self {
            id,
            offset: Point::new(
                pointer.x.saturating_sub(origin.x),
                pointer.y.saturating_sub(origin.y),
            ),
        }
    }

    pub fn origin_for(&self, pointer: Point, viewport: Viewport) -> Point {
        drag_to(pointer, self.offset, viewport)
    }
}

/// Resize in progress, anchored on the geometry captured at pointer-down.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResizeGesture {
    pub id: WindowId,
    pub direction: ResizeDirection,
    pub start: Bounds,
    pub start_pointer: Point,
}

impl ResizeGesture {
    pub fn start(id: WindowId, direction: ResizeDirection, start: Bounds, pointer: Point) -> Self {
        Self {
            id,
            direction,
            start,
            start_pointer: pointer,
        }
    }

    pub fn outcome_for(&self, pointer: Point) -> ResizeOutcome {
        resize_to(
            self.start,
            self.direction,
            pointer.x.saturating_sub(self.start_pointer.x),
            pointer.y.saturating_sub(self.start_pointer.y),
        )
    }
}

/// The single pointer gesture the manager is tracking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Interaction {
    Drag(DragGesture),
    Resize(ResizeGesture),
}

impl Interaction {
    pub fn id(&self) -> WindowId {
        match self {
            Interaction::Drag(drag) => drag.id,
            Interaction::Resize(resize) => resize.id,
        }
    }
}

/// Result of one resize step. `position` is only set when the direction
/// moves the origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResizeOutcome {
    pub size: Size,
    pub position: Option<Point>,
}

/// New origin for a drag: `pointer - offset`, kept inside
/// `[0, viewport - DRAG_VISIBLE_MARGIN]` on both axes. The lower bound wins
/// when the viewport is smaller than the margin.
pub fn drag_to(pointer: Point, offset: Point, viewport: Viewport) -> Point {
    let max_x = viewport.width - DRAG_VISIBLE_MARGIN;
    let max_y = viewport.height - DRAG_VISIBLE_MARGIN;
    Point::new(
        pointer.x.saturating_sub(offset.x).min(max_x).max(0),
        pointer.y.saturating_sub(offset.y).min(max_y).max(0),
    )
}

/// Apply a pointer delta to `start` for the given direction. Each axis is
/// handled independently; west and north keep the opposite edge fixed.
/// Arithmetic saturates, so any delta yields clamped geometry.
pub fn resize_to(start: Bounds, direction: ResizeDirection, dx: i32, dy: i32) -> ResizeOutcome {
    let mut width = start.width;
    let mut height = start.height;
    let mut x = start.x;
    let mut y = start.y;

    if direction.has_east() {
        width = start.width.saturating_add(dx).max(MIN_WINDOW_WIDTH);
    }
    if direction.has_south() {
        height = start.height.saturating_add(dy).max(MIN_WINDOW_HEIGHT);
    }
    if direction.has_west() {
        width = start.width.saturating_sub(dx).max(MIN_WINDOW_WIDTH);
        x = start.right().saturating_sub(width);
    }
    if direction.has_north() {
        height = start.height.saturating_sub(dy).max(MIN_WINDOW_HEIGHT);
        y = start.bottom().saturating_sub(height);
    }

    ResizeOutcome {
        size: Size::new(width, height),
        position: direction.moves_origin().then_some(Point::new(x, y)),
    }
}

/// Enforce the minimum window dimensions.
pub fn clamp_size(size: Size) -> Size {
    Size::new(
        size.width.max(MIN_WINDOW_WIDTH),
        size.height.max(MIN_WINDOW_HEIGHT),
    )
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResizeHandle {
    pub direction: ResizeDirection,
    pub rect: Bounds,
}

/// Hit regions of the eight resize handles, laid inside `bounds`: corners
/// of size `corner` and edges of thickness `edge` (width for the vertical
/// edges, height for the horizontal ones) inset by the corner size.
pub fn resize_handles(bounds: Bounds, corner: Size, edge: Size) -> Vec<ResizeHandle> {
    let right = bounds.right();
    let bottom = bounds.bottom();
    let inner_w = (bounds.width - 2 * corner.width).max(0);
    let inner_h = (bounds.height - 2 * corner.height).max(0);

    let mut handles = vec![
        ResizeHandle {
            direction: ResizeDirection::NorthWest,
            rect: Bounds::new(bounds.x, bounds.y, corner.width, corner.height),
        },
        ResizeHandle {
            direction: ResizeDirection::NorthEast,
            rect: Bounds::new(right - corner.width, bounds.y, corner.width, corner.height),
        },
        ResizeHandle {
            direction: ResizeDirection::SouthWest,
            rect: Bounds::new(bounds.x, bottom - corner.height, corner.width, corner.height),
        },
        ResizeHandle {
            direction: ResizeDirection::SouthEast,
            rect: Bounds::new(
                right - corner.width,
                bottom - corner.height,
                corner.width,
                corner.height,
            ),
        },
    ];
    if inner_w > 0 {
        handles.push(ResizeHandle {
            direction: ResizeDirection::North,
            rect: Bounds::new(bounds.x + corner.width, bounds.y, inner_w, edge.height),
        });
        handles.push(ResizeHandle {
            direction: ResizeDirection::South,
            rect: Bounds::new(
                bounds.x + corner.width,
                bottom - edge.height,
                inner_w,
                edge.height,
            ),
        });
    }
    if inner_h > 0 {
        handles.push(ResizeHandle {
            direction: ResizeDirection::West,
            rect: Bounds::new(bounds.x, bounds.y + corner.height, edge.width, inner_h),
        });
        handles.push(ResizeHandle {
            direction: ResizeDirection::East,
            rect: Bounds::new(
                right - edge.width,
                bounds.y + corner.height,
                edge.width,
                inner_h,
            ),
        });
    }
    handles
}

/// Direction of the handle under `point`, if any.
pub fn resize_handle_at(
    bounds: Bounds,
    point: Point,
    corner: Size,
    edge: Size,
) -> Option<ResizeDirection> {
    resize_handles(bounds, corner, edge)
        .into_iter()
        .find(|handle| handle.rect.contains(point))
        .map(|handle| handle.direction)
}
