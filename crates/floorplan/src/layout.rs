//! Bounds computation for floors and whole floor plans.
//!
//! Bounds are taken over top-level rooms only. Sub-rooms use the same
//! absolute frame as their parents but are not assumed to lie inside them,
//! so they do not widen a floor's outline.
//!
//! # Pipeline Position
//!
//! ```text
//! Semantic Model (Floorplan)
//!     ↓ layout (this module)
//! Bounds per floor, union over floors
//!     ↓ export
//! SVG
//! ```

use floorplan_core::{
    geometry::Bounds,
    semantic::{Floorplan, Room},
};

/// Minimum rectangle enclosing every room in `rooms`.
///
/// Returns `None` for an empty list: there is nothing to outline.
///
/// # Examples
///
/// ```
/// # use floorplan::layout::floor_bounds;
/// # use floorplan_core::geometry::{Point, Size};
/// # use floorplan_core::semantic::{Room, RoomKind};
/// let hall = Room::new("Hall", RoomKind::Room, Point::new(2.0, 3.0), Size::new(4.0, 5.0));
///
/// let bounds = floor_bounds(std::slice::from_ref(&hall)).unwrap();
/// assert_eq!((bounds.min_x(), bounds.min_y()), (2.0, 3.0));
/// assert_eq!((bounds.max_x(), bounds.max_y()), (6.0, 8.0));
/// assert_eq!((bounds.width(), bounds.height()), (4.0, 5.0));
///
/// assert!(floor_bounds(&[]).is_none());
/// ```
pub fn floor_bounds(rooms: &[Room]) -> Option<Bounds> {
    rooms
        .iter()
        .map(Room::bounds)
        .reduce(|acc, bounds| acc.merge(&bounds))
}

/// Union of the bounds of every non-empty floor.
///
/// Floors share one coordinate space, so they overlap in the result.
pub fn floorplan_bounds(floorplan: &Floorplan) -> Option<Bounds> {
    floorplan
        .floors()
        .iter()
        .filter_map(|floor| floor_bounds(floor.rooms()))
        .reduce(|acc, bounds| acc.merge(&bounds))
}
