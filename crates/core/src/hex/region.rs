//! Algorithms that enumerate groups of hexes: disks (ranges), lenses
//! (intersections of two ranges), rings and lines.
//!
//! Each algorithm comes in two flavors. The plain version allocates and
//! returns a fresh `Vec`. The `_into` version appends to a `Vec` that you
//! pass in, then hands it back, so a hot loop can reuse a single buffer. All
//! of these work in cube space; convert your coordinates first if you're using
//! another system.

use crate::hex::{CubeCoord, CubeCoordMap, CubeVec, Direction};
use fnv::FnvBuildHasher;
use log::trace;
use std::cmp;

/// Calculate the number of hexes within `radius` steps of a center hex.
/// Radius 0 means 1 hex, 1 is 7 hexes, 2 is 19, etc.
pub fn range_len(radius: u32) -> usize {
    // We'll always have 3r^2+3r+1 hexes (a reduction of a geometric sum).
    // f(0) = 1, and we add 6r hexes for every step after that, so:
    // 1, (+6) 7, (+12) 19, (+18) 37, ...
    let r = radius as usize;
    3 * r * r + 3 * r + 1
}

/// Calculate the number of hexes exactly `radius` steps from a center hex.
/// Radius 0 is just the center.
pub fn ring_len(radius: u32) -> usize {
    if radius == 0 {
        1
    } else {
        6 * radius as usize
    }
}

/// Get every hex within `radius` steps of `center`, including the center
/// itself. The output always has [range_len] elements.
pub fn range(center: CubeCoord, radius: u32) -> Vec<CubeCoord> {
    let mut store = Vec::with_capacity(range_len(radius));
    range_into(center, radius, &mut store);
    store
}

/// Same as [range], but appends to an existing buffer
pub fn range_into(
    center: CubeCoord,
    radius: u32,
    store: &mut Vec<CubeCoord>,
) -> &mut Vec<CubeCoord> {
    let r = radius as i32;
    store.reserve(range_len(radius));
    for x in -r..=r {
        // If we just do [-r,r] for y as well, then we end up with a diamond
        // pattern instead of a hexagon
        // https://www.redblobgames.com/grids/hexagons/#range
        let y_min = cmp::max(-r, -x - r);
        let y_max = cmp::min(r, -x + r);
        for y in y_min..=y_max {
            store.push(center + CubeVec::new(x, y));
        }
    }
    store
}

/// Build a map holding one value for every hex within `radius` steps of
/// `center`.
///
/// ## Arguments
///
/// - `center`: Middle of the map
/// - `radius`: Distance from the center to the edge of the map, in all
///   directions. 0 means a map of 1 hex, 1 is 7 hexes, 2 => 19, etc.
/// - `initializer`: Function called to initialize each value in the map,
///   based on its position
pub fn range_map<T>(
    center: CubeCoord,
    radius: u32,
    initializer: impl Fn(CubeCoord) -> T,
) -> CubeCoordMap<T> {
    let mut map = CubeCoordMap::with_capacity_and_hasher(
        range_len(radius),
        FnvBuildHasher::default(),
    );
    map.extend(
        range(center, radius)
            .into_iter()
            .map(|pos| (pos, initializer(pos))),
    );
    debug_assert_eq!(map.len(), range_len(radius), "expected 3r²+3r+1 hexes");
    map
}

/// Get every hex that is within `a_radius` of `a` **and** within `b_radius`
/// of `b`. Empty if the two ranges don't overlap.
pub fn intersection(
    a: CubeCoord,
    a_radius: u32,
    b: CubeCoord,
    b_radius: u32,
) -> Vec<CubeCoord> {
    let mut store = Vec::new();
    intersection_into(a, a_radius, b, b_radius, &mut store);
    store
}

/// Same as [intersection], but appends to an existing buffer
pub fn intersection_into(
    a: CubeCoord,
    a_radius: u32,
    b: CubeCoord,
    b_radius: u32,
    store: &mut Vec<CubeCoord>,
) -> &mut Vec<CubeCoord> {
    let (ra, rb) = (a_radius as i32, b_radius as i32);

    // A range is the set of hexes that are within r on *every* axis, so the
    // overlap of two ranges is just the overlap on each axis
    let x_min = cmp::max(a.x() - ra, b.x() - rb);
    let x_max = cmp::min(a.x() + ra, b.x() + rb);
    let y_min = cmp::max(a.y() - ra, b.y() - rb);
    let y_max = cmp::min(a.y() + ra, b.y() + rb);
    let z_min = cmp::max(a.z() - ra, b.z() - rb);
    let z_max = cmp::min(a.z() + ra, b.z() + rb);

    // If the bounds are inconsistent, these loops just don't run
    for x in x_min..=x_max {
        // Tighten the y bounds using the z bounds, since z = -x-y
        let y_lo = cmp::max(y_min, -x - z_max);
        let y_hi = cmp::min(y_max, -x - z_min);
        for y in y_lo..=y_hi {
            store.push(CubeCoord::new_xy(x, y));
        }
    }
    store
}

/// Get every hex exactly `radius` steps from `center`. The ring starts at the
/// hex `radius` steps in direction [Direction::SW] and walks counter-clockwise
/// from there. For radius 0, the ring is just the center hex.
pub fn ring(center: CubeCoord, radius: u32) -> Vec<CubeCoord> {
    let mut store = Vec::with_capacity(ring_len(radius));
    ring_into(center, radius, &mut store);
    store
}

/// Same as [ring], but appends to an existing buffer
pub fn ring_into(
    center: CubeCoord,
    radius: u32,
    store: &mut Vec<CubeCoord>,
) -> &mut Vec<CubeCoord> {
    if radius == 0 {
        store.push(center);
        return store;
    }

    store.reserve(ring_len(radius));
    let mut pos = center + Direction::SW.vec() * radius as i32;
    // Walk the 6 sides of the ring. Starting from SW and heading E first
    // means the last side ends right back where we started.
    for dir in Direction::iter() {
        for _ in 0..radius {
            store.push(pos);
            pos += dir.vec();
        }
    }
    debug_assert_eq!(pos, center + Direction::SW.vec() * radius as i32);
    store
}

/// Get the hexes along a straight line from `start` to `end`, inclusive on
/// both ends. The output always has `distance + 1` elements.
pub fn line(start: CubeCoord, end: CubeCoord) -> Vec<CubeCoord> {
    let mut store = Vec::with_capacity(start.distance_to(end) as usize + 1);
    line_into(start, end, &mut store);
    store
}

/// Same as [line], but appends to an existing buffer
pub fn line_into(
    start: CubeCoord,
    end: CubeCoord,
    store: &mut Vec<CubeCoord>,
) -> &mut Vec<CubeCoord> {
    if start == end {
        trace!("Line from {} to itself", start);
        store.push(start);
    } else if start.is_neighbor(end) {
        trace!("Line between neighbors {} and {}", start, end);
        store.push(start);
        store.push(end);
    } else {
        // Sample n evenly spaced points along the line and snap each one to
        // the grid. The first point is the start itself, so it's never
        // rounded.
        let n = start.distance_to(end);
        store.reserve(n as usize + 1);
        store.push(start);
        for i in 1..=n {
            let t = f64::from(i) / f64::from(n);
            store.push(start.lerp(end, t).round());
        }
    }
    store
}

// Convenience methods, for when you're already holding a coordinate
impl CubeCoord {
    /// See [range]
    pub fn range(self, radius: u32) -> Vec<CubeCoord> {
        range(self, radius)
    }

    /// See [ring]
    pub fn ring(self, radius: u32) -> Vec<CubeCoord> {
        ring(self, radius)
    }

    /// See [line]
    pub fn line_to(self, end: CubeCoord) -> Vec<CubeCoord> {
        line(self, end)
    }
}
