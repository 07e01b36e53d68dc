//! Geometry primitives shared by the detector, resolver and pointer picking

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::state::Body;

/// Axis-aligned rectangle, origin at the top-left corner
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    /// Closest point on the rectangle to `p` (each axis clamped independently)
    #[inline]
    pub fn closest_point(&self, p: Vec2) -> Vec2 {
        p.clamp(self.pos, self.pos + self.size)
    }
}

/// Clamp `v` to `[lo, hi]`
#[inline]
pub fn clamp(v: f32, lo: f32, hi: f32) -> f32 {
    v.clamp(lo, hi)
}

/// Euclidean distance between two points
///
/// Callers that divide by this must guard against coincident points; the
/// resolver treats a near-zero distance as "no separable direction".
#[inline]
pub fn distance(a: Vec2, b: Vec2) -> f32 {
    a.distance(b)
}

/// True iff the circle overlaps the rectangle: the squared distance from the
/// center to the closest point on the rect is within the radius.
#[inline]
pub fn circle_rect_overlap(center: Vec2, radius: f32, rect: Rect) -> bool {
    center.distance_squared(rect.closest_point(center)) <= radius * radius
}

/// True iff two circles overlap (squared-distance test, touching counts)
#[inline]
pub fn circle_circle_overlap(a: &Body, b: &Body) -> bool {
    let reach = a.radius + b.radius;
    a.pos.distance_squared(b.pos) <= reach * reach
}

/// True iff `point` lies inside (or on) the body's circle
#[inline]
pub fn point_in_circle(body: &Body, point: Vec2) -> bool {
    body.pos.distance_squared(point) <= body.radius * body.radius
}
