//! Fold geometry kernel
//!
//! Pure functions mapping a drag (fold origin, current pointer position) to
//! the placement of the folded flap and its coverage mask. A drag to position
//! `p` folds the flap across the perpendicular bisector of `origin..p`:
//! the paper orientation is the *doubled* direction angle (mirror reflection),
//! the mask sits at the midpoint rotated by the half angle.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::{rotate_vec, wrap_tau};

/// What a fold point grabs: a corner of the sheet or an edge midpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FoldKind {
    Corner,
    Edge,
}

impl FoldKind {
    /// Offset from the drag position to the flap center, before rotation.
    /// Corners carry half the flap diagonal, edges half the flap side.
    #[inline]
    pub fn paper_offset(self) -> Vec2 {
        match self {
            FoldKind::Corner => Vec2::new(0.0, PAPER_CORNER_OFFSET),
            FoldKind::Edge => Vec2::new(0.0, PAPER_EDGE_OFFSET),
        }
    }
}

/// Computed placement for one drag update. Produced fresh every update,
/// never retained.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FoldGeometry {
    /// Flap center position
    pub paper_position: Vec2,
    /// Flap orientation (radians), twice the drag direction angle
    pub paper_angle: f32,
    /// Midpoint of origin and drag position; the crease passes through here
    pub mask_origin: Vec2,
    /// Mask orientation (radians), the drag direction angle itself
    pub mask_angle: f32,
    /// Vector from the drag position back to the fold origin
    pub drag_direction: Vec2,
    /// Euclidean distance from the drag position to the fold origin
    pub drag_distance: f32,
}

/// Compute the fold geometry for a drag of `kind` anchored at `origin`,
/// currently at `position`.
///
/// `theta_offset` is the per-point orientation phase from
/// [`paper_theta_offset`]. A zero-length drag has no direction; the kernel
/// falls back to `fallback_angle` (the caller's last computed paper angle)
/// instead of feeding atan2 a zero vector.
pub fn compute_fold_geometry(
    kind: FoldKind,
    origin: Vec2,
    theta_offset: f32,
    position: Vec2,
    fallback_angle: f32,
) -> FoldGeometry {
    let dir = origin - position;
    let distance = dir.length();

    if distance <= f32::EPSILON {
        // Degenerate drag: keep the previous orientation, zero direction
        let paper_angle = fallback_angle;
        return FoldGeometry {
            paper_position: position + rotate_vec(kind.paper_offset(), paper_angle - theta_offset),
            paper_angle,
            mask_origin: origin,
            mask_angle: paper_angle * 0.5,
            drag_direction: Vec2::ZERO,
            drag_distance: 0.0,
        };
    }

    let angle = dir.y.atan2(dir.x);
    let paper_angle = 2.0 * angle;

    FoldGeometry {
        paper_position: position + rotate_vec(kind.paper_offset(), paper_angle - theta_offset),
        paper_angle,
        mask_origin: (origin + position) * 0.5,
        mask_angle: angle,
        drag_direction: dir,
        drag_distance: distance,
    }
}

/// Orientation phase for a fold point at `origin`, computed once at setup.
///
/// Rounds the direction-from-sheet-center angle down to the nearest 22.5°
/// step and adds 90°, so the paper offset lands on the correct flap corner
/// for every one of the symmetric fold positions.
pub fn paper_theta_offset(origin: Vec2) -> f32 {
    let angle = wrap_tau(origin.y.atan2(origin.x));
    // Nudge before the floor so an atan2 result a hair under an exact step
    // still quantizes to it
    let quantized = (angle / THETA_STEP + 1e-4).floor() * THETA_STEP;
    quantized + std::f32::consts::FRAC_PI_2
}

/// The unit-quadrant sign vector a fold point may move within, derived from
/// the signs of its origin. Zero on an axis the origin lies on.
pub fn allowed_direction(origin: Vec2) -> Vec2 {
    let sign = |v: f32| {
        if v.abs() <= f32::EPSILON { 0.0 } else { v.signum() }
    };
    Vec2::new(sign(origin.x), sign(origin.y))
}

/// Axis-aligned drag-legal rectangle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub min: Vec2,
    pub max: Vec2,
}

impl Bounds {
    /// The whole sheet
    pub const SHEET: Bounds = Bounds {
        min: Vec2::splat(-SHEET_HALF_EXTENT),
        max: Vec2::splat(SHEET_HALF_EXTENT),
    };

    #[inline]
    pub fn clamp(&self, p: Vec2) -> Vec2 {
        p.clamp(self.min, self.max)
    }
}

/// Drag bounds for a fold point: corners roam the whole sheet, edge
/// midpoints are pinned to the axis they travel along (a horizontal-origin
/// edge travels along x, so y is pinned to 0, and vice versa).
pub fn fold_bounds(kind: FoldKind, origin: Vec2) -> Bounds {
    let mut bounds = Bounds::SHEET;
    if kind == FoldKind::Edge {
        let angle = wrap_tau(origin.y.atan2(origin.x));
        let step = (angle / std::f32::consts::FRAC_PI_2 + 1e-4).floor() as i32 % 4;
        if step == 0 || step == 2 {
            bounds.min.y = 0.0;
            bounds.max.y = 0.0;
        } else {
            bounds.min.x = 0.0;
            bounds.max.x = 0.0;
        }
    }
    bounds
}
