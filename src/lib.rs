//! Paper Fold - an interactive paper-folding toy
//!
//! Core modules:
//! - `sim`: Deterministic fold core (geometry, pooling, border coordination)
//! - `tuning`: Data-driven fold feel
//! - `viewport`: Screen-to-sheet projection for pointer input

pub mod sim;
pub mod tuning;
pub mod viewport;

pub use tuning::{FloatRange, FoldTuning};

use glam::Vec2;

/// Fold configuration constants
pub mod consts {
    /// Half extent of the sheet; positions live in the unit square ±0.5
    pub const SHEET_HALF_EXTENT: f32 = 0.5;

    /// Paper offset length for a corner fold (half diagonal of the flap)
    pub const PAPER_CORNER_OFFSET: f32 = std::f32::consts::FRAC_1_SQRT_2;
    /// Paper offset length for an edge fold (half side of the flap)
    pub const PAPER_EDGE_OFFSET: f32 = 0.5;

    /// Quantization step for the paper orientation phase (22.5 degrees)
    pub const THETA_STEP: f32 = std::f32::consts::FRAC_PI_8;

    /// Drag distance below which a fold counts as returned to rest
    pub const REST_THRESHOLD: f32 = 0.025;
    /// Drag distance below which a fold visual hides itself
    pub const VISUAL_EPSILON: f32 = 0.005;

    /// Default number of simultaneously active folds
    pub const DEFAULT_FOLD_CAPACITY: usize = 4;
    /// Default mask half-size in sheet units
    pub const DEFAULT_MASK_EXTENT: f32 = 0.5;
}

/// Normalize angle to [-π, π)
#[inline]
pub fn wrap_pi(mut angle: f32) -> f32 {
    use std::f32::consts::PI;
    while angle >= PI {
        angle -= 2.0 * PI;
    }
    while angle < -PI {
        angle += 2.0 * PI;
    }
    angle
}

/// Normalize angle to [0, 2π)
#[inline]
pub fn wrap_tau(mut angle: f32) -> f32 {
    use std::f32::consts::TAU;
    while angle >= TAU {
        angle -= TAU;
    }
    while angle < 0.0 {
        angle += TAU;
    }
    angle
}

/// Rotate a vector by an angle (radians, counterclockwise)
#[inline]
pub fn rotate_vec(v: Vec2, angle: f32) -> Vec2 {
    Vec2::from_angle(angle).rotate(v)
}

/// Remap a value from one range to another, clamped to the output range
#[inline]
pub fn remap_clamp(value: f32, from: FloatRange, to: FloatRange) -> f32 {
    let lo = to.min.min(to.max);
    let hi = to.min.max(to.max);
    let span = from.max - from.min;
    let t = if span.abs() <= f32::EPSILON {
        0.0
    } else {
        (value - from.min) / span
    };
    (to.min + (to.max - to.min) * t).clamp(lo, hi)
}
