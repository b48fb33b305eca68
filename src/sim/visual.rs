//! Fold visual state
//!
//! One visual per pool slot: the paper and mask placements a renderer draws
//! verbatim, plus a contact-shadow opacity derived from the drag distance.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::VISUAL_EPSILON;
use crate::tuning::{FloatRange, FoldTuning};
use crate::remap_clamp;

use super::geometry::FoldGeometry;

/// A (position, rotation) pair for the placement sink
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Placement {
    pub position: Vec2,
    /// Rotation around the sheet normal, radians
    pub angle: f32,
}

impl Placement {
    pub const REST: Placement = Placement {
        position: Vec2::ZERO,
        angle: 0.0,
    };
}

/// Visual state for one pooled fold
#[derive(Debug, Clone)]
pub struct FoldVisual {
    active: bool,
    stack_order: usize,
    paper: Placement,
    mask: Placement,
    shadow_alpha: f32,
    shadow_distance: FloatRange,
    shadow_opacity: FloatRange,
    mask_extent: f32,
}

impl FoldVisual {
    pub fn new(tuning: &FoldTuning) -> Self {
        Self {
            active: false,
            stack_order: 0,
            paper: Placement::REST,
            mask: Placement::REST,
            shadow_alpha: 0.0,
            shadow_distance: tuning.shadow_distance,
            shadow_opacity: tuning.shadow_opacity,
            mask_extent: tuning.mask_extent,
        }
    }

    /// Activate on pool acquire with the stacking order for this fold
    pub(crate) fn acquire(&mut self, stack_order: usize) {
        self.active = true;
        self.stack_order = stack_order;
    }

    /// Deactivate on pool release
    pub(crate) fn release(&mut self) {
        self.active = false;
        self.shadow_alpha = 0.0;
    }

    /// Apply one drag update's geometry. Idempotent: identical geometry in,
    /// identical visual state out.
    pub fn apply_geometry(&mut self, geo: &FoldGeometry) {
        // The mask covers the region behind the crease; offset its center
        // from the crease midpoint along the drag direction
        let mask_position =
            geo.mask_origin + geo.drag_direction.normalize_or_zero() * self.mask_extent;

        self.paper = Placement {
            position: geo.paper_position,
            angle: geo.paper_angle,
        };
        self.mask = Placement {
            position: mask_position,
            angle: geo.mask_angle,
        };
        self.shadow_alpha = remap_clamp(geo.drag_distance, self.shadow_distance, self.shadow_opacity);
        // Hide folds sitting at (or snapped back to) the origin
        self.active = geo.drag_distance > VISUAL_EPSILON;
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Draw order: newer simultaneous folds stack above older ones
    pub fn stack_order(&self) -> usize {
        self.stack_order
    }

    pub fn paper(&self) -> Placement {
        self.paper
    }

    pub fn mask(&self) -> Placement {
        self.mask
    }

    pub fn shadow_alpha(&self) -> f32 {
        self.shadow_alpha
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::geometry::{FoldKind, compute_fold_geometry};

    fn geometry_at(position: Vec2) -> FoldGeometry {
        compute_fold_geometry(FoldKind::Corner, Vec2::new(0.5, 0.5), 0.0, position, 0.0)
    }

    #[test]
    fn test_apply_geometry_is_idempotent() {
        let tuning = FoldTuning::default();
        let mut visual = FoldVisual::new(&tuning);
        visual.acquire(0);

        let geo = geometry_at(Vec2::new(0.1, 0.1));
        visual.apply_geometry(&geo);
        let first = (visual.paper(), visual.mask(), visual.shadow_alpha());
        visual.apply_geometry(&geo);
        let second = (visual.paper(), visual.mask(), visual.shadow_alpha());
        assert_eq!(first, second);
    }

    #[test]
    fn test_mask_offset_along_drag_direction() {
        let tuning = FoldTuning::default();
        let mut visual = FoldVisual::new(&tuning);
        visual.acquire(0);

        // Straight diagonal pull: drag direction points back at the origin
        let geo = geometry_at(Vec2::new(-0.1, -0.1));
        visual.apply_geometry(&geo);

        let expected =
            geo.mask_origin + geo.drag_direction.normalize_or_zero() * tuning.mask_extent;
        assert!((visual.mask().position - expected).length() < 1e-6);
        assert!((visual.mask().angle - geo.mask_angle).abs() < 1e-6);
    }

    #[test]
    fn test_shadow_tracks_distance() {
        let tuning = FoldTuning::default();
        let mut visual = FoldVisual::new(&tuning);
        visual.acquire(0);

        // Far past the shadow distance range: clamped to max opacity
        visual.apply_geometry(&geometry_at(Vec2::new(-0.4, -0.4)));
        assert!((visual.shadow_alpha() - tuning.shadow_opacity.max).abs() < 1e-6);

        // At the origin: no shadow
        visual.apply_geometry(&geometry_at(Vec2::new(0.5, 0.5)));
        assert!(visual.shadow_alpha().abs() < 1e-6);
    }

    #[test]
    fn test_inactive_below_visual_epsilon() {
        let tuning = FoldTuning::default();
        let mut visual = FoldVisual::new(&tuning);
        visual.acquire(2);
        assert!(visual.is_active());
        assert_eq!(visual.stack_order(), 2);

        // A real drag shows the fold
        visual.apply_geometry(&geometry_at(Vec2::new(0.0, 0.0)));
        assert!(visual.is_active());

        // Snapping back to (almost) the origin hides it again
        visual.apply_geometry(&geometry_at(Vec2::new(0.499, 0.5)));
        assert!(!visual.is_active());
    }
}
