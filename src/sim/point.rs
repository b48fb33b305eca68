//! Fold point state
//!
//! One fold point per draggable corner or edge midpoint. Identity is its
//! fixed origin; everything else is drag-session state driven by the sheet.

use glam::Vec2;

use super::geometry::{Bounds, FoldKind, allowed_direction, fold_bounds, paper_theta_offset};

/// Observable state of a fold point
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FoldPointState {
    /// At rest, free to start a drag
    Idle,
    /// At rest but a neighbor's active fold refuses new drags
    Locked,
    /// Holding a pool slot; includes folds parked away from their origin
    Dragging,
}

#[derive(Debug, Clone)]
pub struct FoldPoint {
    pub(crate) kind: FoldKind,
    pub(crate) origin: Vec2,
    pub(crate) allowed_dir: Vec2,
    pub(crate) theta_offset: f32,
    pub(crate) bounds: Bounds,
    pub(crate) neighbors: Vec<usize>,
    pub(crate) lock_count: u32,
    pub(crate) position: Vec2,
    /// Last computed paper orientation, reused for zero-length drags
    pub(crate) paper_angle: f32,
    pub(crate) drag_distance: f32,
    /// Pool slot held while dragging or parked
    pub(crate) slot: Option<usize>,
}

impl FoldPoint {
    pub fn new(kind: FoldKind, origin: Vec2, neighbors: Vec<usize>) -> Self {
        Self {
            kind,
            origin,
            allowed_dir: allowed_direction(origin),
            theta_offset: paper_theta_offset(origin),
            bounds: fold_bounds(kind, origin),
            neighbors,
            lock_count: 0,
            position: origin,
            // First-update fallback: the orientation of a pull straight
            // toward the sheet center
            paper_angle: 2.0 * origin.y.atan2(origin.x),
            drag_distance: 0.0,
            slot: None,
        }
    }

    pub fn kind(&self) -> FoldKind {
        self.kind
    }

    pub fn origin(&self) -> Vec2 {
        self.origin
    }

    pub fn allowed_dir(&self) -> Vec2 {
        self.allowed_dir
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn neighbors(&self) -> &[usize] {
        &self.neighbors
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn drag_distance(&self) -> f32 {
        self.drag_distance
    }

    pub fn slot(&self) -> Option<usize> {
        self.slot
    }

    pub fn is_locked(&self) -> bool {
        self.lock_count > 0
    }

    pub fn state(&self) -> FoldPointState {
        if self.slot.is_some() {
            FoldPointState::Dragging
        } else if self.is_locked() {
            FoldPointState::Locked
        } else {
            FoldPointState::Idle
        }
    }

    pub(crate) fn lock(&mut self) {
        self.lock_count += 1;
    }

    pub(crate) fn unlock(&mut self) {
        self.lock_count = self.lock_count.saturating_sub(1);
    }
}
