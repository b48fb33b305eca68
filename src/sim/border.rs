//! Cross-fold border coordination
//!
//! Every fold point publishes its current coordinate per axis it constrains;
//! the coordinator clamps a candidate drag position so a fold advancing from
//! one side never crosses a fold already progressing from the opposite side.
//!
//! The four side sets are fixed at setup from each point's allowed
//! direction: negative x feeds the left set, positive x the right set, and
//! likewise top/bottom for y. A point never reads the set it feeds, so it
//! never constrains itself. Published values are whole-value replacements,
//! so a reader at worst sees the previous update's coordinate, which
//! self-corrects on the next one.

use glam::Vec2;

/// Published border coordinates plus the per-side registration lists.
/// Values are written only by the owning fold point's updates and read
/// read-only during the clamp pass.
#[derive(Debug, Clone, Default)]
pub struct BorderCoordinator {
    left: Vec<usize>,
    right: Vec<usize>,
    top: Vec<usize>,
    bottom: Vec<usize>,
    /// Rest positions, restored when a fold releases
    rest: Vec<Vec2>,
    /// Published x per point (meaningful only for left/right registrants)
    x: Vec<f32>,
    /// Published y per point (meaningful only for top/bottom registrants)
    y: Vec<f32>,
}

impl BorderCoordinator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a fold point; returns its border index. Registration order
    /// must match the sheet's point order.
    pub fn register(&mut self, origin: Vec2, allowed_dir: Vec2) -> usize {
        let index = self.rest.len();
        if allowed_dir.x < 0.0 {
            self.left.push(index);
        } else if allowed_dir.x > 0.0 {
            self.right.push(index);
        }
        if allowed_dir.y < 0.0 {
            self.bottom.push(index);
        } else if allowed_dir.y > 0.0 {
            self.top.push(index);
        }
        self.rest.push(origin);
        self.x.push(origin.x);
        self.y.push(origin.y);
        index
    }

    /// Publish a dragging point's current position
    pub fn publish(&mut self, index: usize, position: Vec2) {
        self.x[index] = position.x;
        self.y[index] = position.y;
    }

    /// Restore a released point's border values to its rest position
    pub fn reset(&mut self, index: usize) {
        let rest = self.rest[index];
        self.x[index] = rest.x;
        self.y[index] = rest.y;
    }

    /// Clamp a candidate position for a point moving within `allowed_dir`
    /// so it cannot cross any fold progressing from the opposite side.
    pub fn clamp(&self, mut position: Vec2, allowed_dir: Vec2) -> Vec2 {
        if allowed_dir.x < 0.0 {
            // Folding rightward across the sheet: stop at the nearest
            // right-side fold
            position.x = self.right.iter().fold(position.x, |v, &i| v.min(self.x[i]));
        } else if allowed_dir.x > 0.0 {
            position.x = self.left.iter().fold(position.x, |v, &i| v.max(self.x[i]));
        }

        if allowed_dir.y < 0.0 {
            position.y = self.top.iter().fold(position.y, |v, &i| v.min(self.y[i]));
        } else if allowed_dir.y > 0.0 {
            position.y = self
                .bottom
                .iter()
                .fold(position.y, |v, &i| v.max(self.y[i]));
        }

        position
    }
}
