//! The folding sheet
//!
//! Owns the fold points, the visual pool, and the border coordinator, and
//! drives the per-event pass: bounds clamp → border clamp → diagonal
//! projection → geometry kernel → visual update → border publish.
//!
//! Failure modes are silent by design: a drag refused by the pool or by a
//! neighbor lock simply produces no visible effect.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::tuning::FoldTuning;

use super::border::BorderCoordinator;
use super::geometry::{FoldKind, compute_fold_geometry};
use super::point::FoldPoint;
use super::pool::FoldPool;
use super::visual::FoldVisual;

/// Static setup description of one fold point. Neighbor indices refer to
/// positions in the spec list; the relation should be symmetric.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FoldPointSpec {
    pub kind: FoldKind,
    pub origin: Vec2,
    pub neighbors: Vec<usize>,
}

/// A projected pointer event targeted at one fold point. Positions are
/// sheet-local (see [`crate::viewport::Viewport`]); hit testing and pointer
/// bookkeeping are the caller's job.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DragEvent {
    Begin { point: usize },
    Move { point: usize, position: Vec2 },
    End { point: usize },
}

#[derive(Debug, Clone)]
pub struct Sheet {
    points: Vec<FoldPoint>,
    pool: FoldPool,
    borders: BorderCoordinator,
    rest_threshold: f32,
}

impl Sheet {
    pub fn new(specs: Vec<FoldPointSpec>, tuning: &FoldTuning) -> Self {
        let mut borders = BorderCoordinator::new();
        let points: Vec<FoldPoint> = specs
            .into_iter()
            .map(|spec| {
                let point = FoldPoint::new(spec.kind, spec.origin, spec.neighbors);
                borders.register(point.origin, point.allowed_dir);
                point
            })
            .collect();

        Self {
            points,
            pool: FoldPool::new(tuning),
            borders,
            rest_threshold: tuning.rest_threshold,
        }
    }

    /// The standard sheet: four corners and four edge midpoints, each
    /// corner adjacent to its two flanking edges.
    pub fn standard(tuning: &FoldTuning) -> Self {
        let corner = |x: f32, y: f32, neighbors: Vec<usize>| FoldPointSpec {
            kind: FoldKind::Corner,
            origin: Vec2::new(x, y),
            neighbors,
        };
        let edge = |x: f32, y: f32, neighbors: Vec<usize>| FoldPointSpec {
            kind: FoldKind::Edge,
            origin: Vec2::new(x, y),
            neighbors,
        };

        Self::new(
            vec![
                corner(0.5, 0.5, vec![4, 7]),   // 0 top right
                corner(-0.5, 0.5, vec![4, 5]),  // 1 top left
                corner(-0.5, -0.5, vec![5, 6]), // 2 bottom left
                corner(0.5, -0.5, vec![6, 7]),  // 3 bottom right
                edge(0.0, 0.5, vec![0, 1]),     // 4 top
                edge(-0.5, 0.0, vec![1, 2]),    // 5 left
                edge(0.0, -0.5, vec![2, 3]),    // 6 bottom
                edge(0.5, 0.0, vec![3, 0]),     // 7 right
            ],
            tuning,
        )
    }

    pub fn handle(&mut self, event: DragEvent) {
        match event {
            DragEvent::Begin { point } => self.drag_begin(point),
            DragEvent::Move { point, position } => self.drag_move(point, position),
            DragEvent::End { point } => self.drag_end(point),
        }
    }

    /// Start a drag on a fold point. Refused silently while the point is
    /// locked by an active neighbor or the pool is exhausted. A begin on a
    /// parked fold is a no-op: the held slot resumes on the next move.
    pub fn drag_begin(&mut self, point: usize) {
        let p = &self.points[point];
        if p.slot.is_some() {
            return;
        }
        if p.is_locked() {
            log::trace!("fold point {point}: drag refused, locked by a neighbor");
            return;
        }
        let Some(slot) = self.pool.acquire() else {
            log::trace!("fold point {point}: drag refused, no fold slot free");
            return;
        };

        self.points[point].slot = Some(slot);
        let neighbors = self.points[point].neighbors.clone();
        for n in neighbors {
            self.points[n].lock();
        }
        log::debug!("fold point {point}: drag started on slot {slot}");
    }

    /// Advance a drag to a new sheet-local position. Ignored when the point
    /// holds no slot.
    pub fn drag_move(&mut self, point: usize, position: Vec2) {
        let Some(slot) = self.points[point].slot else {
            return;
        };
        let p = &self.points[point];

        let mut pos = p.bounds.clamp(position);
        pos = self.borders.clamp(pos, p.allowed_dir);
        if p.kind == FoldKind::Corner {
            // Corners travel strictly along their diagonal: keep the less
            // folded coordinate on both axes
            let progress = pos * p.allowed_dir;
            let t = progress.x.max(progress.y);
            pos = p.allowed_dir * t;
        }

        let geo = compute_fold_geometry(p.kind, p.origin, p.theta_offset, pos, p.paper_angle);

        let p = &mut self.points[point];
        p.position = pos;
        p.paper_angle = geo.paper_angle;
        p.drag_distance = geo.drag_distance;

        self.pool.visual_mut(slot).apply_geometry(&geo);
        self.borders.publish(point, pos);
    }

    /// End a drag. Within the rest threshold the fold releases: neighbor
    /// locks drop, the slot returns to the pool, the point snaps to its
    /// origin. Beyond it the fold stays parked, keeping slot and locks,
    /// until dragged back near the origin and ended again.
    pub fn drag_end(&mut self, point: usize) {
        let p = &self.points[point];
        let Some(slot) = p.slot else {
            return;
        };
        if p.drag_distance >= self.rest_threshold {
            log::debug!(
                "fold point {point}: parked at distance {:.3}",
                p.drag_distance
            );
            return;
        }

        let neighbors = p.neighbors.clone();
        for n in neighbors {
            self.points[n].unlock();
        }
        self.pool.release(slot);

        let p = &mut self.points[point];
        p.slot = None;
        p.position = p.origin;
        p.drag_distance = 0.0;
        self.borders.reset(point);
        log::debug!("fold point {point}: returned to rest");
    }

    pub fn points(&self) -> &[FoldPoint] {
        &self.points
    }

    pub fn point(&self, index: usize) -> &FoldPoint {
        &self.points[index]
    }

    pub fn pool(&self) -> &FoldPool {
        &self.pool
    }

    /// The render surface: every pooled visual with its placements
    pub fn visuals(&self) -> &[FoldVisual] {
        self.pool.visuals()
    }

    pub fn borders(&self) -> &BorderCoordinator {
        &self.borders
    }
}
