//! Deterministic fold core
//!
//! All fold logic lives here. This module must stay pure:
//! - Event-driven updates only (begin/move/end per pointer gesture)
//! - No rendering or platform dependencies
//! - Failures absorbed as no-ops (interactive-UI tolerance model)

pub mod border;
pub mod geometry;
pub mod point;
pub mod pool;
pub mod sheet;
pub mod visual;

pub use border::BorderCoordinator;
pub use geometry::{
    Bounds, FoldGeometry, FoldKind, allowed_direction, compute_fold_geometry, fold_bounds,
    paper_theta_offset,
};
pub use point::{FoldPoint, FoldPointState};
pub use pool::FoldPool;
pub use sheet::{DragEvent, FoldPointSpec, Sheet};
pub use visual::{FoldVisual, Placement};
