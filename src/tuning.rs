//! Data-driven fold feel
//!
//! Everything a host application may want to tweak about how folds behave,
//! serializable as JSON so it can live next to the host's own settings.

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// An inclusive scalar range
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FloatRange {
    pub min: f32,
    pub max: f32,
}

impl FloatRange {
    pub const fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }
}

/// Fold behavior tuning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FoldTuning {
    /// Number of simultaneously active folds (pool capacity, floored at 1)
    pub fold_capacity: usize,
    /// Drag distance below which an ended fold releases and snaps home
    pub rest_threshold: f32,
    /// Mask half-size in sheet units
    pub mask_extent: f32,
    /// Drag distance range mapped onto the shadow opacity range
    pub shadow_distance: FloatRange,
    /// Contact shadow opacity range
    pub shadow_opacity: FloatRange,
}

impl Default for FoldTuning {
    fn default() -> Self {
        Self {
            fold_capacity: DEFAULT_FOLD_CAPACITY,
            rest_threshold: REST_THRESHOLD,
            mask_extent: DEFAULT_MASK_EXTENT,
            shadow_distance: FloatRange::new(0.0, 0.025),
            shadow_opacity: FloatRange::new(0.0, 0.16),
        }
    }
}

impl FoldTuning {
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
