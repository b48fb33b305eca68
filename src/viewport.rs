//! Screen-to-sheet projection
//!
//! The pointer source delivers screen-pixel positions; the sheet works in
//! its own unit square. This is the projection the drag boundary applies
//! before any clamping.

use glam::Vec2;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    /// Screen position of the sheet center, pixels
    pub center: Vec2,
    /// Pixels per sheet unit (the on-screen sheet is this many pixels wide)
    pub pixels_per_unit: f32,
}

impl Viewport {
    /// Viewport for a sheet of `sheet_pixels` width centered in a
    /// `width` x `height` canvas
    pub fn centered(width: f32, height: f32, sheet_pixels: f32) -> Self {
        Self {
            center: Vec2::new(width / 2.0, height / 2.0),
            pixels_per_unit: sheet_pixels,
        }
    }

    /// Project a screen position into sheet-local coordinates.
    /// Screen y grows downward, sheet y upward.
    pub fn screen_to_sheet(&self, screen: Vec2) -> Vec2 {
        let dx = screen.x - self.center.x;
        let dy = -(screen.y - self.center.y);
        Vec2::new(dx, dy) / self.pixels_per_unit
    }

    /// Inverse projection, for placing sheet-space results on screen
    pub fn sheet_to_screen(&self, sheet: Vec2) -> Vec2 {
        Vec2::new(
            self.center.x + sheet.x * self.pixels_per_unit,
            self.center.y - sheet.y * self.pixels_per_unit,
        )
    }
}
