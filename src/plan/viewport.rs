/// Viewport builder — screen rectangles and fixed-point viewport records.
///
/// Maps a stage's screen rectangle and recursion depth to the
/// rasterizer's viewport encoding: 10.2 fixed-point scale/translation
/// halves, with the Z window compressed exponentially per recursion
/// level so nested views never Z-fight their ancestors.

use bytemuck::{Pod, Zeroable};
use crate::renderer::{RenderState, ViewportHandle};
use super::render_plan::STARTING_RENDER_DEPTH;

/// Target framebuffer width in pixels.
pub const SCREEN_WD: i32 = 320;
/// Target framebuffer height in pixels.
pub const SCREEN_HT: i32 = 240;

/// Minimum viewport span per axis, in pixels.
pub const MIN_VP_WIDTH: i32 = 64;

/// Maximum Z value of the rasterizer's depth range.
pub const G_MAXZ: i32 = 0x03FF;

/// Integer screen rectangle, min-inclusive / max-exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenRect {
    pub min_x: i32,
    pub max_x: i32,
    pub min_y: i32,
    pub max_y: i32,
}

impl ScreenRect {
    pub fn new(min_x: i32, max_x: i32, min_y: i32, max_y: i32) -> Self {
        Self { min_x, max_x, min_y, max_y }
    }

    /// The whole framebuffer.
    pub fn full_screen() -> Self {
        Self::new(0, SCREEN_WD, 0, SCREEN_HT)
    }

    pub fn width(&self) -> i32 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> i32 {
        self.max_y - self.min_y
    }

    /// Empty or inverted on either axis.
    pub fn is_degenerate(&self) -> bool {
        self.min_x >= self.max_x || self.min_y >= self.max_y
    }

    /// Clamp all four edges so `self` lies within `parent`.
    pub fn clamp_to(&mut self, parent: &ScreenRect) {
        self.min_x = self.min_x.max(parent.min_x);
        self.max_x = self.max_x.min(parent.max_x);
        self.min_y = self.min_y.max(parent.min_y);
        self.max_y = self.max_y.min(parent.max_y);
    }

    /// True when `other` lies entirely within `self`.
    pub fn contains(&self, other: &ScreenRect) -> bool {
        self.min_x <= other.min_x
            && self.max_x >= other.max_x
            && self.min_y <= other.min_y
            && self.max_y >= other.max_y
    }
}

/// Rasterizer viewport record: scale and translation halves in 10.2
/// fixed point for X/Y, raw depth-range units for Z.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Pod, Zeroable)]
pub struct Vp {
    pub vscale: [i16; 4],
    pub vtrans: [i16; 4],
}

/// Grow a 1D span to at least `min_width`, keeping it on screen.
///
/// Narrow spans grow symmetrically about their center; a span pushed
/// against either screen edge is clamped back inside first. Whenever
/// `screen_size >= min_width`, the result satisfies
/// `max - min >= min_width`.
pub fn clamp_rect_to_min_width(min: &mut i32, max: &mut i32, screen_size: i32, min_width: i32) {
    if *max < min_width {
        *max = min_width;
    }

    if *min > screen_size - min_width {
        *min = screen_size - min_width;
    }

    let width_grow_by = min_width - (*max - *min);

    if width_grow_by > 0 {
        *min -= width_grow_by >> 1;
        *max += (width_grow_by + 1) >> 1;
    }
}

/// Depth value assigned to a recursion level.
///
/// The root level renders at Z = 0 (nearest); each portal crossing gets
/// an exponentially thinner, farther Z slice. Depths below zero saturate
/// at the far end of the range.
pub fn depth_to_z(depth: i32) -> i32 {
    if depth >= STARTING_RENDER_DEPTH {
        0
    } else if depth < 0 {
        G_MAXZ
    } else {
        G_MAXZ - (G_MAXZ >> (STARTING_RENDER_DEPTH - depth))
    }
}

/// Build and upload the viewport record for a stage.
///
/// Returns `None` only when the frame's viewport pool is exhausted;
/// the stage is then unusable, not an error.
pub fn build_viewport(
    rect: &ScreenRect,
    depth: i32,
    state: &mut dyn RenderState,
) -> Option<(Vp, ViewportHandle)> {
    let mut min_x = rect.min_x;
    let mut max_x = rect.max_x;
    let mut min_y = rect.min_y;
    let mut max_y = rect.max_y;

    let min_z = depth_to_z(depth);
    let max_z = depth_to_z(depth - 1);

    clamp_rect_to_min_width(&mut min_x, &mut max_x, SCREEN_WD, MIN_VP_WIDTH);
    clamp_rect_to_min_width(&mut min_y, &mut max_y, SCREEN_HT, MIN_VP_WIDTH);

    let viewport = Vp {
        vscale: [
            ((max_x - min_x) << 1) as i16,
            ((max_y - min_y) << 1) as i16,
            ((max_z - min_z) >> 1) as i16,
            0,
        ],
        vtrans: [
            ((max_x + min_x) << 1) as i16,
            ((max_y + min_y) << 1) as i16,
            ((max_z + min_z) >> 1) as i16,
            0,
        ],
    };

    let handle = state.request_viewport(&viewport)?;
    Some((viewport, handle))
}

#[cfg(test)]
#[path = "viewport_tests.rs"]
mod tests;
