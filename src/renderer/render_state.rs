/// RenderState trait — per-frame resource pools and the draw sink.
///
/// Everything the planner and executor need from the rendering backend:
/// bounded pools for viewport and matrix records, and command emission
/// for viewports, scissors, portal covers, and static room geometry.
///
/// All pools reset between frames. Exhaustion is the only failure mode
/// and is never fatal: a planner that cannot obtain a record skips the
/// stage, an executor that runs out of command budget stops the replay.

use glam::{I16Vec2, Mat4};
use crate::camera::{CameraMatrixInfo, CullingFrustum};
use crate::error::Result;
use crate::plan::{ScreenRect, Vp};
use crate::scene::{RoomSet, Transform};

/// Slot in the backend's per-frame viewport pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewportHandle(pub u32);

/// Slot in the backend's per-frame matrix pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatrixHandle(pub u32);

/// Per-frame rendering state: pools plus command emission.
pub trait RenderState {
    // ===== FRAME POOLS =====

    /// Upload a viewport record into the frame pool.
    /// `None` when the pool is exhausted.
    fn request_viewport(&mut self, viewport: &Vp) -> Option<ViewportHandle>;

    /// Reserve `count` consecutive matrix slots.
    /// `None` when the pool is exhausted.
    fn request_matrices(&mut self, count: u32) -> Option<MatrixHandle>;

    // ===== COMMAND EMISSION =====

    /// Bind a stage's projection/view matrices and culling state.
    /// Fails only with `Error::CommandBudgetExhausted`; the executor
    /// aborts the remaining replay when that happens.
    fn apply_matrices(&mut self, matrices: &CameraMatrixInfo) -> Result<()>;

    /// Emit a viewport-set command for a previously uploaded record.
    fn set_viewport(&mut self, viewport: ViewportHandle);

    /// Emit a scissor-rect command.
    fn set_scissor(&mut self, rect: ScreenRect);

    /// Draw the translucent open-portal cover for `portal_index`,
    /// blended by `opacity` (already clamped to 0..=1), placed by
    /// `model`. Fails on matrix-pool exhaustion; the executor skips
    /// just this portal.
    fn draw_portal_face(&mut self, portal_index: usize, opacity: f32, model: &Mat4) -> Result<()>;

    /// Draw the opaque closed-portal cover for `portal_index`.
    fn draw_closed_cover(&mut self, portal_index: usize, model: &Mat4) -> Result<()>;

    /// Draw a screen-space patch over the near-clip seam polygon.
    fn draw_screen_cover(&mut self, polygon: &[I16Vec2]) -> Result<()>;

    /// Draw static world geometry restricted to `rooms`, culled by
    /// `culling`, viewed from `camera`.
    fn draw_static(&mut self, camera: &Transform, culling: &CullingFrustum, rooms: RoomSet);
}
