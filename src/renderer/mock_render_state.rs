/// Mock RenderState for unit tests (no GPU required)
///
/// Records every emitted command and exposes configurable budgets for
/// the viewport pool, the matrix pool, and the display command budget,
/// so tests can drive every exhaustion path deterministically.

use glam::{I16Vec2, Mat4};
use crate::camera::{CameraMatrixInfo, CullingFrustum};
use crate::error::{Error, Result};
use crate::plan::{ScreenRect, Vp};
use crate::scene::{RoomSet, Transform};
use super::render_state::{MatrixHandle, RenderState, ViewportHandle};

// ============================================================================
// Recorded commands
// ============================================================================

/// One recorded sink call, in emission order.
#[derive(Debug, Clone)]
pub enum Command {
    ApplyMatrices { matrix_slot: MatrixHandle },
    SetViewport(ViewportHandle),
    SetScissor(ScreenRect),
    PortalFace { portal_index: usize, opacity: f32 },
    ClosedCover { portal_index: usize },
    ScreenCover { vertex_count: usize },
    Static { rooms: RoomSet },
}

// ============================================================================
// Mock RenderState
// ============================================================================

/// Recording mock with per-pool budgets.
pub struct MockRenderState {
    pub commands: Vec<Command>,
    pub viewports: Vec<Vp>,
    viewport_budget: u32,
    matrix_budget: u32,
    apply_budget: u32,
    matrices_used: u32,
}

impl MockRenderState {
    /// Mock with effectively unlimited budgets.
    pub fn new() -> Self {
        Self::with_budgets(u32::MAX, u32::MAX, u32::MAX)
    }

    /// Mock with explicit pool budgets:
    /// viewport records, matrix slots, apply-matrices command budget.
    pub fn with_budgets(viewports: u32, matrices: u32, applies: u32) -> Self {
        Self {
            commands: Vec::new(),
            viewports: Vec::new(),
            viewport_budget: viewports,
            matrix_budget: matrices,
            apply_budget: applies,
            matrices_used: 0,
        }
    }

    /// Indices, per recorded command, of viewport/scissor pairs.
    pub fn viewport_scissor_pairs(&self) -> Vec<(ViewportHandle, ScreenRect)> {
        let mut pairs = Vec::new();
        for window in self.commands.windows(2) {
            if let [Command::SetViewport(vp), Command::SetScissor(rect)] = window {
                pairs.push((*vp, *rect));
            }
        }
        pairs
    }

    pub fn count_static_draws(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, Command::Static { .. }))
            .count()
    }
}

impl Default for MockRenderState {
    fn default() -> Self {
        Self::new()
    }
}

impl RenderState for MockRenderState {
    fn request_viewport(&mut self, viewport: &Vp) -> Option<ViewportHandle> {
        if self.viewports.len() as u32 >= self.viewport_budget {
            return None;
        }
        self.viewports.push(*viewport);
        Some(ViewportHandle(self.viewports.len() as u32 - 1))
    }

    fn request_matrices(&mut self, count: u32) -> Option<MatrixHandle> {
        if self.matrices_used + count > self.matrix_budget {
            return None;
        }
        let handle = MatrixHandle(self.matrices_used);
        self.matrices_used += count;
        Some(handle)
    }

    fn apply_matrices(&mut self, matrices: &CameraMatrixInfo) -> Result<()> {
        if self.commands.iter().filter(|c| matches!(c, Command::ApplyMatrices { .. })).count()
            as u32
            >= self.apply_budget
        {
            return Err(Error::CommandBudgetExhausted);
        }
        self.commands.push(Command::ApplyMatrices { matrix_slot: matrices.matrix_slot });
        Ok(())
    }

    fn set_viewport(&mut self, viewport: ViewportHandle) {
        self.commands.push(Command::SetViewport(viewport));
    }

    fn set_scissor(&mut self, rect: ScreenRect) {
        self.commands.push(Command::SetScissor(rect));
    }

    fn draw_portal_face(&mut self, portal_index: usize, opacity: f32, _model: &Mat4) -> Result<()> {
        // The open cover consumes one model matrix slot, like the backend
        if self.matrices_used + 1 > self.matrix_budget {
            return Err(Error::PoolExhausted("matrices"));
        }
        self.matrices_used += 1;
        self.commands.push(Command::PortalFace { portal_index, opacity });
        Ok(())
    }

    fn draw_closed_cover(&mut self, portal_index: usize, _model: &Mat4) -> Result<()> {
        self.commands.push(Command::ClosedCover { portal_index });
        Ok(())
    }

    fn draw_screen_cover(&mut self, polygon: &[I16Vec2]) -> Result<()> {
        self.commands.push(Command::ScreenCover { vertex_count: polygon.len() });
        Ok(())
    }

    fn draw_static(&mut self, _camera: &Transform, _culling: &CullingFrustum, rooms: RoomSet) {
        self.commands.push(Command::Static { rooms });
    }
}
