/// RenderPlan — fixed-capacity arena of planned view stages.
///
/// Stages live in creation order in a bounded arena and reference each
/// other by index handles, never by pointer: every link is valid for
/// exactly one frame and destruction is dropping the plan. Stage 0 is
/// always the root view.

use bitflags::bitflags;
use glam::I16Vec2;
use crate::camera::{Camera, CameraMatrixInfo};
use crate::renderer::ViewportHandle;
use crate::scene::{RoomId, RoomSet};
use super::viewport::{ScreenRect, Vp};

/// Recursion depth assigned to the root stage. Depth decreases by one
/// per portal crossing and recursion stops at zero.
pub const STARTING_RENDER_DEPTH: i32 = 2;

/// Stage-pool capacity: hard bound on nested views per frame.
pub const MAX_PORTAL_STEPS: usize = 6;

bitflags! {
    /// Per-stage portal outcome flags accumulated during planning.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct PortalRenderType: u8 {
        /// Portal 0 faces the stage camera.
        const VISIBLE_0 = 0b0000_0001;
        /// Portal 1 faces the stage camera.
        const VISIBLE_1 = 0b0000_0010;
        /// Portal 0 committed a live child stage.
        const ENABLED_0 = 0b0000_0100;
        /// Portal 1 committed a live child stage.
        const ENABLED_1 = 0b0000_1000;
        /// Portal 1 is nearer to the stage camera than portal 0.
        const SECOND_CLOSER = 0b0001_0000;
    }
}

impl PortalRenderType {
    /// Visibility flag for the given portal index.
    pub fn visible(portal_index: usize) -> Self {
        if portal_index & 1 == 0 { Self::VISIBLE_0 } else { Self::VISIBLE_1 }
    }

    /// Live-child flag for the given portal index.
    pub fn enabled(portal_index: usize) -> Self {
        if portal_index & 1 == 0 { Self::ENABLED_0 } else { Self::ENABLED_1 }
    }
}

/// Frame-scoped index of a stage within its plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StageHandle(pub(crate) usize);

impl StageHandle {
    pub fn index(&self) -> usize {
        self.0
    }
}

/// One planned, renderable nested camera view.
#[derive(Debug, Clone)]
pub struct Stage {
    /// Recursion level; root is `STARTING_RENDER_DEPTH`, children one less.
    pub depth: i32,
    /// Committed screen rectangle; never degenerate.
    pub rect: ScreenRect,
    pub camera: Camera,
    pub aspect_ratio: f32,
    pub viewport: Vp,
    pub viewport_handle: ViewportHandle,
    pub matrix_info: CameraMatrixInfo,
    /// Portal whose quad the stage camera's near plane intersects, if
    /// any. Children of such a stage fall back to full-screen bounds.
    pub clipping_portal: Option<usize>,
    pub visible_rooms: RoomSet,
    /// Room this stage's visibility walk is seeded at.
    pub from_room: RoomId,
    /// Portal this stage emerged from (the exit side); `None` for the root.
    pub exit_portal: Option<usize>,
    pub render_type: PortalRenderType,
    pub parent: Option<StageHandle>,
    /// At most one child stage per portal, by handle.
    pub children: [Option<StageHandle>; 2],
}

/// Completed frame plan: stages in creation order plus the cached
/// near-clip seam polygon.
#[derive(Debug, Clone, Default)]
pub struct RenderPlan {
    stages: Vec<Stage>,
    near_polygon: Vec<I16Vec2>,
    clipped_portal: Option<usize>,
}

impl RenderPlan {
    pub(super) fn new() -> Self {
        Self {
            stages: Vec::with_capacity(MAX_PORTAL_STEPS),
            near_polygon: Vec::new(),
            clipped_portal: None,
        }
    }

    pub fn stage_count(&self) -> usize {
        self.stages.len()
    }

    /// All stages in creation order.
    pub fn stages(&self) -> &[Stage] {
        &self.stages
    }

    pub fn stage(&self, handle: StageHandle) -> &Stage {
        &self.stages[handle.0]
    }

    pub(super) fn stage_mut(&mut self, handle: StageHandle) -> &mut Stage {
        &mut self.stages[handle.0]
    }

    /// The root (stage 0), if the plan is non-empty.
    pub fn root(&self) -> Option<&Stage> {
        self.stages.first()
    }

    /// Append a stage, returning its handle. The planner checks
    /// capacity before building a stage; this only commits it.
    pub(super) fn commit_stage(&mut self, stage: Stage) -> StageHandle {
        debug_assert!(self.stages.len() < MAX_PORTAL_STEPS);
        self.stages.push(stage);
        StageHandle(self.stages.len() - 1)
    }

    /// Cached near-clip seam polygon and its owning portal.
    pub fn near_polygon(&self) -> &[I16Vec2] {
        &self.near_polygon
    }

    pub fn clipped_portal(&self) -> Option<usize> {
        self.clipped_portal
    }

    /// Cache the near-clip polygon produced while planning
    /// `portal_index`, replacing any earlier cache.
    pub(super) fn cache_near_polygon(&mut self, portal_index: usize, polygon: &[I16Vec2]) {
        self.near_polygon.clear();
        self.near_polygon.extend_from_slice(polygon);
        self.clipped_portal = Some(portal_index);
    }
}
