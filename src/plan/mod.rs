//! Plan module — the recursive portal render planner.
//!
//! Built once per frame: `RenderPlan::build` creates the root stage from
//! the primary camera and recursively plans one nested view stage per
//! visible, open portal, bounded by recursion depth and pool capacity.
//! `RenderPlan::execute` replays the finished stages innermost-first.

mod executor;
mod planner;
mod render_plan;
mod viewport;

pub use render_plan::{
    PortalRenderType, RenderPlan, Stage, StageHandle,
    MAX_PORTAL_STEPS, STARTING_RENDER_DEPTH,
};
pub use viewport::{
    build_viewport, clamp_rect_to_min_width, depth_to_z,
    ScreenRect, Vp, G_MAXZ, MIN_VP_WIDTH, SCREEN_HT, SCREEN_WD,
};
