/// Plan executor — replays finished stages into the draw sink.
///
/// Stages run in reverse creation order so the deepest portal views are
/// rasterized before the views that frame them (painter's algorithm
/// under scissor rects). Command-budget exhaustion aborts the remaining,
/// shallower stages: they would draw under what is already committed.

use crate::engine_debug;
use crate::renderer::RenderState;
use crate::scene::Scene;
use super::render_plan::{PortalRenderType, RenderPlan};

impl RenderPlan {
    /// Replay the plan, emitting camera, viewport, scissor, portal-cover
    /// and room-geometry commands for every stage, innermost first.
    pub fn execute(&self, scene: &Scene, state: &mut dyn RenderState) {
        for index in (0..self.stage_count()).rev() {
            let stage = &self.stages()[index];

            if state.apply_matrices(&stage.matrix_info).is_err() {
                engine_debug!(
                    "rift3d::plan",
                    "command budget exhausted at stage {}; skipping {} outer stage(s)",
                    index,
                    index
                );
                return;
            }

            state.set_viewport(stage.viewport_handle);
            state.set_scissor(stage.rect);

            let mut portal_index = if stage.render_type.contains(PortalRenderType::SECOND_CLOSER) {
                1
            } else {
                0
            };

            for _ in 0..2 {
                let portal = &scene.portals[portal_index];
                let model = portal.model_matrix();

                let has_live_child = stage.children[portal_index].is_some()
                    && stage.render_type.contains(PortalRenderType::enabled(portal_index));

                if has_live_child {
                    let opacity = portal.opacity.clamp(0.0, 1.0);

                    // Matrix-pool exhaustion skips this cover only
                    if state.draw_portal_face(portal_index, opacity, &model).is_ok()
                        && stage.parent.is_none()
                        && self.clipped_portal() == Some(portal_index)
                        && !self.near_polygon().is_empty()
                    {
                        // Patch the seam where the root camera's near
                        // plane slices through the portal surface
                        let _ = state.draw_screen_cover(self.near_polygon());
                    }
                } else {
                    let _ = state.draw_closed_cover(portal_index, &model);
                }

                portal_index = 1 - portal_index;
            }

            state.draw_static(
                &stage.camera.transform,
                &stage.matrix_info.culling,
                stage.visible_rooms,
            );
        }
    }
}

#[cfg(test)]
#[path = "executor_tests.rs"]
mod tests;
