/// Portal recursion planner.
///
/// `RenderPlan::build` seeds stage 0 from the primary camera, then
/// `finish_view` tests both portals from each stage and `plan_portal`
/// commits one child stage per visible, open portal: screen-space clip
/// bounds from the clipper, camera teleported through the portal pair,
/// near plane tightened, culling plane injected at the exit surface.
/// Recursion stops on depth, closed connections, or pool capacity.

use crate::camera::ScreenClipper;
use crate::engine_warn;
use crate::renderer::RenderState;
use crate::scene::{
    RoomSet, RoomVisibility, Scene, WorldGraph, FORWARD, PORTAL_OUTLINE, SCENE_SCALE,
};
use super::render_plan::{
    PortalRenderType, RenderPlan, Stage, StageHandle, MAX_PORTAL_STEPS, STARTING_RENDER_DEPTH,
};
use super::viewport::{build_viewport, ScreenRect, SCREEN_HT, SCREEN_WD};

impl RenderPlan {
    /// Build this frame's plan: root stage plus the recursive portal
    /// stage tree. An empty plan (no stages) is returned only when the
    /// frame pools cannot even host the root view.
    pub fn build(
        scene: &Scene,
        world: &dyn WorldGraph,
        visibility: &dyn RoomVisibility,
        state: &mut dyn RenderState,
    ) -> RenderPlan {
        let mut plan = RenderPlan::new();

        let Some(root) = root_stage(scene, state) else {
            engine_warn!("rift3d::plan", "frame pools exhausted before the root stage; plan is empty");
            return plan;
        };

        let root_handle = plan.commit_stage(root);
        finish_view(&mut plan, scene, world, visibility, state, root_handle);
        plan
    }
}

/// Full-screen root stage for the primary camera.
fn root_stage(scene: &Scene, state: &mut dyn RenderState) -> Option<Stage> {
    let rect = ScreenRect::full_screen();
    let aspect_ratio = SCREEN_WD as f32 / SCREEN_HT as f32;

    let (viewport, viewport_handle) = build_viewport(&rect, STARTING_RENDER_DEPTH, state)?;
    let matrix_info = scene.camera.setup_matrices(state, aspect_ratio)?;

    Some(Stage {
        depth: STARTING_RENDER_DEPTH,
        rect,
        camera: scene.camera,
        aspect_ratio,
        viewport,
        viewport_handle,
        matrix_info,
        clipping_portal: scene.camera_clipping_portal(),
        visible_rooms: RoomSet::EMPTY,
        from_room: scene.player_room,
        exit_portal: None,
        render_type: PortalRenderType::empty(),
        parent: None,
        children: [None, None],
    })
}

/// Complete a committed stage: determine its visible rooms, then try to
/// plan a child stage through each portal, nearer portal first.
fn finish_view(
    plan: &mut RenderPlan,
    scene: &Scene,
    world: &dyn WorldGraph,
    visibility: &dyn RoomVisibility,
    state: &mut dyn RenderState,
    handle: StageHandle,
) {
    let (culling, from_room, camera_position) = {
        let stage = plan.stage(handle);
        (
            stage.matrix_info.culling,
            stage.from_room,
            stage.camera.transform.position,
        )
    };

    let visible_rooms = visibility.visible_rooms(&culling, from_room);
    plan.stage_mut(handle).visible_rooms = visible_rooms;

    // Nearer-first ordering keeps the sibling screen split consistent
    let mut closer_portal = if camera_position
        .distance_squared(scene.portals[0].transform.position)
        < camera_position.distance_squared(scene.portals[1].transform.position)
    {
        0
    } else {
        1
    };

    if closer_portal == 1 {
        plan.stage_mut(handle).render_type |= PortalRenderType::SECOND_CLOSER;
    }

    let mut sibling_claim: Option<ScreenRect> = None;

    for _ in 0..2 {
        // The room a crossing of the paired portal lands in is the room
        // holding this portal
        let portal_room = world.room_on_other_side(1 - closer_portal);

        if plan.stage(handle).exit_portal != Some(closer_portal)
            && visibility.is_room_visible(visible_rooms, portal_room)
        {
            let result = plan_portal(
                plan,
                scene,
                world,
                visibility,
                state,
                handle,
                closer_portal,
                &mut sibling_claim,
            );

            plan.stage_mut(handle).render_type |= result;
        }

        closer_portal = 1 - closer_portal;
    }
}

/// Test one portal from `current` and, when everything lines up, commit
/// and recurse into a child stage for the view through it.
///
/// Returns the flags to accumulate on the parent: `visible` when the
/// portal faces the camera, plus `enabled` when a child was committed.
#[allow(clippy::too_many_arguments)]
fn plan_portal(
    plan: &mut RenderPlan,
    scene: &Scene,
    world: &dyn WorldGraph,
    visibility: &dyn RoomVisibility,
    state: &mut dyn RenderState,
    current: StageHandle,
    portal_index: usize,
    sibling_claim: &mut Option<ScreenRect>,
) -> PortalRenderType {
    let exit_portal_index = 1 - portal_index;
    let portal = &scene.portals[portal_index];

    let (current_camera, current_rect, current_depth, current_clipping, aspect_ratio) = {
        let stage = plan.stage(current);
        (
            stage.camera,
            stage.rect,
            stage.depth,
            stage.clipping_portal,
            stage.aspect_ratio,
        )
    };

    // A portal facing the wrong way is not rendered at all
    if !portal.faces_point(current_camera.transform.position) {
        return PortalRenderType::empty();
    }

    let visible = PortalRenderType::visible(portal_index);

    // Recursion stops: frustum depth, closed connection, pool capacity
    if current_depth == 0 || !world.is_portal_open() || plan.stage_count() >= MAX_PORTAL_STEPS {
        return visible;
    }

    // Screen-space clip bounds of the portal outline
    let model = portal.model_matrix();
    let mut clipper = ScreenClipper::new_with_camera(&current_camera, aspect_ratio, &model);
    let bounds = clipper.bounding_points(&PORTAL_OUTLINE);

    if !clipper.near_polygon.is_empty() {
        plan.cache_near_polygon(portal_index, &clipper.near_polygon);
    }

    let mut rect = if current_clipping == Some(portal_index) {
        // Camera near plane cuts this portal: computed bounds collapse,
        // fall back to the whole screen
        ScreenRect::full_screen()
    } else {
        let Some(bounds) = bounds else {
            return visible;
        };
        // NDC +Y is up, screen +Y is down
        ScreenRect::new(
            ((bounds.min.x + 1.0) * (SCREEN_WD as f32 / 2.0)) as i32,
            ((bounds.max.x + 1.0) * (SCREEN_WD as f32 / 2.0)) as i32,
            ((-bounds.max.y + 1.0) * (SCREEN_HT as f32 / 2.0)) as i32,
            ((-bounds.min.y + 1.0) * (SCREEN_HT as f32 / 2.0)) as i32,
        )
    };

    rect.clamp_to(&current_rect);

    // Sibling exclusion: the two portals at one parent split along X
    if let Some(sibling) = *sibling_claim {
        if rect.min_x < sibling.min_x {
            rect.max_x = rect.max_x.min(sibling.min_x);
        } else {
            rect.min_x = rect.min_x.max(sibling.max_x);
        }
    }

    if rect.is_degenerate() {
        return visible;
    }

    // Teleport the viewer through the portal pair
    let from_portal = scene.portals[portal_index].transform;
    let exit_portal = scene.portals[exit_portal_index].transform;
    let portal_combined = exit_portal.concat(&from_portal.inverse());

    let mut camera = current_camera;
    camera.transform = portal_combined.concat(&current_camera.transform);

    // Near plane lands on the exit portal surface, but never nearer
    // than the parent's near plane, and never beyond the far plane
    let portal_offset = exit_portal.position - camera.transform.position;
    let camera_forward = camera.transform.forward();
    camera.near_plane = portal_offset.dot(camera_forward) * SCENE_SCALE;

    if camera.near_plane < current_camera.near_plane {
        camera.near_plane = current_camera.near_plane;

        if camera.near_plane > camera.far_plane {
            camera.near_plane = camera.far_plane;
        }
    }

    let depth = current_depth - 1;

    let Some((viewport, viewport_handle)) = build_viewport(&rect, depth, state) else {
        return visible;
    };

    let Some(mut matrix_info) = camera.setup_matrices(state, aspect_ratio) else {
        return visible;
    };

    if current_clipping.is_none() {
        // Inject a culling plane on the exit portal surface, facing away
        // from the viewer. Portal 0's plane always flips relative to
        // portal 1's; the stable index comparison keeps the sign
        // deterministic.
        let mut normal = exit_portal.rotation * FORWARD;
        if exit_portal_index < portal_index {
            normal = -normal;
        }
        let d = -normal.dot(exit_portal.position);
        matrix_info.culling.set_exit_plane(normal, d);
    }

    let stage = Stage {
        depth,
        rect,
        camera,
        aspect_ratio,
        viewport,
        viewport_handle,
        matrix_info,
        clipping_portal: None,
        visible_rooms: RoomSet::EMPTY,
        from_room: world.room_on_other_side(portal_index),
        exit_portal: Some(exit_portal_index),
        render_type: PortalRenderType::empty(),
        parent: Some(current),
        children: [None, None],
    };

    let child = plan.commit_stage(stage);
    plan.stage_mut(current).children[portal_index] = Some(child);
    *sibling_claim = Some(rect);

    finish_view(plan, scene, world, visibility, state, child);

    visible | PortalRenderType::enabled(portal_index)
}

#[cfg(test)]
#[path = "planner_tests.rs"]
mod tests;
