/// Scene — frame snapshot the planner reads.
///
/// Holds the primary camera, the two linked portals, and the player's
/// current room. Rebuilt state (visibility, stage tree) never lives
/// here; the scene is input only.

use crate::camera::Camera;
use super::portal::{Portal, PORTAL_COVER_HEIGHT, PORTAL_COVER_WIDTH};
use super::world::RoomId;
use super::SCENE_SCALE;

/// Slack, in scene units, added to the near-plane distance when deciding
/// whether the camera sits inside a portal surface.
const CLIPPING_MARGIN: f32 = 0.05;

/// Input snapshot for one frame of portal planning.
#[derive(Debug, Clone, Copy)]
pub struct Scene {
    pub camera: Camera,
    /// Exactly two portals; each is the other's exit.
    pub portals: [Portal; 2],
    /// Room the player (and therefore the root camera) is in.
    pub player_room: RoomId,
}

impl Scene {
    pub fn new(camera: Camera, portals: [Portal; 2], player_room: RoomId) -> Self {
        Self { camera, portals, player_room }
    }

    /// Portal whose quad the camera's near plane currently intersects.
    ///
    /// The degenerate case: when the camera is this close to a portal
    /// surface, the computed clip bounds for that portal collapse and
    /// the planner falls back to the full screen rect instead.
    pub fn camera_clipping_portal(&self) -> Option<usize> {
        let near_distance = self.camera.near_plane / SCENE_SCALE + CLIPPING_MARGIN;

        for (index, portal) in self.portals.iter().enumerate() {
            let local = portal
                .transform
                .inverse()
                .transform_point(self.camera.transform.position);

            if local.z.abs() <= near_distance
                && local.x.abs() <= PORTAL_COVER_WIDTH / 2.0
                && local.y.abs() <= PORTAL_COVER_HEIGHT / 2.0
            {
                return Some(index);
            }
        }

        None
    }
}

#[cfg(test)]
#[path = "scene_tests.rs"]
mod tests;
