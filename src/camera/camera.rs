/// Camera — transform plus lens parameters.
///
/// The planner clones and re-derives cameras freely: every portal
/// crossing teleports a copy of the parent camera and tightens its near
/// plane. Matrices and culling planes are derived on demand through
/// `setup_matrices`, which draws a matrix slot from the frame pool.

use glam::Mat4;
use crate::renderer::{MatrixHandle, RenderState};
use crate::scene::{Transform, SCENE_SCALE};
use super::frustum::CullingFrustum;

/// Camera state for one planned view stage.
#[derive(Debug, Clone, Copy)]
pub struct Camera {
    pub transform: Transform,
    /// Vertical field of view in radians.
    pub fov_y: f32,
    /// Near plane distance in world units (scene units × `SCENE_SCALE`).
    pub near_plane: f32,
    /// Far plane distance in world units.
    pub far_plane: f32,
}

/// Projection, view and culling state derived from a camera, ready for
/// the draw sink. Holds the matrix-pool slot the backend uploads into.
#[derive(Debug, Clone, Copy)]
pub struct CameraMatrixInfo {
    pub matrix_slot: MatrixHandle,
    pub view: Mat4,
    pub projection: Mat4,
    pub culling: CullingFrustum,
}

impl Camera {
    pub fn new(transform: Transform, fov_y: f32, near_plane: f32, far_plane: f32) -> Self {
        Self { transform, fov_y, near_plane, far_plane }
    }

    /// View matrix: inverse of the camera's world transform.
    pub fn view_matrix(&self) -> Mat4 {
        self.transform.inverse().to_mat4()
    }

    /// Perspective projection for the given aspect ratio.
    ///
    /// Near/far are stored in world units; the projection works in scene
    /// units, so both are divided back out by `SCENE_SCALE`.
    pub fn projection_matrix(&self, aspect_ratio: f32) -> Mat4 {
        Mat4::perspective_rh(
            self.fov_y,
            aspect_ratio,
            self.near_plane / SCENE_SCALE,
            self.far_plane / SCENE_SCALE,
        )
    }

    /// Derive the per-stage matrix block and culling planes.
    ///
    /// Returns `None` only when the frame's matrix pool is exhausted;
    /// the caller treats that as "stage unusable", not a hard error.
    pub fn setup_matrices(
        &self,
        state: &mut dyn RenderState,
        aspect_ratio: f32,
    ) -> Option<CameraMatrixInfo> {
        let matrix_slot = state.request_matrices(1)?;

        let view = self.view_matrix();
        let projection = self.projection_matrix(aspect_ratio);
        let culling = CullingFrustum::from_view_projection(&(projection * view));

        Some(CameraMatrixInfo { matrix_slot, view, projection, culling })
    }
}

#[cfg(test)]
#[path = "camera_tests.rs"]
mod tests;
