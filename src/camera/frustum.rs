/// CullingFrustum — view-frustum planes plus one optional injected plane.
///
/// Each plane is a Vec4 (A, B, C, D) where (A, B, C) is the
/// inward-pointing normal, D the signed distance, and a point P is inside
/// when dot(plane, P_homogeneous) >= 0.
///
/// Portal stages additionally carry one injected plane coincident with
/// the exit portal's surface, so geometry between the teleported camera
/// and the exit portal is culled before rasterization.

use glam::{Mat4, Vec3, Vec4};
use crate::scene::AABB;

/// Six view-frustum planes (left, right, bottom, top, near, far) and an
/// optional exit-portal plane.
#[derive(Debug, Clone, Copy)]
pub struct CullingFrustum {
    /// Frustum planes: left, right, bottom, top, near, far
    pub planes: [Vec4; 6],
    /// Extra plane injected by the portal planner, if any.
    pub exit_plane: Option<Vec4>,
}

impl CullingFrustum {
    /// Extract frustum planes from a view-projection matrix.
    ///
    /// Uses the Gribb & Hartmann method. Works for both perspective
    /// and orthographic projections.
    pub fn from_view_projection(vp: &Mat4) -> Self {
        let m = vp.to_cols_array_2d();

        // Gribb & Hartmann: extract planes from rows of the VP matrix
        let mut planes = [
            // Left:   row3 + row0
            Vec4::new(m[0][3] + m[0][0], m[1][3] + m[1][0], m[2][3] + m[2][0], m[3][3] + m[3][0]),
            // Right:  row3 - row0
            Vec4::new(m[0][3] - m[0][0], m[1][3] - m[1][0], m[2][3] - m[2][0], m[3][3] - m[3][0]),
            // Bottom: row3 + row1
            Vec4::new(m[0][3] + m[0][1], m[1][3] + m[1][1], m[2][3] + m[2][1], m[3][3] + m[3][1]),
            // Top:    row3 - row1
            Vec4::new(m[0][3] - m[0][1], m[1][3] - m[1][1], m[2][3] - m[2][1], m[3][3] - m[3][1]),
            // Near:   row3 + row2
            Vec4::new(m[0][3] + m[0][2], m[1][3] + m[1][2], m[2][3] + m[2][2], m[3][3] + m[3][2]),
            // Far:    row3 - row2
            Vec4::new(m[0][3] - m[0][2], m[1][3] - m[1][2], m[2][3] - m[2][2], m[3][3] - m[3][2]),
        ];

        // Normalize each plane
        for plane in &mut planes {
            let normal_len = Vec3::new(plane.x, plane.y, plane.z).length();
            if normal_len > 0.0 {
                *plane /= normal_len;
            }
        }

        Self { planes, exit_plane: None }
    }

    /// Inject the exit-portal surface plane.
    ///
    /// `normal` must point toward the visible half-space (away from the
    /// teleported viewer); `d` is the plane's signed distance term.
    pub fn set_exit_plane(&mut self, normal: Vec3, d: f32) {
        self.exit_plane = Some(Vec4::new(normal.x, normal.y, normal.z, d));
    }

    /// Test if a point lies inside all planes.
    pub fn contains_point(&self, point: Vec3) -> bool {
        self.plane_iter()
            .all(|plane| Vec3::new(plane.x, plane.y, plane.z).dot(point) + plane.w >= 0.0)
    }

    /// Test if an AABB intersects this frustum.
    ///
    /// Uses the "positive vertex" test: for each plane, find the AABB
    /// corner most in the direction of the plane normal. If that corner
    /// is outside, the AABB is fully outside.
    ///
    /// Conservative: may return false positives, never false negatives.
    pub fn intersects_aabb(&self, aabb: &AABB) -> bool {
        for plane in self.plane_iter() {
            let normal = Vec3::new(plane.x, plane.y, plane.z);

            // Positive vertex: corner most aligned with the normal
            let p_vertex = Vec3::new(
                if normal.x >= 0.0 { aabb.max.x } else { aabb.min.x },
                if normal.y >= 0.0 { aabb.max.y } else { aabb.min.y },
                if normal.z >= 0.0 { aabb.max.z } else { aabb.min.z },
            );

            if normal.dot(p_vertex) + plane.w < 0.0 {
                return false;
            }
        }

        true
    }

    fn plane_iter(&self) -> impl Iterator<Item = &Vec4> {
        self.planes.iter().chain(self.exit_plane.iter())
    }
}

#[cfg(test)]
#[path = "frustum_tests.rs"]
mod tests;
