/// Transform — rigid position + rotation pair.
///
/// The planner composes and inverts camera and portal placements
/// symbolically (teleporting a camera through a portal pair is
/// `exit ∘ inverse(entry) ∘ camera`), so transforms are kept as a
/// position/quaternion pair rather than collapsed into matrices.
/// Scale is always 1.

use glam::{Mat4, Quat, Vec3};

/// Forward axis of cameras and portals in local space.
///
/// Right-handed convention: a camera at the identity transform looks
/// down -Z.
pub const FORWARD: Vec3 = Vec3::NEG_Z;

/// Rigid transform: rotation followed by translation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub position: Vec3,
    pub rotation: Quat,
}

impl Transform {
    /// Identity transform (no rotation, origin position).
    pub const IDENTITY: Transform = Transform {
        position: Vec3::ZERO,
        rotation: Quat::IDENTITY,
    };

    pub fn new(position: Vec3, rotation: Quat) -> Self {
        Self { position, rotation }
    }

    /// Apply this transform to a point: `rotation * p + position`.
    pub fn transform_point(&self, point: Vec3) -> Vec3 {
        self.rotation * point + self.position
    }

    /// Apply only the rotation part to a direction vector.
    pub fn transform_vector(&self, vector: Vec3) -> Vec3 {
        self.rotation * vector
    }

    /// Inverse transform, such that `t.inverse().transform_point(t.transform_point(p)) == p`.
    pub fn inverse(&self) -> Transform {
        let inv_rotation = self.rotation.conjugate();
        Transform {
            position: inv_rotation * -self.position,
            rotation: inv_rotation,
        }
    }

    /// Composition: `(a.concat(b)).transform_point(p) == a.transform_point(b.transform_point(p))`.
    pub fn concat(&self, other: &Transform) -> Transform {
        Transform {
            position: self.rotation * other.position + self.position,
            rotation: self.rotation * other.rotation,
        }
    }

    /// World-space forward axis of this transform.
    pub fn forward(&self) -> Vec3 {
        self.rotation * FORWARD
    }

    /// Expand to a 4x4 model matrix.
    pub fn to_mat4(&self) -> Mat4 {
        Mat4::from_rotation_translation(self.rotation, self.position)
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

#[cfg(test)]
#[path = "transform_tests.rs"]
mod tests;
