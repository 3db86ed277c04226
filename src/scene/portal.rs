/// Portal — one half of the linked portal pair.
///
/// A scene carries exactly two portals; each is the other's exit. The
/// parity flag distinguishes the two ends: it selects which local axis
/// is "through" the surface and which cover mesh the backend draws.

use bitflags::bitflags;
use glam::{Mat4, Vec3};
use super::transform::{Transform, FORWARD};

/// Width of the portal quad in scene units.
pub const PORTAL_COVER_WIDTH: f32 = 1.0;
/// Height of the portal quad in scene units.
pub const PORTAL_COVER_HEIGHT: f32 = 1.68;

/// Portal surface outline in portal-local space (z = 0 plane).
///
/// Eight points approximating the elliptical rim, counter-clockwise.
/// This is the polygon the screen clipper projects to find the child
/// stage's clip rectangle.
pub const PORTAL_OUTLINE: [Vec3; 8] = [
    Vec3::new(0.5, 0.0, 0.0),
    Vec3::new(0.3535534, 0.5939697, 0.0),
    Vec3::new(0.0, 0.84, 0.0),
    Vec3::new(-0.3535534, 0.5939697, 0.0),
    Vec3::new(-0.5, 0.0, 0.0),
    Vec3::new(-0.3535534, -0.5939697, 0.0),
    Vec3::new(0.0, -0.84, 0.0),
    Vec3::new(0.3535534, -0.5939697, 0.0),
];

bitflags! {
    /// Per-portal state flags.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct PortalFlags: u8 {
        /// Which end of the pair this is. Odd parity faces local +Z,
        /// even parity faces local -Z, and the two ends use mirrored
        /// cover meshes.
        const ODD_PARITY = 0b0000_0001;
    }
}

/// One end of the portal pair.
#[derive(Debug, Clone, Copy)]
pub struct Portal {
    /// Placement of the portal surface in the scene.
    pub transform: Transform,
    pub flags: PortalFlags,
    /// Blend factor of the open-portal cover, 0 (clear) to 1 (opaque).
    pub opacity: f32,
}

impl Portal {
    pub fn new(transform: Transform, flags: PortalFlags, opacity: f32) -> Self {
        Self { transform, flags, opacity }
    }

    /// Outward surface normal in portal-local space. Parity flips the
    /// through-axis.
    pub fn local_normal(&self) -> Vec3 {
        if self.flags.contains(PortalFlags::ODD_PARITY) {
            -FORWARD
        } else {
            FORWARD
        }
    }

    /// Outward surface normal in world space.
    pub fn world_normal(&self) -> Vec3 {
        self.transform.rotation * self.local_normal()
    }

    /// True when `point` lies on the visible side of the portal surface.
    ///
    /// Strictly in front: a point exactly on the surface plane does not
    /// count as facing.
    pub fn faces_point(&self, point: Vec3) -> bool {
        self.world_normal().dot(point - self.transform.position) > 0.0
    }

    /// Model matrix for the portal cover meshes.
    ///
    /// Odd parity mirrors X so the two ends of the pair present
    /// mirror-image rims.
    pub fn model_matrix(&self) -> Mat4 {
        let scale = if self.flags.contains(PortalFlags::ODD_PARITY) {
            Vec3::new(-1.0, 1.0, 1.0)
        } else {
            Vec3::ONE
        };
        Mat4::from_scale_rotation_translation(
            scale,
            self.transform.rotation,
            self.transform.position,
        )
    }
}

#[cfg(test)]
#[path = "portal_tests.rs"]
mod tests;
