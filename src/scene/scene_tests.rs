use super::*;
use crate::camera::Camera;
use crate::scene::{PortalFlags, Transform};
use glam::{Quat, Vec3};

fn scene_with_camera_at(position: Vec3) -> Scene {
    let camera = Camera::new(
        Transform::new(position, Quat::IDENTITY),
        70f32.to_radians(),
        64.0, // 0.5 scene units
        12800.0,
    );
    let portals = [
        Portal::new(
            Transform::new(Vec3::new(0.0, 0.0, -5.0), Quat::IDENTITY),
            PortalFlags::ODD_PARITY,
            1.0,
        ),
        Portal::new(
            Transform::new(Vec3::new(0.0, 0.0, 5.0), Quat::IDENTITY),
            PortalFlags::empty(),
            1.0,
        ),
    ];
    Scene::new(camera, portals, 0)
}

// ============================================================================
// camera_clipping_portal
// ============================================================================

#[test]
fn test_camera_in_open_space_is_not_clipping() {
    let scene = scene_with_camera_at(Vec3::new(0.0, 0.0, 1.0));
    assert_eq!(scene.camera_clipping_portal(), None);
}

#[test]
fn test_camera_pressed_against_portal_surface_is_clipping() {
    // 0.3 scene units from portal 0's surface, well inside its quad
    let scene = scene_with_camera_at(Vec3::new(0.0, 0.0, -4.7));
    assert_eq!(scene.camera_clipping_portal(), Some(0));
}

#[test]
fn test_camera_near_plane_but_outside_quad_is_not_clipping() {
    // Same slab distance, but past the portal's horizontal extent
    let scene = scene_with_camera_at(Vec3::new(2.0, 0.0, -4.7));
    assert_eq!(scene.camera_clipping_portal(), None);
}

#[test]
fn test_second_portal_reports_its_own_index() {
    let scene = scene_with_camera_at(Vec3::new(0.0, 0.0, 4.8));
    assert_eq!(scene.camera_clipping_portal(), Some(1));
}
