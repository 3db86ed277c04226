/// ScreenClipper — projects a world polygon into screen space.
///
/// The planner uses it to turn a portal's outline into the child stage's
/// clip rectangle: transform the outline into clip space, cut away the
/// part behind the near plane, and report the bounding box of what
/// remains in normalized device coordinates.
///
/// When the near plane actually cuts the polygon (the camera is about to
/// poke through the portal surface), the clipped polygon is also kept in
/// screen coordinates so the renderer can later cover the seam.

use glam::{I16Vec2, Mat4, Vec2, Vec3, Vec4};
use crate::plan::{SCREEN_HT, SCREEN_WD};
use super::camera::Camera;

/// Axis-aligned bounds in normalized device coordinates (+Y up).
#[derive(Debug, Clone, Copy)]
pub struct Box2 {
    pub min: Vec2,
    pub max: Vec2,
}

/// Clip-space projector for one camera/model pairing.
pub struct ScreenClipper {
    clip_transform: Mat4,
    /// Near-plane intersection polygon in screen coordinates.
    /// Empty unless the last `bounding_points` call clipped against the
    /// near plane.
    pub near_polygon: Vec<I16Vec2>,
}

impl ScreenClipper {
    /// Build a clipper for `camera` looking at geometry placed by `model`.
    pub fn new_with_camera(camera: &Camera, aspect_ratio: f32, model: &Mat4) -> Self {
        let clip_transform =
            camera.projection_matrix(aspect_ratio) * camera.view_matrix() * *model;
        Self {
            clip_transform,
            near_polygon: Vec::new(),
        }
    }

    /// NDC bounding box of `points` after near-plane clipping.
    ///
    /// Returns `None` when the polygon lies entirely behind the near
    /// plane. X/Y are clamped to the [-1, 1] NDC square; callers clamp
    /// the resulting pixel rect against the parent view anyway.
    pub fn bounding_points(&mut self, points: &[Vec3]) -> Option<Box2> {
        self.near_polygon.clear();

        let clip_points: Vec<Vec4> = points
            .iter()
            .map(|p| self.clip_transform * Vec4::new(p.x, p.y, p.z, 1.0))
            .collect();

        let (clipped, was_cut) = clip_near(&clip_points);
        if clipped.is_empty() {
            return None;
        }

        let mut min = Vec2::new(f32::MAX, f32::MAX);
        let mut max = Vec2::new(f32::MIN, f32::MIN);
        let mut screen_points = Vec::with_capacity(clipped.len());

        for v in &clipped {
            if v.w <= 1e-6 {
                continue;
            }
            let ndc = Vec2::new(v.x / v.w, v.y / v.w).clamp(Vec2::splat(-1.0), Vec2::splat(1.0));
            min = min.min(ndc);
            max = max.max(ndc);
            screen_points.push(I16Vec2::new(
                ((ndc.x + 1.0) * (SCREEN_WD as f32 / 2.0)) as i16,
                ((1.0 - ndc.y) * (SCREEN_HT as f32 / 2.0)) as i16,
            ));
        }

        if min.x > max.x || min.y > max.y {
            return None;
        }

        if was_cut {
            self.near_polygon = screen_points;
        }

        Some(Box2 { min, max })
    }
}

/// Sutherland-Hodgman clip of a homogeneous polygon against the near
/// plane (`z >= 0` in this projection's clip space). Returns the clipped
/// polygon and whether any edge was actually cut.
fn clip_near(points: &[Vec4]) -> (Vec<Vec4>, bool) {
    let mut result = Vec::with_capacity(points.len() + 2);
    let mut was_cut = false;

    for (i, &current) in points.iter().enumerate() {
        let previous = points[(i + points.len() - 1) % points.len()];
        let current_in = current.z >= 0.0;
        let previous_in = previous.z >= 0.0;

        if current_in != previous_in {
            // Edge crosses the near plane; interpolation in homogeneous
            // space is linear, so the crossing point is exact.
            let t = previous.z / (previous.z - current.z);
            result.push(previous + (current - previous) * t);
            was_cut = true;
        }
        if current_in {
            result.push(current);
        }
    }

    (result, was_cut)
}

#[cfg(test)]
#[path = "clipper_tests.rs"]
mod tests;
