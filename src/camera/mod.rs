//! Camera module — camera state, culling frustum, and screen clipping.
//!
//! A `Camera` is a passive transform + lens description. The planner
//! derives per-stage matrices and culling planes from it, and uses the
//! `ScreenClipper` to project portal outlines into screen-space clip
//! rectangles.

mod camera;
mod clipper;
mod frustum;

pub use camera::{Camera, CameraMatrixInfo};
pub use clipper::{Box2, ScreenClipper};
pub use frustum::CullingFrustum;
