//! Scene module — portals, rigid transforms, rooms, and the frame scene.
//!
//! The scene is a passive snapshot of what the planner needs this frame:
//! the primary camera, the two linked portals, and the player's room.
//! Collision and room-graph queries go through the `WorldGraph` and
//! `RoomVisibility` traits.

mod portal;
mod scene;
mod transform;
mod world;

pub use portal::{Portal, PortalFlags, PORTAL_OUTLINE, PORTAL_COVER_WIDTH, PORTAL_COVER_HEIGHT};
pub use scene::Scene;
pub use transform::{Transform, FORWARD};
pub use world::{RoomId, RoomSet, AABB, WorldGraph, RoomVisibility, RoomGraph, Doorway};

/// Scale factor between scene units (portal/camera positions) and the
/// world units the rasterizer consumes. Near-plane distances derived
/// from scene geometry are multiplied by this before landing in a camera.
pub const SCENE_SCALE: f32 = 128.0;
