/// Rooms and world-graph collaborators.
///
/// The planner never walks level geometry itself. It asks a `WorldGraph`
/// whether the portal pair currently connects and which room sits behind
/// each portal, and a `RoomVisibility` which rooms a camera can see.
/// `RoomGraph` is the built-in implementation: a doorway adjacency table
/// walked breadth-first with each doorway tested against the culling
/// frustum. Production levels may substitute their own BSP-backed walk.

use glam::Vec3;
use rustc_hash::FxHashMap;
use crate::camera::CullingFrustum;

/// Index of a room in the level. Rooms are dense small integers.
pub type RoomId = u16;

/// Set of visible rooms as a bitmask. Levels carry at most 64 rooms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RoomSet(u64);

impl RoomSet {
    pub const EMPTY: RoomSet = RoomSet(0);

    /// Every representable room.
    pub const ALL: RoomSet = RoomSet(u64::MAX);

    pub fn insert(&mut self, room: RoomId) {
        self.0 |= 1u64 << (room as u32 & 63);
    }

    pub fn contains(&self, room: RoomId) -> bool {
        self.0 & (1u64 << (room as u32 & 63)) != 0
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub fn len(&self) -> u32 {
        self.0.count_ones()
    }
}

/// Axis-Aligned Bounding Box in world space.
///
/// Used for doorway visibility tests against the culling frustum.
#[derive(Debug, Clone, Copy)]
pub struct AABB {
    /// Minimum corner (x, y, z)
    pub min: Vec3,
    /// Maximum corner (x, y, z)
    pub max: Vec3,
}

impl AABB {
    pub fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    /// AABB centered at `center` with the given half extents.
    pub fn from_center(center: Vec3, half_extents: Vec3) -> Self {
        Self {
            min: center - half_extents,
            max: center + half_extents,
        }
    }
}

// ===== COLLABORATOR TRAITS =====

/// Collision-side world queries the planner depends on.
pub trait WorldGraph {
    /// Whether the portal pair currently forms an open connection.
    /// A closed connection stops recursion at depth 1.
    fn is_portal_open(&self) -> bool;

    /// Room a viewer emerges into after crossing the given portal.
    fn room_on_other_side(&self, portal_index: usize) -> RoomId;
}

/// Room-visibility determination for a camera.
pub trait RoomVisibility {
    /// Rooms visible to a camera with the given culling frustum, seeded
    /// at `from_room`.
    fn visible_rooms(&self, culling: &CullingFrustum, from_room: RoomId) -> RoomSet;

    /// Membership test on a previously computed set.
    fn is_room_visible(&self, rooms: RoomSet, room: RoomId) -> bool {
        rooms.contains(room)
    }
}

// ===== DEFAULT IMPLEMENTATION =====

/// A doorway connecting two rooms, with its world-space opening bounds.
#[derive(Debug, Clone, Copy)]
pub struct Doorway {
    pub to_room: RoomId,
    pub bounds: AABB,
}

/// Doorway-graph world: adjacency table walked breadth-first.
///
/// A room is visible if it is the seed room or reachable through a chain
/// of doorways whose bounds all intersect the culling frustum. This is a
/// conservative stand-in for a full portal-graph walk; it never culls a
/// visible room, it may keep an occluded one.
#[derive(Debug, Clone, Default)]
pub struct RoomGraph {
    doorways: FxHashMap<RoomId, Vec<Doorway>>,
    portal_rooms: [RoomId; 2],
    portal_open: bool,
}

impl RoomGraph {
    /// `portal_rooms[i]` is the room containing portal `i`.
    pub fn new(portal_rooms: [RoomId; 2], portal_open: bool) -> Self {
        Self {
            doorways: FxHashMap::default(),
            portal_rooms,
            portal_open,
        }
    }

    /// Register a doorway from `from` to `doorway.to_room`.
    /// Doorways are directed; add both directions for two-way openings.
    pub fn add_doorway(&mut self, from: RoomId, doorway: Doorway) {
        self.doorways.entry(from).or_default().push(doorway);
    }

    pub fn set_portal_open(&mut self, open: bool) {
        self.portal_open = open;
    }
}

impl WorldGraph for RoomGraph {
    fn is_portal_open(&self) -> bool {
        self.portal_open
    }

    fn room_on_other_side(&self, portal_index: usize) -> RoomId {
        // Crossing portal i lands in the room holding its paired exit
        self.portal_rooms[1 - (portal_index & 1)]
    }
}

impl RoomVisibility for RoomGraph {
    fn visible_rooms(&self, culling: &CullingFrustum, from_room: RoomId) -> RoomSet {
        let mut visible = RoomSet::EMPTY;
        visible.insert(from_room);

        let mut frontier = vec![from_room];
        while let Some(room) = frontier.pop() {
            let Some(doorways) = self.doorways.get(&room) else {
                continue;
            };
            for doorway in doorways {
                if visible.contains(doorway.to_room) {
                    continue;
                }
                if culling.intersects_aabb(&doorway.bounds) {
                    visible.insert(doorway.to_room);
                    frontier.push(doorway.to_room);
                }
            }
        }

        visible
    }
}

#[cfg(test)]
#[path = "world_tests.rs"]
mod tests;
