/*!
# Rift 3D Engine

Recursive portal view planning and replay.

Once per frame, the planner builds a bounded tree of nested camera views
produced by looking through a pair of linked portals, then replays that
tree innermost-first to emit draw commands in correct compositing order.
Planning couples recursive visibility, screen-space clip-rectangle
arithmetic, camera teleportation through the portal pair, near-plane
adjustment, and strict recursion/resource budgets.

## Architecture

- **Scene**: portals, camera, and room placement for the current frame
- **RenderPlan**: fixed-capacity arena of planned view stages
- **ScreenClipper / CullingFrustum**: projective clipping collaborators
- **RenderState**: draw-emission and frame-pool boundary; backends
  implement this trait (tests use a recording mock)

Rasterization, mesh assets, the room-graph BSP walk, and collision are
external collaborators reached only through traits.
*/

// Internal modules
mod error;
pub mod log;
pub mod camera;
pub mod plan;
pub mod renderer;
pub mod scene;

// Main rift3d namespace module
pub mod rift3d {
    // Error types
    pub use crate::error::{Error, Result};

    // Logging sub-module (types only, NOT macros)
    pub mod log {
        pub use crate::log::{Logger, LogEntry, LogSeverity, DefaultLogger};
        // Note: engine_* macros are NOT re-exported here - they are internal only
    }

    // Camera sub-module
    pub mod camera {
        pub use crate::camera::*;
    }

    // Plan sub-module: the portal recursion planner and executor
    pub mod plan {
        pub use crate::plan::*;
    }

    // Render sub-module: the draw-emission boundary
    pub mod render {
        pub use crate::renderer::*;
    }

    // Scene sub-module
    pub mod scene {
        pub use crate::scene::*;
    }
}

// Re-export math library at crate root
pub use glam;
