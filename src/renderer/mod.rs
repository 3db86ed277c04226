//! Renderer module — the draw-emission and frame-pool boundary.
//!
//! The planner and executor never talk to a rasterizer directly; they
//! emit through the `RenderState` trait. Backends implement it over a
//! real command stream, tests use the recording mock.

pub mod render_state;

pub use render_state::{MatrixHandle, RenderState, ViewportHandle};

#[cfg(test)]
pub mod mock_render_state;
