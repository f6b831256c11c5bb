//! WebGPU rendering module
//!
//! Primitives are tessellated on the CPU into a single colored triangle list
//! and drawn with one pipeline.

pub mod pipeline;
pub mod scene;
pub mod shapes;
pub mod vertex;

pub use pipeline::RenderState;
pub use scene::draw_match;
