//! Rendering module
//!
//! The game draws through the [`crate::platform::Canvas`] trait. `DrawList`
//! records those calls as triangles and text runs; `RenderState` puts the
//! triangles on a WebGPU surface.

pub mod draw_list;
pub mod pipeline;
pub mod scene;
pub mod shapes;
pub mod vertex;

pub use draw_list::{DrawList, TextRun};
pub use pipeline::RenderState;
pub use vertex::Vertex;
