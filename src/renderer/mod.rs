//! Render data module
//!
//! Builds vertex buffers for the box outline and particles. Uploading and
//! drawing them is up to the host renderer.

pub mod shapes;
pub mod vertex;

pub use shapes::{DrawBatch, FrameVertices, box_outline, frame_vertices, particle_square};
pub use vertex::{Vertex, colors};
