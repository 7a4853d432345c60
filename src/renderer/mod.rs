//! Rendering module
//!
//! The render pass in [`scene`] draws onto the [`Surface`] trait. For display,
//! [`ShapeBatch`] turns a frame into colored triangles plus text runs, and
//! [`RenderState`] pushes the triangles through a WebGPU pipeline.

pub mod batch;
pub mod pipeline;
pub mod scene;
pub mod shapes;
pub mod surface;
pub mod vertex;

pub use batch::{ShapeBatch, TextRun};
pub use pipeline::RenderState;
pub use scene::draw;
pub use surface::{Color, Surface, TextAlign, TextBaseline, TextStyle};
pub use vertex::{Vertex, colors};
