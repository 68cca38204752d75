//! Renderer boundary
//!
//! No GPU code lives here: this module turns simulation state into plain
//! draw data (frame snapshots, model-space vertices, the asteroid shape side
//! table) for whatever graphics backend consumes it.

pub mod batch;
pub mod shape_table;
pub mod shapes;
pub mod vertex;
pub mod view;

pub use batch::{FrameBatch, Mesh, Primitive};
pub use shape_table::ShapeTable;
pub use vertex::Vertex;
pub use view::FrameView;
