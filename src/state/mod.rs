pub mod geometry;
pub mod gesture;

pub use geometry::{Geometry, Placement, Point, Size, ViewMode};
pub use gesture::{DragSession, Gesture};
