mod contour;
mod line_segment;
pub(crate) mod point;
mod triangle;
mod vector;

pub use contour::{Contour, VertexId};
pub use line_segment::LineSegmentView;
pub use point::Point;
pub use triangle::TriangleView;
pub use vector::Vector;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum PointLocation {
  Inside,
  OnBoundary,
  Outside,
}
