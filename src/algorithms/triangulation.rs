use num_traits::Float;

use crate::data::{Contour, VertexId};

pub mod earclip;

/// Triangulation entry point for types carrying an ordered vertex ring.
pub trait Triangulate<T> {
  /// Best-effort triangulation: the result may be partial or empty for
  /// degenerate input, never an error.
  fn triangulate(&self, epsilon: T) -> Vec<(VertexId, VertexId, VertexId)>;
}

impl<T: Float> Triangulate<T> for Contour<T> {
  fn triangulate(&self, epsilon: T) -> Vec<(VertexId, VertexId, VertexId)> {
    earclip::triangulate_list(self.points(), self.order(), epsilon)
  }
}
