use num_traits::Float;

use super::Point;
use crate::algorithms::triangulation::earclip;

/// Stable handle to a point in a [`Contour`].
///
/// Handles name a storage slot, not a coordinate value, so two
/// coincident points are still distinguishable and a handle stays valid
/// while its point is dragged around.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VertexId(pub usize);

impl VertexId {
  pub const fn usize(self) -> usize {
    self.0
  }
}

/// An ordered, mutable sequence of 2D points defining a polygon
/// boundary.
///
/// Points live in an arena indexed by [`VertexId`]; the boundary order
/// is an explicit permutation over those handles. Removal frees the
/// arena slot for reuse and never shifts the ids of surviving points.
#[derive(Debug, Clone)]
pub struct Contour<T> {
  points: Vec<Point<T, 2>>,
  order: Vec<VertexId>,
  free: Vec<usize>,
}

impl<T> Contour<T> {
  pub fn new() -> Contour<T> {
    Contour {
      points: Vec::new(),
      order: Vec::new(),
      free: Vec::new(),
    }
  }

  pub fn len(&self) -> usize {
    self.order.len()
  }

  pub fn is_empty(&self) -> bool {
    self.order.is_empty()
  }

  fn alloc(&mut self, pt: Point<T, 2>) -> VertexId {
    match self.free.pop() {
      Some(slot) => {
        self.points[slot] = pt;
        VertexId(slot)
      }
      None => {
        self.points.push(pt);
        VertexId(self.points.len() - 1)
      }
    }
  }

  /// Insert a point at the given boundary position.
  pub fn insert(&mut self, position: usize, pt: Point<T, 2>) -> VertexId {
    debug_assert!(position <= self.order.len());
    let id = self.alloc(pt);
    self.order.insert(position, id);
    id
  }

  /// Append a point to the end of the boundary.
  pub fn push(&mut self, pt: Point<T, 2>) -> VertexId {
    let id = self.alloc(pt);
    self.order.push(id);
    id
  }

  /// Remove a point from the boundary. Returns `false` if the handle is
  /// not part of the contour.
  pub fn remove(&mut self, id: VertexId) -> bool {
    match self.position_of(id) {
      Some(position) => {
        self.order.remove(position);
        self.free.push(id.0);
        true
      }
      None => false,
    }
  }

  pub fn point(&self, id: VertexId) -> &Point<T, 2> {
    &self.points[id.0]
  }

  pub fn point_mut(&mut self, id: VertexId) -> &mut Point<T, 2> {
    &mut self.points[id.0]
  }

  /// Boundary position of a handle, if it is part of the contour.
  pub fn position_of(&self, id: VertexId) -> Option<usize> {
    self.order.iter().position(|&v| v == id)
  }

  /// Handle at the given boundary position.
  pub fn vertex(&self, position: usize) -> VertexId {
    self.order[position]
  }

  /// Boundary order as a slice of handles.
  pub fn order(&self) -> &[VertexId] {
    &self.order
  }

  /// Raw arena storage. Slots not referenced by [`Contour::order`] may
  /// hold stale points.
  pub fn points(&self) -> &[Point<T, 2>] {
    &self.points
  }

  /// Ordered boundary points.
  pub fn iter(&self) -> impl Iterator<Item = &Point<T, 2>> {
    self.order.iter().map(move |id| &self.points[id.0])
  }

  /// Rotate the boundary one step, moving the first point to the end.
  pub fn rotate_left(&mut self) {
    if self.order.len() > 1 {
      self.order.rotate_left(1);
    }
  }

  pub fn clear(&mut self) {
    self.points.clear();
    self.order.clear();
    self.free.clear();
  }
}

impl<T> Contour<T>
where
  T: Float,
{
  /// Signed area of the boundary via the shoelace formula.
  pub fn signed_area(&self) -> T {
    earclip::signed_area(&self.points, &self.order)
  }
}

impl<T> Default for Contour<T> {
  fn default() -> Contour<T> {
    Contour::new()
  }
}

impl<T> From<Vec<Point<T, 2>>> for Contour<T> {
  fn from(points: Vec<Point<T, 2>>) -> Contour<T> {
    let len = points.len();
    Contour {
      points,
      order: (0..len).map(VertexId).collect(),
      free: Vec::new(),
    }
  }
}
