use claims::debug_assert_ok;
use num_traits::Float;

use super::{Point, PointLocation};
use crate::{Error, Orientation};

/// A triangle borrowing its three corners.
pub struct TriangleView<'a, T>(pub(crate) [&'a Point<T, 2>; 3]);

impl<'a, T> TriangleView<'a, T>
where
  T: Float,
{
  // O(1)
  pub fn new(pts: [&'a Point<T, 2>; 3]) -> TriangleView<'a, T> {
    let triangle = TriangleView(pts);
    debug_assert_ok!(triangle.validate());
    triangle
  }

  pub fn new_unchecked(pts: [&'a Point<T, 2>; 3]) -> TriangleView<'a, T> {
    TriangleView(pts)
  }

  // O(1)
  pub fn validate(&self) -> Result<(), Error> {
    if self.orientation() != Orientation::CounterClockWise {
      Err(Error::ClockWiseViolation)
    } else {
      Ok(())
    }
  }

  pub fn orientation(&self) -> Orientation {
    let arr = &self.0;
    Orientation::new(arr[0], arr[1], arr[2])
  }

  /// Locate a point relative to the triangle via three orientation
  /// queries, one per directed edge. This is the textbook
  /// sign-consistency test; the ear-clipping hot path uses a different
  /// formulation whose edge behavior deliberately differs. See
  /// `algorithms::triangulation::earclip`.
  // O(1)
  pub fn locate(&self, pt: &Point<T, 2>) -> PointLocation {
    use Orientation::*;
    debug_assert_ok!(self.validate());
    let [a, b, c] = self.0;
    let ab = Orientation::new(a, b, pt);
    let bc = Orientation::new(b, c, pt);
    let ca = Orientation::new(c, a, pt);
    if ab == ClockWise || bc == ClockWise || ca == ClockWise {
      PointLocation::Outside
    } else if ab == CoLinear || bc == CoLinear || ca == CoLinear {
      PointLocation::OnBoundary
    } else {
      PointLocation::Inside
    }
  }

  pub fn signed_area(&self) -> T {
    self.signed_area_2x() / (T::one() + T::one())
  }

  pub fn signed_area_2x(&self) -> T {
    let [a, b, c] = self.0;
    let ax = *a.x_coord();
    let ay = *a.y_coord();
    let bx = *b.x_coord();
    let by = *b.y_coord();
    let cx = *c.x_coord();
    let cy = *c.y_coord();
    ax * by - bx * ay + bx * cy - cx * by + cx * ay - ax * cy
  }
}
