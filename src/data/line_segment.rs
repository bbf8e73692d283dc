use num_traits::Float;

use super::Point;

/// A line segment borrowing its two endpoints.
#[derive(Debug, Clone, Copy)]
pub struct LineSegmentView<'a, T, const N: usize>(pub &'a Point<T, N>, pub &'a Point<T, N>);

impl<'a, T, const N: usize> LineSegmentView<'a, T, N>
where
  T: Float,
{
  pub fn new(src: &'a Point<T, N>, dst: &'a Point<T, N>) -> LineSegmentView<'a, T, N> {
    LineSegmentView(src, dst)
  }

  /// Squared distance from `p` to the closest point on the segment.
  ///
  /// Projects `p` onto the carrier line and clamps the projection
  /// parameter to `[0, 1]`. A zero-length segment falls back to the
  /// squared distance to its endpoint, so coincident endpoints never
  /// divide by zero.
  pub fn squared_distance_to(&self, p: &Point<T, N>) -> T {
    let len = self.0.squared_euclidean_distance(self.1);
    if len == T::zero() {
      return self.0.squared_euclidean_distance(p);
    }
    let t = ((p - self.0).dot(&(self.1 - self.0)) / len)
      .max(T::zero())
      .min(T::one());
    let projection = self.0 + (self.1 - self.0) * t;
    p.squared_euclidean_distance(&projection)
  }
}
