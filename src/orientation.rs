use num_traits::Float;

use crate::data::Point;

#[derive(PartialEq, Eq, PartialOrd, Ord, Debug, Copy, Clone)]
pub enum Orientation {
  CounterClockWise,
  ClockWise,
  CoLinear,
}
use Orientation::*;

impl Orientation {
  /// Determine the direction you have to turn if you walk from `p1`
  /// to `p2` to `p3`.
  ///
  /// Computed from the sign of the cross product of the two edge
  /// vectors. In a y-down coordinate system (canvas convention) the
  /// labels are mirrored relative to their usual mathematical reading.
  ///
  /// # Examples
  ///
  /// ```rust
  /// # use earclip::data::Point;
  /// # use earclip::Orientation;
  /// let p1 = Point::new([0.0, 0.0]);
  /// let p2 = Point::new([0.0, 1.0]);
  /// assert!(Orientation::new(&p1, &p2, &Point::new([0.0, 2.0])).is_colinear());
  /// assert!(Orientation::new(&p1, &p2, &Point::new([-1.0, 2.0])).is_ccw());
  /// assert!(Orientation::new(&p1, &p2, &Point::new([1.0, 2.0])).is_cw());
  /// ```
  pub fn new<T>(p1: &Point<T, 2>, p2: &Point<T, 2>, p3: &Point<T, 2>) -> Orientation
  where
    T: Float,
  {
    let cross = (*p2.x_coord() - *p1.x_coord()) * (*p3.y_coord() - *p1.y_coord())
      - (*p2.y_coord() - *p1.y_coord()) * (*p3.x_coord() - *p1.x_coord());
    if cross > T::zero() {
      CounterClockWise
    } else if cross < T::zero() {
      ClockWise
    } else {
      CoLinear
    }
  }

  #[must_use]
  pub fn reverse(self) -> Orientation {
    match self {
      CounterClockWise => ClockWise,
      ClockWise => CounterClockWise,
      CoLinear => CoLinear,
    }
  }

  pub fn is_ccw(self) -> bool {
    self == CounterClockWise
  }

  pub fn is_cw(self) -> bool {
    self == ClockWise
  }

  pub fn is_colinear(self) -> bool {
    self == CoLinear
  }
}
