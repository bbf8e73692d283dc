// Proptest strategies shared by the unit tests.
use crate::data::Point;

use proptest::collection::vec;
use proptest::prelude::*;
use std::f64::consts::TAU;

/// Strictly convex polygons with distinct vertices, in either winding
/// order, placed the way an interactive canvas would see them (positive
/// coordinates, tens to hundreds of units across).
///
/// Construction: a regular n-gon on a circle with each vertex angle
/// jittered by less than half the angular step, so the angles stay
/// strictly increasing and no two vertices collide.
pub fn convex_points() -> impl Strategy<Value = Vec<Point<f64, 2>>> {
  (3..16usize)
    .prop_flat_map(|n| {
      (
        vec(-1.0..1.0f64, n),
        50.0..900.0f64,
        50.0..900.0f64,
        10.0..400.0f64,
        any::<bool>(),
      )
    })
    .prop_map(|(jitter, center_x, center_y, radius, reversed)| {
      let n = jitter.len();
      let step = TAU / n as f64;
      let mut points: Vec<Point<f64, 2>> = (0..n)
        .map(|k| {
          let angle = step * k as f64 + jitter[k] * step / 4.0;
          Point::new([
            center_x + radius * angle.cos(),
            center_y + radius * angle.sin(),
          ])
        })
        .collect();
      if reversed {
        points.reverse();
      }
      points
    })
}

/// Arbitrary finite points in a canvas-sized box.
pub fn canvas_point() -> impl Strategy<Value = Point<f64, 2>> {
  (0.0..1000.0f64, 0.0..1000.0f64).prop_map(|(x, y)| Point::new([x, y]))
}
