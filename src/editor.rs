//! Interactive contour editing.
//!
//! [`ContourEditor`] owns the polygon being edited and resolves pointer
//! and key input against it: hovering highlights the nearest vertex or
//! edge, a primary click grabs or inserts a vertex, a secondary action
//! deletes whatever is highlighted. Every mutation re-triangulates the
//! contour from scratch; the renderer reads the results through the
//! accessors and [`ContourEditor::take_redraw`].

use num_traits::{Float, FromPrimitive};

use crate::algorithms::triangulation::earclip;
use crate::data::{Contour, LineSegmentView, Point, VertexId};

/// Pointer button, with platform scan codes already resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
  Primary,
  Secondary,
}

/// Keyboard commands, with key bindings already resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
  ClearAll,
  RotateContour,
}

/// Current hover target. Vertex and edge highlights are mutually
/// exclusive, and a vertex highlight wins whenever both would apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Highlight {
  Vertex(VertexId),
  /// A boundary edge; `index` is the boundary position of `src`, and
  /// the edge from the last point back to the first is included.
  Edge {
    src: VertexId,
    dst: VertexId,
    index: usize,
  },
}

/// Hit-testing thresholds and the ear-clipping tolerance.
///
/// All distances are kept squared to avoid square roots in the hot
/// path. Note the asymmetry: `point_snap_dist_sq` is derived from the
/// point radius, while `line_snap_dist_sq` is a flat constant compared
/// against the same squared quantity (about 4.5 units of actual
/// distance). The mismatch is intentional; see DESIGN.md.
#[derive(Debug, Clone, Copy)]
pub struct EditorConfig<T> {
  pub point_radius: T,
  pub point_snap_dist_sq: T,
  pub line_snap_dist_sq: T,
  pub epsilon: T,
}

impl<T> EditorConfig<T>
where
  T: Float + FromPrimitive,
{
  pub fn new(point_radius: T) -> EditorConfig<T> {
    let four = T::from_u8(4).unwrap();
    EditorConfig {
      point_radius,
      point_snap_dist_sq: point_radius * point_radius * four,
      line_snap_dist_sq: T::from_u8(20).unwrap(),
      epsilon: T::from_f64(1.0e-8).unwrap(),
    }
  }
}

impl Default for EditorConfig<f64> {
  fn default() -> EditorConfig<f64> {
    EditorConfig::new(4.0)
  }
}

/// Owns a [`Contour`] plus the transient interaction state: at most one
/// held (dragged) vertex and at most one highlighted vertex or edge.
#[derive(Debug, Clone)]
pub struct ContourEditor<T> {
  contour: Contour<T>,
  triangles: Vec<(VertexId, VertexId, VertexId)>,
  held: Option<VertexId>,
  highlight: Option<Highlight>,
  config: EditorConfig<T>,
  redraw: bool,
}

impl Default for ContourEditor<f64> {
  fn default() -> ContourEditor<f64> {
    ContourEditor::new(EditorConfig::default())
  }
}

impl<T> ContourEditor<T>
where
  T: Float,
{
  pub fn new(config: EditorConfig<T>) -> ContourEditor<T> {
    ContourEditor {
      contour: Contour::new(),
      triangles: Vec::new(),
      held: None,
      highlight: None,
      config,
      redraw: true,
    }
  }

  ///////////////////////////////////////////////////////////////////////////
  // Event facade

  pub fn pointer_down(&mut self, position: Point<T, 2>, button: Button) {
    if button == Button::Primary {
      self.select_or_insert(position);
      // Unconditional: even a click that mutated nothing refreshes the
      // triangle list.
      self.retriangulate();
      self.redraw = true;
    }
  }

  pub fn pointer_up(&mut self) {
    self.release_held();
  }

  pub fn pointer_move(&mut self, position: Point<T, 2>) {
    if self.held.is_some() {
      self.drag_held(position);
      self.retriangulate();
      self.redraw = true;
    } else if self.update_highlight(position) {
      self.redraw = true;
    }
  }

  /// Secondary/context action: delete the highlighted vertex or edge.
  /// Returns whether anything was deleted (callers use this to swallow
  /// the platform's default context behavior).
  pub fn context_action(&mut self) -> bool {
    if self.delete_highlighted() {
      self.retriangulate();
      self.redraw = true;
      true
    } else {
      false
    }
  }

  pub fn key_press(&mut self, command: Command) {
    match command {
      Command::ClearAll => self.clear(),
      Command::RotateContour => self.rotate_contour(),
    }
  }

  ///////////////////////////////////////////////////////////////////////////
  // Interaction primitives

  /// Primary pointer-down: grab the highlighted vertex, or insert a new
  /// one.
  ///
  /// Grabbing warps the vertex to the pointer immediately, so a click
  /// near a vertex both picks it up and moves it. Without a highlight,
  /// insertion only happens while the contour still has fewer than two
  /// points; once a boundary exists, new points go in by splitting a
  /// highlighted edge.
  pub fn select_or_insert(&mut self, position: Point<T, 2>) {
    match self.highlight {
      Some(Highlight::Vertex(id)) => {
        self.held = Some(id);
        *self.contour.point_mut(id) = position;
      }
      Some(Highlight::Edge { .. }) => self.insert_point(position),
      None if self.contour.len() < 2 => self.insert_point(position),
      None => {}
    }
  }

  /// Insert a new point: directly after the highlighted edge's first
  /// endpoint if an edge is highlighted, otherwise at the end. The new
  /// point becomes both held and highlighted.
  pub fn insert_point(&mut self, position: Point<T, 2>) {
    let at = match self.highlight {
      Some(Highlight::Edge { index, .. }) => index + 1,
      _ => self.contour.len(),
    };
    let id = self.contour.insert(at, position);
    self.held = Some(id);
    self.highlight = Some(Highlight::Vertex(id));
  }

  /// Drop the held vertex, if any.
  pub fn release_held(&mut self) {
    self.held = None;
  }

  /// Move the held vertex to the pointer position. Returns whether a
  /// vertex was actually moved; the caller is responsible for
  /// re-triangulating afterwards.
  pub fn drag_held(&mut self, position: Point<T, 2>) -> bool {
    match self.held {
      Some(id) => {
        *self.contour.point_mut(id) = position;
        true
      }
      None => false,
    }
  }

  /// Recompute the hover target for the given pointer position.
  ///
  /// The first vertex within the point snap distance wins, scanning in
  /// boundary order, and suppresses any edge highlight. Otherwise the
  /// closest edge (including the wraparound edge) is highlighted if it
  /// is within the edge snap distance.
  ///
  /// Returns whether the highlight changed. Vertex highlights compare
  /// by handle; an edge highlight on either side of the update always
  /// counts as a change, since the edge record is rebuilt on every
  /// move.
  pub fn update_highlight(&mut self, position: Point<T, 2>) -> bool {
    let old = self.highlight.take();

    let mut next = None;
    for &id in self.contour.order() {
      let dist_sq = self.contour.point(id).squared_euclidean_distance(&position);
      if dist_sq < self.config.point_snap_dist_sq {
        next = Some(Highlight::Vertex(id));
        break;
      }
    }

    if next.is_none() && self.contour.len() > 1 {
      let order = self.contour.order();
      let mut best = T::infinity();
      let mut closest = None;
      for index in 0..order.len() {
        let src = order[index];
        let dst = order[(index + 1) % order.len()];
        let segment = LineSegmentView::new(self.contour.point(src), self.contour.point(dst));
        let dist_sq = segment.squared_distance_to(&position);
        if dist_sq < best {
          best = dist_sq;
          closest = Some(Highlight::Edge { src, dst, index });
        }
      }
      if best < self.config.line_snap_dist_sq {
        next = closest;
      }
    }

    self.highlight = next;
    match (old, next) {
      (None, None) => false,
      (Some(Highlight::Vertex(a)), Some(Highlight::Vertex(b))) => a != b,
      _ => true,
    }
  }

  /// Remove the highlighted vertex, or both endpoints of the
  /// highlighted edge. Clears the held reference if it pointed at a
  /// removed vertex. Returns whether anything was removed; the caller
  /// is responsible for re-triangulating afterwards.
  pub fn delete_highlighted(&mut self) -> bool {
    match self.highlight.take() {
      Some(Highlight::Vertex(id)) => {
        self.contour.remove(id);
        if self.held == Some(id) {
          self.held = None;
        }
        true
      }
      Some(Highlight::Edge { src, dst, .. }) => {
        self.contour.remove(src);
        self.contour.remove(dst);
        if self.held == Some(src) || self.held == Some(dst) {
          self.held = None;
        }
        true
      }
      None => false,
    }
  }

  /// Rotate the contour one step, moving the first point to the end.
  ///
  /// This is bound to the winding-reversal key, but it rotates instead
  /// of reversing the vertex order. Triangulation normalizes winding,
  /// so for well-formed polygons the difference only shows in vertex
  /// indices; kept as observed behavior, see DESIGN.md.
  pub fn rotate_contour(&mut self) {
    if self.contour.len() > 1 {
      self.contour.rotate_left();
      self.retriangulate();
      self.redraw = true;
    }
  }

  /// Empty the contour and drop all selection state.
  pub fn clear(&mut self) {
    self.contour.clear();
    self.triangles.clear();
    self.held = None;
    self.highlight = None;
    self.redraw = true;
  }

  fn retriangulate(&mut self) {
    self.triangles =
      earclip::triangulate_list(self.contour.points(), self.contour.order(), self.config.epsilon);
  }

  ///////////////////////////////////////////////////////////////////////////
  // Renderer-facing accessors (read-only)

  pub fn contour(&self) -> &Contour<T> {
    &self.contour
  }

  pub fn triangles(&self) -> &[(VertexId, VertexId, VertexId)] {
    &self.triangles
  }

  pub fn held(&self) -> Option<VertexId> {
    self.held
  }

  pub fn highlight(&self) -> Option<Highlight> {
    self.highlight
  }

  pub fn config(&self) -> &EditorConfig<T> {
    &self.config
  }

  /// Consume the redraw flag. Mutations within one frame collapse into
  /// a single redraw, although each of them re-triangulates eagerly.
  pub fn take_redraw(&mut self) -> bool {
    std::mem::replace(&mut self.redraw, false)
  }
}
