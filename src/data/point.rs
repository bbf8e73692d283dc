use array_init::array_init;
use rand::distributions::{Distribution, Standard};
use rand::Rng;
use std::ops::{Add, Deref, Index, Mul, Sub};

use num_traits::Zero;

use super::Vector;

#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
#[repr(transparent)] // Required for the Point -> Vector reference cast.
pub struct Point<T, const N: usize> {
  pub array: [T; N],
}

// Random sampling.
impl<T, const N: usize> Distribution<Point<T, N>> for Standard
where
  Standard: Distribution<T>,
{
  fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Point<T, N> {
    Point {
      array: array_init(|_| rng.gen()),
    }
  }
}

// Methods on N-dimensional points.
impl<T, const N: usize> Point<T, N> {
  pub const fn new(array: [T; N]) -> Point<T, N> {
    Point { array }
  }

  pub fn as_vec(&self) -> &Vector<T, N> {
    self.into()
  }

  pub fn squared_euclidean_distance(&self, rhs: &Point<T, N>) -> T
  where
    T: Zero + Clone + Sub<Output = T> + Mul<Output = T>,
  {
    self
      .array
      .iter()
      .zip(rhs.array.iter())
      .fold(T::zero(), |acc, (a, b)| {
        let diff = a.clone() - b.clone();
        acc + diff.clone() * diff
      })
  }

  pub fn cast<U, F>(&self, f: F) -> Point<U, N>
  where
    T: Clone,
    F: Fn(T) -> U,
  {
    Point {
      array: array_init(|i| f(self.array[i].clone())),
    }
  }
}

impl<T> Point<T, 2> {
  pub fn x_coord(&self) -> &T {
    &self.array[0]
  }
  pub fn y_coord(&self) -> &T {
    &self.array[1]
  }
}

impl<T, const N: usize> Index<usize> for Point<T, N> {
  type Output = T;
  fn index(&self, key: usize) -> &T {
    self.array.index(key)
  }
}

impl<T, const N: usize> Deref for Point<T, N> {
  type Target = [T; N];
  fn deref(&self) -> &[T; N] {
    &self.array
  }
}

impl<T> From<(T, T)> for Point<T, 2> {
  fn from(point: (T, T)) -> Point<T, 2> {
    Point {
      array: [point.0, point.1],
    }
  }
}

impl<T, const N: usize> From<Vector<T, N>> for Point<T, N> {
  fn from(vector: Vector<T, N>) -> Point<T, N> {
    Point { array: vector.0 }
  }
}

impl<'a, T, const N: usize> Sub for &'a Point<T, N>
where
  T: Sub<Output = T> + Clone,
{
  type Output = Vector<T, N>;
  fn sub(self, rhs: &'a Point<T, N>) -> Vector<T, N> {
    Vector(array_init(|i| {
      self.array[i].clone() - rhs.array[i].clone()
    }))
  }
}

impl<'a, T, const N: usize> Add<Vector<T, N>> for &'a Point<T, N>
where
  T: Add<Output = T> + Clone,
{
  type Output = Point<T, N>;
  fn add(self, rhs: Vector<T, N>) -> Point<T, N> {
    Point {
      array: array_init(|i| self.array[i].clone() + rhs.0[i].clone()),
    }
  }
}
