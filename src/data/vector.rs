use array_init::array_init;
use num_traits::Zero;
use std::ops::{Add, Index, Mul, Sub};

use crate::data::Point;

#[derive(Debug, Clone, PartialEq, PartialOrd)]
#[repr(transparent)]
pub struct Vector<T, const N: usize>(pub [T; N]);

impl<T, const N: usize> Vector<T, N> {
  pub fn dot(&self, other: &Vector<T, N>) -> T
  where
    T: Zero + Clone + Mul<Output = T>,
  {
    self
      .0
      .iter()
      .zip(other.0.iter())
      .fold(T::zero(), |acc, (a, b)| acc + a.clone() * b.clone())
  }

  pub fn squared_magnitude(&self) -> T
  where
    T: Zero + Clone + Mul<Output = T>,
  {
    self.dot(self)
  }
}

impl<T, const N: usize> Index<usize> for Vector<T, N> {
  type Output = T;
  fn index(&self, index: usize) -> &T {
    self.0.index(index)
  }
}

impl<T, const N: usize> From<Point<T, N>> for Vector<T, N> {
  fn from(point: Point<T, N>) -> Vector<T, N> {
    Vector(point.array)
  }
}

impl<'a, T, const N: usize> From<&'a Point<T, N>> for &'a Vector<T, N> {
  fn from(point: &Point<T, N>) -> &Vector<T, N> {
    unsafe { &*(point as *const Point<T, N> as *const Vector<T, N>) }
  }
}

impl<T, const N: usize> Add for Vector<T, N>
where
  T: Add<Output = T> + Clone,
{
  type Output = Vector<T, N>;
  fn add(self, rhs: Vector<T, N>) -> Vector<T, N> {
    Vector(array_init(|i| self.0[i].clone() + rhs.0[i].clone()))
  }
}

impl<T, const N: usize> Sub for Vector<T, N>
where
  T: Sub<Output = T> + Clone,
{
  type Output = Vector<T, N>;
  fn sub(self, rhs: Vector<T, N>) -> Vector<T, N> {
    Vector(array_init(|i| self.0[i].clone() - rhs.0[i].clone()))
  }
}

// Scalar multiplication.
impl<T, const N: usize> Mul<T> for Vector<T, N>
where
  T: Mul<Output = T> + Clone,
{
  type Output = Vector<T, N>;
  fn mul(self, rhs: T) -> Vector<T, N> {
    Vector(array_init(|i| self.0[i].clone() * rhs.clone()))
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn dot_product() {
    let a = Vector([1.0, 2.0]);
    let b = Vector([3.0, 4.0]);
    assert_eq!(a.dot(&b), 11.0);
    assert_eq!(a.squared_magnitude(), 5.0);
  }

  #[test]
  fn point_reference_cast() {
    let p = Point::new([2.0, 5.0]);
    let v: &Vector<f64, 2> = p.as_vec();
    assert_eq!(v[0], 2.0);
    assert_eq!(v[1], 5.0);
  }
}
