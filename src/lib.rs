#![deny(clippy::cast_lossless)]

pub mod algorithms;
pub mod data;
pub mod editor;
mod orientation;

pub use orientation::Orientation;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
  /// Three points are colinear or oriented clockwise where a
  /// counter-clockwise turn is required.
  ClockWiseViolation,
}

impl std::fmt::Display for Error {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> Result<(), std::fmt::Error> {
    match self {
      Error::ClockWiseViolation => write!(f, "Clockwise violation"),
    }
  }
}

#[cfg(test)]
pub mod testing;
