//! Shapes grown by a radius
//!
//! `Dilated<Rect<T, D>>` is a rounded rectangle (or rounded box). Any shape
//! with an exact signed distance can be dilated.

use nalgebra::SVector;
use serde::{Deserialize, Serialize};

use super::shape::{Region, Sdf, Shape};
use super::Rect;

/// Every point within `radius` of `shape`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(bound(
    serialize = "S: Serialize, S::Scalar: Serialize",
    deserialize = "S: Deserialize<'de>, S::Scalar: Deserialize<'de>"
))]
pub struct Dilated<S: Shape> {
    /// The shape being grown
    pub shape: S,
    /// Distance the boundary is pushed outward
    pub radius: S::Scalar,
}

impl<S: Shape> Dilated<S> {
    /// Grow `shape` by `radius`
    pub const fn new(shape: S, radius: S::Scalar) -> Self {
        Self { shape, radius }
    }
}

impl<S: Shape> Shape for Dilated<S> {
    type Scalar = S::Scalar;
}

impl<S: Sdf<D>, const D: usize> Region<D> for Dilated<S> {
    fn contains(&self, point: &SVector<S::Scalar, D>) -> bool {
        self.shape.sdf(point) <= self.radius
    }

    fn bounds(&self) -> Rect<S::Scalar, D> {
        self.shape.bounds().dilated(self.radius)
    }
}

impl<S: Sdf<D>, const D: usize> Sdf<D> for Dilated<S> {
    fn sdf(&self, point: &SVector<S::Scalar, D>) -> S::Scalar {
        self.shape.sdf(point) - self.radius
    }
}
