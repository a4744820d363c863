//! Traits shared by the geometric shapes

use nalgebra::{RealField, SVector};

use super::Rect;

/// A shape over a floating-point scalar
pub trait Shape {
    /// Coordinate type of the shape
    type Scalar: RealField + Copy;
}

/// A shape occupying a region of `D`-dimensional space
pub trait Region<const D: usize>: Shape {
    /// Whether the point lies inside or on the boundary
    fn contains(&self, point: &SVector<Self::Scalar, D>) -> bool;

    /// Axis-aligned bounds enclosing the shape
    fn bounds(&self) -> Rect<Self::Scalar, D>;
}

/// A region with an exact signed distance function
///
/// Negative inside, zero on the boundary, positive outside.
pub trait Sdf<const D: usize>: Region<D> {
    /// Signed distance from the point to the shape boundary
    fn sdf(&self, point: &SVector<Self::Scalar, D>) -> Self::Scalar;
}
