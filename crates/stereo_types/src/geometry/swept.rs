//! Shapes swept along a segment: cylinders and capsules
//!
//! Both are described by two axis endpoints and a radius. A cylinder has
//! flat caps (in 2D it is a thick segment, a rotated rectangle); a capsule
//! has round caps.

use nalgebra::{RealField, SVector};
use serde::{Deserialize, Serialize};

use super::shape::{Region, Sdf, Shape};
use super::{half, Rect};

/// Flat-capped cylinder between two points
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Cylinder<T: RealField, const D: usize> {
    /// Center of the first cap
    pub p0: SVector<T, D>,
    /// Center of the second cap
    pub p1: SVector<T, D>,
    /// Radius around the axis
    pub radius: T,
}

/// Round-capped cylinder between two points
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Capsule<T: RealField, const D: usize> {
    /// First axis endpoint
    pub p0: SVector<T, D>,
    /// Second axis endpoint
    pub p1: SVector<T, D>,
    /// Radius around the axis
    pub radius: T,
}

/// Bounds of both endpoints grown by the radius
fn swept_bounds<T: RealField + Copy, const D: usize>(
    p0: &SVector<T, D>,
    p1: &SVector<T, D>,
    radius: T,
) -> Rect<T, D> {
    Rect::new(*p0, *p1).dilated(radius)
}

impl<T: RealField + Copy, const D: usize> Cylinder<T, D> {
    /// Create a cylinder from its cap centers and radius
    pub const fn new(p0: SVector<T, D>, p1: SVector<T, D>, radius: T) -> Self {
        Self { p0, p1, radius }
    }

    /// Axis vector from `p0` to `p1`
    pub fn axis(&self) -> SVector<T, D> {
        self.p1 - self.p0
    }

    /// Distance between the caps
    pub fn length(&self) -> T {
        self.axis().norm()
    }
}

impl<T: RealField + Copy, const D: usize> Shape for Cylinder<T, D> {
    type Scalar = T;
}

impl<T: RealField + Copy, const D: usize> Region<D> for Cylinder<T, D> {
    fn contains(&self, point: &SVector<T, D>) -> bool {
        self.sdf(point) <= T::zero()
    }

    /// Conservative: the bounds of the capsule with the same axis
    fn bounds(&self) -> Rect<T, D> {
        swept_bounds(&self.p0, &self.p1, self.radius)
    }
}

impl<T: RealField + Copy, const D: usize> Sdf<D> for Cylinder<T, D> {
    fn sdf(&self, point: &SVector<T, D>) -> T {
        let rel = point - self.p0;
        let length = self.length();
        if length <= T::default_epsilon() {
            // Zero-length axis
            return rel.norm() - self.radius;
        }

        let dir = self.axis() / length;
        let along = rel.dot(&dir);
        let radial = (rel - dir * along).norm();

        let half_length = length * half::<T>();
        let dx = radial - self.radius;
        let dy = (along - half_length).abs() - half_length;

        let outside_x = dx.max(T::zero());
        let outside_y = dy.max(T::zero());
        dx.max(dy).min(T::zero()) + (outside_x * outside_x + outside_y * outside_y).sqrt()
    }
}

impl<T: RealField + Copy, const D: usize> Capsule<T, D> {
    /// Create a capsule from its axis endpoints and radius
    pub const fn new(p0: SVector<T, D>, p1: SVector<T, D>, radius: T) -> Self {
        Self { p0, p1, radius }
    }

    /// Point on the axis segment nearest to `point`
    pub fn closest_point_on_axis(&self, point: &SVector<T, D>) -> SVector<T, D> {
        let axis = self.p1 - self.p0;
        let length_squared = axis.norm_squared();
        if length_squared <= T::default_epsilon() {
            return self.p0;
        }
        let t = ((point - self.p0).dot(&axis) / length_squared)
            .max(T::zero())
            .min(T::one());
        self.p0 + axis * t
    }
}

impl<T: RealField + Copy, const D: usize> Shape for Capsule<T, D> {
    type Scalar = T;
}

impl<T: RealField + Copy, const D: usize> Region<D> for Capsule<T, D> {
    fn contains(&self, point: &SVector<T, D>) -> bool {
        self.sdf(point) <= T::zero()
    }

    fn bounds(&self) -> Rect<T, D> {
        swept_bounds(&self.p0, &self.p1, self.radius)
    }
}

impl<T: RealField + Copy, const D: usize> Sdf<D> for Capsule<T, D> {
    fn sdf(&self, point: &SVector<T, D>) -> T {
        (point - self.closest_point_on_axis(point)).norm() - self.radius
    }
}
