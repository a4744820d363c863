//! Rays for casting and picking

use nalgebra::{RealField, SVector};
use serde::{Deserialize, Serialize};

/// A half-line with an origin and a unit direction
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ray<T: RealField, const D: usize> {
    /// The origin point of the ray
    pub origin: SVector<T, D>,
    /// The direction of the ray (normalized by [`Ray::new`])
    pub direction: SVector<T, D>,
}

impl<T: RealField + Copy, const D: usize> Ray<T, D> {
    /// Creates a new ray with the given origin and direction
    ///
    /// `direction` must be nonzero. A zero direction yields NaN components;
    /// use [`Ray::try_new`] when it may be.
    pub fn new(origin: SVector<T, D>, direction: SVector<T, D>) -> Self {
        Self {
            origin,
            direction: direction.normalize(),
        }
    }

    /// Creates a ray, or `None` if `direction` has zero length
    pub fn try_new(origin: SVector<T, D>, direction: SVector<T, D>) -> Option<Self> {
        let direction = direction.try_normalize(T::zero())?;
        Some(Self { origin, direction })
    }

    /// Creates a ray from `from` pointing at `to`
    pub fn through(from: SVector<T, D>, to: SVector<T, D>) -> Self {
        Self::new(from, to - from)
    }

    /// Get a point along the ray at parameter t
    pub fn point_at(&self, t: T) -> SVector<T, D> {
        self.origin + self.direction * t
    }
}

/// Result of a ray intersection test
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayHit<T: RealField, const D: usize> {
    /// The distance from the ray origin to the hit point
    pub distance: T,
    /// The point of intersection
    pub point: SVector<T, D>,
    /// The surface normal at the intersection point
    pub normal: SVector<T, D>,
}
