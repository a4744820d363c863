//! View volumes
//!
//! A [`Frustum`] has its apex at the origin and opens along `+z`. Its
//! cross-section at depth `z` is the 2D `base` shape scaled by `z`, so the
//! base is the cross-section at `z = 1`: for a pinhole camera, the image
//! rectangle on the unit-distance image plane. The `depth` range clips the
//! volume to near and far planes.

use nalgebra::{RealField, SVector, Vector1, Vector2, Vector3};
use serde::{Deserialize, Serialize};

use super::shape::{Region, Shape};
use super::Rect;

/// A 2D shape swept from the apex through a range of depths
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(bound(
    serialize = "S: Serialize, S::Scalar: Serialize",
    deserialize = "S: Deserialize<'de>, S::Scalar: Deserialize<'de>"
))]
pub struct Frustum<S: Shape> {
    /// Cross-section at `z = 1`
    pub base: S,
    /// Near and far planes along `z`
    pub depth: Rect<S::Scalar, 1>,
}

impl<S: Region<2>> Frustum<S> {
    /// Create a frustum; depths at or behind the apex are clipped away
    pub fn new(base: S, near: S::Scalar, far: S::Scalar) -> Self {
        let zero = nalgebra::zero::<S::Scalar>();
        Self {
            base,
            depth: Rect::new(Vector1::new(near.max(zero)), Vector1::new(far.max(zero))),
        }
    }

    /// Near plane depth
    pub fn near(&self) -> S::Scalar {
        self.depth.lo().x
    }

    /// Far plane depth
    pub fn far(&self) -> S::Scalar {
        self.depth.hi().x
    }

    /// Project a point onto the `z = 1` plane, `None` at or behind the apex
    pub fn project(&self, point: &Vector3<S::Scalar>) -> Option<Vector2<S::Scalar>> {
        (point.z > nalgebra::zero()).then(|| Vector2::new(point.x / point.z, point.y / point.z))
    }
}

impl<S: Shape> Shape for Frustum<S> {
    type Scalar = S::Scalar;
}

impl<S: Region<2>> Region<3> for Frustum<S> {
    fn contains(&self, point: &SVector<S::Scalar, 3>) -> bool {
        if !self.depth.contains(&Vector1::new(point.z)) {
            return false;
        }
        self.project(point)
            .is_some_and(|projected| self.base.contains(&projected))
    }

    fn bounds(&self) -> Rect<S::Scalar, 3> {
        let base = self.base.bounds();
        let corners = [
            Vector2::new(base.lo().x, base.lo().y),
            Vector2::new(base.hi().x, base.lo().y),
            Vector2::new(base.lo().x, base.hi().y),
            Vector2::new(base.hi().x, base.hi().y),
        ];

        let near = self.near();
        let mut bounds = Rect::from_point(Vector3::new(corners[0].x * near, corners[0].y * near, near));
        for z in [near, self.far()] {
            for corner in &corners {
                bounds = bounds.extend_to(&Vector3::new(corner.x * z, corner.y * z, z));
            }
        }
        bounds
    }
}
