//! Boxes with a frame: oriented (rigid) and affine-transformed
//!
//! Both store an axis-aligned [`Rect`] in their local frame plus a map from
//! local to world space. An [`OrientedBox`] only rotates and translates, so
//! distances survive the transform and it has an exact [`Sdf`]. An
//! [`AffineBox`] may also scale and shear (a parallelotope).

use nalgebra::{RealField, Rotation, SMatrix, SVector};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

use super::shape::{Region, Sdf, Shape};
use super::{AffineTransform, Rect};

/// World-space bounds of a local rect mapped by `linear` and `translation`
fn mapped_bounds<T: RealField + Copy, const D: usize>(
    rect: &Rect<T, D>,
    linear: &SMatrix<T, D, D>,
    translation: &SVector<T, D>,
) -> Rect<T, D> {
    let center = linear * rect.center() + translation;
    let extents = linear.map(|x| x.abs()) * rect.extents();
    Rect::from_center_extents(center, extents)
}

/// Box with arbitrary position and orientation
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct OrientedBox<T: RealField + Copy, const D: usize> {
    /// Extents in the box's local frame
    pub rect: Rect<T, D>,
    /// Orthonormal local-to-world rotation; columns are the box axes
    orientation: SMatrix<T, D, D>,
    /// Position of the local origin in world space
    pub translation: SVector<T, D>,
}

impl<T: RealField + Copy, const D: usize> OrientedBox<T, D> {
    /// Create a box from local extents, a rotation and a translation
    pub fn new(rect: Rect<T, D>, rotation: Rotation<T, D>, translation: SVector<T, D>) -> Self {
        Self {
            rect,
            orientation: rotation.into_inner(),
            translation,
        }
    }

    /// Create a box from a raw orientation matrix
    ///
    /// `None` unless `orientation` is orthonormal to within `1e-4`.
    pub fn try_from_parts(
        rect: Rect<T, D>,
        orientation: SMatrix<T, D, D>,
        translation: SVector<T, D>,
    ) -> Option<Self> {
        let tolerance: T = nalgebra::convert(1.0e-4);
        let error = (orientation.tr_mul(&orientation) - SMatrix::<T, D, D>::identity()).norm();
        (error <= tolerance).then_some(Self {
            rect,
            orientation,
            translation,
        })
    }

    /// An axis-aligned box in world space
    pub fn from_rect(rect: Rect<T, D>) -> Self {
        Self {
            rect,
            orientation: SMatrix::identity(),
            translation: SVector::zeros(),
        }
    }

    /// Box axes as the columns of a rotation matrix
    pub const fn orientation(&self) -> &SMatrix<T, D, D> {
        &self.orientation
    }

    /// Local-to-world transform
    pub fn local_to_world(&self) -> AffineTransform<T, D> {
        AffineTransform::new(self.orientation, self.translation)
    }

    /// Map a world-space point into the box frame
    pub fn to_local(&self, point: &SVector<T, D>) -> SVector<T, D> {
        self.orientation.transpose() * (point - self.translation)
    }

    /// World-space center of the box
    pub fn center(&self) -> SVector<T, D> {
        self.orientation * self.rect.center() + self.translation
    }
}

#[derive(Deserialize)]
#[serde(rename = "OrientedBox")]
struct Frame<T: RealField + Copy, const D: usize> {
    rect: Rect<T, D>,
    orientation: SMatrix<T, D, D>,
    translation: SVector<T, D>,
}

impl<'de, T, const D: usize> Deserialize<'de> for OrientedBox<T, D>
where
    T: RealField + Copy + Deserialize<'de>,
{
    fn deserialize<De: Deserializer<'de>>(deserializer: De) -> Result<Self, De::Error> {
        let frame = Frame::<T, D>::deserialize(deserializer)?;
        Self::try_from_parts(frame.rect, frame.orientation, frame.translation)
            .ok_or_else(|| De::Error::custom("orientation is not orthonormal"))
    }
}

impl<T: RealField + Copy, const D: usize> Shape for OrientedBox<T, D> {
    type Scalar = T;
}

impl<T: RealField + Copy, const D: usize> Region<D> for OrientedBox<T, D> {
    fn contains(&self, point: &SVector<T, D>) -> bool {
        self.rect.contains(&self.to_local(point))
    }

    fn bounds(&self) -> Rect<T, D> {
        mapped_bounds(&self.rect, &self.orientation, &self.translation)
    }
}

impl<T: RealField + Copy, const D: usize> Sdf<D> for OrientedBox<T, D> {
    fn sdf(&self, point: &SVector<T, D>) -> T {
        self.rect.sdf(&self.to_local(point))
    }
}

/// Box mapped into world space by an arbitrary affine transform
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AffineBox<T: RealField + Copy, const D: usize> {
    /// Extents in the box's local frame
    pub rect: Rect<T, D>,
    /// Local-to-world transform
    pub xf: AffineTransform<T, D>,
}

impl<T: RealField + Copy, const D: usize> AffineBox<T, D> {
    /// Create a box from local extents and a local-to-world transform
    pub const fn new(rect: Rect<T, D>, xf: AffineTransform<T, D>) -> Self {
        Self { rect, xf }
    }

    /// World-space center of the box
    pub fn center(&self) -> SVector<T, D> {
        self.xf.transform_point(&self.rect.center())
    }
}

impl<T: RealField + Copy, const D: usize> Shape for AffineBox<T, D> {
    type Scalar = T;
}

impl<T: RealField + Copy, const D: usize> Region<D> for AffineBox<T, D> {
    /// A box flattened by a singular transform contains nothing
    fn contains(&self, point: &SVector<T, D>) -> bool {
        self.xf
            .try_inverse()
            .is_some_and(|inverse| self.rect.contains(&inverse.transform_point(point)))
    }

    fn bounds(&self) -> Rect<T, D> {
        mapped_bounds(&self.rect, &self.xf.linear, &self.xf.translation)
    }
}
