//! Affine transforms
//!
//! An [`AffineTransform`] is a linear map followed by a translation,
//! `x -> linear * x + translation`, stored unprojected so it stays generic
//! over the dimension. Conversions to nalgebra's homogeneous
//! [`Affine2`]/[`Affine3`] are provided for the 2D and 3D cases.

use std::ops::Mul;

use nalgebra::{Affine2, Affine3, Matrix3, Matrix4, RealField, Rotation, SMatrix, SVector};
use serde::{Deserialize, Serialize};

/// Linear map plus translation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AffineTransform<T: RealField, const D: usize> {
    /// Linear part (rotation, scale, shear)
    pub linear: SMatrix<T, D, D>,
    /// Translation applied after the linear part
    pub translation: SVector<T, D>,
}

impl<T: RealField + Copy, const D: usize> Default for AffineTransform<T, D> {
    fn default() -> Self {
        Self::identity()
    }
}

impl<T: RealField + Copy, const D: usize> AffineTransform<T, D> {
    /// Create a transform from its linear part and translation
    pub const fn new(linear: SMatrix<T, D, D>, translation: SVector<T, D>) -> Self {
        Self { linear, translation }
    }

    /// Create a new identity transform
    pub fn identity() -> Self {
        Self::new(SMatrix::identity(), SVector::zeros())
    }

    /// Create a transform with only a translation
    pub fn from_translation(translation: SVector<T, D>) -> Self {
        Self::new(SMatrix::identity(), translation)
    }

    /// Create a transform with only a linear part
    pub fn from_linear(linear: SMatrix<T, D, D>) -> Self {
        Self::new(linear, SVector::zeros())
    }

    /// Create a per-axis scaling transform
    pub fn from_scale(scale: SVector<T, D>) -> Self {
        Self::from_linear(SMatrix::from_diagonal(&scale))
    }

    /// Create a rotation about the origin
    pub fn from_rotation(rotation: Rotation<T, D>) -> Self {
        Self::from_linear(rotation.into_inner())
    }

    /// Apply this transform to a point
    pub fn transform_point(&self, point: &SVector<T, D>) -> SVector<T, D> {
        self.linear * point + self.translation
    }

    /// Apply this transform to a vector (translation ignored)
    pub fn transform_vector(&self, vector: &SVector<T, D>) -> SVector<T, D> {
        self.linear * vector
    }

    /// Transform that applies `self` first, then `next`
    pub fn then(&self, next: &Self) -> Self {
        *next * *self
    }

    /// Get the inverse transform, `None` if the linear part is singular
    pub fn try_inverse(&self) -> Option<Self> {
        let inverse = self.linear.try_inverse()?;
        Some(Self::new(inverse, -(inverse * self.translation)))
    }

    /// Whether the linear part is invertible
    pub fn is_invertible(&self) -> bool {
        self.linear.try_inverse().is_some()
    }
}

/// Composition: `(a * b)(x) == a(b(x))`
impl<T: RealField + Copy, const D: usize> Mul for AffineTransform<T, D> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        Self::new(
            self.linear * rhs.linear,
            self.linear * rhs.translation + self.translation,
        )
    }
}

impl<T: RealField + Copy> AffineTransform<T, 2> {
    /// Convert to a 3x3 homogeneous matrix
    pub fn to_homogeneous(&self) -> Matrix3<T> {
        let mut m = Matrix3::identity();
        m.fixed_view_mut::<2, 2>(0, 0).copy_from(&self.linear);
        m.fixed_view_mut::<2, 1>(0, 2).copy_from(&self.translation);
        m
    }

    /// Convert to nalgebra's homogeneous 2D affine transform
    pub fn to_affine(&self) -> Affine2<T> {
        Affine2::from_matrix_unchecked(self.to_homogeneous())
    }
}

impl<T: RealField + Copy> AffineTransform<T, 3> {
    /// Convert to a 4x4 homogeneous matrix
    pub fn to_homogeneous(&self) -> Matrix4<T> {
        let mut m = Matrix4::identity();
        m.fixed_view_mut::<3, 3>(0, 0).copy_from(&self.linear);
        m.fixed_view_mut::<3, 1>(0, 3).copy_from(&self.translation);
        m
    }

    /// Convert to nalgebra's homogeneous 3D affine transform
    pub fn to_affine(&self) -> Affine3<T> {
        Affine3::from_matrix_unchecked(self.to_homogeneous())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use nalgebra::{Matrix2, Point3, Rotation2, Rotation3, Vector2, Vector3};
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn test_identity() {
        let xf = AffineTransform::<f64, 3>::identity();
        let p = Vector3::new(1.0, 2.0, 3.0);
        assert_eq!(xf.transform_point(&p), p);
        assert_eq!(xf, AffineTransform::default());
    }

    #[test]
    fn test_point_and_vector() {
        let xf = AffineTransform::new(Matrix2::new(2.0, 0.0, 0.0, 3.0), Vector2::new(1.0, -1.0));
        assert_relative_eq!(xf.transform_point(&Vector2::new(1.0, 1.0)), Vector2::new(3.0, 2.0));
        assert_relative_eq!(xf.transform_vector(&Vector2::new(1.0, 1.0)), Vector2::new(2.0, 3.0));
    }

    #[test]
    fn test_composition_order() {
        let rotate = AffineTransform::from_rotation(Rotation2::new(FRAC_PI_2));
        let shift = AffineTransform::from_translation(Vector2::new(10.0, 0.0));
        let p = Vector2::new(1.0, 0.0);

        // Rotate first, then shift
        let combined = rotate.then(&shift);
        assert_relative_eq!(combined.transform_point(&p), Vector2::new(10.0, 1.0), epsilon = 1e-12);
        assert_relative_eq!(
            combined.transform_point(&p),
            shift.transform_point(&rotate.transform_point(&p)),
            epsilon = 1e-12
        );
        assert_eq!(combined, shift * rotate);
    }

    #[test]
    fn test_inverse_roundtrip() {
        let xf = AffineTransform::new(
            Rotation3::from_euler_angles(0.3, -0.2, 1.1).into_inner() * 2.5,
            Vector3::new(4.0, -2.0, 0.5),
        );
        let inverse = xf.try_inverse().expect("transform is invertible");
        let p = Vector3::new(0.7, 8.0, -3.0);

        assert!(xf.is_invertible());
        assert_relative_eq!(inverse.transform_point(&xf.transform_point(&p)), p, epsilon = 1e-12);
        assert_relative_eq!((xf * inverse).linear, SMatrix::<f64, 3, 3>::identity(), epsilon = 1e-12);
    }

    #[test]
    fn test_singular_has_no_inverse() {
        let flatten = AffineTransform::from_scale(Vector3::new(1.0, 0.0, 1.0));
        assert!(flatten.try_inverse().is_none());
        assert!(!flatten.is_invertible());
    }

    #[test]
    fn test_matches_nalgebra_affine() {
        let xf = AffineTransform::new(
            Rotation3::from_euler_angles(0.1, 0.2, 0.3).into_inner(),
            Vector3::new(1.0, 2.0, 3.0),
        );
        let p = Vector3::new(-1.0, 0.5, 2.0);
        let expected = xf.to_affine().transform_point(&Point3::from(p));
        assert_relative_eq!(xf.transform_point(&p), expected.coords, epsilon = 1e-12);
    }
}
