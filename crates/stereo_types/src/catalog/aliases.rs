//! Concrete aliases
//!
//! Scalar suffix: none = `f32`, `d` = `f64`, `i` = `i32`, `ui` = `u32`,
//! `ub` = `u8`, `ul` = `u64`. The numeral is the dimension. Every alias is
//! checked at compile time against the scalar and dimension its row
//! declares, and the rows are collected into [`ALIASES`].
//!
//! A row whose declared scalar or dimension disagrees with its type does not
//! build:
//!
//! ```compile_fail
//! use stereo_types::catalog::declares;
//! use stereo_types::{ScalarKind, Vec3};
//!
//! static_assertions::const_assert!(declares::<Vec3>(ScalarKind::F64, Some(3)));
//! ```
//!
//! while the matching declaration does:
//!
//! ```
//! use stereo_types::catalog::declares;
//! use stereo_types::{ScalarKind, Vec3};
//!
//! static_assertions::const_assert!(declares::<Vec3>(ScalarKind::F32, Some(3)));
//! ```
//!
//! Shapes that need square roots only exist over floats, so there is no
//! integer sphere to alias
//!
//! ```compile_fail
//! fn integer_sphere(_: stereo_types::geometry::Sphere<i32, 3>) {}
//! ```
//!
//! nor an integer ray to catalogue:
//!
//! ```compile_fail
//! use stereo_types::geometry::Ray;
//! use stereo_types::AliasEntry;
//!
//! const RAY3I: AliasEntry = AliasEntry::of::<Ray<i32, 3>>("Ray3i");
//! ```

use nalgebra::{Matrix2, Matrix3, Matrix4, UnitQuaternion, Vector2, Vector3, Vector4};

use super::{declares, AliasEntry};
use crate::foundation::scalar::ScalarKind;
use crate::geometry::{
    AffineBox, AffineTransform, Capsule, Circle, Cylinder, Dilated, Frustum, OrientedBox, Ray, Rect, Simplex, Sphere,
};

macro_rules! catalog {
    ($($(#[$meta:meta])* $name:ident = $ty:ty => ($scalar:ident, $dim:expr);)*) => {
        $(
            $(#[$meta])*
            pub type $name = $ty;
            static_assertions::const_assert!(declares::<$name>(ScalarKind::$scalar, $dim));
        )*

        /// Every alias in this module, in declaration order
        pub static ALIASES: &[AliasEntry] = &[$(AliasEntry::of::<$name>(stringify!($name))),*];
    };
}

/// Size and index type shared with GPU buffers
pub type GpuSize = u32;

catalog! {
    // Vectors

    /// 2D `f32` vector
    Vec2 = Vector2<f32> => (F32, Some(2));
    /// 3D `f32` vector
    Vec3 = Vector3<f32> => (F32, Some(3));
    /// 4D `f32` vector
    Vec4 = Vector4<f32> => (F32, Some(4));
    /// 2D `f64` vector
    Vec2d = Vector2<f64> => (F64, Some(2));
    /// 3D `f64` vector
    Vec3d = Vector3<f64> => (F64, Some(3));
    /// 4D `f64` vector
    Vec4d = Vector4<f64> => (F64, Some(4));
    /// 2D `i32` vector
    Vec2i = Vector2<i32> => (I32, Some(2));
    /// 3D `i32` vector
    Vec3i = Vector3<i32> => (I32, Some(3));
    /// 4D `i32` vector
    Vec4i = Vector4<i32> => (I32, Some(4));
    /// 2D `u32` vector
    Vec2ui = Vector2<u32> => (U32, Some(2));
    /// 3D `u32` vector
    Vec3ui = Vector3<u32> => (U32, Some(3));
    /// 4D `u32` vector
    Vec4ui = Vector4<u32> => (U32, Some(4));
    /// 2D `u8` vector
    Vec2ub = Vector2<u8> => (U8, Some(2));
    /// 3D `u8` vector, e.g. an RGB pixel
    Vec3ub = Vector3<u8> => (U8, Some(3));
    /// 4D `u8` vector, e.g. an RGBA pixel
    Vec4ub = Vector4<u8> => (U8, Some(4));
    /// 2D `u64` vector
    Vec2ul = Vector2<u64> => (U64, Some(2));
    /// 3D `u64` vector
    Vec3ul = Vector3<u64> => (U64, Some(3));
    /// 4D `u64` vector
    Vec4ul = Vector4<u64> => (U64, Some(4));

    // Axis-aligned ranges

    /// 1D `f32` interval
    Range = Rect<f32, 1> => (F32, Some(1));
    /// 2D `f32` rectangle
    Range2 = Rect<f32, 2> => (F32, Some(2));
    /// 3D `f32` box
    Range3 = Rect<f32, 3> => (F32, Some(3));
    /// 4D `f32` box
    Range4 = Rect<f32, 4> => (F32, Some(4));
    /// 1D `f64` interval
    Ranged = Rect<f64, 1> => (F64, Some(1));
    /// 2D `f64` rectangle
    Range2d = Rect<f64, 2> => (F64, Some(2));
    /// 3D `f64` box
    Range3d = Rect<f64, 3> => (F64, Some(3));
    /// 4D `f64` box
    Range4d = Rect<f64, 4> => (F64, Some(4));
    /// 1D `i32` interval
    Range1i = Rect<i32, 1> => (I32, Some(1));
    /// 2D `i32` rectangle
    Range2i = Rect<i32, 2> => (I32, Some(2));
    /// 3D `i32` box
    Range3i = Rect<i32, 3> => (I32, Some(3));
    /// 4D `i32` box
    Range4i = Rect<i32, 4> => (I32, Some(4));
    /// 1D `u32` interval
    Range1ui = Rect<u32, 1> => (U32, Some(1));
    /// 2D `u32` rectangle
    Range2ui = Rect<u32, 2> => (U32, Some(2));
    /// 3D `u32` box
    Range3ui = Rect<u32, 3> => (U32, Some(3));
    /// 4D `u32` box
    Range4ui = Rect<u32, 4> => (U32, Some(4));
    /// 1D `u64` interval
    Range1ul = Rect<u64, 1> => (U64, Some(1));
    /// 2D `u64` rectangle
    Range2ul = Rect<u64, 2> => (U64, Some(2));
    /// 3D `u64` box
    Range3ul = Rect<u64, 3> => (U64, Some(3));
    /// 4D `u64` box
    Range4ul = Rect<u64, 4> => (U64, Some(4));

    // Boxes

    /// 2D `f32` oriented box
    Box2 = OrientedBox<f32, 2> => (F32, Some(2));
    /// 3D `f32` oriented box
    Box3 = OrientedBox<f32, 3> => (F32, Some(3));
    /// 2D `f64` oriented box
    Box2d = OrientedBox<f64, 2> => (F64, Some(2));
    /// 3D `f64` oriented box
    Box3d = OrientedBox<f64, 3> => (F64, Some(3));
    /// 2D `f32` affine-transformed box
    AffineBox2 = AffineBox<f32, 2> => (F32, Some(2));
    /// 3D `f32` affine-transformed box
    AffineBox3 = AffineBox<f32, 3> => (F32, Some(3));
    /// 2D `f64` affine-transformed box
    AffineBox2d = AffineBox<f64, 2> => (F64, Some(2));
    /// 3D `f64` affine-transformed box
    AffineBox3d = AffineBox<f64, 3> => (F64, Some(3));

    // Rotations, transforms and matrices

    /// `f32` rotation quaternion
    Quat = UnitQuaternion<f32> => (F32, None);
    /// `f64` rotation quaternion
    Quatd = UnitQuaternion<f64> => (F64, None);
    /// 2D `f32` affine transform
    Xf2 = AffineTransform<f32, 2> => (F32, Some(2));
    /// 3D `f32` affine transform
    Xf3 = AffineTransform<f32, 3> => (F32, Some(3));
    /// 2D `f64` affine transform
    Xf2d = AffineTransform<f64, 2> => (F64, Some(2));
    /// 3D `f64` affine transform
    Xf3d = AffineTransform<f64, 3> => (F64, Some(3));
    /// 2x2 `f32` matrix
    Mat2 = Matrix2<f32> => (F32, Some(2));
    /// 3x3 `f32` matrix
    Mat3 = Matrix3<f32> => (F32, Some(3));
    /// 4x4 `f32` matrix
    Mat4 = Matrix4<f32> => (F32, Some(4));
    /// 2x2 `f64` matrix
    Mat2d = Matrix2<f64> => (F64, Some(2));
    /// 3x3 `f64` matrix
    Mat3d = Matrix3<f64> => (F64, Some(3));
    /// 4x4 `f64` matrix
    Mat4d = Matrix4<f64> => (F64, Some(4));

    // Rays

    /// 2D `f32` ray
    Ray2 = Ray<f32, 2> => (F32, Some(2));
    /// 3D `f32` ray
    Ray3 = Ray<f32, 3> => (F32, Some(3));
    /// 2D `f64` ray
    Ray2d = Ray<f64, 2> => (F64, Some(2));
    /// 3D `f64` ray
    Ray3d = Ray<f64, 3> => (F64, Some(3));

    // Primitive shapes

    /// `f32` circle
    Circle2 = Circle<f32> => (F32, Some(2));
    /// `f64` circle
    Circle2d = Circle<f64> => (F64, Some(2));
    /// `f32` sphere
    Sphere3 = Sphere<f32, 3> => (F32, Some(3));
    /// `f64` sphere
    Sphere3d = Sphere<f64, 3> => (F64, Some(3));
    /// `f32` thick line segment
    Seg2 = Cylinder<f32, 2> => (F32, Some(2));
    /// `f64` thick line segment
    Seg2d = Cylinder<f64, 2> => (F64, Some(2));
    /// `f32` cylinder
    Cyl3 = Cylinder<f32, 3> => (F32, Some(3));
    /// `f64` cylinder
    Cyl3d = Cylinder<f64, 3> => (F64, Some(3));
    /// 2D `f32` capsule
    Capsule2 = Capsule<f32, 2> => (F32, Some(2));
    /// 3D `f32` capsule
    Capsule3 = Capsule<f32, 3> => (F32, Some(3));
    /// 2D `f64` capsule
    Capsule2d = Capsule<f64, 2> => (F64, Some(2));
    /// 3D `f64` capsule
    Capsule3d = Capsule<f64, 3> => (F64, Some(3));
    /// `f32` rounded rectangle
    RoundRect2 = Dilated<Rect<f32, 2>> => (F32, Some(2));
    /// `f32` rounded box
    RoundRect3 = Dilated<Rect<f32, 3>> => (F32, Some(3));
    /// `f64` rounded rectangle
    RoundRect2d = Dilated<Rect<f64, 2>> => (F64, Some(2));
    /// `f64` rounded box
    RoundRect3d = Dilated<Rect<f64, 3>> => (F64, Some(3));
    /// `f32` view frustum over a rectangular image
    Frustum3 = Frustum<Rect<f32, 2>> => (F32, Some(3));
    /// `f64` view frustum over a rectangular image
    Frustum3d = Frustum<Rect<f64, 2>> => (F64, Some(3));
    /// `f32` triangle
    Tri = Simplex<f32, 2> => (F32, Some(2));
    /// `f64` triangle
    Trid = Simplex<f64, 2> => (F64, Some(2));
    /// `f32` tetrahedron
    Tet = Simplex<f32, 3> => (F32, Some(3));
    /// `f64` tetrahedron
    Tetd = Simplex<f64, 3> => (F64, Some(3));
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::mem::size_of;

    #[test]
    fn test_table_size() {
        assert_eq!(ALIASES.len(), 84);
    }

    #[test]
    fn test_layouts() {
        assert_eq!(size_of::<Vec3ub>(), 3);
        assert_eq!(size_of::<Vec4d>(), 32);
        assert_eq!(size_of::<Mat4>(), 64);
        assert_eq!(size_of::<Quat>(), 16);
        assert_eq!(size_of::<Range2ul>(), 32);
        assert_eq!(size_of::<GpuSize>(), 4);
    }

    #[test]
    fn test_first_and_last_rows() {
        assert_eq!(ALIASES[0].name, "Vec2");
        let last = ALIASES.last().expect("table is not empty");
        assert_eq!(last.name, "Tetd");
        assert_eq!(last.dim, Some(3));
    }
}
