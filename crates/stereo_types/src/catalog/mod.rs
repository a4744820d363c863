//! Dimensional type catalog
//!
//! Every concrete alias ([`aliases`]) binds one generic construct to a
//! scalar type and a dimension. The [`Specialization`] trait reads those
//! parameters back from the resolved type, so the runtime table
//! [`ALIASES`] and the compile-time checks never depend on hand-typed
//! metadata.

use std::fmt;

use nalgebra::{RealField, SMatrix, UnitQuaternion};
use serde::{Deserialize, Serialize};

use crate::foundation::scalar::{ScalarKind, ScalarTag};
use crate::geometry::{
    AffineBox, AffineTransform, Capsule, Cylinder, Dilated, Frustum, OrientedBox, Ray, Rect, Simplex, Sphere,
};

pub mod aliases;
pub mod manifest;
pub mod naming;
mod validate;

pub use aliases::ALIASES;
pub use manifest::{AliasManifest, ManifestDiff, ManifestEntry};
pub use validate::{required_specializations, Catalog, CatalogError};

/// Family of generic construct an alias specializes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum Category {
    /// Fixed-size column vector
    Vector,
    /// Axis-aligned interval, rectangle or box
    Range,
    /// Box with a rigid orientation
    OrientedBox,
    /// Box under an arbitrary affine map
    AffineBox,
    /// Unit quaternion rotation
    Quaternion,
    /// Linear map plus translation
    AffineTransform,
    /// Square matrix
    Matrix,
    /// Origin plus unit direction
    Ray,
    /// Circle or sphere
    Sphere,
    /// Swept disc with flat ends (a thick segment in 2D)
    Cylinder,
    /// Swept ball with round ends
    Capsule,
    /// Rectangle dilated by a radius
    RoundedRect,
    /// View volume over a 2D range
    Frustum,
    /// Triangle, tetrahedron and higher analogues
    Simplex,
}

impl Category {
    /// Every category, in catalog order
    pub const ALL: [Self; 14] = [
        Self::Vector,
        Self::Range,
        Self::OrientedBox,
        Self::AffineBox,
        Self::Quaternion,
        Self::AffineTransform,
        Self::Matrix,
        Self::Ray,
        Self::Sphere,
        Self::Cylinder,
        Self::Capsule,
        Self::RoundedRect,
        Self::Frustum,
        Self::Simplex,
    ];

    /// Compile-time equality, usable in `const` assertions
    pub const fn const_eq(self, other: Self) -> bool {
        self as u8 == other as u8
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Vector => "vector",
            Self::Range => "range",
            Self::OrientedBox => "oriented box",
            Self::AffineBox => "affine box",
            Self::Quaternion => "quaternion",
            Self::AffineTransform => "affine transform",
            Self::Matrix => "matrix",
            Self::Ray => "ray",
            Self::Sphere => "sphere",
            Self::Cylinder => "cylinder",
            Self::Capsule => "capsule",
            Self::RoundedRect => "rounded rect",
            Self::Frustum => "frustum",
            Self::Simplex => "simplex",
        };
        f.write_str(name)
    }
}

/// What a fully specialized type is: category, scalar and dimension
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Signature {
    /// Construct family
    pub category: Category,
    /// Element type
    pub scalar: ScalarKind,
    /// Dimension, `None` for dimensionless constructs
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dim: Option<usize>,
}

impl Signature {
    /// Create a signature
    pub const fn new(category: Category, scalar: ScalarKind, dim: Option<usize>) -> Self {
        Self { category, scalar, dim }
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.dim {
            Some(dim) => write!(f, "{dim}D {} of {}", self.category, self.scalar),
            None => write!(f, "{} of {}", self.category, self.scalar),
        }
    }
}

/// A generic construct with every parameter bound
pub trait Specialization {
    /// Element type
    type Scalar: ScalarTag;
    /// Construct family
    const CATEGORY: Category;
    /// Dimension, `None` for dimensionless constructs
    const DIM: Option<usize>;
}

impl<T: ScalarTag, const R: usize, const C: usize> Specialization for SMatrix<T, R, C> {
    type Scalar = T;
    const CATEGORY: Category = if C == 1 { Category::Vector } else { Category::Matrix };
    const DIM: Option<usize> = Some(R);
}

impl<T: ScalarTag + RealField> Specialization for UnitQuaternion<T> {
    type Scalar = T;
    const CATEGORY: Category = Category::Quaternion;
    const DIM: Option<usize> = None;
}

impl<T: ScalarTag, const D: usize> Specialization for Rect<T, D> {
    type Scalar = T;
    const CATEGORY: Category = Category::Range;
    const DIM: Option<usize> = Some(D);
}

macro_rules! specialization {
    ($($ty:ident => $category:ident),* $(,)?) => {
        $(
            impl<T: ScalarTag + RealField, const D: usize> Specialization for $ty<T, D> {
                type Scalar = T;
                const CATEGORY: Category = Category::$category;
                const DIM: Option<usize> = Some(D);
            }
        )*
    };
}

// Float-only constructs
specialization! {
    OrientedBox => OrientedBox,
    AffineBox => AffineBox,
    AffineTransform => AffineTransform,
    Ray => Ray,
    Sphere => Sphere,
    Cylinder => Cylinder,
    Capsule => Capsule,
    Simplex => Simplex,
}

impl<T: ScalarTag + RealField, const D: usize> Specialization for Dilated<Rect<T, D>> {
    type Scalar = T;
    const CATEGORY: Category = Category::RoundedRect;
    const DIM: Option<usize> = Some(D);
}

impl<T: ScalarTag + RealField> Specialization for Frustum<Rect<T, 2>> {
    type Scalar = T;
    const CATEGORY: Category = Category::Frustum;
    const DIM: Option<usize> = Some(3);
}

/// Whether `T` has the scalar and dimension an alias name declares
pub const fn declares<T: Specialization>(scalar: ScalarKind, dim: Option<usize>) -> bool {
    let dim_matches = match (T::DIM, dim) {
        (Some(actual), Some(declared)) => actual == declared,
        (None, None) => true,
        _ => false,
    };
    <T::Scalar as ScalarTag>::KIND.const_eq(scalar) && dim_matches
}

/// One row of the alias table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AliasEntry {
    /// Exported alias name
    pub name: &'static str,
    /// Construct family
    pub category: Category,
    /// Element type
    pub scalar: ScalarKind,
    /// Dimension, `None` for dimensionless constructs
    pub dim: Option<usize>,
}

impl AliasEntry {
    /// Describe the alias `name` resolving to `T`
    pub const fn of<T: Specialization>(name: &'static str) -> Self {
        Self {
            name,
            category: T::CATEGORY,
            scalar: <T::Scalar as ScalarTag>::KIND,
            dim: T::DIM,
        }
    }

    /// Category, scalar and dimension of the resolved type
    pub const fn signature(&self) -> Signature {
        Signature::new(self.category, self.scalar, self.dim)
    }
}

impl fmt::Display for AliasEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {}", self.name, self.signature())
    }
}
