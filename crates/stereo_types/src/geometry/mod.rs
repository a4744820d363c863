//! Generic geometric constructs
//!
//! The shapes the type catalog specializes that nalgebra does not provide
//! itself. Everything here is generic over a scalar `T` and a dimension
//! `const D: usize`, stores coordinates as [`nalgebra::SVector`], and is
//! plain `Copy` data.
//!
//! # Module Organization
//!
//! - [`shape`] - Traits shared by the shapes (containment, bounds, distance)
//! - [`rect`] - Axis-aligned ranges, integer-capable
//! - [`ray`] - Rays and ray hits
//! - [`sphere`] - Spheres and circles
//! - [`swept`] - Cylinders (segments in 2D) and capsules
//! - [`transform`] - Affine transforms (linear map + translation)
//! - [`boxes`] - Oriented and affine-transformed boxes
//! - [`dilated`] - Shapes grown by a radius (rounded rectangles)
//! - [`frustum`] - View volumes over a 2D cross-section
//! - [`simplex`] - Triangles, tetrahedra and their higher analogues

pub mod shape;
pub mod rect;
pub mod ray;
pub mod sphere;
pub mod swept;
pub mod transform;
pub mod boxes;
pub mod dilated;
pub mod frustum;
pub mod simplex;

// Re-export commonly used types
pub use shape::{Region, Sdf, Shape};
pub use rect::Rect;
pub use ray::{Ray, RayHit};
pub use sphere::{Circle, Sphere};
pub use swept::{Capsule, Cylinder};
pub use transform::AffineTransform;
pub use boxes::{AffineBox, OrientedBox};
pub use dilated::Dilated;
pub use frustum::Frustum;
pub use simplex::Simplex;

use nalgebra::RealField;

/// One half in the scalar type
pub(crate) fn half<T: RealField>() -> T {
    nalgebra::convert::<f64, T>(0.5)
}
