//! # Stereo Types
//!
//! The shared geometric vocabulary for the stereo renderer: short, concrete
//! names for every (scalar, dimension) specialization of the generic math and
//! shape types the rest of the system works with.
//!
//! ## Naming
//!
//! - **Scalar suffix**: none = `f32`, `d` = `f64`, `i` = `i32`, `ui` = `u32`,
//!   `ub` = `u8`, `ul` = `u64`
//! - **Dimension numeral**: `Vec3` is 3D, `Range2d` is a 2D range of `f64`
//! - **Implied dimensions**: `Range`/`Ranged` are 1D, `Quat` has none,
//!   `Tri` is a 2-simplex and `Tet` a 3-simplex
//!
//! ## Quick Start
//!
//! ```rust
//! use stereo_types::prelude::*;
//!
//! let a = Vec3::new(1.0, 2.0, 3.0);
//! let bounds = Range3::new(Vec3::zeros(), Vec3::new(4.0, 4.0, 4.0));
//! assert!(bounds.contains(&a));
//!
//! let pixel = Vec3ub::new(255, 128, 0);
//! assert_eq!(pixel.len(), 3);
//! ```
//!
//! Every alias is checked at compile time against the scalar and dimension
//! its name declares, and [`catalog::ALIASES`] describes the whole table at
//! runtime for validation and manifest diffing.

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::many_single_char_names)]

pub mod foundation;
pub mod geometry;
pub mod catalog;
pub mod config;

pub use catalog::aliases::*;
pub use catalog::{AliasEntry, AliasManifest, Catalog, CatalogError, Category, Signature, Specialization};
pub use foundation::scalar::{ScalarKind, ScalarTag};

/// Common imports for catalog users
pub mod prelude {
    pub use crate::{
        catalog::aliases::*,
        catalog::{AliasEntry, Catalog, Category, Signature},
        foundation::scalar::ScalarKind,
        geometry::{Region, Sdf, Shape},
    };
}
