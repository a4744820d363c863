//! Scalar kinds used by the type catalog
//!
//! Each concrete scalar type the catalog specializes over has a
//! [`ScalarKind`] and a short suffix that alias names carry.

use std::fmt;

use nalgebra::Scalar;
use serde::{Deserialize, Serialize};

/// Numeric element type of a catalogued construct
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum ScalarKind {
    /// 32-bit float, no suffix
    F32,
    /// 64-bit float, suffix `d`
    F64,
    /// 32-bit signed integer, suffix `i`
    I32,
    /// 32-bit unsigned integer, suffix `ui`
    U32,
    /// 8-bit unsigned integer, suffix `ub`
    U8,
    /// 64-bit unsigned integer, suffix `ul`
    U64,
}

impl ScalarKind {
    /// Every scalar kind, in catalog order
    pub const ALL: [Self; 6] = [Self::F32, Self::F64, Self::I32, Self::U32, Self::U8, Self::U64];

    /// Floating-point kinds only
    pub const FLOATS: [Self; 2] = [Self::F32, Self::F64];

    /// Suffix appended to alias names for this scalar
    pub const fn suffix(self) -> &'static str {
        match self {
            Self::F32 => "",
            Self::F64 => "d",
            Self::I32 => "i",
            Self::U32 => "ui",
            Self::U8 => "ub",
            Self::U64 => "ul",
        }
    }

    /// Parse an alias-name suffix back into a scalar kind
    pub fn from_suffix(suffix: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.suffix() == suffix)
    }

    /// Rust primitive name (`f32`, `u8`, ...)
    pub const fn type_name(self) -> &'static str {
        match self {
            Self::F32 => "f32",
            Self::F64 => "f64",
            Self::I32 => "i32",
            Self::U32 => "u32",
            Self::U8 => "u8",
            Self::U64 => "u64",
        }
    }

    /// Size of one element in bytes
    pub const fn size_in_bytes(self) -> usize {
        match self {
            Self::U8 => 1,
            Self::F32 | Self::I32 | Self::U32 => 4,
            Self::F64 | Self::U64 => 8,
        }
    }

    /// Whether this is a floating-point kind
    pub const fn is_float(self) -> bool {
        matches!(self, Self::F32 | Self::F64)
    }

    /// Compile-time equality, usable in `const` assertions
    pub const fn const_eq(self, other: Self) -> bool {
        self as u8 == other as u8
    }
}

impl fmt::Display for ScalarKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.type_name())
    }
}

/// Links a primitive scalar type to its [`ScalarKind`]
pub trait ScalarTag: Scalar + Copy {
    /// The kind this type is catalogued as
    const KIND: ScalarKind;
}

macro_rules! scalar_tag {
    ($($ty:ty => $kind:ident),* $(,)?) => {
        $(
            impl ScalarTag for $ty {
                const KIND: ScalarKind = ScalarKind::$kind;
            }
        )*
    };
}

scalar_tag! {
    f32 => F32,
    f64 => F64,
    i32 => I32,
    u32 => U32,
    u8 => U8,
    u64 => U64,
}
