//! Alias naming convention
//!
//! A name is a stem, an optional dimension numeral and a scalar suffix:
//! `Range` + `2` + `d` is a 2D `f64` range. Most stems require the numeral.
//! A few carry or constrain the dimension themselves:
//!
//! - `Circle` and `Seg` are always 2D, `Frustum` is always 3D
//! - `Tri` and `Tet` imply 2 and 3 and take no numeral
//! - `Quat` has no dimension
//! - `Range` defaults to 1D; 1D float ranges drop the numeral

use super::{Category, Signature};
use crate::foundation::scalar::ScalarKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Numeral {
    /// A numeral must follow the stem
    Required,
    /// A numeral must follow the stem and equal this
    Exactly(usize),
    /// The numeral may be omitted, meaning this dimension
    DefaultsTo(usize),
    /// No numeral; the stem itself carries the dimension
    Implied(Option<usize>),
}

struct Stem {
    text: &'static str,
    category: Category,
    numeral: Numeral,
}

const fn stem(text: &'static str, category: Category, numeral: Numeral) -> Stem {
    Stem { text, category, numeral }
}

const STEMS: &[Stem] = &[
    stem("Vec", Category::Vector, Numeral::Required),
    stem("Range", Category::Range, Numeral::DefaultsTo(1)),
    stem("Box", Category::OrientedBox, Numeral::Required),
    stem("AffineBox", Category::AffineBox, Numeral::Required),
    stem("Quat", Category::Quaternion, Numeral::Implied(None)),
    stem("Xf", Category::AffineTransform, Numeral::Required),
    stem("Mat", Category::Matrix, Numeral::Required),
    stem("Ray", Category::Ray, Numeral::Required),
    stem("Circle", Category::Sphere, Numeral::Exactly(2)),
    stem("Sphere", Category::Sphere, Numeral::Required),
    stem("Seg", Category::Cylinder, Numeral::Exactly(2)),
    stem("Cyl", Category::Cylinder, Numeral::Required),
    stem("Capsule", Category::Capsule, Numeral::Required),
    stem("RoundRect", Category::RoundedRect, Numeral::Required),
    stem("Frustum", Category::Frustum, Numeral::Exactly(3)),
    stem("Tri", Category::Simplex, Numeral::Implied(Some(2))),
    stem("Tet", Category::Simplex, Numeral::Implied(Some(3))),
    stem("Simplex", Category::Simplex, Numeral::Required),
];

/// Parse an alias name into the specialization it must resolve to
///
/// Returns `None` for names outside the convention, including spellings
/// that parse but are not the one [`encode`] produces (`Sphere2` for
/// `Circle2`, `Range1` for `Range`, `Vec03` for `Vec3`).
pub fn decode(name: &str) -> Option<Signature> {
    parse(name).filter(|&signature| encode_signature(signature).as_deref() == Some(name))
}

fn parse(name: &str) -> Option<Signature> {
    let stem = STEMS
        .iter()
        .filter(|s| name.starts_with(s.text))
        .max_by_key(|s| s.text.len())?;

    let rest = &name[stem.text.len()..];
    let digits_end = rest.find(|c: char| !c.is_ascii_digit()).unwrap_or(rest.len());
    let (digits, suffix) = rest.split_at(digits_end);
    let scalar = ScalarKind::from_suffix(suffix)?;
    let numeral = if digits.is_empty() {
        None
    } else {
        Some(digits.parse::<usize>().ok().filter(|&n| n > 0)?)
    };

    let dim = match (stem.numeral, numeral) {
        (Numeral::Required | Numeral::DefaultsTo(_), Some(n)) => Some(n),
        (Numeral::Exactly(expected), Some(n)) if n == expected => Some(n),
        (Numeral::DefaultsTo(default), None) => Some(default),
        (Numeral::Implied(implied), None) => implied,
        _ => return None,
    };

    Some(Signature::new(stem.category, scalar, dim))
}

/// The conventional name for a specialization
///
/// Stems that pin the dimension (`Circle`, `Tri`, ...) win over the general
/// stem of their category. Returns `None` if no stem can spell it, such as
/// a quaternion with a dimension.
pub fn encode(category: Category, scalar: ScalarKind, dim: Option<usize>) -> Option<String> {
    let candidates = || STEMS.iter().filter(move |s| s.category == category);

    let pinned = candidates().find_map(|s| match (s.numeral, dim) {
        (Numeral::Implied(implied), _) if implied == dim => Some((s, None)),
        (Numeral::Exactly(expected), Some(n)) if n == expected => Some((s, Some(n))),
        _ => None,
    });
    let (stem, numeral) = pinned.or_else(|| {
        candidates().find_map(|s| match (s.numeral, dim) {
            (Numeral::DefaultsTo(default), Some(n)) if n == default && scalar.is_float() => Some((s, None)),
            (Numeral::Required | Numeral::DefaultsTo(_), Some(n)) if n > 0 => Some((s, Some(n))),
            _ => None,
        })
    })?;

    let numeral = numeral.map(|n| n.to_string()).unwrap_or_default();
    Some(format!("{}{}{}", stem.text, numeral, scalar.suffix()))
}

/// [`encode`] for a signature
pub fn encode_signature(signature: Signature) -> Option<String> {
    encode(signature.category, signature.scalar, signature.dim)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sig(category: Category, scalar: ScalarKind, dim: Option<usize>) -> Signature {
        Signature::new(category, scalar, dim)
    }

    #[test]
    fn test_decode_regular_names() {
        assert_eq!(decode("Vec3ub"), Some(sig(Category::Vector, ScalarKind::U8, Some(3))));
        assert_eq!(decode("Range2d"), Some(sig(Category::Range, ScalarKind::F64, Some(2))));
        assert_eq!(decode("Mat4"), Some(sig(Category::Matrix, ScalarKind::F32, Some(4))));
        assert_eq!(decode("Range4ul"), Some(sig(Category::Range, ScalarKind::U64, Some(4))));
    }

    #[test]
    fn test_decode_irregular_names() {
        assert_eq!(decode("Quat"), Some(sig(Category::Quaternion, ScalarKind::F32, None)));
        assert_eq!(decode("Ranged"), Some(sig(Category::Range, ScalarKind::F64, Some(1))));
        assert_eq!(decode("Range1i"), Some(sig(Category::Range, ScalarKind::I32, Some(1))));
        assert_eq!(decode("Tetd"), Some(sig(Category::Simplex, ScalarKind::F64, Some(3))));
        assert_eq!(decode("Seg2d"), Some(sig(Category::Cylinder, ScalarKind::F64, Some(2))));
        assert_eq!(decode("Frustum3"), Some(sig(Category::Frustum, ScalarKind::F32, Some(3))));
    }

    #[test]
    fn test_longest_stem_wins() {
        assert_eq!(decode("AffineBox2"), Some(sig(Category::AffineBox, ScalarKind::F32, Some(2))));
        assert_eq!(decode("Box2"), Some(sig(Category::OrientedBox, ScalarKind::F32, Some(2))));
    }

    #[test]
    fn test_decode_rejects() {
        assert_eq!(decode("Vec"), None);
        assert_eq!(decode("Vec0"), None);
        assert_eq!(decode("Vec3x"), None);
        assert_eq!(decode("Quat4"), None);
        assert_eq!(decode("Circle3"), None);
        assert_eq!(decode("Tri2"), None);
        assert_eq!(decode("Matrix3"), None);
        assert_eq!(decode(""), None);
    }

    #[test]
    fn test_decode_rejects_alternate_spellings() {
        assert_eq!(parse("Sphere2"), Some(sig(Category::Sphere, ScalarKind::F32, Some(2))));
        assert_eq!(decode("Sphere2"), None);
        assert_eq!(decode("Seg2d"), Some(sig(Category::Cylinder, ScalarKind::F64, Some(2))));
        assert_eq!(decode("Cyl2d"), None);
        assert_eq!(decode("Range1"), None);
        assert_eq!(decode("Range1d"), None);
        assert_eq!(decode("Vec03"), None);
        assert_eq!(decode("Simplex2"), None);
        assert_eq!(decode("Range1ui"), Some(sig(Category::Range, ScalarKind::U32, Some(1))));
    }

    #[test]
    fn test_encode_prefers_pinned_stems() {
        assert_eq!(encode(Category::Sphere, ScalarKind::F32, Some(2)).as_deref(), Some("Circle2"));
        assert_eq!(encode(Category::Sphere, ScalarKind::F64, Some(3)).as_deref(), Some("Sphere3d"));
        assert_eq!(encode(Category::Cylinder, ScalarKind::F32, Some(2)).as_deref(), Some("Seg2"));
        assert_eq!(encode(Category::Cylinder, ScalarKind::F32, Some(3)).as_deref(), Some("Cyl3"));
        assert_eq!(encode(Category::Simplex, ScalarKind::F64, Some(2)).as_deref(), Some("Trid"));
        assert_eq!(encode(Category::Simplex, ScalarKind::F32, Some(4)).as_deref(), Some("Simplex4"));
    }

    #[test]
    fn test_encode_ranges() {
        assert_eq!(encode(Category::Range, ScalarKind::F32, Some(1)).as_deref(), Some("Range"));
        assert_eq!(encode(Category::Range, ScalarKind::F64, Some(1)).as_deref(), Some("Ranged"));
        assert_eq!(encode(Category::Range, ScalarKind::U32, Some(1)).as_deref(), Some("Range1ui"));
        assert_eq!(encode(Category::Range, ScalarKind::I32, Some(3)).as_deref(), Some("Range3i"));
    }

    #[test]
    fn test_encode_unspellable() {
        assert_eq!(encode(Category::Quaternion, ScalarKind::F32, Some(4)), None);
        assert_eq!(encode(Category::Frustum, ScalarKind::F32, Some(2)), None);
        assert_eq!(encode(Category::Vector, ScalarKind::F32, None), None);
    }

    #[test]
    fn test_new_entries_follow_convention() {
        for (name, signature) in [
            ("Sphere4", sig(Category::Sphere, ScalarKind::F32, Some(4))),
            ("Vec5ul", sig(Category::Vector, ScalarKind::U64, Some(5))),
            ("Range2ub", sig(Category::Range, ScalarKind::U8, Some(2))),
        ] {
            assert_eq!(encode_signature(signature).as_deref(), Some(name));
            assert_eq!(decode(name), Some(signature));
        }
    }
}
