//! Axis-aligned ranges
//!
//! [`Rect`] is an N-dimensional interval: a range in 1D, a rectangle in 2D,
//! a box in 3D. Unlike the other shapes it works over integer scalars too,
//! so pixel and voxel ranges share the same type as world-space bounds.

use nalgebra::{RealField, SVector, Scalar};
use num_traits::{CheckedMul, CheckedSub, One};
use serde::{Deserialize, Deserializer, Serialize};

use super::shape::{Region, Sdf, Shape};
use super::{half, Ray};

/// Axis-aligned range with inclusive corners `lo` and `hi`
///
/// Corners are kept ordered: `lo[i] <= hi[i]` on every axis. Deserialized
/// corners are reordered the same way [`Rect::new`] orders them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Rect<T: Scalar, const D: usize> {
    lo: SVector<T, D>,
    hi: SVector<T, D>,
}

#[derive(Deserialize)]
#[serde(rename = "Rect")]
struct Corners<T: Scalar, const D: usize> {
    lo: SVector<T, D>,
    hi: SVector<T, D>,
}

impl<'de, T, const D: usize> Deserialize<'de> for Rect<T, D>
where
    T: Scalar + Copy + PartialOrd + Deserialize<'de>,
{
    fn deserialize<De: Deserializer<'de>>(deserializer: De) -> Result<Self, De::Error> {
        let Corners { lo, hi } = Corners::deserialize(deserializer)?;
        Ok(Self::new(lo, hi))
    }
}

fn min_of<T: PartialOrd>(a: T, b: T) -> T {
    if b < a { b } else { a }
}

fn max_of<T: PartialOrd>(a: T, b: T) -> T {
    if b > a { b } else { a }
}

impl<T: Scalar + Copy + PartialOrd, const D: usize> Rect<T, D> {
    /// Create a range spanning two corners, in any order
    pub fn new(a: SVector<T, D>, b: SVector<T, D>) -> Self {
        Self {
            lo: a.zip_map(&b, min_of),
            hi: a.zip_map(&b, max_of),
        }
    }

    /// Create a zero-size range at a single point
    pub const fn from_point(point: SVector<T, D>) -> Self {
        Self { lo: point, hi: point }
    }

    /// Minimum corner
    pub const fn lo(&self) -> &SVector<T, D> {
        &self.lo
    }

    /// Maximum corner
    pub const fn hi(&self) -> &SVector<T, D> {
        &self.hi
    }

    /// Check if this range contains a point (boundary inclusive)
    pub fn contains(&self, point: &SVector<T, D>) -> bool {
        (0..D).all(|i| self.lo[i] <= point[i] && point[i] <= self.hi[i])
    }

    /// Check if another range lies entirely inside this one
    pub fn contains_rect(&self, other: &Self) -> bool {
        self.contains(&other.lo) && self.contains(&other.hi)
    }

    /// Check if this range overlaps another (touching counts)
    pub fn intersects(&self, other: &Self) -> bool {
        (0..D).all(|i| self.lo[i] <= other.hi[i] && other.lo[i] <= self.hi[i])
    }

    /// Smallest range enclosing both
    pub fn union(&self, other: &Self) -> Self {
        Self {
            lo: self.lo.zip_map(&other.lo, min_of),
            hi: self.hi.zip_map(&other.hi, max_of),
        }
    }

    /// Overlap of both ranges, `None` if they are disjoint
    pub fn intersection(&self, other: &Self) -> Option<Self> {
        let lo = self.lo.zip_map(&other.lo, max_of);
        let hi = self.hi.zip_map(&other.hi, min_of);
        (0..D).all(|i| lo[i] <= hi[i]).then_some(Self { lo, hi })
    }

    /// Grow the range just enough to include a point
    pub fn extend_to(&self, point: &SVector<T, D>) -> Self {
        Self {
            lo: self.lo.zip_map(point, min_of),
            hi: self.hi.zip_map(point, max_of),
        }
    }
}

impl<T: Scalar + Copy + PartialOrd + CheckedSub + CheckedMul + One, const D: usize> Rect<T, D> {
    /// Side lengths along each axis, `None` if a side overflows `T`
    ///
    /// `Range1i` spanning `i32::MIN..=i32::MAX` has no `i32` length.
    pub fn checked_dimensions(&self) -> Option<SVector<T, D>> {
        let mut sides = self.lo;
        for i in 0..D {
            sides[i] = self.hi[i].checked_sub(&self.lo[i])?;
        }
        Some(sides)
    }

    /// Length, area or volume, `None` if it overflows `T`
    pub fn checked_volume(&self) -> Option<T> {
        self.checked_dimensions()?
            .iter()
            .try_fold(T::one(), |acc, side| acc.checked_mul(side))
    }
}

impl<T: RealField + Copy, const D: usize> Rect<T, D> {
    /// Side lengths along each axis
    pub fn dimensions(&self) -> SVector<T, D> {
        self.hi - self.lo
    }

    /// Length, area or volume depending on dimension
    pub fn volume(&self) -> T {
        self.dimensions().iter().fold(T::one(), |acc, &side| acc * side)
    }

    /// Create a range centered at a point with given half-size
    pub fn from_center_extents(center: SVector<T, D>, extents: SVector<T, D>) -> Self {
        Self::new(center - extents, center + extents)
    }

    /// Get the center of the range
    pub fn center(&self) -> SVector<T, D> {
        (self.lo + self.hi) * half::<T>()
    }

    /// Get the extents (half-size) of the range
    pub fn extents(&self) -> SVector<T, D> {
        (self.hi - self.lo) * half::<T>()
    }

    /// Grow (or shrink, for negative amounts) every side by `amount`
    pub fn dilated(&self, amount: T) -> Self {
        let pad = SVector::<T, D>::repeat(amount);
        Self::new(self.lo - pad, self.hi + pad)
    }

    /// Clip a ray against this range using the slab method
    ///
    /// Returns the parametric interval `(t_enter, t_exit)` along the ray
    /// that lies inside the range, with `t_enter` clamped to zero when the
    /// origin is already inside. `None` if the ray misses.
    pub fn clip_ray(&self, ray: &Ray<T, D>) -> Option<(T, T)> {
        let mut t_enter = T::zero();
        let mut t_exit: Option<T> = None;

        for i in 0..D {
            let origin = ray.origin[i];
            let dir = ray.direction[i];

            if dir == T::zero() {
                // Parallel to this slab: must already be between its planes
                if origin < self.lo[i] || origin > self.hi[i] {
                    return None;
                }
                continue;
            }

            let inv = T::one() / dir;
            let t1 = (self.lo[i] - origin) * inv;
            let t2 = (self.hi[i] - origin) * inv;
            t_enter = t_enter.max(t1.min(t2));
            let far = t1.max(t2);
            t_exit = Some(t_exit.map_or(far, |t| t.min(far)));
        }

        match t_exit {
            Some(t_exit) if t_exit >= t_enter => Some((t_enter, t_exit)),
            Some(_) => None,
            None => Some((t_enter, t_enter)),
        }
    }
}

impl<T: RealField + Copy, const D: usize> Shape for Rect<T, D> {
    type Scalar = T;
}

impl<T: RealField + Copy, const D: usize> Region<D> for Rect<T, D> {
    fn contains(&self, point: &SVector<T, D>) -> bool {
        Self::contains(self, point)
    }

    fn bounds(&self) -> Self {
        *self
    }
}

impl<T: RealField + Copy, const D: usize> Sdf<D> for Rect<T, D> {
    fn sdf(&self, point: &SVector<T, D>) -> T {
        let q = (point - self.center()).map(|x| x.abs()) - self.extents();
        let outside = q.map(|x| x.max(T::zero())).norm();
        let inside = q
            .iter()
            .copied()
            .reduce(|a, b| a.max(b))
            .unwrap_or_else(T::zero)
            .min(T::zero());
        outside + inside
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use nalgebra::{Vector1, Vector2, Vector3};

    #[test]
    fn test_new_orders_corners() {
        let r = Rect::new(Vector2::new(3, -1), Vector2::new(1, 4));
        assert_eq!(*r.lo(), Vector2::new(1, -1));
        assert_eq!(*r.hi(), Vector2::new(3, 4));
    }

    #[test]
    fn test_integer_range_queries() {
        let r = Rect::new(Vector2::new(0u32, 0), Vector2::new(10, 5));
        assert!(r.contains(&Vector2::new(10, 5)));
        assert!(!r.contains(&Vector2::new(11, 5)));
        assert_eq!(r.checked_dimensions(), Some(Vector2::new(10, 5)));
        assert_eq!(r.checked_volume(), Some(50));
    }

    #[test]
    fn test_integer_extents_overflow() {
        let full = Rect::new(Vector1::new(i32::MIN), Vector1::new(i32::MAX));
        assert!(full.contains(&Vector1::new(0)));
        assert_eq!(full.checked_dimensions(), None);
        assert_eq!(full.checked_volume(), None);

        let wide = Rect::new(Vector2::new(0u64, 0), Vector2::new(u64::MAX, 2));
        assert_eq!(wide.checked_dimensions(), Some(Vector2::new(u64::MAX, 2)));
        assert_eq!(wide.checked_volume(), None);

        let tile = Rect::new(Vector2::new(0u8, 0), Vector2::new(15, 15));
        assert_eq!(tile.checked_volume(), Some(225));
        let page = Rect::new(Vector2::new(0u8, 0), Vector2::new(16, 16));
        assert_eq!(page.checked_volume(), None);
    }

    #[test]
    fn test_deserialize_orders_corners() {
        #[derive(serde::Serialize)]
        struct Raw {
            lo: Vector2<i32>,
            hi: Vector2<i32>,
        }

        let text = ron::to_string(&Raw {
            lo: Vector2::new(3, -1),
            hi: Vector2::new(1, 4),
        })
        .expect("serializable");
        let r: Rect<i32, 2> = ron::from_str(&text).expect("valid rect");
        assert_eq!(*r.lo(), Vector2::new(1, -1));
        assert_eq!(*r.hi(), Vector2::new(3, 4));

        let back: Rect<i32, 2> = ron::from_str(&ron::to_string(&r).expect("serializable")).expect("valid rect");
        assert_eq!(back, r);
    }

    #[test]
    fn test_union_and_intersection() {
        let a = Rect::new(Vector2::new(0i32, 0), Vector2::new(4, 4));
        let b = Rect::new(Vector2::new(2, 2), Vector2::new(6, 6));
        let c = Rect::new(Vector2::new(8, 8), Vector2::new(9, 9));

        assert_eq!(a.union(&b), Rect::new(Vector2::new(0, 0), Vector2::new(6, 6)));
        assert_eq!(a.intersection(&b), Some(Rect::new(Vector2::new(2, 2), Vector2::new(4, 4))));
        assert_eq!(a.intersection(&c), None);
        assert!(a.intersects(&b));
        assert!(!a.intersects(&c));
        assert!(a.union(&c).contains_rect(&b));
    }

    #[test]
    fn test_extend_to_point() {
        let r = Rect::from_point(Vector1::new(2.0f32)).extend_to(&Vector1::new(-1.0));
        assert_eq!(*r.lo(), Vector1::new(-1.0));
        assert_eq!(*r.hi(), Vector1::new(2.0));
        assert_relative_eq!(r.volume(), 3.0);
    }

    #[test]
    fn test_center_and_extents() {
        let r = Rect::from_center_extents(Vector3::new(1.0, 2.0, 3.0), Vector3::new(0.5, 1.0, 1.5));
        assert_relative_eq!(r.center(), Vector3::new(1.0, 2.0, 3.0));
        assert_relative_eq!(r.extents(), Vector3::new(0.5, 1.0, 1.5));
        assert_relative_eq!(r.volume(), 6.0);
    }

    #[test]
    fn test_clip_ray_through_box() {
        let r = Rect::new(Vector3::new(-1.0, -1.0, -1.0), Vector3::new(1.0, 1.0, 1.0));
        let ray = Ray::new(Vector3::new(-5.0, 0.0, 0.0), Vector3::new(1.0, 0.0, 0.0));

        let (t0, t1) = r.clip_ray(&ray).expect("ray should hit");
        assert_relative_eq!(t0, 4.0);
        assert_relative_eq!(t1, 6.0);

        let miss = Ray::new(Vector3::new(-5.0, 3.0, 0.0), Vector3::new(1.0, 0.0, 0.0));
        assert!(r.clip_ray(&miss).is_none());

        let behind = Ray::new(Vector3::new(5.0, 0.0, 0.0), Vector3::new(1.0, 0.0, 0.0));
        assert!(r.clip_ray(&behind).is_none());
    }

    #[test]
    fn test_clip_ray_from_inside() {
        let r = Rect::new(Vector2::new(0.0, 0.0), Vector2::new(2.0, 2.0));
        let ray = Ray::new(Vector2::new(1.0, 1.0), Vector2::new(0.0, 1.0));

        let (t0, t1) = r.clip_ray(&ray).expect("origin is inside");
        assert_relative_eq!(t0, 0.0);
        assert_relative_eq!(t1, 1.0);
    }

    #[test]
    fn test_sdf_inside_and_outside() {
        let r = Rect::new(Vector2::new(-1.0, -1.0), Vector2::new(1.0, 1.0));
        assert_relative_eq!(r.sdf(&Vector2::new(0.0, 0.0)), -1.0);
        assert_relative_eq!(r.sdf(&Vector2::new(3.0, 0.0)), 2.0);
        assert_relative_eq!(r.sdf(&Vector2::new(4.0, 5.0)), 5.0);
        assert_relative_eq!(r.sdf(&Vector2::new(1.0, 0.5)), 0.0);
    }

    #[test]
    fn test_dilated_bounds() {
        let r = Rect::new(Vector2::new(0.0, 0.0), Vector2::new(1.0, 1.0)).dilated(0.5);
        assert_relative_eq!(*r.lo(), Vector2::new(-0.5, -0.5));
        assert_relative_eq!(*r.hi(), Vector2::new(1.5, 1.5));
    }
}
