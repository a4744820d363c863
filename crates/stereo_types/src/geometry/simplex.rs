//! Simplices: triangles, tetrahedra and their analogues
//!
//! A `D`-simplex has `D + 1` vertices. It is stored as one base vertex plus
//! the `D` edge vectors leading from it to the others, which keeps the type
//! generic over `D` and makes barycentric coordinates a single solve.

use nalgebra::{Matrix2, Matrix3, RealField, SMatrix, SVector, Vector2, Vector3};
use serde::{Deserialize, Serialize};

use super::shape::{Region, Shape};
use super::{half, Rect};

/// `D + 1` points spanning a `D`-dimensional simplex
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Simplex<T: RealField, const D: usize> {
    /// Vertex zero
    pub base: SVector<T, D>,
    /// Column `i` is vertex `i + 1` minus vertex zero
    pub edges: SMatrix<T, D, D>,
}

impl<T: RealField + Copy, const D: usize> Simplex<T, D> {
    /// Create a simplex from a base vertex and its edge vectors
    pub const fn new(base: SVector<T, D>, edges: SMatrix<T, D, D>) -> Self {
        Self { base, edges }
    }

    /// Number of vertices, `D + 1`
    pub const fn vertex_count(&self) -> usize {
        D + 1
    }

    /// Vertex `index`, `None` past the last vertex
    pub fn vertex(&self, index: usize) -> Option<SVector<T, D>> {
        match index {
            0 => Some(self.base),
            i if i <= D => Some(self.base + self.edges.column(i - 1)),
            _ => None,
        }
    }

    /// Barycentric weights of vertices `1..=D` for a point
    ///
    /// The weight of vertex zero is one minus their sum. `None` if the
    /// simplex is degenerate.
    pub fn barycentric(&self, point: &SVector<T, D>) -> Option<SVector<T, D>> {
        let inverse = self.edges.try_inverse()?;
        Some(inverse * (point - self.base))
    }

    /// Whether the simplex spans no volume
    pub fn is_degenerate(&self) -> bool {
        self.edges.try_inverse().is_none()
    }
}

impl<T: RealField + Copy> Simplex<T, 2> {
    /// Triangle from three points
    pub fn triangle(a: Vector2<T>, b: Vector2<T>, c: Vector2<T>) -> Self {
        Self::new(a, Matrix2::from_columns(&[b - a, c - a]))
    }

    /// Unsigned area
    pub fn area(&self) -> T {
        self.edges.determinant().abs() * half::<T>()
    }
}

impl<T: RealField + Copy> Simplex<T, 3> {
    /// Tetrahedron from four points
    pub fn tetrahedron(a: Vector3<T>, b: Vector3<T>, c: Vector3<T>, d: Vector3<T>) -> Self {
        Self::new(a, Matrix3::from_columns(&[b - a, c - a, d - a]))
    }

    /// Unsigned volume
    pub fn volume(&self) -> T {
        let six: T = nalgebra::convert(6.0);
        self.edges.determinant().abs() / six
    }
}

impl<T: RealField + Copy, const D: usize> Shape for Simplex<T, D> {
    type Scalar = T;
}

impl<T: RealField + Copy, const D: usize> Region<D> for Simplex<T, D> {
    fn contains(&self, point: &SVector<T, D>) -> bool {
        self.barycentric(point).is_some_and(|weights| {
            let sum = weights.iter().fold(T::zero(), |acc, &w| acc + w);
            weights.iter().all(|&w| w >= T::zero()) && sum <= T::one()
        })
    }

    fn bounds(&self) -> Rect<T, D> {
        (1..=D)
            .filter_map(|i| self.vertex(i))
            .fold(Rect::from_point(self.base), |bounds, v| bounds.extend_to(&v))
    }
}
