//! Spheres and circles

use nalgebra::{RealField, SVector};
use serde::{Deserialize, Serialize};

use super::shape::{Region, Sdf, Shape};
use super::{Ray, RayHit, Rect};

/// A ball of `radius` around `center`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sphere<T: RealField, const D: usize> {
    /// The center position of the sphere
    pub center: SVector<T, D>,
    /// The radius of the sphere
    pub radius: T,
}

/// A sphere in the plane
pub type Circle<T> = Sphere<T, 2>;

impl<T: RealField + Copy, const D: usize> Sphere<T, D> {
    /// Creates a new sphere with the given center and radius
    pub const fn new(center: SVector<T, D>, radius: T) -> Self {
        Self { center, radius }
    }

    /// Check if this sphere intersects with another
    pub fn intersects(&self, other: &Self) -> bool {
        let distance_squared = (self.center - other.center).norm_squared();
        let radius_sum = self.radius + other.radius;
        distance_squared <= radius_sum * radius_sum
    }

    /// Get the penetration depth if intersecting (zero if not intersecting)
    pub fn penetration_depth(&self, other: &Self) -> T {
        let distance = (self.center - other.center).norm();
        let radius_sum = self.radius + other.radius;
        if distance < radius_sum {
            radius_sum - distance
        } else {
            T::zero()
        }
    }

    /// Test ray intersection with this sphere
    ///
    /// Returns the nearest hit in front of the ray origin.
    pub fn intersect_ray(&self, ray: &Ray<T, D>) -> Option<RayHit<T, D>> {
        let two = T::one() + T::one();
        let four = two + two;

        // Solve |origin + t*direction - center|^2 = radius^2
        let oc = ray.origin - self.center;
        let a = ray.direction.dot(&ray.direction);
        let b = two * oc.dot(&ray.direction);
        let c = oc.dot(&oc) - self.radius * self.radius;

        let discriminant = b * b - four * a * c;
        if discriminant < T::zero() {
            return None;
        }

        let sqrt_discriminant = discriminant.sqrt();
        let t1 = (-b - sqrt_discriminant) / (two * a);
        let t2 = (-b + sqrt_discriminant) / (two * a);

        let t = if t1 >= T::zero() {
            t1
        } else if t2 >= T::zero() {
            t2
        } else {
            return None;
        };

        let point = ray.point_at(t);
        let normal = (point - self.center).normalize();

        Some(RayHit { distance: t, point, normal })
    }
}

impl<T: RealField + Copy, const D: usize> Shape for Sphere<T, D> {
    type Scalar = T;
}

impl<T: RealField + Copy, const D: usize> Region<D> for Sphere<T, D> {
    fn contains(&self, point: &SVector<T, D>) -> bool {
        (point - self.center).norm_squared() <= self.radius * self.radius
    }

    fn bounds(&self) -> Rect<T, D> {
        Rect::from_center_extents(self.center, SVector::repeat(self.radius))
    }
}

impl<T: RealField + Copy, const D: usize> Sdf<D> for Sphere<T, D> {
    fn sdf(&self, point: &SVector<T, D>) -> T {
        (point - self.center).norm() - self.radius
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use nalgebra::{Vector2, Vector3};

    #[test]
    fn test_sphere_sphere_overlap() {
        let a = Sphere::new(Vector3::new(0.0, 0.0, 0.0), 1.0);
        let b = Sphere::new(Vector3::new(1.5, 0.0, 0.0), 1.0);
        let c = Sphere::new(Vector3::new(3.0, 0.0, 0.0), 1.0);

        assert!(a.intersects(&b));
        assert_relative_eq!(a.penetration_depth(&b), 0.5);
        assert!(!a.intersects(&c));
        assert_relative_eq!(a.penetration_depth(&c), 0.0);
    }

    #[test]
    fn test_ray_hits_front_face() {
        let sphere = Sphere::new(Vector3::new(0.0, 0.0, -5.0), 1.0);
        let ray = Ray::new(Vector3::zeros(), Vector3::new(0.0, 0.0, -1.0));

        let hit = sphere.intersect_ray(&ray).expect("ray should hit sphere");
        assert_relative_eq!(hit.distance, 4.0, epsilon = 1e-9);
        assert_relative_eq!(hit.point, Vector3::new(0.0, 0.0, -4.0), epsilon = 1e-9);
        assert_relative_eq!(hit.normal, Vector3::new(0.0, 0.0, 1.0), epsilon = 1e-9);
    }

    #[test]
    fn test_ray_from_inside_hits_back_face() {
        let sphere = Sphere::new(Vector3::zeros(), 2.0);
        let ray = Ray::new(Vector3::zeros(), Vector3::new(1.0, 0.0, 0.0));

        let hit = sphere.intersect_ray(&ray).expect("origin is inside");
        assert_relative_eq!(hit.distance, 2.0, epsilon = 1e-9);
    }

    #[test]
    fn test_ray_pointing_away_misses() {
        let sphere = Sphere::new(Vector3::new(0.0, 0.0, -5.0), 1.0);
        let ray = Ray::new(Vector3::zeros(), Vector3::new(0.0, 0.0, 1.0));
        assert!(sphere.intersect_ray(&ray).is_none());
    }

    #[test]
    fn test_circle_region() {
        let circle: Circle<f32> = Sphere::new(Vector2::new(1.0, 1.0), 2.0);
        assert!(circle.contains(&Vector2::new(2.0, 2.0)));
        assert!(!circle.contains(&Vector2::new(3.0, 3.0)));
        assert_relative_eq!(circle.sdf(&Vector2::new(4.0, 1.0)), 1.0);

        let bounds = circle.bounds();
        assert_relative_eq!(*bounds.lo(), Vector2::new(-1.0, -1.0));
        assert_relative_eq!(*bounds.hi(), Vector2::new(3.0, 3.0));
    }
}
