use super::hit::{self, Hit, T_MIN};
use super::material::Material;
use super::vec::{Point3, Vec3};

// Rays with |D.y| below this never reach the cap plane
const CAP_EPSILON: f64 = 1.0e-6;
const SURFACE_EPSILON: f64 = 1.0e-6;

/// Upright cylinder standing on `base`, extending `height` along +Y.
///
/// Only the bottom cap is closed. A ray that would leave through the top
/// opening sees the inside of the side wall instead.
pub struct Cylinder {
    base: Point3,
    radius: f64,
    height: f64,
    material: Material,
}

impl Cylinder {
    pub fn new(base: Point3, radius: f64, height: f64, material: Material) -> Self {
        debug_assert!(radius > 0.0, "cylinder radius must be positive");
        debug_assert!(height > 0.0, "cylinder height must be positive");
        Self {
            base,
            radius,
            height,
            material,
        }
    }

    fn within_height(&self, y: f64) -> bool {
        y > self.base.y() && y < self.base.y() + self.height
    }

    fn radial(&self, point: Point3) -> Vec3 {
        Vec3::new(point.x() - self.base.x(), 0.0, point.z() - self.base.z())
    }

    fn bottom_cap(&self, origin: Point3, direction: Vec3) -> Option<f64> {
        if direction.y().abs() < CAP_EPSILON {
            return None;
        }

        let t = (self.base.y() - origin.y()) / direction.y();
        if t <= T_MIN {
            return None;
        }

        let point = origin + t * direction;
        if self.radial(point).length() <= self.radius {
            Some(t)
        } else {
            None
        }
    }
}

impl Hit for Cylinder {
    fn intersect(&self, origin: Point3, direction: Vec3) -> Option<f64> {
        // Infinite side wall: the sphere quadratic with Y dropped
        let oc = self.radial(origin);
        let a = direction.x().powi(2) + direction.z().powi(2);
        let b = 2.0 * (direction.x() * oc.x() + direction.z() * oc.z());
        let c = oc.x().powi(2) + oc.z().powi(2) - self.radius.powi(2);

        let (t1, t2) = hit::solve_quadratic(a, b, c)?;
        for t in [t1, t2] {
            if t > T_MIN && self.within_height(origin.y() + t * direction.y()) {
                return Some(t);
            }
        }

        self.bottom_cap(origin, direction)
    }

    fn normal(&self, point: Point3) -> Vec3 {
        let radial = self.radial(point);
        let on_cap = (point.y() - self.base.y()).abs() < SURFACE_EPSILON;
        if on_cap && radial.length() < self.radius - SURFACE_EPSILON {
            return Vec3::new(0.0, -1.0, 0.0);
        }
        radial.normalized()
    }

    fn material(&self) -> &Material {
        &self.material
    }

    fn material_mut(&mut self) -> &mut Material {
        &mut self.material
    }
}
