use super::hit::{self, Hit, T_MIN};
use super::material::Material;
use super::vec::{Point3, Vec3};

pub struct Sphere {
    center: Point3,
    radius: f64,
    material: Material,
}

impl Sphere {
    pub fn new(center: Point3, radius: f64, material: Material) -> Self {
        debug_assert!(radius > 0.0, "sphere radius must be positive");
        Self {
            center,
            radius,
            material,
        }
    }
}

impl Hit for Sphere {
    fn intersect(&self, origin: Point3, direction: Vec3) -> Option<f64> {
        let oc = origin - self.center;
        let a = direction.dot(direction);
        let b = 2.0 * oc.dot(direction);
        let c = oc.dot(oc) - self.radius.powi(2);

        // Nearest root in front of the origin, else the far one (origin inside)
        let (t1, t2) = hit::solve_quadratic(a, b, c)?;
        if t1 > T_MIN {
            Some(t1)
        } else if t2 > T_MIN {
            Some(t2)
        } else {
            None
        }
    }

    fn normal(&self, point: Point3) -> Vec3 {
        (point - self.center).normalized()
    }

    fn material(&self) -> &Material {
        &self.material
    }

    fn material_mut(&mut self) -> &mut Material {
        &mut self.material
    }
}
