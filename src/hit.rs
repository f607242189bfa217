use super::material::Material;
use super::vec::{Point3, Vec3};

// Rays closer than this to their origin are ignored, prevents shadow acne
pub const T_MIN: f64 = 1.0e-3;

// Quadratic discriminants below this count as a miss, so grazing rays don't speckle
pub const DISCRIMINANT_EPSILON: f64 = 1.0e-3;

/// Result of a closest-hit query against a scene.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HitRecord {
    /// Position of the primitive in scene order
    pub index: usize,
    pub t: f64,
    pub point: Point3,
}

/// A geometric primitive that can be intersected and shaded.
pub trait Hit: Send + Sync {
    /// Smallest ray parameter above [`T_MIN`] where the ray meets the surface.
    fn intersect(&self, origin: Point3, direction: Vec3) -> Option<f64>;

    /// Outward unit normal. `point` must lie on the surface.
    fn normal(&self, point: Point3) -> Vec3;

    fn material(&self) -> &Material;

    fn material_mut(&mut self) -> &mut Material;
}

// Roots of a*t^2 + b*t + c, smallest first
pub(crate) fn solve_quadratic(a: f64, b: f64, c: f64) -> Option<(f64, f64)> {
    if a.abs() < f64::EPSILON {
        return None;
    }

    let discriminant = b * b - 4.0 * a * c;
    if discriminant < DISCRIMINANT_EPSILON {
        return None;
    }

    let sqrt_d = discriminant.sqrt();
    let t1 = (-b - sqrt_d) / (2.0 * a);
    let t2 = (-b + sqrt_d) / (2.0 * a);
    if t1 <= t2 {
        Some((t1, t2))
    } else {
        Some((t2, t1))
    }
}
