use super::hit::{Hit, T_MIN};
use super::material::Material;
use super::vec::{Point3, Vec3};

// |D.n| below this means the ray runs parallel to the plane
const PARALLEL_EPSILON: f64 = 1.0e-4;

/// Bounded planar polygon, given by its corners in order.
///
/// The corners must be coplanar and describe a simple convex polygon; the
/// winding decides which side the normal faces.
pub struct Plane {
    corners: Vec<Point3>,
    normal: Vec3,
    material: Material,
}

impl Plane {
    pub fn new(a: Point3, b: Point3, c: Point3, d: Point3, material: Material) -> Self {
        Self::polygon(vec![a, b, c, d], material)
    }

    pub fn triangle(a: Point3, b: Point3, c: Point3, material: Material) -> Self {
        Self::polygon(vec![a, b, c], material)
    }

    fn polygon(corners: Vec<Point3>, material: Material) -> Self {
        debug_assert!(corners.len() >= 3, "a plane needs at least three corners");
        let (a, b, c) = (corners[0], corners[1], corners[2]);
        let normal = (c - b).cross(a - b).normalized();
        Self {
            corners,
            normal,
            material,
        }
    }

    // Point is inside when it lies on the same side of every edge
    fn contains(&self, point: Point3) -> bool {
        let mut positive = 0;
        let mut negative = 0;
        let n = self.corners.len();
        for i in 0..n {
            let from = self.corners[i];
            let to = self.corners[(i + 1) % n];
            let k = (to - from).cross(point - from).dot(self.normal);
            if k > 0.0 {
                positive += 1;
            } else if k < 0.0 {
                negative += 1;
            }
        }
        positive == n || negative == n
    }
}

impl Hit for Plane {
    fn intersect(&self, origin: Point3, direction: Vec3) -> Option<f64> {
        let d_dot_n = direction.dot(self.normal);
        if d_dot_n.abs() < PARALLEL_EPSILON {
            return None;
        }

        let t = (self.corners[0] - origin).dot(self.normal) / d_dot_n;
        if t <= T_MIN {
            return None;
        }

        if self.contains(origin + t * direction) {
            Some(t)
        } else {
            None
        }
    }

    fn normal(&self, _point: Point3) -> Vec3 {
        self.normal
    }

    fn material(&self) -> &Material {
        &self.material
    }

    fn material_mut(&mut self) -> &mut Material {
        &mut self.material
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn floor() -> Plane {
        Plane::new(
            Point3::new(-40.0, -15.0, 0.0),
            Point3::new(40.0, -15.0, 0.0),
            Point3::new(40.0, -15.0, -200.0),
            Point3::new(-40.0, -15.0, -200.0),
            Material::default(),
        )
    }

    #[test]
    fn floor_normal_points_up() {
        let n = floor().normal(Point3::zero());

        assert!((n - Vec3::new(0.0, 1.0, 0.0)).near_zero());
    }

    #[test]
    fn hits_inside_the_quad() {
        let floor = floor();
        let direction = Vec3::new(0.0, -15.0, -40.0);

        let t = floor.intersect(Point3::zero(), direction).unwrap();

        assert!((t - 1.0).abs() < 1e-9);
    }

    #[test]
    fn rejects_points_outside_the_quad() {
        let floor = floor();

        // Lands at x = 60, on the infinite plane but past the edge
        let direction = Vec3::new(60.0, -15.0, -40.0);
        assert!(floor.intersect(Point3::zero(), direction).is_none());
    }

    #[test]
    fn rejects_parallel_and_backward_rays() {
        let floor = floor();

        assert!(floor
            .intersect(Point3::zero(), Vec3::new(0.0, 0.0, -1.0))
            .is_none());
        assert!(floor
            .intersect(Point3::zero(), Vec3::new(0.0, 1.0, -1.0))
            .is_none());
    }

    #[test]
    fn triangle_bounds_by_three_edges() {
        let tri = Plane::triangle(
            Point3::new(0.0, 0.0, -5.0),
            Point3::new(4.0, 0.0, -5.0),
            Point3::new(0.0, 4.0, -5.0),
            Material::default(),
        );

        assert!(tri
            .intersect(Point3::zero(), Vec3::new(1.0, 1.0, -5.0))
            .is_some());
        // Inside the bounding square, outside the hypotenuse
        assert!(tri
            .intersect(Point3::zero(), Vec3::new(3.0, 3.0, -5.0))
            .is_none());
    }

    #[test]
    fn normal_faces_the_viewer_for_front_winding() {
        let tri = Plane::triangle(
            Point3::new(0.0, 0.0, -5.0),
            Point3::new(4.0, 0.0, -5.0),
            Point3::new(0.0, 4.0, -5.0),
            Material::default(),
        );
        let direction = Vec3::new(1.0, 1.0, -5.0);
        let t = tri.intersect(Point3::zero(), direction).unwrap();
        let point = t * direction;

        let n = tri.normal(point);
        assert!((n.length() - 1.0).abs() < 1e-9);
        assert!(n.dot(Point3::zero() - point) >= 0.0);
    }
}
