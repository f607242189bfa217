use super::ray::Ray;
use super::vec::Point3;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointLight {
    position: Point3,
}

impl PointLight {
    pub fn new(position: Point3) -> Self {
        Self { position }
    }

    pub fn position(&self) -> Point3 {
        self.position
    }

    // Ray from the surface position towards the light, normalized so hit distances
    // compare directly with the returned distance to the light
    pub fn shadow_ray(&self, surface_position: Point3) -> (Ray, f64) {
        let to_light = self.position - surface_position;
        let distance = to_light.length();
        (Ray::new(surface_position, to_light / distance), distance)
    }
}
