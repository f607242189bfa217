use super::vec::{Point3, Vec3};

#[derive(Clone, Copy, Debug)]
pub struct Ray {
    origin: Point3,
    direction: Vec3,
}

impl Ray {
    pub fn new(origin: Point3, direction: Vec3) -> Self {
        Self { origin, direction }
    }

    // Secondary ray with a unit direction whose origin is pushed `bias` world units
    // off the surface it leaves
    pub fn nudged(origin: Point3, direction: Vec3, bias: f64) -> Self {
        let direction = direction.normalized();
        Self::new(origin + bias * direction, direction)
    }

    pub fn origin(&self) -> Point3 {
        self.origin
    }

    pub fn direction(&self) -> Vec3 {
        self.direction
    }

    pub fn at(&self, t: f64) -> Point3 {
        self.origin + t * self.direction
    }
}
