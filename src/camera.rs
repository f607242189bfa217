use super::ray::Ray;
use super::vec::{Point3, Vec3};

/// Fixed pinhole view: an eye looking down -z through a rectangular image
/// plane split into a square grid of cells.
pub struct ViewPlane {
    eye: Point3,
    x_min: f64,
    y_min: f64,
    cell_width: f64,
    cell_height: f64,
    distance: f64,
    divisions: u32,
}

impl ViewPlane {
    pub fn new(
        eye: Point3,
        x_range: (f64, f64),
        y_range: (f64, f64),
        distance: f64,
        divisions: u32,
    ) -> Self {
        debug_assert!(divisions > 0, "view plane needs at least one cell");
        let (x_min, x_max) = x_range;
        let (y_min, y_max) = y_range;
        Self {
            eye,
            x_min,
            y_min,
            cell_width: (x_max - x_min) / divisions as f64,
            cell_height: (y_max - y_min) / divisions as f64,
            distance,
            divisions,
        }
    }

    pub fn divisions(&self) -> u32 {
        self.divisions
    }

    /// Primary ray through the centre of cell (i, j), counted from the
    /// bottom-left corner of the plane.
    pub fn primary_ray(&self, i: u32, j: u32) -> Ray {
        let xp = self.x_min + i as f64 * self.cell_width;
        let yp = self.y_min + j as f64 * self.cell_height;
        let direction = Vec3::new(
            xp + 0.5 * self.cell_width,
            yp + 0.5 * self.cell_height,
            -self.distance,
        );
        Ray::new(self.eye, direction)
    }

    /// Same as [`primary_ray`](Self::primary_ray) but addressed like an
    /// image, with row 0 at the top.
    pub fn pixel_ray(&self, column: u32, row: u32) -> Ray {
        self.primary_ray(column, self.divisions - 1 - row)
    }
}
