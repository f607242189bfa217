use super::vec::{Color, Point3};

/// Procedural two-colour grid on the horizontal (x, z) plane.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Checkerboard {
    size: f64,
    even: Color,
    odd: Color,
}

impl Checkerboard {
    pub fn new(size: f64, even: Color, odd: Color) -> Self {
        debug_assert!(size > 0.0, "checkerboard cells must have a positive size");
        Self { size, even, odd }
    }

    pub fn color_at(&self, point: Point3) -> Color {
        let ix = (point.x() / self.size).floor() as i64;
        let iz = (point.z() / self.size).floor() as i64;
        // rem_euclid keeps the parity right for negative cells
        if (ix + iz).rem_euclid(2) == 0 {
            self.even
        } else {
            self.odd
        }
    }
}

/// Surface attributes shared by every primitive.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Material {
    color: Color,
    shininess: f64,
    specular: bool,
    reflective: bool,
    reflection_coeff: f64,
    transparent: bool,
    transparency_coeff: f64,
    pattern: Option<Checkerboard>,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            color: Color::one(),
            shininess: 50.0,
            specular: true,
            reflective: false,
            reflection_coeff: 0.8,
            transparent: false,
            transparency_coeff: 0.8,
            pattern: None,
        }
    }
}

impl Material {
    pub fn new(color: Color) -> Self {
        Self {
            color,
            ..Default::default()
        }
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn shininess(&self) -> f64 {
        self.shininess
    }

    pub fn is_specular(&self) -> bool {
        self.specular
    }

    pub fn is_reflective(&self) -> bool {
        self.reflective
    }

    pub fn reflection_coeff(&self) -> f64 {
        self.reflection_coeff
    }

    pub fn is_transparent(&self) -> bool {
        self.transparent
    }

    pub fn transparency_coeff(&self) -> f64 {
        self.transparency_coeff
    }

    pub fn pattern(&self) -> Option<&Checkerboard> {
        self.pattern.as_ref()
    }

    pub fn set_color(&mut self, color: Color) -> &mut Self {
        self.color = color;
        self
    }

    pub fn set_shininess(&mut self, shininess: f64) -> &mut Self {
        self.shininess = shininess;
        self
    }

    pub fn set_specular(&mut self, enabled: bool) -> &mut Self {
        self.specular = enabled;
        self
    }

    pub fn set_reflectivity(&mut self, enabled: bool, coeff: f64) -> &mut Self {
        self.reflective = enabled;
        self.reflection_coeff = coeff;
        self
    }

    pub fn set_transparency(&mut self, enabled: bool, coeff: f64) -> &mut Self {
        self.transparent = enabled;
        self.transparency_coeff = coeff;
        self
    }

    pub fn set_pattern(&mut self, pattern: Checkerboard) -> &mut Self {
        self.pattern = Some(pattern);
        self
    }
}
