use super::hit::Hit;
use super::material::Material;
use super::vec::{Color, Point3, Vec3};

pub const AMBIENT: f64 = 0.2;

/// Colour the surface shows at `point` before lighting.
///
/// This is the material colour unless a procedural pattern is attached, in which
/// case the pattern decides. Nothing is written back to the material.
pub fn effective_color(material: &Material, point: Point3) -> Color {
    match material.pattern() {
        Some(pattern) => pattern.color_at(point),
        None => material.color(),
    }
}

/// Phong lighting at a surface point, clamped to [0, 1] per channel.
///
/// `view_dir` points from the surface back towards the viewer and need not be
/// normalized. `base` is the colour from [`effective_color`].
pub fn shade(
    light_pos: Point3,
    view_dir: Vec3,
    hit_point: Point3,
    object: &dyn Hit,
    base: Color,
) -> Color {
    let material = object.material();
    let normal = object.normal(hit_point);
    let light_dir = (light_pos - hit_point).normalized();

    let diffuse = light_dir.dot(normal).max(0.0);

    let specular = if material.is_specular() {
        // Mirror the light about the normal and compare with the viewer
        let reflected = (-light_dir).reflect(normal);
        let r_dot_v = reflected.dot(view_dir.normalized());
        if r_dot_v > 0.0 {
            r_dot_v.powf(material.shininess())
        } else {
            0.0
        }
    } else {
        0.0
    };

    (AMBIENT * base + diffuse * base + specular * Color::one()).clamped(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::material::Checkerboard;
    use crate::sphere::Sphere;

    fn red_ball(specular: bool) -> Sphere {
        let mut material = Material::new(Color::new(1.0, 0.0, 0.0));
        material.set_specular(specular);
        Sphere::new(Point3::zero(), 1.0, material)
    }

    #[test]
    fn lit_apex_is_fully_red() {
        let ball = red_ball(false);
        let apex = Point3::new(0.0, 1.0, 0.0);

        let color = shade(
            Point3::new(0.0, 10.0, 0.0),
            Vec3::new(0.0, 5.0, 0.0),
            apex,
            &ball,
            ball.material().color(),
        );

        assert_eq!(color, Color::new(1.0, 0.0, 0.0));
    }

    #[test]
    fn facing_away_from_light_leaves_only_ambient() {
        let ball = red_ball(true);
        let bottom = Point3::new(0.0, -1.0, 0.0);

        let color = shade(
            Point3::new(0.0, 10.0, 0.0),
            Vec3::new(0.0, -1.0, 0.0),
            bottom,
            &ball,
            ball.material().color(),
        );

        assert!((color - Color::new(AMBIENT, 0.0, 0.0)).near_zero());
    }

    #[test]
    fn highlight_adds_white() {
        let ball = red_ball(true);
        let apex = Point3::new(0.0, 1.0, 0.0);

        let color = shade(
            Point3::new(0.0, 10.0, 0.0),
            Vec3::new(0.0, 1.0, 0.0),
            apex,
            &ball,
            ball.material().color(),
        );

        // Viewer sits on the mirror direction, so the specular term is 1
        assert_eq!(color, Color::one());
    }

    #[test]
    fn pattern_overrides_material_color() {
        let mut material = Material::new(Color::new(0.1, 0.1, 0.1));
        let even = Color::new(0.0, 1.0, 0.0);
        let odd = Color::new(1.0, 1.0, 0.5);
        assert_eq!(effective_color(&material, Point3::new(3.0, 0.0, 3.0)), material.color());

        material.set_pattern(Checkerboard::new(10.0, even, odd));

        assert_eq!(effective_color(&material, Point3::new(3.0, -15.0, -3.0)), odd);
        assert_eq!(effective_color(&material, Point3::new(13.0, -15.0, -3.0)), even);
        assert_eq!(material.color(), Color::new(0.1, 0.1, 0.1));
    }
}
