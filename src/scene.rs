use super::hit::{Hit, HitRecord};
use super::light::PointLight;
use super::ray::Ray;

/// Owns every primitive of a render plus its single light.
///
/// Primitives are searched linearly in insertion order, so when two surfaces
/// are hit at exactly the same distance the one added first wins.
pub struct Scene {
    objects: Vec<Box<dyn Hit>>,
    light: PointLight,
}

impl Scene {
    pub fn new(light: PointLight) -> Self {
        Self {
            objects: Vec::new(),
            light,
        }
    }

    /// Adds a primitive and returns its index, as reported in hit records.
    pub fn add(&mut self, object: Box<dyn Hit>) -> usize {
        self.objects.push(object);
        self.objects.len() - 1
    }

    pub fn get(&self, index: usize) -> Option<&dyn Hit> {
        self.objects.get(index).map(|object| object.as_ref())
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    pub fn light(&self) -> &PointLight {
        &self.light
    }

    /// Mutable access for adjusting a primitive's material after it was added.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut (dyn Hit + 'static)> {
        self.objects.get_mut(index).map(|object| object.as_mut())
    }

    pub fn closest_hit(&self, ray: &Ray) -> Option<HitRecord> {
        let mut closest: Option<HitRecord> = None;

        for (index, object) in self.objects.iter().enumerate() {
            if let Some(t) = object.intersect(ray.origin(), ray.direction()) {
                // Strict comparison keeps the first of equal hits
                if closest.map_or(true, |record| t < record.t) {
                    closest = Some(HitRecord {
                        index,
                        t,
                        point: ray.at(t),
                    });
                }
            }
        }

        closest
    }

    pub(crate) fn object(&self, record: &HitRecord) -> &dyn Hit {
        self.objects[record.index].as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::material::Material;
    use crate::sphere::Sphere;
    use crate::vec::{Color, Point3, Vec3};

    fn sphere_at(z: f64) -> Box<dyn Hit> {
        Box::new(Sphere::new(Point3::new(0.0, 0.0, z), 1.0, Material::default()))
    }

    #[test]
    fn empty_scene_has_no_hit() {
        let scene = Scene::new(PointLight::new(Point3::zero()));
        let ray = Ray::new(Point3::zero(), Vec3::new(0.0, 0.0, -1.0));

        assert!(scene.is_empty());
        assert!(scene.closest_hit(&ray).is_none());
    }

    #[test]
    fn nearest_primitive_wins_regardless_of_order() {
        let mut scene = Scene::new(PointLight::new(Point3::zero()));
        scene.add(sphere_at(-20.0));
        let near = scene.add(sphere_at(-10.0));
        let ray = Ray::new(Point3::zero(), Vec3::new(0.0, 0.0, -1.0));

        let record = scene.closest_hit(&ray).unwrap();

        assert_eq!(record.index, near);
        assert!((record.t - 9.0).abs() < 1e-9);
        assert!((record.point - Point3::new(0.0, 0.0, -9.0)).near_zero());
    }

    #[test]
    fn ties_go_to_the_first_added() {
        let mut scene = Scene::new(PointLight::new(Point3::zero()));
        let first = scene.add(sphere_at(-10.0));
        scene.add(sphere_at(-10.0));
        let ray = Ray::new(Point3::zero(), Vec3::new(0.0, 0.0, -1.0));

        assert_eq!(scene.closest_hit(&ray).unwrap().index, first);
        assert_eq!(scene.len(), 2);
    }

    #[test]
    fn materials_can_be_edited_in_place() {
        let mut scene = Scene::new(PointLight::new(Point3::zero()));
        let index = scene.add(sphere_at(-10.0));

        if let Some(object) = scene.get_mut(index) {
            object
                .material_mut()
                .set_color(Color::new(0.0, 1.0, 0.0))
                .set_transparency(true, 0.3);
        }

        let material = scene.get(index).unwrap().material();
        assert_eq!(material.color(), Color::new(0.0, 1.0, 0.0));
        assert!(material.is_transparent());
        assert_eq!(material.transparency_coeff(), 0.3);
        assert!(scene.get_mut(1).is_none());
    }
}
