//! Whitted style ray tracer over a small set of analytic primitives.
//!
//! A [`Scene`] owns spheres, bounded planes and cylinders plus one point light.
//! [`Tracer::trace`] returns the colour seen along a ray, following mirror
//! reflections and straight-through transparency up to a fixed depth.

pub mod camera;
pub mod cylinder;
pub mod hit;
pub mod light;
pub mod material;
pub mod plane;
pub mod ray;
pub mod scene;
pub mod shading;
pub mod sphere;
pub mod tracer;
pub mod vec;

pub use camera::ViewPlane;
pub use cylinder::Cylinder;
pub use hit::{Hit, HitRecord};
pub use light::PointLight;
pub use material::{Checkerboard, Material};
pub use plane::Plane;
pub use ray::Ray;
pub use scene::Scene;
pub use sphere::Sphere;
pub use tracer::{TraceStats, Tracer};
pub use vec::{Color, Point3, Vec3};
