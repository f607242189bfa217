use super::hit::HitRecord;
use super::ray::Ray;
use super::scene::Scene;
use super::shading;
use super::vec::Color;

pub const BACKGROUND: Color = Color::zero();

// Offset for reflected and transmitted rays, keeps them off the surface they leave
const SECONDARY_RAY_BIAS: f64 = 0.01;

// Shadowed surfaces keep this fraction of their colour
const GLASS_SHADOW: f64 = 0.6;
const OPAQUE_SHADOW: f64 = 0.2;

// Share of the surface colour kept under a transparent surface
const TRANSPARENT_TINT: f64 = 0.2;

/// Counters collected over one call tree of [`Tracer::trace_with_stats`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TraceStats {
    /// Number of `trace` calls, primary ray included
    pub rays: u64,
    /// Deepest recursion level reached
    pub max_depth: u32,
}

impl TraceStats {
    pub fn merge(self, other: Self) -> Self {
        Self {
            rays: self.rays + other.rays,
            max_depth: self.max_depth.max(other.max_depth),
        }
    }
}

/// Whitted style recursive ray tracer over a borrowed scene.
pub struct Tracer<'a> {
    scene: &'a Scene,
    max_depth: u32,
}

impl<'a> Tracer<'a> {
    /// `max_depth` bounds recursion: secondary rays are only spawned while the
    /// current depth is below it.
    pub fn new(scene: &'a Scene, max_depth: u32) -> Self {
        Self { scene, max_depth }
    }

    pub fn max_depth(&self) -> u32 {
        self.max_depth
    }

    /// Colour seen along `ray`. Primary rays start at depth 1.
    pub fn trace(&self, ray: &Ray, depth: u32) -> Color {
        self.trace_with_stats(ray, depth).0
    }

    pub fn trace_with_stats(&self, ray: &Ray, depth: u32) -> (Color, TraceStats) {
        let mut stats = TraceStats::default();
        let color = self.trace_counted(ray, depth, &mut stats);
        (color, stats)
    }

    fn trace_counted(&self, ray: &Ray, depth: u32, stats: &mut TraceStats) -> Color {
        stats.rays += 1;
        stats.max_depth = stats.max_depth.max(depth);

        let record = match self.scene.closest_hit(ray) {
            Some(record) => record,
            None => return BACKGROUND,
        };
        let object = self.scene.object(&record);
        let material = object.material();
        let base = shading::effective_color(material, record.point);

        let mut color = shading::shade(
            self.scene.light().position(),
            -ray.direction(),
            record.point,
            object,
            base,
        );

        if let Some(factor) = self.shadow_factor(&record) {
            color = factor * base;
        }

        if material.is_reflective() && depth < self.max_depth {
            let normal = object.normal(record.point);
            let reflected_dir = ray.direction().reflect(normal);
            let reflected = Ray::nudged(record.point, reflected_dir, SECONDARY_RAY_BIAS);
            let reflected_color = self.trace_counted(&reflected, depth + 1, stats);
            color += material.reflection_coeff() * reflected_color;
        }

        // Overwrites any reflection above
        if material.is_transparent() && depth < self.max_depth {
            let transmitted = Ray::nudged(record.point, ray.direction(), SECONDARY_RAY_BIAS);
            let transmitted_color = self.trace_counted(&transmitted, depth + 1, stats);
            color = TRANSPARENT_TINT * base + transmitted_color;
        }

        color
    }

    // None when the light is visible from the hit point
    fn shadow_factor(&self, record: &HitRecord) -> Option<f64> {
        let (shadow_ray, light_distance) = self.scene.light().shadow_ray(record.point);
        let blocker = self.scene.closest_hit(&shadow_ray)?;
        if blocker.t >= light_distance {
            return None;
        }

        if self.scene.object(&blocker).material().is_transparent() {
            Some(GLASS_SHADOW)
        } else {
            Some(OPAQUE_SHADOW)
        }
    }
}
