mod cli;
mod logger;
mod output;

use anyhow::Result;
use clap::Parser;
use image::{ImageBuffer, Rgb};
use indicatif::{ProgressBar, ProgressStyle};
use log::{debug, info};
use rayon::prelude::*;
use std::time::Instant;
use whitted::{
    Checkerboard, Color, Cylinder, Material, Plane, Point3, PointLight, Scene, Sphere,
    TraceStats, Tracer, ViewPlane,
};

use cli::Args;
use logger::init_logger;
use output::{save_image_as_png, HdrImage};

#[cfg(feature = "dhat-heap")]
#[global_allocator]
static ALLOC: dhat::Alloc = dhat::Alloc;

// Image plane, eye at the origin looking down -z
const EYE_DISTANCE: f64 = 40.0;
const X_RANGE: (f64, f64) = (-10.0, 10.0);
const Y_RANGE: (f64, f64) = (-10.0, 10.0);

const LIGHT_POSITION: Point3 = Point3::new(0.0, 38.0, -40.0);

// Room bounds
const LEFT: f64 = -40.0;
const RIGHT: f64 = 40.0;
const FLOOR: f64 = -15.0;
const CEILING: f64 = 40.0;
const FRONT: f64 = 0.0;
const BACK: f64 = -200.0;

fn mirror() -> Material {
    let mut mirror = Material::new(Color::zero());
    mirror.set_shininess(500.0).set_reflectivity(true, 0.9);
    mirror
}

/// A closed room with mirrors front and back, a checkerboard floor, three
/// spheres (one of them glass) and a short cylinder.
fn create_scene() -> Scene {
    let mut scene = Scene::new(PointLight::new(LIGHT_POSITION));

    let mut blue = Material::new(Color::new(0.0, 0.0, 1.0));
    blue.set_shininess(50.0).set_reflectivity(true, 0.8);
    scene.add(Box::new(Sphere::new(Point3::new(20.0, 0.0, -120.0), 8.0, blue)));

    let mut red = Material::new(Color::new(1.0, 0.0, 0.0));
    red.set_shininess(5.0).set_reflectivity(true, 0.2);
    scene.add(Box::new(Sphere::new(Point3::new(-20.0, -5.0, -150.0), 10.0, red)));

    scene.add(Box::new(Plane::new(
        Point3::new(LEFT, FLOOR, FRONT),
        Point3::new(LEFT, FLOOR, BACK),
        Point3::new(LEFT, CEILING, BACK),
        Point3::new(LEFT, CEILING, FRONT),
        Material::new(Color::new(0.5, 0.5, 0.5)),
    )));

    let mut floor = Material::new(Color::new(0.1, 0.1, 0.1));
    floor.set_pattern(Checkerboard::new(
        10.0,
        Color::new(0.0, 1.0, 0.0),
        Color::new(1.0, 1.0, 0.5),
    ));
    scene.add(Box::new(Plane::new(
        Point3::new(LEFT, FLOOR, FRONT),
        Point3::new(RIGHT, FLOOR, FRONT),
        Point3::new(RIGHT, FLOOR, BACK),
        Point3::new(LEFT, FLOOR, BACK),
        floor,
    )));

    let mut glass = Material::new(Color::new(0.5, 0.5, 0.8));
    glass.set_transparency(true, 0.5);
    scene.add(Box::new(Sphere::new(Point3::new(-10.0, -7.0, -100.0), 8.0, glass)));

    for z in [BACK, FRONT] {
        scene.add(Box::new(Plane::new(
            Point3::new(LEFT, FLOOR, z),
            Point3::new(RIGHT, FLOOR, z),
            Point3::new(RIGHT, CEILING, z),
            Point3::new(LEFT, CEILING, z),
            mirror(),
        )));
    }

    scene.add(Box::new(Plane::new(
        Point3::new(LEFT, CEILING, BACK),
        Point3::new(RIGHT, CEILING, BACK),
        Point3::new(RIGHT, CEILING, FRONT),
        Point3::new(LEFT, CEILING, FRONT),
        Material::new(Color::new(1.0, 0.0, 0.0)),
    )));

    scene.add(Box::new(Cylinder::new(
        Point3::new(20.0, FLOOR, -120.0),
        4.0,
        8.0,
        Material::new(Color::new(0.5, 0.5, 0.5)),
    )));

    scene.add(Box::new(Plane::new(
        Point3::new(RIGHT, CEILING, FRONT),
        Point3::new(RIGHT, CEILING, BACK),
        Point3::new(RIGHT, FLOOR, BACK),
        Point3::new(RIGHT, FLOOR, FRONT),
        Material::new(Color::new(1.0, 1.0, 0.0)),
    )));

    debug!("Scene built with {} primitives", scene.len());
    scene
}

/// Trace one primary ray per grid cell, in parallel.
fn render(tracer: &Tracer, view: &ViewPlane) -> (HdrImage, TraceStats) {
    let n = view.divisions();
    info!("Tracing {}x{} cells using {} CPU cores...", n, n, rayon::current_num_threads());

    let pb = ProgressBar::new((n as u64) * (n as u64));
    if let Ok(style) = ProgressStyle::default_bar().template("{bar:40} {pos}/{len} ETA: {eta}") {
        pb.set_style(style);
    }

    let pixels: Vec<(Color, TraceStats)> = (0..n * n)
        .into_par_iter()
        .map(|index| {
            let ray = view.pixel_ray(index % n, index / n);
            let traced = tracer.trace_with_stats(&ray, 1);
            pb.inc(1);
            traced
        })
        .collect();
    pb.finish();

    let stats = pixels
        .iter()
        .fold(TraceStats::default(), |acc, (_, stats)| acc.merge(*stats));
    let image = ImageBuffer::from_fn(n, n, |x, y| {
        let (color, _) = pixels[(y * n + x) as usize];
        Rgb([color.x() as f32, color.y() as f32, color.z() as f32])
    });

    (image, stats)
}

fn main() -> Result<()> {
    #[cfg(feature = "dhat-heap")]
    let _profiler = dhat::Profiler::new_heap();

    let args = Args::parse();
    init_logger(args.debug_level.into());

    let start = Instant::now();
    let scene = create_scene();
    let tracer = Tracer::new(&scene, args.max_depth);
    let view = ViewPlane::new(Point3::zero(), X_RANGE, Y_RANGE, EYE_DISTANCE, args.divisions);
    info!(
        "Rendering {} primitives, max depth {}",
        scene.len(),
        tracer.max_depth()
    );

    let (image, stats) = render(&tracer, &view);
    info!(
        "Traced {} rays, deepest recursion {} in {:.2?}",
        stats.rays,
        stats.max_depth,
        start.elapsed()
    );

    save_image_as_png(&image, &args.output)
}
