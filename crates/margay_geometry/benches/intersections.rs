use criterion::{black_box, criterion_main, criterion_group, Criterion};

use margay_math::*;
use margay_geometry::*;

fn ray_benchmark(c: &mut Criterion) {
    let ray = Ray::new(Vec3::new(-5.0f32, 0.3, 0.4), Vec3::new(1.0, 0.1, 0.05));
    let aabb = Aabb::new(Vec3::new(0.0f32, 0.0, 0.0), Vec3::new(1.0, 1.0, 1.0));
    let obb = Obb::new(Vec3::new(0.5f32, 0.5, 0.5), [
        Quat::from_axis_angle(Vec3::unit_z(), 0.3f32).rotate(Vec3::unit_x()),
        Quat::from_axis_angle(Vec3::unit_z(), 0.3f32).rotate(Vec3::unit_y()),
        Vec3::unit_z(),
    ], Vec3::new(0.5, 0.5, 0.5));
    let sphere = Sphere::new(Vec3::new(0.5f32, 0.5, 0.5), 0.5);
    let tri = Triangle::new(Vec3::new(0.0f32, 0.0, 0.0), Vec3::new(0.0, 1.0, 0.0), Vec3::new(0.0, 0.0, 1.0));

    c.bench_function("ray: aabb", |bench| bench.iter(|| black_box(aabb).intersect_ray(black_box(&ray))));
    c.bench_function("ray: obb", |bench| bench.iter(|| black_box(obb).intersect_ray(black_box(&ray))));
    c.bench_function("ray: sphere", |bench| bench.iter(|| black_box(sphere).intersect_ray(black_box(&ray))));
    c.bench_function("ray: triangle", |bench| bench.iter(|| black_box(tri).intersect_ray(black_box(&ray))));
}

fn volume_benchmark(c: &mut Criterion) {
    let a = Aabb::new(Vec3::new(0.0f32, 0.0, 0.0), Vec3::new(1.0, 1.0, 1.0));
    let b = a.move_by(Vec3::new(0.5, 0.5, 0.5));
    let obb_a = Obb::from_aabb(a);
    let obb_b = Obb::new(Vec3::new(1.2f32, 0.8, 0.5), [
        Quat::from_axis_angle(Vec3::unit_y(), 0.7f32).rotate(Vec3::unit_x()),
        Vec3::unit_y(),
        Quat::from_axis_angle(Vec3::unit_y(), 0.7f32).rotate(Vec3::unit_z()),
    ], Vec3::new(0.5, 0.25, 0.5));
    let sphere = Sphere::new(Vec3::new(1.2f32, 1.2, 1.2), 0.5);

    c.bench_function("aabb: aabb", |bench| bench.iter(|| black_box(a).intersect(black_box(&b))));
    c.bench_function("obb: obb", |bench| bench.iter(|| black_box(obb_a).intersect(black_box(&obb_b))));
    c.bench_function("sphere: aabb", |bench| bench.iter(|| black_box(sphere).intersect(black_box(&a))));
    c.bench_function("triangle: closest point", |bench| {
        let tri = Triangle::new(Vec3::new(0.0f32, 0.0, 0.0), Vec3::new(2.0, 0.0, 0.0), Vec3::new(0.0, 2.0, 0.0));
        bench.iter(|| closest_point_on_triangle(black_box(tri), black_box(Vec3::new(1.5, 1.5, 1.0))))
    });
}

criterion_group!(intersections, ray_benchmark, volume_benchmark);
criterion_main!(intersections);
