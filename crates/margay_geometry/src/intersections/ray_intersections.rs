use margay_math::*;

use crate::*;

const LOG_CAT: &str = "margay::geometry::intersections";

/// Intersect a ray with a set of slabs, returning the entry distance, or 0 when the origin is inside of all slabs
fn intersect_slabs<T: Real, const N: usize>(orig: [T; N], dir: [T; N], min: [T; N], max: [T; N]) -> Option<T> {
    let mut t_near = T::zero();
    let mut t_far = T::MAX;

    for axis in 0..N {
        if dir[axis] == T::zero() {
            // Parallel to the slab, so the origin needs to be in between its planes
            if orig[axis] < min[axis] || orig[axis] > max[axis] {
                return None;
            }
            continue;
        }

        let inv_dir = dir[axis].rcp();
        let t0 = (min[axis] - orig[axis]) * inv_dir;
        let t1 = (max[axis] - orig[axis]) * inv_dir;
        let (t0, t1) = if t0 > t1 { (t1, t0) } else { (t0, t1) };

        t_near = t_near.max(t0);
        t_far = t_far.min(t1);
        if t_near > t_far {
            return None;
        }
    }
    Some(t_near)
}

//------------------------------------------------------------------------------------------------------------------------------
// 3D
//------------------------------------------------------------------------------------------------------------------------------

//- 3D ray-plane intersection --------------------------------------------------------------------------------------------------

impl<T: Real> IntersectWithRay<Ray<T>> for Plane<T> {
    type Hit = RayHit<T>;

    fn intersect_ray(&self, ray: &Ray<T>) -> Option<RayHit<T>> {
        let denom = self.normal.dot(ray.dir);
        let orig_dist = self.signed_distance(ray.orig);

        // Tolerance relative to the lengths, so short directions are not mistaken for parallel ones
        if denom.abs() <= T::EPSILON * ray.dir.len() * self.normal.len() {
            log::trace!(target: LOG_CAT, "ray is parallel to plane {self}");
            // Only a ray lying in the plane touches it
            return orig_dist.is_zero().then_some(RayHit { t: T::zero(), point: ray.orig });
        }

        let t = -orig_dist / denom;
        if t < T::zero() {
            return None;
        }
        Some(RayHit { t, point: ray.point_at(t) })
    }
}

//- 3D ray-triangle intersection -----------------------------------------------------------------------------------------------

impl<T: Real> IntersectWithRay<Ray<T>> for Triangle<T> {
    type Hit = TriangleHit<T>;

    // Moller-Trumbore
    fn intersect_ray(&self, ray: &Ray<T>) -> Option<TriangleHit<T>> {
        let edge0 = self.b - self.a;
        let edge1 = self.c - self.a;

        let p = ray.dir.cross(edge1);
        let det = edge0.dot(p);
        if det.abs() <= T::EPSILON * ray.dir.len() * edge0.len() * edge1.len() {
            log::trace!(target: LOG_CAT, "ray is parallel to triangle {self}");
            return None;
        }
        let inv_det = det.rcp();

        let to_orig = ray.orig - self.a;
        let u = to_orig.dot(p) * inv_det;
        if u < T::zero() || u > T::one() {
            return None;
        }

        let q = to_orig.cross(edge0);
        let v = ray.dir.dot(q) * inv_det;
        if v < T::zero() || u + v > T::one() {
            return None;
        }

        let t = edge1.dot(q) * inv_det;
        if t < T::zero() {
            return None;
        }

        Some(TriangleHit { t, u, v, point: self.from_barycentric(u, v) })
    }
}

//- 3D ray-aabb intersection ---------------------------------------------------------------------------------------------------

impl<T: Real> IntersectWithRay<Ray<T>> for Aabb<T> {
    type Hit = RayHit<T>;

    fn intersect_ray(&self, ray: &Ray<T>) -> Option<RayHit<T>> {
        let t = intersect_slabs(ray.orig.to_array(), ray.dir.to_array(), self.min.to_array(), self.max.to_array())?;
        Some(RayHit { t, point: ray.point_at(t) })
    }
}

//- 3D ray-obb intersection ----------------------------------------------------------------------------------------------------

impl<T: Real> IntersectWithRay<Ray<T>> for Obb<T> {
    type Hit = RayHit<T>;

    fn intersect_ray(&self, ray: &Ray<T>) -> Option<RayHit<T>> {
        let local_orig = self.to_local(ray.orig);
        let local_dir = Vec3::new(ray.dir.dot(self.axes[0]), ray.dir.dot(self.axes[1]), ray.dir.dot(self.axes[2]));
        let t = intersect_slabs(local_orig.to_array(), local_dir.to_array(), (-self.extents).to_array(), self.extents.to_array())?;
        Some(RayHit { t, point: ray.point_at(t) })
    }
}

//- 3D ray-sphere intersection -------------------------------------------------------------------------------------------------

impl<T: Real> IntersectWithRay<Ray<T>> for Sphere<T> {
    type Hit = RayHit<T>;

    fn intersect_ray(&self, ray: &Ray<T>) -> Option<RayHit<T>> {
        let to_orig = ray.orig - self.center;
        let c = to_orig.len_sq() - self.radius * self.radius;

        // Origin inside of the sphere
        if c <= T::zero() {
            return Some(RayHit { t: T::zero(), point: ray.orig });
        }

        let a = ray.dir.len_sq();
        let b = to_orig.dot(ray.dir);
        // Outside and pointing away, or a degenerate direction
        if b > T::zero() || a == T::zero() {
            return None;
        }

        let discriminant = b * b - a * c;
        if discriminant < T::zero() {
            return None;
        }

        let t = (-b - discriminant.sqrt()) / a;
        Some(RayHit { t, point: ray.point_at(t) })
    }
}

//------------------------------------------------------------------------------------------------------------------------------
// 2D
//------------------------------------------------------------------------------------------------------------------------------

//- 2D ray-aabb intersection ---------------------------------------------------------------------------------------------------

impl<T: Real> IntersectWithRay<Ray2D<T>> for Aabb2D<T> {
    type Hit = RayHit2D<T>;

    fn intersect_ray(&self, ray: &Ray2D<T>) -> Option<RayHit2D<T>> {
        let t = intersect_slabs(ray.orig.to_array(), ray.dir.to_array(), self.min.to_array(), self.max.to_array())?;
        Some(RayHit2D { t, point: ray.point_at(t) })
    }
}

//- 2D ray-obb intersection ----------------------------------------------------------------------------------------------------

impl<T: Real> IntersectWithRay<Ray2D<T>> for Obb2D<T> {
    type Hit = RayHit2D<T>;

    fn intersect_ray(&self, ray: &Ray2D<T>) -> Option<RayHit2D<T>> {
        let local_orig = self.to_local(ray.orig);
        let local_dir = Vec2::new(ray.dir.dot(self.axes[0]), ray.dir.dot(self.axes[1]));
        let t = intersect_slabs(local_orig.to_array(), local_dir.to_array(), (-self.extents).to_array(), self.extents.to_array())?;
        Some(RayHit2D { t, point: ray.point_at(t) })
    }
}
