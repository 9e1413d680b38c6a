//! Distance queries between points and shapes.
//!
//! Solid shapes (boxes, spheres) report a distance of 0 for points inside of them.

use margay_math::*;

use crate::*;

/// Defines the distance between 2 objects
pub trait Distance<Rhs = Self> {
    type Output: Real;

    /// Calculate the squared distance to `rhs`
    fn distance_sq(&self, rhs: &Rhs) -> Self::Output;

    /// Calculate the distance to `rhs`
    fn distance(&self, rhs: &Rhs) -> Self::Output {
        self.distance_sq(rhs).sqrt()
    }
}

/// Implement the query with the arguments swapped
macro_rules! impl_symmetric_distance {
    {$($lhs:ident<T> => $rhs:ident<T>),* $(,)?} => {
        $(
            impl<T: Real> Distance<$lhs<T>> for $rhs<T> {
                type Output = T;

                fn distance_sq(&self, rhs: &$lhs<T>) -> T {
                    rhs.distance_sq(self)
                }
            }
        )*
    };
}

//------------------------------------------------------------------------------------------------------------------------------
// 3D
//------------------------------------------------------------------------------------------------------------------------------

impl<T: Real> Distance for Vec3<T> {
    type Output = T;

    fn distance_sq(&self, rhs: &Self) -> T {
        self.dist_sq(*rhs)
    }
}

impl<T: Real> Distance<Vec3<T>> for Ray<T> {
    type Output = T;

    fn distance_sq(&self, point: &Vec3<T>) -> T {
        self.closest_point(*point).dist_sq(*point)
    }
}

impl<T: Real> Distance<Vec3<T>> for Plane<T> {
    type Output = T;

    /// The plane normal is expected to have a non-zero length
    fn distance_sq(&self, point: &Vec3<T>) -> T {
        let dist = self.signed_distance(*point);
        dist * dist / self.normal.len_sq()
    }
}

impl<T: Real> Distance<Vec3<T>> for Aabb<T> {
    type Output = T;

    fn distance_sq(&self, point: &Vec3<T>) -> T {
        self.closest_point(*point).dist_sq(*point)
    }
}

impl<T: Real> Distance<Vec3<T>> for Obb<T> {
    type Output = T;

    fn distance_sq(&self, point: &Vec3<T>) -> T {
        let local = self.to_local(*point);
        let excess = (local.abs() - self.extents).max(Vec3::zero());
        excess.len_sq()
    }
}

impl<T: Real> Distance<Vec3<T>> for Sphere<T> {
    type Output = T;

    fn distance_sq(&self, point: &Vec3<T>) -> T {
        let dist = (self.center.dist(*point) - self.radius).max(T::zero());
        dist * dist
    }
}

impl<T: Real> Distance<Vec3<T>> for Triangle<T> {
    type Output = T;

    fn distance_sq(&self, point: &Vec3<T>) -> T {
        closest_point_on_triangle(*self, *point).dist_sq(*point)
    }
}

impl<T: Real> Distance for Aabb<T> {
    type Output = T;

    fn distance_sq(&self, rhs: &Self) -> T {
        let gap = (self.min - rhs.max).max(rhs.min - self.max).max(Vec3::zero());
        gap.len_sq()
    }
}

impl<T: Real> Distance for Sphere<T> {
    type Output = T;

    fn distance_sq(&self, rhs: &Self) -> T {
        let dist = (self.center.dist(rhs.center) - self.radius - rhs.radius).max(T::zero());
        dist * dist
    }
}

impl_symmetric_distance!{
    Ray<T> => Vec3<T>,
    Plane<T> => Vec3<T>,
    Aabb<T> => Vec3<T>,
    Obb<T> => Vec3<T>,
    Sphere<T> => Vec3<T>,
    Triangle<T> => Vec3<T>,
}

/// Get the point on a triangle closest to `point`, by finding the voronoi region of the triangle the point is in
#[must_use]
pub fn closest_point_on_triangle<T: Real>(tri: Triangle<T>, point: Vec3<T>) -> Vec3<T> {
    let zero = T::zero();
    let ab = tri.b - tri.a;
    let ac = tri.c - tri.a;

    // Vertex region a
    let ap = point - tri.a;
    let d1 = ab.dot(ap);
    let d2 = ac.dot(ap);
    if d1 <= zero && d2 <= zero {
        return tri.a;
    }

    // Vertex region b
    let bp = point - tri.b;
    let d3 = ab.dot(bp);
    let d4 = ac.dot(bp);
    if d3 >= zero && d4 <= d3 {
        return tri.b;
    }

    // Edge region ab
    let vc = d1 * d4 - d3 * d2;
    if vc <= zero && d1 >= zero && d3 <= zero {
        let v = d1 / (d1 - d3);
        return tri.a + ab * v;
    }

    // Vertex region c
    let cp = point - tri.c;
    let d5 = ab.dot(cp);
    let d6 = ac.dot(cp);
    if d6 >= zero && d5 <= d6 {
        return tri.c;
    }

    // Edge region ac
    let vb = d5 * d2 - d1 * d6;
    if vb <= zero && d2 >= zero && d6 <= zero {
        let w = d2 / (d2 - d6);
        return tri.a + ac * w;
    }

    // Edge region bc
    let va = d3 * d6 - d5 * d4;
    if va <= zero && (d4 - d3) >= zero && (d5 - d6) >= zero {
        let w = (d4 - d3) / ((d4 - d3) + (d5 - d6));
        return tri.b + (tri.c - tri.b) * w;
    }

    // Face region
    let denom = va + vb + vc;
    if denom == zero {
        return tri.a;
    }
    tri.from_barycentric(vb / denom, vc / denom)
}

//------------------------------------------------------------------------------------------------------------------------------
// 2D
//------------------------------------------------------------------------------------------------------------------------------

impl<T: Real> Distance for Vec2<T> {
    type Output = T;

    fn distance_sq(&self, rhs: &Self) -> T {
        self.dist_sq(*rhs)
    }
}

impl<T: Real> Distance<Vec2<T>> for Ray2D<T> {
    type Output = T;

    fn distance_sq(&self, point: &Vec2<T>) -> T {
        self.closest_point(*point).dist_sq(*point)
    }
}

impl<T: Real> Distance<Vec2<T>> for Aabb2D<T> {
    type Output = T;

    fn distance_sq(&self, point: &Vec2<T>) -> T {
        self.closest_point(*point).dist_sq(*point)
    }
}

impl<T: Real> Distance<Vec2<T>> for Obb2D<T> {
    type Output = T;

    fn distance_sq(&self, point: &Vec2<T>) -> T {
        let local = self.to_local(*point);
        let excess = (local.abs() - self.extents).max(Vec2::zero());
        excess.len_sq()
    }
}

impl_symmetric_distance!{
    Ray2D<T> => Vec2<T>,
    Aabb2D<T> => Vec2<T>,
    Obb2D<T> => Vec2<T>,
}
