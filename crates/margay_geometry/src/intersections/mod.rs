use margay_math::*;

mod ray_intersections;
mod volume_intersections;


/// Defines a shape that can be hit by a ray of type `R`
pub trait IntersectWithRay<R> {
    type Hit;

    /// Get the first hit of the ray with the shape, if any
    fn intersect_ray(&self, ray: &R) -> Option<Self::Hit>;
}

/// Defines an intersection test between 2 shapes
pub trait Intersect<Rhs = Self> {
    type Output;

    fn intersect(&self, rhs: &Rhs) -> Self::Output;
}

/// Hit of a 3D ray
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct RayHit<T: Real> {
    /// Distance along the ray, in multiples of the ray direction
    pub t     : T,
    pub point : Vec3<T>,
}

/// Hit of a 2D ray
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct RayHit2D<T: Real> {
    /// Distance along the ray, in multiples of the ray direction
    pub t     : T,
    pub point : Vec2<T>,
}

/// Hit of a ray with a triangle
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct TriangleHit<T: Real> {
    /// Distance along the ray, in multiples of the ray direction
    pub t     : T,
    /// Barycentric weight of the triangle's `b` point
    pub u     : T,
    /// Barycentric weight of the triangle's `c` point
    pub v     : T,
    pub point : Vec3<T>,
}

impl<T: Real> From<TriangleHit<T>> for RayHit<T> {
    fn from(hit: TriangleHit<T>) -> Self {
        Self { t: hit.t, point: hit.point }
    }
}

/// How 2 volumes overlap
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Containment {
    /// The volumes do not touch
    None,
    /// The volumes overlap or touch, but neither is strictly inside of the other
    Partial,
    /// One volume is strictly inside of the other
    Contained,
}

impl Containment {
    /// Check if the volumes touch in any way
    #[inline]
    #[must_use]
    pub fn intersects(self) -> bool {
        self != Containment::None
    }
}
