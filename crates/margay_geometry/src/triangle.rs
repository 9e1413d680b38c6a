use core::fmt::Display;

use margay_math::*;

use crate::Plane;

/// Triangle, the front face is the side the points wind counter-clockwise around
#[derive(Clone, Copy, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Triangle<T: Real> {
    #[cfg_attr(feature = "serde", serde(rename = "A"))]
    pub a : Vec3<T>,
    #[cfg_attr(feature = "serde", serde(rename = "B"))]
    pub b : Vec3<T>,
    #[cfg_attr(feature = "serde", serde(rename = "C"))]
    pub c : Vec3<T>,
}

impl<T: Real> Triangle<T> {
    /// Create a new triangle
    #[inline]
    #[must_use]
    pub fn new(a: Vec3<T>, b: Vec3<T>, c: Vec3<T>) -> Self {
        Self { a, b, c }
    }

    /// Get the points of the triangle
    #[inline]
    #[must_use]
    pub fn vertices(self) -> [Vec3<T>; 3] {
        [self.a, self.b, self.c]
    }

    /// Get the non-normalized normal, its length is twice the area of the triangle
    #[inline]
    #[must_use]
    pub fn normal(self) -> Vec3<T> {
        (self.b - self.a).cross(self.c - self.a)
    }

    /// Get the unit normal, fails for degenerate triangles
    #[inline]
    pub fn unit_normal(self) -> Result<Vec3<T>> {
        self.normal().normalized()
    }

    /// Get the centroid of the triangle
    #[inline]
    #[must_use]
    pub fn centroid(self) -> Vec3<T> {
        (self.a + self.b + self.c) / T::from_i32(3)
    }

    /// Calculate the area of the triangle
    #[inline]
    #[must_use]
    pub fn area(self) -> T {
        self.normal().len() / T::from_i32(2)
    }

    /// Get the point with barycentric weights `u` for `b` and `v` for `c` (and `1 - u - v` for `a`)
    #[inline]
    #[must_use]
    pub fn from_barycentric(self, u: T, v: T) -> Vec3<T> {
        self.a * (T::one() - u - v) + self.b * u + self.c * v
    }

    /// Get the plane the triangle lies in, fails for degenerate triangles
    pub fn plane(self) -> Result<Plane<T>> {
        Plane::from_points(self.a, self.b, self.c)
    }
}

impl<T: Real> ApproxEq for Triangle<T> {
    type Epsilon = T;

    fn is_close_to(self, rhs: Self, epsilon: T) -> bool {
        self.a.is_close_to(rhs.a, epsilon) &&
        self.b.is_close_to(rhs.b, epsilon) &&
        self.c.is_close_to(rhs.c, epsilon)
    }
}

impl<T: Real> Display for Triangle<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_fmt(format_args!("{{ a: {}, b: {}, c: {} }}", self.a, self.b, self.c))
    }
}

#[cfg(test)]
mod tests {
    use margay_math::*;
    use crate::*;

    fn right_triangle() -> Triangle<f64> {
        Triangle::new(Vec3::new(0.0, 0.0, 0.0), Vec3::new(3.0, 0.0, 0.0), Vec3::new(0.0, 3.0, 0.0))
    }

    #[test]
    fn properties() {
        let tri = right_triangle();
        assert_eq!(tri.normal(), Vec3::new(0.0, 0.0, 9.0));
        assert_eq!(tri.unit_normal(), Ok(Vec3::unit_z()));
        assert_eq!(tri.area(), 4.5);
        assert_eq!(tri.centroid(), Vec3::new(1.0, 1.0, 0.0));
        assert_eq!(tri.plane(), Ok(Plane::new(Vec3::unit_z(), 0.0)));
    }

    #[test]
    fn barycentric() {
        let tri = right_triangle();
        assert_eq!(tri.from_barycentric(0.0, 0.0), tri.a);
        assert_eq!(tri.from_barycentric(1.0, 0.0), tri.b);
        assert_eq!(tri.from_barycentric(0.0, 1.0), tri.c);
        assert!(tri.from_barycentric(1.0 / 3.0, 1.0 / 3.0).is_close_to(tri.centroid(), 1e-12));
    }

    #[test]
    fn degenerate() {
        let tri = Triangle::new(Vec3::new(0.0f64, 0.0, 0.0), Vec3::new(1.0, 1.0, 1.0), Vec3::new(2.0, 2.0, 2.0));
        assert_eq!(tri.area(), 0.0);
        assert_eq!(tri.unit_normal(), Err(Error::DivideByZero));
        assert!(tri.plane().is_err());
    }
}
