use core::fmt::Display;

use margay_math::*;

/// Plane containing every point `p` for which `normal . p + dist == 0`
#[derive(Clone, Copy, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Plane<T: Real> {
    #[cfg_attr(feature = "serde", serde(rename = "Normal"))]
    pub normal : Vec3<T>,
    #[cfg_attr(feature = "serde", serde(rename = "D"))]
    pub dist   : T,
}

impl<T: Real> Plane<T> {
    /// Create a new plane
    #[inline]
    #[must_use]
    pub fn new(normal: Vec3<T>, dist: T) -> Self {
        Self { normal, dist }
    }

    /// Create a plane going through `point` with the given `normal`
    #[inline]
    #[must_use]
    pub fn from_point_normal(point: Vec3<T>, normal: Vec3<T>) -> Self {
        Self { normal, dist: -normal.dot(point) }
    }

    /// Create a plane going through 3 points, with the normal following the counter-clockwise winding of the points
    ///
    /// Fails when the points are collinear.
    pub fn from_points(a: Vec3<T>, b: Vec3<T>, c: Vec3<T>) -> Result<Self> {
        let normal = (b - a).cross(c - a)
            .normalized()
            .map_err(|_| Error::InvalidArgument("points are collinear"))?;
        Ok(Self::from_point_normal(a, normal))
    }

    /// Calculate the signed distance from a point to the plane, positive when the point is on the side the normal points to
    ///
    /// The result is in multiples of the length of the normal.
    #[inline]
    #[must_use]
    pub fn signed_distance(self, point: Vec3<T>) -> T {
        self.normal.dot(point) + self.dist
    }

    /// Check if a point is above the plane
    #[inline]
    #[must_use]
    pub fn is_above(self, point: Vec3<T>) -> bool {
        self.signed_distance(point) > T::zero()
    }

    /// Project a point onto the plane
    #[must_use]
    pub fn project_point(self, point: Vec3<T>) -> Vec3<T> {
        let len_sq = self.normal.len_sq();
        if len_sq == T::zero() {
            return point;
        }
        point - self.normal * (self.signed_distance(point) / len_sq)
    }

    /// Get a copy of the plane with a unit normal, fails if the normal has a length of 0
    pub fn normalized(self) -> Result<Self> {
        let len = self.normal.len();
        if len == T::zero() {
            return Err(Error::DivideByZero);
        }
        Ok(Self { normal: self.normal / len, dist: self.dist / len })
    }
}

impl<T: Real> ApproxEq for Plane<T> {
    type Epsilon = T;

    fn is_close_to(self, rhs: Self, epsilon: T) -> bool {
        self.normal.is_close_to(rhs.normal, epsilon) &&
        self.dist.is_close_to(rhs.dist, epsilon)
    }
}

impl<T: Real> Display for Plane<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_fmt(format_args!("{{ n: {}, d: {} }}", self.normal, self.dist))
    }
}

#[cfg(test)]
mod tests {
    use margay_math::*;
    use crate::*;

    #[test]
    fn signed_distance() {
        let plane = Plane::from_point_normal(Vec3::new(0.0f64, 2.0, 0.0), Vec3::unit_y());
        assert_eq!(plane.dist, -2.0);
        assert_eq!(plane.signed_distance(Vec3::new(5.0, 5.0, -1.0)), 3.0);
        assert_eq!(plane.signed_distance(Vec3::new(0.0, 0.0, 0.0)), -2.0);
        assert!(plane.is_above(Vec3::new(0.0, 2.5, 0.0)));
        assert!(!plane.is_above(Vec3::new(0.0, 2.0, 0.0)));
        assert_eq!(plane.project_point(Vec3::new(1.0, 7.0, 3.0)), Vec3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn from_points() {
        let plane = Plane::from_points(Vec3::new(0.0f64, 0.0, 1.0), Vec3::new(1.0, 0.0, 1.0), Vec3::new(0.0, 1.0, 1.0));
        assert_eq!(plane, Ok(Plane::new(Vec3::unit_z(), -1.0)));

        let collinear = Plane::from_points(Vec3::new(0.0f64, 0.0, 0.0), Vec3::new(1.0, 1.0, 1.0), Vec3::new(2.0, 2.0, 2.0));
        assert_eq!(collinear, Err(Error::InvalidArgument("points are collinear")));
    }

    #[test]
    fn normalized() {
        let plane = Plane::new(Vec3::new(0.0f64, 0.0, 2.0), 4.0);
        assert_eq!(plane.normalized(), Ok(Plane::new(Vec3::unit_z(), 2.0)));
        assert_eq!(Plane::new(Vec3::<f64>::zero(), 1.0).normalized(), Err(Error::DivideByZero));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_fields() {
        let plane = Plane::new(Vec3::unit_z(), -4.0f64);
        let json = serde_json::to_string(&plane).map_err(|err| err.to_string());
        assert_eq!(json.as_deref(), Ok(r#"{"Normal":{"X":0.0,"Y":0.0,"Z":1.0},"D":-4.0}"#));
        assert_eq!(json.and_then(|json| serde_json::from_str::<Plane<f64>>(&json).map_err(|err| err.to_string())), Ok(plane));
    }
}
