use core::fmt::Display;

use margay_math::*;

/// Sphere, the radius is expected to be positive
#[derive(Clone, Copy, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Sphere<T: Real> {
    #[cfg_attr(feature = "serde", serde(rename = "Center"))]
    pub center : Vec3<T>,
    #[cfg_attr(feature = "serde", serde(rename = "Radius"))]
    pub radius : T,
}

impl<T: Real> Sphere<T> {
    /// Create a new sphere
    #[inline]
    #[must_use]
    pub fn new(center: Vec3<T>, radius: T) -> Self {
        Self { center, radius }
    }

    /// Get the volume of the sphere
    #[inline]
    #[must_use]
    pub fn volume(self) -> T {
        T::from_i32(4) * self.radius * self.radius * self.radius * T::PI / T::from_i32(3)
    }

    /// Get the surface area of the sphere
    #[inline]
    #[must_use]
    pub fn surface_area(self) -> T {
        T::from_i32(4) * T::PI * self.radius * self.radius
    }

    /// Check if the sphere contains a point, points on the surface are contained
    #[inline]
    #[must_use]
    pub fn contains_point(self, point: Vec3<T>) -> bool {
        self.center.dist_sq(point) <= self.radius * self.radius
    }

    /// Check if the sphere fully contains another sphere
    #[inline]
    #[must_use]
    pub fn contains(self, other: Self) -> bool {
        self.center.dist(other.center) + other.radius <= self.radius
    }

    /// Get the point in or on the sphere that is closest to `point`
    #[must_use]
    pub fn closest_point(self, point: Vec3<T>) -> Vec3<T> {
        let offset = point - self.center;
        let dist = offset.len();
        if dist <= self.radius {
            point
        } else {
            self.center + offset * (self.radius / dist)
        }
    }

    /// Get the smallest sphere fitting both spheres
    #[must_use]
    pub fn merge(self, other: Self) -> Self {
        let dist = self.center.dist(other.center);

        if dist + other.radius <= self.radius {
            return self;
        } else if dist + self.radius <= other.radius {
            return other;
        }

        let radius = (dist + self.radius + other.radius) / T::from_i32(2);
        let theta = (radius - self.radius) / dist;
        Self { center: self.center.lerp(other.center, theta), radius }
    }
}

impl<T: Real> ApproxEq for Sphere<T> {
    type Epsilon = T;

    fn is_close_to(self, rhs: Self, epsilon: T) -> bool {
        self.center.is_close_to(rhs.center, epsilon) &&
        self.radius.is_close_to(rhs.radius, epsilon)
    }
}

impl<T: Real> Display for Sphere<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_fmt(format_args!("{{ c: {}, r: {} }}", self.center, self.radius))
    }
}

#[cfg(test)]
mod tests {
    use margay_math::*;
    use crate::*;

    #[test]
    fn measurements() {
        let sphere = Sphere::new(Vec3::zero(), 2.0f64);
        assert!(sphere.volume().is_close_to(32.0 / 3.0 * core::f64::consts::PI, 1e-12));
        assert!(sphere.surface_area().is_close_to(16.0 * core::f64::consts::PI, 1e-12));
    }

    #[test]
    fn points() {
        let sphere = Sphere::new(Vec3::new(1.0f64, 0.0, 0.0), 1.0);
        assert!(sphere.contains_point(Vec3::new(2.0, 0.0, 0.0)));
        assert!(!sphere.contains_point(Vec3::new(2.0, 0.1, 0.0)));
        assert_eq!(sphere.closest_point(Vec3::new(1.0, 5.0, 0.0)), Vec3::new(1.0, 1.0, 0.0));
        assert_eq!(sphere.closest_point(Vec3::new(1.5, 0.0, 0.0)), Vec3::new(1.5, 0.0, 0.0));
    }

    #[test]
    fn merge() {
        let a = Sphere::new(Vec3::new(0.0f64, 0.0, 0.0), 1.0);
        let b = Sphere::new(Vec3::new(4.0f64, 0.0, 0.0), 1.0);
        let merged = a.merge(b);
        assert_eq!(merged, Sphere::new(Vec3::new(2.0, 0.0, 0.0), 3.0));
        assert!(merged.contains(a) && merged.contains(b));

        let inner = Sphere::new(Vec3::new(0.5f64, 0.0, 0.0), 0.25);
        assert_eq!(a.merge(inner), a);
        assert_eq!(inner.merge(a), a);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_fields() {
        let sphere = Sphere::new(Vec3::new(0.0f64, 1.0, 0.0), 2.5);
        let json = serde_json::to_string(&sphere).map_err(|err| err.to_string());
        assert_eq!(json.as_deref(), Ok(r#"{"Center":{"X":0.0,"Y":1.0,"Z":0.0},"Radius":2.5}"#));
        assert_eq!(json.and_then(|json| serde_json::from_str::<Sphere<f64>>(&json).map_err(|err| err.to_string())), Ok(sphere));
    }
}
