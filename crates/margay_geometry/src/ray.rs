use core::fmt::Display;

use margay_math::*;

/// 3D ray, the direction does not need to be normalized
#[derive(Clone, Copy, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Ray<T: Real> {
    #[cfg_attr(feature = "serde", serde(rename = "Origin"))]
    pub orig : Vec3<T>,
    #[cfg_attr(feature = "serde", serde(rename = "Direction"))]
    pub dir  : Vec3<T>,
}

impl<T: Real> Ray<T> {
    /// Create a new ray
    #[inline]
    #[must_use]
    pub fn new(orig: Vec3<T>, dir: Vec3<T>) -> Self {
        Self { orig, dir }
    }

    /// Create a ray starting at `from`, going through `to`
    #[inline]
    #[must_use]
    pub fn from_points(from: Vec3<T>, to: Vec3<T>) -> Self {
        Self { orig: from, dir: to - from }
    }

    /// Get the point at a given distance on the ray, in multiples of the direction
    #[inline]
    #[must_use]
    pub fn point_at(self, t: T) -> Vec3<T> {
        self.orig + self.dir * t
    }

    /// Get the ray parameter of the point on the ray that is closest to `point`
    #[must_use]
    pub fn closest_t(self, point: Vec3<T>) -> T {
        let dir_len_sq = self.dir.len_sq();
        if dir_len_sq == T::zero() {
            return T::zero();
        }
        ((point - self.orig).dot(self.dir) / dir_len_sq).max(T::zero())
    }

    /// Get the point on the ray that is closest to `point`
    #[inline]
    #[must_use]
    pub fn closest_point(self, point: Vec3<T>) -> Vec3<T> {
        self.point_at(self.closest_t(point))
    }

    /// Get a copy of the ray with a normalized direction, fails if the direction has a length of 0
    pub fn normalized(self) -> Result<Self> {
        Ok(Self { orig: self.orig, dir: self.dir.normalized()? })
    }
}

impl<T: Real> ApproxEq for Ray<T> {
    type Epsilon = T;

    fn is_close_to(self, rhs: Self, epsilon: T) -> bool {
        self.orig.is_close_to(rhs.orig, epsilon) &&
        self.dir.is_close_to(rhs.dir, epsilon)
    }
}

impl<T: Real> Display for Ray<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_fmt(format_args!("{{ o: {}, d: {} }}", self.orig, self.dir))
    }
}

//------------------------------------------------------------------------------------------------------------------------------

/// 2D ray, the direction does not need to be normalized
#[derive(Clone, Copy, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Ray2D<T: Real> {
    #[cfg_attr(feature = "serde", serde(rename = "Origin"))]
    pub orig : Vec2<T>,
    #[cfg_attr(feature = "serde", serde(rename = "Direction"))]
    pub dir  : Vec2<T>,
}

impl<T: Real> Ray2D<T> {
    /// Create a new ray
    #[inline]
    #[must_use]
    pub fn new(orig: Vec2<T>, dir: Vec2<T>) -> Self {
        Self { orig, dir }
    }

    /// Get the point at a given distance on the ray, in multiples of the direction
    #[inline]
    #[must_use]
    pub fn point_at(self, t: T) -> Vec2<T> {
        self.orig + self.dir * t
    }

    /// Get the ray parameter of the point on the ray that is closest to `point`
    #[must_use]
    pub fn closest_t(self, point: Vec2<T>) -> T {
        let dir_len_sq = self.dir.len_sq();
        if dir_len_sq == T::zero() {
            return T::zero();
        }
        ((point - self.orig).dot(self.dir) / dir_len_sq).max(T::zero())
    }

    /// Get the point on the ray that is closest to `point`
    #[inline]
    #[must_use]
    pub fn closest_point(self, point: Vec2<T>) -> Vec2<T> {
        self.point_at(self.closest_t(point))
    }
}

impl<T: Real> ApproxEq for Ray2D<T> {
    type Epsilon = T;

    fn is_close_to(self, rhs: Self, epsilon: T) -> bool {
        self.orig.is_close_to(rhs.orig, epsilon) &&
        self.dir.is_close_to(rhs.dir, epsilon)
    }
}

impl<T: Real> Display for Ray2D<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_fmt(format_args!("{{ o: {}, d: {} }}", self.orig, self.dir))
    }
}
