use core::fmt::Display;

use margay_math::*;

/// 3D axis-aligned bounding box, `min` is expected to be less or equal to `max` for every component
#[derive(Clone, Copy, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Aabb<T: Real> {
    #[cfg_attr(feature = "serde", serde(rename = "Min"))]
    pub min : Vec3<T>,
    #[cfg_attr(feature = "serde", serde(rename = "Max"))]
    pub max : Vec3<T>,
}

impl<T: Real> Aabb<T> {
    /// Create a new aabb
    #[inline]
    #[must_use]
    pub fn new(min: Vec3<T>, max: Vec3<T>) -> Self {
        Self { min, max }
    }

    /// Create an aabb from its center and its half size along each axis
    #[inline]
    #[must_use]
    pub fn from_center_extents(center: Vec3<T>, extents: Vec3<T>) -> Self {
        Self { min: center - extents, max: center + extents }
    }

    /// Create the smallest aabb containing all `points`, fails if there are no points
    pub fn from_points(points: &[Vec3<T>]) -> Result<Self> {
        let (first, rest) = points.split_first().ok_or(Error::InvalidArgument("no points to bound"))?;
        let init = Self { min: *first, max: *first };
        Ok(rest.iter().fold(init, |aabb, point| aabb.expand_to(*point)))
    }

    /// Get the center of the aabb
    #[inline]
    #[must_use]
    pub fn center(self) -> Vec3<T> {
        (self.min + self.max) / T::from_i32(2)
    }

    /// Get the half size of the aabb along each axis
    #[inline]
    #[must_use]
    pub fn extents(self) -> Vec3<T> {
        self.size() / T::from_i32(2)
    }

    /// Get the size of the aabb
    #[inline]
    #[must_use]
    pub fn size(self) -> Vec3<T> {
        self.max - self.min
    }

    /// Calculate the volume of the aabb
    #[inline]
    #[must_use]
    pub fn volume(self) -> T {
        let size = self.size();
        size.x * size.y * size.z
    }

    /// Get the 8 corners of the aabb
    #[must_use]
    pub fn vertices(self) -> [Vec3<T>; 8] {
        let (min, max) = (self.min, self.max);
        [
            Vec3::new(min.x, min.y, min.z),
            Vec3::new(max.x, min.y, min.z),
            Vec3::new(min.x, max.y, min.z),
            Vec3::new(max.x, max.y, min.z),
            Vec3::new(min.x, min.y, max.z),
            Vec3::new(max.x, min.y, max.z),
            Vec3::new(min.x, max.y, max.z),
            Vec3::new(max.x, max.y, max.z),
        ]
    }

    /// Check if the aabb contains a point, points on the boundary are contained
    #[inline]
    #[must_use]
    pub fn contains_point(self, point: Vec3<T>) -> bool {
        point.all_ge(self.min) && point.all_le(self.max)
    }

    /// Get the point in or on the aabb that is closest to `point`
    #[inline]
    #[must_use]
    pub fn closest_point(self, point: Vec3<T>) -> Vec3<T> {
        point.clamp(self.min, self.max)
    }

    /// Grow the aabb so it contains `point`
    #[inline]
    #[must_use]
    pub fn expand_to(self, point: Vec3<T>) -> Self {
        Self { min: self.min.min(point), max: self.max.max(point) }
    }

    /// Create the smallest aabb fitting both aabbs
    #[inline]
    #[must_use]
    pub fn merge(self, other: Self) -> Self {
        Self { min: self.min.min(other.min), max: self.max.max(other.max) }
    }

    /// Move the aabb by the given delta
    #[inline]
    #[must_use]
    pub fn move_by(self, delta: Vec3<T>) -> Self {
        Self { min: self.min + delta, max: self.max + delta }
    }
}

impl<T: Real> ApproxEq for Aabb<T> {
    type Epsilon = T;

    fn is_close_to(self, rhs: Self, epsilon: T) -> bool {
        self.min.is_close_to(rhs.min, epsilon) &&
        self.max.is_close_to(rhs.max, epsilon)
    }
}

impl<T: Real> Display for Aabb<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_fmt(format_args!("{{ min: {}, max: {} }}", self.min, self.max))
    }
}

//------------------------------------------------------------------------------------------------------------------------------

/// 2D axis-aligned bounding box, `min` is expected to be less or equal to `max` for every component
#[derive(Clone, Copy, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Aabb2D<T: Real> {
    #[cfg_attr(feature = "serde", serde(rename = "Min"))]
    pub min : Vec2<T>,
    #[cfg_attr(feature = "serde", serde(rename = "Max"))]
    pub max : Vec2<T>,
}

impl<T: Real> Aabb2D<T> {
    /// Create a new aabb
    #[inline]
    #[must_use]
    pub fn new(min: Vec2<T>, max: Vec2<T>) -> Self {
        Self { min, max }
    }

    /// Create an aabb from its center and its half size along each axis
    #[inline]
    #[must_use]
    pub fn from_center_extents(center: Vec2<T>, extents: Vec2<T>) -> Self {
        Self { min: center - extents, max: center + extents }
    }

    /// Get the center of the aabb
    #[inline]
    #[must_use]
    pub fn center(self) -> Vec2<T> {
        (self.min + self.max) / T::from_i32(2)
    }

    /// Get the half size of the aabb along each axis
    #[inline]
    #[must_use]
    pub fn extents(self) -> Vec2<T> {
        self.size() / T::from_i32(2)
    }

    /// Get the size of the aabb
    #[inline]
    #[must_use]
    pub fn size(self) -> Vec2<T> {
        self.max - self.min
    }

    /// Calculate the area of the aabb
    #[inline]
    #[must_use]
    pub fn area(self) -> T {
        let size = self.size();
        size.x * size.y
    }

    /// Get the 4 corners of the aabb, in counter-clockwise order
    #[must_use]
    pub fn vertices(self) -> [Vec2<T>; 4] {
        [
            self.min,
            Vec2::new(self.max.x, self.min.y),
            self.max,
            Vec2::new(self.min.x, self.max.y),
        ]
    }

    /// Check if the aabb contains a point, points on the boundary are contained
    #[inline]
    #[must_use]
    pub fn contains_point(self, point: Vec2<T>) -> bool {
        point.all_ge(self.min) && point.all_le(self.max)
    }

    /// Get the point in or on the aabb that is closest to `point`
    #[inline]
    #[must_use]
    pub fn closest_point(self, point: Vec2<T>) -> Vec2<T> {
        point.clamp(self.min, self.max)
    }

    /// Create the smallest aabb fitting both aabbs
    #[inline]
    #[must_use]
    pub fn merge(self, other: Self) -> Self {
        Self { min: self.min.min(other.min), max: self.max.max(other.max) }
    }
}

impl<T: Real> ApproxEq for Aabb2D<T> {
    type Epsilon = T;

    fn is_close_to(self, rhs: Self, epsilon: T) -> bool {
        self.min.is_close_to(rhs.min, epsilon) &&
        self.max.is_close_to(rhs.max, epsilon)
    }
}

impl<T: Real> Display for Aabb2D<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_fmt(format_args!("{{ min: {}, max: {} }}", self.min, self.max))
    }
}
