use core::fmt::Display;

use margay_math::*;

use crate::{Aabb, Aabb2D};

/// 3D oriented bounding box
///
/// The axes are expected to be orthonormal and the extents (half size along each axis) to be positive, neither is validated.
#[derive(Clone, Copy, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Obb<T: Real> {
    #[cfg_attr(feature = "serde", serde(rename = "Center"))]
    pub center  : Vec3<T>,
    #[cfg_attr(feature = "serde", serde(rename = "Axes"))]
    pub axes    : [Vec3<T>; 3],
    #[cfg_attr(feature = "serde", serde(rename = "Extents"))]
    pub extents : Vec3<T>,
}

impl<T: Real> Obb<T> {
    /// Create a new obb
    #[inline]
    #[must_use]
    pub fn new(center: Vec3<T>, axes: [Vec3<T>; 3], extents: Vec3<T>) -> Self {
        Self { center, axes, extents }
    }

    /// Create an obb covering the same volume as an aabb
    #[must_use]
    pub fn from_aabb(aabb: Aabb<T>) -> Self {
        Self { center: aabb.center(), axes: [Vec3::unit_x(), Vec3::unit_y(), Vec3::unit_z()], extents: aabb.extents() }
    }

    /// Get the extents as an array, indexed like `axes`
    #[inline]
    #[must_use]
    pub fn extent_array(self) -> [T; 3] {
        self.extents.to_array()
    }

    /// Convert a point to the local frame of the obb
    #[inline]
    #[must_use]
    pub fn to_local(self, point: Vec3<T>) -> Vec3<T> {
        let offset = point - self.center;
        Vec3::new(offset.dot(self.axes[0]), offset.dot(self.axes[1]), offset.dot(self.axes[2]))
    }

    /// Convert a point in the local frame of the obb back to world space
    #[inline]
    #[must_use]
    pub fn from_local(self, local: Vec3<T>) -> Vec3<T> {
        self.center + self.axes[0] * local.x + self.axes[1] * local.y + self.axes[2] * local.z
    }

    /// Check if the obb contains a point, points on the boundary are contained
    #[must_use]
    pub fn contains_point(self, point: Vec3<T>) -> bool {
        self.to_local(point).abs().all_le(self.extents)
    }

    /// Get the point in or on the obb that is closest to `point`
    #[must_use]
    pub fn closest_point(self, point: Vec3<T>) -> Vec3<T> {
        let local = self.to_local(point).clamp(-self.extents, self.extents);
        self.from_local(local)
    }

    /// Calculate the volume of the obb
    #[inline]
    #[must_use]
    pub fn volume(self) -> T {
        T::from_i32(8) * self.extents.x * self.extents.y * self.extents.z
    }

    /// Get the 8 corners of the obb
    #[must_use]
    pub fn vertices(self) -> [Vec3<T>; 8] {
        let one = T::one();
        let mut vertices = [self.center; 8];
        for (idx, vertex) in vertices.iter_mut().enumerate() {
            let x = if idx & 1 == 0 { -one } else { one };
            let y = if idx & 2 == 0 { -one } else { one };
            let z = if idx & 4 == 0 { -one } else { one };
            *vertex = self.from_local(Vec3::new(x, y, z) * self.extents);
        }
        vertices
    }
}

impl<T: Real> From<Aabb<T>> for Obb<T> {
    fn from(aabb: Aabb<T>) -> Self {
        Self::from_aabb(aabb)
    }
}

impl<T: Real> ApproxEq for Obb<T> {
    type Epsilon = T;

    fn is_close_to(self, rhs: Self, epsilon: T) -> bool {
        self.center.is_close_to(rhs.center, epsilon) &&
        self.axes.iter().zip(rhs.axes.iter()).all(|(a, b)| a.is_close_to(*b, epsilon)) &&
        self.extents.is_close_to(rhs.extents, epsilon)
    }
}

impl<T: Real> Display for Obb<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_fmt(format_args!("{{ c: {}, axes: [{}, {}, {}], e: {} }}", self.center, self.axes[0], self.axes[1], self.axes[2], self.extents))
    }
}

//------------------------------------------------------------------------------------------------------------------------------

/// 2D oriented bounding box
///
/// The axes are expected to be orthonormal and the extents (half size along each axis) to be positive, neither is validated.
#[derive(Clone, Copy, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Obb2D<T: Real> {
    #[cfg_attr(feature = "serde", serde(rename = "Center"))]
    pub center  : Vec2<T>,
    #[cfg_attr(feature = "serde", serde(rename = "Axes"))]
    pub axes    : [Vec2<T>; 2],
    #[cfg_attr(feature = "serde", serde(rename = "Extents"))]
    pub extents : Vec2<T>,
}

impl<T: Real> Obb2D<T> {
    /// Create a new obb
    #[inline]
    #[must_use]
    pub fn new(center: Vec2<T>, axes: [Vec2<T>; 2], extents: Vec2<T>) -> Self {
        Self { center, axes, extents }
    }

    /// Create an obb rotated counter-clockwise by `angle` radians
    #[must_use]
    pub fn from_angle(center: Vec2<T>, angle: T, extents: Vec2<T>) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self { center, axes: [Vec2::new(cos, sin), Vec2::new(-sin, cos)], extents }
    }

    /// Create an obb covering the same area as an aabb
    #[must_use]
    pub fn from_aabb(aabb: Aabb2D<T>) -> Self {
        Self { center: aabb.center(), axes: [Vec2::new(T::one(), T::zero()), Vec2::new(T::zero(), T::one())], extents: aabb.extents() }
    }

    /// Convert a point to the local frame of the obb
    #[inline]
    #[must_use]
    pub fn to_local(self, point: Vec2<T>) -> Vec2<T> {
        let offset = point - self.center;
        Vec2::new(offset.dot(self.axes[0]), offset.dot(self.axes[1]))
    }

    /// Convert a point in the local frame of the obb back to world space
    #[inline]
    #[must_use]
    pub fn from_local(self, local: Vec2<T>) -> Vec2<T> {
        self.center + self.axes[0] * local.x + self.axes[1] * local.y
    }

    /// Check if the obb contains a point, points on the boundary are contained
    #[must_use]
    pub fn contains_point(self, point: Vec2<T>) -> bool {
        self.to_local(point).abs().all_le(self.extents)
    }

    /// Get the point in or on the obb that is closest to `point`
    #[must_use]
    pub fn closest_point(self, point: Vec2<T>) -> Vec2<T> {
        let local = self.to_local(point).clamp(-self.extents, self.extents);
        self.from_local(local)
    }

    /// Calculate the area of the obb
    #[inline]
    #[must_use]
    pub fn area(self) -> T {
        T::from_i32(4) * self.extents.x * self.extents.y
    }

    /// Get the 4 corners of the obb, in counter-clockwise order
    #[must_use]
    pub fn vertices(self) -> [Vec2<T>; 4] {
        let e = self.extents;
        [
            self.from_local(Vec2::new(-e.x, -e.y)),
            self.from_local(Vec2::new( e.x, -e.y)),
            self.from_local(Vec2::new( e.x,  e.y)),
            self.from_local(Vec2::new(-e.x,  e.y)),
        ]
    }
}

impl<T: Real> From<Aabb2D<T>> for Obb2D<T> {
    fn from(aabb: Aabb2D<T>) -> Self {
        Self::from_aabb(aabb)
    }
}

impl<T: Real> ApproxEq for Obb2D<T> {
    type Epsilon = T;

    fn is_close_to(self, rhs: Self, epsilon: T) -> bool {
        self.center.is_close_to(rhs.center, epsilon) &&
        self.axes[0].is_close_to(rhs.axes[0], epsilon) &&
        self.axes[1].is_close_to(rhs.axes[1], epsilon) &&
        self.extents.is_close_to(rhs.extents, epsilon)
    }
}

impl<T: Real> Display for Obb2D<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_fmt(format_args!("{{ c: {}, axes: [{}, {}], e: {} }}", self.center, self.axes[0], self.axes[1], self.extents))
    }
}
