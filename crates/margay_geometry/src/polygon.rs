use core::ops::Index;

use margay_math::*;

/// Polygon, an ordered list of points where the last point connects back to the first
#[derive(Clone, PartialEq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Polygon<T: Real> {
    #[cfg_attr(feature = "serde", serde(rename = "Points"))]
    points : Vec<Vec3<T>>,
}

impl<T: Real> Polygon<T> {
    /// Create an empty polygon
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self { points: Vec::new() }
    }

    /// Create a polygon from its points
    #[inline]
    #[must_use]
    pub fn from_points(points: Vec<Vec3<T>>) -> Self {
        Self { points }
    }

    /// Get the number of points
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Check if the polygon has no points
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Get the points as a slice
    #[inline]
    #[must_use]
    pub fn points(&self) -> &[Vec3<T>] {
        &self.points
    }

    /// Get the point at `index`
    pub fn get(&self, index: usize) -> Result<Vec3<T>> {
        self.points.get(index).copied().ok_or(Error::IndexOutOfRange { index, len: self.points.len() })
    }

    /// Add a point to the end of the polygon
    #[inline]
    pub fn push(&mut self, point: Vec3<T>) {
        self.points.push(point);
    }

    /// Insert a point at `index`, shifting all points after it, `index` may be equal to the length
    pub fn insert(&mut self, index: usize, point: Vec3<T>) -> Result<()> {
        if index > self.points.len() {
            return Err(Error::IndexOutOfRange { index, len: self.points.len() });
        }
        self.points.insert(index, point);
        Ok(())
    }

    /// Remove the point at `index`, shifting all points after it
    pub fn remove(&mut self, index: usize) -> Result<Vec3<T>> {
        if index >= self.points.len() {
            return Err(Error::IndexOutOfRange { index, len: self.points.len() });
        }
        Ok(self.points.remove(index))
    }

    /// Remove all points
    #[inline]
    pub fn clear(&mut self) {
        self.points.clear();
    }

    /// Iterate over the points
    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, Vec3<T>> {
        self.points.iter()
    }

    /// Iterate over the edges as `(begin, end)` pairs, including the closing edge
    pub fn edges(&self) -> impl Iterator<Item = (Vec3<T>, Vec3<T>)> + '_ {
        let next = self.points.iter().cycle().skip(1);
        self.points.iter().zip(next).map(|(a, b)| (*a, *b))
    }

    /// Get the average of all points, fails if the polygon is empty
    pub fn centroid(&self) -> Result<Vec3<T>> {
        if self.points.is_empty() {
            return Err(Error::InvalidArgument("polygon has no points"));
        }
        let sum = self.points.iter().fold(Vec3::zero(), |acc, point| acc + *point);
        Ok(sum / T::from_usize(self.points.len()))
    }

    /// Calculate the length of the closed outline
    #[must_use]
    pub fn perimeter(&self) -> T {
        if self.points.len() < 2 {
            return T::zero();
        }
        self.edges().fold(T::zero(), |acc, (a, b)| acc + a.dist(b))
    }
}

impl<T: Real> Index<usize> for Polygon<T> {
    type Output = Vec3<T>;

    fn index(&self, index: usize) -> &Self::Output {
        &self.points[index]
    }
}

impl<T: Real> From<Vec<Vec3<T>>> for Polygon<T> {
    fn from(points: Vec<Vec3<T>>) -> Self {
        Self::from_points(points)
    }
}

impl<T: Real> FromIterator<Vec3<T>> for Polygon<T> {
    fn from_iter<I: IntoIterator<Item = Vec3<T>>>(iter: I) -> Self {
        Self { points: iter.into_iter().collect() }
    }
}

impl<'a, T: Real> IntoIterator for &'a Polygon<T> {
    type Item = &'a Vec3<T>;
    type IntoIter = core::slice::Iter<'a, Vec3<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

#[cfg(test)]
mod tests {
    use margay_math::*;
    use crate::*;

    fn square() -> Polygon<f64> {
        [
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(2.0, 0.0, 0.0),
            Vec3::new(2.0, 2.0, 0.0),
            Vec3::new(0.0, 2.0, 0.0),
        ].into_iter().collect()
    }

    #[test]
    fn edit() {
        let mut poly = Polygon::new();
        assert!(poly.is_empty());
        poly.push(Vec3::new(1.0f32, 0.0, 0.0));
        poly.push(Vec3::new(3.0, 0.0, 0.0));
        assert_eq!(poly.insert(1, Vec3::new(2.0, 0.0, 0.0)), Ok(()));
        assert_eq!(poly.insert(4, Vec3::zero()), Err(Error::IndexOutOfRange { index: 4, len: 3 }));
        assert_eq!(poly.len(), 3);
        assert_eq!(poly[1], Vec3::new(2.0, 0.0, 0.0));
        assert_eq!(poly.get(5), Err(Error::IndexOutOfRange { index: 5, len: 3 }));

        assert_eq!(poly.remove(0), Ok(Vec3::new(1.0, 0.0, 0.0)));
        assert_eq!(poly.remove(2), Err(Error::IndexOutOfRange { index: 2, len: 2 }));
        assert_eq!(poly.points(), &[Vec3::new(2.0, 0.0, 0.0), Vec3::new(3.0, 0.0, 0.0)]);

        poly.clear();
        assert!(poly.is_empty());
    }

    #[test]
    fn insertion_order() {
        let poly = square();
        let xs: Vec<f64> = poly.iter().map(|point| point.x).collect();
        assert_eq!(xs, vec![0.0, 2.0, 2.0, 0.0]);
        assert_eq!(poly.edges().count(), 4);
        assert_eq!(poly.edges().last(), Some((Vec3::new(0.0, 2.0, 0.0), Vec3::new(0.0, 0.0, 0.0))));
    }

    #[test]
    fn measurements() {
        let poly = square();
        assert_eq!(poly.centroid(), Ok(Vec3::new(1.0, 1.0, 0.0)));
        assert_eq!(poly.perimeter(), 8.0);
        assert_eq!(Polygon::<f64>::new().centroid(), Err(Error::InvalidArgument("polygon has no points")));
        assert_eq!(Polygon::from(vec![Vec3::new(1.0f64, 1.0, 1.0)]).perimeter(), 0.0);
    }
}
