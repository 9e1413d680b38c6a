use margay_math::*;

use crate::*;

const LOG_CAT: &str = "margay::geometry::shape";

/// Any of the supported shapes, for collections of mixed shapes
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Shape<T: Real> {
    Aabb(Aabb<T>),
    Obb(Obb<T>),
    Sphere(Sphere<T>),
    Triangle(Triangle<T>),
    Polygon(Polygon<T>),
}

impl<T: Real> Shape<T> {
    /// Get the name of the kind of shape
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Shape::Aabb(_)     => "aabb",
            Shape::Obb(_)      => "obb",
            Shape::Sphere(_)   => "sphere",
            Shape::Triangle(_) => "triangle",
            Shape::Polygon(_)  => "polygon",
        }
    }

    /// Check if 2 volumes overlap, touching counts as overlapping.
    ///
    /// Triangles and polygons have no volume tests, so any pair including them results in [`Error::NotImplemented`].
    pub fn intersects(&self, other: &Shape<T>) -> Result<bool> {
        let res = match (self, other) {
            (Shape::Aabb(a), Shape::Aabb(b))     => a.intersect(b).intersects(),
            (Shape::Aabb(a), Shape::Obb(b))      => a.intersect(b),
            (Shape::Aabb(a), Shape::Sphere(b))   => a.intersect(b),
            (Shape::Obb(a), Shape::Aabb(b))      => a.intersect(b),
            (Shape::Obb(a), Shape::Obb(b))       => a.intersect(b),
            (Shape::Obb(a), Shape::Sphere(b))    => a.intersect(b),
            (Shape::Sphere(a), Shape::Aabb(b))   => a.intersect(b),
            (Shape::Sphere(a), Shape::Obb(b))    => a.intersect(b),
            (Shape::Sphere(a), Shape::Sphere(b)) => a.intersect(b),
            _ => {
                log::debug!(target: LOG_CAT, "no intersection test between a {} and a {}", self.kind(), other.kind());
                return Err(Error::NotImplemented("intersection test with a triangle or polygon"));
            },
        };
        Ok(res)
    }

    /// Get the distance along the ray to the first hit with the shape, if any.
    ///
    /// Polygons are expected to be planar and convex.
    pub fn intersect_ray(&self, ray: &Ray<T>) -> Result<Option<T>> {
        let t = match self {
            Shape::Aabb(aabb)    => aabb.intersect_ray(ray).map(|hit| hit.t),
            Shape::Obb(obb)      => obb.intersect_ray(ray).map(|hit| hit.t),
            Shape::Sphere(sphere) => sphere.intersect_ray(ray).map(|hit| hit.t),
            Shape::Triangle(tri) => tri.intersect_ray(ray).map(|hit| hit.t),
            Shape::Polygon(poly) => {
                if poly.len() < 3 {
                    return Err(Error::InvalidArgument("polygon needs at least 3 points"));
                }
                let first = poly[0];
                poly.points().windows(2).skip(1)
                    .filter_map(|pair| Triangle::new(first, pair[0], pair[1]).intersect_ray(ray))
                    .map(|hit| hit.t)
                    .reduce(|a, b| a.min(b))
            },
        };
        Ok(t)
    }

    /// Get the squared distance from a point to the shape, 0 when the point is inside
    pub fn distance_sq(&self, point: Vec3<T>) -> Result<T> {
        match self {
            Shape::Aabb(aabb)     => Ok(aabb.distance_sq(&point)),
            Shape::Obb(obb)       => Ok(obb.distance_sq(&point)),
            Shape::Sphere(sphere) => Ok(sphere.distance_sq(&point)),
            Shape::Triangle(tri)  => Ok(tri.distance_sq(&point)),
            Shape::Polygon(_)     => {
                log::debug!(target: LOG_CAT, "no distance query for a polygon");
                Err(Error::NotImplemented("distance to a polygon"))
            },
        }
    }
}

impl<T: Real> From<Aabb<T>> for Shape<T> {
    fn from(aabb: Aabb<T>) -> Self {
        Shape::Aabb(aabb)
    }
}

impl<T: Real> From<Obb<T>> for Shape<T> {
    fn from(obb: Obb<T>) -> Self {
        Shape::Obb(obb)
    }
}

impl<T: Real> From<Sphere<T>> for Shape<T> {
    fn from(sphere: Sphere<T>) -> Self {
        Shape::Sphere(sphere)
    }
}

impl<T: Real> From<Triangle<T>> for Shape<T> {
    fn from(tri: Triangle<T>) -> Self {
        Shape::Triangle(tri)
    }
}

impl<T: Real> From<Polygon<T>> for Shape<T> {
    fn from(poly: Polygon<T>) -> Self {
        Shape::Polygon(poly)
    }
}

#[cfg(test)]
mod tests {
    use margay_math::*;
    use crate::*;

    fn shapes() -> Vec<Shape<f64>> {
        vec![
            Aabb::new(Vec3::new(0.0, 0.0, 0.0), Vec3::new(2.0, 2.0, 2.0)).into(),
            Obb::from_aabb(Aabb::new(Vec3::new(1.0, 1.0, 1.0), Vec3::new(3.0, 3.0, 3.0))).into(),
            Sphere::new(Vec3::new(2.0, 2.0, 2.0), 1.0).into(),
        ]
    }

    #[test]
    fn volume_pairs() {
        let shapes = shapes();
        for a in &shapes {
            for b in &shapes {
                assert_eq!(a.intersects(b), Ok(true), "{} against {}", a.kind(), b.kind());
            }
        }

        let far: Shape<f64> = Sphere::new(Vec3::new(10.0, 10.0, 10.0), 1.0).into();
        for shape in &shapes {
            assert_eq!(shape.intersects(&far), Ok(false));
            assert_eq!(far.intersects(shape), Ok(false));
        }
    }

    #[test]
    fn unsupported_pairs() {
        let tri: Shape<f64> = Triangle::new(Vec3::zero(), Vec3::unit_x(), Vec3::unit_y()).into();
        let poly: Shape<f64> = Polygon::from_points(vec![Vec3::zero(), Vec3::unit_x(), Vec3::unit_y()]).into();

        for shape in shapes() {
            assert!(matches!(shape.intersects(&tri), Err(Error::NotImplemented(_))));
            assert!(matches!(poly.intersects(&shape), Err(Error::NotImplemented(_))));
        }
        assert!(matches!(tri.intersects(&poly), Err(Error::NotImplemented(_))));
        assert!(matches!(poly.distance_sq(Vec3::zero()), Err(Error::NotImplemented(_))));
    }

    #[test]
    fn ray_dispatch() {
        let ray = Ray::new(Vec3::new(-5.0, 0.5, 0.5), Vec3::unit_x());
        let shapes = shapes();
        assert_eq!(shapes[0].intersect_ray(&ray), Ok(Some(5.0)));
        assert_eq!(shapes[1].intersect_ray(&ray), Ok(None));
        assert_eq!(shapes[2].intersect_ray(&ray), Ok(None));

        let square: Shape<f64> = Polygon::from_points(vec![
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(0.0, 2.0, 0.0),
            Vec3::new(0.0, 2.0, 2.0),
            Vec3::new(0.0, 0.0, 2.0),
        ]).into();
        let lower = Ray::new(Vec3::new(-5.0, 1.5, 0.5), Vec3::unit_x());
        assert_eq!(square.intersect_ray(&lower), Ok(Some(5.0)));
        // Only hits the second triangle of the fan
        let upper = Ray::new(Vec3::new(-3.0, 0.5, 1.5), Vec3::unit_x());
        assert_eq!(square.intersect_ray(&upper), Ok(Some(3.0)));
        assert_eq!(square.intersect_ray(&Ray::new(Vec3::new(-3.0, 3.0, 1.0), Vec3::unit_x())), Ok(None));

        let line: Shape<f64> = Polygon::from_points(vec![Vec3::zero(), Vec3::unit_x()]).into();
        assert!(line.intersect_ray(&ray).is_err());
    }

    #[test]
    fn distance_dispatch() {
        let shapes = shapes();
        let point = Vec3::new(5.0, 2.0, 2.0);
        assert_eq!(shapes[0].distance_sq(point), Ok(9.0));
        assert_eq!(shapes[1].distance_sq(point), Ok(4.0));
        assert_eq!(shapes[2].distance_sq(point), Ok(4.0));

        let tri: Shape<f64> = Triangle::new(Vec3::zero(), Vec3::unit_x(), Vec3::unit_y()).into();
        assert_eq!(tri.distance_sq(Vec3::new(0.0, 0.0, 3.0)), Ok(9.0));
    }
}
