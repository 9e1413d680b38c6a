//! Geometric primitives built on `margay_math`: rays, planes, bounding volumes, triangles and polygons,
//! together with distance queries and intersection tests between them.
//!
//! Rays are not required to have a normalized direction, hit distances are expressed in multiples of the direction.

mod ray;
pub use ray::*;

mod plane;
pub use plane::*;

mod aabb;
pub use aabb::*;

mod obb;
pub use obb::*;

mod sphere;
pub use sphere::*;

mod triangle;
pub use triangle::*;

mod polygon;
pub use polygon::*;

mod distance;
pub use distance::*;

mod intersections;
pub use intersections::*;

mod shape;
pub use shape::*;
