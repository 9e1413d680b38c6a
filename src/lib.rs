//! Margay: linear algebra, geometry and numerical calculus.
//!
//! The functionality lives in the member crates, which are re-exported here:
//! - [`math`]: numeric traits, vectors, matrices, quaternions and complex numbers
//! - [`geometry`]: rays, planes, bounding volumes and the distance and intersection queries between them
//! - [`calculus`]: one variable functions with pluggable integration and differentiation

pub use margay_math as math;
pub use margay_geometry as geometry;
pub use margay_calculus as calculus;

/// Everything needed for day-to-day use, in a single import
pub mod prelude {
    pub use margay_math::*;
    pub use margay_geometry::*;
    pub use margay_calculus::*;
}
