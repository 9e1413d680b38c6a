use margay_math::*;

use crate::*;

macro_rules! impl_symmetric_intersect {
    ($lhs:ident, $rhs:ident) => {
        impl<T: Real> Intersect<$lhs<T>> for $rhs<T> {
            type Output = <$lhs<T> as Intersect<$rhs<T>>>::Output;

            #[inline]
            fn intersect(&self, rhs: &$lhs<T>) -> Self::Output {
                rhs.intersect(self)
            }
        }
    };
}

//------------------------------------------------------------------------------------------------------------------------------
// Containment
//------------------------------------------------------------------------------------------------------------------------------

macro_rules! impl_aabb_containment {
    ($ty:ident) => {
        impl<T: Real> Intersect for $ty<T> {
            type Output = Containment;

            fn intersect(&self, rhs: &Self) -> Containment {
                if !(self.min.all_le(rhs.max) && rhs.min.all_le(self.max)) {
                    Containment::None
                } else if (rhs.min.all_gt(self.min) && rhs.max.all_lt(self.max)) ||
                          (self.min.all_gt(rhs.min) && self.max.all_lt(rhs.max))
                {
                    Containment::Contained
                } else {
                    Containment::Partial
                }
            }
        }
    };
}
impl_aabb_containment!(Aabb);
impl_aabb_containment!(Aabb2D);

//------------------------------------------------------------------------------------------------------------------------------
// Overlap
//------------------------------------------------------------------------------------------------------------------------------

impl<T: Real> Intersect for Sphere<T> {
    type Output = bool;

    fn intersect(&self, rhs: &Self) -> bool {
        let radii = self.radius + rhs.radius;
        self.center.dist_sq(rhs.center) <= radii * radii
    }
}

impl<T: Real> Intersect<Aabb<T>> for Sphere<T> {
    type Output = bool;

    fn intersect(&self, rhs: &Aabb<T>) -> bool {
        rhs.distance_sq(&self.center) <= self.radius * self.radius
    }
}
impl_symmetric_intersect!(Sphere, Aabb);

impl<T: Real> Intersect<Obb<T>> for Sphere<T> {
    type Output = bool;

    fn intersect(&self, rhs: &Obb<T>) -> bool {
        rhs.distance_sq(&self.center) <= self.radius * self.radius
    }
}
impl_symmetric_intersect!(Sphere, Obb);

impl<T: Real> Intersect for Obb<T> {
    type Output = bool;

    // Separating axis test over the 3 axes of each box and the 9 cross products between them
    fn intersect(&self, rhs: &Self) -> bool {
        let a_ext = self.extent_array();
        let b_ext = rhs.extent_array();

        // Rotation of `rhs` expressed in the frame of `self`
        let mut rot = [[T::zero(); 3]; 3];
        let mut abs_rot = [[T::zero(); 3]; 3];
        for i in 0..3 {
            for j in 0..3 {
                rot[i][j] = self.axes[i].dot(rhs.axes[j]);
                // Padded for near-parallel edges, whose cross product is close to null
                abs_rot[i][j] = rot[i][j].abs() + T::EPSILON;
            }
        }

        let offset = rhs.center - self.center;
        let t = [offset.dot(self.axes[0]), offset.dot(self.axes[1]), offset.dot(self.axes[2])];

        for i in 0..3 {
            let ra = a_ext[i];
            let rb = b_ext[0] * abs_rot[i][0] + b_ext[1] * abs_rot[i][1] + b_ext[2] * abs_rot[i][2];
            if t[i].abs() > ra + rb {
                return false;
            }
        }

        for j in 0..3 {
            let ra = a_ext[0] * abs_rot[0][j] + a_ext[1] * abs_rot[1][j] + a_ext[2] * abs_rot[2][j];
            let rb = b_ext[j];
            let dist = t[0] * rot[0][j] + t[1] * rot[1][j] + t[2] * rot[2][j];
            if dist.abs() > ra + rb {
                return false;
            }
        }

        for i in 0..3 {
            let (i1, i2) = ((i + 1) % 3, (i + 2) % 3);
            for j in 0..3 {
                let (j1, j2) = ((j + 1) % 3, (j + 2) % 3);
                let ra = a_ext[i1] * abs_rot[i2][j] + a_ext[i2] * abs_rot[i1][j];
                let rb = b_ext[j1] * abs_rot[i][j2] + b_ext[j2] * abs_rot[i][j1];
                let dist = t[i2] * rot[i1][j] - t[i1] * rot[i2][j];
                if dist.abs() > ra + rb {
                    return false;
                }
            }
        }

        true
    }
}

impl<T: Real> Intersect<Aabb<T>> for Obb<T> {
    type Output = bool;

    fn intersect(&self, rhs: &Aabb<T>) -> bool {
        self.intersect(&Obb::from_aabb(*rhs))
    }
}
impl_symmetric_intersect!(Obb, Aabb);

impl<T: Real> Intersect for Obb2D<T> {
    type Output = bool;

    // Separating axis test over the 2 axes of each box
    fn intersect(&self, rhs: &Self) -> bool {
        let offset = rhs.center - self.center;
        let project = |obb: &Obb2D<T>, axis: Vec2<T>| {
            obb.extents.x * obb.axes[0].dot(axis).abs() + obb.extents.y * obb.axes[1].dot(axis).abs()
        };

        self.axes.iter().chain(rhs.axes.iter()).all(|axis| {
            offset.dot(*axis).abs() <= project(self, *axis) + project(rhs, *axis)
        })
    }
}
