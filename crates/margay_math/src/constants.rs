use core::f64::consts;

/// Trait that defines common math constants
pub trait MathConsts {
    /// Minimum value
    const MIN : Self;
    /// Maximum value
    const MAX : Self;

    /// pi
    const PI : Self;
    /// 2 * pi
    const TWO_PI : Self;
    /// pi / 2
    const HALF_PI : Self;
    /// pi / 4
    const QUARTER_PI : Self;
    /// 1 / pi
    const ONE_OVER_PI : Self;

    /// sqrt(2)
    const ROOT_TWO : Self;
    /// 1 / sqrt(2)
    const ONE_OVER_ROOT_TWO : Self;
    /// sqrt(3)
    const ROOT_THREE : Self;

    /// Ln(2)
    const LN_TWO : Self;
    /// Ln(10)
    const LN_TEN : Self;

    /// 1 / 3
    const THIRD : Self;

    /// e
    const E : Self;

    /// pi / 180
    const DEG_TO_RAD : Self;
    /// 180 / pi
    const RAD_TO_DEG : Self;
}

// Every constant is rounded from its `f64` value, integers truncate (`PI` is 3 for an `i32`)
macro_rules! impl_math_constants {
    {$($ty:ty),*} => {
        $(
            impl MathConsts for $ty {
                const MIN               : $ty = <$ty>::MIN;
                const MAX               : $ty = <$ty>::MAX;

                const PI                : $ty = consts::PI as $ty;
                const TWO_PI            : $ty = consts::TAU as $ty;
                const HALF_PI           : $ty = consts::FRAC_PI_2 as $ty;
                const QUARTER_PI        : $ty = consts::FRAC_PI_4 as $ty;
                const ONE_OVER_PI       : $ty = consts::FRAC_1_PI as $ty;

                const ROOT_TWO          : $ty = consts::SQRT_2 as $ty;
                const ONE_OVER_ROOT_TWO : $ty = consts::FRAC_1_SQRT_2 as $ty;
                const ROOT_THREE        : $ty = 1.732050807568877293527446341505872367 as $ty;

                const LN_TWO            : $ty = consts::LN_2 as $ty;
                const LN_TEN            : $ty = consts::LN_10 as $ty;

                const THIRD             : $ty = (1.0 / 3.0) as $ty;

                const E                 : $ty = consts::E as $ty;

                const DEG_TO_RAD        : $ty = (consts::PI / 180.0) as $ty;
                const RAD_TO_DEG        : $ty = (180.0 / consts::PI) as $ty;
            }
        )*
    };
}

impl_math_constants!{ i8, i16, i32, i64, u8, u16, u32, u64, f32, f64 }

#[cfg(test)]
mod tests {
    use crate::*;

    #[test]
    fn float_constants() {
        assert_eq!(<f64 as MathConsts>::PI, core::f64::consts::PI);
        assert_eq!(<f32 as MathConsts>::E, core::f32::consts::E);
        assert!((<f64 as MathConsts>::DEG_TO_RAD * 180.0).is_close_to(core::f64::consts::PI, 1e-12));
        assert!((<f64 as MathConsts>::RAD_TO_DEG * core::f64::consts::FRAC_PI_2).is_close_to(90.0, 1e-12));
    }

    #[test]
    fn integer_constants() {
        assert_eq!(<i32 as MathConsts>::PI, 3);
        assert_eq!(<u8 as MathConsts>::MAX, 255);
    }
}
