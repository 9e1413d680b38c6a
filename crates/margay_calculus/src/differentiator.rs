use margay_math::*;

/// Strategy that can differentiate a function at a point
pub trait Differentiator<T: Real> : Send + Sync {
    /// Approximate the derivative of `func` at `x`
    fn differentiate(&self, func: &dyn Fn(T) -> T, x: T) -> Result<T>;
}

/// Central finite difference, `(f(x + h) - f(x - h)) / 2h`
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct CentralDifference<T: Real> {
    step : T,
}

impl<T: Real> CentralDifference<T> {
    /// Step used by [`CentralDifference::new`]
    pub const DEFAULT_STEP: f64 = 1e-5;

    /// Create a central difference with the default step
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self { step: T::from_f64(Self::DEFAULT_STEP) }
    }

    /// Create a central difference with a custom step, which must be positive
    pub fn with_step(step: T) -> Result<Self> {
        if step.is_nan() || step <= T::zero() {
            return Err(Error::InvalidArgument("central difference needs a positive step"));
        }
        Ok(Self { step })
    }

    /// Get the step size
    #[inline]
    #[must_use]
    pub fn step(&self) -> T {
        self.step
    }
}

impl<T: Real> Default for CentralDifference<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Real + Send + Sync> Differentiator<T> for CentralDifference<T> {
    fn differentiate(&self, func: &dyn Fn(T) -> T, x: T) -> Result<T> {
        if x.is_nan() {
            return Err(Error::InvalidArgument("cannot differentiate at NaN"));
        }
        Ok((func(x + self.step) - func(x - self.step)) / (self.step * T::from_i32(2)))
    }
}

#[cfg(test)]
mod tests {
    use margay_math::*;
    use crate::*;

    #[test]
    fn polynomial() {
        let diff = CentralDifference::<f64>::new();
        assert_eq!(diff.step(), 1e-5);
        let cube = |x: f64| x * x * x;
        assert!(diff.differentiate(&cube, 2.0).is_ok_and(|val| val.is_close_to(12.0, 1e-6)));
        assert!(diff.differentiate(&cube, -1.0).is_ok_and(|val| val.is_close_to(3.0, 1e-6)));
    }

    #[test]
    fn trig() {
        let Ok(diff) = CentralDifference::with_step(1e-4f64) else {
            panic!("positive step should be accepted");
        };
        let mut rng = fastrand::Rng::with_seed(0x5eed);
        for _ in 0..32 {
            let x = rng.f64() * 6.0 - 3.0;
            let res = diff.differentiate(&f64::sin, x);
            assert!(res.is_ok_and(|val| val.is_close_to(x.cos(), 1e-7)));
        }
    }

    #[test]
    fn invalid_step() {
        assert!(matches!(CentralDifference::with_step(0.0f32), Err(Error::InvalidArgument(_))));
        assert!(matches!(CentralDifference::with_step(-1.0f32), Err(Error::InvalidArgument(_))));
        assert!(matches!(CentralDifference::with_step(f32::NAN), Err(Error::InvalidArgument(_))));
        assert!(matches!(CentralDifference::<f64>::new().differentiate(&|x| x, f64::NAN), Err(Error::InvalidArgument(_))));
    }
}
