use margay_math::*;

const LOG_CAT: &str = "margay::calculus::integrator";

/// Strategy that can integrate a function over an interval
pub trait Integrator<T: Real> : Send + Sync {
    /// Integrate `func` over `[lower, upper]`, a reversed interval results in the negated integral
    fn integrate(&self, func: &dyn Fn(T) -> T, lower: T, upper: T) -> Result<T>;
}

fn check_bounds<T: Real>(lower: T, upper: T) -> Result<()> {
    if lower.is_nan() || upper.is_nan() {
        return Err(Error::InvalidArgument("integration bounds are NaN"));
    }
    Ok(())
}

//------------------------------------------------------------------------------------------------------------------------------

/// Composite Simpson's rule over an even number of equal subintervals
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct SimpsonIntegral {
    steps : usize,
}

impl SimpsonIntegral {
    /// Number of subintervals used by [`SimpsonIntegral::new`]
    pub const DEFAULT_STEPS: usize = 100;

    /// Create a Simpson integrator with the default number of steps
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self { steps: Self::DEFAULT_STEPS }
    }

    /// Create a Simpson integrator with a custom number of steps, which must be even and non-zero
    pub fn with_steps(steps: usize) -> Result<Self> {
        if steps == 0 || steps % 2 != 0 {
            return Err(Error::InvalidArgument("simpson's rule needs an even, non-zero number of steps"));
        }
        Ok(Self { steps })
    }

    /// Get the number of subintervals
    #[inline]
    #[must_use]
    pub fn steps(&self) -> usize {
        self.steps
    }
}

impl Default for SimpsonIntegral {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Real> Integrator<T> for SimpsonIntegral {
    fn integrate(&self, func: &dyn Fn(T) -> T, lower: T, upper: T) -> Result<T> {
        check_bounds(lower, upper)?;
        if lower > upper {
            return self.integrate(func, upper, lower).map(|res| -res);
        }

        log::trace!(target: LOG_CAT, "simpson integration over [{lower}, {upper}] in {} steps", self.steps);

        let step = (upper - lower) / T::from_usize(self.steps);
        let two = T::from_i32(2);
        let four = T::from_i32(4);

        let mut sum = func(lower) + func(upper);
        for i in 1..self.steps {
            let weight = if i % 2 == 1 { four } else { two };
            sum += weight * func(lower + step * T::from_usize(i));
        }
        Ok(sum * step / T::from_i32(3))
    }
}

//------------------------------------------------------------------------------------------------------------------------------

/// Composite trapezoidal rule over a number of equal subintervals
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct TrapezoidIntegral {
    steps : usize,
}

impl TrapezoidIntegral {
    /// Number of subintervals used by [`TrapezoidIntegral::new`]
    pub const DEFAULT_STEPS: usize = 100;

    /// Create a trapezoid integrator with the default number of steps
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self { steps: Self::DEFAULT_STEPS }
    }

    /// Create a trapezoid integrator with a custom number of steps, which must be non-zero
    pub fn with_steps(steps: usize) -> Result<Self> {
        if steps == 0 {
            return Err(Error::InvalidArgument("trapezoidal rule needs a non-zero number of steps"));
        }
        Ok(Self { steps })
    }

    /// Get the number of subintervals
    #[inline]
    #[must_use]
    pub fn steps(&self) -> usize {
        self.steps
    }
}

impl Default for TrapezoidIntegral {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Real> Integrator<T> for TrapezoidIntegral {
    fn integrate(&self, func: &dyn Fn(T) -> T, lower: T, upper: T) -> Result<T> {
        check_bounds(lower, upper)?;
        if lower > upper {
            return self.integrate(func, upper, lower).map(|res| -res);
        }

        log::trace!(target: LOG_CAT, "trapezoid integration over [{lower}, {upper}] in {} steps", self.steps);

        let step = (upper - lower) / T::from_usize(self.steps);
        let mut sum = (func(lower) + func(upper)) / T::from_i32(2);
        for i in 1..self.steps {
            sum += func(lower + step * T::from_usize(i));
        }
        Ok(sum * step)
    }
}

#[cfg(test)]
mod tests {
    use margay_math::*;
    use crate::*;

    fn square(x: f64) -> f64 {
        x * x
    }

    #[test]
    fn simpson_polynomial() {
        let simpson = SimpsonIntegral::new();
        assert_eq!(simpson.steps(), 100);

        let res = simpson.integrate(&square, 0.0, 3.0);
        assert!(res.is_ok_and(|val| val.is_close_to(9.0, 1e-6)));

        // Exact for cubics, even with few steps
        let coarse = SimpsonIntegral::with_steps(2);
        assert!(coarse.is_ok_and(|simpson| simpson.integrate(&|x: f64| x * x * x, 1.0, 3.0).is_ok_and(|val| val.is_close_to(20.0, 1e-12))));
    }

    #[test]
    fn simpson_reversed_bounds() {
        let simpson = SimpsonIntegral::new();
        let mut rng = fastrand::Rng::with_seed(0x5eed);
        for _ in 0..32 {
            let a = rng.f64() * 10.0 - 5.0;
            let b = a + rng.f64() * 5.0 + 0.01;
            let forward = simpson.integrate(&f64::sin, a, b);
            let backward = simpson.integrate(&f64::sin, b, a);
            assert_eq!(forward.map(|val| -val), backward);
        }

        assert_eq!(simpson.integrate(&square, 2.0, 2.0), Ok(0.0));
    }

    #[test]
    fn simpson_steps() {
        assert_eq!(SimpsonIntegral::with_steps(10).map(|simpson| simpson.steps()), Ok(10));
        assert!(matches!(SimpsonIntegral::with_steps(0), Err(Error::InvalidArgument(_))));
        assert!(matches!(SimpsonIntegral::with_steps(7), Err(Error::InvalidArgument(_))));
        assert_eq!(SimpsonIntegral::default(), SimpsonIntegral::new());
    }

    #[test]
    fn trapezoid() {
        let trapezoid = TrapezoidIntegral::new();
        let res = trapezoid.integrate(&square, 0.0, 3.0);
        assert!(res.is_ok_and(|val| val.is_close_to(9.0, 1e-3)));

        // Exact for linear functions
        let single = TrapezoidIntegral::with_steps(1);
        assert!(single.is_ok_and(|trapezoid| trapezoid.integrate(&|x: f64| 2.0 * x + 1.0, 0.0, 4.0) == Ok(20.0)));

        assert_eq!(trapezoid.integrate(&square, 3.0, 0.0), trapezoid.integrate(&square, 0.0, 3.0).map(|val| -val));
        assert!(matches!(TrapezoidIntegral::with_steps(0), Err(Error::InvalidArgument(_))));
    }

    #[test]
    fn nan_bounds() {
        let simpson = SimpsonIntegral::new();
        assert!(matches!(simpson.integrate(&square, f64::NAN, 1.0), Err(Error::InvalidArgument(_))));
        assert!(matches!(TrapezoidIntegral::new().integrate(&square, 0.0, f64::NAN), Err(Error::InvalidArgument(_))));
    }
}
