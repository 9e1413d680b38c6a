use core::fmt;

use margay_math::*;

use crate::{Differentiator, Integrator};

const LOG_CAT: &str = "margay::calculus::function";

/// Scalar function of one variable, with optional strategies to integrate and differentiate it.
///
/// The function itself is fixed at construction, the strategies can be swapped at any time.
pub struct OneVariableFunction<T: Real> {
    func           : Box<dyn Fn(T) -> T + Send + Sync>,
    integrator     : Option<Box<dyn Integrator<T>>>,
    differentiator : Option<Box<dyn Differentiator<T>>>,
}

impl<T: Real> OneVariableFunction<T> {
    /// Create a function without any strategies
    #[must_use]
    pub fn new<F>(func: F) -> Self
    where
        F: Fn(T) -> T + Send + Sync + 'static
    {
        Self { func: Box::new(func), integrator: None, differentiator: None }
    }

    /// Set the integrator and return the function, for chained construction
    #[must_use]
    pub fn with_integrator<I: Integrator<T> + 'static>(mut self, integrator: I) -> Self {
        self.set_integrator(integrator);
        self
    }

    /// Set the differentiator and return the function, for chained construction
    #[must_use]
    pub fn with_differentiator<D: Differentiator<T> + 'static>(mut self, differentiator: D) -> Self {
        self.set_differentiator(differentiator);
        self
    }

    /// Evaluate the function at `x`
    #[inline]
    pub fn evaluate(&self, x: T) -> T {
        (self.func)(x)
    }

    /// Get the current integrator
    pub fn integrator(&self) -> Option<&dyn Integrator<T>> {
        self.integrator.as_deref()
    }

    /// Replace the integrator
    pub fn set_integrator<I: Integrator<T> + 'static>(&mut self, integrator: I) {
        self.integrator = Some(Box::new(integrator));
    }

    /// Remove the integrator and return it
    pub fn take_integrator(&mut self) -> Option<Box<dyn Integrator<T>>> {
        self.integrator.take()
    }

    /// Get the current differentiator
    pub fn differentiator(&self) -> Option<&dyn Differentiator<T>> {
        self.differentiator.as_deref()
    }

    /// Replace the differentiator
    pub fn set_differentiator<D: Differentiator<T> + 'static>(&mut self, differentiator: D) {
        self.differentiator = Some(Box::new(differentiator));
    }

    /// Remove the differentiator and return it
    pub fn take_differentiator(&mut self) -> Option<Box<dyn Differentiator<T>>> {
        self.differentiator.take()
    }

    /// Integrate the function over `[lower, upper]` with the current integrator
    pub fn integrate(&self, lower: T, upper: T) -> Result<T> {
        match &self.integrator {
            Some(integrator) => integrator.integrate(&*self.func, lower, upper),
            None => {
                log::debug!(target: LOG_CAT, "integration requested without an integrator");
                Err(Error::MissingStrategy("integration"))
            },
        }
    }

    /// Differentiate the function at `x` with the current differentiator
    pub fn differentiate(&self, x: T) -> Result<T> {
        match &self.differentiator {
            Some(differentiator) => differentiator.differentiate(&*self.func, x),
            None => {
                log::debug!(target: LOG_CAT, "differentiation requested without a differentiator");
                Err(Error::MissingStrategy("differentiation"))
            },
        }
    }
}

impl<T: Real> fmt::Debug for OneVariableFunction<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OneVariableFunction")
            .field("integrator", &self.integrator.is_some())
            .field("differentiator", &self.differentiator.is_some())
            .finish_non_exhaustive()
    }
}
