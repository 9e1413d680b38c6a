//! Numerical calculus for scalar functions of one variable.
//!
//! A [`OneVariableFunction`] wraps a function together with pluggable strategies for integration ([`Integrator`])
//! and differentiation ([`Differentiator`]), so the numerical method can be swapped without touching the function.

mod integrator;
pub use integrator::*;

mod differentiator;
pub use differentiator::*;

mod function;
pub use function::*;
