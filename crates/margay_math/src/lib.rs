//! Generic linear algebra for the margay workspace: numeric traits, vectors, matrices, quaternions and complex numbers.
//!
//! All value types are `Copy` and generic over their scalar, with `f32`/`f64` aliases (`f32v3`, `f64m4`, `f64quat`, ...).
//! Operators follow IEEE-754 semantics and never fail, the named `checked_*`, `normalize` and `inverse` operations
//! report degenerate input through [`Error`].

mod utils;

mod numeric;
pub use numeric::*;

mod constants;
pub use constants::*;

mod error;
pub use error::{Error, ParseErrorKind, Result};

mod parse;

pub mod scalar;

mod complex;
pub use complex::*;

mod vec;
pub use vec::*;

mod mat;
pub use mat::*;

mod quat;
pub use quat::*;
