//! # Tenor Math
//!
//! Numerical utilities for the Tenor fixed income analytics library:
//!
//! - **Root finding**: Newton-Raphson, Brent, bisection, and automatic
//!   bracket expansion — the inversion engine behind every quoted-measure
//!   conversion
//! - **Interpolation**: linear and log-linear kernels used by the curve
//!   layer
//!
//! The solvers operate on plain `f64` closures so the pricing layer can pass
//! its pricing functional directly.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::similar_names)]
#![allow(clippy::float_cmp)]

pub mod error;
pub mod interpolation;
pub mod solvers;

pub use error::{MathError, MathResult};
pub use solvers::{brent, newton_raphson, SolverConfig, SolverResult};
