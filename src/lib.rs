//! Higher-order forward-mode automatic differentiation via truncated
//! multivariate Taylor series.
//!
//! A [`Series<F>`] carries the value of an expression together with all of
//! its mixed partial derivatives up to per-variable truncation orders.
//! Evaluating an ordinary numeric function on series inputs produces every
//! derivative in one pass:
//!
//! ```
//! use hodiff::Series;
//!
//! // d⁴/dx⁴ x⁴ at x = 2
//! let x = Series::variable(4, 2.0_f64);
//! let y = (&x * &x) * (&x * &x);
//! assert_eq!(y.derivative(&[4]), 24.0);
//!
//! // mixed partials: ∂²/∂x∂y of x·y at (3, 5)
//! let vars = Series::variables(&[1, 1], &[3.0, 5.0]);
//! let p = &vars[0] * &vars[1];
//! assert_eq!(p.derivative(&[1, 1]), 1.0);
//! ```
//!
//! Shapes are runtime values: variables of different truncation orders (and
//! different variable counts) mix in one expression, promoting to the common
//! shape on the fly. Write algorithms against the [`Real`] trait to run the
//! same code on plain floats and on series.

mod compose;
pub mod float;
mod functions;
pub mod ops;
pub mod real;
pub mod series;
pub mod shape;
mod traits;

pub use float::Float;
pub use real::Real;
pub use series::Series;
pub use shape::Shape;

/// Type alias for series over `f64`.
pub type Series64 = Series<f64>;
/// Type alias for series over `f32`.
pub type Series32 = Series<f32>;
