//! Dynamic multivariate truncated series: `Series<F>`.
//!
//! A `Series` pairs a [`Shape`] with a flat, row-major coefficient buffer.
//! Coefficient `(i₀, …, i_{d-1})` is the normalized mixed partial
//! `∂^{i₀+…} f / (∂x₀^{i₀} ⋯ ∂x_{d-1}^{i_{d-1}})` divided by `i₀! ⋯ i_{d-1}!`.
//! `coeffs[0]` is the root: the value of `f` at the expansion point.
//!
//! Operands of different shapes promote automatically: the common shape is
//! the front-aligned elementwise maximum, and missing coefficients are zero.

use std::fmt::{self, Display};

use crate::ops;
use crate::shape::Shape;
use crate::Float;

/// Heap-allocated multivariate Taylor expansion.
///
/// Depth (number of dimensions) and per-dimension truncation orders are
/// runtime values, so variables of different orders mix freely in one
/// expression; results take the promoted shape.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Series<F: Float> {
    pub(crate) shape: Shape,
    pub(crate) coeffs: Vec<F>,
}

impl<F: Float> Default for Series<F> {
    fn default() -> Self {
        Series::constant(F::zero())
    }
}

impl<F: Float> Display for Series<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "depth({})(", self.depth())?;
        for (k, c) in self.coeffs.iter().enumerate() {
            if k > 0 {
                write!(f, ",")?;
            }
            write!(f, "{}", c)?;
        }
        write!(f, ")")
    }
}

impl<F: Float> From<F> for Series<F> {
    #[inline]
    fn from(val: F) -> Self {
        Series::constant(val)
    }
}

impl<F: Float> Series<F> {
    /// Create a series from a shape and raw coefficients.
    ///
    /// Panics if the coefficient count does not match the shape.
    pub fn from_coeffs(shape: Shape, coeffs: Vec<F>) -> Self {
        assert_eq!(
            coeffs.len(),
            shape.len(),
            "shape {} requires {} coefficients, got {}",
            shape,
            shape.len(),
            coeffs.len()
        );
        Series { shape, coeffs }
    }

    /// Create a depth-0 constant.
    #[inline]
    pub fn constant(val: F) -> Self {
        Series {
            shape: Shape::scalar(),
            coeffs: vec![val],
        }
    }

    /// Create a constant with the given shape: root = `val`, rest zero.
    pub fn constant_in(shape: Shape, val: F) -> Self {
        let mut coeffs = vec![F::zero(); shape.len()];
        coeffs[0] = val;
        Series { shape, coeffs }
    }

    /// Create a depth-1 variable of the given truncation order.
    ///
    /// Represents the identity function: root = `val`, first-order
    /// coefficient = 1, rest zero.
    pub fn variable(order: usize, val: F) -> Self {
        Series::axis_variable(0, order, val)
    }

    /// Create a variable seeded on dimension `dim` with `dim` leading
    /// order-0 dimensions.
    pub fn axis_variable(dim: usize, order: usize, val: F) -> Self {
        let mut orders = vec![0; dim];
        orders.push(order);
        let shape = Shape::new(orders);
        let mut coeffs = vec![F::zero(); shape.len()];
        coeffs[0] = val;
        if order > 0 {
            coeffs[1] = F::one();
        }
        Series { shape, coeffs }
    }

    /// Create one independent variable per entry, each seeded on its own
    /// dimension. Dimension 0 belongs to the first variable.
    ///
    /// Any arithmetic mixing the returned series promotes to the full
    /// multivariate shape, so mixed partials up to `orders[i]` in each
    /// variable survive.
    pub fn variables(orders: &[usize], values: &[F]) -> Vec<Series<F>> {
        assert_eq!(
            orders.len(),
            values.len(),
            "got {} orders for {} values",
            orders.len(),
            values.len()
        );
        orders
            .iter()
            .zip(values.iter())
            .enumerate()
            .map(|(dim, (&order, &val))| Series::axis_variable(dim, order, val))
            .collect()
    }

    /// The truncation shape.
    #[inline]
    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    /// Number of dimensions.
    #[inline]
    pub fn depth(&self) -> usize {
        self.shape.depth()
    }

    /// Highest total derivative order held.
    #[inline]
    pub fn order_sum(&self) -> usize {
        self.shape.order_sum()
    }

    /// Flat coefficient buffer, row-major, root first.
    #[inline]
    pub fn coeffs(&self) -> &[F] {
        &self.coeffs
    }

    /// The root: the underlying value at the expansion point.
    #[inline]
    pub fn root(&self) -> F {
        self.coeffs[0]
    }

    /// Overwrite the root, leaving derivative coefficients untouched.
    #[inline]
    pub fn set_root(&mut self, val: F) {
        self.coeffs[0] = val;
    }

    /// Copy of `self` with the root zeroed: the pure perturbation part.
    pub fn epsilon(&self) -> Series<F> {
        let mut e = self.clone();
        e.coeffs[0] = F::zero();
        e
    }

    /// Re-embed into a covering shape, zero-extending missing coefficients.
    ///
    /// Panics if `target` cannot hold every coefficient of `self`.
    pub fn promote_to(&self, target: &Shape) -> Series<F> {
        if self.shape == *target {
            return self.clone();
        }
        assert!(
            self.shape.fits_in(target),
            "cannot promote shape {} into {}",
            self.shape,
            target
        );
        let mut coeffs = vec![F::zero(); target.len()];
        ops::embed(self.shape.orders(), target.orders(), &self.coeffs, &mut coeffs);
        Series {
            shape: target.clone(),
            coeffs,
        }
    }

    /// Promote both operands to their common shape.
    pub(crate) fn promote_pair(&self, other: &Series<F>) -> (Series<F>, Series<F>) {
        let shape = self.shape.promote(&other.shape);
        (self.promote_to(&shape), other.promote_to(&shape))
    }

    /// Sub-series at a partial multi-index: fix the first `idx.len()`
    /// dimensions and keep the rest as a series.
    ///
    /// With a full index this is a depth-0 series holding one coefficient.
    /// Panics if any index exceeds its dimension's order.
    pub fn at(&self, idx: &[usize]) -> Series<F> {
        assert!(
            idx.len() <= self.depth(),
            "index has {} entries but shape has depth {}",
            idx.len(),
            self.depth()
        );
        let mut off = 0;
        for (d, &i) in idx.iter().enumerate() {
            assert!(
                i <= self.shape.order(d),
                "index {} out of range for dimension {} (order {})",
                i,
                d,
                self.shape.order(d)
            );
            off += i * self.shape.stride(d);
        }
        let sub = Shape::new(self.shape.orders()[idx.len()..].to_vec());
        let len = sub.len();
        Series {
            coeffs: self.coeffs[off..off + len].to_vec(),
            shape: sub,
        }
    }

    /// Normalized coefficient at a full multi-index.
    #[inline]
    pub fn coeff(&self, idx: &[usize]) -> F {
        self.coeffs[self.shape.offset(idx)]
    }

    /// Mixed partial derivative at a full multi-index:
    /// `coeff(idx) × i₀! ⋯ i_{d-1}!`.
    pub fn derivative(&self, idx: &[usize]) -> F {
        let mut fac = F::one();
        for &i in idx {
            fac = fac * factorial::<F>(i);
        }
        self.coeff(idx) * fac
    }
}

/// `n!` as a float.
pub(crate) fn factorial<F: Float>(n: usize) -> F {
    let mut acc = F::one();
    for i in 2..=n {
        acc = acc * F::from(i).unwrap();
    }
    acc
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn variable_seeds_unit_slope() {
        let x = Series::variable(3, 2.5);
        assert_eq!(x.shape(), &Shape::new([3]));
        assert_eq!(x.coeffs(), &[2.5, 1.0, 0.0, 0.0]);
    }

    #[test]
    fn variables_get_distinct_dimensions() {
        let vars = Series::<f64>::variables(&[2, 3], &[1.0, 4.0]);
        assert_eq!(vars[0].shape(), &Shape::new([2]));
        assert_eq!(vars[1].shape(), &Shape::new([0, 3]));
        assert_eq!(vars[1].coeffs()[..2], [4.0, 1.0]);
    }

    #[test]
    fn promote_zero_extends() {
        let x = Series::variable(1, 2.0);
        let p = x.promote_to(&Shape::new([1, 2]));
        assert_eq!(p.coeffs(), &[2.0, 0.0, 0.0, 1.0, 0.0, 0.0]);
    }

    #[test]
    fn at_slices_outer_dimensions() {
        let vars = Series::variables(&[1, 1], &[3.0, 5.0]);
        let p = &vars[0] * &vars[1]; // xy
        let row = p.at(&[1]);
        assert_eq!(row.shape(), &Shape::new([1]));
        assert_eq!(row.coeffs(), &[5.0, 1.0]);
        assert_eq!(p.at(&[1, 1]).root(), 1.0);
    }

    #[test]
    fn derivative_rescales_by_factorials() {
        let x = Series::variable(3, 1.0);
        let p = &(&x * &x) * &x; // x³
        assert_eq!(p.coeff(&[3]), 1.0);
        assert_eq!(p.derivative(&[3]), 6.0);
        assert_eq!(p.derivative(&[2]), 6.0);
    }

    #[test]
    #[should_panic]
    fn coeff_out_of_range_panics() {
        Series::variable(2, 0.0).coeff(&[3]);
    }

    #[test]
    fn display_flat() {
        let x = Series::variable(2, 1.5);
        assert_eq!(format!("{}", x), "depth(1)(1.5,1,0)");
    }
}
