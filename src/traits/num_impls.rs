//! `num_traits` and comparison implementations for `Series<F>`.
//!
//! Comparisons look at the roots only, matching how a series stands in for
//! its underlying value inside branching code (`if x < y { … }`).

use std::cmp::Ordering;

use num_traits::{One, Zero};

use crate::float::Float;
use crate::series::Series;

impl<F: Float> PartialEq for Series<F> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.root() == other.root()
    }
}

impl<F: Float> PartialOrd for Series<F> {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.root().partial_cmp(&other.root())
    }
}

impl<F: Float> PartialEq<F> for Series<F> {
    #[inline]
    fn eq(&self, other: &F) -> bool {
        self.root() == *other
    }
}

impl<F: Float> PartialOrd<F> for Series<F> {
    #[inline]
    fn partial_cmp(&self, other: &F) -> Option<Ordering> {
        self.root().partial_cmp(other)
    }
}

impl<F: Float> Zero for Series<F> {
    #[inline]
    fn zero() -> Self {
        Series::constant(F::zero())
    }

    #[inline]
    fn is_zero(&self) -> bool {
        self.coeffs.iter().all(|c| c.is_zero())
    }
}

impl<F: Float> One for Series<F> {
    #[inline]
    fn one() -> Self {
        Series::constant(F::one())
    }
}
