//! Composition engine: rebuild `f(u)` from the derivatives of `f` at the
//! root of `u`.
//!
//! Writing `u = u₀ + ε` with `ε` the pure perturbation part, the truncated
//! expansion is `f(u) = Σᵢ f⁽ⁱ⁾(u₀)/i! · εⁱ`. The Horner forms evaluate this
//! sum innermost-first; the non-Horner forms accumulate powers of `ε`
//! explicitly through the windowed epsilon product, which keeps structural
//! zeros away from infinite derivative values. The binary forms handle
//! two-argument compositions (`powf`, `atan2`) with a two-index derivative
//! table.

use crate::series::{factorial, Series};
use crate::Float;

impl<F: Float> Series<F> {
    /// Horner evaluation of `Σᵢ f(i) · εⁱ` for `i ≤ min(order, order_sum)`.
    ///
    /// `f(i)` supplies the i-th normalized coefficient of the outer function
    /// at the root.
    pub fn apply_coefficients(&self, order: usize, f: impl Fn(usize) -> F) -> Series<F> {
        let epsilon = self.epsilon();
        let mut i = order.min(self.order_sum());
        let mut acc = Series::constant_in(self.shape.clone(), f(i));
        while i > 0 {
            i -= 1;
            acc = acc * &epsilon;
            acc.coeffs[0] = acc.coeffs[0] + f(i);
        }
        acc
    }

    /// As [`apply_coefficients`](Self::apply_coefficients), but `f(i)` supplies
    /// the raw i-th derivative; the `1/i!` normalization is applied here.
    pub fn apply_derivatives(&self, order: usize, f: impl Fn(usize) -> F) -> Series<F> {
        let epsilon = self.epsilon();
        let mut i = order.min(self.order_sum());
        let mut acc = Series::constant_in(self.shape.clone(), f(i) / factorial::<F>(i));
        while i > 0 {
            i -= 1;
            acc = acc * &epsilon;
            acc.coeffs[0] = acc.coeffs[0] + f(i) / factorial::<F>(i);
        }
        acc
    }

    /// Accumulate `Σᵢ f(i) · εⁱ` power by power through the windowed epsilon
    /// product, for `i ≤ order_sum`.
    ///
    /// Slower than the Horner form but safe when some `f(i)` are infinite:
    /// each `εⁱ` multiplies only coefficient slots it can actually populate.
    pub fn apply_coefficients_nonhorner(&self, f: impl Fn(usize) -> F) -> Series<F> {
        let epsilon = self.epsilon();
        let mut epsilon_i = Series::constant_in(self.shape.clone(), F::one());
        let mut acc = Series::constant_in(self.shape.clone(), f(0));
        for i in 1..=self.order_sum() {
            epsilon_i = epsilon_i.epsilon_multiply(i - 1, 0, &epsilon, 1, 0);
            acc = acc + epsilon_i.epsilon_multiply_root(i, 0, f(i));
        }
        acc
    }

    /// Non-Horner accumulation from raw derivatives.
    pub fn apply_derivatives_nonhorner(&self, f: impl Fn(usize) -> F) -> Series<F> {
        self.apply_coefficients_nonhorner(|i| f(i) / factorial::<F>(i))
    }

    /// Horner evaluation of the two-argument composition
    /// `Σᵢ Σⱼ f(i,j) · εᵢ(self)ⁱ · εⱼ(other)ʲ` from normalized coefficients.
    pub fn apply_coefficients_binary(
        &self,
        order: usize,
        f: impl Fn(usize, usize) -> F,
        other: &Series<F>,
    ) -> Series<F> {
        let epsilon = self.epsilon();
        let mut i = order.min(self.order_sum());
        let mut acc = other.apply_coefficients(order - i, |j| f(i, j));
        while i > 0 {
            i -= 1;
            acc = acc * &epsilon + other.apply_coefficients(order - i, |j| f(i, j));
        }
        acc
    }

    /// Two-argument Horner composition from raw mixed derivatives `f(i,j)`.
    pub fn apply_derivatives_binary(
        &self,
        order: usize,
        f: impl Fn(usize, usize) -> F,
        other: &Series<F>,
    ) -> Series<F> {
        let epsilon = self.epsilon();
        let mut i = order.min(self.order_sum());
        let mut acc = other.apply_derivatives(order - i, |j| f(i, j)) / factorial::<F>(i);
        while i > 0 {
            i -= 1;
            acc = acc * &epsilon
                + other.apply_derivatives(order - i, |j| f(i, j)) / factorial::<F>(i);
        }
        acc
    }

    /// Two-argument non-Horner composition from raw mixed derivatives.
    ///
    /// Used when the derivative table may contain infinities (expansion at a
    /// branch point such as `powf` near a zero base).
    pub fn apply_derivatives_binary_nonhorner(
        &self,
        order: usize,
        f: impl Fn(usize, usize) -> F,
        other: &Series<F>,
    ) -> Series<F> {
        let epsilon = self.epsilon();
        let mut epsilon_i = Series::constant_in(self.shape.clone(), F::one());
        let mut acc = other.apply_derivatives_nonhorner(|j| f(0, j));
        for i in 1..=order.min(self.order_sum()) {
            epsilon_i = epsilon_i.epsilon_multiply(i - 1, 0, &epsilon, 1, 0);
            let inner = other.apply_derivatives_nonhorner(|j| f(i, j)) / factorial::<F>(i);
            acc = acc + epsilon_i.epsilon_multiply(i, 0, &inner, 0, 0);
        }
        acc
    }

    /// Windowed product of two series known to vanish below total orders
    /// `z0` and `z1` respectively (`isum` = orders already consumed by an
    /// enclosing product).
    pub fn epsilon_multiply(
        &self,
        z0: usize,
        isum0: usize,
        other: &Series<F>,
        z1: usize,
        isum1: usize,
    ) -> Series<F> {
        let (a, b) = self.promote_pair(other);
        let mut out = Series::constant_in(a.shape.clone(), F::zero());
        crate::ops::epsilon_mul_acc(
            a.shape.orders(),
            &a.coeffs,
            &b.coeffs,
            &mut out.coeffs,
            z0,
            isum0,
            z1,
            isum1,
        );
        out
    }

    /// Windowed scalar multiply of a series known to vanish below total
    /// order `z0`. Exact zeros inside the window are left untouched, so an
    /// infinite `s` never meets a structural zero.
    pub fn epsilon_multiply_root(&self, z0: usize, isum0: usize, s: F) -> Series<F> {
        let mut out = self.clone();
        crate::ops::epsilon_scale(out.shape.orders(), &mut out.coeffs, z0, isum0, s);
        out
    }

    /// Multiplicative inverse.
    ///
    /// With a nonzero root this is plain series division. At a zero root the
    /// quotient recurrence would divide by zero everywhere; instead the
    /// closed-form derivatives of `1/u` at the root are injected through the
    /// non-Horner engine so the result carries the correct pattern of
    /// alternating infinities.
    pub fn inverse(&self) -> Series<F> {
        if self.root() == F::zero() {
            self.inverse_apply()
        } else {
            Series::constant(F::one()) / self
        }
    }

    fn inverse_apply(&self) -> Series<F> {
        let x0 = self.root();
        let n = self.order_sum();
        let mut d = vec![F::zero(); n + 1];
        d[0] = F::one() / x0;
        for i in 1..=n {
            d[i] = -d[i - 1] * F::from(i).unwrap() / x0;
        }
        self.apply_derivatives_nonhorner(|i| d[i])
    }

    /// Alias for [`inverse`](Self::inverse), matching `f32::recip` naming.
    #[inline]
    pub fn recip(&self) -> Series<F> {
        self.inverse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn horner_matches_nonhorner_for_finite_tables() {
        // Rebuild exp(x) at x = 0.5 both ways.
        let x = Series::variable(4, 0.5_f64);
        let d0 = 0.5_f64.exp();
        let horner = x.apply_derivatives(4, |_| d0);
        let nonhorner = x.apply_derivatives_nonhorner(|_| d0);
        for k in 0..=4 {
            assert_relative_eq!(
                horner.coeff(&[k]),
                nonhorner.coeff(&[k]),
                max_relative = 1e-14
            );
        }
    }

    #[test]
    fn inverse_matches_division() {
        let x = Series::variable(3, 2.0_f64);
        let v = &x * &x + Series::constant(1.0);
        let inv = v.inverse();
        let div = Series::constant(1.0) / &v;
        for k in 0..=3 {
            assert_relative_eq!(inv.coeff(&[k]), div.coeff(&[k]), max_relative = 1e-13);
        }
    }

    #[test]
    fn inverse_at_zero_root_alternates_infinities() {
        let x = Series::variable(3, 0.0_f64);
        let inv = x.inverse();
        assert_eq!(inv.coeff(&[0]), f64::INFINITY);
        assert_eq!(inv.coeff(&[1]), f64::NEG_INFINITY);
        assert_eq!(inv.coeff(&[2]), f64::INFINITY);
        assert_eq!(inv.coeff(&[3]), f64::NEG_INFINITY);
    }

    #[test]
    fn epsilon_multiply_chains_powers() {
        // εⁱ built through the windowed product matches the plain product.
        let x = Series::variable(4, 3.0_f64);
        let eps = x.epsilon();
        let e2_plain = &eps * &eps;
        let e2_windowed = eps.epsilon_multiply(0, 0, &eps, 1, 0);
        for k in 0..=4 {
            assert_relative_eq!(
                e2_plain.coeff(&[k]),
                e2_windowed.coeff(&[k]),
                max_relative = 1e-14
            );
        }
    }
}
