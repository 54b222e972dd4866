//! Elementary functions on `Series<F>`.
//!
//! Each function builds a univariate derivative table of the outer function
//! at the root and feeds it through the composition engine. Functions whose
//! derivative tables stay finite use the Horner forms; functions that can
//! produce infinite derivatives at singular roots (`ln` and friends at 0,
//! `sqrt` at 0, `powf` with a fractional exponent at 0) route through the
//! non-Horner forms so structural zeros never meet an infinity.
//!
//! Where a table's entries are themselves series-valued (the chain-rule
//! factor `d1` of `ln`, `tan`, `asin`, …), `d1` is expanded as a fresh
//! univariate series of order `order_sum - 1` at the root and its
//! coefficients are integrated term by term: `cᵢ = d1[i-1] / i`.

use crate::series::{factorial, Series};
use crate::shape::Shape;
use crate::Float;

impl<F: Float> Series<F> {
    /// `e^u`. Every derivative equals the value, so the table is constant.
    pub fn exp(&self) -> Series<F> {
        let d0 = self.root().exp();
        self.apply_derivatives(self.order_sum(), |_| d0)
    }

    /// Natural logarithm. At a zero root the coefficients follow the
    /// alternating-infinity pattern `(-inf, inf, -inf, …)`.
    pub fn ln(&self) -> Series<F> {
        let x0 = self.root();
        let d0 = x0.ln();
        let n = self.order_sum();
        if n == 0 {
            return Series::constant_in(self.shape.clone(), d0);
        }
        let d1 = Series::variable(n - 1, x0).inverse();
        self.apply_coefficients_nonhorner(|i| {
            if i == 0 {
                d0
            } else {
                d1.coeff(&[i - 1]) / F::from(i).unwrap()
            }
        })
    }

    /// `log₂ u = ln u / ln 2`.
    pub fn log2(&self) -> Series<F> {
        let mut r = self.ln();
        let inv_ln2 = F::one() / F::LN_2();
        for c in r.coeffs[1..].iter_mut() {
            *c = *c * inv_ln2;
        }
        r.coeffs[0] = self.root().log2();
        r
    }

    /// `log₁₀ u = ln u / ln 10`.
    pub fn log10(&self) -> Series<F> {
        let mut r = self.ln();
        let inv_ln10 = F::one() / F::LN_10();
        for c in r.coeffs[1..].iter_mut() {
            *c = *c * inv_ln10;
        }
        r.coeffs[0] = self.root().log10();
        r
    }

    /// `ln(1 + u)`.
    pub fn ln_1p(&self) -> Series<F> {
        let mut r = (self.clone() + F::one()).ln();
        r.coeffs[0] = self.root().ln_1p();
        r
    }

    /// Logarithm in an arbitrary series base.
    #[inline]
    pub fn log(&self, base: &Series<F>) -> Series<F> {
        self.ln() / base.ln()
    }

    /// `e^u - 1`.
    pub fn exp_m1(&self) -> Series<F> {
        let mut r = self.exp();
        r.coeffs[0] = self.root().exp_m1();
        r
    }

    /// `2^u`.
    pub fn exp2(&self) -> Series<F> {
        let mut r = (self.clone() * F::LN_2()).exp();
        r.coeffs[0] = self.root().exp2();
        r
    }

    /// Square root. Near a zero root the derivative table carries the
    /// alternating-infinity ladder `(0, inf, -inf, inf, …)`, so the
    /// non-Horner engine takes over there.
    pub fn sqrt(&self) -> Series<F> {
        let x0 = self.root();
        let n = self.order_sum();
        let mut d = vec![F::zero(); n + 1];
        d[0] = x0.sqrt();
        if n == 0 {
            return Series::constant_in(self.shape.clone(), d[0]);
        }
        let half = F::from(0.5).unwrap();
        let mut numerator = half;
        let mut powers = F::one();
        d[1] = numerator / d[0];
        for i in 2..=n {
            numerator = -numerator * half * F::from(2 * i - 3).unwrap();
            powers = powers * x0;
            d[i] = numerator / (powers * d[0]);
        }
        if x0 < F::epsilon() {
            self.apply_derivatives_nonhorner(|i| d[i])
        } else {
            self.apply_derivatives(n, |i| d[i])
        }
    }

    /// Cube root. Well-defined for negative roots; an exactly-zero root
    /// carries the `(0, inf, -inf, …)` ladder through the non-Horner engine.
    pub fn cbrt(&self) -> Series<F> {
        let x0 = self.root();
        let n = self.order_sum();
        let third = F::one() / F::from(3).unwrap();
        let mut d = vec![F::zero(); n + 1];
        d[0] = x0.cbrt();
        if x0 == F::zero() {
            for (i, di) in d.iter_mut().enumerate().skip(1) {
                *di = if i % 2 == 1 {
                    F::infinity()
                } else {
                    F::neg_infinity()
                };
            }
            return self.apply_derivatives_nonhorner(|i| d[i]);
        }
        for i in 0..n {
            d[i + 1] = (third - F::from(i).unwrap()) * d[i] / x0;
        }
        if x0.abs() < F::epsilon() {
            self.apply_derivatives_nonhorner(|i| d[i])
        } else {
            self.apply_derivatives(n, |i| d[i])
        }
    }

    /// `u^y` for a scalar exponent.
    ///
    /// The derivative table `dᵢ = y(y-1)⋯(y-i+1) · x₀^{y-i}` terminates as
    /// soon as the falling factorial vanishes, so non-negative integer
    /// exponents stay finite even at a zero root; fractional exponents there
    /// yield the signed-infinity ladder of the corresponding root function.
    pub fn powf(&self, y: F) -> Series<F> {
        let x0 = self.root();
        let n = self.order_sum();
        let mut d = vec![F::zero(); n + 1];
        d[0] = x0.powf(y);
        let mut coef = y;
        let mut i = 1;
        while i <= n && coef != F::zero() {
            d[i] = coef * x0.powf(y - F::from(i).unwrap());
            coef = coef * (y - F::from(i).unwrap());
            i += 1;
        }
        if x0.abs() < F::epsilon() {
            self.apply_derivatives_nonhorner(|i| d[i])
        } else {
            self.apply_derivatives(n, |i| d[i])
        }
    }

    /// `u^n` for an integer exponent.
    #[inline]
    pub fn powi(&self, n: i32) -> Series<F> {
        self.powf(F::from(n).unwrap())
    }

    /// `x^u` for a scalar base.
    pub fn pow_base(x: F, exponent: &Series<F>) -> Series<F> {
        let logx = x.ln();
        let y0 = exponent.root();
        let n = exponent.order_sum();
        let mut d = vec![F::zero(); n + 1];
        d[0] = x.powf(y0);
        for i in 0..n {
            d[i + 1] = d[i] * logx;
        }
        if x.abs() < F::epsilon() {
            exponent.apply_derivatives_nonhorner(|i| d[i])
        } else {
            exponent.apply_derivatives(n, |i| d[i])
        }
    }

    /// `u^v` for a series exponent: the full two-argument composition.
    ///
    /// Mixed derivatives of `x^y` are assembled from the scalar-exponent
    /// recurrence and powers of `ln x` via the binomial expansion
    /// `∂^{i+j}/∂x^i ∂y^j = Σₖ C(i,k) d^{i-k}[x^{y₀}] · ∂ᵏ[(ln x)ʲ]`.
    pub fn pow(&self, exponent: &Series<F>) -> Series<F> {
        let x0 = self.root();
        let y0 = exponent.root();
        let promoted = self.shape().promote(exponent.shape());
        let order = promoted.order_sum();
        let mut dxydx = vec![F::zero(); order + 1];
        dxydx[0] = x0.powf(y0);
        if order == 0 {
            return Series::constant_in(promoted, dxydx[0]);
        }
        let mut coef = y0;
        let mut i = 1;
        while i <= order && coef != F::zero() {
            dxydx[i] = coef * x0.powf(y0 - F::from(i).unwrap());
            coef = coef * (y0 - F::from(i).unwrap());
            i += 1;
        }
        let mut lognx: Vec<Series<F>> = Vec::with_capacity(order + 1);
        lognx.push(Series::constant_in(Shape::new([order]), F::one()));
        lognx.push(Series::variable(order, x0).ln());
        for j in 1..order {
            let next = &lognx[j] * &lognx[1];
            lognx.push(next);
        }
        let f = |i: usize, j: usize| {
            let mut sum = dxydx[i] * lognx[j].root();
            let mut binomial: usize = 1;
            for k in 1..=i {
                binomial = binomial * (i - k + 1) / k;
                sum = sum + F::from(binomial).unwrap() * dxydx[i - k] * lognx[j].derivative(&[k]);
            }
            sum
        };
        if x0.abs() < F::epsilon() {
            self.apply_derivatives_binary_nonhorner(order, f, exponent)
        } else {
            self.apply_derivatives_binary(order, f, exponent)
        }
    }

    /// Sine. Derivatives cycle through `(sin, cos, -sin, -cos)`.
    pub fn sin(&self) -> Series<F> {
        let (s, c) = self.root().sin_cos();
        let d = [s, c, -s, -c];
        self.apply_derivatives(self.order_sum(), |i| d[i & 3])
    }

    /// Cosine. Derivatives cycle through `(cos, -sin, -cos, sin)`.
    pub fn cos(&self) -> Series<F> {
        let (s, c) = self.root().sin_cos();
        let d = [c, -s, -c, s];
        self.apply_derivatives(self.order_sum(), |i| d[i & 3])
    }

    /// Sine and cosine together.
    #[inline]
    pub fn sin_cos(&self) -> (Series<F>, Series<F>) {
        (self.sin(), self.cos())
    }

    /// Tangent.
    pub fn tan(&self) -> Series<F> {
        let x0 = self.root();
        let d0 = x0.tan();
        let n = self.order_sum();
        if n == 0 {
            return Series::constant_in(self.shape.clone(), d0);
        }
        let c = Series::variable(n - 1, x0).cos();
        let d1 = (&c * &c).inverse();
        self.apply_coefficients_nonhorner(|i| {
            if i == 0 {
                d0
            } else {
                d1.coeff(&[i - 1]) / F::from(i).unwrap()
            }
        })
    }

    /// `sin(u)/u`, continuous through a zero root.
    ///
    /// At a zero root the Maclaurin table goes through the non-Horner
    /// engine: the perturbation may already carry infinite coefficients
    /// (e.g. from an inner singular function) and each order's term must
    /// stay isolated from them.
    pub fn sinc(&self) -> Series<F> {
        if self.root() != F::zero() {
            return self.sin() / self;
        }
        let n = self.order_sum();
        let mut c = vec![F::zero(); n + 1];
        for k in (0..=n).step_by(2) {
            let sign = if k % 4 == 0 { F::one() } else { -F::one() };
            c[k] = sign / factorial::<F>(k + 1);
        }
        self.apply_coefficients_nonhorner(|i| c[i])
    }

    /// Inverse sine. `d1 = 1/√(1-u²)` blows up at `u₀ = ±1`, so the
    /// coefficients go through the non-Horner engine.
    pub fn asin(&self) -> Series<F> {
        let x0 = self.root();
        let d0 = x0.asin();
        let n = self.order_sum();
        if n == 0 {
            return Series::constant_in(self.shape.clone(), d0);
        }
        let x = Series::variable(n - 1, x0);
        let d1 = (Series::constant(F::one()) - &x * &x).sqrt().inverse();
        self.apply_coefficients_nonhorner(|i| {
            if i == 0 {
                d0
            } else {
                d1.coeff(&[i - 1]) / F::from(i).unwrap()
            }
        })
    }

    /// Inverse cosine: `acos' = -asin'`.
    pub fn acos(&self) -> Series<F> {
        let x0 = self.root();
        let d0 = x0.acos();
        let n = self.order_sum();
        if n == 0 {
            return Series::constant_in(self.shape.clone(), d0);
        }
        let x = Series::variable(n - 1, x0);
        let d1 = -(Series::constant(F::one()) - &x * &x).sqrt().inverse();
        self.apply_coefficients(n, |i| {
            if i == 0 {
                d0
            } else {
                d1.coeff(&[i - 1]) / F::from(i).unwrap()
            }
        })
    }

    /// Inverse tangent.
    pub fn atan(&self) -> Series<F> {
        let x0 = self.root();
        let d0 = x0.atan();
        let n = self.order_sum();
        if n == 0 {
            return Series::constant_in(self.shape.clone(), d0);
        }
        let x = Series::variable(n - 1, x0);
        let d1 = (&x * &x + Series::constant(F::one())).inverse();
        self.apply_coefficients(n, |i| {
            if i == 0 {
                d0
            } else {
                d1.coeff(&[i - 1]) / F::from(i).unwrap()
            }
        })
    }

    /// Four-quadrant inverse tangent, `self` being the ordinate.
    pub fn atan2(&self, other: &Series<F>) -> Series<F> {
        let y0 = self.root();
        let x0 = other.root();
        let d00 = y0.atan2(x0);
        let promoted = self.shape().promote(other.shape());
        let order = promoted.order_sum();
        if order == 0 {
            return Series::constant_in(promoted, d00);
        }
        let order1 = self.order_sum();
        let order2 = other.order_sum();
        if order2 == 0 {
            // constant abscissa: ∂/∂y atan2(y, x₀) = x₀ / (y² + x₀²)
            let y = Series::variable(order1 - 1, y0);
            let d1 = Series::constant(x0) / (&y * &y + Series::constant(x0 * x0));
            let r = self.apply_coefficients(order, |i| {
                if i == 0 {
                    d00
                } else {
                    d1.coeff(&[i - 1]) / F::from(i).unwrap()
                }
            });
            return r.promote_to(&promoted);
        }
        if order1 == 0 {
            // constant ordinate: ∂/∂x atan2(y₀, x) = -y₀ / (x² + y₀²)
            let x = Series::variable(order2 - 1, x0);
            let d1 = Series::constant(-y0) / (&x * &x + Series::constant(y0 * y0));
            let r = other.apply_coefficients(order, |i| {
                if i == 0 {
                    d00
                } else {
                    d1.coeff(&[i - 1]) / F::from(i).unwrap()
                }
            });
            return r.promote_to(&promoted);
        }
        // d01: pure-x derivatives at fixed y₀; d10: mixed table, with the
        // ordinate on dimension 0 and the abscissa on dimension 1.
        let x01 = Series::variable(order2 - 1, x0);
        let d01 = Series::constant(-y0) / (&x01 * &x01 + Series::constant(y0 * y0));
        let y10 = Series::variable(order1 - 1, y0);
        let x10 = Series::axis_variable(1, order2, x0);
        let d10 = &x10 / (&x10 * &x10 + &y10 * &y10);
        let f = |i: usize, j: usize| {
            if i > 0 {
                d10.coeff(&[i - 1, j]) / F::from(i).unwrap()
            } else if j > 0 {
                d01.coeff(&[j - 1]) / F::from(j).unwrap()
            } else {
                d00
            }
        };
        self.apply_coefficients_binary(order, f, other)
    }

    /// Hyperbolic sine. Derivatives alternate `(sinh, cosh)`.
    pub fn sinh(&self) -> Series<F> {
        let d = [self.root().sinh(), self.root().cosh()];
        self.apply_derivatives(self.order_sum(), |i| d[i & 1])
    }

    /// Hyperbolic cosine. Derivatives alternate `(cosh, sinh)`.
    pub fn cosh(&self) -> Series<F> {
        let d = [self.root().cosh(), self.root().sinh()];
        self.apply_derivatives(self.order_sum(), |i| d[i & 1])
    }

    /// Hyperbolic tangent, via `(e^{2u} - 1) / (e^{2u} + 1)`.
    pub fn tanh(&self) -> Series<F> {
        let e = (self.clone() * F::from(2).unwrap()).exp();
        (e.clone() - F::one()) / (e + F::one())
    }

    /// Inverse hyperbolic sine.
    pub fn asinh(&self) -> Series<F> {
        let x0 = self.root();
        let d0 = x0.asinh();
        let n = self.order_sum();
        if n == 0 {
            return Series::constant_in(self.shape.clone(), d0);
        }
        let x = Series::variable(n - 1, x0);
        let d1 = (&x * &x + Series::constant(F::one())).sqrt().inverse();
        self.apply_coefficients(n, |i| {
            if i == 0 {
                d0
            } else {
                d1.coeff(&[i - 1]) / F::from(i).unwrap()
            }
        })
    }

    /// Inverse hyperbolic cosine.
    pub fn acosh(&self) -> Series<F> {
        let x0 = self.root();
        let d0 = x0.acosh();
        let n = self.order_sum();
        if n == 0 {
            return Series::constant_in(self.shape.clone(), d0);
        }
        let x = Series::variable(n - 1, x0);
        let d1 = (&x * &x - Series::constant(F::one())).sqrt().inverse();
        self.apply_coefficients(n, |i| {
            if i == 0 {
                d0
            } else {
                d1.coeff(&[i - 1]) / F::from(i).unwrap()
            }
        })
    }

    /// Inverse hyperbolic tangent.
    pub fn atanh(&self) -> Series<F> {
        let x0 = self.root();
        let d0 = x0.atanh();
        let n = self.order_sum();
        if n == 0 {
            return Series::constant_in(self.shape.clone(), d0);
        }
        let x = Series::variable(n - 1, x0);
        let d1 = (Series::constant(F::one()) - &x * &x).inverse();
        self.apply_coefficients(n, |i| {
            if i == 0 {
                d0
            } else {
                d1.coeff(&[i - 1]) / F::from(i).unwrap()
            }
        })
    }

    /// `√(u² + v²)`.
    #[inline]
    pub fn hypot(&self, other: &Series<F>) -> Series<F> {
        (self * self + other * other).sqrt()
    }

    /// Absolute value. At an exactly-zero root the derivative is taken as 0
    /// (the canonical subgradient), so the result is the zero series.
    pub fn abs(&self) -> Series<F> {
        let x0 = self.root();
        if x0 < F::zero() {
            -self
        } else if x0 == F::zero() {
            Series::constant_in(self.shape.clone(), F::zero())
        } else {
            self.clone()
        }
    }

    /// Sign of the root, as a constant series.
    #[inline]
    pub fn signum(&self) -> Series<F> {
        Series::constant_in(self.shape.clone(), self.root().signum())
    }

    /// Floor of the root; derivatives are zero away from the jumps.
    #[inline]
    pub fn floor(&self) -> Series<F> {
        Series::constant_in(self.shape.clone(), self.root().floor())
    }

    /// Ceiling of the root; derivatives are zero away from the jumps.
    #[inline]
    pub fn ceil(&self) -> Series<F> {
        Series::constant_in(self.shape.clone(), self.root().ceil())
    }

    /// Nearest integer to the root; derivatives are zero away from the jumps.
    #[inline]
    pub fn round(&self) -> Series<F> {
        Series::constant_in(self.shape.clone(), self.root().round())
    }

    /// Integer part of the root; derivatives are zero away from the jumps.
    #[inline]
    pub fn trunc(&self) -> Series<F> {
        Series::constant_in(self.shape.clone(), self.root().trunc())
    }

    /// Fractional part: slope 1 away from the jumps.
    pub fn fract(&self) -> Series<F> {
        let mut r = self.clone();
        r.coeffs[0] = r.coeffs[0].fract();
        r
    }

    /// Floating-point remainder `u - v · trunc(u₀/v₀)`.
    pub fn fmod(&self, other: &Series<F>) -> Series<F> {
        let t = (self.root() / other.root()).trunc();
        self.clone() - other.clone() * t
    }

    /// `u · a + b`.
    #[inline]
    pub fn mul_add(&self, a: &Series<F>, b: &Series<F>) -> Series<F> {
        self * a + b
    }

    /// The operand with the larger root.
    pub fn max(&self, other: &Series<F>) -> Series<F> {
        if self.root() >= other.root() {
            self.clone()
        } else {
            other.clone()
        }
    }

    /// The operand with the smaller root.
    pub fn min(&self, other: &Series<F>) -> Series<F> {
        if self.root() <= other.root() {
            self.clone()
        } else {
            other.clone()
        }
    }
}
