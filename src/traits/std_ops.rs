//! `std::ops` implementations for `Series<F>`.
//!
//! Binary operators promote both operands to their common shape first, so
//! series over different variables (or different truncation orders) combine
//! freely. The by-reference impls hold the real logic; owned variants
//! forward to them.

use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use crate::float::Float;
use crate::ops;
use crate::series::Series;

// ══════════════════════════════════════════════
//  Series ↔ Series
// ══════════════════════════════════════════════

impl<'a, 'b, F: Float> Add<&'b Series<F>> for &'a Series<F> {
    type Output = Series<F>;
    fn add(self, rhs: &'b Series<F>) -> Series<F> {
        let (a, b) = self.promote_pair(rhs);
        let mut c = vec![F::zero(); a.coeffs.len()];
        ops::add(&a.coeffs, &b.coeffs, &mut c);
        Series {
            shape: a.shape,
            coeffs: c,
        }
    }
}

impl<'a, 'b, F: Float> Sub<&'b Series<F>> for &'a Series<F> {
    type Output = Series<F>;
    fn sub(self, rhs: &'b Series<F>) -> Series<F> {
        let (a, b) = self.promote_pair(rhs);
        let mut c = vec![F::zero(); a.coeffs.len()];
        ops::sub(&a.coeffs, &b.coeffs, &mut c);
        Series {
            shape: a.shape,
            coeffs: c,
        }
    }
}

// Mul delegates to ops::mul_acc (Cauchy product) which involves addition
#[allow(clippy::suspicious_arithmetic_impl)]
impl<'a, 'b, F: Float> Mul<&'b Series<F>> for &'a Series<F> {
    type Output = Series<F>;
    fn mul(self, rhs: &'b Series<F>) -> Series<F> {
        let (a, b) = self.promote_pair(rhs);
        let mut c = vec![F::zero(); a.coeffs.len()];
        ops::mul_acc(a.shape.orders(), &a.coeffs, &b.coeffs, &mut c);
        Series {
            shape: a.shape,
            coeffs: c,
        }
    }
}

// Div delegates to ops::div_into which involves multiplication internally
#[allow(clippy::suspicious_arithmetic_impl)]
impl<'a, 'b, F: Float> Div<&'b Series<F>> for &'a Series<F> {
    type Output = Series<F>;
    fn div(self, rhs: &'b Series<F>) -> Series<F> {
        let (a, b) = self.promote_pair(rhs);
        let mut c = vec![F::zero(); a.coeffs.len()];
        ops::div_into(a.shape.orders(), &a.coeffs, &b.coeffs, &mut c);
        Series {
            shape: a.shape,
            coeffs: c,
        }
    }
}

macro_rules! forward_binop {
    ($Op:ident, $method:ident) => {
        impl<F: Float> $Op for Series<F> {
            type Output = Series<F>;
            #[inline]
            fn $method(self, rhs: Series<F>) -> Series<F> {
                (&self).$method(&rhs)
            }
        }

        impl<'a, F: Float> $Op<&'a Series<F>> for Series<F> {
            type Output = Series<F>;
            #[inline]
            fn $method(self, rhs: &'a Series<F>) -> Series<F> {
                (&self).$method(rhs)
            }
        }

        impl<'a, F: Float> $Op<Series<F>> for &'a Series<F> {
            type Output = Series<F>;
            #[inline]
            fn $method(self, rhs: Series<F>) -> Series<F> {
                self.$method(&rhs)
            }
        }
    };
}

forward_binop!(Add, add);
forward_binop!(Sub, sub);
forward_binop!(Mul, mul);
forward_binop!(Div, div);

impl<'a, F: Float> Neg for &'a Series<F> {
    type Output = Series<F>;
    fn neg(self) -> Series<F> {
        let mut c = vec![F::zero(); self.coeffs.len()];
        ops::neg(&self.coeffs, &mut c);
        Series {
            shape: self.shape.clone(),
            coeffs: c,
        }
    }
}

impl<F: Float> Neg for Series<F> {
    type Output = Series<F>;
    #[inline]
    fn neg(mut self) -> Series<F> {
        for c in self.coeffs.iter_mut() {
            *c = -*c;
        }
        self
    }
}

macro_rules! forward_assign {
    ($Op:ident, $method:ident, $op:tt) => {
        impl<F: Float> $Op for Series<F> {
            #[inline]
            fn $method(&mut self, rhs: Series<F>) {
                *self = &*self $op &rhs;
            }
        }

        impl<'a, F: Float> $Op<&'a Series<F>> for Series<F> {
            #[inline]
            fn $method(&mut self, rhs: &'a Series<F>) {
                *self = &*self $op rhs;
            }
        }
    };
}

forward_assign!(AddAssign, add_assign, +);
forward_assign!(SubAssign, sub_assign, -);
forward_assign!(MulAssign, mul_assign, *);
forward_assign!(DivAssign, div_assign, /);

// ══════════════════════════════════════════════
//  Series ↔ scalar
// ══════════════════════════════════════════════

impl<F: Float> Add<F> for Series<F> {
    type Output = Series<F>;
    #[inline]
    fn add(mut self, rhs: F) -> Series<F> {
        self.coeffs[0] = self.coeffs[0] + rhs;
        self
    }
}

impl<'a, F: Float> Add<F> for &'a Series<F> {
    type Output = Series<F>;
    #[inline]
    fn add(self, rhs: F) -> Series<F> {
        self.clone() + rhs
    }
}

impl<F: Float> Sub<F> for Series<F> {
    type Output = Series<F>;
    #[inline]
    fn sub(mut self, rhs: F) -> Series<F> {
        self.coeffs[0] = self.coeffs[0] - rhs;
        self
    }
}

impl<'a, F: Float> Sub<F> for &'a Series<F> {
    type Output = Series<F>;
    #[inline]
    fn sub(self, rhs: F) -> Series<F> {
        self.clone() - rhs
    }
}

impl<F: Float> Mul<F> for Series<F> {
    type Output = Series<F>;
    #[inline]
    fn mul(mut self, rhs: F) -> Series<F> {
        ops::scale_skip_zeros(&mut self.coeffs, rhs);
        self
    }
}

impl<'a, F: Float> Mul<F> for &'a Series<F> {
    type Output = Series<F>;
    #[inline]
    fn mul(self, rhs: F) -> Series<F> {
        self.clone() * rhs
    }
}

impl<F: Float> Div<F> for Series<F> {
    type Output = Series<F>;
    #[inline]
    fn div(mut self, rhs: F) -> Series<F> {
        for c in self.coeffs.iter_mut() {
            *c = *c / rhs;
        }
        self
    }
}

impl<'a, F: Float> Div<F> for &'a Series<F> {
    type Output = Series<F>;
    #[inline]
    fn div(self, rhs: F) -> Series<F> {
        self.clone() / rhs
    }
}

impl<F: Float> AddAssign<F> for Series<F> {
    #[inline]
    fn add_assign(&mut self, rhs: F) {
        self.coeffs[0] = self.coeffs[0] + rhs;
    }
}

impl<F: Float> SubAssign<F> for Series<F> {
    #[inline]
    fn sub_assign(&mut self, rhs: F) {
        self.coeffs[0] = self.coeffs[0] - rhs;
    }
}

impl<F: Float> MulAssign<F> for Series<F> {
    #[inline]
    fn mul_assign(&mut self, rhs: F) {
        ops::scale_skip_zeros(&mut self.coeffs, rhs);
    }
}

impl<F: Float> DivAssign<F> for Series<F> {
    #[inline]
    fn div_assign(&mut self, rhs: F) {
        for c in self.coeffs.iter_mut() {
            *c = *c / rhs;
        }
    }
}

// Mixed ops with the scalar on the left.
macro_rules! impl_series_scalar_lhs {
    ($f:ty) => {
        impl Add<Series<$f>> for $f {
            type Output = Series<$f>;
            #[inline]
            fn add(self, rhs: Series<$f>) -> Series<$f> {
                rhs + self
            }
        }

        impl Sub<Series<$f>> for $f {
            type Output = Series<$f>;
            #[inline]
            fn sub(self, rhs: Series<$f>) -> Series<$f> {
                -rhs + self
            }
        }

        impl Mul<Series<$f>> for $f {
            type Output = Series<$f>;
            #[inline]
            fn mul(self, rhs: Series<$f>) -> Series<$f> {
                rhs * self
            }
        }

        impl Div<Series<$f>> for $f {
            type Output = Series<$f>;
            #[inline]
            fn div(self, rhs: Series<$f>) -> Series<$f> {
                Series::constant(self) / rhs
            }
        }
    };
}

impl_series_scalar_lhs!(f32);
impl_series_scalar_lhs!(f64);
