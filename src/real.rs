//! The [`Real`] trait for writing differentiation-generic numeric code.
//!
//! Functions written as `fn f<T: Real>(x: T) -> T` work transparently with
//! plain `f32`/`f64` and with [`Series<F>`]. `Series` owns a heap buffer, so
//! unlike a `Copy` dual number the bounds here are clone-based; generic code
//! clones operands it needs more than once.

use std::fmt::{Debug, Display};
use std::ops::{Add, Div, Mul, Neg, Sub};

use crate::float::Float;
use crate::series::Series;

/// The central trait for differentiation-generic numeric code.
///
/// Implement functions as `fn foo<T: Real>(x: T) -> T` and evaluate them
/// either on plain floats (for the value) or on series (for the value plus
/// mixed partial derivatives).
pub trait Real:
    Clone
    + PartialEq
    + PartialOrd
    + Debug
    + Display
    + Neg<Output = Self>
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Add<<Self as Real>::Root, Output = Self>
    + Sub<<Self as Real>::Root, Output = Self>
    + Mul<<Self as Real>::Root, Output = Self>
    + Div<<Self as Real>::Root, Output = Self>
{
    /// The underlying primitive float type.
    type Root: Float;

    /// Lift a plain float to this type (constant: zero derivatives).
    fn from_root(val: Self::Root) -> Self;

    /// The underlying value.
    fn root(&self) -> Self::Root;

    /// Number of independent-variable dimensions carried (0 for plain floats).
    fn depth(&self) -> usize {
        0
    }

    /// Highest total derivative order carried (0 for plain floats).
    fn order_sum(&self) -> usize {
        0
    }

    fn recip(&self) -> Self;
    fn sqrt(&self) -> Self;
    fn cbrt(&self) -> Self;
    fn exp(&self) -> Self;
    fn ln(&self) -> Self;
    fn powf(&self, y: Self::Root) -> Self;
    fn powi(&self, n: i32) -> Self;
    fn sin(&self) -> Self;
    fn cos(&self) -> Self;
    fn tan(&self) -> Self;
    fn asin(&self) -> Self;
    fn acos(&self) -> Self;
    fn atan(&self) -> Self;
    fn atan2(&self, other: &Self) -> Self;
    fn sinh(&self) -> Self;
    fn cosh(&self) -> Self;
    fn tanh(&self) -> Self;
    fn asinh(&self) -> Self;
    fn acosh(&self) -> Self;
    fn atanh(&self) -> Self;
    fn abs(&self) -> Self;
    fn hypot(&self, other: &Self) -> Self;
}

macro_rules! impl_real_for_float {
    ($f:ty) => {
        impl Real for $f {
            type Root = $f;

            #[inline]
            fn from_root(val: $f) -> Self {
                val
            }

            #[inline]
            fn root(&self) -> $f {
                *self
            }

            #[inline]
            fn recip(&self) -> Self {
                <$f>::recip(*self)
            }

            #[inline]
            fn sqrt(&self) -> Self {
                <$f>::sqrt(*self)
            }

            #[inline]
            fn cbrt(&self) -> Self {
                <$f>::cbrt(*self)
            }

            #[inline]
            fn exp(&self) -> Self {
                <$f>::exp(*self)
            }

            #[inline]
            fn ln(&self) -> Self {
                <$f>::ln(*self)
            }

            #[inline]
            fn powf(&self, y: $f) -> Self {
                <$f>::powf(*self, y)
            }

            #[inline]
            fn powi(&self, n: i32) -> Self {
                <$f>::powi(*self, n)
            }

            #[inline]
            fn sin(&self) -> Self {
                <$f>::sin(*self)
            }

            #[inline]
            fn cos(&self) -> Self {
                <$f>::cos(*self)
            }

            #[inline]
            fn tan(&self) -> Self {
                <$f>::tan(*self)
            }

            #[inline]
            fn asin(&self) -> Self {
                <$f>::asin(*self)
            }

            #[inline]
            fn acos(&self) -> Self {
                <$f>::acos(*self)
            }

            #[inline]
            fn atan(&self) -> Self {
                <$f>::atan(*self)
            }

            #[inline]
            fn atan2(&self, other: &Self) -> Self {
                <$f>::atan2(*self, *other)
            }

            #[inline]
            fn sinh(&self) -> Self {
                <$f>::sinh(*self)
            }

            #[inline]
            fn cosh(&self) -> Self {
                <$f>::cosh(*self)
            }

            #[inline]
            fn tanh(&self) -> Self {
                <$f>::tanh(*self)
            }

            #[inline]
            fn asinh(&self) -> Self {
                <$f>::asinh(*self)
            }

            #[inline]
            fn acosh(&self) -> Self {
                <$f>::acosh(*self)
            }

            #[inline]
            fn atanh(&self) -> Self {
                <$f>::atanh(*self)
            }

            #[inline]
            fn abs(&self) -> Self {
                <$f>::abs(*self)
            }

            #[inline]
            fn hypot(&self, other: &Self) -> Self {
                <$f>::hypot(*self, *other)
            }
        }
    };
}

impl_real_for_float!(f32);
impl_real_for_float!(f64);

impl<F: Float> Real for Series<F> {
    type Root = F;

    #[inline]
    fn from_root(val: F) -> Self {
        Series::constant(val)
    }

    #[inline]
    fn root(&self) -> F {
        Series::root(self)
    }

    #[inline]
    fn depth(&self) -> usize {
        Series::depth(self)
    }

    #[inline]
    fn order_sum(&self) -> usize {
        Series::order_sum(self)
    }

    #[inline]
    fn recip(&self) -> Self {
        Series::recip(self)
    }

    #[inline]
    fn sqrt(&self) -> Self {
        Series::sqrt(self)
    }

    #[inline]
    fn cbrt(&self) -> Self {
        Series::cbrt(self)
    }

    #[inline]
    fn exp(&self) -> Self {
        Series::exp(self)
    }

    #[inline]
    fn ln(&self) -> Self {
        Series::ln(self)
    }

    #[inline]
    fn powf(&self, y: F) -> Self {
        Series::powf(self, y)
    }

    #[inline]
    fn powi(&self, n: i32) -> Self {
        Series::powi(self, n)
    }

    #[inline]
    fn sin(&self) -> Self {
        Series::sin(self)
    }

    #[inline]
    fn cos(&self) -> Self {
        Series::cos(self)
    }

    #[inline]
    fn tan(&self) -> Self {
        Series::tan(self)
    }

    #[inline]
    fn asin(&self) -> Self {
        Series::asin(self)
    }

    #[inline]
    fn acos(&self) -> Self {
        Series::acos(self)
    }

    #[inline]
    fn atan(&self) -> Self {
        Series::atan(self)
    }

    #[inline]
    fn atan2(&self, other: &Self) -> Self {
        Series::atan2(self, other)
    }

    #[inline]
    fn sinh(&self) -> Self {
        Series::sinh(self)
    }

    #[inline]
    fn cosh(&self) -> Self {
        Series::cosh(self)
    }

    #[inline]
    fn tanh(&self) -> Self {
        Series::tanh(self)
    }

    #[inline]
    fn asinh(&self) -> Self {
        Series::asinh(self)
    }

    #[inline]
    fn acosh(&self) -> Self {
        Series::acosh(self)
    }

    #[inline]
    fn atanh(&self) -> Self {
        Series::atanh(self)
    }

    #[inline]
    fn abs(&self) -> Self {
        Series::abs(self)
    }

    #[inline]
    fn hypot(&self, other: &Self) -> Self {
        Series::hypot(self, other)
    }
}
