//! Truncation-shape descriptor for multivariate series.
//!
//! A shape is the per-dimension list of truncation orders. Dimension 0 is the
//! outermost dimension (the first-declared variable); dimension `depth - 1` is
//! the innermost. A coefficient block is stored flat in row-major order, so the
//! stride of dimension `d` is the product of `(order + 1)` over all dimensions
//! after `d`.

use std::fmt;

/// Per-dimension truncation orders of a [`Series`](crate::Series).
///
/// `orders[d]` is the highest derivative order representable along dimension
/// `d`. A depth-0 shape describes a bare constant (a single coefficient).
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Shape {
    orders: Vec<usize>,
}

impl Shape {
    /// Create a shape from per-dimension truncation orders.
    #[inline]
    pub fn new(orders: impl Into<Vec<usize>>) -> Self {
        Shape {
            orders: orders.into(),
        }
    }

    /// The depth-0 shape of a bare constant.
    #[inline]
    pub fn scalar() -> Self {
        Shape { orders: Vec::new() }
    }

    /// Number of dimensions.
    #[inline]
    pub fn depth(&self) -> usize {
        self.orders.len()
    }

    /// Truncation order of dimension `dim`.
    #[inline]
    pub fn order(&self, dim: usize) -> usize {
        self.orders[dim]
    }

    /// All per-dimension orders, outermost first.
    #[inline]
    pub fn orders(&self) -> &[usize] {
        &self.orders
    }

    /// Sum of all truncation orders: the highest total derivative order held.
    #[inline]
    pub fn order_sum(&self) -> usize {
        self.orders.iter().sum()
    }

    /// Total coefficient count: `Π (order(d) + 1)`.
    #[inline]
    pub fn len(&self) -> usize {
        block_len(&self.orders)
    }

    /// Always `false`: every shape holds at least the root coefficient.
    #[inline]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Flat stride of dimension `dim`: coefficient count of one inner block.
    #[inline]
    pub fn stride(&self, dim: usize) -> usize {
        block_len(&self.orders[dim + 1..])
    }

    /// Smallest shape that can hold both `self` and `other`.
    ///
    /// Dimensions are front-aligned; the common shape takes the elementwise
    /// maximum order, with absent trailing dimensions treated as order 0.
    pub fn promote(&self, other: &Shape) -> Shape {
        let depth = self.orders.len().max(other.orders.len());
        let mut orders = Vec::with_capacity(depth);
        for d in 0..depth {
            let a = self.orders.get(d).copied().unwrap_or(0);
            let b = other.orders.get(d).copied().unwrap_or(0);
            orders.push(a.max(b));
        }
        Shape { orders }
    }

    /// Whether every coefficient of a series with shape `self` has a slot in
    /// a series with shape `target`.
    pub fn fits_in(&self, target: &Shape) -> bool {
        self.orders.len() <= target.orders.len()
            && self
                .orders
                .iter()
                .zip(target.orders.iter())
                .all(|(a, b)| a <= b)
    }

    /// Flat offset of a full multi-index.
    ///
    /// Panics if `idx` does not name one coefficient per dimension or any
    /// index exceeds its dimension's order.
    pub fn offset(&self, idx: &[usize]) -> usize {
        assert_eq!(
            idx.len(),
            self.orders.len(),
            "index has {} entries but shape has depth {}",
            idx.len(),
            self.orders.len()
        );
        let mut off = 0;
        let mut stride = 1;
        for d in (0..self.orders.len()).rev() {
            assert!(
                idx[d] <= self.orders[d],
                "index {} out of range for dimension {} (order {})",
                idx[d],
                d,
                self.orders[d]
            );
            off += idx[d] * stride;
            stride *= self.orders[d] + 1;
        }
        off
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (d, o) in self.orders.iter().enumerate() {
            if d > 0 {
                write!(f, ",")?;
            }
            write!(f, "{}", o)?;
        }
        write!(f, "]")
    }
}

/// Coefficient count of a block with the given orders: `Π (o + 1)`.
#[inline]
pub(crate) fn block_len(orders: &[usize]) -> usize {
    orders.iter().map(|o| o + 1).product()
}

/// Sum of the given orders.
#[inline]
pub(crate) fn order_sum(orders: &[usize]) -> usize {
    orders.iter().sum()
}
