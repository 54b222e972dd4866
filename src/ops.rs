//! Shared coefficient propagation kernels over flat multivariate blocks.
//!
//! Convention: a block over dimensions `orders = [N₀, …, N_{d-1}]` holds
//! `Π (Nᵢ + 1)` normalized coefficients in row-major order, where coefficient
//! `(i₀, …, i_{d-1})` equals `∂^{i₀+…} f / (∂x₀^{i₀} ⋯) / (i₀! ⋯ i_{d-1}!)`.
//! Flat index 0 is the root (the underlying value).
//!
//! All functions operate on slices `&[F]` (inputs) and `&mut [F]` (outputs);
//! the recursive kernels take the dimension orders explicitly because block
//! geometry cannot be recovered from slice length alone.

use num_traits::Float;

use crate::shape::{block_len, order_sum};

// ══════════════════════════════════════════════
//  Elementwise arithmetic
// ══════════════════════════════════════════════

/// `c = a + b`
#[inline]
pub fn add<F: Float>(a: &[F], b: &[F], c: &mut [F]) {
    for k in 0..c.len() {
        c[k] = a[k] + b[k];
    }
}

/// `c = a - b`
#[inline]
pub fn sub<F: Float>(a: &[F], b: &[F], c: &mut [F]) {
    for k in 0..c.len() {
        c[k] = a[k] - b[k];
    }
}

/// `c = -a`
#[inline]
pub fn neg<F: Float>(a: &[F], c: &mut [F]) {
    for k in 0..c.len() {
        c[k] = -a[k];
    }
}

/// `v *= s`, skipping coefficients that are exactly zero.
///
/// The root (flat index 0) is always multiplied. Skipping exact zeros keeps
/// structural zeros out of the reach of infinite scalars: `0 * inf` would
/// otherwise turn an untouched coefficient into NaN.
#[inline]
pub fn scale_skip_zeros<F: Float>(v: &mut [F], s: F) {
    v[0] = v[0] * s;
    for x in v[1..].iter_mut() {
        if *x != F::zero() {
            *x = *x * s;
        }
    }
}

// ══════════════════════════════════════════════
//  Structural
// ══════════════════════════════════════════════

/// Embed a `src_orders` block into a zeroed `dst_orders` block.
///
/// Source coefficient `(i₀, …, i_{k-1})` lands at `(i₀, …, i_{k-1}, 0, …, 0)`;
/// all other destination coefficients are left untouched (zero-extension).
/// Requires `src_orders` to fit in `dst_orders` dimension by dimension.
pub fn embed<F: Float>(src_orders: &[usize], dst_orders: &[usize], src: &[F], dst: &mut [F]) {
    if src_orders.is_empty() {
        dst[0] = src[0];
        return;
    }
    let src_blk = block_len(&src_orders[1..]);
    let dst_blk = block_len(&dst_orders[1..]);
    for i in 0..=src_orders[0] {
        embed(
            &src_orders[1..],
            &dst_orders[1..],
            &src[i * src_blk..(i + 1) * src_blk],
            &mut dst[i * dst_blk..(i + 1) * dst_blk],
        );
    }
}

// ══════════════════════════════════════════════
//  Products and quotients
// ══════════════════════════════════════════════

/// `c += a * b` — nested Cauchy product.
///
/// `c[j] += Σ_{i=0}^{j} a[i] * b[j-i]` along the outermost dimension, with
/// the per-term product recursing into the remaining dimensions. All three
/// blocks must share the same `orders`.
pub fn mul_acc<F: Float>(orders: &[usize], a: &[F], b: &[F], c: &mut [F]) {
    if orders.is_empty() {
        c[0] = c[0] + a[0] * b[0];
        return;
    }
    let blk = block_len(&orders[1..]);
    for j in 0..=orders[0] {
        let cj = &mut c[j * blk..(j + 1) * blk];
        for i in 0..=j {
            mul_acc(
                &orders[1..],
                &a[i * blk..(i + 1) * blk],
                &b[(j - i) * blk..(j - i + 1) * blk],
                cj,
            );
        }
    }
}

/// `q = u / v` — recursive power-series division.
///
/// `q[i] = (u[i] - Σ_{k=1}^{i} v[k] * q[i-k]) / v[0]` along the outermost
/// dimension, where every product and quotient of blocks recurses into the
/// remaining dimensions.
pub fn div_into<F: Float>(orders: &[usize], u: &[F], v: &[F], q: &mut [F]) {
    if orders.is_empty() {
        q[0] = u[0] / v[0];
        return;
    }
    let blk = block_len(&orders[1..]);
    let mut rem = vec![F::zero(); blk];
    let mut prod = vec![F::zero(); blk];
    for i in 0..=orders[0] {
        rem.copy_from_slice(&u[i * blk..(i + 1) * blk]);
        for k in 1..=i {
            for x in prod.iter_mut() {
                *x = F::zero();
            }
            mul_acc(
                &orders[1..],
                &v[k * blk..(k + 1) * blk],
                &q[(i - k) * blk..(i - k + 1) * blk],
                &mut prod,
            );
            for (r, p) in rem.iter_mut().zip(prod.iter()) {
                *r = *r - *p;
            }
        }
        div_into(&orders[1..], &rem, &v[..blk], &mut q[i * blk..(i + 1) * blk]);
    }
}

// ══════════════════════════════════════════════
//  Constrained epsilon products
// ══════════════════════════════════════════════

/// `c += a * b` restricted to index windows that can hold nonzero terms.
///
/// `a` is known to vanish below derivative order `z0` (counting the `isum0`
/// orders already consumed by outer dimensions), and likewise `b` below `z1`.
/// Along each dimension only indices `i ≥ m` contribute, where
/// `m = max(0, order + z - (order_sum + isum))`. Skipping the rest keeps
/// structurally-zero coefficients away from infinite factors in the other
/// operand, so no spurious `0 * inf = NaN` terms are formed.
pub fn epsilon_mul_acc<F: Float>(
    orders: &[usize],
    a: &[F],
    b: &[F],
    c: &mut [F],
    z0: usize,
    isum0: usize,
    z1: usize,
    isum1: usize,
) {
    if orders.is_empty() {
        c[0] = c[0] + a[0] * b[0];
        return;
    }
    let ord = orders[0];
    let inner = &orders[1..];
    let blk = block_len(inner);
    let osum = ord + order_sum(inner);
    let m0 = (ord + z0).saturating_sub(osum + isum0);
    let m1 = (ord + z1).saturating_sub(osum + isum1);
    if m0 + m1 > ord {
        return;
    }
    for j in m0 + m1..=ord {
        let cj = &mut c[j * blk..(j + 1) * blk];
        for i0 in m0..=j - m1 {
            let i1 = j - i0;
            epsilon_mul_acc(
                inner,
                &a[i0 * blk..(i0 + 1) * blk],
                &b[i1 * blk..(i1 + 1) * blk],
                cj,
                z0,
                isum0 + i0,
                z1,
                isum1 + i1,
            );
        }
    }
}

/// `v *= s` restricted to indices that can hold nonzero terms.
///
/// Window semantics as in [`epsilon_mul_acc`], for a single operand times a
/// scalar. Exact zeros inside the window are also skipped.
pub fn epsilon_scale<F: Float>(orders: &[usize], v: &mut [F], z0: usize, isum0: usize, s: F) {
    if orders.is_empty() {
        if v[0] != F::zero() {
            v[0] = v[0] * s;
        }
        return;
    }
    let ord = orders[0];
    let inner = &orders[1..];
    let blk = block_len(inner);
    let osum = ord + order_sum(inner);
    let m0 = (ord + z0).saturating_sub(osum + isum0);
    for i in m0..=ord {
        epsilon_scale(inner, &mut v[i * blk..(i + 1) * blk], z0, isum0 + i, s);
    }
}
