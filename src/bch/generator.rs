use tracing::trace;

use crate::gf::{BinPoly, Gf2Construct, Gf2InPlace, GfTables, MAX_FIELD_DEGREE};

const MAX_MINIMAL_DEGREE: usize = MAX_FIELD_DEGREE as usize;

/// Cyclotomic coset of `e` modulo `q`: `e, 2e, 4e, ...` until the sequence closes.
///
/// Yields at most `q` exponents, so a modulus that is not of the form `2^m - 1`
/// still terminates.
pub fn cyclotomic_coset(e: usize, q: usize) -> impl Iterator<Item = usize> {
    let start = if q == 0 { 0 } else { e % q };
    let limit = q.max(1);
    let mut cur = Some(start);
    let mut taken = 0usize;
    std::iter::from_fn(move || {
        let c = cur?;
        taken += 1;
        let next = if q == 0 { c } else { (c * 2) % q };
        cur = (next != start && taken < limit).then_some(next);
        Some(c)
    })
}

/// Minimal polynomial of α^e over GF(2): the product of `(x + α^c)` over the coset of `e`.
pub fn minimal_polynomial(tables: &GfTables, e: usize) -> BinPoly {
    // coefficients in GF(2^m), low to high
    let mut coeffs = [0i32; MAX_MINIMAL_DEGREE + 1];
    coeffs[0] = 1;
    let mut deg = 0usize;

    for c in cyclotomic_coset(e, tables.order()) {
        if deg == MAX_MINIMAL_DEGREE {
            break;
        }
        let root = tables.alpha_pow(c);
        for i in (1..=deg + 1).rev() {
            coeffs[i] = coeffs[i - 1] ^ tables.mul(coeffs[i], root);
        }
        coeffs[0] = tables.mul(coeffs[0], root);
        deg += 1;
    }

    let mut bits = 0u64;
    for (i, &c) in coeffs[..=deg].iter().enumerate() {
        if c != 0 {
            bits |= 1u64 << i;
        }
    }
    BinPoly(bits)
}

/// Generator polynomial for `parity_bits = n - k` check bits.
///
/// Roots α^1, α^2, ... are absorbed one coset at a time until the product reaches
/// degree `parity_bits` or every root up to `parity_bits` has been covered. The
/// degree is not checked here.
pub fn build_generator(tables: &GfTables, parity_bits: usize) -> BinPoly {
    let q = tables.order();
    let mut covered = 0u64;
    let mut g = BinPoly::one();

    for root in 1..=parity_bits {
        if g.degree().unwrap_or(0) >= parity_bits {
            break;
        }
        let e = if q == 0 { 0 } else { root % q };
        if (covered >> e) & 1 == 1 {
            continue;
        }
        for c in cyclotomic_coset(e, q) {
            covered |= 1u64 << c;
        }
        let min_poly = minimal_polynomial(tables, e);
        trace!(root, minimal = %min_poly, "absorbing minimal polynomial");
        g.mul_in_place(&min_poly);
    }
    g
}
