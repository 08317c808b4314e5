use crate::storage::Table;

/// Discrete log of zero. Distinct from every valid index.
pub const LOG_ZERO: i32 = -1;
/// Largest supported field degree (GF(64)).
pub const MAX_FIELD_DEGREE: u32 = 6;

/// Field degree needed to hold length-`n` code words: `ceil(log2(n + 1))`.
pub fn field_degree(n: usize) -> u32 {
    n.checked_add(1)
        .and_then(usize::checked_next_power_of_two)
        .map_or(usize::BITS, usize::trailing_zeros)
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GfTables {
    m: u32,
    alpha_to: Table<i32>,
    index_of: Table<i32>,
}

impl GfTables {
    /// Build the tables for GF(2^m).
    ///
    /// Bit i of `poly` selects x^i in the primitive polynomial. The x^m and constant
    /// terms are implied and may be present or not. A polynomial that is not primitive
    /// produces tables that are memory safe but meaningless, see [`GfTables::is_primitive`].
    pub fn new(m: u32, poly: u32) -> Self {
        let m = m.min(MAX_FIELD_DEGREE);
        let top = 1i32 << m;
        let low = ((poly as i32) & (top - 1)) | 1;
        let q = (top - 1) as usize;

        let mut alpha_to = Table::filled(q + 1, 0);
        let mut index_of = Table::filled(q + 1, LOG_ZERO);

        // x <- x * α, reducing by the polynomial once bit m is set
        let mut x = 1i32;
        for i in 0..q {
            alpha_to[i] = x;
            index_of[x as usize] = i as i32;
            x <<= 1;
            if x & top != 0 {
                x ^= top | low;
            }
        }
        alpha_to[q] = x;
        index_of[0] = LOG_ZERO;

        Self { m, alpha_to, index_of }
    }

    /// Field degree m.
    #[inline]
    pub fn degree(&self) -> u32 {
        self.m
    }

    /// Multiplicative order of the field, `2^m - 1`.
    #[inline]
    pub fn order(&self) -> usize {
        (1usize << self.m) - 1
    }

    /// `alpha_to[i]` = α^i for `i` in `0..=order()`.
    #[inline]
    pub fn alpha_to(&self) -> &[i32] {
        &self.alpha_to
    }

    /// `index_of[x]` = log_α(x), or [`LOG_ZERO`].
    #[inline]
    pub fn index_of(&self) -> &[i32] {
        &self.index_of
    }

    /// α^(i mod order).
    #[inline]
    pub fn alpha_pow(&self, i: usize) -> i32 {
        let q = self.order();
        if q == 0 {
            return 1;
        }
        self.alpha_to[i % q]
    }

    /// Discrete log of `x`, `None` for zero or for elements outside the table.
    #[inline]
    pub fn log(&self, x: i32) -> Option<usize> {
        let l = *self.index_of.get(usize::try_from(x).ok()?)?;
        usize::try_from(l).ok()
    }

    #[inline]
    pub fn mul(&self, a: i32, b: i32) -> i32 {
        match (self.log(a), self.log(b)) {
            (Some(la), Some(lb)) => self.alpha_pow(la + lb),
            _ => 0,
        }
    }

    /// True when α has multiplicative order exactly `2^m - 1`.
    pub fn is_primitive(&self) -> bool {
        let q = self.order();
        if q == 0 {
            return false;
        }
        self.alpha_to[q] == 1 && self.alpha_to[1..q].iter().all(|&x| x != 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_degree_rounds_up() {
        assert_eq!(field_degree(31), 5);
        assert_eq!(field_degree(32), 6);
        assert_eq!(field_degree(15), 4);
        assert_eq!(field_degree(7), 3);
        assert_eq!(field_degree(1), 1);
    }

    #[test]
    fn field_degree_saturates_near_usize_max() {
        assert_eq!(field_degree(usize::MAX), usize::BITS);
        assert_eq!(field_degree(usize::MAX - 1), usize::BITS);
    }

    #[test]
    fn gf8_matches_hand_table() {
        // x^3 + x + 1
        let t = GfTables::new(3, 0b1011);
        assert_eq!(t.alpha_to(), &[1, 2, 4, 3, 6, 7, 5, 1]);
        assert_eq!(t.index_of(), &[-1, 0, 1, 3, 2, 6, 4, 5]);
    }

    #[test]
    fn leading_term_is_optional() {
        assert_eq!(GfTables::new(5, 0x25), GfTables::new(5, 0x05));
    }

    #[test]
    fn constant_term_is_optional() {
        assert_eq!(GfTables::new(5, 0x25), GfTables::new(5, 0x24));
        assert_eq!(GfTables::new(5, 0x25), GfTables::new(5, 0x04));
        assert!(GfTables::new(4, 0x12).is_primitive());
    }

    #[test]
    fn mul_by_zero_is_zero() {
        let t = GfTables::new(5, 0x25);
        for a in 0..32 {
            assert_eq!(t.mul(a, 0), 0);
            assert_eq!(t.mul(0, a), 0);
            assert_eq!(t.mul(a, 1), a);
        }
    }

    #[test]
    fn non_primitive_poly_is_detected() {
        // x^4 + x^3 + x^2 + x + 1 is irreducible but α has order 5
        let t = GfTables::new(4, 0x1F);
        assert!(!t.is_primitive());
        assert!(GfTables::new(4, 0x13).is_primitive());
    }
}
