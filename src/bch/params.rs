use crate::gf::field_degree;
use super::error::BchParamError;

/// BCH(31, 21) as used by POCSAG pagers.
pub const PAGER_BCH_N: usize = 31;
pub const PAGER_BCH_K: usize = 21;
/// x^5 + x^2 + 1
pub const PAGER_BCH_PRIMITIVE_POLY: u32 = 0x25;

/// Code words are packed into a `u32`.
pub const MAX_CODE_BITS: usize = 32;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BchParams {
    /// Code word length in bits.
    pub n: usize,
    /// Data length in bits.
    pub k: usize,
    /// Powers present in the primitive polynomial.
    pub poly: u32,
}

impl BchParams {
    pub fn new(n: usize, k: usize, poly: u32) -> Self {
        Self { n, k, poly }
    }

    pub fn pager() -> Self {
        Self::new(PAGER_BCH_N, PAGER_BCH_K, PAGER_BCH_PRIMITIVE_POLY)
    }

    #[inline]
    pub fn m(&self) -> u32 {
        field_degree(self.n)
    }

    #[inline]
    pub fn parity_bits(&self) -> usize {
        self.n.saturating_sub(self.k)
    }

    /// Structural checks only. Primitivity and the generator degree need the field,
    /// see [`crate::Bch::try_new`].
    pub fn validate(&self) -> Result<(), BchParamError> {
        if self.n == 0 {
            return Err(BchParamError::EmptyCode);
        }
        if self.n > MAX_CODE_BITS {
            return Err(BchParamError::CodeTooLong { n: self.n, max: MAX_CODE_BITS });
        }
        if self.k >= self.n {
            return Err(BchParamError::DimensionTooLarge { n: self.n, k: self.k });
        }
        let m = self.m();
        if self.poly >> (m + 1) != 0 {
            return Err(BchParamError::PolyTooWide { poly: self.poly, m });
        }
        Ok(())
    }

    /// Force `n` into `1..=MAX_CODE_BITS` and `k` into `0..=n`.
    pub(crate) fn clamped(&self) -> Self {
        let n = self.n.clamp(1, MAX_CODE_BITS);
        Self { n, k: self.k.min(n), poly: self.poly }
    }
}

impl Default for BchParams {
    fn default() -> Self {
        Self::pager()
    }
}
