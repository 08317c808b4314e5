use tracing::{debug, debug_span, warn};

use crate::gf::{BinPoly, GfTables};
use crate::storage::Table;
use super::error::BchParamError;
use super::generator::build_generator;
use super::params::BchParams;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Bch {
    params: BchParams,
    tables: GfTables,
    /// g(x) coefficients, `generator[i]` is the x^i term, length `n - k + 1`.
    generator: Table<u8>,
    /// Low `n - k` generator coefficients packed as a register mask.
    feedback: u64,
}

impl Bch {
    /// Configure a BCH(n, k) code over the field defined by `poly`.
    ///
    /// Never fails. `n` is clamped into `1..=32` and `k` to at most `n`; a polynomial
    /// that is not primitive yields a code whose words are unspecified. In debug builds
    /// an inconsistent `(n, k)` pair trips an assertion on the generator degree.
    pub fn new(n: usize, k: usize, poly: u32) -> Self {
        let requested = BchParams::new(n, k, poly);
        let params = requested.clamped();
        if params != requested {
            warn!(n, k, clamped_n = params.n, clamped_k = params.k, "BCH parameters out of range");
        }
        let (tables, g) = Self::build(&params);
        debug_assert_eq!(
            g.degree(),
            Some(params.parity_bits()),
            "generator degree does not match n - k"
        );
        Self::assemble(params, tables, g)
    }

    /// Checked construction: reports malformed parameters instead of clamping.
    pub fn try_new(params: BchParams) -> Result<Self, BchParamError> {
        params.validate()?;
        let (tables, g) = Self::build(&params);
        if !tables.is_primitive() {
            return Err(BchParamError::NotPrimitive { poly: params.poly, m: tables.degree() });
        }
        let got = g.degree().unwrap_or(0);
        if got != params.parity_bits() {
            return Err(BchParamError::GeneratorDegree { expected: params.parity_bits(), got });
        }
        Ok(Self::assemble(params, tables, g))
    }

    /// Re-initialize in place, discarding the previous tables and generator.
    pub fn begin(&mut self, n: usize, k: usize, poly: u32) {
        *self = Self::new(n, k, poly);
    }

    fn build(params: &BchParams) -> (GfTables, BinPoly) {
        let m = params.m();
        let _span = debug_span!("bch_init", n = params.n, k = params.k, poly = params.poly, m).entered();
        let tables = GfTables::new(m, params.poly);
        let g = build_generator(&tables, params.parity_bits());
        debug!(generator = %g, "generator polynomial ready");
        (tables, g)
    }

    fn assemble(params: BchParams, tables: GfTables, g: BinPoly) -> Self {
        let p = params.parity_bits();
        let mut generator = Table::filled(p + 1, 0u8);
        for (i, c) in generator.iter_mut().enumerate() {
            *c = g.coeff(i);
        }
        let feedback = BinPoly::from_coeffs(&generator[..p]).bits();
        Self { params, tables, generator, feedback }
    }

    /// Encode the low `k` bits of `data` into an `n`-bit code word.
    ///
    /// Bits of `data` above `k` are ignored.
    pub fn encode(&self, data: u32) -> u32 {
        let data = u64::from(data) & low_mask(self.params.k);
        let code = (data << self.parity_bits()) | self.remainder(data);
        code as u32
    }

    /// Parity bits only: the remainder of `data * x^(n - k)` divided by g(x).
    pub fn parity(&self, data: u32) -> u32 {
        self.remainder(u64::from(data) & low_mask(self.params.k)) as u32
    }

    // LFSR division, data bits fed most significant first
    fn remainder(&self, data: u64) -> u64 {
        let p = self.parity_bits();
        if p == 0 {
            return 0;
        }
        let mask = low_mask(p);
        let mut reg = 0u64;
        for i in (0..self.params.k).rev() {
            let feedback = ((data >> i) ^ (reg >> (p - 1))) & 1;
            reg = (reg << 1) & mask;
            if feedback == 1 {
                reg ^= self.feedback;
            }
        }
        reg
    }

    #[inline]
    pub fn n(&self) -> usize {
        self.params.n
    }

    #[inline]
    pub fn k(&self) -> usize {
        self.params.k
    }

    #[inline]
    pub fn m(&self) -> u32 {
        self.tables.degree()
    }

    #[inline]
    pub fn poly(&self) -> u32 {
        self.params.poly
    }

    #[inline]
    pub fn parity_bits(&self) -> usize {
        self.params.parity_bits()
    }

    #[inline]
    pub fn params(&self) -> BchParams {
        self.params
    }

    pub fn tables(&self) -> &GfTables {
        &self.tables
    }

    /// Generator coefficients, low order first.
    pub fn generator(&self) -> &[u8] {
        &self.generator
    }

    pub fn generator_poly(&self) -> BinPoly {
        BinPoly::from_coeffs(&self.generator)
    }
}

#[inline]
fn low_mask(bits: usize) -> u64 {
    if bits >= 64 { u64::MAX } else { (1u64 << bits) - 1 }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pager_golden_vector() {
        let bch = Bch::new(31, 21, 0x25);
        assert_eq!(bch.encode(0x1), 0x769);
        assert_eq!(bch.parity(0x1), 0x369);
    }

    #[test]
    fn feedback_is_generator_without_leading_term() {
        let bch = Bch::new(31, 21, 0x25);
        assert_eq!(bch.feedback, 0x369);
        assert_eq!(bch.generator().len(), 11);
    }

    #[test]
    fn high_data_bits_are_ignored() {
        let bch = Bch::new(31, 21, 0x25);
        assert_eq!(bch.encode(0xFFE0_0001), bch.encode(0x1));
    }

    #[test]
    fn begin_replaces_previous_code() {
        let mut bch = Bch::new(31, 21, 0x25);
        bch.begin(15, 7, 0x13);
        assert_eq!(bch, Bch::new(15, 7, 0x13));
        assert_eq!(bch.m(), 4);
        assert_eq!(bch.generator_poly(), BinPoly(0x1D1));
    }

    #[test]
    fn low_mask_edges() {
        assert_eq!(low_mask(0), 0);
        assert_eq!(low_mask(10), 0x3FF);
        assert_eq!(low_mask(64), u64::MAX);
    }
}
