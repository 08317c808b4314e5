use std::fmt;

pub trait Gf2: Sized + Clone + PartialEq + Eq {
    fn add(&self, other: &Self) -> Self;
    fn mul(&self, other: &Self) -> Self;
    fn is_zero(&self) -> bool;
}
pub trait Gf2InPlace: Gf2 {
    fn mul_in_place(&mut self, other: &Self);
}

pub trait Gf2Construct {
    fn zero() -> Self;
    fn one() -> Self;
}

/// Polynomial over GF(2) of degree at most 63, bit i = coefficient of x^i.
#[derive(Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct BinPoly(pub u64);

impl BinPoly {
    pub const MAX_DEGREE: usize = 63;

    /// Build from a coefficient slice, `coeffs[i]` is the x^i term. Non-zero means 1.
    pub fn from_coeffs(coeffs: &[u8]) -> Self {
        let mut bits = 0u64;
        for (i, &c) in coeffs.iter().enumerate().take(Self::MAX_DEGREE + 1) {
            if c != 0 {
                bits |= 1u64 << i;
            }
        }
        Self(bits)
    }

    #[inline]
    pub fn bits(&self) -> u64 {
        self.0
    }

    #[inline]
    pub fn coeff(&self, i: usize) -> u8 {
        if i > Self::MAX_DEGREE {
            return 0;
        }
        ((self.0 >> i) & 1) as u8
    }

    /// `None` for the zero polynomial.
    #[inline]
    pub fn degree(&self) -> Option<usize> {
        if self.0 == 0 {
            None
        } else {
            Some(Self::MAX_DEGREE - self.0.leading_zeros() as usize)
        }
    }

    /// Remainder of long division by `divisor`. Dividing by zero returns `self`.
    pub fn rem(&self, divisor: &Self) -> Self {
        let Some(dd) = divisor.degree() else {
            return *self;
        };
        let mut r = self.0;
        while let Some(rd) = Self(r).degree() {
            if rd < dd {
                break;
            }
            r ^= divisor.0 << (rd - dd);
        }
        Self(r)
    }
}

impl Gf2 for BinPoly {
    #[inline]
    fn add(&self, other: &Self) -> Self {
        Self(self.0 ^ other.0)
    }

    /// Carry-less product. Terms above x^63 are dropped, callers keep the degree in range.
    fn mul(&self, other: &Self) -> Self {
        let mut acc = 0u64;
        let mut b = other.0;
        let mut shift = 0u32;
        while b != 0 && shift < 64 {
            if b & 1 == 1 {
                acc ^= self.0 << shift;
            }
            b >>= 1;
            shift += 1;
        }
        Self(acc)
    }

    #[inline]
    fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl Gf2InPlace for BinPoly {
    fn mul_in_place(&mut self, other: &Self) {
        *self = Gf2::mul(self, other);
    }
}

impl Gf2Construct for BinPoly {
    fn zero() -> Self {
        Self(0)
    }
    fn one() -> Self {
        Self(1)
    }
}

impl fmt::Debug for BinPoly {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BinPoly({:#x})", self.0)
    }
}

/// Prints as `x^10 + x^9 + ... + 1`.
impl fmt::Display for BinPoly {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some(deg) = self.degree() else {
            return f.write_str("0");
        };
        let mut first = true;
        for i in (0..=deg).rev() {
            if self.coeff(i) == 0 {
                continue;
            }
            if !first {
                f.write_str(" + ")?;
            }
            first = false;
            match i {
                0 => f.write_str("1")?,
                1 => f.write_str("x")?,
                _ => write!(f, "x^{i}")?,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn degree_of_zero_is_none() {
        assert_eq!(BinPoly::zero().degree(), None);
        assert_eq!(BinPoly::one().degree(), Some(0));
        assert_eq!(BinPoly(0x25).degree(), Some(5));
    }

    #[test]
    fn mul_matches_known_product() {
        // (x^5 + x^2 + 1)(x^5 + x^4 + x^3 + x^2 + 1)
        let p = BinPoly(0x25).mul(&BinPoly(0x3D));
        assert_eq!(p, BinPoly(0x769));
    }

    #[test]
    fn rem_of_multiple_is_zero() {
        let g = BinPoly(0x769);
        let c = g.mul(&BinPoly(0b1011));
        assert!(c.rem(&g).is_zero());
        assert_eq!(BinPoly(0b1).rem(&g), BinPoly(0b1));
    }

    #[test]
    fn display_lists_terms_high_to_low() {
        assert_eq!(BinPoly(0x25).to_string(), "x^5 + x^2 + 1");
        assert_eq!(BinPoly(0b10).to_string(), "x");
        assert_eq!(BinPoly::zero().to_string(), "0");
    }
}
