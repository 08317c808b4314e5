use once_cell::sync::Lazy;

use super::encoder::Bch;
use super::params::{PAGER_BCH_K, PAGER_BCH_N, PAGER_BCH_PRIMITIVE_POLY};

pub static PAGER_BCH: Lazy<Bch> =
    Lazy::new(|| Bch::new(PAGER_BCH_N, PAGER_BCH_K, PAGER_BCH_PRIMITIVE_POLY));

/// Encode a 21-bit pager data word into its 31-bit code word.
#[inline]
pub fn encode(data: u32) -> u32 {
    PAGER_BCH.encode(data)
}
