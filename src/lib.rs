//! Binary BCH forward-error-correction encoder.
//!
//! [`GfTables`] builds GF(2^m) from a primitive polynomial, [`build_generator`] derives
//! the code's generator polynomial from the minimal polynomials of α, α^2, ..., and
//! [`Bch`] performs systematic encoding of data words packed into a `u32`.
//!
//! ```
//! use bchfec::Bch;
//!
//! let bch = Bch::new(31, 21, 0x25);
//! assert_eq!(bch.encode(0x1), 0x769);
//! ```

pub mod bch;
pub mod bits;
pub mod gf;
pub mod storage;

pub use bch::*;
pub use gf::*;
pub use storage::BCH_MAX_N;
