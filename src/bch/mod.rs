pub mod error;
pub mod params;
pub mod generator;
pub mod encoder;
pub mod pager;
pub use error::*;
pub use params::*;
pub use encoder::Bch;
pub use generator::{build_generator, cyclotomic_coset, minimal_polynomial};
