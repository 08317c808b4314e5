pub mod gf2;
pub mod gf2m;

pub use gf2::*;
pub use gf2m::*;
