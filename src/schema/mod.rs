//! Static form schema module

mod field;
mod levels;

pub use field::*;
pub use levels::*;
