//! Form state module

mod branch;
mod form_state;
mod questions;
mod snapshot;

pub use branch::*;
pub use form_state::*;
pub use questions::*;
pub use snapshot::*;
