#![no_std]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

pub mod error;
pub use error::Error;

// O module
pub mod o;
pub use o::*;

// R module
pub mod r;
pub use r::*;

pub mod payload;
pub use payload::{describe, Kind, Payload};

pub mod convert;

#[cfg(feature = "std")]
pub mod catch;
#[cfg(feature = "std")]
pub use catch::Raised;
