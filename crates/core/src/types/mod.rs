//! Content types shared by the site and the CLI.

pub mod id;
pub mod price;

pub use id::*;
pub use price::{Price, PriceError};
