//! Hearth Core - Shared domain types.
//!
//! Used by both Hearth components:
//! - `site` - Public restaurant pages and the admin content API
//! - `cli` - Migrations and operator tools
//!
//! # Architecture
//!
//! The core crate contains only types and pure functions - no I/O, no database
//! access, no HTTP. The optional `postgres` feature adds `sqlx` encode/decode
//! impls for the ID and price types.
//!
//! # Modules
//!
//! - [`types`] - Typed row IDs and prices
//! - [`hours`] - Weekly business hours and their grouped display schedule

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod hours;
pub mod types;

pub use types::*;
