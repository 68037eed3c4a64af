//! # nusa-core
//! Foundation types and traits for the NUSA PoVC engine.

pub mod config;
pub mod constants;
pub mod error;
pub mod traits;
pub mod types;
