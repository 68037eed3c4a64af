//! Integration test suite for the NUSA PoVC engine.
//!
//! This crate exercises the engine through its public trait surface the way
//! external callers (the HTTP layer, the CLI) do, including the wire-format
//! contract those callers depend on.

pub mod helpers;
