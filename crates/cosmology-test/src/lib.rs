//! Cosmology Test Harness - Fixtures and consistency checks
//!
//! This crate provides:
//! - A second array backend (`Lanes`) for namespace and per-backend dispatch tests
//! - A reference flat/curved ΛCDM cosmology over any fixture backend
//! - A Background-only view of it
//! - Checkers for the density law and the closure relation
//! - Logging bootstrap for tests

pub mod backend;
pub mod consistency;
pub mod fixtures;
pub mod logging;

pub use backend::*;
pub use consistency::*;
pub use fixtures::*;
pub use logging::*;
