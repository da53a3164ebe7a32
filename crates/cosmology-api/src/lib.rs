//! Cosmology API - Capability protocols and primitives
//!
//! This crate defines the contract every FLRW cosmology implementation is
//! queried through:
//! - Array backends (`Array`) and their namespaces (`Namespace`)
//! - Capability tiers (`BackgroundCosmology` ⊂ `StandardCosmology`)
//! - Species and epoch keys used by density dispatch
//! - The error taxonomy of the interface layer
//!
//! Concrete cosmologies live elsewhere. They implement the traits here and
//! are consumed through the derived-quantity functions of `cosmology-core`.

pub mod array;
pub mod capability;
pub mod error;
pub mod namespace;
pub mod species;

pub use array::*;
pub use capability::*;
pub use error::*;
pub use namespace::*;
pub use species::*;
