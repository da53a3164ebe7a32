//! Cosmology Core - Derived quantities over any conforming cosmology
//!
//! This crate implements the derived-quantity layer:
//! - Background quantities (scale factor, total density, distances, ages)
//! - Standard scalars (Hubble parameter, CMB temperature)
//! - Per-species density parameters and densities
//! - Density dispatch: ρ = Ω · ρ_crit by default, overridable per type
//! - Namespace resolution across several cosmologies
//!
//! Every function is a pure read of the cosmology it is handed. Faults in the
//! cosmology's own accessors come back unchanged as its `Error` type.

pub mod background;
pub mod components;
pub mod config;
pub mod dispatch;
pub mod namespace;
pub mod standard;

#[cfg(test)]
mod fixture;

pub use background::*;
pub use components::*;
pub use config::*;
pub use dispatch::*;
pub use namespace::*;
pub use standard::*;

pub use cosmology_api::{
    Array, BackgroundCosmology, CosmologyApi, CosmologyError, CosmologyResult, Epoch, Namespace,
    Species, StandardCosmology,
};
