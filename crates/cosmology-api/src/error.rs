//! Error types for the cosmology interface layer
//!
//! Only input recognition, namespace consistency and registry bookkeeping
//! fail here. Faults inside a cosmology's own accessors are returned as that
//! cosmology's associated `Error` type and never pass through this enum.

use thiserror::Error;

use crate::{Epoch, Namespace, Species};

/// Interface layer errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CosmologyError {
    // Namespace errors
    #[error("Unrecognized cosmology input")]
    UnrecognizedInput,

    #[error("Multiple namespaces for cosmology inputs: {namespaces:?}")]
    NamespaceConflict { namespaces: Vec<Namespace> },

    // Dispatch errors
    #[error("Duplicate {species} density specialization at {epoch} for {cosmology}")]
    DuplicateSpecialization {
        species: Species,
        epoch: Epoch,
        cosmology: &'static str,
    },

    #[error("Density registry is sealed")]
    RegistrySealed,
}

/// Result type for interface layer operations
pub type CosmologyResult<T> = Result<T, CosmologyError>;
