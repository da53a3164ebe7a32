//! Namespace resolution
//!
//! Several operands, some of them cosmologies, are checked for a single
//! array-backend namespace. Non-cosmology operands (arrays, scalars) carry no
//! namespace and are skipped.

use cosmology_api::{CosmologyApi, CosmologyError, CosmologyResult, Namespace};

/// One input to namespace resolution
#[derive(Clone, Copy)]
pub enum Operand<'a> {
    /// Anything implementing the capability protocol
    Cosmology(&'a dyn CosmologyApi),
    /// Anything else
    Foreign,
}

impl Operand<'_> {
    /// Namespace reported by this operand, if it is a cosmology
    pub fn namespace(&self, api_version: Option<&str>) -> Option<Namespace> {
        match self {
            Operand::Cosmology(cosmo) => Some(cosmo.cosmology_namespace(api_version)),
            Operand::Foreign => None,
        }
    }
}

impl<'a, C: CosmologyApi> From<&'a C> for Operand<'a> {
    fn from(cosmo: &'a C) -> Self {
        Operand::Cosmology(cosmo)
    }
}

impl std::fmt::Debug for Operand<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Operand::Cosmology(cosmo) => f
                .debug_tuple("Cosmology")
                .field(&cosmo.cosmology_namespace(None))
                .finish(),
            Operand::Foreign => f.write_str("Foreign"),
        }
    }
}

/// Single namespace shared by every cosmology among `operands`.
///
/// Fails with `UnrecognizedInput` when no operand is a cosmology and with
/// `NamespaceConflict` when the cosmologies disagree. A conflict lists each
/// distinct namespace once, in the order first seen.
pub fn get_namespace(
    operands: &[Operand<'_>],
    api_version: Option<&str>,
) -> CosmologyResult<Namespace> {
    let mut namespaces: Vec<Namespace> = Vec::new();
    for ns in operands.iter().filter_map(|op| op.namespace(api_version)) {
        if !namespaces.contains(&ns) {
            namespaces.push(ns);
        }
    }

    match namespaces.len() {
        0 => Err(CosmologyError::UnrecognizedInput),
        1 => Ok(namespaces.swap_remove(0)),
        _ => Err(CosmologyError::NamespaceConflict { namespaces }),
    }
}

/// `get_namespace` over cosmologies only
pub fn get_namespace_of(
    cosmologies: &[&dyn CosmologyApi],
    api_version: Option<&str>,
) -> CosmologyResult<Namespace> {
    let operands: Vec<Operand<'_>> = cosmologies.iter().map(|c| Operand::Cosmology(*c)).collect();
    get_namespace(&operands, api_version)
}
