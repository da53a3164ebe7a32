//! Neutrinos
//!
//! Besides the density pair, neutrinos carry the effective number of species
//! and the mass of each eigenstate.

use cosmology_api::{Species, StandardCosmology};

use crate::DensityRegistry;

/// Neutrino density parameter at z = 0
#[inline]
pub fn omega_neutrino0<C: StandardCosmology>(cosmo: &C) -> C::Array {
    cosmo.onu0()
}

/// Redshift-dependent neutrino density parameter
#[inline]
pub fn omega_neutrino<C: StandardCosmology>(
    cosmo: &C,
    z: &C::Array,
) -> Result<C::Array, C::Error> {
    cosmo.onu(z)
}

/// Neutrino density at z = 0 in M_sun Mpc⁻³
pub fn rho_neutrino0<C: StandardCosmology + 'static>(cosmo: &C) -> C::Array {
    DensityRegistry::global().density0(cosmo, Species::Neutrino)
}

/// Redshift-dependent neutrino density in M_sun Mpc⁻³
pub fn rho_neutrino<C: StandardCosmology + 'static>(
    cosmo: &C,
    z: &C::Array,
) -> Result<C::Array, C::Error> {
    DensityRegistry::global().density(cosmo, Species::Neutrino, z)
}

/// Effective number of neutrino species
#[inline]
pub fn n_eff<C: StandardCosmology>(cosmo: &C) -> C::Array {
    cosmo.neff()
}

/// Mass of each neutrino species in eV
#[inline]
pub fn mass_nu<C: StandardCosmology>(cosmo: &C) -> Vec<C::Array> {
    cosmo.m_nu()
}
