//! Photons

use cosmology_api::{Species, StandardCosmology};

use crate::DensityRegistry;

/// Photon density parameter at z = 0
#[inline]
pub fn omega_photon0<C: StandardCosmology>(cosmo: &C) -> C::Array {
    cosmo.ogamma0()
}

/// Redshift-dependent photon density parameter
#[inline]
pub fn omega_photon<C: StandardCosmology>(cosmo: &C, z: &C::Array) -> Result<C::Array, C::Error> {
    cosmo.ogamma(z)
}

/// Photon density at z = 0 in M_sun Mpc⁻³
pub fn rho_photon0<C: StandardCosmology + 'static>(cosmo: &C) -> C::Array {
    DensityRegistry::global().density0(cosmo, Species::Photon)
}

/// Redshift-dependent photon density in M_sun Mpc⁻³
pub fn rho_photon<C: StandardCosmology + 'static>(
    cosmo: &C,
    z: &C::Array,
) -> Result<C::Array, C::Error> {
    DensityRegistry::global().density(cosmo, Species::Photon, z)
}
