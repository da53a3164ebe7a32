//! Baryons

use cosmology_api::{Species, StandardCosmology};

use crate::DensityRegistry;

/// Baryon density parameter at z = 0
#[inline]
pub fn omega_baryon0<C: StandardCosmology>(cosmo: &C) -> C::Array {
    cosmo.ob0()
}

/// Redshift-dependent baryon density parameter
#[inline]
pub fn omega_baryon<C: StandardCosmology>(cosmo: &C, z: &C::Array) -> Result<C::Array, C::Error> {
    cosmo.ob(z)
}

/// Baryon density at z = 0 in M_sun Mpc⁻³
pub fn rho_baryon0<C: StandardCosmology + 'static>(cosmo: &C) -> C::Array {
    DensityRegistry::global().density0(cosmo, Species::Baryon)
}

/// Redshift-dependent baryon density in M_sun Mpc⁻³
pub fn rho_baryon<C: StandardCosmology + 'static>(
    cosmo: &C,
    z: &C::Array,
) -> Result<C::Array, C::Error> {
    DensityRegistry::global().density(cosmo, Species::Baryon, z)
}
