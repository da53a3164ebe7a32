//! Matter
//!
//! The aggregate of baryons and cold dark matter.

use cosmology_api::{Species, StandardCosmology};

use crate::DensityRegistry;

/// Matter density parameter at z = 0
#[inline]
pub fn omega_matter0<C: StandardCosmology>(cosmo: &C) -> C::Array {
    cosmo.om0()
}

/// Redshift-dependent matter density parameter
#[inline]
pub fn omega_matter<C: StandardCosmology>(cosmo: &C, z: &C::Array) -> Result<C::Array, C::Error> {
    cosmo.om(z)
}

/// Matter density at z = 0 in M_sun Mpc⁻³
pub fn rho_matter0<C: StandardCosmology + 'static>(cosmo: &C) -> C::Array {
    DensityRegistry::global().density0(cosmo, Species::Matter)
}

/// Redshift-dependent matter density in M_sun Mpc⁻³
pub fn rho_matter<C: StandardCosmology + 'static>(
    cosmo: &C,
    z: &C::Array,
) -> Result<C::Array, C::Error> {
    DensityRegistry::global().density(cosmo, Species::Matter, z)
}
