//! Dark energy

use cosmology_api::{Species, StandardCosmology};

use crate::DensityRegistry;

/// Dark energy density parameter at z = 0
#[inline]
pub fn omega_de0<C: StandardCosmology>(cosmo: &C) -> C::Array {
    cosmo.ode0()
}

/// Redshift-dependent dark energy density parameter
#[inline]
pub fn omega_de<C: StandardCosmology>(cosmo: &C, z: &C::Array) -> Result<C::Array, C::Error> {
    cosmo.ode(z)
}

/// Dark energy density at z = 0 in M_sun Mpc⁻³
pub fn rho_de0<C: StandardCosmology + 'static>(cosmo: &C) -> C::Array {
    DensityRegistry::global().density0(cosmo, Species::DarkEnergy)
}

/// Redshift-dependent dark energy density in M_sun Mpc⁻³
pub fn rho_de<C: StandardCosmology + 'static>(
    cosmo: &C,
    z: &C::Array,
) -> Result<C::Array, C::Error> {
    DensityRegistry::global().density(cosmo, Species::DarkEnergy, z)
}
