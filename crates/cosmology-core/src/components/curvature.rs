//! Curvature

use cosmology_api::{Species, StandardCosmology};

use crate::DensityRegistry;

/// Curvature density parameter at z = 0
#[inline]
pub fn omega_curve0<C: StandardCosmology>(cosmo: &C) -> C::Array {
    cosmo.ok0()
}

/// Redshift-dependent curvature density parameter
#[inline]
pub fn omega_curve<C: StandardCosmology>(cosmo: &C, z: &C::Array) -> Result<C::Array, C::Error> {
    cosmo.ok(z)
}

/// Curvature density at z = 0 in M_sun Mpc⁻³
pub fn rho_curve0<C: StandardCosmology + 'static>(cosmo: &C) -> C::Array {
    DensityRegistry::global().density0(cosmo, Species::Curvature)
}

/// Redshift-dependent curvature density in M_sun Mpc⁻³
pub fn rho_curve<C: StandardCosmology + 'static>(
    cosmo: &C,
    z: &C::Array,
) -> Result<C::Array, C::Error> {
    DensityRegistry::global().density(cosmo, Species::Curvature, z)
}
