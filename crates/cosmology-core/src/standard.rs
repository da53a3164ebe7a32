//! Standard scalar quantities
//!
//! Hubble parameter and CMB temperature of a Standard cosmology. Each is a
//! direct read; the per-species densities live in `components`.

use cosmology_api::StandardCosmology;

/// Hubble parameter H0 at z = 0 in km s⁻¹ Mpc⁻¹
#[inline]
pub fn hubble_parameter0<C: StandardCosmology>(cosmo: &C) -> C::Array {
    cosmo.h0()
}

/// Dimensionless Hubble parameter h at z = 0
#[inline]
pub fn dimensionless_hubble_parameter0<C: StandardCosmology>(cosmo: &C) -> C::Array {
    cosmo.h()
}

/// Hubble distance in Mpc
#[inline]
pub fn hubble_distance<C: StandardCosmology>(cosmo: &C) -> C::Array {
    cosmo.hubble_distance()
}

/// Hubble time in Gyr
#[inline]
pub fn hubble_time<C: StandardCosmology>(cosmo: &C) -> C::Array {
    cosmo.hubble_time()
}

/// Hubble function H(z) in km s⁻¹ Mpc⁻¹
#[inline]
pub fn hubble_parameter<C: StandardCosmology>(
    cosmo: &C,
    z: &C::Array,
) -> Result<C::Array, C::Error> {
    cosmo.hubble(z)
}

/// Standardised Hubble function E(z) = H(z) / H0
#[inline]
pub fn standardized_hubble_function<C: StandardCosmology>(
    cosmo: &C,
    z: &C::Array,
) -> Result<C::Array, C::Error> {
    cosmo.efunc(z)
}

/// Inverse of the standardised Hubble function, 1 / E(z)
#[inline]
pub fn inv_standardized_hubble_function<C: StandardCosmology>(
    cosmo: &C,
    z: &C::Array,
) -> Result<C::Array, C::Error> {
    cosmo.inv_efunc(z)
}

// ============================================================================
// Temperature
// ============================================================================

/// CMB temperature at z = 0 in K
#[inline]
pub fn t_cmb0<C: StandardCosmology>(cosmo: &C) -> C::Array {
    cosmo.tcmb0()
}

/// Redshift-dependent CMB temperature in K
#[inline]
pub fn t_cmb<C: StandardCosmology>(cosmo: &C, z: &C::Array) -> Result<C::Array, C::Error> {
    cosmo.tcmb(z)
}
