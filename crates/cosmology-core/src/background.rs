//! Background quantities
//!
//! Quantities every FLRW cosmology provides, independent of its component
//! breakdown. All of them read a primitive straight off the cosmology except
//! the total density, which goes through density dispatch.
//!
//! Units: densities in M_sun Mpc⁻³, distances in Mpc, volumes in Mpc³ (per
//! steradian for the differential volume), times in Gyr.

use cosmology_api::BackgroundCosmology;

use crate::DensityRegistry;

/// Scale factor at z = 0
#[inline]
pub fn scale_factor0<C: BackgroundCosmology>(cosmo: &C) -> C::Array {
    cosmo.scale_factor0()
}

/// Redshift-dependent scale factor a = a0 / (1 + z).
///
/// The cosmology evaluates its own formula; nothing is recomputed here.
#[inline]
pub fn scale_factor<C: BackgroundCosmology>(cosmo: &C, z: &C::Array) -> Result<C::Array, C::Error> {
    cosmo.scale_factor(z)
}

// ============================================================================
// Omega
// ============================================================================

/// Omega total; the total density / critical density at z = 0
#[inline]
pub fn omega_total0<C: BackgroundCosmology>(cosmo: &C) -> C::Array {
    cosmo.otot0()
}

/// Redshift-dependent total density parameter
#[inline]
pub fn omega_total<C: BackgroundCosmology>(cosmo: &C, z: &C::Array) -> Result<C::Array, C::Error> {
    cosmo.otot(z)
}

/// Total density at z = 0 in M_sun Mpc⁻³.
///
/// Ω_tot0 · ρ_crit0 unless the cosmology type registered its own formula.
pub fn rho_total0<C: BackgroundCosmology + 'static>(cosmo: &C) -> C::Array {
    DensityRegistry::global().total_density0(cosmo)
}

/// Redshift-dependent total density in M_sun Mpc⁻³.
///
/// Ω_tot(z) · ρ_crit(z) unless the cosmology type registered its own formula.
pub fn rho_total<C: BackgroundCosmology + 'static>(
    cosmo: &C,
    z: &C::Array,
) -> Result<C::Array, C::Error> {
    DensityRegistry::global().total_density(cosmo, z)
}

// ============================================================================
// Density
// ============================================================================

/// Critical density at z = 0 in M_sun Mpc⁻³
#[inline]
pub fn critical_density0<C: BackgroundCosmology>(cosmo: &C) -> C::Array {
    cosmo.critical_density0()
}

/// Redshift-dependent critical density in M_sun Mpc⁻³
#[inline]
pub fn critical_density<C: BackgroundCosmology>(
    cosmo: &C,
    z: &C::Array,
) -> Result<C::Array, C::Error> {
    cosmo.critical_density(z)
}

// ============================================================================
// Time
// ============================================================================

/// Age of the universe in Gyr at redshift z
#[inline]
pub fn age<C: BackgroundCosmology>(cosmo: &C, z: &C::Array) -> Result<C::Array, C::Error> {
    cosmo.age(z)
}

/// Lookback time to redshift z in Gyr.
///
/// This is age(0) - age(z), but the value comes from the cosmology so the
/// age integral is not evaluated twice.
#[inline]
pub fn lookback_time<C: BackgroundCosmology>(
    cosmo: &C,
    z: &C::Array,
) -> Result<C::Array, C::Error> {
    cosmo.lookback_time(z)
}

// ============================================================================
// Distances
// ============================================================================

/// Comoving line-of-sight distance d_C(z) in Mpc.
///
/// Constant with time for objects in the Hubble flow.
#[inline]
pub fn comoving_distance<C: BackgroundCosmology>(
    cosmo: &C,
    z: &C::Array,
) -> Result<C::Array, C::Error> {
    cosmo.comoving_distance(z)
}

/// Transverse comoving distance d_M(z) in Mpc.
///
/// Corresponds to an angular separation of 1 radian at redshift z. Equal to
/// the comoving distance when Ω_k = 0.
#[inline]
pub fn comoving_transverse_distance<C: BackgroundCosmology>(
    cosmo: &C,
    z: &C::Array,
) -> Result<C::Array, C::Error> {
    cosmo.comoving_transverse_distance(z)
}

/// Angular diameter distance d_A(z) in Mpc.
///
/// The proper transverse distance corresponding to an angle of 1 radian
/// (Weinberg 1972, pp 420-424; Weedman 1986, pp 421-424; Peebles 1993,
/// pp 325-327).
#[inline]
pub fn angular_diameter_distance<C: BackgroundCosmology>(
    cosmo: &C,
    z: &C::Array,
) -> Result<C::Array, C::Error> {
    cosmo.angular_diameter_distance(z)
}

/// Luminosity distance d_L(z) in Mpc.
///
/// Converts bolometric flux to bolometric luminosity (Weinberg 1972,
/// pp 420-424; Weedman 1986, pp 60-62).
#[inline]
pub fn luminosity_distance<C: BackgroundCosmology>(
    cosmo: &C,
    z: &C::Array,
) -> Result<C::Array, C::Error> {
    cosmo.luminosity_distance(z)
}

// ============================================================================
// Volumes
// ============================================================================

/// Comoving volume in Mpc³ enclosed by redshifts below z.
///
/// A sphere of radius `comoving_distance` when Ω_k = 0.
#[inline]
pub fn comoving_volume<C: BackgroundCosmology>(
    cosmo: &C,
    z: &C::Array,
) -> Result<C::Array, C::Error> {
    cosmo.comoving_volume(z)
}

/// Differential comoving volume dV_c / (dΩ dz) in Mpc³ sr⁻¹
#[inline]
pub fn differential_comoving_volume<C: BackgroundCosmology>(
    cosmo: &C,
    z: &C::Array,
) -> Result<C::Array, C::Error> {
    cosmo.differential_comoving_volume(z)
}
