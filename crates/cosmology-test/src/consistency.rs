//! Consistency checkers
//!
//! Verify the algebraic laws a conforming cosmology and the interface must
//! satisfy together:
//! - ρ_X = Ω_X · ρ_crit at z = 0 and at z, through the public `rho_*` functions
//! - Σ Ω over the closure species equals Ω_tot
//!
//! Each check returns the first violation found. Types with a registered
//! specialization are expected to fail the density law unless their formula
//! reproduces it.

use cosmology_api::{Array, BackgroundCosmology, Species, StandardCosmology};
use thiserror::Error;

use crate::Elementwise;

/// A broken law
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Violation {
    #[error("{quantity} lane {lane}: expected {expected}, got {actual}")]
    Mismatch {
        quantity: String,
        lane: usize,
        expected: f64,
        actual: f64,
    },

    #[error("{quantity}: lane count {actual}, expected {expected}")]
    Shape {
        quantity: String,
        expected: usize,
        actual: usize,
    },

    #[error("{quantity}: cosmology fault: {message}")]
    Fault { quantity: String, message: String },
}

/// Relative and absolute tolerance for comparisons
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tolerance {
    pub relative: f64,
    pub absolute: f64,
}

impl Tolerance {
    /// Bitwise equality
    pub const EXACT: Tolerance = Tolerance {
        relative: 0.0,
        absolute: 0.0,
    };

    pub fn relative(relative: f64) -> Self {
        Tolerance {
            relative,
            absolute: 0.0,
        }
    }

    pub fn accepts(&self, expected: f64, actual: f64) -> bool {
        if expected == actual {
            return true;
        }
        let diff = (expected - actual).abs();
        diff <= self.absolute || diff <= self.relative * expected.abs().max(actual.abs())
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Tolerance {
            relative: 1e-12,
            absolute: 1e-300,
        }
    }
}

/// Compare two arrays lane by lane.
pub fn compare<A: Elementwise>(
    quantity: &str,
    expected: &A,
    actual: &A,
    tolerance: Tolerance,
) -> Result<(), Violation> {
    let expected = expected.values();
    let actual = actual.values();
    if expected.len() != actual.len() {
        return Err(Violation::Shape {
            quantity: quantity.to_owned(),
            expected: expected.len(),
            actual: actual.len(),
        });
    }

    for (lane, (&e, &a)) in expected.iter().zip(&actual).enumerate() {
        if !tolerance.accepts(e, a) {
            return Err(Violation::Mismatch {
                quantity: quantity.to_owned(),
                lane,
                expected: e,
                actual: a,
            });
        }
    }
    Ok(())
}

fn fault(quantity: &str, err: impl std::error::Error) -> Violation {
    Violation::Fault {
        quantity: quantity.to_owned(),
        message: err.to_string(),
    }
}

/// ρ_X0 through the public function for `species`
pub fn rho0_of<C>(cosmo: &C, species: Species) -> C::Array
where
    C: StandardCosmology + 'static,
{
    match species {
        Species::Total => cosmology_core::rho_total0(cosmo),
        Species::Curvature => cosmology_core::rho_curve0(cosmo),
        Species::Matter => cosmology_core::rho_matter0(cosmo),
        Species::Baryon => cosmology_core::rho_baryon0(cosmo),
        Species::DarkMatter => cosmology_core::rho_dm0(cosmo),
        Species::Photon => cosmology_core::rho_photon0(cosmo),
        Species::Neutrino => cosmology_core::rho_neutrino0(cosmo),
        Species::DarkEnergy => cosmology_core::rho_de0(cosmo),
    }
}

/// ρ_X(z) through the public function for `species`
pub fn rho_of<C>(cosmo: &C, species: Species, z: &C::Array) -> Result<C::Array, C::Error>
where
    C: StandardCosmology + 'static,
{
    match species {
        Species::Total => cosmology_core::rho_total(cosmo, z),
        Species::Curvature => cosmology_core::rho_curve(cosmo, z),
        Species::Matter => cosmology_core::rho_matter(cosmo, z),
        Species::Baryon => cosmology_core::rho_baryon(cosmo, z),
        Species::DarkMatter => cosmology_core::rho_dm(cosmo, z),
        Species::Photon => cosmology_core::rho_photon(cosmo, z),
        Species::Neutrino => cosmology_core::rho_neutrino(cosmo, z),
        Species::DarkEnergy => cosmology_core::rho_de(cosmo, z),
    }
}

/// Check ρ = Ω · ρ_crit for every species and the total, at z = 0 and at `z`.
pub fn check_density_law<C>(
    cosmo: &C,
    z: &C::Array,
    tolerance: Tolerance,
) -> Result<(), Violation>
where
    C: StandardCosmology + 'static,
    C::Array: Elementwise,
{
    let crit0 = cosmo.critical_density0();
    let crit = cosmo
        .critical_density(z)
        .map_err(|e| fault("critical density", e))?;

    for &species in std::iter::once(&Species::Total).chain(Species::components()) {
        let quantity = format!("rho_{}0", species.name());
        let expected = cosmo.omega0(species).product(&crit0);
        compare(&quantity, &expected, &rho0_of(cosmo, species), tolerance)?;

        let quantity = format!("rho_{}(z)", species.name());
        let omega = cosmo.omega(species, z).map_err(|e| fault(&quantity, e))?;
        let actual = rho_of(cosmo, species, z).map_err(|e| fault(&quantity, e))?;
        compare(&quantity, &omega.product(&crit), &actual, tolerance)?;

        tracing::trace!(%species, "density law holds");
    }
    Ok(())
}

/// Check Σ Ω_X = Ω_tot over the closure species at z = 0 and at `z`.
pub fn check_closure<C>(
    cosmo: &C,
    z: &C::Array,
    tolerance: Tolerance,
) -> Result<(), Violation>
where
    C: StandardCosmology,
    C::Array: Elementwise,
{
    let sum0 = sum_lanes(Species::closure().iter().map(|&s| cosmo.omega0(s)));
    compare("closure at z=0", &cosmo.otot0(), &sum0, tolerance)?;

    let mut terms = Vec::with_capacity(Species::closure().len());
    for &species in Species::closure() {
        terms.push(cosmo.omega(species, z).map_err(|e| fault(species.name(), e))?);
    }
    let total = cosmo.otot(z).map_err(|e| fault("total", e))?;
    compare("closure at z", &total, &sum_lanes(terms.into_iter()), tolerance)
}

/// Check that `scale_factor(z) == scale_factor0 / (1 + z)` within `tolerance`.
pub fn check_scale_factor<C>(
    cosmo: &C,
    z: &C::Array,
    tolerance: Tolerance,
) -> Result<(), Violation>
where
    C: BackgroundCosmology,
    C::Array: Elementwise,
{
    let expected = cosmo.scale_factor0().zip_with(z, |a0, v| a0 / (1.0 + v));
    let actual = cosmology_core::scale_factor(cosmo, z).map_err(|e| fault("scale factor", e))?;
    compare("scale factor", &expected, &actual, tolerance)
}

fn sum_lanes<A: Elementwise>(mut terms: impl Iterator<Item = A>) -> A {
    let first = terms.next().unwrap_or_else(|| A::splat(0.0));
    terms.fold(first, |acc, term| acc.zip_with(&term, |a, b| a + b))
}
