//! Reference cosmologies
//!
//! `Lcdm<A>` is a ΛCDM cosmology with photons, massless neutrinos and optional
//! curvature, evaluated over any fixture backend. Distances and ages come from
//! composite Simpson quadrature; accuracy is ~1e-8 relative, which is plenty
//! for exercising the interface.
//!
//! `Background<A>` wraps an `Lcdm<A>` and exposes only the Background tier.

use std::f64::consts::PI;

use cosmology_api::{BackgroundCosmology, CosmologyApi, Namespace, StandardCosmology};
use thiserror::Error;

use crate::Elementwise;

/// Speed of light in km s⁻¹
const C_KM_S: f64 = 299_792.458;

/// 1 / (100 km s⁻¹ Mpc⁻¹) in Gyr
const HUBBLE_TIME_UNIT: f64 = 9.777_922_216_807_891;

/// ρ_crit0 / h² in M_sun Mpc⁻³
const CRITICAL_DENSITY_UNIT: f64 = 2.775_366_27e11;

/// Ω_γ h² at T_cmb = 2.7255 K
const PHOTON_DENSITY_UNIT: f64 = 2.472_8e-5;

/// Reference CMB temperature for `PHOTON_DENSITY_UNIT` in K
const REFERENCE_TCMB: f64 = 2.7255;

/// Ω_ν / Ω_γ per effective species: 7/8 (4/11)^(4/3)
const NEUTRINO_PER_SPECIES: f64 = 0.227_107_317_660_239_4;

/// Simpson intervals per integral (even)
const QUADRATURE_INTERVALS: usize = 512;

/// Fixture cosmology faults
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FixtureError {
    #[error("redshift {z} is outside (-1, inf)")]
    RedshiftOutOfRange { z: f64 },
}

/// Parameters of the reference cosmology
#[derive(Clone, Debug, PartialEq)]
pub struct LcdmParams {
    /// Hubble parameter in km s⁻¹ Mpc⁻¹
    pub h0: f64,
    /// Matter density parameter
    pub om0: f64,
    /// Baryon density parameter
    pub ob0: f64,
    /// Curvature density parameter
    pub ok0: f64,
    /// CMB temperature in K
    pub tcmb0: f64,
    /// Effective number of neutrino species
    pub neff: f64,
    /// Neutrino masses in eV
    pub m_nu: Vec<f64>,
}

impl Default for LcdmParams {
    /// Planck 2018 central values, flat
    fn default() -> Self {
        LcdmParams {
            h0: 67.66,
            om0: 0.30966,
            ob0: 0.04897,
            ok0: 0.0,
            tcmb0: 2.7255,
            neff: 3.046,
            m_nu: vec![0.0, 0.0, 0.06],
        }
    }
}

impl LcdmParams {
    /// Matter-only flat universe (no radiation, no dark energy)
    pub fn einstein_de_sitter() -> Self {
        LcdmParams {
            h0: 70.0,
            om0: 1.0,
            ob0: 0.0,
            ok0: 0.0,
            tcmb0: 0.0,
            neff: 0.0,
            m_nu: Vec::new(),
        }
    }

    pub fn with_curvature(mut self, ok0: f64) -> Self {
        self.ok0 = ok0;
        self
    }
}

/// Reference ΛCDM cosmology over array backend `A`
#[derive(Clone, Debug)]
pub struct Lcdm<A> {
    params: LcdmParams,
    ogamma0: f64,
    onu0: f64,
    ode0: f64,
    rho_crit0: f64,
    _array: std::marker::PhantomData<A>,
}

impl<A: Elementwise> Lcdm<A> {
    /// Derive radiation and dark energy from `params`.
    ///
    /// Ω_de takes whatever closes the budget, so Ω_tot0 = 1 up to rounding.
    pub fn new(params: LcdmParams) -> Self {
        let h2 = (params.h0 / 100.0).powi(2);
        let ogamma0 = PHOTON_DENSITY_UNIT * (params.tcmb0 / REFERENCE_TCMB).powi(4) / h2;
        let onu0 = NEUTRINO_PER_SPECIES * params.neff * ogamma0;
        let ode0 = 1.0 - params.ok0 - params.om0 - ogamma0 - onu0;

        Lcdm {
            ogamma0,
            onu0,
            ode0,
            rho_crit0: CRITICAL_DENSITY_UNIT * h2,
            params,
            _array: std::marker::PhantomData,
        }
    }

    /// Planck 2018 flat cosmology
    pub fn planck18() -> Self {
        Self::new(LcdmParams::default())
    }

    /// Report densities in units of today's critical density (ρ_crit0 = 1).
    pub fn in_critical_units(mut self) -> Self {
        self.rho_crit0 = 1.0;
        self
    }

    /// E²(z) at 1 + z
    fn e2(&self, zp1: f64) -> f64 {
        let p = &self.params;
        let radiation = self.ogamma0 + self.onu0;
        ((radiation * zp1 + p.om0) * zp1 + p.ok0) * zp1 * zp1 + self.ode0
    }

    fn efunc_at(&self, z: f64) -> f64 {
        self.e2(1.0 + z).sqrt()
    }

    fn hubble_distance_mpc(&self) -> f64 {
        C_KM_S / self.params.h0
    }

    fn hubble_time_gyr(&self) -> f64 {
        HUBBLE_TIME_UNIT * 100.0 / self.params.h0
    }

    fn comoving_distance_at(&self, z: f64) -> f64 {
        self.hubble_distance_mpc() * simpson(|x| 1.0 / self.efunc_at(x), 0.0, z)
    }

    fn transverse_distance_at(&self, z: f64) -> f64 {
        let d_c = self.comoving_distance_at(z);
        let ok0 = self.params.ok0;
        if ok0 == 0.0 {
            return d_c;
        }
        let d_h = self.hubble_distance_mpc();
        let sqrt_ok = ok0.abs().sqrt();
        if ok0 > 0.0 {
            d_h / sqrt_ok * (sqrt_ok * d_c / d_h).sinh()
        } else {
            d_h / sqrt_ok * (sqrt_ok * d_c / d_h).sin()
        }
    }

    fn comoving_volume_at(&self, z: f64) -> f64 {
        let d_m = self.transverse_distance_at(z);
        let ok0 = self.params.ok0;
        if ok0 == 0.0 {
            return 4.0 * PI / 3.0 * d_m.powi(3);
        }
        let d_h = self.hubble_distance_mpc();
        let x = d_m / d_h;
        let sqrt_ok = ok0.abs().sqrt();
        let term = if ok0 > 0.0 {
            (sqrt_ok * x).asinh() / sqrt_ok
        } else {
            (sqrt_ok * x).asin() / sqrt_ok
        };
        2.0 * PI * d_h.powi(3) / ok0 * (x * (1.0 + ok0 * x * x).sqrt() - term)
    }

    /// Age at redshift z in Gyr.
    ///
    /// Integrates dt = da / (a E) over s = sqrt(a), which keeps the integrand
    /// smooth at the big bang for both radiation and matter domination.
    fn age_at(&self, z: f64) -> f64 {
        let p = &self.params;
        let radiation = self.ogamma0 + self.onu0;
        let integrand = |s: f64| {
            if s == 0.0 {
                return 0.0;
            }
            let a = s * s;
            let a4e2 = radiation + a * (p.om0 + a * (p.ok0 + a * a * self.ode0));
            2.0 * s * a / a4e2.sqrt()
        };
        self.hubble_time_gyr() * simpson(integrand, 0.0, (1.0 / (1.0 + z)).sqrt())
    }

    fn species_omega(&self, omega0: f64, exponent: i32, z: &A) -> Result<A, FixtureError> {
        checked(z)?;
        Ok(z.map(|v| {
            let zp1 = 1.0 + v;
            omega0 * zp1.powi(exponent) / self.e2(zp1)
        }))
    }

    fn evaluate(&self, z: &A, f: impl Fn(f64) -> f64) -> Result<A, FixtureError> {
        checked(z)?;
        Ok(z.map(f))
    }
}

/// Reject redshifts at or below -1, and NaN
fn checked<A: Elementwise>(z: &A) -> Result<(), FixtureError> {
    match z.values().into_iter().find(|v| !(*v > -1.0)) {
        Some(bad) => Err(FixtureError::RedshiftOutOfRange { z: bad }),
        None => Ok(()),
    }
}

/// Composite Simpson rule on [a, b]
fn simpson(f: impl Fn(f64) -> f64, a: f64, b: f64) -> f64 {
    if a == b {
        return 0.0;
    }
    let n = QUADRATURE_INTERVALS;
    let h = (b - a) / n as f64;
    let inner: f64 = (1..n)
        .map(|i| {
            let weight = if i % 2 == 1 { 4.0 } else { 2.0 };
            weight * f(a + i as f64 * h)
        })
        .sum();
    h / 3.0 * (f(a) + inner + f(b))
}

impl<A: Elementwise> CosmologyApi for Lcdm<A> {
    fn cosmology_namespace(&self, api_version: Option<&str>) -> Namespace {
        Namespace::of::<A>(api_version)
    }
}

impl<A: Elementwise> BackgroundCosmology for Lcdm<A> {
    type Array = A;
    type Error = FixtureError;

    fn scale_factor0(&self) -> A {
        A::splat(1.0)
    }

    fn scale_factor(&self, z: &A) -> Result<A, FixtureError> {
        self.evaluate(z, |v| 1.0 / (1.0 + v))
    }

    fn otot0(&self) -> A {
        let p = &self.params;
        A::splat(p.ok0 + p.om0 + self.ogamma0 + self.onu0 + self.ode0)
    }

    fn otot(&self, z: &A) -> Result<A, FixtureError> {
        let p = &self.params;
        self.evaluate(z, |v| {
            let zp1 = 1.0 + v;
            let e2 = self.e2(zp1);
            (p.ok0 * zp1.powi(2)
                + p.om0 * zp1.powi(3)
                + (self.ogamma0 + self.onu0) * zp1.powi(4)
                + self.ode0)
                / e2
        })
    }

    fn critical_density0(&self) -> A {
        A::splat(self.rho_crit0)
    }

    fn critical_density(&self, z: &A) -> Result<A, FixtureError> {
        self.evaluate(z, |v| self.rho_crit0 * self.e2(1.0 + v))
    }

    fn age(&self, z: &A) -> Result<A, FixtureError> {
        self.evaluate(z, |v| self.age_at(v))
    }

    fn lookback_time(&self, z: &A) -> Result<A, FixtureError> {
        let today = self.age_at(0.0);
        self.evaluate(z, |v| today - self.age_at(v))
    }

    fn comoving_distance(&self, z: &A) -> Result<A, FixtureError> {
        self.evaluate(z, |v| self.comoving_distance_at(v))
    }

    fn comoving_transverse_distance(&self, z: &A) -> Result<A, FixtureError> {
        self.evaluate(z, |v| self.transverse_distance_at(v))
    }

    fn angular_diameter_distance(&self, z: &A) -> Result<A, FixtureError> {
        self.evaluate(z, |v| self.transverse_distance_at(v) / (1.0 + v))
    }

    fn luminosity_distance(&self, z: &A) -> Result<A, FixtureError> {
        self.evaluate(z, |v| self.transverse_distance_at(v) * (1.0 + v))
    }

    fn comoving_volume(&self, z: &A) -> Result<A, FixtureError> {
        self.evaluate(z, |v| self.comoving_volume_at(v))
    }

    fn differential_comoving_volume(&self, z: &A) -> Result<A, FixtureError> {
        let d_h = self.hubble_distance_mpc();
        self.evaluate(z, |v| {
            let d_m = self.transverse_distance_at(v);
            d_h * d_m * d_m / self.efunc_at(v)
        })
    }
}

impl<A: Elementwise> StandardCosmology for Lcdm<A> {
    fn h0(&self) -> A {
        A::splat(self.params.h0)
    }

    fn h(&self) -> A {
        A::splat(self.params.h0 / 100.0)
    }

    fn hubble_distance(&self) -> A {
        A::splat(self.hubble_distance_mpc())
    }

    fn hubble_time(&self) -> A {
        A::splat(self.hubble_time_gyr())
    }

    fn hubble(&self, z: &A) -> Result<A, FixtureError> {
        self.evaluate(z, |v| self.params.h0 * self.efunc_at(v))
    }

    fn efunc(&self, z: &A) -> Result<A, FixtureError> {
        self.evaluate(z, |v| self.efunc_at(v))
    }

    fn inv_efunc(&self, z: &A) -> Result<A, FixtureError> {
        self.evaluate(z, |v| 1.0 / self.efunc_at(v))
    }

    fn tcmb0(&self) -> A {
        A::splat(self.params.tcmb0)
    }

    fn tcmb(&self, z: &A) -> Result<A, FixtureError> {
        self.evaluate(z, |v| self.params.tcmb0 * (1.0 + v))
    }

    fn ok0(&self) -> A {
        A::splat(self.params.ok0)
    }

    fn ok(&self, z: &A) -> Result<A, FixtureError> {
        self.species_omega(self.params.ok0, 2, z)
    }

    fn om0(&self) -> A {
        A::splat(self.params.om0)
    }

    fn om(&self, z: &A) -> Result<A, FixtureError> {
        self.species_omega(self.params.om0, 3, z)
    }

    fn ob0(&self) -> A {
        A::splat(self.params.ob0)
    }

    fn ob(&self, z: &A) -> Result<A, FixtureError> {
        self.species_omega(self.params.ob0, 3, z)
    }

    fn odm0(&self) -> A {
        A::splat(self.params.om0 - self.params.ob0)
    }

    fn odm(&self, z: &A) -> Result<A, FixtureError> {
        self.species_omega(self.params.om0 - self.params.ob0, 3, z)
    }

    fn ogamma0(&self) -> A {
        A::splat(self.ogamma0)
    }

    fn ogamma(&self, z: &A) -> Result<A, FixtureError> {
        self.species_omega(self.ogamma0, 4, z)
    }

    fn onu0(&self) -> A {
        A::splat(self.onu0)
    }

    fn onu(&self, z: &A) -> Result<A, FixtureError> {
        self.species_omega(self.onu0, 4, z)
    }

    fn ode0(&self) -> A {
        A::splat(self.ode0)
    }

    fn ode(&self, z: &A) -> Result<A, FixtureError> {
        self.species_omega(self.ode0, 0, z)
    }

    fn neff(&self) -> A {
        A::splat(self.params.neff)
    }

    fn m_nu(&self) -> Vec<A> {
        self.params.m_nu.iter().map(|&m| A::splat(m)).collect()
    }
}

// ============================================================================
// BACKGROUND-ONLY VIEW
// ============================================================================

/// An `Lcdm<A>` seen through the Background tier only
#[derive(Clone, Debug)]
pub struct Background<A>(pub Lcdm<A>);

impl<A: Elementwise> CosmologyApi for Background<A> {
    fn cosmology_namespace(&self, api_version: Option<&str>) -> Namespace {
        self.0.cosmology_namespace(api_version)
    }
}

impl<A: Elementwise> BackgroundCosmology for Background<A> {
    type Array = A;
    type Error = FixtureError;

    fn scale_factor0(&self) -> A {
        self.0.scale_factor0()
    }

    fn scale_factor(&self, z: &A) -> Result<A, FixtureError> {
        self.0.scale_factor(z)
    }

    fn otot0(&self) -> A {
        self.0.otot0()
    }

    fn otot(&self, z: &A) -> Result<A, FixtureError> {
        self.0.otot(z)
    }

    fn critical_density0(&self) -> A {
        self.0.critical_density0()
    }

    fn critical_density(&self, z: &A) -> Result<A, FixtureError> {
        self.0.critical_density(z)
    }

    fn age(&self, z: &A) -> Result<A, FixtureError> {
        self.0.age(z)
    }

    fn lookback_time(&self, z: &A) -> Result<A, FixtureError> {
        self.0.lookback_time(z)
    }

    fn comoving_distance(&self, z: &A) -> Result<A, FixtureError> {
        self.0.comoving_distance(z)
    }

    fn comoving_transverse_distance(&self, z: &A) -> Result<A, FixtureError> {
        self.0.comoving_transverse_distance(z)
    }

    fn angular_diameter_distance(&self, z: &A) -> Result<A, FixtureError> {
        self.0.angular_diameter_distance(z)
    }

    fn luminosity_distance(&self, z: &A) -> Result<A, FixtureError> {
        self.0.luminosity_distance(z)
    }

    fn comoving_volume(&self, z: &A) -> Result<A, FixtureError> {
        self.0.comoving_volume(z)
    }

    fn differential_comoving_volume(&self, z: &A) -> Result<A, FixtureError> {
        self.0.differential_comoving_volume(z)
    }
}
