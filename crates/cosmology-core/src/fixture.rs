//! Unit-test cosmology
//!
//! Closed-form ΛCDM bookkeeping: Ω_X(z) = Ω_X0 (1+z)^n / E²(z) and
//! ρ_crit(z) = ρ_crit0 E²(z). Distances, volumes and ages are placeholder
//! curves; tests only need them to be distinguishable.

use cosmology_api::{Array, BackgroundCosmology, CosmologyApi, Namespace, StandardCosmology};

/// Elementwise helpers the fixture needs from its arrays
pub trait Lanes: Array {
    fn splat(value: f64) -> Self;
    fn map(&self, f: impl Fn(f64) -> f64) -> Self;
    fn any(&self, pred: impl Fn(f64) -> bool) -> bool;
}

impl Lanes for f64 {
    fn splat(value: f64) -> Self {
        value
    }

    fn map(&self, f: impl Fn(f64) -> f64) -> Self {
        f(*self)
    }

    fn any(&self, pred: impl Fn(f64) -> bool) -> bool {
        pred(*self)
    }
}

impl<const N: usize> Lanes for [f64; N] {
    fn splat(value: f64) -> Self {
        [value; N]
    }

    fn map(&self, f: impl Fn(f64) -> f64) -> Self {
        std::array::from_fn(|i| f(self[i]))
    }

    fn any(&self, pred: impl Fn(f64) -> bool) -> bool {
        self.iter().any(|&v| pred(v))
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("redshift below -1")]
pub struct BadRedshift;

#[derive(Clone, Debug)]
pub struct Fixed<A> {
    pub ok0: f64,
    pub om0: f64,
    pub ob0: f64,
    pub ogamma0: f64,
    pub onu0: f64,
    pub ode0: f64,
    pub rho_crit0: f64,
    pub h0: f64,
    _array: std::marker::PhantomData<A>,
}

impl<A: Lanes> Fixed<A> {
    pub fn concordance() -> Self {
        Fixed {
            ok0: 0.0,
            om0: 0.3,
            ob0: 0.05,
            ogamma0: 5.0e-5,
            onu0: 3.5e-5,
            ode0: 0.7 - 8.5e-5,
            rho_crit0: 1.0,
            h0: 70.0,
            _array: std::marker::PhantomData,
        }
    }

    pub fn with_curvature(mut self, ok0: f64) -> Self {
        self.ode0 -= ok0;
        self.ok0 = ok0;
        self
    }

    fn check(&self, z: &A) -> Result<(), BadRedshift> {
        if z.any(|v| v < -1.0) {
            return Err(BadRedshift);
        }
        Ok(())
    }

    fn e2(&self, zp1: f64) -> f64 {
        let radiation = self.ogamma0 + self.onu0;
        self.om0 * zp1.powi(3) + radiation * zp1.powi(4) + self.ok0 * zp1.powi(2) + self.ode0
    }

    /// Ω_X(z) for a component scaling as (1+z)^n
    fn scaled(&self, z: &A, omega0: f64, n: i32) -> Result<A, BadRedshift> {
        self.check(z)?;
        Ok(z.map(|v| {
            let zp1 = 1.0 + v;
            omega0 * zp1.powi(n) / self.e2(zp1)
        }))
    }

    fn curve(&self, z: &A, f: impl Fn(f64) -> f64) -> Result<A, BadRedshift> {
        self.check(z)?;
        Ok(z.map(f))
    }
}

impl<A: Lanes> CosmologyApi for Fixed<A> {
    fn cosmology_namespace(&self, api_version: Option<&str>) -> Namespace {
        Namespace::of::<A>(api_version)
    }
}

impl<A: Lanes> BackgroundCosmology for Fixed<A> {
    type Array = A;
    type Error = BadRedshift;

    fn scale_factor0(&self) -> A {
        A::splat(1.0)
    }

    fn scale_factor(&self, z: &A) -> Result<A, BadRedshift> {
        self.curve(z, |v| 1.0 / (1.0 + v))
    }

    fn otot0(&self) -> A {
        A::splat(self.ok0 + self.om0 + self.ogamma0 + self.onu0 + self.ode0)
    }

    fn otot(&self, z: &A) -> Result<A, BadRedshift> {
        self.curve(z, |_| 1.0)
    }

    fn critical_density0(&self) -> A {
        A::splat(self.rho_crit0)
    }

    fn critical_density(&self, z: &A) -> Result<A, BadRedshift> {
        self.curve(z, |v| self.rho_crit0 * self.e2(1.0 + v))
    }

    fn age(&self, z: &A) -> Result<A, BadRedshift> {
        self.curve(z, |v| 13.0 / (1.0 + v))
    }

    fn lookback_time(&self, z: &A) -> Result<A, BadRedshift> {
        self.curve(z, |v| 13.0 - 13.0 / (1.0 + v))
    }

    fn comoving_distance(&self, z: &A) -> Result<A, BadRedshift> {
        self.curve(z, |v| 4000.0 * v)
    }

    fn comoving_transverse_distance(&self, z: &A) -> Result<A, BadRedshift> {
        self.curve(z, |v| 4001.0 * v)
    }

    fn angular_diameter_distance(&self, z: &A) -> Result<A, BadRedshift> {
        self.curve(z, |v| 4001.0 * v / (1.0 + v))
    }

    fn luminosity_distance(&self, z: &A) -> Result<A, BadRedshift> {
        self.curve(z, |v| 4001.0 * v * (1.0 + v))
    }

    fn comoving_volume(&self, z: &A) -> Result<A, BadRedshift> {
        self.curve(z, |v| 1.0e9 * v.powi(3))
    }

    fn differential_comoving_volume(&self, z: &A) -> Result<A, BadRedshift> {
        self.curve(z, |v| 3.0e9 * v.powi(2))
    }
}

impl<A: Lanes> StandardCosmology for Fixed<A> {
    fn h0(&self) -> A {
        A::splat(self.h0)
    }

    fn h(&self) -> A {
        A::splat(self.h0 / 100.0)
    }

    fn hubble_distance(&self) -> A {
        A::splat(299_792.458 / self.h0)
    }

    fn hubble_time(&self) -> A {
        A::splat(977.792 / self.h0)
    }

    fn hubble(&self, z: &A) -> Result<A, BadRedshift> {
        self.curve(z, |v| self.h0 * self.e2(1.0 + v).sqrt())
    }

    fn efunc(&self, z: &A) -> Result<A, BadRedshift> {
        self.curve(z, |v| self.e2(1.0 + v).sqrt())
    }

    fn inv_efunc(&self, z: &A) -> Result<A, BadRedshift> {
        self.curve(z, |v| 1.0 / self.e2(1.0 + v).sqrt())
    }

    fn tcmb0(&self) -> A {
        A::splat(2.7255)
    }

    fn tcmb(&self, z: &A) -> Result<A, BadRedshift> {
        self.curve(z, |v| 2.7255 * (1.0 + v))
    }

    fn ok0(&self) -> A {
        A::splat(self.ok0)
    }

    fn ok(&self, z: &A) -> Result<A, BadRedshift> {
        self.scaled(z, self.ok0, 2)
    }

    fn om0(&self) -> A {
        A::splat(self.om0)
    }

    fn om(&self, z: &A) -> Result<A, BadRedshift> {
        self.scaled(z, self.om0, 3)
    }

    fn ob0(&self) -> A {
        A::splat(self.ob0)
    }

    fn ob(&self, z: &A) -> Result<A, BadRedshift> {
        self.scaled(z, self.ob0, 3)
    }

    fn odm0(&self) -> A {
        A::splat(self.om0 - self.ob0)
    }

    fn odm(&self, z: &A) -> Result<A, BadRedshift> {
        self.scaled(z, self.om0 - self.ob0, 3)
    }

    fn ogamma0(&self) -> A {
        A::splat(self.ogamma0)
    }

    fn ogamma(&self, z: &A) -> Result<A, BadRedshift> {
        self.scaled(z, self.ogamma0, 4)
    }

    fn onu0(&self) -> A {
        A::splat(self.onu0)
    }

    fn onu(&self, z: &A) -> Result<A, BadRedshift> {
        self.scaled(z, self.onu0, 4)
    }

    fn ode0(&self) -> A {
        A::splat(self.ode0)
    }

    fn ode(&self, z: &A) -> Result<A, BadRedshift> {
        self.scaled(z, self.ode0, 0)
    }

    fn neff(&self) -> A {
        A::splat(3.046)
    }

    fn m_nu(&self) -> Vec<A> {
        vec![A::splat(0.0), A::splat(0.0), A::splat(0.06)]
    }
}
