//! Capability protocols
//!
//! A cosmology is anything exposing a fixed set of named primitives. There
//! are two tiers:
//! - Background: scale factor, total density, critical density, distances,
//!   volumes and ages
//! - Standard: Background plus the Hubble parameter, CMB temperature and one
//!   density parameter per species
//!
//! Primitives at z = 0 are infallible properties. Redshift-dependent
//! primitives may fail (unsupported domain, malformed input); that failure
//! belongs to the cosmology and is reported through its own `Error` type.

use crate::{Array, Namespace, Species};

/// Namespace reporting, the part of the protocol every cosmology shares.
///
/// Object safe, so heterogeneous cosmologies can be inspected together.
pub trait CosmologyApi {
    /// Namespace of the array backend this cosmology is bound to.
    fn cosmology_namespace(&self, api_version: Option<&str>) -> Namespace;
}

/// Background FLRW cosmology
///
/// Units: densities in M_sun Mpc⁻³, distances in Mpc, volumes in Mpc³,
/// times in Gyr.
pub trait BackgroundCosmology: CosmologyApi {
    /// Array backend for redshifts and returned quantities
    type Array: Array;
    /// Fault raised by the cosmology's own computations
    type Error: std::error::Error + Send + Sync + 'static;

    /// Scale factor at z = 0
    fn scale_factor0(&self) -> Self::Array;

    /// Scale factor a = a0 / (1 + z)
    fn scale_factor(&self, z: &Self::Array) -> Result<Self::Array, Self::Error>;

    /// Total density parameter at z = 0
    fn otot0(&self) -> Self::Array;

    /// Total density parameter at redshift z
    fn otot(&self, z: &Self::Array) -> Result<Self::Array, Self::Error>;

    /// Critical density at z = 0
    fn critical_density0(&self) -> Self::Array;

    /// Critical density at redshift z
    fn critical_density(&self, z: &Self::Array) -> Result<Self::Array, Self::Error>;

    /// Age of the universe at redshift z
    fn age(&self, z: &Self::Array) -> Result<Self::Array, Self::Error>;

    /// Lookback time to redshift z, age(0) - age(z)
    fn lookback_time(&self, z: &Self::Array) -> Result<Self::Array, Self::Error>;

    /// Comoving line-of-sight distance d_C(z)
    fn comoving_distance(&self, z: &Self::Array) -> Result<Self::Array, Self::Error>;

    /// Transverse comoving distance d_M(z)
    fn comoving_transverse_distance(&self, z: &Self::Array) -> Result<Self::Array, Self::Error>;

    /// Angular diameter distance d_A(z)
    fn angular_diameter_distance(&self, z: &Self::Array) -> Result<Self::Array, Self::Error>;

    /// Luminosity distance d_L(z)
    fn luminosity_distance(&self, z: &Self::Array) -> Result<Self::Array, Self::Error>;

    /// Comoving volume enclosed within redshift z
    fn comoving_volume(&self, z: &Self::Array) -> Result<Self::Array, Self::Error>;

    /// Differential comoving volume per unit redshift and steradian
    fn differential_comoving_volume(&self, z: &Self::Array) -> Result<Self::Array, Self::Error>;
}

/// Standard FLRW cosmology with per-species bookkeeping
///
/// For every redshift the cosmology is expected to satisfy
/// Ω_k + Ω_m + Ω_γ + Ω_ν + Ω_de = Ω_tot. The interface layer never checks it.
pub trait StandardCosmology: BackgroundCosmology {
    /// Hubble parameter at z = 0 in km s⁻¹ Mpc⁻¹
    fn h0(&self) -> Self::Array;

    /// Dimensionless Hubble parameter h = H0 / (100 km s⁻¹ Mpc⁻¹)
    fn h(&self) -> Self::Array;

    /// Hubble distance c / H0 in Mpc
    fn hubble_distance(&self) -> Self::Array;

    /// Hubble time 1 / H0 in Gyr
    fn hubble_time(&self) -> Self::Array;

    /// Hubble parameter H(z) in km s⁻¹ Mpc⁻¹
    fn hubble(&self, z: &Self::Array) -> Result<Self::Array, Self::Error>;

    /// E(z) = H(z) / H0
    fn efunc(&self, z: &Self::Array) -> Result<Self::Array, Self::Error>;

    /// 1 / E(z)
    fn inv_efunc(&self, z: &Self::Array) -> Result<Self::Array, Self::Error>;

    /// CMB temperature at z = 0 in K
    fn tcmb0(&self) -> Self::Array;

    /// CMB temperature at redshift z in K
    fn tcmb(&self, z: &Self::Array) -> Result<Self::Array, Self::Error>;

    fn ok0(&self) -> Self::Array;
    fn ok(&self, z: &Self::Array) -> Result<Self::Array, Self::Error>;

    fn om0(&self) -> Self::Array;
    fn om(&self, z: &Self::Array) -> Result<Self::Array, Self::Error>;

    fn ob0(&self) -> Self::Array;
    fn ob(&self, z: &Self::Array) -> Result<Self::Array, Self::Error>;

    fn odm0(&self) -> Self::Array;
    fn odm(&self, z: &Self::Array) -> Result<Self::Array, Self::Error>;

    fn ogamma0(&self) -> Self::Array;
    fn ogamma(&self, z: &Self::Array) -> Result<Self::Array, Self::Error>;

    fn onu0(&self) -> Self::Array;
    fn onu(&self, z: &Self::Array) -> Result<Self::Array, Self::Error>;

    fn ode0(&self) -> Self::Array;
    fn ode(&self, z: &Self::Array) -> Result<Self::Array, Self::Error>;

    /// Effective number of neutrino species
    fn neff(&self) -> Self::Array;

    /// Neutrino masses in eV, one entry per mass eigenstate
    fn m_nu(&self) -> Vec<Self::Array>;

    /// Density parameter of `species` at z = 0
    fn omega0(&self, species: Species) -> Self::Array {
        match species {
            Species::Total => self.otot0(),
            Species::Curvature => self.ok0(),
            Species::Matter => self.om0(),
            Species::Baryon => self.ob0(),
            Species::DarkMatter => self.odm0(),
            Species::Photon => self.ogamma0(),
            Species::Neutrino => self.onu0(),
            Species::DarkEnergy => self.ode0(),
        }
    }

    /// Density parameter of `species` at redshift z
    fn omega(&self, species: Species, z: &Self::Array) -> Result<Self::Array, Self::Error> {
        match species {
            Species::Total => self.otot(z),
            Species::Curvature => self.ok(z),
            Species::Matter => self.om(z),
            Species::Baryon => self.ob(z),
            Species::DarkMatter => self.odm(z),
            Species::Photon => self.ogamma(z),
            Species::Neutrino => self.onu(z),
            Species::DarkEnergy => self.ode(z),
        }
    }
}
