//! Species and epoch keys
//!
//! Densities are bookkept per species. Every species obeys the same law:
//! - ρ_X(z) = Ω_X(z) · ρ_crit(z)
//! - ρ_X0 = Ω_X0 · ρ_crit0
//!
//! `Species` and `Epoch` together name one overridable density formula.

use std::fmt;

/// A density component of an FLRW cosmology
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Species {
    /// All components together (Ω_tot)
    Total = 0x00,
    /// Spatial curvature (Ω_k)
    Curvature = 0x01,
    /// Matter, baryonic plus cold dark matter (Ω_m)
    Matter = 0x02,
    /// Baryons (Ω_b)
    Baryon = 0x03,
    /// Cold dark matter (Ω_dm)
    DarkMatter = 0x04,
    /// Photons (Ω_γ)
    Photon = 0x05,
    /// Neutrinos (Ω_ν)
    Neutrino = 0x06,
    /// Dark energy (Ω_de)
    DarkEnergy = 0x07,
}

impl Species {
    /// Get the species name
    pub fn name(self) -> &'static str {
        match self {
            Species::Total => "total",
            Species::Curvature => "curvature",
            Species::Matter => "matter",
            Species::Baryon => "baryon",
            Species::DarkMatter => "dark matter",
            Species::Photon => "photon",
            Species::Neutrino => "neutrino",
            Species::DarkEnergy => "dark energy",
        }
    }

    /// The seven per-species components (everything but `Total`)
    pub fn components() -> &'static [Species] {
        &[
            Species::Curvature,
            Species::Matter,
            Species::Baryon,
            Species::DarkMatter,
            Species::Photon,
            Species::Neutrino,
            Species::DarkEnergy,
        ]
    }

    /// Components whose density parameters sum to Ω_tot.
    ///
    /// Baryons and cold dark matter are a split of matter, not extra terms.
    pub fn closure() -> &'static [Species] {
        &[
            Species::Curvature,
            Species::Matter,
            Species::Photon,
            Species::Neutrino,
            Species::DarkEnergy,
        ]
    }
}

impl fmt::Display for Species {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// When a quantity is evaluated
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Epoch {
    /// Present day, z = 0, no redshift argument
    #[default]
    Today,
    /// At caller-supplied redshift(s)
    Redshift,
}

impl Epoch {
    pub fn name(self) -> &'static str {
        match self {
            Epoch::Today => "z=0",
            Epoch::Redshift => "z",
        }
    }
}

impl fmt::Display for Epoch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
