//! Per-species quantities
//!
//! Every species exposes the same four functions:
//! - `omega_<s>0(c)`, `omega_<s>(c, z)`: density parameter, a direct read
//! - `rho_<s>0(c)`, `rho_<s>(c, z)`: density in M_sun Mpc⁻³, Ω · ρ_crit at the
//!   matching epoch unless the cosmology type registered its own formula
//!
//! Baryons and cold dark matter split the matter aggregate; they are not
//! separate terms of Ω_tot.

pub mod baryon;
pub mod curvature;
pub mod dark_energy;
pub mod dark_matter;
pub mod matter;
pub mod neutrino;
pub mod photon;

pub use baryon::*;
pub use curvature::*;
pub use dark_energy::*;
pub use dark_matter::*;
pub use matter::*;
pub use neutrino::*;
pub use photon::*;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::background::omega_total;
    use crate::fixture::Fixed;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn test_closure_at_any_redshift(z in 0.0f64..1.0e4, ok0 in -0.1f64..0.1) {
            let c = Fixed::<f64>::concordance().with_curvature(ok0);
            let sum = omega_curve(&c, &z).unwrap()
                + omega_matter(&c, &z).unwrap()
                + omega_photon(&c, &z).unwrap()
                + omega_neutrino(&c, &z).unwrap()
                + omega_de(&c, &z).unwrap();
            prop_assert!((sum - omega_total(&c, &z).unwrap()).abs() < 1e-12);
        }

        #[test]
        fn test_matter_is_baryon_plus_dark_matter(z in 0.0f64..100.0) {
            let c = Fixed::<f64>::concordance();
            let split = omega_baryon(&c, &z).unwrap() + omega_dm(&c, &z).unwrap();
            prop_assert!((split - omega_matter(&c, &z).unwrap()).abs() < 1e-12);
        }
    }
}
