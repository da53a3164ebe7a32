//! Cold dark matter

use cosmology_api::{Species, StandardCosmology};

use crate::DensityRegistry;

/// Cold dark matter density parameter at z = 0
#[inline]
pub fn omega_dm0<C: StandardCosmology>(cosmo: &C) -> C::Array {
    cosmo.odm0()
}

/// Redshift-dependent cold dark matter density parameter
#[inline]
pub fn omega_dm<C: StandardCosmology>(cosmo: &C, z: &C::Array) -> Result<C::Array, C::Error> {
    cosmo.odm(z)
}

/// Cold dark matter density at z = 0 in M_sun Mpc⁻³
pub fn rho_dm0<C: StandardCosmology + 'static>(cosmo: &C) -> C::Array {
    DensityRegistry::global().density0(cosmo, Species::DarkMatter)
}

/// Redshift-dependent cold dark matter density in M_sun Mpc⁻³
pub fn rho_dm<C: StandardCosmology + 'static>(
    cosmo: &C,
    z: &C::Array,
) -> Result<C::Array, C::Error> {
    DensityRegistry::global().density(cosmo, Species::DarkMatter, z)
}

#[cfg(test)]
mod tests {
    use super::*;
    use cosmology_api::BackgroundCosmology;
    use crate::fixture::Fixed;

    #[test]
    fn test_dark_matter_law() {
        let c = Fixed::<[f64; 3]>::concordance();
        let z = [0.0, 1.0, 9.0];

        assert_eq!(omega_dm0(&c), c.odm0());
        assert_eq!(rho_dm0(&c), c.odm0());
        let om = c.odm(&z).unwrap();
        let crit = c.critical_density(&z).unwrap();
        assert_eq!(
            rho_dm(&c, &z).unwrap(),
            [om[0] * crit[0], om[1] * crit[1], om[2] * crit[2]]
        );
    }
}
