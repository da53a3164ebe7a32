//! Density specializations through the process-wide registry
//!
//! Tests in this binary share one global registry, so each test registers
//! against its own cosmology/backend pair.

use cosmology_api::{CosmologyError, Epoch, Species};
use cosmology_core::*;
use cosmology_test::*;

#[test]
fn test_specialization_applies_to_its_backend_only() {
    init_test_logging();
    register_density0::<Lcdm<Lanes<5>>, _>(Species::Matter, |_| Lanes([42.0; 5])).unwrap();

    let specialized = Lcdm::<Lanes<5>>::planck18();
    let other_backend = Lcdm::<Lanes<6>>::planck18();

    assert_eq!(rho_matter0(&specialized), Lanes([42.0; 5]));
    assert_eq!(
        rho_matter0(&other_backend),
        other_backend.om0().product(&other_backend.critical_density0())
    );
    // Only the registered species and epoch change
    assert_eq!(
        rho_baryon0(&specialized),
        specialized.ob0().product(&specialized.critical_density0())
    );
    let z = Lanes([0.0, 1.0, 2.0, 3.0, 4.0, 5.0]);
    check_density_law(&other_backend, &z, Tolerance::EXACT).unwrap();
}

#[test]
fn test_redshift_specialization_within_tolerance() {
    register_density::<Lcdm<[f64; 7]>, _>(Species::DarkEnergy, |c, z| {
        // Constant ρ_Λ without going through Ω_Λ(z)
        c.hubble(z).map(|_| c.ode0().product(&c.critical_density0()))
    })
    .unwrap();

    let c = Lcdm::<[f64; 7]>::planck18();
    let z = [0.0, 0.5, 1.0, 2.0, 4.0, 8.0, 16.0];
    let rho = rho_de(&c, &z).unwrap();
    assert_eq!(rho, c.ode0().product(&c.critical_density0()));

    // Same physics as the generic law, within rounding
    check_density_law(&c, &z, Tolerance::default()).unwrap();
    assert!(DensityRegistry::global().is_specialized::<Lcdm<[f64; 7]>>(
        Species::DarkEnergy,
        Epoch::Redshift
    ));
}

#[test]
fn test_specialized_fault_propagates() {
    register_density::<Lcdm<Lanes<9>>, _>(Species::Photon, |c, z| {
        c.tcmb(z).map(|t| t.map(|v| v.powi(4) * 1.0e-12))
    })
    .unwrap();

    let c = Lcdm::<Lanes<9>>::planck18();
    let bad = Lanes([-2.0; 9]);
    assert_eq!(
        rho_photon(&c, &bad),
        Err(FixtureError::RedshiftOutOfRange { z: -2.0 })
    );
    let ok = Lanes([0.0; 9]);
    assert_eq!(rho_photon(&c, &ok).unwrap(), Lanes([2.7255_f64.powi(4) * 1.0e-12; 9]));
}

#[test]
fn test_duplicate_global_registration_rejected() {
    register_density0::<Lcdm<Lanes<10>>, _>(Species::Neutrino, |c| c.onu0()).unwrap();
    let err =
        register_density0::<Lcdm<Lanes<10>>, _>(Species::Neutrino, |c| c.ogamma0()).unwrap_err();

    match err {
        CosmologyError::DuplicateSpecialization {
            species, epoch, ..
        } => {
            assert_eq!(species, Species::Neutrino);
            assert_eq!(epoch, Epoch::Today);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_total_density_override_on_background_cosmology() {
    register_density::<Background<Lanes<8>>, _>(Species::Total, |c, z| c.critical_density(z))
        .unwrap();
    register_density0::<Background<Lanes<8>>, _>(Species::Total, |c| c.critical_density0())
        .unwrap();
    // Accepted, but a Background-only type never reaches species dispatch
    register_density0::<Background<Lanes<8>>, _>(Species::Matter, |_| Lanes([0.0; 8])).unwrap();

    let c = Background(Lcdm::<Lanes<8>>::planck18());
    let z = Lanes([0.0, 0.1, 0.2, 0.5, 1.0, 2.0, 5.0, 10.0]);
    assert_eq!(rho_total(&c, &z), c.critical_density(&z));
    assert_eq!(rho_total0(&c), c.critical_density0());

    // The Standard view of the same cosmology keeps the generic law
    let standard = Lcdm::<Lanes<8>>::planck18();
    assert_eq!(
        rho_matter0(&standard),
        standard.om0().product(&standard.critical_density0())
    );
}

#[test]
fn test_formula_may_call_other_densities() {
    register_density0::<Lcdm<Lanes<11>>, _>(Species::Matter, |c| {
        rho_baryon0(c).zip_with(&rho_dm0(c), |b, dm| b + dm)
    })
    .unwrap();

    let c = Lcdm::<Lanes<11>>::planck18();
    let expected = c.om0().product(&c.critical_density0());
    compare("rho_matter0", &expected, &rho_matter0(&c), Tolerance::default()).unwrap();
}
