//! Property tests for the density law and closure

use cosmology_test::*;
use proptest::prelude::*;

fn params() -> impl Strategy<Value = LcdmParams> {
    (
        50.0f64..90.0,
        0.05f64..0.6,
        0.0f64..0.5,
        -0.1f64..0.1,
        0.0f64..3.0,
        0.0f64..4.0,
    )
        .prop_map(|(h0, om0, baryon_fraction, ok0, tcmb0, neff)| LcdmParams {
            h0,
            om0,
            ob0: om0 * baryon_fraction,
            ok0,
            tcmb0,
            neff,
            m_nu: vec![0.0, 0.0, 0.06],
        })
}

proptest! {
    #[test]
    fn test_density_law_holds_exactly(p in params(), z in 0.0f64..1.0e4) {
        let c = Lcdm::<f64>::new(p);
        prop_assert_eq!(check_density_law(&c, &z, Tolerance::EXACT), Ok(()));
    }

    #[test]
    fn test_density_law_holds_per_lane(p in params(), z in proptest::array::uniform4(0.0f64..50.0)) {
        let c = Lcdm::<Lanes<4>>::new(p);
        prop_assert_eq!(check_density_law(&c, &Lanes(z), Tolerance::EXACT), Ok(()));
    }

    #[test]
    fn test_closure_at_random_redshift(p in params(), z in 0.0f64..1.0e4) {
        let c = Lcdm::<f64>::new(p);
        prop_assert_eq!(check_closure(&c, &z, Tolerance::relative(1e-12)), Ok(()));
    }

    #[test]
    fn test_scale_factor_law(p in params(), z in proptest::array::uniform3(-0.99f64..1.0e3)) {
        let c = Lcdm::<[f64; 3]>::new(p);
        prop_assert_eq!(check_scale_factor(&c, &z, Tolerance::EXACT), Ok(()));
    }

    #[test]
    fn test_unphysical_redshift_is_a_fault(z in -10.0f64..=-1.0) {
        let c = Lcdm::<f64>::planck18();
        let result = check_closure(&c, &z, Tolerance::default());
        prop_assert!(matches!(result, Err(Violation::Fault { .. })), "{:?}", result);
    }
}
