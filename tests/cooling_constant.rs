//! 냉각 상수 추정 및 재료 프리셋 테스트.
use cooling_time_calculator::cooling::{
    estimate, estimate_from_preset, plausibility_warnings, CalcError, Field, MassSource,
    PresetInputs,
};
use cooling_time_calculator::material_db;

#[test]
fn steel_like_block_scenario() {
    let k = estimate(10.0, 0.5, 2.0, 450.0).expect("valid inputs");
    assert!((k - 5.0 / 900.0).abs() < 1e-15);
    assert!((k - 0.00556).abs() < 5e-6);
}

#[test]
fn estimate_matches_formula_across_magnitudes() {
    let values = [1e-3, 0.5, 1.0, 42.0, 4180.0];
    for &h in &values {
        for &a in &values {
            for &m in &values {
                for &c in &values {
                    let k = estimate(h, a, m, c).expect("positive inputs");
                    let expected = (h * a) / (m * c);
                    assert!(k > 0.0);
                    assert!((k - expected).abs() <= expected * 1e-12);
                    assert_eq!(estimate(h, a, m, c), Ok(k));
                }
            }
        }
    }
}

#[test]
fn first_non_positive_field_is_reported() {
    let cases = [
        ((0.0, 0.5, 2.0, 450.0), Field::HeatTransferCoeff),
        ((10.0, -0.5, 2.0, 450.0), Field::SurfaceArea),
        ((10.0, 0.5, 0.0, 450.0), Field::Mass),
        ((10.0, 0.5, 2.0, -1.0), Field::SpecificHeat),
        // 여러 필드가 잘못되면 h, A, m, c 순서에서 첫 번째만 보고
        ((10.0, 0.0, 0.0, 0.0), Field::SurfaceArea),
    ];
    for ((h, a, m, c), field) in cases {
        match estimate(h, a, m, c) {
            Err(CalcError::Range { field: got, .. }) => assert_eq!(got, field),
            other => panic!("expected range error for {field}, got {other:?}"),
        }
    }
}

#[test]
fn non_finite_before_range() {
    assert_eq!(
        estimate(-1.0, f64::NAN, 2.0, 450.0),
        Err(CalcError::Parse {
            field: Field::SurfaceArea
        })
    );
}

#[test]
fn unknown_material_is_rejected() {
    let input = PresetInputs {
        area_m2: 0.5,
        mass: MassSource::Mass(2.0),
        h_override: None,
    };
    assert_eq!(
        estimate_from_preset("unobtainium", &input),
        Err(CalcError::UnknownPreset("unobtainium".into()))
    );
}

#[test]
fn preset_supplies_h_and_c() {
    let input = PresetInputs {
        area_m2: 0.5,
        mass: MassSource::Mass(2.0),
        h_override: None,
    };
    let est = estimate_from_preset("Steel", &input).expect("steel preset");
    let steel = material_db::find_material("steel").expect("steel exists");
    assert_eq!(est.c_j_kgk, steel.c_j_kgk);
    assert_eq!(est.h_w_m2k, steel.h_w_m2k);
    let expected = steel.h_w_m2k * 0.5 / (2.0 * steel.c_j_kgk);
    assert!((est.k - expected).abs() < 1e-15);
}

#[test]
fn h_override_and_volume_derived_mass() {
    let input = PresetInputs {
        area_m2: 0.06,
        mass: MassSource::Volume(0.001),
        h_override: Some(25.0),
    };
    let est = estimate_from_preset("WATER", &input).expect("water preset");
    assert!((est.mass_kg - 1.0).abs() < 1e-12);
    assert_eq!(est.h_w_m2k, 25.0);
    assert!((est.k - 25.0 * 0.06 / 4180.0).abs() < 1e-15);
}

#[test]
fn non_positive_volume_is_a_range_error() {
    let input = PresetInputs {
        area_m2: 0.06,
        mass: MassSource::Volume(0.0),
        h_override: None,
    };
    assert!(matches!(
        estimate_from_preset("wood", &input),
        Err(CalcError::Range {
            field: Field::Volume,
            ..
        })
    ));
}

#[test]
fn unusually_large_values_are_flagged() {
    assert!(plausibility_warnings(10.0, 0.5, 2.0).is_empty());
    assert_eq!(
        plausibility_warnings(6000.0, 60.0, 600.0),
        vec![Field::HeatTransferCoeff, Field::SurfaceArea, Field::Mass]
    );
}

#[test]
fn overflowing_or_vanishing_k_is_a_range_error() {
    // 각 입력은 유한한 양수지만 k = hA/(mc)는 무한대 또는 0이 된다.
    let cases = [(1e200, 1e200, 1.0, 1.0), (1e-200, 1e-200, 1e200, 1e200)];
    for (h, a, m, c) in cases {
        match estimate(h, a, m, c) {
            Err(CalcError::Range { field, value }) => {
                assert_eq!(field, Field::CoolingConstant);
                assert!(!value.is_finite() || value == 0.0, "value={value}");
            }
            other => panic!("expected range error, got {other:?}"),
        }
    }
}

#[test]
fn overflowing_derived_mass_is_blamed_on_volume() {
    let input = PresetInputs {
        area_m2: 0.5,
        mass: MassSource::Volume(1e306),
        h_override: None,
    };
    assert_eq!(
        estimate_from_preset("steel", &input),
        Err(CalcError::Range {
            field: Field::Volume,
            value: 1e306
        })
    );
}

#[test]
fn preset_checks_h_and_area_before_volume() {
    let input = PresetInputs {
        area_m2: 0.5,
        mass: MassSource::Volume(0.0),
        h_override: Some(-1.0),
    };
    assert_eq!(
        estimate_from_preset("steel", &input),
        Err(CalcError::Range {
            field: Field::HeatTransferCoeff,
            value: -1.0
        })
    );

    let input = PresetInputs {
        area_m2: f64::NAN,
        mass: MassSource::Volume(-1.0),
        h_override: None,
    };
    assert_eq!(
        estimate_from_preset("steel", &input),
        Err(CalcError::Parse {
            field: Field::SurfaceArea
        })
    );
}
