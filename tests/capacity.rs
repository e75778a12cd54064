use aircon_sizing_toolbox::capacity::{
    compute_capacity, compute_capacity_checked, compute_capacity_with, CapacityInput, InputError,
};
use aircon_sizing_toolbox::rates::RateTable;

fn plain_room() -> CapacityInput {
    CapacityInput {
        area_ping: 5.0,
        height_m: 2.8,
        west_sun: false,
        tin_roof: false,
        top_floor: false,
        large_windows: false,
        people_count: 2,
    }
}

#[test]
fn standard_five_ping_room() {
    let res = compute_capacity(plain_room());
    assert_eq!(res.base_kcal, 2500);
    assert_eq!(res.total_kcal, 2500);
    assert_eq!(res.recommended_btu, 10_000);
    assert_eq!(res.total_watts, 2907); // ceil(2500 * 1000/860)
    assert!((res.cooling_tons - 0.83).abs() < 1e-9);
    assert!((res.factors.height_multiplier - 1.0).abs() < 1e-9);
    assert!((res.factors.environmental_multiplier - 1.0).abs() < 1e-9);
}

#[test]
fn tin_roof_high_ceiling_with_occupancy() {
    // 10평, 3.5m, 함석 지붕, 5명: 10×750×1.1 + 2×100 = 8450, ×1.25 = 10562.5
    let res = compute_capacity(CapacityInput {
        area_ping: 10.0,
        height_m: 3.5,
        tin_roof: true,
        people_count: 5,
        ..plain_room()
    });
    assert_eq!(res.base_kcal, 7500);
    assert_eq!(res.total_kcal, 10_563);
    assert!((res.factors.height_multiplier - 1.1).abs() < 1e-9);
    assert!((res.factors.environmental_multiplier - 1.25).abs() < 1e-9);
}

#[test]
fn height_threshold_is_exclusive() {
    let at_threshold = compute_capacity(CapacityInput {
        height_m: 3.2,
        ..plain_room()
    });
    assert!((at_threshold.factors.height_multiplier - 1.0).abs() < 1e-9);

    let above_threshold = compute_capacity(CapacityInput {
        height_m: 3.2001,
        ..plain_room()
    });
    assert!((above_threshold.factors.height_multiplier - 1.1).abs() < 1e-9);
}

#[test]
fn occupancy_surcharge_starts_above_base_people() {
    let three = compute_capacity(CapacityInput {
        people_count: 3,
        ..plain_room()
    });
    assert_eq!(three.total_kcal, 2500);

    // 4명째부터 1인당 +100 kcal/h, 백분율 가산 전에 더해진다
    let four = compute_capacity(CapacityInput {
        people_count: 4,
        ..plain_room()
    });
    assert_eq!(four.total_kcal, 2600);
}

#[test]
fn environmental_surcharges_accumulate() {
    let res = compute_capacity(CapacityInput {
        west_sun: true,
        tin_roof: true,
        top_floor: true,
        large_windows: true,
        ..plain_room()
    });
    // 1 + 0.15 + 0.15 + 0.10 + 0.25
    assert!((res.factors.environmental_multiplier - 1.65).abs() < 1e-9);
}

#[test]
fn enabling_any_flag_never_decreases_load() {
    let baseline = compute_capacity(plain_room()).total_kcal;
    let variants = [
        CapacityInput {
            west_sun: true,
            ..plain_room()
        },
        CapacityInput {
            tin_roof: true,
            ..plain_room()
        },
        CapacityInput {
            top_floor: true,
            ..plain_room()
        },
        CapacityInput {
            large_windows: true,
            ..plain_room()
        },
        CapacityInput {
            people_count: 6,
            ..plain_room()
        },
    ];
    for input in variants {
        assert!(
            compute_capacity(input).total_kcal >= baseline,
            "flag variant produced smaller load: {input:?}"
        );
    }
}

#[test]
fn recalculation_is_idempotent() {
    let input = CapacityInput {
        area_ping: 7.3,
        height_m: 3.4,
        west_sun: true,
        tin_roof: true,
        top_floor: false,
        large_windows: true,
        people_count: 6,
    };
    assert_eq!(compute_capacity(input), compute_capacity(input));
}

#[test]
fn toml_round_trip_yields_identical_result() {
    let input = CapacityInput {
        area_ping: 12.5,
        height_m: 3.3,
        west_sun: true,
        tin_roof: false,
        top_floor: true,
        large_windows: false,
        people_count: 4,
    };
    let serialized = toml::to_string(&input).expect("serialize input");
    let restored: CapacityInput = toml::from_str(&serialized).expect("deserialize input");
    assert_eq!(input, restored);
    assert_eq!(compute_capacity(input), compute_capacity(restored));
}

#[test]
fn engine_is_total_over_negative_inputs() {
    let res = compute_capacity(CapacityInput {
        area_ping: -5.0,
        ..plain_room()
    });
    assert_eq!(res.total_kcal, -2500);
}

#[test]
fn checked_wrapper_rejects_degenerate_inputs() {
    let rates = RateTable::default();
    let err = compute_capacity_checked(
        CapacityInput {
            area_ping: -5.0,
            ..plain_room()
        },
        &rates,
    )
    .unwrap_err();
    assert!(matches!(err, InputError::InvalidArea(_)));

    let err = compute_capacity_checked(
        CapacityInput {
            height_m: f64::NAN,
            ..plain_room()
        },
        &rates,
    )
    .unwrap_err();
    assert!(matches!(err, InputError::InvalidHeight(_)));

    assert!(compute_capacity_checked(plain_room(), &rates).is_ok());
}

#[test]
fn rate_table_override_changes_base_rate() {
    let regional = RateTable {
        base_kcal_per_ping: 400.0,
        ..RateTable::default()
    };
    let res = compute_capacity_with(plain_room(), &regional);
    assert_eq!(res.base_kcal, 2000);
    assert_eq!(res.total_kcal, 2000);
}
