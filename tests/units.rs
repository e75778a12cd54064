use aircon_sizing_toolbox::config::DefaultUnits;
use aircon_sizing_toolbox::conversion;
use aircon_sizing_toolbox::geometry::RoomDimensions;
use aircon_sizing_toolbox::quantity::QuantityKind;
use aircon_sizing_toolbox::units::{
    convert_area, convert_length, convert_power, AreaUnit, LengthUnit, PowerUnit,
};

#[test]
fn one_ping_is_3_3058_square_meters() {
    let sqm = convert_area(1.0, AreaUnit::Ping, AreaUnit::SquareMeter);
    assert!((sqm - 3.3058).abs() < 1e-9);
    let back = convert_area(sqm, AreaUnit::SquareMeter, AreaUnit::Ping);
    assert!((back - 1.0).abs() < 1e-9);
}

#[test]
fn room_dimensions_to_ping() {
    let dims = RoomDimensions {
        length_m: 3.3058,
        width_m: 1.0,
    };
    assert!((dims.floor_area_sqm() - 3.3058).abs() < 1e-9);
    assert!((dims.area_ping() - 1.0).abs() < 1e-9);
}

#[test]
fn square_foot_round_trip() {
    let sqft = convert_area(1.0, AreaUnit::Ping, AreaUnit::SquareFoot);
    assert!((sqft - 3.3058 / 0.092903).abs() < 1e-9);
    let back = convert_area(sqft, AreaUnit::SquareFoot, AreaUnit::Ping);
    assert!((back - 1.0).abs() < 1e-9);
    let sqm = convert_area(1.0, AreaUnit::SquareFoot, AreaUnit::SquareMeter);
    assert!((sqm - 0.092903).abs() < 1e-9);
}

#[test]
fn foot_round_trip() {
    let m = convert_length(1.0, LengthUnit::Foot, LengthUnit::Meter);
    assert!((m - 0.3048).abs() < 1e-9);
    let back = convert_length(m, LengthUnit::Meter, LengthUnit::Foot);
    assert!((back - 1.0).abs() < 1e-9);
}

#[test]
fn kcal_to_btu_and_watt() {
    let btu = convert_power(2500.0, PowerUnit::KcalPerHour, PowerUnit::BtuPerHour);
    assert!((btu - 10_000.0).abs() < 1e-9);
    let watt = convert_power(2500.0, PowerUnit::KcalPerHour, PowerUnit::Watt);
    assert!((watt - 2500.0 * 1000.0 / 860.0).abs() < 1e-9);
}

#[test]
fn cooling_ton_is_12000_btu() {
    let btu = convert_power(1.0, PowerUnit::CoolingTon, PowerUnit::BtuPerHour);
    assert!((btu - 12_000.0).abs() < 1e-9);
    let tons = convert_power(12_000.0, PowerUnit::BtuPerHour, PowerUnit::CoolingTon);
    assert!((tons - 1.0).abs() < 1e-9);
}

#[test]
fn watt_kilowatt_scale() {
    let kw = convert_power(1000.0, PowerUnit::Watt, PowerUnit::KiloWatt);
    assert!((kw - 1.0).abs() < 1e-9);
}

#[test]
fn string_dispatch_conversion() {
    let btu = conversion::convert(QuantityKind::Power, 2500.0, "kcal", "btu").expect("convert");
    assert!((btu - 10_000.0).abs() < 1e-9);
    let sqm = conversion::convert(QuantityKind::Area, 1.0, "평", "m2").expect("convert");
    assert!((sqm - 3.3058).abs() < 1e-9);
    let cm = conversion::convert(QuantityKind::Length, 1.5, "m", "cm").expect("convert");
    assert!((cm - 150.0).abs() < 1e-9);
}

#[test]
fn default_unit_names_are_convertible() {
    // 기본 단위 이름은 그대로 convert에 넣을 수 있어야 한다
    let defaults = DefaultUnits::default();
    for kind in [QuantityKind::Area, QuantityKind::Length, QuantityKind::Power] {
        let name = defaults.unit_name_for(kind);
        let same = conversion::convert(kind, 1.0, name, name).expect("default unit name");
        assert!((same - 1.0).abs() < 1e-9, "identity failed for {name}");
    }
}

#[test]
fn customized_default_units_are_honored() {
    let defaults = DefaultUnits {
        power: PowerUnit::BtuPerHour,
        ..DefaultUnits::default()
    };
    let name = defaults.unit_name_for(QuantityKind::Power);
    assert_eq!(name, "btu/h");
    let kcal = conversion::convert(QuantityKind::Power, 10_000.0, name, "kcal").expect("convert");
    assert!((kcal - 2500.0).abs() < 1e-9);
}

#[test]
fn unknown_unit_is_rejected() {
    let err = conversion::convert(QuantityKind::Power, 1.0, "furlong", "kcal");
    assert!(err.is_err());
}
