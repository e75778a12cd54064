use serde::{Deserialize, Serialize};

/// 1 kcal/h = 4 BTU/h
pub const BTU_PER_KCAL: f64 = 4.0;
/// 1 kcal/h = 1/860 kW
pub const KW_PER_KCAL: f64 = 1.0 / 860.0;
/// 1 kcal/h = 1000/860 W ≈ 1.163 W
pub const WATT_PER_KCAL: f64 = 1000.0 / 860.0;
/// 1냉동톤 = 12,000 BTU/h
pub const BTU_PER_TON: f64 = 12_000.0;

/// 냉방 능력(열량) 단위. 내부 기준은 kcal/h이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PowerUnit {
    KcalPerHour,
    Watt,
    KiloWatt,
    BtuPerHour,
    CoolingTon,
}

fn to_kcal_per_h(value: f64, unit: PowerUnit) -> f64 {
    match unit {
        PowerUnit::KcalPerHour => value,
        PowerUnit::Watt => value / WATT_PER_KCAL,
        PowerUnit::KiloWatt => value / KW_PER_KCAL,
        PowerUnit::BtuPerHour => value / BTU_PER_KCAL,
        PowerUnit::CoolingTon => value * BTU_PER_TON / BTU_PER_KCAL,
    }
}

fn from_kcal_per_h(value: f64, unit: PowerUnit) -> f64 {
    match unit {
        PowerUnit::KcalPerHour => value,
        PowerUnit::Watt => value * WATT_PER_KCAL,
        PowerUnit::KiloWatt => value * KW_PER_KCAL,
        PowerUnit::BtuPerHour => value * BTU_PER_KCAL,
        PowerUnit::CoolingTon => value * BTU_PER_KCAL / BTU_PER_TON,
    }
}

/// 냉방 능력을 변환한다.
pub fn convert_power(value: f64, from: PowerUnit, to: PowerUnit) -> f64 {
    from_kcal_per_h(to_kcal_per_h(value, from), to)
}
