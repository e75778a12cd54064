use serde::{Deserialize, Serialize};

use crate::units::power;

/// 냉방 부하 계산에 쓰이는 요율/상수표.
///
/// 코드에 상수를 박아두지 않고 설정으로 주입해 지역별 요율 교체와
/// 대체 표를 쓰는 테스트를 쉽게 한다. config.toml에 함께 저장된다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RateTable {
    /// 일반 방 기준값 [kcal/h/평]
    pub base_kcal_per_ping: f64,
    /// 함석 지붕 기준값 [kcal/h/평]
    pub tin_roof_kcal_per_ping: f64,
    /// 1 kcal/h = 4 BTU/h
    pub kcal_to_btu: f64,
    /// 1 kcal/h = 1/860 kW
    pub kcal_to_kw: f64,
    /// 1 kcal/h = 1000/860 W
    pub kcal_to_watt: f64,
    /// 1냉동톤 = 12,000 BTU/h
    pub btu_to_ton: f64,
    /// 표준 층고 [m]. 초과할 때만 높이 보정한다(경계값 제외).
    pub standard_height_m: f64,
    /// 높이 보정 계수
    pub height_factor: f64,
    /// 서향 일사 가산 (+15%)
    pub west_sun: f64,
    /// 함석 지붕 가산 (+25%). 기준값 750과 별개로 추가 적용된다.
    pub tin_roof: f64,
    /// 최상층 가산 (+15%)
    pub top_floor: f64,
    /// 통유리/대면적 창 가산 (+10%)
    pub large_window: f64,
    /// 기준 인원 초과 1인당 가산 [kcal/h]
    pub person_kcal: f64,
    /// 기준 인원
    pub base_people: u32,
}

impl Default for RateTable {
    fn default() -> Self {
        Self {
            base_kcal_per_ping: 500.0,
            tin_roof_kcal_per_ping: 750.0,
            kcal_to_btu: power::BTU_PER_KCAL,
            kcal_to_kw: power::KW_PER_KCAL,
            kcal_to_watt: power::WATT_PER_KCAL,
            btu_to_ton: power::BTU_PER_TON,
            standard_height_m: 3.2,
            height_factor: 1.1,
            west_sun: 0.15,
            tin_roof: 0.25,
            top_floor: 0.15,
            large_window: 0.10,
            person_kcal: 100.0,
            base_people: 3,
        }
    }
}
