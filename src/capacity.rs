use serde::{Deserialize, Serialize};

use crate::rates::RateTable;

/// 냉방 용량 계산 입력 값.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CapacityInput {
    /// 바닥 면적 [평] (1평 = 3.3058 m²)
    pub area_ping: f64,
    /// 천장 높이 [m]
    pub height_m: f64,
    /// 서향 직사광이 심한 방
    pub west_sun: bool,
    /// 함석(철판) 지붕 건물
    pub tin_roof: bool,
    /// 최상층(옥상 바로 아래)
    pub top_floor: bool,
    /// 통유리/대면적 창
    pub large_windows: bool,
    /// 상시 재실 인원
    pub people_count: u32,
}

/// 계산에 적용된 보정 계수. 표시용으로 소수 2자리 반올림해 담는다.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CapacityFactors {
    /// 높이 보정 (1.0 또는 height_factor)
    pub height_multiplier: f64,
    /// 환경 가산 누적 계수 (1.0 + 가산 합)
    pub environmental_multiplier: f64,
}

/// 냉방 용량 계산 결과.
///
/// 입력이 바뀔 때마다 통째로 새로 계산해 교체한다. 부분 갱신은 없다.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CapacityResult {
    /// 면적 × 기준값만 반영한 표시용 기준 열량 [kcal/h] (높이/가산 미적용, 반올림)
    pub base_kcal: i64,
    /// 최종 필요 열량 [kcal/h] (올림)
    pub total_kcal: i64,
    /// 최종 필요 열량의 와트 환산 [W] (올림)
    pub total_watts: i64,
    /// 권장 냉방 능력 [BTU/h] (올림)
    pub recommended_btu: i64,
    /// 냉동톤 환산 (1톤 = 12,000 BTU/h, 소수 2자리 반올림)
    pub cooling_tons: f64,
    pub factors: CapacityFactors,
}

impl CapacityResult {
    /// kW 표시값. 별도 저장 없이 와트 값에서 유도한다.
    pub fn total_kw(&self) -> f64 {
        self.total_watts as f64 / 1000.0
    }
}

/// 입력 경계 검증 오류.
#[derive(Debug)]
pub enum InputError {
    /// 면적이 0 이하이거나 유한하지 않음
    InvalidArea(f64),
    /// 높이가 0 이하이거나 유한하지 않음
    InvalidHeight(f64),
}

impl std::fmt::Display for InputError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InputError::InvalidArea(v) => {
                write!(f, "면적 값이 잘못되었습니다: {v} (0보다 큰 유한한 값 필요)")
            }
            InputError::InvalidHeight(v) => {
                write!(f, "높이 값이 잘못되었습니다: {v} (0보다 큰 유한한 값 필요)")
            }
        }
    }
}

impl std::error::Error for InputError {}

/// 기본 요율표로 냉방 용량을 계산한다.
pub fn compute_capacity(input: CapacityInput) -> CapacityResult {
    compute_capacity_with(input, &RateTable::default())
}

/// 주어진 요율표로 냉방 용량을 계산한다.
///
/// 순수 함수이며 실패 경로가 없다. 0이나 음수 입력도 거부하지 않고 그대로
/// 계산한다. 경계 검증이 필요하면 [`compute_capacity_checked`]를 사용한다.
pub fn compute_capacity_with(input: CapacityInput, rates: &RateTable) -> CapacityResult {
    // 기본 열량 Q = A × q × H
    // A: 면적 [평], q: 환경 기준값 [kcal/h/평], H: 높이 보정
    let q = if input.tin_roof {
        rates.tin_roof_kcal_per_ping
    } else {
        rates.base_kcal_per_ping
    };

    // 표준 층고 초과 시에만 보정. 경계값(정확히 3.2m)은 보정하지 않는다.
    let h_factor = if input.height_m > rates.standard_height_m {
        rates.height_factor
    } else {
        1.0
    };

    let mut load_kcal = input.area_ping * q * h_factor;

    // 재실 인원 가산: 기준 인원 초과분 1인당 person_kcal.
    // 백분율 가산을 곱하기 전에 더한다.
    if input.people_count > rates.base_people {
        let extra = f64::from(input.people_count - rates.base_people);
        load_kcal += extra * rates.person_kcal;
    }

    // 환경 가산 계수. 각 항목은 독립이며 전부 한 계수에 누적된다.
    // 함석 지붕은 기준값 q(750)와 이 +25% 가산에 이중으로 반영된다. 의도된 규칙.
    let mut multiplier = 1.0;
    if input.west_sun {
        multiplier += rates.west_sun;
    }
    if input.top_floor {
        multiplier += rates.top_floor;
    }
    if input.large_windows {
        multiplier += rates.large_window;
    }
    if input.tin_roof {
        multiplier += rates.tin_roof;
    }
    load_kcal *= multiplier;

    // 단위 환산은 반올림 전 값으로 수행하고, 반올림은 마지막에만 적용한다.
    let btu = load_kcal * rates.kcal_to_btu;
    let watt = load_kcal * rates.kcal_to_watt;
    let tons = btu / rates.btu_to_ton;

    CapacityResult {
        base_kcal: (input.area_ping * q).round() as i64,
        total_kcal: load_kcal.ceil() as i64,
        total_watts: watt.ceil() as i64,
        recommended_btu: btu.ceil() as i64,
        cooling_tons: round2(tons),
        factors: CapacityFactors {
            height_multiplier: round2(h_factor),
            environmental_multiplier: round2(multiplier),
        },
    }
}

/// 경계 검증을 거친 뒤 계산한다.
///
/// NaN/무한대나 0 이하의 면적·높이는 산술에 들어가기 전에 거부한다.
pub fn compute_capacity_checked(
    input: CapacityInput,
    rates: &RateTable,
) -> Result<CapacityResult, InputError> {
    if !input.area_ping.is_finite() || input.area_ping <= 0.0 {
        return Err(InputError::InvalidArea(input.area_ping));
    }
    if !input.height_m.is_finite() || input.height_m <= 0.0 {
        return Err(InputError::InvalidHeight(input.height_m));
    }
    Ok(compute_capacity_with(input, rates))
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
