use std::io::{self, Write};

use crate::app::AppError;
use crate::capacity::{self, CapacityInput, CapacityResult};
use crate::config::Config;
use crate::conversion;
use crate::geometry::RoomDimensions;
use crate::quantity::QuantityKind;
use crate::rates::RateTable;

/// 메인 메뉴 선택지를 표현한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    CapacityCalc,
    UnitConversion,
    AreaHelper,
    Settings,
    Exit,
}

/// 메인 메뉴를 표시하고 선택값을 반환한다.
pub fn main_menu() -> Result<MenuChoice, AppError> {
    println!("\n=== Aircon Sizing Toolbox ===");
    println!("1) 냉방 용량 계산");
    println!("2) 단위 변환기");
    println!("3) 면적 환산 (가로×세로 → 평)");
    println!("4) 설정 (요율표)");
    println!("0) 종료");
    loop {
        let sel = read_line("메뉴 선택: ")?;
        match sel.trim() {
            "1" => return Ok(MenuChoice::CapacityCalc),
            "2" => return Ok(MenuChoice::UnitConversion),
            "3" => return Ok(MenuChoice::AreaHelper),
            "4" => return Ok(MenuChoice::Settings),
            "0" => return Ok(MenuChoice::Exit),
            _ => println!("잘못된 입력입니다. 다시 선택하세요."),
        }
    }
}

/// 냉방 용량 계산 메뉴를 처리한다.
pub fn handle_capacity_calc(cfg: &Config) -> Result<(), AppError> {
    println!("\n-- 냉방 용량 계산 --");
    let area = read_f64("면적 [평] (0 입력 시 가로/세로로 계산): ")?;
    let area_ping = if area <= 0.0 {
        let length = read_f64("방 가로 [m]: ")?;
        let width = read_f64("방 세로 [m]: ")?;
        let dims = RoomDimensions {
            length_m: length,
            width_m: width,
        };
        println!(
            "바닥 면적: {:.2} m² = {:.2} 평",
            dims.floor_area_sqm(),
            dims.area_ping()
        );
        dims.area_ping()
    } else {
        area
    };
    let height = read_f64("천장 높이 [m]: ")?;
    let west_sun = read_bool("서향 일사가 심한가요? (y/n): ")?;
    let tin_roof = read_bool("함석 지붕인가요? (y/n): ")?;
    let top_floor = read_bool("최상층인가요? (y/n): ")?;
    let large_windows = read_bool("통유리/대형 창이 있나요? (y/n): ")?;
    let people = read_u32("상시 인원 수: ")?;

    let input = CapacityInput {
        area_ping,
        height_m: height,
        west_sun,
        tin_roof,
        top_floor,
        large_windows,
        people_count: people,
    };
    let result = capacity::compute_capacity_checked(input, &cfg.rates)?;
    print_result(&result);
    Ok(())
}

/// 계산 결과를 출력한다.
pub fn print_result(result: &CapacityResult) {
    println!("기본 열량: {} kcal/h", result.base_kcal);
    println!("필요 열량: {} kcal/h", result.total_kcal);
    println!(
        "전력 환산: {} W ({:.2} kW)",
        result.total_watts,
        result.total_kw()
    );
    println!(
        "권장 냉방 능력: {} BTU/h ({:.2} 냉동톤)",
        result.recommended_btu, result.cooling_tons
    );
    println!(
        "적용 계수: 높이 ×{:.2}, 환경 가산 ×{:.2}",
        result.factors.height_multiplier, result.factors.environmental_multiplier
    );
}

/// 단위 변환 메뉴를 처리한다. 단위를 비워두면 설정의 기본 단위를 쓴다.
pub fn handle_unit_conversion(cfg: &Config) -> Result<(), AppError> {
    println!("\n-- 단위 변환 --");
    println!("1) 면적  2) 길이  3) 냉방 능력(열량)");
    let kind = loop {
        let sel = read_line("항목 번호를 입력: ")?;
        match sel.trim() {
            "1" => break QuantityKind::Area,
            "2" => break QuantityKind::Length,
            "3" => break QuantityKind::Power,
            _ => println!("지원하지 않는 번호입니다."),
        }
    };
    let default_unit = cfg.default_units.unit_name_for(kind);
    let value = read_f64("값 입력: ")?;
    let from_input = read_line(&format!("입력 단위(엔터 시 {default_unit}): "))?;
    let from_unit = match from_input.trim() {
        "" => default_unit,
        s => s,
    };
    let to_input = read_line(&format!("변환 단위(엔터 시 {default_unit}): "))?;
    let to_unit = match to_input.trim() {
        "" => default_unit,
        s => s,
    };
    let result = conversion::convert(kind, value, from_unit, to_unit)?;
    println!("변환 결과: {result} {to_unit}");
    Ok(())
}

/// 가로/세로 치수로 평수를 환산한다.
pub fn handle_area_helper() -> Result<(), AppError> {
    println!("\n-- 면적 환산 --");
    let length = read_f64("방 가로 [m]: ")?;
    let width = read_f64("방 세로 [m]: ")?;
    let dims = RoomDimensions {
        length_m: length,
        width_m: width,
    };
    println!(
        "바닥 면적: {:.2} m² = {:.2} 평",
        dims.floor_area_sqm(),
        dims.area_ping()
    );
    Ok(())
}

/// 설정 메뉴를 처리한다.
pub fn handle_settings(cfg: &mut Config) -> Result<(), AppError> {
    println!("\n-- 설정 --");
    print_rate_table(&cfg.rates);
    println!("1) 요율표를 기본값으로 초기화");
    let sel = read_line("선택(취소하려면 엔터): ")?;
    match sel.trim() {
        "" => {}
        "1" => {
            cfg.rates = RateTable::default();
            println!("요율표를 기본값으로 되돌렸습니다.");
        }
        _ => println!("잘못된 입력이므로 변경하지 않습니다."),
    }
    Ok(())
}

fn print_rate_table(rates: &RateTable) {
    println!("현재 요율표 (config.toml에서 수정 가능):");
    println!(
        "  기준값: 일반 {} / 함석 지붕 {} kcal/h/평",
        rates.base_kcal_per_ping, rates.tin_roof_kcal_per_ping
    );
    println!(
        "  높이 보정: {}m 초과 시 ×{}",
        rates.standard_height_m, rates.height_factor
    );
    println!(
        "  가산: 서향 +{:.0}% / 최상층 +{:.0}% / 통유리 +{:.0}% / 함석 지붕 +{:.0}%",
        rates.west_sun * 100.0,
        rates.top_floor * 100.0,
        rates.large_window * 100.0,
        rates.tin_roof * 100.0
    );
    println!(
        "  인원 가산: {}명 초과분 1인당 +{} kcal/h",
        rates.base_people, rates.person_kcal
    );
}

fn read_line(prompt: &str) -> Result<String, AppError> {
    print!("{prompt}");
    io::stdout().flush().map_err(AppError::Io)?;
    let mut buf = String::new();
    io::stdin().read_line(&mut buf).map_err(AppError::Io)?;
    Ok(buf)
}

fn read_f64(prompt: &str) -> Result<f64, AppError> {
    loop {
        let s = read_line(prompt)?;
        match s.trim().parse::<f64>() {
            Ok(v) => return Ok(v),
            Err(_) => println!("숫자를 입력하세요."),
        }
    }
}

fn read_u32(prompt: &str) -> Result<u32, AppError> {
    loop {
        let s = read_line(prompt)?;
        match s.trim().parse::<u32>() {
            Ok(v) => return Ok(v),
            Err(_) => println!("0 이상의 정수를 입력하세요."),
        }
    }
}

fn read_bool(prompt: &str) -> Result<bool, AppError> {
    loop {
        let s = read_line(prompt)?;
        match s.trim().to_ascii_lowercase().as_str() {
            "y" | "yes" => return Ok(true),
            "n" | "no" => return Ok(false),
            _ => println!("y 또는 n으로 답하세요."),
        }
    }
}
