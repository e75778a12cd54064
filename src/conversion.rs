use crate::quantity::QuantityKind;
use crate::units::*;

/// 단위 변환 시 발생 가능한 오류.
#[derive(Debug)]
pub enum ConversionError {
    /// 알 수 없는 단위 문자열
    UnknownUnit(String),
}

impl std::fmt::Display for ConversionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConversionError::UnknownUnit(u) => write!(f, "알 수 없는 단위: {u}"),
        }
    }
}

impl std::error::Error for ConversionError {}

/// 문자열로 전달된 단위명을 enum으로 변환한 뒤 지정된 단위로 환산한다.
pub fn convert(
    kind: QuantityKind,
    value: f64,
    from_unit: &str,
    to_unit: &str,
) -> Result<f64, ConversionError> {
    match kind {
        QuantityKind::Area => Ok(convert_area(
            value,
            parse_area_unit(from_unit)?,
            parse_area_unit(to_unit)?,
        )),
        QuantityKind::Length => Ok(convert_length(
            value,
            parse_length_unit(from_unit)?,
            parse_length_unit(to_unit)?,
        )),
        QuantityKind::Power => Ok(convert_power(
            value,
            parse_power_unit(from_unit)?,
            parse_power_unit(to_unit)?,
        )),
    }
}

fn parse_area_unit(s: &str) -> Result<AreaUnit, ConversionError> {
    match s.trim().to_ascii_lowercase().as_str() {
        "ping" | "pyeong" | "py" | "평" => Ok(AreaUnit::Ping),
        "m2" | "m²" | "sqm" => Ok(AreaUnit::SquareMeter),
        "ft2" | "ft²" | "sqft" => Ok(AreaUnit::SquareFoot),
        _ => Err(ConversionError::UnknownUnit(s.trim().to_string())),
    }
}

fn parse_length_unit(s: &str) -> Result<LengthUnit, ConversionError> {
    match s.trim().to_ascii_lowercase().as_str() {
        "m" => Ok(LengthUnit::Meter),
        "cm" => Ok(LengthUnit::Centimeter),
        "ft" => Ok(LengthUnit::Foot),
        _ => Err(ConversionError::UnknownUnit(s.trim().to_string())),
    }
}

fn parse_power_unit(s: &str) -> Result<PowerUnit, ConversionError> {
    match s.trim().to_ascii_lowercase().as_str() {
        "kcal" | "kcal/h" => Ok(PowerUnit::KcalPerHour),
        "w" | "watt" => Ok(PowerUnit::Watt),
        "kw" => Ok(PowerUnit::KiloWatt),
        "btu" | "btu/h" => Ok(PowerUnit::BtuPerHour),
        "ton" | "rt" => Ok(PowerUnit::CoolingTon),
        _ => Err(ConversionError::UnknownUnit(s.trim().to_string())),
    }
}
