use serde::{Deserialize, Serialize};

/// 1평 = 3.3058 m²
pub const SQM_PER_PING: f64 = 3.3058;

/// 면적 단위. 내부 기준은 평이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AreaUnit {
    Ping,
    SquareMeter,
    SquareFoot,
}

fn to_ping(value: f64, unit: AreaUnit) -> f64 {
    match unit {
        AreaUnit::Ping => value,
        AreaUnit::SquareMeter => value / SQM_PER_PING,
        AreaUnit::SquareFoot => value * 0.092903 / SQM_PER_PING,
    }
}

fn from_ping(value: f64, unit: AreaUnit) -> f64 {
    match unit {
        AreaUnit::Ping => value,
        AreaUnit::SquareMeter => value * SQM_PER_PING,
        AreaUnit::SquareFoot => value * SQM_PER_PING / 0.092903,
    }
}

/// 면적을 변환한다.
pub fn convert_area(value: f64, from: AreaUnit, to: AreaUnit) -> f64 {
    from_ping(to_ping(value, from), to)
}
