use serde::{Deserialize, Serialize};

use crate::units::SQM_PER_PING;

/// 방의 가로/세로 치수 [m]. 평수를 직접 모를 때 쓰는 입력 보조.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RoomDimensions {
    pub length_m: f64,
    pub width_m: f64,
}

impl RoomDimensions {
    /// 바닥 면적 [m²]
    pub fn floor_area_sqm(&self) -> f64 {
        self.length_m * self.width_m
    }

    /// 바닥 면적 [평] = 가로 × 세로 / 3.3058
    pub fn area_ping(&self) -> f64 {
        self.floor_area_sqm() / SQM_PER_PING
    }
}
