//! 단위 정의 및 변환 모듈 모음.

pub mod area;
pub mod length;
pub mod power;

pub use area::{convert_area, AreaUnit, SQM_PER_PING};
pub use length::{convert_length, LengthUnit};
pub use power::{convert_power, PowerUnit};
