//! HVAC 계산에 쓰이는 물리량(압력, 온도, 비엔탈피, 유량, 높이, 동력, 속도, 비습도)의
//! 단위 변환 라이브러리. 각 물리량은 기준 단위 하나를 중심으로 변환한다.

pub mod config;
pub mod constants;
pub mod conversion;
pub mod error;
pub mod quantity;
pub mod units;
pub mod validation;

pub use constants::{PhysicalConstants, CONSTANTS};
pub use error::{ErrorKind, UnitError};
pub use quantity::QuantityKind;
