//! 물리량별 단위 정의 및 변환 모듈 모음.
//!
//! 각 물리량은 기준 단위 하나를 중심으로 `*_to_unit`(기준 → 대상),
//! `*_from_unit`(대상 → 기준) 함수 쌍을 제공한다.

pub mod enthalpy;
pub mod flow_rate;
pub mod height;
pub mod power;
pub mod pressure;
pub mod specific_humidity;
pub mod temperature;
pub mod velocity;

pub use enthalpy::{
    convert_enthalpy, enthalpy_from_unit, enthalpy_to_unit, enthalpy_unit_label, EnthalpyUnit,
};
pub use flow_rate::{
    convert_flow_rate, flow_rate_from_unit, flow_rate_to_unit, flow_rate_unit_label, FlowRateUnit,
};
pub use height::{convert_height, height_from_unit, height_to_unit, height_unit_label, HeightUnit};
pub use power::{convert_power, power_from_unit, power_to_unit, power_unit_label, PowerUnit};
pub use pressure::{
    convert_pressure, pressure_from_unit, pressure_to_unit, pressure_unit_label, PressureUnit,
};
pub use specific_humidity::{
    convert_specific_humidity, specific_humidity_from_unit, specific_humidity_to_unit,
    specific_humidity_unit_label, SpecificHumidityUnit,
};
pub use temperature::{
    convert_temperature, temperature_from_unit, temperature_to_unit, temperature_unit_label,
    TemperatureUnit,
};
pub use velocity::{
    convert_velocity, velocity_from_unit, velocity_to_unit, velocity_unit_label, VelocityUnit,
};

use log::debug;

use crate::error::{Result, UnitError};
use crate::quantity::QuantityKind;

/// 서수로 단위 variant를 찾는다. 범위를 벗어나면 `UnknownUnit`.
fn unit_at<U: Copy>(all: &[U], quantity: QuantityKind, index: usize) -> Result<U> {
    all.get(index).copied().ok_or_else(|| {
        debug!("unknown {quantity} unit ordinal {index}");
        UnitError::UnknownUnit { quantity, index }
    })
}

/// 라벨 테이블 조회. 범위를 벗어나면 `NoLabel`.
fn label_at(labels: &[&'static str], type_name: &'static str, index: usize) -> Result<&'static str> {
    labels
        .get(index)
        .copied()
        .ok_or(UnitError::NoLabel { type_name, index })
}
