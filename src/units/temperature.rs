use std::fmt;

use serde::{Deserialize, Serialize};

use super::{label_at, unit_at};
use crate::error::{Result, UnitError};
use crate::quantity::QuantityKind;
use crate::validation::{validate_temperature, validate_temperature_celsius};

/// 온도 단위를 정의한다. 내부 기준은 섭씨이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum TemperatureUnit {
    Celsius = 0,
    Fahrenheit = 1,
    Kelvin = 2,
}

const LABELS: [&str; 3] = ["°C", "°F", "K"];

const KELVIN_OFFSET: f64 = 273.15;

impl TemperatureUnit {
    pub const ALL: [TemperatureUnit; 3] = [
        TemperatureUnit::Celsius,
        TemperatureUnit::Fahrenheit,
        TemperatureUnit::Kelvin,
    ];

    pub const BASE: TemperatureUnit = TemperatureUnit::Celsius;

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn label(self) -> &'static str {
        LABELS[self.index()]
    }
}

impl fmt::Display for TemperatureUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl TryFrom<usize> for TemperatureUnit {
    type Error = UnitError;

    fn try_from(index: usize) -> Result<Self> {
        unit_at(&Self::ALL, QuantityKind::Temperature, index)
    }
}

pub fn temperature_unit_label(index: usize) -> Result<&'static str> {
    label_at(&LABELS, "TemperatureUnit", index)
}

/// 섭씨 값을 원하는 단위로 변환한다. 입력은 섭씨 절대영도 기준으로 검사한다.
pub fn temperature_to_unit(unit: TemperatureUnit, value: f64) -> Result<f64> {
    validate_temperature_celsius(value)?;
    Ok(match unit {
        TemperatureUnit::Celsius => value,
        TemperatureUnit::Fahrenheit => value * 9.0 / 5.0 + 32.0,
        TemperatureUnit::Kelvin => value + KELVIN_OFFSET,
    })
}

/// 주어진 단위의 온도를 섭씨로 변환한다.
/// 입력은 읽는 단위(원본 단위)의 절대영도 기준으로 검사한다.
pub fn temperature_from_unit(unit: TemperatureUnit, value: f64) -> Result<f64> {
    validate_temperature(unit, value)?;
    Ok(match unit {
        TemperatureUnit::Celsius => value,
        TemperatureUnit::Fahrenheit => (value - 32.0) * 5.0 / 9.0,
        TemperatureUnit::Kelvin => value - KELVIN_OFFSET,
    })
}

/// 온도를 서로 다른 단위로 변환한다.
pub fn convert_temperature(value: f64, from: TemperatureUnit, to: TemperatureUnit) -> Result<f64> {
    let c = temperature_from_unit(from, value)?;
    temperature_to_unit(to, c)
}
