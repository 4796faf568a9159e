//! 변환 전에 입력값을 검사하는 가드 함수 모음.
//!
//! 모든 검사는 값이 유효하면 `Ok(())`, 아니면 오류를 반환한다.
//! 유한수 검사가 항상 먼저 수행된다.

use log::debug;

use crate::error::{Result, UnitError};
use crate::units::TemperatureUnit;

/// 섭씨 절대영도.
pub const ABSOLUTE_ZERO_CELSIUS: f64 = -273.15;
/// 켈빈 절대영도.
pub const ABSOLUTE_ZERO_KELVIN: f64 = 0.0;
/// 화씨 절대영도.
pub const ABSOLUTE_ZERO_FAHRENHEIT: f64 = -459.67;

/// NaN, ±무한대를 거부한다. `label`은 오류 메시지에 들어갈 이름이다.
pub fn validate_finite_number(value: f64, label: &'static str) -> Result<()> {
    if !value.is_finite() {
        debug!("rejected non-finite {label}: {value}");
        return Err(UnitError::NotFinite { label, value });
    }
    Ok(())
}

fn validate_above(value: f64, limit: f64, symbol: &'static str) -> Result<()> {
    validate_finite_number(value, "temperature")?;
    if value < limit {
        debug!("rejected temperature below absolute zero: {value}{symbol}");
        return Err(UnitError::BelowAbsoluteZero {
            limit,
            symbol,
            value,
        });
    }
    Ok(())
}

/// 섭씨 온도가 -273.15°C 이상인지 검사한다.
pub fn validate_temperature_celsius(value: f64) -> Result<()> {
    validate_above(value, ABSOLUTE_ZERO_CELSIUS, "°C")
}

/// 켈빈 온도가 0K 이상인지 검사한다.
pub fn validate_temperature_kelvin(value: f64) -> Result<()> {
    validate_above(value, ABSOLUTE_ZERO_KELVIN, "K")
}

/// 화씨 온도가 -459.67°F 이상인지 검사한다.
pub fn validate_temperature_fahrenheit(value: f64) -> Result<()> {
    validate_above(value, ABSOLUTE_ZERO_FAHRENHEIT, "°F")
}

/// 주어진 단위의 척도로 온도를 검사한다.
pub fn validate_temperature(unit: TemperatureUnit, value: f64) -> Result<()> {
    match unit {
        TemperatureUnit::Celsius => validate_temperature_celsius(value),
        TemperatureUnit::Fahrenheit => validate_temperature_fahrenheit(value),
        TemperatureUnit::Kelvin => validate_temperature_kelvin(value),
    }
}

fn validate_non_negative(value: f64, label: &'static str, quantity: &'static str) -> Result<()> {
    validate_finite_number(value, label)?;
    if value < 0.0 {
        debug!("rejected negative {label}: {value}");
        return Err(UnitError::Negative { quantity, value });
    }
    Ok(())
}

/// 절대압은 음수가 될 수 없다.
pub fn validate_pressure(value: f64) -> Result<()> {
    validate_non_negative(value, "pressure", "Pressure")
}

/// 비습도(g/kg 등)는 음수가 될 수 없다.
pub fn validate_specific_humidity(value: f64) -> Result<()> {
    validate_non_negative(value, "specific humidity", "Specific humidity")
}
