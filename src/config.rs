use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

use crate::error::Result as UnitResult;
use crate::quantity::QuantityKind;
use crate::units::*;

/// 화면 표시용 물리량별 선호 단위.
/// 계산은 항상 기준 단위로 하고, 표시 직전에 이 단위로 변환한다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayUnits {
    pub pressure: PressureUnit,
    pub temperature: TemperatureUnit,
    pub enthalpy: EnthalpyUnit,
    pub flow_rate: FlowRateUnit,
    pub height: HeightUnit,
    pub power: PowerUnit,
    pub velocity: VelocityUnit,
    pub specific_humidity: SpecificHumidityUnit,
}

impl Default for DisplayUnits {
    fn default() -> Self {
        Self {
            pressure: PressureUnit::BASE,
            temperature: TemperatureUnit::BASE,
            enthalpy: EnthalpyUnit::BASE,
            flow_rate: FlowRateUnit::BASE,
            height: HeightUnit::BASE,
            power: PowerUnit::BASE,
            velocity: VelocityUnit::BASE,
            specific_humidity: SpecificHumidityUnit::BASE,
        }
    }
}

impl DisplayUnits {
    /// 해당 물리량의 선호 단위 라벨.
    pub fn label(&self, kind: QuantityKind) -> &'static str {
        match kind {
            QuantityKind::Pressure => self.pressure.label(),
            QuantityKind::Temperature => self.temperature.label(),
            QuantityKind::Enthalpy => self.enthalpy.label(),
            QuantityKind::FlowRate => self.flow_rate.label(),
            QuantityKind::Height => self.height.label(),
            QuantityKind::Power => self.power.label(),
            QuantityKind::Velocity => self.velocity.label(),
            QuantityKind::SpecificHumidity => self.specific_humidity.label(),
        }
    }

    /// 기준 단위 값을 선호 단위로 변환한다.
    pub fn display(&self, kind: QuantityKind, value_base: f64) -> UnitResult<f64> {
        match kind {
            QuantityKind::Pressure => pressure_to_unit(self.pressure, value_base),
            QuantityKind::Temperature => temperature_to_unit(self.temperature, value_base),
            QuantityKind::Enthalpy => enthalpy_to_unit(self.enthalpy, value_base),
            QuantityKind::FlowRate => flow_rate_to_unit(self.flow_rate, value_base),
            QuantityKind::Height => height_to_unit(self.height, value_base),
            QuantityKind::Power => power_to_unit(self.power, value_base),
            QuantityKind::Velocity => velocity_to_unit(self.velocity, value_base),
            QuantityKind::SpecificHumidity => {
                specific_humidity_to_unit(self.specific_humidity, value_base)
            }
        }
    }
}

/// 라이브러리 사용자 설정을 표현한다.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub display_units: DisplayUnits,
}

/// 설정 로드/저장 시 발생 가능한 오류를 표현한다.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// 파일 입출력 오류
    #[error("config I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML 역직렬화 오류
    #[error("config parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// TOML 직렬화 오류
    #[error("config serialize error: {0}")]
    Serialize(#[from] toml::ser::Error),
}

impl Config {
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// TOML 파일에서 설정을 읽는다.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// 설정을 TOML 파일로 저장한다.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        fs::write(path, self.to_toml_string()?)?;
        Ok(())
    }
}

/// 설정 파일을 로드하거나, 없으면 기본 설정을 반환한다. 파일은 만들지 않는다.
pub fn load_or_default(path: impl AsRef<Path>) -> Result<Config, ConfigError> {
    let path = path.as_ref();
    if path.exists() {
        Config::load(path)
    } else {
        log::debug!("config {} not found, using defaults", path.display());
        Ok(Config::default())
    }
}
