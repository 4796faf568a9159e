use std::fmt;

use serde::{Deserialize, Serialize};

use crate::units::*;

/// 다루는 물리량 종류를 나타낸다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum QuantityKind {
    Pressure,
    Temperature,
    Enthalpy,
    FlowRate,
    Height,
    Power,
    Velocity,
    SpecificHumidity,
}

impl QuantityKind {
    pub const ALL: [QuantityKind; 8] = [
        QuantityKind::Pressure,
        QuantityKind::Temperature,
        QuantityKind::Enthalpy,
        QuantityKind::FlowRate,
        QuantityKind::Height,
        QuantityKind::Power,
        QuantityKind::Velocity,
        QuantityKind::SpecificHumidity,
    ];

    /// 오류 메시지 등에 쓰이는 소문자 이름.
    pub fn name(self) -> &'static str {
        match self {
            QuantityKind::Pressure => "air pressure",
            QuantityKind::Temperature => "temperature",
            QuantityKind::Enthalpy => "enthalpy",
            QuantityKind::FlowRate => "flow rate",
            QuantityKind::Height => "height",
            QuantityKind::Power => "power",
            QuantityKind::Velocity => "velocity",
            QuantityKind::SpecificHumidity => "specific humidity",
        }
    }

    /// 해당 물리량이 가진 단위 개수.
    pub fn unit_count(self) -> usize {
        self.unit_labels().len()
    }

    /// 단위 라벨을 서수 순서대로 반환한다.
    pub fn unit_labels(self) -> Vec<&'static str> {
        fn labels<U: Copy>(all: &[U], label: fn(U) -> &'static str) -> Vec<&'static str> {
            all.iter().map(|&u| label(u)).collect()
        }
        match self {
            QuantityKind::Pressure => labels(&PressureUnit::ALL, PressureUnit::label),
            QuantityKind::Temperature => labels(&TemperatureUnit::ALL, TemperatureUnit::label),
            QuantityKind::Enthalpy => labels(&EnthalpyUnit::ALL, EnthalpyUnit::label),
            QuantityKind::FlowRate => labels(&FlowRateUnit::ALL, FlowRateUnit::label),
            QuantityKind::Height => labels(&HeightUnit::ALL, HeightUnit::label),
            QuantityKind::Power => labels(&PowerUnit::ALL, PowerUnit::label),
            QuantityKind::Velocity => labels(&VelocityUnit::ALL, VelocityUnit::label),
            QuantityKind::SpecificHumidity => {
                labels(&SpecificHumidityUnit::ALL, SpecificHumidityUnit::label)
            }
        }
    }

    /// 기준 단위 라벨.
    pub fn base_unit_label(self) -> &'static str {
        match self {
            QuantityKind::Pressure => PressureUnit::BASE.label(),
            QuantityKind::Temperature => TemperatureUnit::BASE.label(),
            QuantityKind::Enthalpy => EnthalpyUnit::BASE.label(),
            QuantityKind::FlowRate => FlowRateUnit::BASE.label(),
            QuantityKind::Height => HeightUnit::BASE.label(),
            QuantityKind::Power => PowerUnit::BASE.label(),
            QuantityKind::Velocity => VelocityUnit::BASE.label(),
            QuantityKind::SpecificHumidity => SpecificHumidityUnit::BASE.label(),
        }
    }
}

impl fmt::Display for QuantityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
