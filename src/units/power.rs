use std::fmt;

use serde::{Deserialize, Serialize};

use super::{label_at, unit_at};
use crate::constants::CONSTANTS;
use crate::error::{Result, UnitError};
use crate::quantity::QuantityKind;
use crate::validation::validate_finite_number;

/// 동력(열량률) 단위. 내부 기준은 W이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum PowerUnit {
    Watt = 0,
    Kilowatt = 1,
    BtuPerHour = 2,
    Horsepower = 3,
    TonOfRefrigeration = 4,
}

const LABELS: [&str; 5] = ["W", "kW", "BTU/h", "hp", "TR"];

const WATTS_PER_KILOWATT: f64 = 1000.0;

impl PowerUnit {
    pub const ALL: [PowerUnit; 5] = [
        PowerUnit::Watt,
        PowerUnit::Kilowatt,
        PowerUnit::BtuPerHour,
        PowerUnit::Horsepower,
        PowerUnit::TonOfRefrigeration,
    ];

    pub const BASE: PowerUnit = PowerUnit::Watt;

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn label(self) -> &'static str {
        LABELS[self.index()]
    }
}

impl fmt::Display for PowerUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl TryFrom<usize> for PowerUnit {
    type Error = UnitError;

    fn try_from(index: usize) -> Result<Self> {
        unit_at(&Self::ALL, QuantityKind::Power, index)
    }
}

pub fn power_unit_label(index: usize) -> Result<&'static str> {
    label_at(&LABELS, "PowerUnit", index)
}

/// W 값을 원하는 단위로 변환한다.
pub fn power_to_unit(unit: PowerUnit, value: f64) -> Result<f64> {
    validate_finite_number(value, "power")?;
    let c = &CONSTANTS;
    Ok(match unit {
        PowerUnit::Watt => value,
        PowerUnit::Kilowatt => value / WATTS_PER_KILOWATT,
        PowerUnit::BtuPerHour => value * c.btu_per_watt_hour,
        PowerUnit::Horsepower => value / c.watts_per_horsepower,
        PowerUnit::TonOfRefrigeration => value / c.watts_per_ton_of_refrigeration,
    })
}

/// 주어진 단위의 동력을 W로 변환한다.
pub fn power_from_unit(unit: PowerUnit, value: f64) -> Result<f64> {
    validate_finite_number(value, "power")?;
    let c = &CONSTANTS;
    Ok(match unit {
        PowerUnit::Watt => value,
        PowerUnit::Kilowatt => value * WATTS_PER_KILOWATT,
        PowerUnit::BtuPerHour => value / c.btu_per_watt_hour,
        PowerUnit::Horsepower => value * c.watts_per_horsepower,
        PowerUnit::TonOfRefrigeration => value * c.watts_per_ton_of_refrigeration,
    })
}

pub fn convert_power(value: f64, from: PowerUnit, to: PowerUnit) -> Result<f64> {
    let w = power_from_unit(from, value)?;
    power_to_unit(to, w)
}
