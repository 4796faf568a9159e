use std::fmt;

use serde::{Deserialize, Serialize};

use super::{label_at, unit_at};
use crate::constants::CONSTANTS;
use crate::error::{Result, UnitError};
use crate::quantity::QuantityKind;
use crate::validation::validate_finite_number;

/// 체적 유량 단위. 내부 기준은 m³/s이다. GPM은 US gallon 기준.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum FlowRateUnit {
    CubicMetersPerSecond = 0,
    CubicMetersPerHour = 1,
    CubicFeetPerMinute = 2,
    LitersPerSecond = 3,
    LitersPerMinute = 4,
    GallonsPerMinute = 5,
}

const LABELS: [&str; 6] = ["m³/s", "m³/h", "CFM", "L/s", "L/min", "GPM"];

impl FlowRateUnit {
    pub const ALL: [FlowRateUnit; 6] = [
        FlowRateUnit::CubicMetersPerSecond,
        FlowRateUnit::CubicMetersPerHour,
        FlowRateUnit::CubicFeetPerMinute,
        FlowRateUnit::LitersPerSecond,
        FlowRateUnit::LitersPerMinute,
        FlowRateUnit::GallonsPerMinute,
    ];

    pub const BASE: FlowRateUnit = FlowRateUnit::CubicMetersPerSecond;

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn label(self) -> &'static str {
        LABELS[self.index()]
    }
}

impl fmt::Display for FlowRateUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl TryFrom<usize> for FlowRateUnit {
    type Error = UnitError;

    fn try_from(index: usize) -> Result<Self> {
        unit_at(&Self::ALL, QuantityKind::FlowRate, index)
    }
}

pub fn flow_rate_unit_label(index: usize) -> Result<&'static str> {
    label_at(&LABELS, "FlowRateUnit", index)
}

/// m³/s 값을 원하는 단위로 변환한다.
pub fn flow_rate_to_unit(unit: FlowRateUnit, value: f64) -> Result<f64> {
    validate_finite_number(value, "flow rate")?;
    let c = &CONSTANTS;
    let liters_per_minute = value * c.liters_per_cubic_meter * c.seconds_per_minute;
    Ok(match unit {
        FlowRateUnit::CubicMetersPerSecond => value,
        FlowRateUnit::CubicMetersPerHour => value * c.seconds_per_hour,
        FlowRateUnit::CubicFeetPerMinute => {
            value / c.cubic_meters_per_cubic_foot * c.seconds_per_minute
        }
        FlowRateUnit::LitersPerSecond => value * c.liters_per_cubic_meter,
        FlowRateUnit::LitersPerMinute => liters_per_minute,
        FlowRateUnit::GallonsPerMinute => liters_per_minute / c.liters_per_gallon,
    })
}

/// 주어진 단위의 유량을 m³/s로 변환한다.
pub fn flow_rate_from_unit(unit: FlowRateUnit, value: f64) -> Result<f64> {
    validate_finite_number(value, "flow rate")?;
    let c = &CONSTANTS;
    Ok(match unit {
        FlowRateUnit::CubicMetersPerSecond => value,
        FlowRateUnit::CubicMetersPerHour => value / c.seconds_per_hour,
        FlowRateUnit::CubicFeetPerMinute => {
            value * c.cubic_meters_per_cubic_foot / c.seconds_per_minute
        }
        FlowRateUnit::LitersPerSecond => value / c.liters_per_cubic_meter,
        FlowRateUnit::LitersPerMinute => {
            value / c.liters_per_cubic_meter / c.seconds_per_minute
        }
        FlowRateUnit::GallonsPerMinute => {
            value * c.liters_per_gallon / c.liters_per_cubic_meter / c.seconds_per_minute
        }
    })
}

/// 유량을 변환한다.
pub fn convert_flow_rate(value: f64, from: FlowRateUnit, to: FlowRateUnit) -> Result<f64> {
    let base = flow_rate_from_unit(from, value)?;
    flow_rate_to_unit(to, base)
}
