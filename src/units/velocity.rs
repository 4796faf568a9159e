use std::fmt;

use serde::{Deserialize, Serialize};

use super::{label_at, unit_at};
use crate::constants::CONSTANTS;
use crate::error::{Result, UnitError};
use crate::quantity::QuantityKind;
use crate::validation::validate_finite_number;

/// 속도 단위. 내부 기준은 m/s이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum VelocityUnit {
    MetersPerSecond = 0,
    FeetPerMinute = 1,
    FeetPerSecond = 2,
    KilometersPerHour = 3,
    MilesPerHour = 4,
}

const LABELS: [&str; 5] = ["m/s", "ft/min", "ft/s", "km/h", "mph"];

impl VelocityUnit {
    pub const ALL: [VelocityUnit; 5] = [
        VelocityUnit::MetersPerSecond,
        VelocityUnit::FeetPerMinute,
        VelocityUnit::FeetPerSecond,
        VelocityUnit::KilometersPerHour,
        VelocityUnit::MilesPerHour,
    ];

    pub const BASE: VelocityUnit = VelocityUnit::MetersPerSecond;

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn label(self) -> &'static str {
        LABELS[self.index()]
    }
}

impl fmt::Display for VelocityUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl TryFrom<usize> for VelocityUnit {
    type Error = UnitError;

    fn try_from(index: usize) -> Result<Self> {
        unit_at(&Self::ALL, QuantityKind::Velocity, index)
    }
}

pub fn velocity_unit_label(index: usize) -> Result<&'static str> {
    label_at(&LABELS, "VelocityUnit", index)
}

/// m/s 값을 원하는 단위로 변환한다.
pub fn velocity_to_unit(unit: VelocityUnit, value: f64) -> Result<f64> {
    validate_finite_number(value, "velocity")?;
    let c = &CONSTANTS;
    Ok(match unit {
        VelocityUnit::MetersPerSecond => value,
        VelocityUnit::FeetPerMinute => value / c.meters_per_foot * c.seconds_per_minute,
        VelocityUnit::FeetPerSecond => value / c.meters_per_foot,
        VelocityUnit::KilometersPerHour => value / c.meters_per_kilometer * c.seconds_per_hour,
        VelocityUnit::MilesPerHour => value / c.meters_per_mile * c.seconds_per_hour,
    })
}

/// 주어진 단위의 속도를 m/s로 변환한다.
pub fn velocity_from_unit(unit: VelocityUnit, value: f64) -> Result<f64> {
    validate_finite_number(value, "velocity")?;
    let c = &CONSTANTS;
    Ok(match unit {
        VelocityUnit::MetersPerSecond => value,
        VelocityUnit::FeetPerMinute => value * c.meters_per_foot / c.seconds_per_minute,
        VelocityUnit::FeetPerSecond => value * c.meters_per_foot,
        VelocityUnit::KilometersPerHour => value * c.meters_per_kilometer / c.seconds_per_hour,
        VelocityUnit::MilesPerHour => value * c.meters_per_mile / c.seconds_per_hour,
    })
}

/// 속도를 변환한다.
pub fn convert_velocity(value: f64, from: VelocityUnit, to: VelocityUnit) -> Result<f64> {
    let base = velocity_from_unit(from, value)?;
    velocity_to_unit(to, base)
}
