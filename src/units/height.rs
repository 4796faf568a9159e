use std::fmt;

use serde::{Deserialize, Serialize};

use super::{label_at, unit_at};
use crate::constants::CONSTANTS;
use crate::error::{Result, UnitError};
use crate::quantity::QuantityKind;
use crate::validation::validate_finite_number;

/// 높이(길이) 단위. 내부 기준은 미터이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum HeightUnit {
    Meters = 0,
    Feet = 1,
}

const LABELS: [&str; 2] = ["m", "ft"];

impl HeightUnit {
    pub const ALL: [HeightUnit; 2] = [HeightUnit::Meters, HeightUnit::Feet];

    pub const BASE: HeightUnit = HeightUnit::Meters;

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn label(self) -> &'static str {
        LABELS[self.index()]
    }
}

impl fmt::Display for HeightUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl TryFrom<usize> for HeightUnit {
    type Error = UnitError;

    fn try_from(index: usize) -> Result<Self> {
        unit_at(&Self::ALL, QuantityKind::Height, index)
    }
}

pub fn height_unit_label(index: usize) -> Result<&'static str> {
    label_at(&LABELS, "HeightUnit", index)
}

pub fn height_to_unit(unit: HeightUnit, value: f64) -> Result<f64> {
    validate_finite_number(value, "height")?;
    Ok(match unit {
        HeightUnit::Meters => value,
        HeightUnit::Feet => value / CONSTANTS.meters_per_foot,
    })
}

pub fn height_from_unit(unit: HeightUnit, value: f64) -> Result<f64> {
    validate_finite_number(value, "height")?;
    Ok(match unit {
        HeightUnit::Meters => value,
        HeightUnit::Feet => value * CONSTANTS.meters_per_foot,
    })
}

/// 높이를 다른 단위로 변환한다.
pub fn convert_height(value: f64, from: HeightUnit, to: HeightUnit) -> Result<f64> {
    let m = height_from_unit(from, value)?;
    height_to_unit(to, m)
}
