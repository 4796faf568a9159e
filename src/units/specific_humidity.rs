use std::fmt;

use serde::{Deserialize, Serialize};

use super::{label_at, unit_at};
use crate::error::{Result, UnitError};
use crate::quantity::QuantityKind;
use crate::validation::validate_specific_humidity;

/// 비습도(절대습도) 단위. 내부 기준은 g/kg(건공기)이다.
/// kg/kg 와 lb/lb 는 질량비이므로 수치가 같다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum SpecificHumidityUnit {
    GramsPerKilogram = 0,
    KilogramsPerKilogram = 1,
    PoundsPerPound = 2,
}

const LABELS: [&str; 3] = ["g/kg", "kg/kg", "lb/lb"];

const GRAMS_PER_KILOGRAM: f64 = 1000.0;

impl SpecificHumidityUnit {
    pub const ALL: [SpecificHumidityUnit; 3] = [
        SpecificHumidityUnit::GramsPerKilogram,
        SpecificHumidityUnit::KilogramsPerKilogram,
        SpecificHumidityUnit::PoundsPerPound,
    ];

    pub const BASE: SpecificHumidityUnit = SpecificHumidityUnit::GramsPerKilogram;

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn label(self) -> &'static str {
        LABELS[self.index()]
    }
}

impl fmt::Display for SpecificHumidityUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl TryFrom<usize> for SpecificHumidityUnit {
    type Error = UnitError;

    fn try_from(index: usize) -> Result<Self> {
        unit_at(&Self::ALL, QuantityKind::SpecificHumidity, index)
    }
}

pub fn specific_humidity_unit_label(index: usize) -> Result<&'static str> {
    label_at(&LABELS, "SpecificHumidityUnit", index)
}

/// g/kg 값을 원하는 단위로 변환한다.
pub fn specific_humidity_to_unit(unit: SpecificHumidityUnit, value: f64) -> Result<f64> {
    validate_specific_humidity(value)?;
    Ok(match unit {
        SpecificHumidityUnit::GramsPerKilogram => value,
        SpecificHumidityUnit::KilogramsPerKilogram | SpecificHumidityUnit::PoundsPerPound => {
            value / GRAMS_PER_KILOGRAM
        }
    })
}

/// 주어진 단위의 비습도를 g/kg로 변환한다.
pub fn specific_humidity_from_unit(unit: SpecificHumidityUnit, value: f64) -> Result<f64> {
    validate_specific_humidity(value)?;
    Ok(match unit {
        SpecificHumidityUnit::GramsPerKilogram => value,
        SpecificHumidityUnit::KilogramsPerKilogram | SpecificHumidityUnit::PoundsPerPound => {
            value * GRAMS_PER_KILOGRAM
        }
    })
}

pub fn convert_specific_humidity(
    value: f64,
    from: SpecificHumidityUnit,
    to: SpecificHumidityUnit,
) -> Result<f64> {
    let base = specific_humidity_from_unit(from, value)?;
    specific_humidity_to_unit(to, base)
}
