use std::fmt;

use serde::{Deserialize, Serialize};

use super::{label_at, unit_at};
use crate::constants::CONSTANTS;
use crate::error::{Result, UnitError};
use crate::quantity::QuantityKind;
use crate::validation::validate_pressure;

/// 압력 단위. 내부 기준은 Pa(절대압)이다.
/// 수주/수은주 단위는 mmH₂O = 10 Pa, mmHg = 400/3 Pa 의 근사 환산을 쓴다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum PressureUnit {
    Pascal = 0,
    KiloPascal = 1,
    MmH2O = 2,
    InH2O = 3,
    MmHg = 4,
    InHg = 5,
    Bar = 6,
    Psia = 7,
    FtH2O = 8,
    FtHg = 9,
}

const LABELS: [&str; 10] = [
    "Pa", "kPa", "mmH₂O", "inH₂O", "mmHg", "inHg", "bar", "PSIA", "ftH₂O", "ftHg",
];

const PA_PER_KPA: f64 = 1000.0;
const PA_PER_MMH2O: f64 = 10.0;
const PA_PER_BAR: f64 = 100_000.0;

impl PressureUnit {
    pub const ALL: [PressureUnit; 10] = [
        PressureUnit::Pascal,
        PressureUnit::KiloPascal,
        PressureUnit::MmH2O,
        PressureUnit::InH2O,
        PressureUnit::MmHg,
        PressureUnit::InHg,
        PressureUnit::Bar,
        PressureUnit::Psia,
        PressureUnit::FtH2O,
        PressureUnit::FtHg,
    ];

    pub const BASE: PressureUnit = PressureUnit::Pascal;

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn label(self) -> &'static str {
        LABELS[self.index()]
    }
}

impl fmt::Display for PressureUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl TryFrom<usize> for PressureUnit {
    type Error = UnitError;

    fn try_from(index: usize) -> Result<Self> {
        unit_at(&Self::ALL, QuantityKind::Pressure, index)
    }
}

/// 서수에 해당하는 압력 단위 라벨을 반환한다.
pub fn pressure_unit_label(index: usize) -> Result<&'static str> {
    label_at(&LABELS, "PressureUnit", index)
}

/// Pa 값을 원하는 단위로 변환한다.
pub fn pressure_to_unit(unit: PressureUnit, value: f64) -> Result<f64> {
    validate_pressure(value)?;
    let c = &CONSTANTS;
    let mmhg = value * 3.0 / 400.0;
    Ok(match unit {
        PressureUnit::Pascal => value,
        PressureUnit::KiloPascal => value / PA_PER_KPA,
        PressureUnit::MmH2O => value / PA_PER_MMH2O,
        PressureUnit::InH2O => value / PA_PER_MMH2O / c.millimeters_per_inch,
        PressureUnit::MmHg => mmhg,
        PressureUnit::InHg => mmhg / c.millimeters_per_inch,
        PressureUnit::Bar => value / PA_PER_BAR,
        PressureUnit::Psia => {
            value / c.gravity_acceleration * c.square_meters_per_square_inch
                / c.kilograms_per_pound
        }
        PressureUnit::FtH2O => {
            value / PA_PER_MMH2O / c.millimeters_per_inch / c.inches_per_foot
        }
        PressureUnit::FtHg => mmhg / c.millimeters_per_inch / c.inches_per_foot,
    })
}

/// 주어진 단위의 압력을 Pa로 변환한다.
pub fn pressure_from_unit(unit: PressureUnit, value: f64) -> Result<f64> {
    validate_pressure(value)?;
    let c = &CONSTANTS;
    Ok(match unit {
        PressureUnit::Pascal => value,
        PressureUnit::KiloPascal => value * PA_PER_KPA,
        PressureUnit::MmH2O => value * PA_PER_MMH2O,
        PressureUnit::InH2O => value * PA_PER_MMH2O * c.millimeters_per_inch,
        PressureUnit::MmHg => value / 3.0 * 400.0,
        PressureUnit::InHg => value / 3.0 * 400.0 * c.millimeters_per_inch,
        PressureUnit::Bar => value * PA_PER_BAR,
        PressureUnit::Psia => {
            value * c.gravity_acceleration / c.square_meters_per_square_inch
                * c.kilograms_per_pound
        }
        PressureUnit::FtH2O => {
            value * PA_PER_MMH2O * c.millimeters_per_inch * c.inches_per_foot
        }
        PressureUnit::FtHg => {
            value / 3.0 * 400.0 * c.millimeters_per_inch * c.inches_per_foot
        }
    })
}

/// 압력을 원하는 단위로 변환한다.
pub fn convert_pressure(value: f64, from: PressureUnit, to: PressureUnit) -> Result<f64> {
    let pa = pressure_from_unit(from, value)?;
    pressure_to_unit(to, pa)
}
