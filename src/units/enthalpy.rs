use std::fmt;

use serde::{Deserialize, Serialize};

use super::{label_at, unit_at};
use crate::constants::CONSTANTS;
use crate::error::{Result, UnitError};
use crate::quantity::QuantityKind;
use crate::validation::validate_finite_number;

/// 비엔탈피 단위. 내부 기준은 kJ/kg이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum EnthalpyUnit {
    KiloJoulesPerKilogram = 0,
    BritishThermalUnitPerPound = 1,
}

const LABELS: [&str; 2] = ["kJ/kg", "Btu/lb"];

impl EnthalpyUnit {
    pub const ALL: [EnthalpyUnit; 2] = [
        EnthalpyUnit::KiloJoulesPerKilogram,
        EnthalpyUnit::BritishThermalUnitPerPound,
    ];

    pub const BASE: EnthalpyUnit = EnthalpyUnit::KiloJoulesPerKilogram;

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn label(self) -> &'static str {
        LABELS[self.index()]
    }
}

impl fmt::Display for EnthalpyUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl TryFrom<usize> for EnthalpyUnit {
    type Error = UnitError;

    fn try_from(index: usize) -> Result<Self> {
        unit_at(&Self::ALL, QuantityKind::Enthalpy, index)
    }
}

pub fn enthalpy_unit_label(index: usize) -> Result<&'static str> {
    label_at(&LABELS, "EnthalpyUnit", index)
}

/// kJ/kg 값을 원하는 단위로 변환한다.
pub fn enthalpy_to_unit(unit: EnthalpyUnit, value: f64) -> Result<f64> {
    validate_finite_number(value, "enthalpy")?;
    let c = &CONSTANTS;
    Ok(match unit {
        EnthalpyUnit::KiloJoulesPerKilogram => value,
        EnthalpyUnit::BritishThermalUnitPerPound => {
            value / c.btu_per_watt_hour / c.kilograms_per_pound * c.seconds_per_hour
        }
    })
}

/// 주어진 단위의 비엔탈피를 kJ/kg로 변환한다.
pub fn enthalpy_from_unit(unit: EnthalpyUnit, value: f64) -> Result<f64> {
    validate_finite_number(value, "enthalpy")?;
    let c = &CONSTANTS;
    Ok(match unit {
        EnthalpyUnit::KiloJoulesPerKilogram => value,
        EnthalpyUnit::BritishThermalUnitPerPound => {
            value * c.btu_per_watt_hour * c.kilograms_per_pound / c.seconds_per_hour
        }
    })
}

/// 비엔탈피를 변환한다.
pub fn convert_enthalpy(value: f64, from: EnthalpyUnit, to: EnthalpyUnit) -> Result<f64> {
    let base = enthalpy_from_unit(from, value)?;
    enthalpy_to_unit(to, base)
}
