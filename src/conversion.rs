//! 단위를 서수(드롭다운 인덱스 등)로 들고 있는 호출자를 위한 변환 진입점.
//!
//! 서수를 해당 물리량의 단위 enum으로 바꾼 뒤 물리량별 변환 함수로 넘긴다.
//! 범위를 벗어난 서수는 물리량 이름과 값을 담은 `UnknownUnit` 오류가 된다.

use crate::error::Result;
use crate::quantity::QuantityKind;
use crate::units::*;

/// 기준 단위 값을 `unit_index` 단위로 변환한다.
pub fn to_unit_by_index(kind: QuantityKind, unit_index: usize, value: f64) -> Result<f64> {
    match kind {
        QuantityKind::Pressure => pressure_to_unit(unit_index.try_into()?, value),
        QuantityKind::Temperature => temperature_to_unit(unit_index.try_into()?, value),
        QuantityKind::Enthalpy => enthalpy_to_unit(unit_index.try_into()?, value),
        QuantityKind::FlowRate => flow_rate_to_unit(unit_index.try_into()?, value),
        QuantityKind::Height => height_to_unit(unit_index.try_into()?, value),
        QuantityKind::Power => power_to_unit(unit_index.try_into()?, value),
        QuantityKind::Velocity => velocity_to_unit(unit_index.try_into()?, value),
        QuantityKind::SpecificHumidity => {
            specific_humidity_to_unit(unit_index.try_into()?, value)
        }
    }
}

/// `unit_index` 단위의 값을 기준 단위로 변환한다.
pub fn from_unit_by_index(kind: QuantityKind, unit_index: usize, value: f64) -> Result<f64> {
    match kind {
        QuantityKind::Pressure => pressure_from_unit(unit_index.try_into()?, value),
        QuantityKind::Temperature => temperature_from_unit(unit_index.try_into()?, value),
        QuantityKind::Enthalpy => enthalpy_from_unit(unit_index.try_into()?, value),
        QuantityKind::FlowRate => flow_rate_from_unit(unit_index.try_into()?, value),
        QuantityKind::Height => height_from_unit(unit_index.try_into()?, value),
        QuantityKind::Power => power_from_unit(unit_index.try_into()?, value),
        QuantityKind::Velocity => velocity_from_unit(unit_index.try_into()?, value),
        QuantityKind::SpecificHumidity => {
            specific_humidity_from_unit(unit_index.try_into()?, value)
        }
    }
}

/// 같은 물리량 안에서 두 단위 사이를 변환한다. 기준 단위를 경유한다.
pub fn convert_by_index(
    kind: QuantityKind,
    value: f64,
    from_index: usize,
    to_index: usize,
) -> Result<f64> {
    let base = from_unit_by_index(kind, from_index, value)?;
    to_unit_by_index(kind, to_index, base)
}

/// 서수에 해당하는 단위 라벨.
pub fn unit_label(kind: QuantityKind, unit_index: usize) -> Result<&'static str> {
    match kind {
        QuantityKind::Pressure => pressure_unit_label(unit_index),
        QuantityKind::Temperature => temperature_unit_label(unit_index),
        QuantityKind::Enthalpy => enthalpy_unit_label(unit_index),
        QuantityKind::FlowRate => flow_rate_unit_label(unit_index),
        QuantityKind::Height => height_unit_label(unit_index),
        QuantityKind::Power => power_unit_label(unit_index),
        QuantityKind::Velocity => velocity_unit_label(unit_index),
        QuantityKind::SpecificHumidity => specific_humidity_unit_label(unit_index),
    }
}
