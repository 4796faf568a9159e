use thiserror::Error;

use crate::quantity::QuantityKind;

/// 오류 분류. 유한수 검사 실패는 타입 오류, 나머지는 도메인 오류로 본다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// NaN 또는 무한대 입력
    Type,
    /// 물리적 범위 위반, 알 수 없는 단위
    Domain,
}

/// 단위 변환/검증 시 발생 가능한 오류.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum UnitError {
    /// 입력값이 유한한 실수가 아님
    #[error("{label} must be a finite number, received: {value}")]
    NotFinite { label: &'static str, value: f64 },

    /// 절대영도 미만의 온도
    #[error("Temperature cannot be below absolute zero ({limit}{symbol}), received: {value}{symbol}")]
    BelowAbsoluteZero {
        limit: f64,
        symbol: &'static str,
        value: f64,
    },

    /// 음수가 될 수 없는 물리량에 음수 입력
    #[error("{quantity} cannot be negative, received: {value}")]
    Negative { quantity: &'static str, value: f64 },

    /// 범위를 벗어난 단위 서수
    #[error("Unknown {quantity} unit {index}")]
    UnknownUnit { quantity: QuantityKind, index: usize },

    /// 라벨 테이블에 없는 단위 서수
    #[error("{index} of type {type_name} has no label")]
    NoLabel {
        type_name: &'static str,
        index: usize,
    },
}

impl UnitError {
    /// 오류 분류를 반환한다.
    pub fn kind(&self) -> ErrorKind {
        match self {
            UnitError::NotFinite { .. } => ErrorKind::Type,
            UnitError::BelowAbsoluteZero { .. }
            | UnitError::Negative { .. }
            | UnitError::UnknownUnit { .. }
            | UnitError::NoLabel { .. } => ErrorKind::Domain,
        }
    }

    pub fn is_type_error(&self) -> bool {
        self.kind() == ErrorKind::Type
    }
}

pub type Result<T> = std::result::Result<T, UnitError>;
