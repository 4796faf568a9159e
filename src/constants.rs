//! 변환 함수들이 공유하는 물리 상수/환산 계수.

/// 변환 계수 묶음. 프로세스 시작 시 한 번 구성되며 변경되지 않는다.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhysicalConstants {
    /// 표준 중력가속도 [m/s²]
    pub gravity_acceleration: f64,
    pub inches_per_foot: f64,
    pub kilograms_per_pound: f64,
    pub meters_per_inch: f64,
    pub meters_per_foot: f64,
    pub millimeters_per_inch: f64,
    pub seconds_per_hour: f64,
    pub seconds_per_minute: f64,
    pub minutes_per_hour: f64,
    pub square_meters_per_square_inch: f64,
    /// 1 Wh = 3.412 BTU
    pub btu_per_watt_hour: f64,
    pub cubic_meters_per_cubic_foot: f64,
    pub liters_per_cubic_meter: f64,
    /// US gallon
    pub liters_per_gallon: f64,
    pub meters_per_kilometer: f64,
    pub meters_per_mile: f64,
    /// 기계식 마력
    pub watts_per_horsepower: f64,
    /// 냉동톤 (12000 BTU/h)
    pub watts_per_ton_of_refrigeration: f64,
}

const METERS_PER_INCH: f64 = 0.0254;
const INCHES_PER_FOOT: f64 = 12.0;
const METERS_PER_FOOT: f64 = METERS_PER_INCH * INCHES_PER_FOOT;

impl PhysicalConstants {
    /// 표준값.
    pub const STANDARD: Self = Self {
        gravity_acceleration: 9.80665,
        inches_per_foot: INCHES_PER_FOOT,
        kilograms_per_pound: 0.45359237,
        meters_per_inch: METERS_PER_INCH,
        meters_per_foot: METERS_PER_FOOT,
        millimeters_per_inch: METERS_PER_INCH * 1000.0,
        seconds_per_hour: 3600.0,
        seconds_per_minute: 60.0,
        minutes_per_hour: 60.0,
        square_meters_per_square_inch: METERS_PER_INCH * METERS_PER_INCH,
        btu_per_watt_hour: 3.412,
        cubic_meters_per_cubic_foot: METERS_PER_FOOT * METERS_PER_FOOT * METERS_PER_FOOT,
        liters_per_cubic_meter: 1000.0,
        liters_per_gallon: 3.78541,
        meters_per_kilometer: 1000.0,
        meters_per_mile: 1609.344,
        watts_per_horsepower: 745.7,
        watts_per_ton_of_refrigeration: 3516.85,
    };
}

impl Default for PhysicalConstants {
    fn default() -> Self {
        Self::STANDARD
    }
}

/// 모든 변환 함수가 참조하는 공용 상수.
pub static CONSTANTS: PhysicalConstants = PhysicalConstants::STANDARD;
