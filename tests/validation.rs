//! 입력 검증 가드 테스트.
use metric_units::units::TemperatureUnit;
use metric_units::validation::*;
use metric_units::{ErrorKind, UnitError};

#[test]
fn finite_numbers_pass() {
    for v in [0.0, -1.0, 1.0e300, f64::MIN_POSITIVE, -0.0] {
        assert!(validate_finite_number(v, "value").is_ok());
    }
}

#[test]
fn nan_and_infinity_are_type_errors() {
    let err = validate_finite_number(f64::NAN, "flow rate").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Type);
    assert_eq!(err.to_string(), "flow rate must be a finite number, received: NaN");

    let err = validate_finite_number(f64::NEG_INFINITY, "power").unwrap_err();
    assert!(matches!(err, UnitError::NotFinite { label: "power", .. }));
}

#[test]
fn absolute_zero_bounds_are_inclusive() {
    assert!(validate_temperature_celsius(ABSOLUTE_ZERO_CELSIUS).is_ok());
    assert!(validate_temperature_kelvin(ABSOLUTE_ZERO_KELVIN).is_ok());
    assert!(validate_temperature_fahrenheit(ABSOLUTE_ZERO_FAHRENHEIT).is_ok());

    assert!(validate_temperature_celsius(-273.16).is_err());
    assert!(validate_temperature_kelvin(-0.001).is_err());
    assert!(validate_temperature_fahrenheit(-459.68).is_err());
}

#[test]
fn absolute_zero_message_names_the_scale() {
    let err = validate_temperature_kelvin(-1.0).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Domain);
    assert_eq!(
        err.to_string(),
        "Temperature cannot be below absolute zero (0K), received: -1K"
    );
    let err = validate_temperature_celsius(-300.0).unwrap_err();
    assert!(err.to_string().contains("(-273.15°C)"));
}

#[test]
fn finite_check_runs_before_domain_check() {
    let err = validate_temperature_celsius(f64::NEG_INFINITY).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Type);
    let err = validate_pressure(f64::NEG_INFINITY).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Type);
    let err = validate_specific_humidity(f64::NAN).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Type);
}

#[test]
fn temperature_dispatches_on_unit() {
    assert!(validate_temperature(TemperatureUnit::Fahrenheit, -300.0).is_ok());
    assert!(validate_temperature(TemperatureUnit::Celsius, -300.0).is_err());
    assert!(validate_temperature(TemperatureUnit::Kelvin, -300.0).is_err());
}

#[test]
fn pressure_and_humidity_reject_negatives() {
    assert!(validate_pressure(0.0).is_ok());
    assert_eq!(
        validate_pressure(-1.0).unwrap_err().to_string(),
        "Pressure cannot be negative, received: -1"
    );
    assert!(validate_specific_humidity(0.0).is_ok());
    assert_eq!(
        validate_specific_humidity(-2.5).unwrap_err().to_string(),
        "Specific humidity cannot be negative, received: -2.5"
    );
}
