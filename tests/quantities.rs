//! 비엔탈피, 유량, 높이, 동력, 속도, 비습도 변환 테스트.
use approx::assert_relative_eq;
use metric_units::units::*;
use metric_units::{ErrorKind, CONSTANTS};

#[test]
fn enthalpy_btu_per_pound() {
    let c = &CONSTANTS;
    let btu = enthalpy_to_unit(EnthalpyUnit::BritishThermalUnitPerPound, 100.0).unwrap();
    let expected = 100.0 / c.btu_per_watt_hour / c.kilograms_per_pound * c.seconds_per_hour;
    assert_relative_eq!(btu, expected, max_relative = 1e-12);
    assert_eq!(enthalpy_to_unit(EnthalpyUnit::KiloJoulesPerKilogram, 100.0).unwrap(), 100.0);
    assert_eq!(enthalpy_unit_label(1).unwrap(), "Btu/lb");
}

#[test]
fn flow_rate_scenarios() {
    assert_eq!(flow_rate_to_unit(FlowRateUnit::CubicMetersPerHour, 1.0).unwrap(), 3600.0);
    assert_eq!(flow_rate_to_unit(FlowRateUnit::LitersPerSecond, 1.0).unwrap(), 1000.0);
    assert_eq!(flow_rate_to_unit(FlowRateUnit::LitersPerMinute, 1.0).unwrap(), 60_000.0);
    assert_relative_eq!(
        flow_rate_to_unit(FlowRateUnit::CubicFeetPerMinute, 1.0).unwrap(),
        2118.88,
        max_relative = 1e-5
    );
    assert_relative_eq!(
        flow_rate_to_unit(FlowRateUnit::GallonsPerMinute, 1.0).unwrap(),
        60_000.0 / 3.78541,
        max_relative = 1e-12
    );
    assert_relative_eq!(
        flow_rate_from_unit(FlowRateUnit::LitersPerSecond, 1000.0).unwrap(),
        1.0,
        max_relative = 1e-12
    );
}

#[test]
fn height_in_feet() {
    assert_relative_eq!(
        height_to_unit(HeightUnit::Feet, CONSTANTS.meters_per_foot).unwrap(),
        1.0,
        max_relative = 1e-12
    );
    assert_relative_eq!(
        height_to_unit(HeightUnit::Feet, 1.0).unwrap(),
        3.28084,
        max_relative = 1e-5
    );
    assert_relative_eq!(
        height_from_unit(HeightUnit::Feet, 1.0).unwrap(),
        0.3048,
        max_relative = 1e-12
    );
    // 높이는 음수(기준면 아래)도 허용한다.
    assert!(height_to_unit(HeightUnit::Feet, -10.0).is_ok());
}

#[test]
fn power_scenarios() {
    assert_eq!(power_to_unit(PowerUnit::Kilowatt, 1000.0).unwrap(), 1.0);
    assert_eq!(power_from_unit(PowerUnit::Kilowatt, 1.0).unwrap(), 1000.0);
    assert_relative_eq!(
        power_to_unit(PowerUnit::BtuPerHour, 1000.0).unwrap(),
        3412.0,
        max_relative = 1e-12
    );
    assert_relative_eq!(
        power_from_unit(PowerUnit::Horsepower, 1.0).unwrap(),
        745.7,
        max_relative = 1e-12
    );
    assert_relative_eq!(
        power_from_unit(PowerUnit::TonOfRefrigeration, 1.0).unwrap(),
        3516.85,
        max_relative = 1e-12
    );
    assert_eq!(PowerUnit::TonOfRefrigeration.label(), "TR");
}

#[test]
fn velocity_scenarios() {
    assert_relative_eq!(
        velocity_to_unit(VelocityUnit::KilometersPerHour, 1.0).unwrap(),
        3.6,
        max_relative = 1e-12
    );
    assert_relative_eq!(
        velocity_to_unit(VelocityUnit::FeetPerMinute, 1.0).unwrap(),
        196.85,
        max_relative = 1e-4
    );
    assert_relative_eq!(
        velocity_to_unit(VelocityUnit::MilesPerHour, 1609.344).unwrap(),
        3600.0,
        max_relative = 1e-12
    );
    assert_relative_eq!(
        velocity_from_unit(VelocityUnit::FeetPerSecond, 1.0).unwrap(),
        0.3048,
        max_relative = 1e-12
    );
}

#[test]
fn specific_humidity_mass_ratios_match() {
    let kg = specific_humidity_to_unit(SpecificHumidityUnit::KilogramsPerKilogram, 10.0).unwrap();
    let lb = specific_humidity_to_unit(SpecificHumidityUnit::PoundsPerPound, 10.0).unwrap();
    assert_eq!(kg, lb);
    assert_relative_eq!(kg, 0.01, max_relative = 1e-12);
    assert_relative_eq!(
        specific_humidity_from_unit(SpecificHumidityUnit::KilogramsPerKilogram, 0.0125).unwrap(),
        12.5,
        max_relative = 1e-12
    );
}

#[test]
fn negative_specific_humidity_is_rejected() {
    for unit in SpecificHumidityUnit::ALL {
        let err = specific_humidity_to_unit(unit, -1.0).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Domain);
        assert!(err.to_string().contains("Specific humidity cannot be negative"));
        assert!(specific_humidity_from_unit(unit, -0.001).is_err());
    }
}

fn round_trips<U: Copy + std::fmt::Debug>(
    all: &[U],
    values: &[f64],
    to: fn(U, f64) -> metric_units::error::Result<f64>,
    from: fn(U, f64) -> metric_units::error::Result<f64>,
) {
    for &unit in all {
        for &v in values {
            let back = from(unit, to(unit, v).unwrap()).unwrap();
            assert_relative_eq!(back, v, max_relative = 1e-10);
        }
    }
}

#[test]
fn every_unit_round_trips() {
    let signed = [-12.5, 0.0, 1.0, 42.0, 1.0e6];
    let non_negative = [0.0, 0.5, 7.25, 30.0];
    round_trips(&EnthalpyUnit::ALL, &signed, enthalpy_to_unit, enthalpy_from_unit);
    round_trips(&FlowRateUnit::ALL, &signed, flow_rate_to_unit, flow_rate_from_unit);
    round_trips(&HeightUnit::ALL, &signed, height_to_unit, height_from_unit);
    round_trips(&PowerUnit::ALL, &signed, power_to_unit, power_from_unit);
    round_trips(&VelocityUnit::ALL, &signed, velocity_to_unit, velocity_from_unit);
    round_trips(
        &SpecificHumidityUnit::ALL,
        &non_negative,
        specific_humidity_to_unit,
        specific_humidity_from_unit,
    );
}

#[test]
fn base_unit_round_trip_is_exact() {
    let v = 123.456_789;
    assert_eq!(enthalpy_from_unit(EnthalpyUnit::BASE, enthalpy_to_unit(EnthalpyUnit::BASE, v).unwrap()).unwrap(), v);
    assert_eq!(flow_rate_from_unit(FlowRateUnit::BASE, flow_rate_to_unit(FlowRateUnit::BASE, v).unwrap()).unwrap(), v);
    assert_eq!(height_from_unit(HeightUnit::BASE, height_to_unit(HeightUnit::BASE, v).unwrap()).unwrap(), v);
    assert_eq!(power_from_unit(PowerUnit::BASE, power_to_unit(PowerUnit::BASE, v).unwrap()).unwrap(), v);
    assert_eq!(velocity_from_unit(VelocityUnit::BASE, velocity_to_unit(VelocityUnit::BASE, v).unwrap()).unwrap(), v);
    assert_eq!(
        specific_humidity_from_unit(
            SpecificHumidityUnit::BASE,
            specific_humidity_to_unit(SpecificHumidityUnit::BASE, v).unwrap()
        )
        .unwrap(),
        v
    );
}

#[test]
fn non_finite_input_is_a_type_error_everywhere() {
    for v in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
        assert!(enthalpy_to_unit(EnthalpyUnit::BASE, v).unwrap_err().is_type_error());
        assert!(enthalpy_from_unit(EnthalpyUnit::BASE, v).unwrap_err().is_type_error());
        assert!(flow_rate_to_unit(FlowRateUnit::BASE, v).unwrap_err().is_type_error());
        assert!(flow_rate_from_unit(FlowRateUnit::BASE, v).unwrap_err().is_type_error());
        assert!(height_to_unit(HeightUnit::BASE, v).unwrap_err().is_type_error());
        assert!(height_from_unit(HeightUnit::BASE, v).unwrap_err().is_type_error());
        assert!(power_to_unit(PowerUnit::BASE, v).unwrap_err().is_type_error());
        assert!(power_from_unit(PowerUnit::BASE, v).unwrap_err().is_type_error());
        assert!(velocity_to_unit(VelocityUnit::BASE, v).unwrap_err().is_type_error());
        assert!(velocity_from_unit(VelocityUnit::BASE, v).unwrap_err().is_type_error());
        assert!(specific_humidity_to_unit(SpecificHumidityUnit::BASE, v)
            .unwrap_err()
            .is_type_error());
        assert!(specific_humidity_from_unit(SpecificHumidityUnit::BASE, v)
            .unwrap_err()
            .is_type_error());
    }
}

#[test]
fn unknown_ordinals_name_the_quantity() {
    let msg = |e: metric_units::UnitError| e.to_string();
    assert_eq!(msg(EnthalpyUnit::try_from(999_usize).unwrap_err()), "Unknown enthalpy unit 999");
    assert_eq!(msg(FlowRateUnit::try_from(6_usize).unwrap_err()), "Unknown flow rate unit 6");
    assert_eq!(msg(HeightUnit::try_from(2_usize).unwrap_err()), "Unknown height unit 2");
    assert_eq!(msg(PowerUnit::try_from(999_usize).unwrap_err()), "Unknown power unit 999");
    assert_eq!(msg(VelocityUnit::try_from(5_usize).unwrap_err()), "Unknown velocity unit 5");
    assert_eq!(
        msg(SpecificHumidityUnit::try_from(3_usize).unwrap_err()),
        "Unknown specific humidity unit 3"
    );
    assert_eq!(
        msg(flow_rate_unit_label(999).unwrap_err()),
        "999 of type FlowRateUnit has no label"
    );
}

#[test]
fn labels_follow_ordinal_order() {
    assert_eq!(flow_rate_unit_label(0).unwrap(), "m³/s");
    assert_eq!(flow_rate_unit_label(2).unwrap(), "CFM");
    assert_eq!(height_unit_label(1).unwrap(), "ft");
    assert_eq!(power_unit_label(2).unwrap(), "BTU/h");
    assert_eq!(velocity_unit_label(4).unwrap(), "mph");
    assert_eq!(specific_humidity_unit_label(2).unwrap(), "lb/lb");
    assert_eq!(VelocityUnit::FeetPerMinute.to_string(), "ft/min");
}
