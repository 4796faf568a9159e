//! 표시 단위 설정(TOML) 테스트.
use metric_units::config::{load_or_default, Config, ConfigError, DisplayUnits};
use metric_units::units::{PressureUnit, TemperatureUnit, VelocityUnit};
use metric_units::QuantityKind;

fn temp_path(name: &str) -> std::path::PathBuf {
    std::env::temp_dir().join(format!("metric_units_{}_{name}.toml", std::process::id()))
}

#[test]
fn defaults_are_base_units() {
    let units = DisplayUnits::default();
    for kind in QuantityKind::ALL {
        assert_eq!(units.label(kind), kind.base_unit_label());
    }
}

#[test]
fn toml_round_trip() {
    let mut cfg = Config::default();
    cfg.display_units.pressure = PressureUnit::InH2O;
    cfg.display_units.temperature = TemperatureUnit::Fahrenheit;
    let text = cfg.to_toml_string().unwrap();
    assert!(text.contains("InH2O"), "{text}");
    assert_eq!(Config::from_toml_str(&text).unwrap(), cfg);
}

#[test]
fn missing_fields_fall_back_to_defaults() {
    let cfg = Config::from_toml_str(
        r#"
        [display_units]
        velocity = "FeetPerMinute"
        "#,
    )
    .unwrap();
    assert_eq!(cfg.display_units.velocity, VelocityUnit::FeetPerMinute);
    assert_eq!(cfg.display_units.pressure, PressureUnit::Pascal);

    assert_eq!(Config::from_toml_str("").unwrap(), Config::default());
}

#[test]
fn unknown_unit_name_is_a_parse_error() {
    let err = Config::from_toml_str("[display_units]\npressure = \"Furlong\"\n").unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn display_converts_from_base() {
    let mut units = DisplayUnits::default();
    units.temperature = TemperatureUnit::Fahrenheit;
    assert_eq!(units.display(QuantityKind::Temperature, 100.0).unwrap(), 212.0);
    assert_eq!(units.label(QuantityKind::Temperature), "°F");
    assert!(units.display(QuantityKind::Pressure, -1.0).is_err());
}

#[test]
fn save_then_load() {
    let path = temp_path("save_then_load");
    let mut cfg = Config::default();
    cfg.display_units.pressure = PressureUnit::Bar;
    cfg.save(&path).unwrap();
    let loaded = Config::load(&path).unwrap();
    std::fs::remove_file(&path).unwrap();
    assert_eq!(loaded, cfg);
}

#[test]
fn load_or_default_without_file() {
    let path = temp_path("does_not_exist");
    let cfg = load_or_default(&path).unwrap();
    assert_eq!(cfg, Config::default());
    assert!(!path.exists());
}
