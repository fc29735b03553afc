//! 대화형 세션의 변환/기록/프리셋 흐름 테스트.
use std::fs;

use universal_unit_converter::app::{start_session, AppError, PresetUnit, Session};
use universal_unit_converter::config::{Config, ConfigFile};
use universal_unit_converter::conversion::ConversionError;
use universal_unit_converter::i18n::{Language, Translator};
use universal_unit_converter::registry::{
    PresetEntry, Registry, RegistryError, UnitCategory, UnitEntry,
};

fn session_with(registry: Registry) -> (tempfile::TempDir, Session) {
    let dir = tempfile::tempdir().unwrap();
    let config = ConfigFile {
        path: dir.path().join("config.toml"),
        config: Config::default(),
    };
    (dir, Session::new(config, Translator::new("en"), registry))
}

fn builtin_session() -> (tempfile::TempDir, Session) {
    session_with(Registry::builtin().clone())
}

#[test]
fn conversion_is_recorded_with_comparison() {
    let (_dir, mut session) = builtin_session();
    let outcome = session
        .convert_and_record("Length", 1.0, "meters", "feet")
        .unwrap();
    assert!((outcome.result - 3.280_839_895_013_123).abs() < 1e-12);
    assert_eq!(outcome.comparison.len(), 9);

    let recent = session.history.recent(5);
    assert_eq!(recent.len(), 1);
    assert_eq!(recent[0].from_unit, "meters");
    assert_eq!(recent[0].to_unit, "feet");
    assert_eq!(recent[0].to_value, outcome.result);
}

#[test]
fn unknown_display_name_is_rejected() {
    let (_dir, mut session) = builtin_session();
    let err = session
        .convert_and_record("Length", 1.0, "meters", "cubits")
        .unwrap_err();
    assert!(matches!(
        err,
        AppError::UnknownUnitName { ref category, ref name } if category == "Length" && name == "cubits"
    ));
    assert!(session.history.is_empty());
}

#[test]
fn failed_conversion_leaves_history_untouched() {
    let registry = Registry::new(
        vec![UnitCategory {
            id: "Mixed".into(),
            units: vec![UnitEntry::new("meters", "m"), UnitEntry::new("kilograms", "kg")],
        }],
        Vec::new(),
    );
    let (_dir, mut session) = session_with(registry);
    let err = session
        .convert_and_record("Mixed", 1.0, "meters", "kilograms")
        .unwrap_err();
    assert!(matches!(
        err,
        AppError::Conversion(ConversionError::IncompatibleUnits { .. })
    ));
    assert!(session.history.is_empty());
}

#[test]
fn recent_history_keeps_newest_entries_in_order() {
    let (_dir, mut session) = builtin_session();
    for i in 1..=7 {
        session
            .convert_and_record("Weight", i as f64, "kilograms", "grams")
            .unwrap();
    }
    assert_eq!(session.history.len(), 7);
    let values: Vec<f64> = session
        .history
        .recent(5)
        .iter()
        .map(|e| e.from_value)
        .collect();
    assert_eq!(values, [3.0, 4.0, 5.0, 6.0, 7.0]);
    assert_eq!(session.history.recent(20).len(), 7);

    session.history.clear();
    assert!(session.history.recent(5).is_empty());
}

#[test]
fn preset_selects_category_and_unit() {
    let (_dir, session) = builtin_session();
    let preset = &session.registry.presets("Common Temperatures").unwrap()[0];
    assert_eq!(preset.label, "Room Temperature");

    let (value, unit) = session.select_preset(preset).unwrap();
    assert_eq!(value, 20.0);
    assert_eq!(
        unit,
        PresetUnit {
            category: "Temperature".into(),
            name: "celsius".into(),
            symbol: "degC".into(),
        }
    );
}

#[test]
fn preset_with_unlisted_unit_fails() {
    let (_dir, session) = builtin_session();
    let err = session
        .select_preset(&PresetEntry::new("Odd", "3 furlong"))
        .unwrap_err();
    assert!(matches!(err, AppError::Conversion(ConversionError::UnknownUnit(_))));

    let err = session
        .select_preset(&PresetEntry::new("Broken", "many meters"))
        .unwrap_err();
    assert!(matches!(err, AppError::Preset(_)));
}

#[test]
fn language_switch_rebuilds_translator() {
    let (_dir, mut session) = builtin_session();
    assert_eq!(session.translator.language(), Language::En);
    session.set_language("ko");
    assert_eq!(session.translator.language(), Language::Ko);
    assert_eq!(session.config.config.language, "ko");
}

#[test]
fn startup_uses_configured_language() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "language = \"ko\"\n").unwrap();

    let session = start_session(None, path.to_str().unwrap()).unwrap();
    assert_eq!(session.translator.language(), Language::Ko);
    assert_eq!(session.registry.categories().len(), 8);

    let session = start_session(Some("en"), path.to_str().unwrap()).unwrap();
    assert_eq!(session.translator.language(), Language::En);
}

#[test]
fn startup_failure_reports_in_session_language() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    let missing = dir.path().join("missing-registry.toml");
    fs::write(
        &path,
        format!("language = \"en\"\nregistry_path = {:?}\n", missing.to_str().unwrap()),
    )
    .unwrap();

    let failure = start_session(Some("ko"), path.to_str().unwrap()).unwrap_err();
    assert_eq!(failure.translator.language(), Language::Ko);
    assert!(matches!(failure.error, AppError::Registry(RegistryError::Io(_))));
}

#[test]
fn unreadable_config_still_honors_language_flag() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "history_display_limit = \"many\"\n").unwrap();

    let failure = start_session(Some("ko"), path.to_str().unwrap()).unwrap_err();
    assert_eq!(failure.translator.language(), Language::Ko);
    assert!(matches!(failure.error, AppError::Config(_)));
}
