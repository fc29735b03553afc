//! 단위/프리셋 표 조회 테스트.
use std::collections::HashSet;
use std::io::Write;

use universal_unit_converter::registry::{
    PresetCategory, PresetEntry, Registry, RegistryError, UnitCategory, UnitEntry,
};
use universal_unit_converter::units::Unit;

#[test]
fn builtin_categories_are_ordered() {
    assert_eq!(
        Registry::builtin().categories(),
        ["Length", "Weight", "Temperature", "Volume", "Area", "Speed", "Energy", "Power"]
    );
}

#[test]
fn enumeration_is_stable_across_calls() {
    let registry = Registry::builtin();
    assert_eq!(registry.categories(), registry.categories());
    for category in registry.categories() {
        assert_eq!(registry.units(category).unwrap(), registry.units(category).unwrap());
    }
}

#[test]
fn length_units_keep_declaration_order() {
    let units = Registry::builtin().units("Length").unwrap();
    let symbols: Vec<&str> = units.iter().map(|u| u.symbol.as_str()).collect();
    assert_eq!(
        symbols,
        ["m", "km", "cm", "mm", "in", "ft", "yd", "mi", "nmi", "ly"]
    );
    assert_eq!(units[0].name, "meters");
}

#[test]
fn every_builtin_symbol_resolves_within_one_dimension() {
    let registry = Registry::builtin();
    for category in registry.categories() {
        let units = registry.units(category).unwrap();
        let kinds: HashSet<_> = units
            .iter()
            .map(|u| {
                Unit::parse(&u.symbol)
                    .unwrap_or_else(|| panic!("{category}: {} does not resolve", u.symbol))
                    .kind()
            })
            .collect();
        assert_eq!(kinds.len(), 1, "{category} mixes dimensions");

        let names: HashSet<_> = units.iter().map(|u| u.name.as_str()).collect();
        assert_eq!(names.len(), units.len(), "{category} has duplicate names");
    }
}

#[test]
fn unknown_category_fails() {
    let err = Registry::builtin().units("length").unwrap_err();
    assert!(matches!(err, RegistryError::UnknownCategory(ref c) if c == "length"));
}

#[test]
fn presets_are_listed_by_category() {
    let registry = Registry::builtin();
    assert_eq!(
        registry.preset_categories(),
        ["Common Lengths", "Common Temperatures", "Common Volumes"]
    );
    let lengths = registry.presets("Common Lengths").unwrap();
    assert_eq!(lengths[2], PresetEntry::new("Marathon", "42.195 km"));
    assert!(matches!(
        registry.presets("Common Speeds"),
        Err(RegistryError::UnknownPresetCategory(_))
    ));
}

#[test]
fn builtin_registry_validates() {
    Registry::builtin().validate().expect("builtin presets are valid");
}

#[test]
fn every_builtin_preset_routes_to_its_category() {
    let registry = Registry::builtin();
    let expected = [
        ("Common Lengths", "Length"),
        ("Common Temperatures", "Temperature"),
        ("Common Volumes", "Volume"),
    ];
    for (preset_category, unit_category) in expected {
        for preset in registry.presets(preset_category).unwrap() {
            let (_, unit) = preset.parse().unwrap();
            let category = registry
                .category_for_symbol(&unit)
                .unwrap_or_else(|| panic!("{} has no category", preset.label));
            assert_eq!(category.id, unit_category, "{}", preset.label);
        }
    }
}

#[test]
fn validate_rejects_malformed_preset() {
    let registry_src = r#"
[[categories]]
id = "Length"
units = [{ name = "meters", symbol = "m" }]

[[presets]]
id = "Broken"
presets = [{ label = "Nothing", literal = "bad" }]
"#;
    let registry = Registry::from_toml_str(registry_src).unwrap();
    let err = registry.validate().unwrap_err();
    assert!(matches!(
        err,
        RegistryError::InvalidPreset { ref category, ref label, .. }
            if category == "Broken" && label == "Nothing"
    ));
}

#[test]
fn validate_rejects_duplicate_display_name() {
    let registry_src = r#"
[[categories]]
id = "Length"
units = [
  { name = "meters", symbol = "m" },
  { name = "meters", symbol = "ft" },
  { name = "inches", symbol = "in" },
]
"#;
    let registry = Registry::from_toml_str(registry_src).unwrap();
    assert!(matches!(
        registry.validate(),
        Err(RegistryError::DuplicateUnitName { ref category, ref name })
            if category == "Length" && name == "meters"
    ));
}

#[test]
fn validate_rejects_empty_category_list() {
    let registry = Registry::from_toml_str("categories = []").unwrap();
    assert!(matches!(registry.validate(), Err(RegistryError::NoCategories)));
}

#[test]
fn load_rejects_registry_with_data_defects() {
    let mut empty = tempfile::NamedTempFile::new().unwrap();
    write!(empty, "categories = []\n").unwrap();
    assert!(matches!(
        Registry::load(empty.path()),
        Err(RegistryError::NoCategories)
    ));

    let mut duplicated = tempfile::NamedTempFile::new().unwrap();
    write!(
        duplicated,
        r#"
[[categories]]
id = "Weight"
units = [{{ name = "grams", symbol = "g" }}, {{ name = "grams", symbol = "kg" }}]
"#
    )
    .unwrap();
    assert!(matches!(
        Registry::load(duplicated.path()),
        Err(RegistryError::DuplicateUnitName { .. })
    ));
}

#[test]
fn validate_rejects_unknown_preset_unit() {
    let registry = Registry::new(
        vec![UnitCategory {
            id: "Length".into(),
            units: vec![UnitEntry::new("meters", "m")],
        }],
        vec![PresetCategory {
            id: "Odd".into(),
            presets: vec![PresetEntry::new("Furlongs", "3 furlong")],
        }],
    );
    assert!(matches!(
        registry.validate(),
        Err(RegistryError::InvalidPreset { .. })
    ));
}

#[test]
fn registry_loads_from_toml_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"
[[categories]]
id = "Distance"
units = [
  {{ name = "meters", symbol = "m" }},
  {{ name = "feet", symbol = "ft" }},
]

[[presets]]
id = "Runs"
presets = [{{ label = "5K", literal = "5 km" }}]
"#
    )
    .unwrap();

    let registry = Registry::load(file.path()).unwrap();
    assert_eq!(registry.categories(), ["Distance"]);
    assert_eq!(registry.units("Distance").unwrap()[1].symbol, "ft");
    assert_eq!(registry.category_for_symbol("km"), None);
    assert_eq!(registry.category_for_symbol("ft").unwrap().id, "Distance");
}

#[test]
fn load_reports_missing_file_and_bad_toml() {
    assert!(matches!(
        Registry::load("/nonexistent/registry.toml"),
        Err(RegistryError::Io(_))
    ));
    assert!(matches!(
        Registry::from_toml_str("categories = 3"),
        Err(RegistryError::Parse(_))
    ));
}
