//! 카테고리 비교(compare) 테스트.
use universal_unit_converter::conversion::{compare, convert};
use universal_unit_converter::registry::{Registry, RegistryError, UnitCategory, UnitEntry};

fn single_category(id: &str, units: &[(&str, &str)]) -> Registry {
    Registry::new(
        vec![UnitCategory {
            id: id.to_string(),
            units: units
                .iter()
                .map(|(name, symbol)| UnitEntry::new(*name, *symbol))
                .collect(),
        }],
        Vec::new(),
    )
}

#[test]
fn meter_comparison_covers_every_other_length_unit() {
    let registry = Registry::builtin();
    let set = compare(registry, 1.0, "m", "Length").unwrap();

    let expected: Vec<&str> = registry
        .units("Length")
        .unwrap()
        .iter()
        .filter(|u| u.symbol != "m")
        .map(|u| u.name.as_str())
        .collect();
    let names: Vec<&str> = set.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, expected);
    assert_eq!(set.len(), 9);

    for entry in &set {
        assert_eq!(entry.value, convert(1.0, "m", &entry.symbol).unwrap());
    }
    assert_eq!(set.get("millimeters"), Some(1000.0));
    assert_eq!(set.get("meters"), None);
}

#[test]
fn temperature_comparison_applies_offsets() {
    let set = compare(Registry::builtin(), 100.0, "degC", "Temperature").unwrap();
    let names: Vec<&str> = set.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, ["fahrenheit", "kelvin", "rankine"]);
    assert!((set.get("fahrenheit").unwrap() - 212.0).abs() < 1e-9);
    assert!((set.get("kelvin").unwrap() - 373.15).abs() < 1e-9);
}

#[test]
fn malformed_and_incompatible_symbols_are_omitted() {
    let registry = single_category(
        "Length",
        &[
            ("meters", "m"),
            ("broken", "m??"),
            ("feet", "ft"),
            ("kilograms", "kg"),
            ("inches", "in"),
        ],
    );
    let set = compare(&registry, 2.0, "m", "Length").unwrap();
    let names: Vec<&str> = set.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, ["feet", "inches"]);
    assert_eq!(set.get("feet"), Some(convert(2.0, "m", "ft").unwrap()));
}

#[test]
fn single_unit_category_yields_empty_set() {
    let registry = single_category("Lonely", &[("meters", "m")]);
    let set = compare(&registry, 5.0, "m", "Lonely").unwrap();
    assert!(set.is_empty());
}

#[test]
fn unknown_source_unit_yields_empty_set() {
    let set = compare(Registry::builtin(), 1.0, "parsec", "Length").unwrap();
    assert!(set.is_empty());
}

#[test]
fn unknown_category_is_an_error() {
    let err = compare(Registry::builtin(), 1.0, "m", "Luminosity").unwrap_err();
    assert!(matches!(err, RegistryError::UnknownCategory(ref c) if c == "Luminosity"));
}

#[test]
fn source_alias_is_compared_against_canonical_entry() {
    // 표의 기호와 문자열이 다르면 같은 단위라도 항목에 남는다
    let set = compare(Registry::builtin(), 3.0, "m³", "Volume").unwrap();
    assert_eq!(set.len(), 10);
    assert_eq!(set.get("cubic meters"), Some(3.0));
}
