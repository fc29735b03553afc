//! 프리셋 문자열 해석 테스트.
use universal_unit_converter::preset::{parse_preset, PresetParseError};

#[test]
fn parses_value_and_unit_token() {
    assert_eq!(parse_preset("42.195 km").unwrap(), (42.195, "km".to_string()));
    assert_eq!(parse_preset("20 °C").unwrap(), (20.0, "°C".to_string()));
    assert_eq!(parse_preset("2500000 L").unwrap(), (2_500_000.0, "L".to_string()));
}

#[test]
fn whitespace_between_value_and_unit_is_optional() {
    assert_eq!(parse_preset("500mL").unwrap(), (500.0, "mL".to_string()));
    assert_eq!(parse_preset("  0   K  ").unwrap(), (0.0, "K".to_string()));
}

#[test]
fn decimal_point_may_lead_or_trail() {
    assert_eq!(parse_preset(".5 gal").unwrap(), (0.5, "gal".to_string()));
    assert_eq!(parse_preset("3. ft").unwrap(), (3.0, "ft".to_string()));
}

#[test]
fn unit_token_is_not_checked_against_known_units() {
    assert_eq!(parse_preset("7 furlong").unwrap(), (7.0, "furlong".to_string()));
}

#[test]
fn malformed_literals_are_rejected() {
    for literal in ["bad", "", "   ", "42", "km 42", "1.2.3 m", "-5 m", "5 m extra", "."] {
        let err = parse_preset(literal).unwrap_err();
        assert_eq!(
            err,
            PresetParseError {
                literal: literal.to_string()
            },
            "{literal:?}"
        );
    }
}
