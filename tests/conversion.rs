//! 단위 변환 엔진 회귀 테스트. 기준값은 국제 정의값을 사용한다.
use universal_unit_converter::conversion::{convert, resolve_unit, ConversionError};
use universal_unit_converter::quantity::QuantityKind;
use universal_unit_converter::registry::Registry;

fn assert_close(label: &str, actual: f64, expected: f64, rel_tol: f64) {
    let denom = expected.abs().max(1.0);
    let diff = (actual - expected).abs();
    assert!(
        diff <= rel_tol * denom,
        "{label} expected {expected:.12} got {actual:.12} (diff {diff:e}, tol {rel_tol})"
    );
}

#[test]
fn identity_is_exact_for_every_builtin_symbol() {
    let registry = Registry::builtin();
    for category in registry.categories() {
        for unit in registry.units(category).unwrap() {
            for x in [0.0, 1.0, -3.75, 0.1, 42.195, 1.0e-12, 6.02e23] {
                let got = convert(x, &unit.symbol, &unit.symbol).unwrap();
                assert_eq!(got, x, "{} identity", unit.symbol);
            }
        }
    }
}

#[test]
fn alias_and_canonical_symbol_convert_as_identity() {
    assert_eq!(convert(2.5, "m³", "m^3").unwrap(), 2.5);
    assert_eq!(convert(20.0, "°C", "degC").unwrap(), 20.0);
    assert_eq!(convert(7.0, " km ", "km").unwrap(), 7.0);
}

#[test]
fn length_to_mass_is_rejected() {
    let err = convert(1.0, "m", "kg").unwrap_err();
    assert_eq!(
        err,
        ConversionError::IncompatibleUnits {
            from: "m".into(),
            to: "kg".into(),
            from_kind: QuantityKind::Length,
            to_kind: QuantityKind::Mass,
        }
    );
}

#[test]
fn temperature_to_energy_is_rejected() {
    assert!(matches!(
        convert(10.0, "degC", "J"),
        Err(ConversionError::IncompatibleUnits { .. })
    ));
}

#[test]
fn unknown_tokens_are_reported() {
    assert_eq!(
        convert(1.0, "furlong", "m").unwrap_err(),
        ConversionError::UnknownUnit("furlong".into())
    );
    assert_eq!(
        convert(1.0, "m", "").unwrap_err(),
        ConversionError::UnknownUnit("".into())
    );
    // 기호는 대소문자를 구분한다
    assert!(matches!(
        convert(1.0, "mw", "W"),
        Err(ConversionError::UnknownUnit(_))
    ));
}

#[test]
fn temperature_uses_affine_rules() {
    assert_close("0C->F", convert(0.0, "degC", "degF").unwrap(), 32.0, 1e-12);
    assert_close("100C->F", convert(100.0, "degC", "degF").unwrap(), 212.0, 1e-12);
    assert_close("0K->C", convert(0.0, "K", "degC").unwrap(), -273.15, 1e-12);
    assert_close("-40F->C", convert(-40.0, "degF", "degC").unwrap(), -40.0, 1e-12);
    assert_close("100K->R", convert(100.0, "K", "degR").unwrap(), 180.0, 1e-12);
    assert_close("0F->K", convert(0.0, "degF", "K").unwrap(), 255.372_222_222_2, 1e-9);
    assert_close("491.67R->C", convert(491.67, "degR", "degC").unwrap(), 0.0, 1e-9);
}

#[test]
fn celsius_fahrenheit_direct_path_handles_negatives() {
    assert_eq!(convert(-40.0, "degC", "degF").unwrap(), -40.0);
    assert_eq!(convert(-40.0, "degF", "degC").unwrap(), -40.0);
    assert_close("-273.15C->F", convert(-273.15, "degC", "degF").unwrap(), -459.67, 1e-12);
    assert_close("-10F->C", convert(-10.0, "°F", "℃").unwrap(), -23.333_333_333_333, 1e-12);
    assert_close("-17.5C->F", convert(-17.5, "degC", "degF").unwrap(), 0.5, 1e-12);
}

#[test]
fn ratio_units_match_reference_values() {
    let cases = [
        ("mi->km", 1.0, "mi", "km", 1.609_344),
        ("nmi->m", 1.0, "nmi", "m", 1852.0),
        ("ly->km", 1.0, "ly", "km", 9.460_730_472_580_8e12),
        ("ft->in", 1.0, "ft", "in", 12.0),
        ("lb->g", 1.0, "lb", "g", 453.592_37),
        ("lb->oz", 1.0, "lb", "oz", 16.0),
        ("ct->mg", 1.0, "ct", "mg", 200.0),
        ("t->kg", 1.0, "t", "kg", 1000.0),
        ("gal->L", 1.0, "gal", "L", 3.785_411_784),
        ("gal->fl_oz", 1.0, "gal", "fl_oz", 128.0),
        ("qt->cup", 1.0, "qt", "cup", 4.0),
        ("ft3->in3", 1.0, "ft^3", "in^3", 1728.0),
        ("m3->L", 1.0, "m^3", "L", 1000.0),
        ("ha->m2", 1.0, "ha", "m^2", 10_000.0),
        ("ac->ft2", 1.0, "ac", "ft^2", 43_560.0),
        ("km2->ha", 1.0, "km^2", "ha", 100.0),
        ("yd2->ft2", 1.0, "yd^2", "ft^2", 9.0),
        ("knot->km/h", 1.0, "knot", "km/h", 1.852),
        ("mph->ft/s", 60.0, "mph", "ft/s", 88.0),
        ("m/s->km/h", 10.0, "m/s", "km/h", 36.0),
        ("kcal->cal", 1.0, "kcal", "cal", 1000.0),
        ("Wh->kJ", 1.0, "W*h", "kJ", 3.6),
        ("eV->J", 1.0, "eV", "J", 1.602_176_634e-19),
        ("hp->W", 1.0, "hp", "W", 745.699_871_582_270_2),
        ("MW->kW", 1.0, "MW", "kW", 1000.0),
        ("BTU/h->W", 3600.0, "BTU/h", "W", 1055.056),
    ];
    for (label, value, from, to, expected) in cases {
        let got = convert(value, from, to).unwrap();
        let rel = ((got - expected) / expected).abs();
        assert!(rel < 1e-12, "{label} expected {expected:e} got {got:e}");
    }
}

#[test]
fn negative_values_are_converted() {
    assert_close("-5 km", convert(-5.0, "km", "m").unwrap(), -5000.0, 1e-12);
}

#[test]
fn resolve_normalizes_aliases() {
    assert_eq!(resolve_unit("℃").unwrap().symbol(), "degC");
    assert_eq!(resolve_unit("Wh").unwrap().symbol(), "W*h");
    assert_eq!(resolve_unit("ft²").unwrap().symbol(), "ft^2");
    assert_eq!(resolve_unit("kph").unwrap().kind(), QuantityKind::Velocity);
}
