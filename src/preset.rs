use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

/// `<숫자><공백(선택)><단위 토큰>` 형태. 예: `42.195 km`, `20 °C`, `500mL`.
static PRESET_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s*(\d+(?:\.\d*)?|\.\d+)\s*([^\s\d.]\S*)\s*$").expect("preset pattern is valid")
});

/// 프리셋 문자열이 형식에 맞지 않을 때의 오류.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("프리셋 형식 오류: {literal:?} (예: \"42.195 km\")")]
pub struct PresetParseError {
    pub literal: String,
}

/// 프리셋 문자열을 (값, 단위 토큰)으로 분리한다.
///
/// 단위 토큰이 실제로 알려진 단위인지는 확인하지 않는다. 그 검사는 변환 시점에 한다.
pub fn parse_preset(literal: &str) -> Result<(f64, String), PresetParseError> {
    let err = || PresetParseError {
        literal: literal.to_string(),
    };
    let caps = PRESET_PATTERN.captures(literal).ok_or_else(err)?;
    let value: f64 = caps[1].parse().map_err(|_| err())?;
    Ok((value, caps[2].to_string()))
}
