use thiserror::Error;

use crate::quantity::QuantityKind;
use crate::registry::{Registry, RegistryError};
use crate::units::*;

/// 단위 변환 시 발생 가능한 오류.
///
/// 입력이 같으면 결과도 같으므로 어느 쪽도 재시도 대상이 아니다.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConversionError {
    /// 알 수 없는 단위 문자열
    #[error("알 수 없는 단위: {0}")]
    UnknownUnit(String),
    /// 차원이 다른 단위 사이의 변환
    #[error("호환되지 않는 단위: {from} ({from_kind}) → {to} ({to_kind})")]
    IncompatibleUnits {
        from: String,
        to: String,
        from_kind: QuantityKind,
        to_kind: QuantityKind,
    },
}

/// 단위 기호를 해석한다. 인식하지 못하면 `UnknownUnit`.
pub fn resolve_unit(symbol: &str) -> Result<Unit, ConversionError> {
    Unit::parse(symbol).ok_or_else(|| ConversionError::UnknownUnit(symbol.to_string()))
}

/// 문자열로 전달된 단위 기호를 해석한 뒤 지정된 단위로 환산한다.
///
/// 단위 기호 예시는 `m`, `degC`, `m^3`, `km/h`, `W*h`, `BTU/h` 등을 사용할 수 있다.
/// 같은 단위끼리의 변환은 입력값을 그대로 돌려준다.
pub fn convert(value: f64, from_unit: &str, to_unit: &str) -> Result<f64, ConversionError> {
    let from = resolve_unit(from_unit)?;
    let to = resolve_unit(to_unit)?;
    convert_resolved(value, from, to).ok_or_else(|| ConversionError::IncompatibleUnits {
        from: from_unit.to_string(),
        to: to_unit.to_string(),
        from_kind: from.kind(),
        to_kind: to.kind(),
    })
}

/// 이미 해석된 단위 사이의 변환. 차원이 다르면 None.
pub fn convert_resolved(value: f64, from: Unit, to: Unit) -> Option<f64> {
    if from == to {
        return Some(value);
    }
    match (from, to) {
        (Unit::Length(f), Unit::Length(t)) => Some(convert_length(value, f, t)),
        (Unit::Mass(f), Unit::Mass(t)) => Some(convert_mass(value, f, t)),
        (Unit::Temperature(f), Unit::Temperature(t)) => Some(convert_temperature(value, f, t)),
        (Unit::Volume(f), Unit::Volume(t)) => Some(convert_volume(value, f, t)),
        (Unit::Area(f), Unit::Area(t)) => Some(convert_area(value, f, t)),
        (Unit::Velocity(f), Unit::Velocity(t)) => Some(convert_velocity(value, f, t)),
        (Unit::Energy(f), Unit::Energy(t)) => Some(convert_energy(value, f, t)),
        (Unit::Power(f), Unit::Power(t)) => Some(convert_power(value, f, t)),
        _ => None,
    }
}

/// 비교 결과의 한 항목.
#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonEntry {
    /// 카테고리 표에 등록된 표시 이름
    pub name: String,
    pub symbol: String,
    pub value: f64,
}

/// 한 값을 카테고리 내 다른 모든 단위로 표현한 결과. 카테고리 선언 순서를 따른다.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ComparisonSet {
    entries: Vec<ComparisonEntry>,
}

impl ComparisonSet {
    pub fn entries(&self) -> &[ComparisonEntry] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ComparisonEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// 표시 이름으로 변환값을 찾는다.
    pub fn get(&self, name: &str) -> Option<f64> {
        self.entries.iter().find(|e| e.name == name).map(|e| e.value)
    }
}

impl<'a> IntoIterator for &'a ComparisonSet {
    type Item = &'a ComparisonEntry;
    type IntoIter = std::slice::Iter<'a, ComparisonEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// 같은 값을 카테고리의 나머지 단위 전부로 환산한다.
///
/// 기호가 `from_unit`과 같은 항목은 건너뛴다. 개별 단위의 변환 실패는 오류로
/// 올리지 않고 해당 항목만 결과에서 빠진다. 카테고리가 없을 때만 실패한다.
pub fn compare(
    registry: &Registry,
    value: f64,
    from_unit: &str,
    category: &str,
) -> Result<ComparisonSet, RegistryError> {
    let units = registry.units(category)?;
    let entries = units
        .iter()
        .filter(|u| u.symbol != from_unit)
        .filter_map(|u| {
            convert(value, from_unit, &u.symbol)
                .ok()
                .map(|v| ComparisonEntry {
                    name: u.name.clone(),
                    symbol: u.symbol.clone(),
                    value: v,
                })
        })
        .collect();
    Ok(ComparisonSet { entries })
}
