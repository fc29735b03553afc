//! 카테고리별 단위 표와 프리셋 표.
//!
//! 표는 고정 데이터이며 기호 해석/차원 검사는 변환 엔진이 호출 시점에 한다.
//! 내장 표 대신 TOML 파일에서 불러올 수도 있다.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::preset::{parse_preset, PresetParseError};
use crate::units::Unit;

const BUILTIN_UNITS: &[(&str, &[(&str, &str)])] = &[
    (
        "Length",
        &[
            ("meters", "m"),
            ("kilometers", "km"),
            ("centimeters", "cm"),
            ("millimeters", "mm"),
            ("inches", "in"),
            ("feet", "ft"),
            ("yards", "yd"),
            ("miles", "mi"),
            ("nautical miles", "nmi"),
            ("light years", "ly"),
        ],
    ),
    (
        "Weight",
        &[
            ("kilograms", "kg"),
            ("grams", "g"),
            ("milligrams", "mg"),
            ("pounds", "lb"),
            ("ounces", "oz"),
            ("metric tons", "t"),
            ("carats", "ct"),
        ],
    ),
    (
        "Temperature",
        &[
            ("celsius", "degC"),
            ("fahrenheit", "degF"),
            ("kelvin", "K"),
            ("rankine", "degR"),
        ],
    ),
    (
        "Volume",
        &[
            ("liters", "L"),
            ("milliliters", "mL"),
            ("cubic meters", "m^3"),
            ("gallons", "gal"),
            ("quarts", "qt"),
            ("pints", "pt"),
            ("cups", "cup"),
            ("fluid ounces", "fl_oz"),
            ("cubic feet", "ft^3"),
            ("cubic inches", "in^3"),
        ],
    ),
    (
        "Area",
        &[
            ("square meters", "m^2"),
            ("square kilometers", "km^2"),
            ("square centimeters", "cm^2"),
            ("square inches", "in^2"),
            ("square feet", "ft^2"),
            ("square yards", "yd^2"),
            ("acres", "ac"),
            ("hectares", "ha"),
        ],
    ),
    (
        "Speed",
        &[
            ("meters per second", "m/s"),
            ("kilometers per hour", "km/h"),
            ("miles per hour", "mph"),
            ("knots", "knot"),
            ("feet per second", "ft/s"),
        ],
    ),
    (
        "Energy",
        &[
            ("joules", "J"),
            ("kilojoules", "kJ"),
            ("calories", "cal"),
            ("kilocalories", "kcal"),
            ("watt hours", "W*h"),
            ("electron volts", "eV"),
        ],
    ),
    (
        "Power",
        &[
            ("watts", "W"),
            ("kilowatts", "kW"),
            ("megawatts", "MW"),
            ("horsepower", "hp"),
            ("BTU per hour", "BTU/h"),
        ],
    ),
];

const BUILTIN_PRESETS: &[(&str, &[(&str, &str)])] = &[
    (
        "Common Lengths",
        &[
            ("Human Height (5'10\")", "1.78 m"),
            ("Football Field", "91.44 m"),
            ("Marathon", "42.195 km"),
            ("Earth Diameter", "12742 km"),
        ],
    ),
    (
        "Common Temperatures",
        &[
            ("Room Temperature", "20 °C"),
            ("Body Temperature", "37 °C"),
            ("Water Boiling Point", "100 °C"),
            ("Absolute Zero", "0 K"),
        ],
    ),
    (
        "Common Volumes",
        &[
            ("Water Bottle", "500 mL"),
            ("Soda Can", "330 mL"),
            ("Gallon of Milk", "3.785 L"),
            ("Olympic Pool", "2500000 L"),
        ],
    ),
];

static BUILTIN: Lazy<Registry> = Lazy::new(|| {
    let categories = BUILTIN_UNITS
        .iter()
        .map(|(id, units)| UnitCategory {
            id: id.to_string(),
            units: units
                .iter()
                .map(|(name, symbol)| UnitEntry::new(*name, *symbol))
                .collect(),
        })
        .collect();
    let presets = BUILTIN_PRESETS
        .iter()
        .map(|(id, presets)| PresetCategory {
            id: id.to_string(),
            presets: presets
                .iter()
                .map(|(label, literal)| PresetEntry::new(*label, *literal))
                .collect(),
        })
        .collect();
    Registry::new(categories, presets)
});

/// 레지스트리 조회/로드 오류.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// 등록되지 않은 카테고리
    #[error("알 수 없는 카테고리: {0}")]
    UnknownCategory(String),
    /// 등록되지 않은 프리셋 카테고리
    #[error("알 수 없는 프리셋 카테고리: {0}")]
    UnknownPresetCategory(String),
    /// 프리셋 표의 데이터 오류 (로드 시점 검사)
    #[error("잘못된 프리셋 {category}/{label}: {reason}")]
    InvalidPreset {
        category: String,
        label: String,
        reason: String,
    },
    /// 카테고리가 하나도 없는 표
    #[error("단위 카테고리가 비어 있습니다")]
    NoCategories,
    /// 한 카테고리 안에서 겹치는 표시 이름
    #[error("카테고리 {category}에 같은 이름의 단위가 있습니다: {name}")]
    DuplicateUnitName { category: String, name: String },
    /// 파일 입출력 오류
    #[error("파일 입출력 오류: {0}")]
    Io(#[from] std::io::Error),
    /// TOML 역직렬화 오류
    #[error("레지스트리 파싱 오류: {0}")]
    Parse(#[from] toml::de::Error),
}

/// 표시 이름과 단위 기호의 쌍.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnitEntry {
    pub name: String,
    pub symbol: String,
}

impl UnitEntry {
    pub fn new(name: impl Into<String>, symbol: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            symbol: symbol.into(),
        }
    }
}

/// 같은 물리 차원을 공유하는 단위 묶음. `units`는 선언 순서를 유지한다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnitCategory {
    pub id: String,
    pub units: Vec<UnitEntry>,
}

impl UnitCategory {
    /// 표시 이름으로 단위 기호를 찾는다.
    pub fn symbol_of(&self, name: &str) -> Option<&str> {
        self.units
            .iter()
            .find(|u| u.name == name)
            .map(|u| u.symbol.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PresetEntry {
    pub label: String,
    pub literal: String,
}

impl PresetEntry {
    pub fn new(label: impl Into<String>, literal: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            literal: literal.into(),
        }
    }

    /// 프리셋 문자열을 (값, 단위 토큰)으로 해석한다.
    pub fn parse(&self) -> Result<(f64, String), PresetParseError> {
        parse_preset(&self.literal)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PresetCategory {
    pub id: String,
    #[serde(default)]
    pub presets: Vec<PresetEntry>,
}

/// 카테고리 표와 프리셋 표. 생성 이후에는 변경하지 않는다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Registry {
    categories: Vec<UnitCategory>,
    #[serde(default)]
    presets: Vec<PresetCategory>,
}

impl Registry {
    pub fn new(categories: Vec<UnitCategory>, presets: Vec<PresetCategory>) -> Self {
        Self {
            categories,
            presets,
        }
    }

    /// 내장 단위/프리셋 표.
    pub fn builtin() -> &'static Registry {
        &BUILTIN
    }

    /// TOML 문자열에서 레지스트리를 만든다.
    ///
    /// ```toml
    /// [[categories]]
    /// id = "Length"
    /// units = [{ name = "meters", symbol = "m" }, { name = "feet", symbol = "ft" }]
    ///
    /// [[presets]]
    /// id = "Common Lengths"
    /// presets = [{ label = "Marathon", literal = "42.195 km" }]
    /// ```
    pub fn from_toml_str(src: &str) -> Result<Self, RegistryError> {
        Ok(toml::from_str(src)?)
    }

    /// TOML 파일을 읽어 레지스트리를 만들고 프리셋을 검증한다.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, RegistryError> {
        let content = fs::read_to_string(path)?;
        let registry = Self::from_toml_str(&content)?;
        registry.validate()?;
        Ok(registry)
    }

    /// 카테고리 식별자 목록 (선언 순서).
    pub fn categories(&self) -> Vec<&str> {
        self.categories.iter().map(|c| c.id.as_str()).collect()
    }

    pub fn category(&self, id: &str) -> Result<&UnitCategory, RegistryError> {
        self.categories
            .iter()
            .find(|c| c.id == id)
            .ok_or_else(|| RegistryError::UnknownCategory(id.to_string()))
    }

    /// 카테고리에 속한 (표시 이름, 단위 기호) 목록.
    pub fn units(&self, category: &str) -> Result<&[UnitEntry], RegistryError> {
        self.category(category).map(|c| c.units.as_slice())
    }

    pub fn preset_categories(&self) -> Vec<&str> {
        self.presets.iter().map(|p| p.id.as_str()).collect()
    }

    /// 프리셋 카테고리의 (라벨, 프리셋 문자열) 목록.
    pub fn presets(&self, preset_category: &str) -> Result<&[PresetEntry], RegistryError> {
        self.presets
            .iter()
            .find(|p| p.id == preset_category)
            .map(|p| p.presets.as_slice())
            .ok_or_else(|| RegistryError::UnknownPresetCategory(preset_category.to_string()))
    }

    /// 주어진 기호와 같은 단위를 담고 있는 첫 번째 카테고리.
    ///
    /// `°C`처럼 표의 기호(`degC`)와 다른 별칭도 같은 단위로 해석되면 찾는다.
    pub fn category_for_symbol(&self, symbol: &str) -> Option<&UnitCategory> {
        let target = Unit::parse(symbol)?;
        self.categories.iter().find(|c| {
            c.units
                .iter()
                .any(|u| Unit::parse(&u.symbol) == Some(target))
        })
    }

    /// 표의 데이터 결함을 확인한다. 시작 시 한 번 검사한다.
    ///
    /// - 카테고리가 하나 이상 있어야 한다.
    /// - 카테고리 안의 표시 이름은 서로 달라야 한다.
    /// - 모든 프리셋 문자열이 형식에 맞고 단위를 해석할 수 있어야 한다.
    pub fn validate(&self) -> Result<(), RegistryError> {
        if self.categories.is_empty() {
            return Err(RegistryError::NoCategories);
        }
        for category in &self.categories {
            let mut seen = HashSet::new();
            if let Some(dup) = category.units.iter().find(|u| !seen.insert(u.name.as_str())) {
                return Err(RegistryError::DuplicateUnitName {
                    category: category.id.clone(),
                    name: dup.name.clone(),
                });
            }
        }
        for category in &self.presets {
            for preset in &category.presets {
                let invalid = |reason: String| RegistryError::InvalidPreset {
                    category: category.id.clone(),
                    label: preset.label.clone(),
                    reason,
                };
                let (_, unit) = preset.parse().map_err(|e| invalid(e.to_string()))?;
                if Unit::parse(&unit).is_none() {
                    return Err(invalid(format!("알 수 없는 단위: {unit}")));
                }
            }
        }
        Ok(())
    }
}
