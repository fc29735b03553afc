use std::fmt;

use serde::{Deserialize, Serialize};

/// 다루는 물리량(차원) 종류를 나타낸다.
///
/// 같은 kind에 속한 단위끼리만 서로 변환할 수 있다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum QuantityKind {
    Length,
    Mass,
    Temperature,
    Volume,
    Area,
    Velocity,
    Energy,
    Power,
}

impl QuantityKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            QuantityKind::Length => "length",
            QuantityKind::Mass => "mass",
            QuantityKind::Temperature => "temperature",
            QuantityKind::Volume => "volume",
            QuantityKind::Area => "area",
            QuantityKind::Velocity => "velocity",
            QuantityKind::Energy => "energy",
            QuantityKind::Power => "power",
        }
    }
}

impl fmt::Display for QuantityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
