//! 단위 정의 및 변환 모듈 모음.

pub mod area;
pub mod energy;
pub mod length;
pub mod mass;
pub mod power;
pub mod temperature;
pub mod velocity;
pub mod volume;

pub use area::{convert_area, AreaUnit};
pub use energy::{convert_energy, EnergyUnit};
pub use length::{convert_length, LengthUnit};
pub use mass::{convert_mass, MassUnit};
pub use power::{convert_power, PowerUnit};
pub use temperature::{convert_temperature, TemperatureUnit};
pub use velocity::{convert_velocity, VelocityUnit};
pub use volume::{convert_volume, VolumeUnit};

use crate::quantity::QuantityKind;

/// 차원 정보를 포함한 해석된 단위.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unit {
    Length(LengthUnit),
    Mass(MassUnit),
    Temperature(TemperatureUnit),
    Volume(VolumeUnit),
    Area(AreaUnit),
    Velocity(VelocityUnit),
    Energy(EnergyUnit),
    Power(PowerUnit),
}

impl Unit {
    /// 단위 기호(`m`, `degC`, `m^3`, `km/h` 등)를 해석한다.
    ///
    /// 앞뒤 공백은 무시하며 대소문자는 구분한다(`MW`와 `mW`는 다른 단위).
    pub fn parse(symbol: &str) -> Option<Unit> {
        let s = symbol.trim();
        if s.is_empty() {
            return None;
        }
        LengthUnit::from_symbol(s)
            .map(Unit::Length)
            .or_else(|| MassUnit::from_symbol(s).map(Unit::Mass))
            .or_else(|| TemperatureUnit::from_symbol(s).map(Unit::Temperature))
            .or_else(|| VolumeUnit::from_symbol(s).map(Unit::Volume))
            .or_else(|| AreaUnit::from_symbol(s).map(Unit::Area))
            .or_else(|| VelocityUnit::from_symbol(s).map(Unit::Velocity))
            .or_else(|| EnergyUnit::from_symbol(s).map(Unit::Energy))
            .or_else(|| PowerUnit::from_symbol(s).map(Unit::Power))
    }

    pub fn kind(&self) -> QuantityKind {
        match self {
            Unit::Length(_) => QuantityKind::Length,
            Unit::Mass(_) => QuantityKind::Mass,
            Unit::Temperature(_) => QuantityKind::Temperature,
            Unit::Volume(_) => QuantityKind::Volume,
            Unit::Area(_) => QuantityKind::Area,
            Unit::Velocity(_) => QuantityKind::Velocity,
            Unit::Energy(_) => QuantityKind::Energy,
            Unit::Power(_) => QuantityKind::Power,
        }
    }

    /// 대표 기호를 반환한다. 별칭으로 해석한 단위도 대표 기호로 정규화된다.
    pub fn symbol(&self) -> &'static str {
        match self {
            Unit::Length(u) => u.symbol(),
            Unit::Mass(u) => u.symbol(),
            Unit::Temperature(u) => u.symbol(),
            Unit::Volume(u) => u.symbol(),
            Unit::Area(u) => u.symbol(),
            Unit::Velocity(u) => u.symbol(),
            Unit::Energy(u) => u.symbol(),
            Unit::Power(u) => u.symbol(),
        }
    }
}
