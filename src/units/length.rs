use serde::{Deserialize, Serialize};

const METERS_PER_LIGHT_YEAR: f64 = 9_460_730_472_580_800.0;

/// 길이 단위. 내부 기준은 미터이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LengthUnit {
    Meter,
    Kilometer,
    Centimeter,
    Millimeter,
    Inch,
    Foot,
    Yard,
    Mile,
    NauticalMile,
    LightYear,
}

impl LengthUnit {
    /// 단위 기호를 해석한다. 인식하지 못하면 None.
    pub fn from_symbol(s: &str) -> Option<Self> {
        match s {
            "m" | "meter" | "meters" | "metre" => Some(LengthUnit::Meter),
            "km" | "kilometer" | "kilometers" => Some(LengthUnit::Kilometer),
            "cm" | "centimeter" | "centimeters" => Some(LengthUnit::Centimeter),
            "mm" | "millimeter" | "millimeters" => Some(LengthUnit::Millimeter),
            "in" | "inch" | "inches" => Some(LengthUnit::Inch),
            "ft" | "foot" | "feet" => Some(LengthUnit::Foot),
            "yd" | "yard" | "yards" => Some(LengthUnit::Yard),
            "mi" | "mile" | "miles" => Some(LengthUnit::Mile),
            "nmi" | "nautical_mile" => Some(LengthUnit::NauticalMile),
            "ly" | "light_year" => Some(LengthUnit::LightYear),
            _ => None,
        }
    }

    /// 대표 기호.
    pub fn symbol(&self) -> &'static str {
        match self {
            LengthUnit::Meter => "m",
            LengthUnit::Kilometer => "km",
            LengthUnit::Centimeter => "cm",
            LengthUnit::Millimeter => "mm",
            LengthUnit::Inch => "in",
            LengthUnit::Foot => "ft",
            LengthUnit::Yard => "yd",
            LengthUnit::Mile => "mi",
            LengthUnit::NauticalMile => "nmi",
            LengthUnit::LightYear => "ly",
        }
    }

    fn meters_per_unit(&self) -> f64 {
        match self {
            LengthUnit::Meter => 1.0,
            LengthUnit::Kilometer => 1000.0,
            LengthUnit::Centimeter => 0.01,
            LengthUnit::Millimeter => 0.001,
            LengthUnit::Inch => 0.0254,
            LengthUnit::Foot => 0.3048,
            LengthUnit::Yard => 0.9144,
            LengthUnit::Mile => 1609.344,
            LengthUnit::NauticalMile => 1852.0,
            LengthUnit::LightYear => METERS_PER_LIGHT_YEAR,
        }
    }
}

fn to_meter(value: f64, unit: LengthUnit) -> f64 {
    value * unit.meters_per_unit()
}

fn from_meter(value_m: f64, unit: LengthUnit) -> f64 {
    value_m / unit.meters_per_unit()
}

/// 길이를 다른 단위로 변환한다.
pub fn convert_length(value: f64, from: LengthUnit, to: LengthUnit) -> f64 {
    let m = to_meter(value, from);
    from_meter(m, to)
}
