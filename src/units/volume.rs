use serde::{Deserialize, Serialize};

/// US 액량 갤런 (231 in³).
const CUBIC_METERS_PER_GALLON: f64 = 0.003_785_411_784;

/// 체적 단위. 내부 기준은 입방미터이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VolumeUnit {
    Liter,
    Milliliter,
    CubicMeter,
    Gallon,
    Quart,
    Pint,
    Cup,
    FluidOunce,
    CubicFoot,
    CubicInch,
}

impl VolumeUnit {
    pub fn from_symbol(s: &str) -> Option<Self> {
        match s {
            "L" | "l" | "liter" | "liters" | "litre" => Some(VolumeUnit::Liter),
            "mL" | "ml" | "milliliter" | "milliliters" => Some(VolumeUnit::Milliliter),
            "m^3" | "m³" | "m3" | "cubic_meter" => Some(VolumeUnit::CubicMeter),
            "gal" | "gallon" | "gallons" => Some(VolumeUnit::Gallon),
            "qt" | "quart" | "quarts" => Some(VolumeUnit::Quart),
            "pt" | "pint" | "pints" => Some(VolumeUnit::Pint),
            "cup" | "cups" => Some(VolumeUnit::Cup),
            "fl_oz" | "floz" | "fluid_ounce" => Some(VolumeUnit::FluidOunce),
            "ft^3" | "ft³" | "ft3" | "cuft" => Some(VolumeUnit::CubicFoot),
            "in^3" | "in³" | "in3" | "cuin" => Some(VolumeUnit::CubicInch),
            _ => None,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            VolumeUnit::Liter => "L",
            VolumeUnit::Milliliter => "mL",
            VolumeUnit::CubicMeter => "m^3",
            VolumeUnit::Gallon => "gal",
            VolumeUnit::Quart => "qt",
            VolumeUnit::Pint => "pt",
            VolumeUnit::Cup => "cup",
            VolumeUnit::FluidOunce => "fl_oz",
            VolumeUnit::CubicFoot => "ft^3",
            VolumeUnit::CubicInch => "in^3",
        }
    }

    fn cubic_meters_per_unit(&self) -> f64 {
        match self {
            VolumeUnit::Liter => 0.001,
            VolumeUnit::Milliliter => 1e-6,
            VolumeUnit::CubicMeter => 1.0,
            VolumeUnit::Gallon => CUBIC_METERS_PER_GALLON,
            VolumeUnit::Quart => CUBIC_METERS_PER_GALLON / 4.0,
            VolumeUnit::Pint => CUBIC_METERS_PER_GALLON / 8.0,
            VolumeUnit::Cup => CUBIC_METERS_PER_GALLON / 16.0,
            VolumeUnit::FluidOunce => CUBIC_METERS_PER_GALLON / 128.0,
            VolumeUnit::CubicFoot => 0.028_316_846_592,
            VolumeUnit::CubicInch => 1.638_706_4e-5,
        }
    }
}

fn to_cubic_meter(value: f64, unit: VolumeUnit) -> f64 {
    value * unit.cubic_meters_per_unit()
}

fn from_cubic_meter(value: f64, unit: VolumeUnit) -> f64 {
    value / unit.cubic_meters_per_unit()
}

/// 체적을 변환한다.
pub fn convert_volume(value: f64, from: VolumeUnit, to: VolumeUnit) -> f64 {
    let m3 = to_cubic_meter(value, from);
    from_cubic_meter(m3, to)
}
