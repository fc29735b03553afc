use serde::{Deserialize, Serialize};

/// 면적 단위. 내부 기준은 제곱미터이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AreaUnit {
    SquareMeter,
    SquareKilometer,
    SquareCentimeter,
    SquareInch,
    SquareFoot,
    SquareYard,
    Acre,
    Hectare,
}

impl AreaUnit {
    pub fn from_symbol(s: &str) -> Option<Self> {
        match s {
            "m^2" | "m²" | "m2" | "sqm" => Some(AreaUnit::SquareMeter),
            "km^2" | "km²" | "km2" => Some(AreaUnit::SquareKilometer),
            "cm^2" | "cm²" | "cm2" => Some(AreaUnit::SquareCentimeter),
            "in^2" | "in²" | "in2" | "sqin" => Some(AreaUnit::SquareInch),
            "ft^2" | "ft²" | "ft2" | "sqft" => Some(AreaUnit::SquareFoot),
            "yd^2" | "yd²" | "yd2" | "sqyd" => Some(AreaUnit::SquareYard),
            "ac" | "acre" | "acres" => Some(AreaUnit::Acre),
            "ha" | "hectare" | "hectares" => Some(AreaUnit::Hectare),
            _ => None,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            AreaUnit::SquareMeter => "m^2",
            AreaUnit::SquareKilometer => "km^2",
            AreaUnit::SquareCentimeter => "cm^2",
            AreaUnit::SquareInch => "in^2",
            AreaUnit::SquareFoot => "ft^2",
            AreaUnit::SquareYard => "yd^2",
            AreaUnit::Acre => "ac",
            AreaUnit::Hectare => "ha",
        }
    }

    fn square_meters_per_unit(&self) -> f64 {
        match self {
            AreaUnit::SquareMeter => 1.0,
            AreaUnit::SquareKilometer => 1_000_000.0,
            AreaUnit::SquareCentimeter => 1e-4,
            AreaUnit::SquareInch => 0.000_645_16,
            AreaUnit::SquareFoot => 0.092_903_04,
            AreaUnit::SquareYard => 0.836_127_36,
            AreaUnit::Acre => 4_046.856_422_4,
            AreaUnit::Hectare => 10_000.0,
        }
    }
}

fn to_square_meter(value: f64, unit: AreaUnit) -> f64 {
    value * unit.square_meters_per_unit()
}

fn from_square_meter(value: f64, unit: AreaUnit) -> f64 {
    value / unit.square_meters_per_unit()
}

/// 면적을 변환한다.
pub fn convert_area(value: f64, from: AreaUnit, to: AreaUnit) -> f64 {
    let m2 = to_square_meter(value, from);
    from_square_meter(m2, to)
}
