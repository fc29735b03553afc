use serde::{Deserialize, Serialize};

const KG_PER_POUND: f64 = 0.453_592_37;

/// 질량 단위. 내부 기준은 kg이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MassUnit {
    Kilogram,
    Gram,
    Milligram,
    Pound,
    Ounce,
    MetricTon,
    Carat,
}

impl MassUnit {
    pub fn from_symbol(s: &str) -> Option<Self> {
        match s {
            "kg" | "kilogram" | "kilograms" => Some(MassUnit::Kilogram),
            "g" | "gram" | "grams" => Some(MassUnit::Gram),
            "mg" | "milligram" | "milligrams" => Some(MassUnit::Milligram),
            "lb" | "lbs" | "lbm" | "pound" | "pounds" => Some(MassUnit::Pound),
            "oz" | "ounce" | "ounces" => Some(MassUnit::Ounce),
            "t" | "tonne" | "metric_ton" => Some(MassUnit::MetricTon),
            "ct" | "carat" | "carats" => Some(MassUnit::Carat),
            _ => None,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            MassUnit::Kilogram => "kg",
            MassUnit::Gram => "g",
            MassUnit::Milligram => "mg",
            MassUnit::Pound => "lb",
            MassUnit::Ounce => "oz",
            MassUnit::MetricTon => "t",
            MassUnit::Carat => "ct",
        }
    }
}

fn to_kg(value: f64, unit: MassUnit) -> f64 {
    match unit {
        MassUnit::Kilogram => value,
        MassUnit::Gram => value / 1000.0,
        MassUnit::Milligram => value / 1_000_000.0,
        MassUnit::Pound => value * KG_PER_POUND,
        MassUnit::Ounce => value * KG_PER_POUND / 16.0,
        MassUnit::MetricTon => value * 1000.0,
        MassUnit::Carat => value * 0.0002,
    }
}

fn from_kg(value: f64, unit: MassUnit) -> f64 {
    match unit {
        MassUnit::Kilogram => value,
        MassUnit::Gram => value * 1000.0,
        MassUnit::Milligram => value * 1_000_000.0,
        MassUnit::Pound => value / KG_PER_POUND,
        MassUnit::Ounce => value * 16.0 / KG_PER_POUND,
        MassUnit::MetricTon => value / 1000.0,
        MassUnit::Carat => value / 0.0002,
    }
}

/// 질량을 변환한다.
pub fn convert_mass(value: f64, from: MassUnit, to: MassUnit) -> f64 {
    let base = to_kg(value, from);
    from_kg(base, to)
}
