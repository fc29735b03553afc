use serde::{Deserialize, Serialize};

/// 기계식 마력 (550 ft·lbf/s).
const WATTS_PER_HORSEPOWER: f64 = 745.699_871_582_270_2;
/// 국제 증기표 BTU 기준 BTU/h.
const WATTS_PER_BTU_PER_HOUR: f64 = 1055.056 / 3600.0;

/// 동력 단위. 내부 기준은 W이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PowerUnit {
    Watt,
    Kilowatt,
    Megawatt,
    Horsepower,
    BtuPerHour,
}

impl PowerUnit {
    pub fn from_symbol(s: &str) -> Option<Self> {
        match s {
            "W" | "watt" | "watts" => Some(PowerUnit::Watt),
            "kW" | "kilowatt" | "kilowatts" => Some(PowerUnit::Kilowatt),
            "MW" | "megawatt" | "megawatts" => Some(PowerUnit::Megawatt),
            "hp" | "horsepower" => Some(PowerUnit::Horsepower),
            "BTU/h" | "Btu/h" | "BTU/hr" | "btu/h" => Some(PowerUnit::BtuPerHour),
            _ => None,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            PowerUnit::Watt => "W",
            PowerUnit::Kilowatt => "kW",
            PowerUnit::Megawatt => "MW",
            PowerUnit::Horsepower => "hp",
            PowerUnit::BtuPerHour => "BTU/h",
        }
    }
}

fn to_watt(value: f64, unit: PowerUnit) -> f64 {
    match unit {
        PowerUnit::Watt => value,
        PowerUnit::Kilowatt => value * 1000.0,
        PowerUnit::Megawatt => value * 1_000_000.0,
        PowerUnit::Horsepower => value * WATTS_PER_HORSEPOWER,
        PowerUnit::BtuPerHour => value * WATTS_PER_BTU_PER_HOUR,
    }
}

fn from_watt(value: f64, unit: PowerUnit) -> f64 {
    match unit {
        PowerUnit::Watt => value,
        PowerUnit::Kilowatt => value / 1000.0,
        PowerUnit::Megawatt => value / 1_000_000.0,
        PowerUnit::Horsepower => value / WATTS_PER_HORSEPOWER,
        PowerUnit::BtuPerHour => value / WATTS_PER_BTU_PER_HOUR,
    }
}

/// 동력을 변환한다.
pub fn convert_power(value: f64, from: PowerUnit, to: PowerUnit) -> f64 {
    let w = to_watt(value, from);
    from_watt(w, to)
}
